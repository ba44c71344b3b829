mod filters;
pub mod row;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

use crate::domain::a002_order::filters::{derive_query, with_page};
use crate::domain::a002_order::use_order_lifecycle;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::query_cache::use_query_cache;
use crate::system::auth::session::use_error_reporter;
use filters::OrderTableFilters;
use row::OrderRow;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let navigate = StoredValue::new_local(use_navigate());
    let lifecycle = use_order_lifecycle();
    let cache = use_query_cache();
    let reporter = use_error_reporter();
    let per_page = use_config().orders_per_page;

    let query = Memo::new(move |_| derive_query(&search.get()));
    let loading = RwSignal::new(false);

    // Текущая страница берётся только из кэша: действия над заказами
    // обновляют её без повторной загрузки
    let page = Memo::new(move |_| {
        let query = query.get();
        cache.with(|c| c.orders(&query).cloned())
    });

    let load = move |refetch: bool| {
        let lifecycle = lifecycle.clone();
        let query = query.get_untracked();
        loading.set(true);
        spawn_local(async move {
            if let Err(e) = lifecycle.load_orders(&query, refetch).await {
                reporter.report(&e);
            }
            loading.set(false);
        });
    };

    let initial_load = load.clone();
    Effect::new(move |_| {
        query.track();
        initial_load(false);
    });

    let on_page_change = Callback::new(move |next: u32| {
        let path = format!("{}{}", pathname.get_untracked(), with_page(&search.get_untracked(), next));
        navigate.with_value(|navigate| navigate(&path, NavigateOptions::default()));
    });

    let current_page = Signal::derive(move || query.get().page);
    let total_pages = Signal::derive(move || {
        page.get()
            .map(|p| {
                if p.meta.per_page == 0 {
                    p.meta.total_count.div_ceil(per_page.max(1))
                } else {
                    p.meta.total_pages()
                }
            })
            .unwrap_or(0)
    });
    let total_count = Signal::derive(move || page.get().map(|p| p.meta.total_count).unwrap_or(0));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Заказы"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load(true)
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <OrderTableFilters query=query />

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=48.0>""</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Идентификатор"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Оформлен"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Статус"</TableHeaderCell>
                            <TableHeaderCell>"Клиент"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Сумма"</TableHeaderCell>
                            <TableHeaderCell min_width=220.0>"Действия"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || page.get().map(|p| p.orders).unwrap_or_default()
                            key=|order| (order.order_id.clone(), order.status)
                            children=move |order| view! { <OrderRow order=order /> }
                        />
                    </TableBody>
                </Table>

                <Show when=move || loading.get() && page.with(|p| p.is_none())>
                    <div class="page__loading"><Spinner /></div>
                </Show>
                <Show when=move || !loading.get() && page.with(|p| p.as_ref().is_some_and(|p| p.orders.is_empty()))>
                    <div class="page__empty">"Заказы не найдены"</div>
                </Show>

                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    total_count=total_count
                    on_page_change=on_page_change
                />
            </div>
        </div>
    }
}
