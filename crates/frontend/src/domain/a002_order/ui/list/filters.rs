use contracts::domain::a002_order::{OrderListQuery, StatusFilter};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use thaw::*;

use crate::domain::a002_order::filters::{apply_filters, clear_filters, OrderFilterForm};
use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;

/// Панель фильтров списка заказов. Значения живут в адресной строке.
#[component]
pub fn OrderTableFilters(#[prop(into)] query: Signal<OrderListQuery>) -> impl IntoView {
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let navigate = StoredValue::new_local(use_navigate());
    let notifications = use_notifications();

    let order_id = RwSignal::new(String::new());
    let customer_name = RwSignal::new(String::new());
    let status = RwSignal::new(StatusFilter::All.code().to_string());

    // Форма повторяет адрес, в том числе при переходах назад/вперёд
    Effect::new(move |_| {
        let form = OrderFilterForm::from_query(&query.get());
        order_id.set(form.order_id);
        customer_name.set(form.customer_name);
        status.set(form.status);
    });

    let go = move |search: String| {
        let path = format!("{}{}", pathname.get_untracked(), search);
        navigate.with_value(|navigate| navigate(&path, NavigateOptions::default()));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = OrderFilterForm {
            order_id: order_id.get_untracked(),
            customer_name: customer_name.get_untracked(),
            status: status.get_untracked(),
        };
        match apply_filters(&search.get_untracked(), &form) {
            Ok(search) => go(search),
            Err(e) => notifications.error(&e),
        }
    };

    let on_clear = move |_| go(clear_filters(&search.get_untracked()));

    view! {
        <form class="order-filters" on:submit=on_submit>
            <span class="order-filters__label">"Фильтры:"</span>
            <Input value=order_id placeholder="ID заказа" />
            <Input value=customer_name placeholder="Имя клиента" />
            <Select value=status>
                {StatusFilter::options()
                    .into_iter()
                    .map(|filter| {
                        view! { <option value=filter.code()>{filter.display_name()}</option> }
                    })
                    .collect_view()}
            </Select>
            <button type="submit" class="button button--secondary">
                {icon("search")}
                "Применить"
            </button>
            <button
                type="button"
                class="button button--ghost"
                on:click=on_clear
                disabled=move || !query.get().has_filters()
            >
                {icon("x")}
                "Сбросить"
            </button>
        </form>
    }
}
