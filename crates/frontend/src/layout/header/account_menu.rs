use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::domain::a001_restaurant::ui::store_profile_dialog::StoreProfileDialog;
use crate::domain::a001_restaurant::use_restaurant_store;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::query_cache::{use_query_cache, QueryCache};
use crate::system::auth::api;
use crate::system::auth::session::{use_error_reporter, SIGN_IN_PATH};

/// Меню аккаунта: заведение, менеджер, профиль и выход
#[component]
pub fn AccountMenu() -> impl IntoView {
    let store = use_restaurant_store();
    let cache = use_query_cache();
    let config = use_config();
    let reporter = use_error_reporter();
    let navigate = StoredValue::new_local(use_navigate());

    let (is_open, set_is_open) = signal(false);
    let profile_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    spawn_local(async move {
        if let Err(e) = store.load_managed_restaurant().await {
            reporter.report(&e);
        }
        if let Err(e) = store.load_profile().await {
            reporter.report(&e);
        }
    });

    // Название читается из кэша, чтобы сразу видеть правки профиля
    let restaurant_name = move || cache.with(|c| c.managed_restaurant().map(|r| r.name.clone()));
    let profile = move || cache.with(|c| c.profile().cloned());

    let sign_out = move |_| {
        let config = config.clone();
        signing_out.set(true);
        spawn_local(async move {
            match api::sign_out(&config).await {
                Ok(()) => {
                    log::info!("Signed out");
                    cache.update(QueryCache::clear);
                    navigate.with_value(|navigate| {
                        navigate(
                            SIGN_IN_PATH,
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        )
                    });
                }
                Err(e) => reporter.report(&e),
            }
            signing_out.set(false);
        });
    };

    view! {
        <div class="account-menu" on:mouseleave=move |_| set_is_open.set(false)>
            <button
                class="account-menu__trigger"
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                {move || match restaurant_name() {
                    Some(name) => view! { <span>{name}</span> }.into_any(),
                    None => view! { <span class="skeleton skeleton--text"></span> }.into_any(),
                }}
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="account-menu__panel">
                    <div class="account-menu__profile">
                        {move || match profile() {
                            Some(profile) => view! {
                                <span class="account-menu__name">{profile.name}</span>
                                <span class="account-menu__email">{profile.email}</span>
                            }
                            .into_any(),
                            None => view! { <span class="skeleton skeleton--text"></span> }.into_any(),
                        }}
                    </div>
                    <button
                        class="account-menu__item"
                        on:click=move |_| {
                            set_is_open.set(false);
                            profile_open.set(true);
                        }
                    >
                        {icon("store")}
                        <span>"Профиль заведения"</span>
                    </button>
                    <button
                        class="account-menu__item account-menu__item--danger"
                        on:click=sign_out.clone()
                        disabled=move || signing_out.get()
                    >
                        {icon("log-out")}
                        <span>"Выйти"</span>
                    </button>
                </div>
            </Show>

            <StoreProfileDialog open=profile_open />
        </div>
    }
}
