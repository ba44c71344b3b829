pub mod header;
pub mod notifications;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::system::auth::session::SessionGuard;

/// Каркас страниц панели.
///
/// ```text
/// +------------------------------------------+
/// |  Header: навигация      | AccountMenu     |
/// +------------------------------------------+
/// |                 Outlet                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <SessionGuard>
            <div class="app-layout">
                <header::Header />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </SessionGuard>
    }
}

/// Каркас страниц входа и регистрации
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="auth-layout">
            <aside class="auth-layout__brand">
                <span class="auth-layout__logo">{crate::shared::icons::icon("pizza")}</span>
                <span>"pizza.shop"</span>
                <footer class="auth-layout__footer">"Панель партнёра"</footer>
            </aside>
            <div class="auth-layout__content">
                <Outlet />
            </div>
        </div>
    }
}
