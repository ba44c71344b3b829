use crate::layout::header::AccountMenu;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn NavLink(href: &'static str, icon_name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href exact=true attr:class="nav-link">
            {icon(icon_name)}
            <span>{label}</span>
        </A>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icon("pizza")}</span>
                <nav class="header__nav">
                    <NavLink href="/" icon_name="home" label="Главная" />
                    <NavLink href="/orders" icon_name="orders" label="Заказы" />
                </nav>
            </div>
            <div class="header__actions">
                <AccountMenu />
            </div>
        </header>
    }
}
