use crate::dashboards::DashboardPage;
use crate::domain::a002_order::ui::list::OrdersPage;
use crate::layout::{AppLayout, AuthLayout};
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::sign_in::SignInPage;
use crate::system::pages::sign_up::SignUpPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <ParentRoute path=path!("") view=AppLayout>
                    <Route path=path!("") view=DashboardPage />
                    <Route path=path!("orders") view=OrdersPage />
                </ParentRoute>
                <ParentRoute path=path!("") view=AuthLayout>
                    <Route path=path!("sign-in") view=SignInPage />
                    <Route path=path!("sign-up") view=SignUpPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
