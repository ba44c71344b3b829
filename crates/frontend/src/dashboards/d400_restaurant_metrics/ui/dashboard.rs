use leptos::prelude::*;

use super::metric_cards::{
    DayOrdersAmountCard, MonthCanceledOrdersAmountCard, MonthOrdersAmountCard, MonthRevenueCard,
};
use super::popular_products::PopularProducts;
use super::revenue_chart::RevenueChart;

/// Restaurant metrics dashboard
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Главная"</h1>
            </div>
            <div class="stat-cards">
                <MonthRevenueCard />
                <DayOrdersAmountCard />
                <MonthOrdersAmountCard />
                <MonthCanceledOrdersAmountCard />
            </div>
            <div class="dashboard-grid">
                <RevenueChart />
                <PopularProducts />
            </div>
        </div>
    }
}
