use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::dashboards::d400_restaurant_metrics::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::{use_config, AppConfig};
use crate::shared::error::AppError;
use crate::shared::number_format::{format_money_cents, format_thousands};
use crate::system::auth::session::use_error_reporter;

/// Загрузить показатель один раз при монтировании карточки
fn use_metric<T, Fut>(fetch: impl FnOnce(AppConfig) -> Fut + 'static) -> RwSignal<Option<T>>
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let config = use_config();
    let reporter = use_error_reporter();
    let value = RwSignal::new(None);

    spawn_local(async move {
        match fetch(config).await {
            Ok(loaded) => {
                value.try_set(Some(loaded));
            }
            Err(e) => reporter.report(&e),
        }
    });

    value
}

#[component]
pub fn MonthRevenueCard() -> impl IntoView {
    let metric = use_metric(|config| async move { api::get_month_receipt(&config).await });

    view! {
        <StatCard
            label="Выручка (₽ / месяц)"
            icon_name="money"
            value=Signal::derive(move || metric.get().map(|m| format_money_cents(m.receipt)))
            change_percent=Signal::derive(move || metric.get().map(|m| m.diff_from_last_month))
            change_caption="к прошлому месяцу"
        />
    }
}

#[component]
pub fn DayOrdersAmountCard() -> impl IntoView {
    let metric = use_metric(|config| async move { api::get_day_orders_amount(&config).await });

    view! {
        <StatCard
            label="Заказы (сегодня)"
            icon_name="orders"
            value=Signal::derive(move || metric.get().map(|m| format_thousands(m.amount)))
            change_percent=Signal::derive(move || metric.get().map(|m| m.diff_from_yesterday))
            change_caption="ко вчерашнему дню"
        />
    }
}

#[component]
pub fn MonthOrdersAmountCard() -> impl IntoView {
    let metric = use_metric(|config| async move { api::get_month_orders_amount(&config).await });

    view! {
        <StatCard
            label="Заказы (месяц)"
            icon_name="orders"
            value=Signal::derive(move || metric.get().map(|m| format_thousands(m.amount)))
            change_percent=Signal::derive(move || metric.get().map(|m| m.diff_from_last_month))
            change_caption="к прошлому месяцу"
        />
    }
}

#[component]
pub fn MonthCanceledOrdersAmountCard() -> impl IntoView {
    let metric =
        use_metric(|config| async move { api::get_month_canceled_orders_amount(&config).await });

    view! {
        <StatCard
            label="Отмены (месяц)"
            icon_name="x"
            value=Signal::derive(move || metric.get().map(|m| format_thousands(m.amount)))
            change_percent=Signal::derive(move || metric.get().map(|m| m.diff_from_last_month))
            change_caption="к прошлому месяцу"
            lower_is_better=true
        />
    }
}
