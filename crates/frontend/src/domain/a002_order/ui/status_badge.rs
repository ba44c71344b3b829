use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// Вариант бейджа для статуса заказа
pub fn badge_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "neutral",
        OrderStatus::Processing => "warning",
        OrderStatus::Delivering => "primary",
        OrderStatus::Delivered => "success",
        OrderStatus::Canceled => "error",
    }
}

/// Badge component for order status
#[component]
pub fn OrderStatusBadge(
    #[prop(into)]
    status: Signal<OrderStatus>,
) -> impl IntoView {
    let class = move || format!("badge badge--status badge--{}", badge_variant(status.get()));

    view! {
        <span class=class>
            <span class="badge__dot" aria-hidden="true"></span>
            {move || status.get().display_name()}
        </span>
    }
}
