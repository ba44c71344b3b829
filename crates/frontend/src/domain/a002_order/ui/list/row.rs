use contracts::domain::a002_order::Order;
use contracts::enums::{OrderAction, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_order::ui::details::OrderDetailsDialog;
use crate::domain::a002_order::ui::status_badge::OrderStatusBadge;
use crate::domain::a002_order::use_order_lifecycle;
use crate::layout::notifications::use_notifications;
use crate::shared::date_utils::format_relative;
use crate::shared::icons::icon;
use crate::shared::number_format::format_price_cents;
use crate::shared::query_cache::use_query_cache;
use crate::system::auth::session::use_error_reporter;

/// Кнопки, которые показываются в строке заказа
pub fn row_actions(status: OrderStatus) -> Vec<OrderAction> {
    status.available_actions().to_vec()
}

fn action_icon(action: OrderAction) -> &'static str {
    match action {
        OrderAction::Approve => "check",
        OrderAction::Dispatch => "truck",
        OrderAction::Deliver => "arrow-right",
        OrderAction::Cancel => "x",
    }
}

fn action_appearance(action: OrderAction) -> ButtonAppearance {
    match action {
        OrderAction::Cancel => ButtonAppearance::Subtle,
        _ => ButtonAppearance::Secondary,
    }
}

/// Строка таблицы заказов
///
/// Строка пересоздаётся при смене статуса (ключ списка включает статус),
/// поэтому набор кнопок вычисляется один раз.
#[component]
pub fn OrderRow(order: Order) -> impl IntoView {
    let lifecycle = use_order_lifecycle();
    let cache = use_query_cache();
    let notifications = use_notifications();
    let reporter = use_error_reporter();
    let details_open = RwSignal::new(false);

    let order_id = order.order_id.clone();
    let busy = {
        let order_id = order_id.clone();
        Signal::derive(move || cache.with(|c| c.is_mutating(&order_id)))
    };

    let now = chrono::Utc::now();
    let actions = row_actions(order.status)
        .into_iter()
        .map(|action| {
            let lifecycle = lifecycle.clone();
            let order_id = order_id.clone();
            view! {
                <Button
                    appearance=action_appearance(action)
                    size=ButtonSize::Small
                    disabled=busy
                    on_click=move |_| {
                        let lifecycle = lifecycle.clone();
                        let order_id = order_id.clone();
                        spawn_local(async move {
                            match lifecycle.perform(action, &order_id).await {
                                Ok(status) => notifications.success(format!(
                                    "Заказ {}: {}",
                                    order_id,
                                    status.display_name()
                                )),
                                Err(e) => reporter.report(&e),
                            }
                        });
                    }
                >
                    {icon(action_icon(action))}
                    {action.display_name()}
                </Button>
            }
        })
        .collect_view();

    let dialog_id = order_id.clone();
    let created = format_relative(&order.created_at, &now);
    let total = format_price_cents(order.total);
    view! {
        <TableRow>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Transparent
                    size=ButtonSize::Small
                    on_click=move |_| details_open.set(true)
                    attr:title="Детали заказа"
                >
                    {icon("search")}
                </Button>
                <OrderDetailsDialog order_id=dialog_id open=details_open />
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <code>{order_id}</code>
                </TableCellLayout>
            </TableCell>
            <TableCell>{created}</TableCell>
            <TableCell>
                <OrderStatusBadge status=order.status />
            </TableCell>
            <TableCell>{order.customer_name}</TableCell>
            <TableCell class="text-right">{total}</TableCell>
            <TableCell>
                <div class="order-actions">{actions}</div>
            </TableCell>
        </TableRow>
    }
}
