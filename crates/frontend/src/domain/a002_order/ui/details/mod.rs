use contracts::domain::a002_order::OrderDetails;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_order::ui::status_badge::OrderStatusBadge;
use crate::domain::a002_order::use_order_lifecycle;
use crate::shared::date_utils::format_relative;
use crate::shared::error::AppError;
use crate::shared::number_format::format_price_cents;
use crate::system::auth::session::use_error_reporter;

/// Карточка заказа в диалоге. Загружается при каждом открытии.
#[component]
pub fn OrderDetailsDialog(order_id: String, open: RwSignal<bool>) -> impl IntoView {
    let lifecycle = use_order_lifecycle();
    let reporter = use_error_reporter();

    let details = RwSignal::new(None::<OrderDetails>);
    let error = RwSignal::new(None::<AppError>);
    let loading = RwSignal::new(false);

    let title_id = order_id.clone();
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let lifecycle = lifecycle.clone();
        let order_id = order_id.clone();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match lifecycle.load_order_details(&order_id).await {
                Ok(loaded) => details.set(Some(loaded)),
                Err(e) => {
                    reporter.report(&e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    let body = move || {
        if loading.get() {
            return view! { <Spinner /> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <div class="error-message">{e.to_string()}</div> }.into_any();
        }
        match details.get() {
            Some(details) => view! { <OrderDetailsContent details=details /> }.into_any(),
            None => view! { <></> }.into_any(),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("Заказ: {}", title_id)}</DialogTitle>
                    <DialogContent>{body}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Закрыть"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Строка таблицы товаров, уже отформатированная
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub product: String,
    pub quantity: u32,
    pub price: String,
    pub subtotal: String,
}

pub fn item_lines(details: &OrderDetails) -> Vec<ItemLine> {
    details
        .order_items
        .iter()
        .map(|item| ItemLine {
            product: item.product.name.clone(),
            quantity: item.quantity,
            price: format_price_cents(item.price_in_cents),
            subtotal: format_price_cents(item.subtotal_in_cents()),
        })
        .collect()
}

#[component]
fn OrderDetailsContent(details: OrderDetails) -> impl IntoView {
    let now = chrono::Utc::now();
    let status = details.status;
    let created = format_relative(&details.created_at, &now);
    let total = format_price_cents(details.total_in_cents);
    let items = item_lines(&details)
        .into_iter()
        .map(|line| {
            view! {
                <TableRow>
                    <TableCell>{line.product}</TableCell>
                    <TableCell class="text-right">{line.quantity}</TableCell>
                    <TableCell class="text-right">{line.price}</TableCell>
                    <TableCell class="text-right">{line.subtotal}</TableCell>
                </TableRow>
            }
        })
        .collect_view();
    let customer = details.customer;
    let phone = customer.phone.unwrap_or_else(|| "Не указан".to_string());

    view! {
        <div class="order-details">
            <table class="order-details__summary">
                <tbody>
                    <tr>
                        <td class="text-muted">"Статус"</td>
                        <td><OrderStatusBadge status=status /></td>
                    </tr>
                    <tr>
                        <td class="text-muted">"Клиент"</td>
                        <td>{customer.name}</td>
                    </tr>
                    <tr>
                        <td class="text-muted">"Телефон"</td>
                        <td>{phone}</td>
                    </tr>
                    <tr>
                        <td class="text-muted">"E-mail"</td>
                        <td>{customer.email}</td>
                    </tr>
                    <tr>
                        <td class="text-muted">"Оформлен"</td>
                        <td>{created}</td>
                    </tr>
                </tbody>
            </table>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Товар"</TableHeaderCell>
                        <TableHeaderCell>"Кол-во"</TableHeaderCell>
                        <TableHeaderCell>"Цена"</TableHeaderCell>
                        <TableHeaderCell>"Сумма"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{items}</TableBody>
            </Table>

            <div class="order-details__total">
                <span>"Итого"</span>
                <strong>{total}</strong>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a002_order::{OrderCustomer, OrderItem, OrderProduct};
    use contracts::enums::OrderStatus;

    fn item(name: &str, price_in_cents: u64, quantity: u32) -> OrderItem {
        OrderItem {
            id: format!("item-{}", name),
            price_in_cents,
            quantity,
            product: OrderProduct {
                name: name.to_string(),
            },
        }
    }

    fn details(order_items: Vec<OrderItem>) -> OrderDetails {
        OrderDetails {
            id: "abc123".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap(),
            status: OrderStatus::Processing,
            total_in_cents: 10360,
            customer: OrderCustomer {
                name: "Anna".to_string(),
                email: "anna@example.com".to_string(),
                phone: None,
            },
            order_items,
        }
    }

    #[test]
    fn test_item_lines_are_formatted() {
        let lines = item_lines(&details(vec![item("Маргарита", 2590, 3), item("Кола", 2590, 1)]));
        assert_eq!(
            lines,
            vec![
                ItemLine {
                    product: "Маргарита".to_string(),
                    quantity: 3,
                    price: "25.90 ₽".to_string(),
                    subtotal: "77.70 ₽".to_string(),
                },
                ItemLine {
                    product: "Кола".to_string(),
                    quantity: 1,
                    price: "25.90 ₽".to_string(),
                    subtotal: "25.90 ₽".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_huge_amounts_do_not_wrap() {
        let lines = item_lines(&details(vec![item("Всё меню", u64::MAX, 2)]));
        assert!(!lines[0].price.starts_with('-'));
        assert!(!lines[0].subtotal.starts_with('-'));
    }
}
