use crate::enums::order_status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка списка заказов (`GET /orders`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Сумма в копейках
    pub total: u64,
}

/// Метаданные пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListMeta {
    /// Номер страницы с нуля
    pub page_index: u32,
    pub per_page: u32,
    pub total_count: u32,
}

impl OrderListMeta {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.per_page)
    }
}

/// Ответ `GET /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub meta: OrderListMeta,
}

/// Покупатель в карточке заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub name: String,
}

/// Позиция заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub price_in_cents: u64,
    pub quantity: u32,
    pub product: OrderProduct,
}

impl OrderItem {
    pub fn subtotal_in_cents(&self) -> u64 {
        self.price_in_cents.saturating_mul(u64::from(self.quantity))
    }
}

/// Карточка заказа (`GET /orders/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total_in_cents: u64,
    pub customer: OrderCustomer,
    pub order_items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_list_response() {
        let body = r#"{
            "orders": [
                {
                    "orderId": "abc123",
                    "createdAt": "2024-03-15T14:02:26.123Z",
                    "status": "pending",
                    "customerName": "Иван Петров",
                    "total": 5000
                }
            ],
            "meta": { "pageIndex": 0, "perPage": 10, "totalCount": 31 }
        }"#;

        let response: OrderListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders[0].order_id, "abc123");
        assert_eq!(response.orders[0].status, OrderStatus::Pending);
        assert_eq!(response.orders[0].total, 5000);
        assert_eq!(response.meta.total_pages(), 4);
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let body = r#"{
            "orderId": "x",
            "createdAt": "2024-03-15T14:02:26Z",
            "status": "pending",
            "customerName": "x",
            "total": -1
        }"#;
        assert!(serde_json::from_str::<Order>(body).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let body = r#"{
            "orderId": "x",
            "createdAt": "2024-03-15T14:02:26Z",
            "status": "lost",
            "customerName": "x",
            "total": 1
        }"#;
        assert!(serde_json::from_str::<Order>(body).is_err());
    }

    #[test]
    fn test_item_subtotal() {
        let item = OrderItem {
            id: "i1".to_string(),
            price_in_cents: 2590,
            quantity: 3,
            product: OrderProduct {
                name: "Пицца Маргарита".to_string(),
            },
        };
        assert_eq!(item.subtotal_in_cents(), 7770);
    }

    #[test]
    fn test_item_subtotal_saturates() {
        let item = OrderItem {
            id: "i1".to_string(),
            price_in_cents: u64::MAX / 2,
            quantity: 3,
            product: OrderProduct {
                name: "x".to_string(),
            },
        };
        assert_eq!(item.subtotal_in_cents(), u64::MAX);
    }
}
