use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Статусы заказа
///
/// Жизненный цикл:
/// ```text
/// pending ──approve──▶ processing ──dispatch──▶ delivering ──deliver──▶ delivered
///    │                     │
///    └──────cancel─────────┴──────▶ canceled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Delivering,
    Delivered,
    Canceled,
}

impl OrderStatus {
    /// Код статуса (значение в API и в адресной строке)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Ожидает",
            OrderStatus::Processing => "Готовится",
            OrderStatus::Delivering => "В доставке",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Canceled => "Отменён",
        }
    }

    /// Все статусы в порядке жизненного цикла
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Delivering,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "delivering" => Some(OrderStatus::Delivering),
            "delivered" => Some(OrderStatus::Delivered),
            "canceled" => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    /// Действия, доступные из этого статуса
    pub fn available_actions(&self) -> &'static [OrderAction] {
        match self {
            OrderStatus::Pending => &[OrderAction::Approve, OrderAction::Cancel],
            OrderStatus::Processing => &[OrderAction::Dispatch, OrderAction::Cancel],
            OrderStatus::Delivering => &[OrderAction::Deliver],
            OrderStatus::Delivered | OrderStatus::Canceled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.available_actions().is_empty()
    }

    /// Результат применения действия, `None` если переход запрещён
    pub fn transition(&self, action: OrderAction) -> Option<OrderStatus> {
        if self.available_actions().contains(&action) {
            Some(action.target_status())
        } else {
            None
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// Действия над заказом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Approve,
    Dispatch,
    Deliver,
    Cancel,
}

impl OrderAction {
    /// Сегмент пути в API: `PATCH /orders/{id}/{code}`
    pub fn code(&self) -> &'static str {
        match self {
            OrderAction::Approve => "approve",
            OrderAction::Dispatch => "dispatch",
            OrderAction::Deliver => "deliver",
            OrderAction::Cancel => "cancel",
        }
    }

    /// Подпись кнопки
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderAction::Approve => "Принять",
            OrderAction::Dispatch => "В доставку",
            OrderAction::Deliver => "Доставлен",
            OrderAction::Cancel => "Отменить",
        }
    }

    /// Статус заказа после подтверждённого сервером действия
    pub fn target_status(&self) -> OrderStatus {
        match self {
            OrderAction::Approve => OrderStatus::Processing,
            OrderAction::Dispatch => OrderStatus::Delivering,
            OrderAction::Deliver => OrderStatus::Delivered,
            OrderAction::Cancel => OrderStatus::Canceled,
        }
    }

    pub fn all() -> Vec<OrderAction> {
        vec![
            OrderAction::Approve,
            OrderAction::Dispatch,
            OrderAction::Deliver,
            OrderAction::Cancel,
        ]
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        use OrderAction::*;
        use OrderStatus::*;

        assert_eq!(Pending.transition(Approve), Some(Processing));
        assert_eq!(Pending.transition(Cancel), Some(Canceled));
        assert_eq!(Processing.transition(Dispatch), Some(Delivering));
        assert_eq!(Processing.transition(Cancel), Some(Canceled));
        assert_eq!(Delivering.transition(Deliver), Some(Delivered));
    }

    #[test]
    fn test_only_five_edges_exist() {
        let edges: usize = OrderStatus::all()
            .iter()
            .map(|status| {
                OrderAction::all()
                    .into_iter()
                    .filter(|action| status.transition(*action).is_some())
                    .count()
            })
            .sum();
        assert_eq!(edges, 5);

        assert_eq!(OrderStatus::Pending.transition(OrderAction::Deliver), None);
        assert_eq!(OrderStatus::Delivering.transition(OrderAction::Cancel), None);
    }

    #[test]
    fn test_terminal_statuses_offer_nothing() {
        for status in OrderStatus::all() {
            let terminal = matches!(status, OrderStatus::Delivered | OrderStatus::Canceled);
            assert_eq!(status.is_terminal(), terminal, "{}", status);
        }
        assert!(OrderStatus::Delivered.available_actions().is_empty());
        assert!(OrderStatus::Canceled.available_actions().is_empty());
    }

    #[test]
    fn test_code_roundtrip_and_serde() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("all"), None);
        assert!("unknown".parse::<OrderStatus>().is_err());

        let json = serde_json::to_string(&OrderStatus::Delivering).unwrap();
        assert_eq!(json, "\"delivering\"");
    }
}
