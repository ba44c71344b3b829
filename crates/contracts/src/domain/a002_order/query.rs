use crate::enums::order_status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Фильтр по статусу в списке заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "Все статусы",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == "all" {
            return Some(StatusFilter::All);
        }
        OrderStatus::from_code(code).map(StatusFilter::Only)
    }

    /// Варианты для выпадающего списка: "all" и все статусы
    pub fn options() -> Vec<StatusFilter> {
        let mut options = vec![StatusFilter::All];
        options.extend(OrderStatus::all().into_iter().map(StatusFilter::Only));
        options
    }

    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(*status),
        }
    }
}

/// Нормализованный запрос списка заказов
///
/// Пустые строки в фильтрах не допускаются: отсутствие фильтра это `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderListQuery {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub status: StatusFilter,
    /// Номер страницы с единицы
    pub page: u32,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            order_id: None,
            customer_name: None,
            status: StatusFilter::All,
            page: 1,
        }
    }
}

impl OrderListQuery {
    /// Индекс страницы для API (с нуля)
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn has_filters(&self) -> bool {
        self.order_id.is_some() || self.customer_name.is_some() || self.status != StatusFilter::All
    }

    /// Параметры запроса `GET /orders`
    pub fn to_params(&self) -> OrderListParams {
        OrderListParams {
            page_index: self.page_index(),
            order_id: self.order_id.clone(),
            customer_name: self.customer_name.clone(),
            status: self.status.status(),
        }
    }
}

/// Query-параметры `GET /orders` в формате API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListParams {
    pub page_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        let query = OrderListQuery::default();
        assert_eq!(query.order_id, None);
        assert_eq!(query.customer_name, None);
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_index(), 0);
        assert!(!query.has_filters());
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(StatusFilter::from_code("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_code("pending"),
            Some(StatusFilter::Only(OrderStatus::Pending))
        );
        assert_eq!(StatusFilter::from_code("Pending"), None);
        assert_eq!(StatusFilter::options().len(), 6);
    }

    #[test]
    fn test_params_use_zero_based_page_index() {
        let query = OrderListQuery {
            order_id: None,
            customer_name: Some("Иван".to_string()),
            status: StatusFilter::Only(OrderStatus::Delivering),
            page: 3,
        };
        let params = query.to_params();
        assert_eq!(params.page_index, 2);
        assert_eq!(params.status, Some(OrderStatus::Delivering));

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["pageIndex"], 2);
        assert_eq!(json["customerName"], "Иван");
        assert_eq!(json["status"], "delivering");
        assert!(json.get("orderId").is_none());
    }

    #[test]
    fn test_with_page_clamps_to_first() {
        let query = OrderListQuery::default().with_page(0);
        assert_eq!(query.page, 1);
    }
}
