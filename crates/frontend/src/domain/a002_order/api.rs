use async_trait::async_trait;
use contracts::domain::a002_order::{OrderDetails, OrderListQuery, OrderListResponse};
use contracts::enums::OrderAction;

use crate::shared::api_utils::{get_json, get_json_with_query, path_segment, send_empty, HttpMethod};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;

/// Эндпоинты заказов
///
/// Вынесены в трейт, чтобы контроллер жизненного цикла можно было проверить
/// без сети.
#[async_trait(?Send)]
pub trait OrdersApi {
    /// `GET /orders`
    async fn fetch_orders(&self, query: &OrderListQuery) -> Result<OrderListResponse, AppError>;

    /// `GET /orders/{id}`
    async fn fetch_order_details(&self, order_id: &str) -> Result<OrderDetails, AppError>;

    /// `PATCH /orders/{id}/{action}`; тело ответа не используется
    async fn send_action(&self, action: OrderAction, order_id: &str) -> Result<(), AppError>;
}

/// Реализация поверх HTTP API
#[derive(Debug, Clone)]
pub struct HttpOrdersApi {
    config: AppConfig,
}

impl HttpOrdersApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl OrdersApi for HttpOrdersApi {
    async fn fetch_orders(&self, query: &OrderListQuery) -> Result<OrderListResponse, AppError> {
        get_json_with_query(&self.config, "/orders", &query.to_params()).await
    }

    async fn fetch_order_details(&self, order_id: &str) -> Result<OrderDetails, AppError> {
        get_json(&self.config, &format!("/orders/{}", path_segment(order_id))).await
    }

    async fn send_action(&self, action: OrderAction, order_id: &str) -> Result<(), AppError> {
        let path = format!("/orders/{}/{}", path_segment(order_id), action.code());
        send_empty(&self.config, HttpMethod::Patch, &path).await
    }
}
