//! Жизненный цикл заказа и синхронизация кэша
//!
//! Действие сначала подтверждается сервером и только потом попадает в кэш:
//! статус заказа переписывается во всех закэшированных списках сразу
//! (все фильтры, все страницы), без повторной загрузки. При ошибке кэш не
//! меняется. Пока по заказу идёт действие, второе действие по нему же
//! отклоняется без обращения к серверу.
//!
//! Список, отфильтрованный по статусу, после действия может содержать заказ
//! уже с другим статусом. До следующей загрузки этого списка это ожидаемо.

use contracts::domain::a002_order::{OrderDetails, OrderListQuery};
use contracts::enums::{OrderAction, OrderStatus};

use super::api::OrdersApi;
use crate::shared::error::AppError;
use crate::shared::query_cache::{CacheHandle, CachedOrderList};

#[derive(Clone)]
pub struct OrderLifecycle<A, C> {
    api: A,
    cache: C,
}

impl<A: OrdersApi, C: CacheHandle> OrderLifecycle<A, C> {
    pub fn new(api: A, cache: C) -> Self {
        Self { api, cache }
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Выполнить действие над заказом.
    ///
    /// Исходный статус не перепроверяется: кнопка показывается только для
    /// допустимых переходов, окончательно решает сервер.
    pub async fn perform(&self, action: OrderAction, order_id: &str) -> Result<OrderStatus, AppError> {
        if self.cache.write_cache(|c| c.begin_mutation(order_id)) == Some(false) {
            log::warn!("order {}: {} ignored, another action in flight", order_id, action);
            return Err(AppError::ActionInFlight(order_id.to_string()));
        }

        log::info!("order {}: {} requested", order_id, action);
        let result = self.api.send_action(action, order_id).await;

        let target = action.target_status();
        self.cache.write_cache(|c| {
            if result.is_ok() {
                c.set_order_status(order_id, target);
            }
            c.end_mutation(order_id);
        });

        match result {
            Ok(()) => {
                log::info!("order {}: {} confirmed, status {}", order_id, action, target);
                Ok(target)
            }
            Err(e) => {
                log::warn!("order {}: {} failed: {}", order_id, action, e);
                Err(e)
            }
        }
    }

    pub async fn approve(&self, order_id: &str) -> Result<OrderStatus, AppError> {
        self.perform(OrderAction::Approve, order_id).await
    }

    pub async fn dispatch(&self, order_id: &str) -> Result<OrderStatus, AppError> {
        self.perform(OrderAction::Dispatch, order_id).await
    }

    pub async fn deliver(&self, order_id: &str) -> Result<OrderStatus, AppError> {
        self.perform(OrderAction::Deliver, order_id).await
    }

    pub async fn cancel(&self, order_id: &str) -> Result<OrderStatus, AppError> {
        self.perform(OrderAction::Cancel, order_id).await
    }

    /// Страница заказов: из кэша, либо загрузка при промахе или `refetch`
    pub async fn load_orders(
        &self,
        query: &OrderListQuery,
        refetch: bool,
    ) -> Result<CachedOrderList, AppError> {
        if !refetch {
            if let Some(Some(cached)) = self.cache.read_cache(|c| c.orders(query).cloned()) {
                return Ok(cached);
            }
        }

        let response = self.api.fetch_orders(query).await?;
        let list = CachedOrderList {
            query: query.clone(),
            orders: response.orders,
            meta: response.meta,
        };
        self.cache.write_cache(|c| c.replace_orders(list.clone()));
        Ok(list)
    }

    /// Карточка заказа всегда загружается заново: действия её не обновляют
    pub async fn load_order_details(&self, order_id: &str) -> Result<OrderDetails, AppError> {
        let details = self.api.fetch_order_details(order_id).await?;
        self.cache.write_cache(|c| c.replace_order_details(details.clone()));
        Ok(details)
    }
}
