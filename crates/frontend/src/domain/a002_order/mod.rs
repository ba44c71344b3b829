pub mod api;
pub mod filters;
pub mod lifecycle;
pub mod ui;

use leptos::prelude::RwSignal;

use crate::shared::config::use_config;
use crate::shared::query_cache::{use_query_cache, QueryCache};
use api::HttpOrdersApi;
use lifecycle::OrderLifecycle;

pub type AppOrderLifecycle = OrderLifecycle<HttpOrdersApi, RwSignal<QueryCache>>;

/// Контроллер заказов поверх HTTP API и общего кэша
pub fn use_order_lifecycle() -> AppOrderLifecycle {
    OrderLifecycle::new(HttpOrdersApi::new(use_config()), use_query_cache())
}
