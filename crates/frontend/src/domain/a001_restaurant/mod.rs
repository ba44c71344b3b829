pub mod api;
pub mod store;
pub mod ui;

use leptos::prelude::RwSignal;

use crate::shared::config::use_config;
use crate::shared::query_cache::{use_query_cache, QueryCache};
use api::HttpRestaurantApi;
use store::RestaurantStore;

pub type AppRestaurantStore = RestaurantStore<HttpRestaurantApi, RwSignal<QueryCache>>;

/// Хранилище ресторана поверх HTTP API и общего кэша
pub fn use_restaurant_store() -> AppRestaurantStore {
    RestaurantStore::new(HttpRestaurantApi::new(use_config()), use_query_cache())
}
