use async_trait::async_trait;
use contracts::domain::a001_restaurant::{Profile, Restaurant, UpdateProfileRequest};

use crate::shared::api_utils::{get_json, send_json, HttpMethod};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;

/// Эндпоинты ресторана и текущего пользователя
#[async_trait(?Send)]
pub trait RestaurantApi {
    /// `GET /managed-restaurant`
    async fn fetch_managed_restaurant(&self) -> Result<Restaurant, AppError>;

    /// `GET /me`
    async fn fetch_profile(&self) -> Result<Profile, AppError>;

    /// `PUT /profile`
    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), AppError>;
}

#[derive(Debug, Clone)]
pub struct HttpRestaurantApi {
    config: AppConfig,
}

impl HttpRestaurantApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RestaurantApi for HttpRestaurantApi {
    async fn fetch_managed_restaurant(&self) -> Result<Restaurant, AppError> {
        get_json(&self.config, "/managed-restaurant").await
    }

    async fn fetch_profile(&self) -> Result<Profile, AppError> {
        get_json(&self.config, "/me").await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), AppError> {
        send_json(&self.config, HttpMethod::Put, "/profile", request).await
    }
}
