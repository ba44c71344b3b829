use contracts::domain::a001_restaurant::RegisterRestaurantRequest;
use contracts::system::auth::SignInRequest;

use crate::shared::api_utils::{send_empty, send_json, HttpMethod};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;

/// Запросить ссылку для входа на почту
pub async fn sign_in(config: &AppConfig, request: &SignInRequest) -> Result<(), AppError> {
    send_json(config, HttpMethod::Post, "/authenticate", request).await
}

/// Регистрация ресторана вместе с менеджером
pub async fn register_restaurant(
    config: &AppConfig,
    request: &RegisterRestaurantRequest,
) -> Result<(), AppError> {
    send_json(config, HttpMethod::Post, "/restaurants", request).await
}

pub async fn sign_out(config: &AppConfig) -> Result<(), AppError> {
    send_empty(config, HttpMethod::Post, "/sign-out").await
}
