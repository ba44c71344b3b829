//! API utilities for frontend-backend communication
//!
//! Every request carries the session cookie (`credentials: include`) and
//! maps non-success responses to [`AppError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use super::config::AppConfig;
use super::error::AppError;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the given port for the API server.
///
/// # Returns
/// - API base URL like "http://localhost:3333"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
}

fn request(config: &AppConfig, method: HttpMethod, path: &str) -> RequestBuilder {
    let url = config.url(path);
    let builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Patch => Request::patch(&url),
    };
    builder.credentials(RequestCredentials::Include)
}

async fn delay(config: &AppConfig) {
    if config.api_delay_ms > 0 {
        gloo_timers::future::TimeoutFuture::new(config.api_delay_ms).await;
    }
}

async fn check(response: Response) -> Result<Response, AppError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_response(status, &status_text, &body);
    log::warn!("API {} {} -> {}", status, response.url(), err);
    Err(err)
}

/// `GET path` и разбор JSON-ответа
pub async fn get_json<T: DeserializeOwned>(config: &AppConfig, path: &str) -> Result<T, AppError> {
    delay(config).await;
    let response = check(request(config, HttpMethod::Get, path).send().await?).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::transport(format!("Failed to parse response: {}", e)))
}

/// `GET path?query` и разбор JSON-ответа
pub async fn get_json_with_query<T, Q>(
    config: &AppConfig,
    path: &str,
    query: &Q,
) -> Result<T, AppError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let query_string = serde_qs::to_string(query)?;
    if query_string.is_empty() {
        get_json(config, path).await
    } else {
        get_json(config, &format!("{}?{}", path, query_string)).await
    }
}

/// Запрос с JSON-телом, ответ не разбирается
pub async fn send_json<B: Serialize>(
    config: &AppConfig,
    method: HttpMethod,
    path: &str,
    body: &B,
) -> Result<(), AppError> {
    delay(config).await;
    let request = request(config, method, path)
        .json(body)
        .map_err(|e| AppError::transport(format!("Failed to serialize request: {}", e)))?;
    check(request.send().await?).await?;
    Ok(())
}

/// Запрос без тела, ответ не разбирается
pub async fn send_empty(config: &AppConfig, method: HttpMethod, path: &str) -> Result<(), AppError> {
    delay(config).await;
    check(request(config, method, path).send().await?).await?;
    Ok(())
}

/// Экранирование идентификатора для сегмента пути
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
