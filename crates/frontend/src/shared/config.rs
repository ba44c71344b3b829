//! Конфигурация клиента
//!
//! Значения задаются при сборке через переменные окружения:
//! - `DASHBOARD_API_URL`: адрес API (по умолчанию тот же хост, порт 3333)
//! - `DASHBOARD_API_DELAY_MS`: искусственная задержка перед каждым запросом,
//!   чтобы видеть состояния загрузки при разработке

use leptos::prelude::*;

use super::api_utils::api_base;

/// Порт API, если адрес не задан явно
pub const DEFAULT_API_PORT: u16 = 3333;
/// Размер страницы списка заказов, если сервер не вернул meta
pub const DEFAULT_ORDERS_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub api_delay_ms: u32,
    pub orders_per_page: u32,
}

impl AppConfig {
    /// Конфигурация из переменных сборки
    pub fn from_env() -> Self {
        Self::resolve(
            option_env!("DASHBOARD_API_URL"),
            option_env!("DASHBOARD_API_DELAY_MS"),
        )
    }

    fn resolve(api_url: Option<&str>, api_delay_ms: Option<&str>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| api_base(DEFAULT_API_PORT));

        let api_delay_ms = match api_delay_ms.map(str::trim) {
            None | Some("") => 0,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("DASHBOARD_API_DELAY_MS is not a number: {:?}", raw);
                0
            }),
        };

        Self {
            api_url,
            api_delay_ms,
            orders_per_page: DEFAULT_ORDERS_PER_PAGE,
        }
    }

    /// Полный адрес эндпоинта
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_is_normalized() {
        let config = AppConfig::resolve(Some("http://api.local:3333/"), Some("1500"));
        assert_eq!(config.api_url, "http://api.local:3333");
        assert_eq!(config.api_delay_ms, 1500);
        assert_eq!(config.url("/orders"), "http://api.local:3333/orders");
    }

    #[test]
    fn test_invalid_delay_falls_back_to_zero() {
        let config = AppConfig::resolve(Some("http://x"), Some("soon"));
        assert_eq!(config.api_delay_ms, 0);
        assert_eq!(config.orders_per_page, DEFAULT_ORDERS_PER_PAGE);
    }
}
