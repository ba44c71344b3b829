//! Ошибки клиентского слоя
//!
//! Ни одна ошибка не фатальна для приложения: каждая превращается в
//! уведомление, остальной интерфейс продолжает работать.

use contracts::system::auth::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Некорректный ввод в форме, запрос не отправлялся
    #[error("{0}")]
    Validation(String),

    /// Сетевая ошибка или неуспешный ответ сервера
    #[error("{message}")]
    Transport { status: Option<u16>, message: String },

    /// Сервер ответил 404
    #[error("Не найдено: {0}")]
    NotFound(String),

    /// Сессия отсутствует или истекла
    #[error("Требуется вход в систему")]
    Unauthorized,

    /// По заказу уже выполняется действие
    #[error("Действие с заказом {0} уже выполняется")]
    ActionInFlight(String),
}

impl AppError {
    pub fn transport(message: impl Into<String>) -> Self {
        AppError::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Ошибка по коду и телу неуспешного HTTP-ответа
    ///
    /// Сообщение сервера передаётся как есть, без переформулировки.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

        if status == 401 || parsed.is_unauthorized() {
            return AppError::Unauthorized;
        }

        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {}: {}", status, status_text)
                }
            });

        if status == 404 {
            return AppError::NotFound(message);
        }

        AppError::Transport {
            status: Some(status),
            message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(e: gloo_net::Error) -> Self {
        AppError::transport(format!("Ошибка сети: {}", e))
    }
}

impl From<serde_qs::Error> for AppError {
    fn from(e: serde_qs::Error) -> Self {
        AppError::Validation(format!("Некорректные параметры запроса: {}", e))
    }
}
