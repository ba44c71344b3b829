use serde::{Deserialize, Serialize};

/// Тело `POST /authenticate`: сервер отправляет ссылку для входа на почту
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

/// Тело ответа сервера с ошибкой
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Код, которым сервер помечает истёкшую или отсутствующую сессию
    pub const UNAUTHORIZED: &'static str = "UNAUTHORIZED";

    pub fn is_unauthorized(&self) -> bool {
        self.code.as_deref() == Some(Self::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_tolerates_missing_fields() {
        let body: ApiErrorBody = serde_json::from_str(r#"{ "message": "Order not found." }"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Order not found."));
        assert!(!body.is_unauthorized());

        let body: ApiErrorBody = serde_json::from_str(r#"{ "code": "UNAUTHORIZED" }"#).unwrap();
        assert!(body.is_unauthorized());
    }
}
