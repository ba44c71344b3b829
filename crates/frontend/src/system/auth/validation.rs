//! Проверка форм входа и регистрации

use contracts::domain::a001_restaurant::RegisterRestaurantRequest;
use contracts::system::auth::SignInRequest;

use crate::shared::error::AppError;

/// Адрес почты: непустая часть до `@` и точка в домене после неё
pub fn validate_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .find('.')
                    .map(|dot| dot > 0 && dot + 1 < domain.len())
                    .unwrap_or(false)
        }
        None => false,
    };

    if valid && !email.chars().any(char::is_whitespace) {
        Ok(email.to_string())
    } else {
        Err(AppError::Validation("Введите корректный e-mail".to_string()))
    }
}

fn required(raw: &str, message: &str) -> Result<String, AppError> {
    let value = raw.trim();
    if value.is_empty() {
        Err(AppError::Validation(message.to_string()))
    } else {
        Ok(value.to_string())
    }
}

pub fn validate_sign_in(email: &str) -> Result<SignInRequest, AppError> {
    Ok(SignInRequest {
        email: validate_email(email)?,
    })
}

/// Значения формы регистрации
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<RegisterRestaurantRequest, AppError> {
        Ok(RegisterRestaurantRequest {
            restaurant_name: required(&self.restaurant_name, "Укажите название заведения")?,
            manager_name: required(&self.manager_name, "Укажите имя менеджера")?,
            email: validate_email(&self.email)?,
            phone: required(&self.phone, "Укажите телефон")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(" chef@pizza.shop ").unwrap(), "chef@pizza.shop");
        for bad in ["", "chef", "@pizza.shop", "chef@pizza", "chef@.shop", "chef@pizza.", "a b@c.d", "a@b@c.d"] {
            assert!(validate_email(bad).is_err(), "{} must be rejected", bad);
        }
    }

    #[test]
    fn test_sign_up_form() {
        let form = SignUpForm {
            restaurant_name: " Pizza Shop ".to_string(),
            manager_name: "John".to_string(),
            email: "john@pizza.shop".to_string(),
            phone: "+7 999 000-00-00".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.restaurant_name, "Pizza Shop");
        assert_eq!(request.phone, "+7 999 000-00-00");

        let empty_name = SignUpForm {
            manager_name: "  ".to_string(),
            ..form.clone()
        };
        assert_eq!(
            empty_name.validate(),
            Err(AppError::Validation("Укажите имя менеджера".to_string()))
        );

        let no_phone = SignUpForm {
            phone: String::new(),
            ..form
        };
        assert!(no_phone.validate().is_err());
    }
}
