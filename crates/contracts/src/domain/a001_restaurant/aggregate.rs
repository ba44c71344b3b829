use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ресторан, которым управляет текущий пользователь (`GET /managed-restaurant`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub manager_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Manager,
    Customer,
}

/// Профиль текущего пользователя (`GET /me`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Тело `PUT /profile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub description: Option<String>,
}

impl UpdateProfileRequest {
    /// Ресторан после применения изменений профиля
    pub fn apply_to(&self, restaurant: &Restaurant) -> Restaurant {
        Restaurant {
            name: self.name.clone(),
            description: self.description.clone(),
            ..restaurant.clone()
        }
    }
}

/// Тело `POST /restaurants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRestaurantRequest {
    pub restaurant_name: String,
    pub manager_name: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_restaurant_with_nulls() {
        let body = r#"{
            "id": "r1",
            "name": "Pizza Shop",
            "description": null,
            "createdAt": null,
            "updatedAt": "2024-03-15T14:02:26Z",
            "managerId": "m1"
        }"#;
        let restaurant: Restaurant = serde_json::from_str(body).unwrap();
        assert_eq!(restaurant.name, "Pizza Shop");
        assert_eq!(restaurant.description, None);
        assert!(restaurant.updated_at.is_some());
    }

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRestaurantRequest {
            restaurant_name: "Pizza Shop".to_string(),
            manager_name: "Анна".to_string(),
            email: "anna@example.com".to_string(),
            phone: "+7 900 000-00-00".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["restaurantName"], "Pizza Shop");
        assert_eq!(json["managerName"], "Анна");
    }

    #[test]
    fn test_update_profile_keeps_identity() {
        let restaurant = Restaurant {
            id: "r1".to_string(),
            name: "Old".to_string(),
            description: Some("old".to_string()),
            created_at: None,
            updated_at: None,
            manager_id: Some("m1".to_string()),
        };
        let updated = UpdateProfileRequest {
            name: "New".to_string(),
            description: None,
        }
        .apply_to(&restaurant);

        assert_eq!(updated.id, "r1");
        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, None);
        assert_eq!(updated.manager_id, Some("m1".to_string()));
    }
}
