//! Ресторан и профиль менеджера
//!
//! Профиль заведения сохраняется оптимистично: кэш меняется сразу, а при
//! ошибке сервера возвращается прежнее значение.

use contracts::domain::a001_restaurant::{Profile, Restaurant, UpdateProfileRequest};

use super::api::RestaurantApi;
use crate::shared::error::AppError;
use crate::shared::query_cache::CacheHandle;

#[derive(Clone)]
pub struct RestaurantStore<A, C> {
    api: A,
    cache: C,
}

impl<A: RestaurantApi, C: CacheHandle> RestaurantStore<A, C> {
    pub fn new(api: A, cache: C) -> Self {
        Self { api, cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub async fn load_managed_restaurant(&self) -> Result<Restaurant, AppError> {
        if let Some(Some(cached)) = self.cache.read_cache(|c| c.managed_restaurant().cloned()) {
            return Ok(cached);
        }
        let restaurant = self.api.fetch_managed_restaurant().await?;
        self.cache
            .write_cache(|c| c.replace_managed_restaurant(restaurant.clone()));
        Ok(restaurant)
    }

    pub async fn load_profile(&self) -> Result<Profile, AppError> {
        if let Some(Some(cached)) = self.cache.read_cache(|c| c.profile().cloned()) {
            return Ok(cached);
        }
        let profile = self.api.fetch_profile().await?;
        self.cache.write_cache(|c| c.replace_profile(profile.clone()));
        Ok(profile)
    }

    /// Сохранить название и описание заведения
    pub async fn save_profile(&self, request: UpdateProfileRequest) -> Result<(), AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Укажите название заведения".to_string()));
        }

        let previous = self
            .cache
            .write_cache(|c| {
                let previous = c.managed_restaurant().cloned();
                if let Some(current) = &previous {
                    c.replace_managed_restaurant(request.apply_to(current));
                }
                previous
            })
            .flatten();

        match self.api.update_profile(&request).await {
            Ok(()) => {
                log::info!("Store profile updated: {}", request.name);
                Ok(())
            }
            Err(e) => {
                log::warn!("Store profile update failed, rolling back: {}", e);
                if let Some(previous) = previous {
                    self.cache
                        .write_cache(|c| c.replace_managed_restaurant(previous));
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_cache::QueryCache;
    use async_trait::async_trait;
    use contracts::domain::a001_restaurant::UserRole;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeRestaurantApi {
        fail_update: bool,
        fetches: Cell<usize>,
        updates: RefCell<Vec<UpdateProfileRequest>>,
    }

    fn restaurant(name: &str) -> Restaurant {
        Restaurant {
            id: "r1".to_string(),
            name: name.to_string(),
            description: Some("Pizza since 1990".to_string()),
            created_at: None,
            updated_at: None,
            manager_id: Some("m1".to_string()),
        }
    }

    #[async_trait(?Send)]
    impl RestaurantApi for FakeRestaurantApi {
        async fn fetch_managed_restaurant(&self) -> Result<Restaurant, AppError> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(restaurant("Pizza Shop"))
        }

        async fn fetch_profile(&self) -> Result<Profile, AppError> {
            self.fetches.set(self.fetches.get() + 1);
            Ok(Profile {
                id: "m1".to_string(),
                name: "John".to_string(),
                email: "john@pizza.shop".to_string(),
                phone: None,
                role: UserRole::Manager,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), AppError> {
            self.updates.borrow_mut().push(request.clone());
            if self.fail_update {
                Err(AppError::transport("Internal server error"))
            } else {
                Ok(())
            }
        }
    }

    fn seeded() -> RefCell<QueryCache> {
        let mut cache = QueryCache::new();
        cache.replace_managed_restaurant(restaurant("Pizza Shop"));
        RefCell::new(cache)
    }

    fn request(name: &str) -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_save_profile_updates_cache() {
        let store = RestaurantStore::new(FakeRestaurantApi::default(), seeded());
        block_on(store.save_profile(request("Pizza Place"))).unwrap();

        let cache = store.cache().borrow();
        let saved = cache.managed_restaurant().unwrap();
        assert_eq!(saved.name, "Pizza Place");
        assert_eq!(saved.description, None);
        assert_eq!(saved.manager_id.as_deref(), Some("m1"));
    }

    #[test]
    fn test_failed_save_restores_previous_value() {
        let api = FakeRestaurantApi {
            fail_update: true,
            ..Default::default()
        };
        let store = RestaurantStore::new(api, seeded());
        let before = store.cache().borrow().clone();

        let err = block_on(store.save_profile(request("Pizza Place"))).unwrap_err();
        assert_eq!(err.to_string(), "Internal server error");
        assert_eq!(*store.cache().borrow(), before);
    }

    #[test]
    fn test_empty_name_is_rejected_without_request() {
        let store = RestaurantStore::new(FakeRestaurantApi::default(), seeded());
        let err = block_on(store.save_profile(request("  "))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.api.updates.borrow().is_empty());
    }

    #[test]
    fn test_loads_are_cached() {
        let store = RestaurantStore::new(FakeRestaurantApi::default(), RefCell::new(QueryCache::new()));
        block_on(store.load_profile()).unwrap();
        block_on(store.load_profile()).unwrap();
        block_on(store.load_managed_restaurant()).unwrap();
        assert_eq!(store.api.fetches.get(), 2);
    }
}
