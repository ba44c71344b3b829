//! Кэш результатов запросов к API
//!
//! Хранилище живёт всё время работы страницы и передаётся через контекст
//! (`RwSignal<QueryCache>`), в тестах через `RefCell<QueryCache>`.
//! Записи меняются только тремя способами: полная замена по ключу,
//! точечное преобразование заказов во всех подходящих списках
//! (`transform_all`) и очистка при выходе из системы.

use contracts::domain::a001_restaurant::{Profile, Restaurant};
use contracts::domain::a002_order::{Order, OrderDetails, OrderListMeta, OrderListQuery};
use contracts::enums::OrderStatus;
use leptos::prelude::*;
use serde_json::json;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

/// Логический ключ запроса
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    Orders(OrderListQuery),
    OrderDetails(String),
    ManagedRestaurant,
    Profile,
}

impl QueryKey {
    /// Сериализованный ключ кэша
    ///
    /// JSON-массив из имени сущности и всех полей запроса в фиксированном
    /// порядке. Отсутствующий фильтр пишется как `null`, поэтому он не
    /// совпадает с пустой строкой, а экранирование JSON не даёт двум разным
    /// запросам дать одну строку.
    pub fn cache_key(&self) -> CacheKey {
        let value = match self {
            QueryKey::Orders(query) => json!([
                "orders",
                query.order_id,
                query.customer_name,
                query.status.code(),
                query.page,
            ]),
            QueryKey::OrderDetails(order_id) => json!(["order", order_id]),
            QueryKey::ManagedRestaurant => json!(["managed-restaurant"]),
            QueryKey::Profile => json!(["profile"]),
        };
        CacheKey(value.to_string())
    }

    pub fn is_order_list(&self) -> bool {
        matches!(self, QueryKey::Orders(_))
    }
}

/// Сериализованный ключ кэша
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Закэшированная страница списка заказов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedOrderList {
    pub query: OrderListQuery,
    pub orders: Vec<Order>,
    pub meta: OrderListMeta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedData {
    Orders(CachedOrderList),
    OrderDetails(OrderDetails),
    ManagedRestaurant(Restaurant),
    Profile(Profile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheEntry {
    key: QueryKey,
    data: CachedData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCache {
    entries: BTreeMap<CacheKey, CacheEntry>,
    /// Заказы, по которым сейчас выполняется действие
    mutating: BTreeSet<String>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&CachedData> {
        self.entries.get(&key.cache_key()).map(|entry| &entry.data)
    }

    pub fn orders(&self, query: &OrderListQuery) -> Option<&CachedOrderList> {
        match self.get(&QueryKey::Orders(query.clone())) {
            Some(CachedData::Orders(list)) => Some(list),
            _ => None,
        }
    }

    pub fn order_details(&self, order_id: &str) -> Option<&OrderDetails> {
        match self.get(&QueryKey::OrderDetails(order_id.to_string())) {
            Some(CachedData::OrderDetails(details)) => Some(details),
            _ => None,
        }
    }

    pub fn managed_restaurant(&self) -> Option<&Restaurant> {
        match self.get(&QueryKey::ManagedRestaurant) {
            Some(CachedData::ManagedRestaurant(restaurant)) => Some(restaurant),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self.get(&QueryKey::Profile) {
            Some(CachedData::Profile(profile)) => Some(profile),
            _ => None,
        }
    }

    fn replace(&mut self, key: QueryKey, data: CachedData) {
        let cache_key = key.cache_key();
        log::debug!("cache replace {}", cache_key.as_str());
        self.entries.insert(cache_key, CacheEntry { key, data });
    }

    /// Полная замена страницы заказов по ключу её запроса
    pub fn replace_orders(&mut self, list: CachedOrderList) {
        self.replace(QueryKey::Orders(list.query.clone()), CachedData::Orders(list));
    }

    pub fn replace_order_details(&mut self, details: OrderDetails) {
        self.replace(
            QueryKey::OrderDetails(details.id.clone()),
            CachedData::OrderDetails(details),
        );
    }

    pub fn replace_managed_restaurant(&mut self, restaurant: Restaurant) {
        self.replace(
            QueryKey::ManagedRestaurant,
            CachedData::ManagedRestaurant(restaurant),
        );
    }

    pub fn replace_profile(&mut self, profile: Profile) {
        self.replace(QueryKey::Profile, CachedData::Profile(profile));
    }

    /// Применить `map` к каждому заказу в каждом списке, ключ которого
    /// удовлетворяет `predicate`. Возвращает число просмотренных списков.
    pub fn transform_all<P, F>(&mut self, predicate: P, mut map: F) -> usize
    where
        P: Fn(&QueryKey) -> bool,
        F: FnMut(&mut Order),
    {
        let mut touched = 0;
        for entry in self.entries.values_mut() {
            if !predicate(&entry.key) {
                continue;
            }
            if let CachedData::Orders(list) = &mut entry.data {
                list.orders.iter_mut().for_each(&mut map);
                touched += 1;
            }
        }
        touched
    }

    /// Проставить статус заказу во всех закэшированных списках.
    /// Возвращает число обновлённых копий заказа.
    pub fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> usize {
        let mut updated = 0;
        self.transform_all(QueryKey::is_order_list, |order| {
            if order.order_id == order_id {
                order.status = status;
                updated += 1;
            }
        });
        log::debug!(
            "cache transform_all: order {} -> {} in {} list(s)",
            order_id,
            status,
            updated
        );
        updated
    }

    /// Отметить начало действия с заказом. `false`, если действие уже идёт.
    pub fn begin_mutation(&mut self, order_id: &str) -> bool {
        self.mutating.insert(order_id.to_string())
    }

    pub fn end_mutation(&mut self, order_id: &str) {
        self.mutating.remove(order_id);
    }

    pub fn is_mutating(&self, order_id: &str) -> bool {
        self.mutating.contains(order_id)
    }

    /// Полная очистка (выход из системы)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.mutating.clear();
    }
}

/// Доступ к общему кэшу
///
/// `None` означает, что хранилище уже уничтожено вместе со страницей.
pub trait CacheHandle {
    fn read_cache<R>(&self, f: impl FnOnce(&QueryCache) -> R) -> Option<R>;
    fn write_cache<R>(&self, f: impl FnOnce(&mut QueryCache) -> R) -> Option<R>;
}

impl CacheHandle for RwSignal<QueryCache> {
    fn read_cache<R>(&self, f: impl FnOnce(&QueryCache) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write_cache<R>(&self, f: impl FnOnce(&mut QueryCache) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl CacheHandle for RefCell<QueryCache> {
    fn read_cache<R>(&self, f: impl FnOnce(&QueryCache) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn write_cache<R>(&self, f: impl FnOnce(&mut QueryCache) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Кэш из контекста приложения
pub fn use_query_cache() -> RwSignal<QueryCache> {
    use_context::<RwSignal<QueryCache>>().expect("QueryCache not provided in context")
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use contracts::domain::a002_order::StatusFilter;

    fn customer_query(name: &str) -> OrderListQuery {
        OrderListQuery {
            customer_name: Some(name.to_string()),
            ..OrderListQuery::default()
        }
    }

    #[test]
    fn test_read_miss_and_replace() {
        let mut cache = QueryCache::new();
        let query = OrderListQuery::default();
        assert!(cache.orders(&query).is_none());

        cache.replace_orders(list(query.clone(), vec![order("a", OrderStatus::Pending, 100)]));
        assert_eq!(cache.orders(&query).unwrap().orders.len(), 1);

        cache.replace_orders(list(
            query.clone(),
            vec![
                order("b", OrderStatus::Delivered, 200),
                order("c", OrderStatus::Canceled, 300),
            ],
        ));
        let cached = cache.orders(&query).unwrap();
        assert_eq!(cached.orders.len(), 2);
        assert_eq!(cached.orders[0].order_id, "b");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_keys_are_distinct() {
        let keys = vec![
            QueryKey::Orders(OrderListQuery::default()),
            QueryKey::Orders(OrderListQuery::default().with_page(2)),
            QueryKey::Orders(status_query(StatusFilter::Only(OrderStatus::Pending))),
            QueryKey::Orders(customer_query("")),
            QueryKey::Orders(customer_query("null")),
            QueryKey::Orders(OrderListQuery {
                order_id: Some("a\",\"b".to_string()),
                ..OrderListQuery::default()
            }),
            QueryKey::Orders(OrderListQuery {
                order_id: Some("a".to_string()),
                customer_name: Some("b".to_string()),
                ..OrderListQuery::default()
            }),
            QueryKey::OrderDetails("orders".to_string()),
            QueryKey::ManagedRestaurant,
            QueryKey::Profile,
        ];
        let encoded: BTreeSet<CacheKey> = keys.iter().map(QueryKey::cache_key).collect();
        assert_eq!(encoded.len(), keys.len());
    }

    #[test]
    fn test_cache_key_format_is_stable() {
        assert_eq!(
            QueryKey::Orders(OrderListQuery::default()).cache_key().as_str(),
            r#"["orders",null,null,"all",1]"#
        );
        assert_eq!(
            QueryKey::Orders(customer_query("Ана")).cache_key(),
            QueryKey::Orders(customer_query("Ана")).cache_key()
        );
    }

    #[test]
    fn test_transform_all_updates_every_matching_list() {
        let mut cache = QueryCache::new();
        let all = status_query(StatusFilter::All);
        let pending = status_query(StatusFilter::Only(OrderStatus::Pending));
        let customer = customer_query("Customer abc123");

        cache.replace_orders(list(
            all.clone(),
            vec![
                order("abc123", OrderStatus::Pending, 5000),
                order("other", OrderStatus::Pending, 700),
            ],
        ));
        cache.replace_orders(list(pending.clone(), vec![order("abc123", OrderStatus::Pending, 5000)]));
        cache.replace_orders(list(customer.clone(), vec![order("abc123", OrderStatus::Pending, 5000)]));

        let updated = cache.set_order_status("abc123", OrderStatus::Processing);
        assert_eq!(updated, 3);

        for query in [&all, &pending, &customer] {
            let cached = cache.orders(query).unwrap();
            let target = cached.orders.iter().find(|o| o.order_id == "abc123").unwrap();
            assert_eq!(target.status, OrderStatus::Processing);
            assert_eq!(target.total, 5000);
        }
        assert_eq!(cache.orders(&all).unwrap().orders[1], order("other", OrderStatus::Pending, 700));
    }

    #[test]
    fn test_transform_all_skips_non_matching_keys() {
        let mut cache = QueryCache::new();
        let all = OrderListQuery::default();
        cache.replace_orders(list(all.clone(), vec![order("a", OrderStatus::Pending, 1)]));
        let page_two = all.with_page(2);
        cache.replace_orders(list(page_two.clone(), vec![order("a", OrderStatus::Pending, 1)]));

        let touched = cache.transform_all(
            |key| matches!(key, QueryKey::Orders(q) if q.page == 2),
            |order| order.status = OrderStatus::Canceled,
        );
        assert_eq!(touched, 1);
        assert_eq!(cache.orders(&all).unwrap().orders[0].status, OrderStatus::Pending);
        assert_eq!(cache.orders(&page_two).unwrap().orders[0].status, OrderStatus::Canceled);
    }

    #[test]
    fn test_non_list_entries_are_untouched() {
        let mut cache = QueryCache::new();
        let before_restaurant = Restaurant {
            id: "r1".to_string(),
            name: "Pizza".to_string(),
            description: None,
            created_at: None,
            updated_at: None,
            manager_id: None,
        };
        cache.replace_managed_restaurant(before_restaurant.clone());
        assert_eq!(cache.set_order_status("abc123", OrderStatus::Canceled), 0);
        assert_eq!(cache.managed_restaurant(), Some(&before_restaurant));
    }

    #[test]
    fn test_mutation_tracking() {
        let mut cache = QueryCache::new();
        assert!(cache.begin_mutation("a"));
        assert!(!cache.begin_mutation("a"));
        assert!(cache.begin_mutation("b"));
        assert!(cache.is_mutating("a"));
        cache.end_mutation("a");
        assert!(!cache.is_mutating("a"));
        assert!(cache.is_mutating("b"));
    }

    #[test]
    fn test_clear() {
        let mut cache = QueryCache::new();
        cache.replace_orders(list(OrderListQuery::default(), vec![]));
        cache.begin_mutation("a");
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.is_mutating("a"));
    }
}
