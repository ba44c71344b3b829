//! Фильтры списка заказов в адресной строке
//!
//! Параметры `orderId`, `customerName`, `status`, `page` живут в query string,
//! поэтому отфильтрованный список можно открыть по ссылке. Остальные
//! параметры адреса не трогаются.

use contracts::domain::a002_order::{OrderListQuery, StatusFilter};
use url::form_urlencoded;

use crate::shared::error::AppError;

pub const PARAM_ORDER_ID: &str = "orderId";
pub const PARAM_CUSTOMER_NAME: &str = "customerName";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_PAGE: &str = "page";

/// Пары `ключ=значение` в исходном порядке, повторы и ключи со скобками
/// сохраняются как есть
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    fn parse(search: &str) -> Self {
        let raw = search.trim_start_matches('?');
        Self(
            form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    fn get(&self, key: &str) -> Option<&String> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Первое вхождение заменяется на месте, повторы удаляются
    fn set(&mut self, key: &str, value: String) {
        match self.0.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                self.0[pos].1 = value;
                let mut index = 0;
                self.0.retain(|(k, _)| {
                    let keep = index <= pos || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    fn render(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let qs = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish();
        format!("?{}", qs)
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Запрос списка заказов из query string.
///
/// Некорректные `status` и `page` не считаются ошибкой: адрес мог быть
/// набран руками, поэтому подставляются значения по умолчанию.
pub fn derive_query(search: &str) -> OrderListQuery {
    let params = SearchParams::parse(search);

    let status = match params.get(PARAM_STATUS).map(|s| s.trim()) {
        None | Some("") => StatusFilter::All,
        Some(code) => StatusFilter::from_code(code).unwrap_or_else(|| {
            log::warn!("Unknown status filter {:?}, showing all", code);
            StatusFilter::All
        }),
    };

    let page = match params.get(PARAM_PAGE).map(|p| p.trim()) {
        None | Some("") => 1,
        Some(raw) => match raw.parse::<u32>() {
            Ok(page) if page >= 1 => page,
            _ => {
                log::warn!("Invalid page {:?}, showing first page", raw);
                1
            }
        },
    };

    OrderListQuery {
        order_id: non_empty(params.get(PARAM_ORDER_ID)),
        customer_name: non_empty(params.get(PARAM_CUSTOMER_NAME)),
        status,
        page,
    }
}

/// Значения формы фильтров в том виде, в каком их ввёл пользователь
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilterForm {
    pub order_id: String,
    pub customer_name: String,
    pub status: String,
}

impl Default for OrderFilterForm {
    fn default() -> Self {
        Self {
            order_id: String::new(),
            customer_name: String::new(),
            status: StatusFilter::All.code().to_string(),
        }
    }
}

impl OrderFilterForm {
    /// Значения формы для текущего запроса
    pub fn from_query(query: &OrderListQuery) -> Self {
        Self {
            order_id: query.order_id.clone().unwrap_or_default(),
            customer_name: query.customer_name.clone().unwrap_or_default(),
            status: query.status.code().to_string(),
        }
    }

    /// Проверка перед отправкой
    pub fn validate(&self) -> Result<OrderListQuery, AppError> {
        let status = StatusFilter::from_code(self.status.trim()).ok_or_else(|| {
            AppError::Validation(format!("Неизвестный статус: {}", self.status))
        })?;

        let order_id = non_empty(Some(&self.order_id));
        if let Some(id) = &order_id {
            if id.chars().any(char::is_whitespace) {
                return Err(AppError::Validation(
                    "Идентификатор заказа не может содержать пробелы".to_string(),
                ));
            }
        }

        Ok(OrderListQuery {
            order_id,
            customer_name: non_empty(Some(&self.customer_name)),
            status,
            page: 1,
        })
    }
}

/// Новая query string после применения фильтров: пустые поля удаляются,
/// страница сбрасывается на первую
pub fn apply_filters(search: &str, form: &OrderFilterForm) -> Result<String, AppError> {
    let query = form.validate()?;
    let mut params = SearchParams::parse(search);

    match query.order_id {
        Some(id) => params.set(PARAM_ORDER_ID, id),
        None => params.remove(PARAM_ORDER_ID),
    }
    match query.customer_name {
        Some(name) => params.set(PARAM_CUSTOMER_NAME, name),
        None => params.remove(PARAM_CUSTOMER_NAME),
    }
    params.set(PARAM_STATUS, query.status.code().to_string());
    params.set(PARAM_PAGE, "1".to_string());

    Ok(params.render())
}

/// Query string без фильтров и номера страницы
pub fn clear_filters(search: &str) -> String {
    let mut params = SearchParams::parse(search);
    for key in [PARAM_ORDER_ID, PARAM_CUSTOMER_NAME, PARAM_STATUS, PARAM_PAGE] {
        params.remove(key);
    }
    params.render()
}

/// Query string с другой страницей, фильтры сохраняются
pub fn with_page(search: &str, page: u32) -> String {
    let mut params = SearchParams::parse(search);
    params.set(PARAM_PAGE, page.max(1).to_string());
    params.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OrderStatus;

    #[test]
    fn test_empty_location_gives_default_query() {
        assert_eq!(derive_query(""), OrderListQuery::default());
        assert_eq!(derive_query("?"), OrderListQuery::default());
    }

    #[test]
    fn test_derive_full_query() {
        let query = derive_query("?orderId=abc&customerName=Ivan%20Petrov&status=delivering&page=3");
        assert_eq!(query.order_id.as_deref(), Some("abc"));
        assert_eq!(query.customer_name.as_deref(), Some("Ivan Petrov"));
        assert_eq!(query.status, StatusFilter::Only(OrderStatus::Delivering));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_bad_values_fall_back_to_defaults() {
        let query = derive_query("status=lost&page=0");
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.page, 1);

        let query = derive_query("page=two&orderId=%20%20");
        assert_eq!(query.page, 1);
        assert_eq!(query.order_id, None);
    }

    #[test]
    fn test_clear_filters_resets_query_and_keeps_other_params() {
        let search = "?orderId=abc&customerName=Ivan&status=pending&page=4&tab=main";
        let cleared = clear_filters(search);
        assert_eq!(cleared, "?tab=main");
        assert_eq!(derive_query(&cleared), OrderListQuery::default());

        // Повторная очистка ничего не меняет
        assert_eq!(clear_filters(&cleared), cleared);
        assert_eq!(clear_filters("?status=all"), "");
    }

    #[test]
    fn test_apply_filters_resets_page_and_drops_empty_fields() {
        let form = OrderFilterForm {
            order_id: "  ".to_string(),
            customer_name: " Ivan ".to_string(),
            status: "pending".to_string(),
        };
        let search = apply_filters("?orderId=old&page=5", &form).unwrap();
        let query = derive_query(&search);

        assert_eq!(query.order_id, None);
        assert_eq!(query.customer_name.as_deref(), Some("Ivan"));
        assert_eq!(query.status, StatusFilter::Only(OrderStatus::Pending));
        assert_eq!(query.page, 1);
        assert!(!search.contains(PARAM_ORDER_ID));
    }

    #[test]
    fn test_form_roundtrips_through_location() {
        let form = OrderFilterForm {
            order_id: "abc123".to_string(),
            customer_name: "Anna & Co".to_string(),
            status: "all".to_string(),
        };
        let search = apply_filters("", &form).unwrap();
        let query = derive_query(&search);
        assert_eq!(OrderFilterForm::from_query(&query), form);
        assert_eq!(derive_query(&search), query);
    }

    #[test]
    fn test_validation_errors() {
        let form = OrderFilterForm {
            status: "lost".to_string(),
            ..OrderFilterForm::default()
        };
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));

        let form = OrderFilterForm {
            order_id: "abc 123".to_string(),
            ..OrderFilterForm::default()
        };
        assert!(matches!(apply_filters("", &form), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_foreign_params_do_not_break_filters() {
        let query = derive_query("?orderId=abc&status=pending&utm[source]=x");
        assert_eq!(query.order_id.as_deref(), Some("abc"));
        assert_eq!(query.status, StatusFilter::Only(OrderStatus::Pending));

        let query = derive_query("?orderId=abc&ref=a&ref=b&status=pending");
        assert_eq!(query.order_id.as_deref(), Some("abc"));
        assert_eq!(query.status, StatusFilter::Only(OrderStatus::Pending));
    }

    #[test]
    fn test_foreign_params_survive_rewrites() {
        let foreign = |search: &str| {
            SearchParams::parse(search)
                .0
                .into_iter()
                .filter(|(k, _)| k == "ref" || k == "utm[source]")
                .collect::<Vec<_>>()
        };
        let expected = vec![
            ("ref".to_string(), "a".to_string()),
            ("utm[source]".to_string(), "x".to_string()),
            ("ref".to_string(), "b".to_string()),
        ];
        let search = "?orderId=abc&ref=a&utm[source]=x&ref=b&page=3";

        let cleared = clear_filters(search);
        assert_eq!(foreign(&cleared), expected);
        assert_eq!(derive_query(&cleared), OrderListQuery::default());

        let paged = with_page(search, 5);
        assert_eq!(foreign(&paged), expected);
        assert_eq!(derive_query(&paged).page, 5);

        let applied = apply_filters(search, &OrderFilterForm::default()).unwrap();
        assert_eq!(foreign(&applied), expected);
        assert_eq!(derive_query(&applied).order_id, None);
    }

    #[test]
    fn test_repeated_filter_key_is_collapsed() {
        let search = with_page("?page=2&tab=main&page=7", 3);
        assert_eq!(search, "?page=3&tab=main");
    }

    #[test]
    fn test_with_page_keeps_filters() {
        let search = with_page("?status=processing&page=1", 2);
        let query = derive_query(&search);
        assert_eq!(query.page, 2);
        assert_eq!(query.status, StatusFilter::Only(OrderStatus::Processing));
    }
}
