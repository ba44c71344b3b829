use contracts::dashboards::d400_restaurant_metrics::{
    DailyReceipt, DayOrdersAmount, MonthOrdersAmount, MonthReceipt, PopularProduct,
    ReceiptPeriodParams,
};

use crate::shared::api_utils::{get_json, get_json_with_query};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;

const API_BASE: &str = "/metrics";

/// Выручка за текущий месяц
pub async fn get_month_receipt(config: &AppConfig) -> Result<MonthReceipt, AppError> {
    get_json(config, &format!("{}/month-receipt", API_BASE)).await
}

/// Заказы за сегодня
pub async fn get_day_orders_amount(config: &AppConfig) -> Result<DayOrdersAmount, AppError> {
    get_json(config, &format!("{}/day-orders-amount", API_BASE)).await
}

/// Заказы за месяц
pub async fn get_month_orders_amount(config: &AppConfig) -> Result<MonthOrdersAmount, AppError> {
    get_json(config, &format!("{}/month-orders-amount", API_BASE)).await
}

/// Отменённые заказы за месяц
pub async fn get_month_canceled_orders_amount(
    config: &AppConfig,
) -> Result<MonthOrdersAmount, AppError> {
    get_json(config, &format!("{}/month-canceled-orders-amount", API_BASE)).await
}

/// Выручка по дням за период. Период проверяется до запроса.
pub async fn get_daily_receipt_in_period(
    config: &AppConfig,
    params: &ReceiptPeriodParams,
) -> Result<Vec<DailyReceipt>, AppError> {
    params.validate().map_err(AppError::Validation)?;
    get_json_with_query(config, &format!("{}/daily-receipt-in-period", API_BASE), params).await
}

pub async fn get_popular_products(config: &AppConfig) -> Result<Vec<PopularProduct>, AppError> {
    get_json(config, &format!("{}/popular-products", API_BASE)).await
}
