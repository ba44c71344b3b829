use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Выручка за месяц (`GET /metrics/month-receipt`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReceipt {
    /// Сумма в копейках
    pub receipt: i64,
    /// Изменение к прошлому месяцу, %
    pub diff_from_last_month: f64,
}

/// Заказы за сегодня (`GET /metrics/day-orders-amount`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOrdersAmount {
    pub amount: i64,
    pub diff_from_yesterday: f64,
}

/// Заказы за месяц (`GET /metrics/month-orders-amount`,
/// `GET /metrics/month-canceled-orders-amount`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOrdersAmount {
    pub amount: i64,
    pub diff_from_last_month: f64,
}

/// Точка графика выручки (`GET /metrics/daily-receipt-in-period`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReceipt {
    /// Дата в формате "DD/MM"
    pub date: String,
    /// Сумма в копейках
    pub receipt: i64,
}

/// Query-параметры `GET /metrics/daily-receipt-in-period`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptPeriodParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl ReceiptPeriodParams {
    /// Максимальная длина периода, которую принимает API
    pub const MAX_DAYS: i64 = 7;

    /// Проверка периода: `from <= to` и не длиннее недели
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err("Дата начала позже даты окончания".to_string());
            }
            if (to - from).num_days() > Self::MAX_DAYS {
                return Err(format!(
                    "Период не может быть длиннее {} дней",
                    Self::MAX_DAYS
                ));
            }
        }
        Ok(())
    }
}

/// Популярный товар (`GET /metrics/popular-products`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularProduct {
    pub product: String,
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_period_validation() {
        let ok = ReceiptPeriodParams {
            from: Some(date("2024-03-01")),
            to: Some(date("2024-03-08")),
        };
        assert!(ok.validate().is_ok());

        let too_long = ReceiptPeriodParams {
            from: Some(date("2024-03-01")),
            to: Some(date("2024-03-09")),
        };
        assert!(too_long.validate().is_err());

        let reversed = ReceiptPeriodParams {
            from: Some(date("2024-03-05")),
            to: Some(date("2024-03-01")),
        };
        assert!(reversed.validate().is_err());

        let open = ReceiptPeriodParams { from: None, to: None };
        assert!(open.validate().is_ok());
    }

    #[test]
    fn test_metric_wire_names() {
        let body = r#"{ "receipt": 1250000, "diffFromLastMonth": -3.5 }"#;
        let receipt: MonthReceipt = serde_json::from_str(body).unwrap();
        assert_eq!(receipt.receipt, 1_250_000);
        assert_eq!(receipt.diff_from_last_month, -3.5);

        let body = r#"{ "amount": 12, "diffFromYesterday": 20 }"#;
        let day: DayOrdersAmount = serde_json::from_str(body).unwrap();
        assert_eq!(day.amount, 12);
    }
}
