/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Format datetime to DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Format date to DD.MM.YYYY
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Короткая подпись дня для графика: "15/03"
pub fn format_day_label(value: &NaiveDate) -> String {
    value.format("%d/%m").to_string()
}

/// Выбор формы слова по числу: 1 минуту, 2 минуты, 5 минут
fn plural<'a>(n: i64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n = n.abs();
    if (11..=14).contains(&(n % 100)) {
        return many;
    }
    match n % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

/// Сколько времени прошло: "5 минут назад", "вчера", "3 месяца назад"
pub fn format_relative(value: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = *now - *value;

    if elapsed < Duration::minutes(1) {
        return "только что".to_string();
    }
    if elapsed < Duration::hours(1) {
        let n = elapsed.num_minutes();
        return format!("{} {} назад", n, plural(n, "минуту", "минуты", "минут"));
    }
    if elapsed < Duration::days(1) {
        let n = elapsed.num_hours();
        return format!("{} {} назад", n, plural(n, "час", "часа", "часов"));
    }
    if elapsed < Duration::days(2) {
        return "вчера".to_string();
    }
    if elapsed < Duration::days(30) {
        let n = elapsed.num_days();
        return format!("{} {} назад", n, plural(n, "день", "дня", "дней"));
    }
    if elapsed < Duration::days(365) {
        let n = elapsed.num_days() / 30;
        return format!("{} {} назад", n, plural(n, "месяц", "месяца", "месяцев"));
    }
    let n = elapsed.num_days() / 365;
    format!("{} {} назад", n, plural(n, "год", "года", "лет"))
}

/// Период по умолчанию для графика выручки: последние 7 дней
pub fn default_receipt_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(7), today)
}
