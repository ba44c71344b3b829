//! Утилиты форматирования чисел и денег

/// Целая часть с разделителем тысяч (пробел)
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Сумма в копейках -> "1 234.56 ₽"
pub fn format_money_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}{}.{:02} ₽",
        sign,
        format_thousands((abs / 100) as i64),
        abs % 100
    )
}

/// Неотрицательная сумма в копейках (цены и итоги заказов).
/// Значения больше `i64::MAX` выводятся как `i64::MAX`.
pub fn format_price_cents(cents: u64) -> String {
    format_money_cents(i64::try_from(cents).unwrap_or(i64::MAX))
}

/// Изменение в процентах со знаком: "+2.5%", "-10%"
pub fn format_diff_percent(diff: f64) -> String {
    let rounded = (diff * 10.0).round() / 10.0;
    let text = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded.abs())
    } else {
        format!("{:.1}", rounded.abs())
    };
    if rounded > 0.0 {
        format!("+{}%", text)
    } else if rounded < 0.0 {
        format!("-{}%", text)
    } else {
        "0%".to_string()
    }
}

/// Доля `part` от `total` в процентах, округлённая до целого
pub fn share_percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
