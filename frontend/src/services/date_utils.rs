use chrono::{Local, NaiveDate, TimeZone};

/// Long form of a date, e.g. "Monday, 15 June 2026"
pub fn format_selected_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Local date and time of an epoch-millisecond timestamp, e.g. "15 Jun 2026 10:00"
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(when) => when.format("%-d %b %Y %H:%M").to_string(),
        None => String::new(),
    }
}

/// Amount with thousands separators; decimals only when there is a fraction
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, fraction)
    }
}
