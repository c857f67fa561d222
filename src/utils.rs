use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::parse_timestamp;

pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Whole-number counters with thousands separators, e.g. `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_date_short(date: &DateTime<Utc>) -> String {
    format!("{} {}", get_month_name(date.month()), date.day())
}

pub fn format_date_full(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_optional_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(format_date_full).unwrap_or_else(|| "-".to_string())
}

pub fn get_month_name(month: u32) -> &'static str {
    match month {
        1 => "JAN",
        2 => "FEB",
        3 => "MAR",
        4 => "APR",
        5 => "MAY",
        6 => "JUN",
        7 => "JUL",
        8 => "AUG",
        9 => "SEP",
        10 => "OCT",
        11 => "NOV",
        12 => "DEC",
        _ => "???",
    }
}

pub fn format_month(year: i32, month: u32) -> String {
    format!("{} {}", get_month_name(month), year)
}

/// `"2024-03"` becomes `"MAR 2024"`. Anything else is returned unchanged.
pub fn format_month_key(key: &str) -> String {
    key.split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .filter(|(_, m)| (1..=12).contains(m))
        .map(|(y, m)| format_month(y, m))
        .unwrap_or_else(|| key.to_string())
}

/// Accepts `YYYY-MM-DD` or a full timestamp, as typed on the command line.
pub fn parse_date_input(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(value)
}

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
