use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format epoch milliseconds as local "2025-01-15 09:30"
pub fn format_timestamp(millis: i64) -> String {
    format_in(millis, &Local)
}

fn format_in<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => "unknown".to_string(),
    }
}
