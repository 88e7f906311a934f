//! Formatting utilities for display

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde_json::{Map, Value};

/// Shown on detail pages for absent or meaningless values.
pub const PLACEHOLDER: &str = "No disponible";

/// Shown in list cells for absent values.
pub const CELL_PLACEHOLDER: &str = "N/A";

/// Sentinel strings the catalog uses for "no value".
const EMPTY_SENTINELS: &[&str] = &["unknown", "n/a"];

/// Turn a field name into a label: `birth_year` -> `Birth Year`.
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut at_word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphanumeric() {
            if at_word_start {
                label.extend(ch.to_uppercase());
            } else {
                label.push(ch);
            }
            at_word_start = false;
        } else {
            label.push(ch);
            at_word_start = true;
        }
    }
    label
}

/// List table header: `release_date` -> `RELEASE DATE`.
pub fn column_header(field: &str) -> String {
    field.replace('_', " ").to_uppercase()
}

/// Plain string coercion of a JSON value (no quotes around strings).
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(value_to_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty() || EMPTY_SENTINELS.contains(&s.as_str()),
        _ => false,
    }
}

/// Format a detail-page value according to its field name.
pub fn format_value(key: &str, value: &Value) -> String {
    if is_empty_value(value) {
        return PLACEHOLDER.to_string();
    }

    if key.contains("date") {
        if let Value::String(raw) = value {
            return format_date_es(raw).unwrap_or_else(|| raw.clone());
        }
    }

    value_to_text(value)
}

/// A list-table cell: the raw field value, or `N/A` when absent.
pub fn format_cell(record: &Map<String, Value>, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => CELL_PLACEHOLDER.to_string(),
        Some(Value::String(s)) if s.is_empty() => CELL_PLACEHOLDER.to_string(),
        Some(value) => value_to_text(value),
    }
}

/// `name`, falling back to `title`.
pub fn record_title(record: &Map<String, Value>) -> Option<String> {
    ["name", "title"]
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !is_empty_value(value))
        .map(value_to_text)
}

/// The record's `id`, numeric or string.
pub fn record_id(record: &Map<String, Value>) -> Option<String> {
    match record.get("id")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

enum ParsedTimestamp {
    Instant(DateTime<FixedOffset>),
    Wall(NaiveDateTime),
    Day(NaiveDate),
}

fn parse_timestamp(raw: &str) -> Option<ParsedTimestamp> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(ParsedTimestamp::Instant(instant));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(wall) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(ParsedTimestamp::Wall(wall));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(ParsedTimestamp::Day)
}

fn wall_clock_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    Some(match parse_timestamp(raw)? {
        ParsedTimestamp::Instant(instant) => instant.with_timezone(tz).naive_local(),
        ParsedTimestamp::Wall(wall) => wall,
        ParsedTimestamp::Day(day) => day.and_hms_opt(0, 0, 0)?,
    })
}

/// Short Spanish date (`25/5/1977`) in the given time zone.
pub fn format_date_es_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String> {
    let wall = wall_clock_in(raw, tz)?;
    Some(format!("{}/{}/{}", wall.day(), wall.month(), wall.year()))
}

/// Spanish date and time (`25/5/2024, 9:03:07`) in the given time zone.
pub fn format_datetime_es_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String> {
    let wall = wall_clock_in(raw, tz)?;
    Some(format!(
        "{}/{}/{}, {}:{:02}:{:02}",
        wall.day(),
        wall.month(),
        wall.year(),
        wall.hour(),
        wall.minute(),
        wall.second()
    ))
}

/// Short Spanish date in the browser's local time zone.
pub fn format_date_es(raw: &str) -> Option<String> {
    format_date_es_in(raw, &Local)
}

/// "Último acceso" line of the home page.
pub fn format_last_login(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(raw) if !raw.trim().is_empty() => {
            format_datetime_es_in(raw, &Local).unwrap_or_else(|| raw.to_string())
        }
        _ => PLACEHOLDER.to_string(),
    }
}
