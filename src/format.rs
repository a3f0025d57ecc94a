//! Display Formatting
//!
//! Labels and colors for todo fields.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{TodoPriority, TodoStatus};

pub const MUTED_COLOR: &str = "gray";

pub fn priority_label(priority: TodoPriority) -> &'static str {
    match priority {
        TodoPriority::Low => "Low",
        TodoPriority::Medium => "Medium",
        TodoPriority::High => "High",
        TodoPriority::Urgent => "Urgent",
    }
}

pub fn priority_color(priority: TodoPriority) -> &'static str {
    match priority {
        TodoPriority::Urgent => "red",
        TodoPriority::High => "orange",
        TodoPriority::Medium => "blue",
        TodoPriority::Low => MUTED_COLOR,
    }
}

pub fn status_label(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Pending => "Pending",
        TodoStatus::InProgress => "In Progress",
        TodoStatus::Completed => "Completed",
        TodoStatus::Cancelled => "Cancelled",
    }
}

pub fn status_color(status: TodoStatus) -> &'static str {
    match status {
        TodoStatus::Completed => "green",
        TodoStatus::InProgress => "blue",
        TodoStatus::Pending | TodoStatus::Cancelled => MUTED_COLOR,
    }
}

/// `None` when the description is missing or blank
pub fn description_text(description: Option<&str>) -> Option<&str> {
    description.filter(|d| !d.trim().is_empty())
}

/// Short date such as `3/1/2025`
pub fn due_date_label(due_date: Option<NaiveDateTime>) -> Option<String> {
    due_date.map(|d| d.format("%-m/%-d/%Y").to_string())
}

/// Value for an `<input type="date">`
pub fn date_input_value(date: Option<NaiveDateTime>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Parse an `<input type="date">` value; empty input is `Ok(None)`
pub fn parse_date_input(value: &str) -> Result<Option<NaiveDateTime>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or_else(|| format!("Invalid date: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_colors() {
        assert_eq!(priority_color(TodoPriority::Urgent), "red");
        assert_eq!(priority_color(TodoPriority::High), "orange");
        assert_eq!(priority_color(TodoPriority::Medium), "blue");
        assert_eq!(priority_color(TodoPriority::Low), "gray");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(TodoStatus::InProgress), "In Progress");
        assert_eq!(status_color(TodoStatus::Completed), "green");
        assert_eq!(status_color(TodoStatus::Cancelled), "gray");
    }

    #[test]
    fn test_description_text() {
        assert_eq!(description_text(Some("milk")), Some("milk"));
        assert_eq!(description_text(Some("  ")), None);
        assert_eq!(description_text(None), None);
    }

    #[test]
    fn test_dates() {
        let due = parse_date_input("2025-03-01").unwrap();
        assert_eq!(due_date_label(due).as_deref(), Some("3/1/2025"));
        assert_eq!(date_input_value(due), "2025-03-01");
        assert_eq!(due_date_label(None), None);
        assert_eq!(parse_date_input(""), Ok(None));
        assert!(parse_date_input("03/01/2025").is_err());
    }
}
