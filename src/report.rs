// Text rendering helpers for the command line
use chrono::NaiveDate;

use crate::error::{Result, ShippingError};
use crate::models::ShippingTask;

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ShippingError::InvalidDate(raw.to_string()))
}

/// Human label for a due date: overdue and same-day tasks read "today", the
/// rest of the week by weekday name, anything later as a plain date.
pub fn due_label(due: NaiveDate, today: NaiveDate) -> String {
    match (due - today).num_days() {
        i64::MIN..=0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        2..=6 => due.format("%A").to_string(),
        _ => due.format("%Y-%m-%d").to_string(),
    }
}

/// `"643 AL, 357 ALO"` in ticker order.
pub fn materials_summary(task: &ShippingTask) -> String {
    task.materials()
        .iter()
        .map(|(ticker, amount)| format!("{} {}", amount, ticker))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn task_line(task: &ShippingTask, today: NaiveDate) -> String {
    format!(
        "{:<10} {:<6} {} {} ({}): {}",
        due_label(task.due_date(), today),
        task.task_type().to_string().to_uppercase(),
        task.ship_class(),
        task.planet_name(),
        task.planet_id(),
        materials_summary(task)
    )
}
