use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
    } else {
        let rows: Vec<R> = items.iter().map(|item| to_row(item)).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a message (or a simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_json_output() {
        println!("{}", message_json(message));
    } else {
        println!("{message}");
    }
}

fn message_json(message: &str) -> String {
    serde_json::json!({ "message": message }).to_string()
}

/// Format status with color based on its name
pub fn status_colored(status: &str) -> String {
    let lower = status.to_lowercase();
    if lower.contains("done")
        || lower.contains("conclu")
        || lower.contains("resolved")
        || lower.contains("closed")
        || lower.contains("fechado")
    {
        status.green().to_string()
    } else if lower.contains("progress") || lower.contains("andamento") {
        status.blue().to_string()
    } else if lower.contains("review") {
        status.magenta().to_string()
    } else if lower.contains("blocked") || lower.contains("cancel") {
        status.red().to_string()
    } else if lower.contains("backlog") || lower.contains("to do") {
        status.bright_black().to_string()
    } else {
        status.to_string()
    }
}

/// Format priority with color
pub fn priority_colored(priority: &str) -> String {
    match priority.to_lowercase().as_str() {
        "highest" | "critical" | "blocker" => priority.red().bold().to_string(),
        "high" | "major" => priority.yellow().bold().to_string(),
        "medium" | "normal" => priority.blue().to_string(),
        "low" | "minor" | "lowest" => priority.bright_black().to_string(),
        _ => priority.to_string(),
    }
}

/// Horizontal bar scaled against the series maximum
pub fn bar(count: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = ((count as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.max(usize::from(count > 0)))
}

/// Format an ISO datetime string as date only
pub fn format_date_only(iso: &str) -> String {
    use chrono::{DateTime, Utc};

    if let Ok(dt) = iso.parse::<DateTime<Utc>>() {
        dt.format("%Y-%m-%d").to_string()
    } else {
        iso.split('T').next().unwrap_or(iso).to_string()
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer summary here", 10), "a longe...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Must not cut inside a multi-byte character.
        assert_eq!(truncate("versão da aplicação", 9), "versão...");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 10, 20), "");
        assert_eq!(bar(10, 10, 20).chars().count(), 20);
        assert_eq!(bar(5, 10, 20).chars().count(), 10);
        // Tiny but non-zero counts still show one cell.
        assert_eq!(bar(1, 1000, 20).chars().count(), 1);
    }

    #[test]
    fn test_bar_zero_max() {
        assert_eq!(bar(0, 0, 20), "");
    }

    #[test]
    fn test_message_json_escapes_everything() {
        for message in ["plain", "with \"quotes\"", "back\\slash", "tab\there\nand newline"] {
            let value: serde_json::Value = serde_json::from_str(&message_json(message)).unwrap();
            assert_eq!(value["message"], *message);
        }
    }

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_date_only("2024-03-05T10:30:00Z"), "2024-03-05");
        assert_eq!(format_date_only("2024-03-05"), "2024-03-05");
        assert_eq!(format_date_only("not-a-date"), "not-a-date");
    }
}
