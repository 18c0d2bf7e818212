//! Output formatting for the CLI.

use std::time::Duration;

use bookshop_commerce::prelude::{OfferStatus, OrderStatus};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: u8, total: u8, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad to a display width, truncating long values with an ellipsis.
fn pad(col: &str, width: usize) -> String {
    let visible = console::measure_text_width(col);
    if visible > width && width > 1 {
        let cut = console::truncate_str(col, width, "…");
        return cut.into_owned();
    }
    format!("{}{}", col, " ".repeat(width.saturating_sub(visible)))
}

/// Colored status label for an order.
pub fn status_badge(status: OrderStatus) -> String {
    let label = status.display_name();
    match status {
        OrderStatus::Delivered => style(label).green().to_string(),
        OrderStatus::Pending => style(label).yellow().to_string(),
        OrderStatus::Processing => style(label).blue().to_string(),
        OrderStatus::Shipped => style(label).magenta().to_string(),
        OrderStatus::Cancelled => style(label).red().to_string(),
    }
}

/// Colored status label for an offer.
pub fn offer_badge(status: OfferStatus) -> String {
    let label = status.display_name();
    match status {
        OfferStatus::Active => style(label).green().to_string(),
        OfferStatus::Scheduled => style(label).yellow().to_string(),
        OfferStatus::Expired => style(label).red().to_string(),
    }
}

/// Star rating rounded to the nearest half.
pub fn format_rating(rating: f64) -> String {
    let halves = (rating * 2.0).round().clamp(0.0, 10.0) as usize;
    let mut stars = "★".repeat(halves / 2);
    if halves % 2 == 1 {
        stars.push('½');
    }
    format!("{stars} {rating:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_and_truncate() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdefgh", 5), "abcd…");
        assert_eq!(pad("abc", 3), "abc");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.5), "★★★★½ 4.5");
        assert_eq!(format_rating(4.2), "★★★★ 4.2");
        assert_eq!(format_rating(4.3), "★★★★½ 4.3");
        assert_eq!(format_rating(4.8), "★★★★★ 4.8");
    }
}
