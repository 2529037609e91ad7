//! Output formatting for the CLI.

use console::style;
use stash_commerce::catalog::Product;
use stash_commerce::surface::{Notifier, ScrollSurface};

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
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a product listing table.
    pub fn products(&self, products: &[&Product], currency: &str, trending: impl Fn(&str) -> bool) {
        if products.is_empty() {
            self.info("No products.");
            return;
        }

        let widths = [24, 12, 12, 8];
        self.table_row(&["NAME", "CATEGORY", "PRICE", ""], &widths);
        for product in products {
            let price = product.price.display(currency);
            let badge = if trending(&product.name) {
                style("🔥 hot").red().to_string()
            } else {
                String::new()
            };
            self.table_row(&[&product.name, &product.category, &price, &badge], &widths);
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Shows cart and checkout notifications as CLI messages.
impl Notifier for Output {
    fn notify(&self, message: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("»").magenta(), style(message).bold());
    }
}

/// A terminal has no page to scroll; name the section instead.
impl ScrollSurface for Output {
    fn scroll_to(&self, section: &str) {
        self.info(&format!("Jump to {}", style(format!("#{}", section)).cyan()));
    }
}
