//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use folio_service::{RowKind, TreeRow};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No folders found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{:#?}", item),
        OutputFormat::Json => print_json(item),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
}

/// Print rendered tree rows as an indented outline
pub fn print_outline(rows: &[TreeRow]) {
    if rows.is_empty() {
        println!("No folders found.");
        return;
    }
    for line in outline(rows) {
        println!("{}", line);
    }
}

/// Render tree rows as indented lines
pub fn outline(rows: &[TreeRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let marker = match (row.kind, row.expanded) {
                (RowKind::Leaf, _) => "·",
                (RowKind::NewFolder, _) => "+",
                (_, true) => "▾",
                (_, false) if row.expandable => "▸",
                _ => " ",
            };
            match row.count {
                Some(count) if count > 0 => format!("{indent}{marker} {} ({count})", row.label),
                _ => format!("{indent}{marker} {}", row.label),
            }
        })
        .collect()
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
