//! Output formatting module
//!
//! Handles table, CSV, JSON and YAML output for AvaTax records and sync
//! results.

mod common;
mod records;
mod sync;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

pub use common::{escape_csv, print_json, print_yaml};
pub use records::PermissionRow;
pub use sync::{output_metadata, output_sync_report};

/// A record that can be rendered as a table or CSV row
pub trait Tabular {
    /// Column headers, in row order
    fn headers() -> Vec<&'static str>;

    /// Cell values for this record
    fn row(&self) -> Vec<String>;
}

/// Output records in the specified format
pub fn output_rows<T>(items: &[T], format: OutputFormat, no_header: bool)
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Table => println!("{}", render_table(items, no_header)),
        OutputFormat::Csv => print!("{}", render_csv(items, no_header)),
        OutputFormat::Json => print_json(items),
        OutputFormat::Yaml => print_yaml(items),
    }
}

pub(crate) fn render_table<T: Tabular>(items: &[T], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers());
    }
    for item in items {
        table.add_row(item.row());
    }
    table
}

pub(crate) fn render_csv<T: Tabular>(items: &[T], no_header: bool) -> String {
    let mut out = String::new();
    if !no_header {
        out.push_str(&T::headers().join(","));
        out.push('\n');
    }
    for item in items {
        let cells: Vec<String> = item.row().iter().map(|c| escape_csv(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
