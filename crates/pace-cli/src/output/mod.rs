use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Responses that know their own table layout.
///
/// JSON output follows the serde shape; tables pick columns and labels
/// suited to reading in a terminal.
pub trait Tabular {
    fn headers(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_table(value)),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Tabular>(value: &T) -> String {
    let rows = value.rows();
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let prefs = ui::prefs();
    table::render_table(
        &value.headers(),
        &rows,
        table::TableOptions {
            max_width: prefs.term_width,
            color: prefs.table_color,
        },
    )
}

/// Owned header list from string literals.
pub fn header_row(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}
