//! Markdown catalog table.

mod columns;
mod row;

pub use columns::{format_columns, format_date, format_link};
pub use row::render_row;

use crate::project::Project;
use crate::url_label::{LabelError, LabelRules};

/// Column headers, in order.
pub const HEADER: [&str; 7] = ["Name", "Authors", "Languages", "Tags", "Date", "Spec", "Source"];

/// Fixed cumulative padding per column; 0 lets the last column grow.
pub const COLUMN_PADDING: [usize; 7] = [46, 16, 10, 12, 10, 3, 0];

/// Renders the catalog table using the built-in label rules.
pub fn render_table(projects: &[Project]) -> Result<String, LabelError> {
    render_table_with(projects, &LabelRules::default())
}

/// Renders header, separator and one row per project, joined by `\n`
/// (no trailing newline). The first unlabelable source URL aborts the table.
pub fn render_table_with(projects: &[Project], rules: &LabelRules) -> Result<String, LabelError> {
    let mut out = String::new();
    render_row(&mut out, &COLUMN_PADDING, &HEADER, false);
    out.push('\n');
    render_row(&mut out, &COLUMN_PADDING, &HEADER, true);
    for project in projects {
        out.push('\n');
        let row = format_columns(project, rules)?;
        render_row(&mut out, &COLUMN_PADDING, &row, false);
    }
    Ok(out)
}
