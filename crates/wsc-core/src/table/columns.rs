//! Cell text for one project row.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::project::Project;
use crate::url_label::{LabelError, LabelRules};

/// Catalog dates look like `2003-04-01 12:00:00 +0100`.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// chrono's `%z` also accepts `+01:00` and its numeric fields accept single
/// digits; catalog dates must have exactly this shape.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4}$")
        .expect("date shape pattern is valid")
});

/// Cells for `project` in table column order.
pub fn format_columns(project: &Project, rules: &LabelRules) -> Result<Vec<String>, LabelError> {
    let name = if project.path.is_empty() {
        project.name.clone()
    } else {
        format_link(&project.name, &project.path)
    };

    let links = project
        .source
        .iter()
        .map(|src| rules.label(src).map(|label| format_link(&label, src)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(vec![
        name,
        project.authors.join(", "),
        project.languages.join(", "),
        project.tags.join(", "),
        format_date(&project.date),
        project.spec_version.clone(),
        links.join(", "),
    ])
}

/// Shortens a catalog timestamp to its date (in the timestamp's own offset).
/// Anything not in the catalog timestamp format is returned as is.
pub fn format_date(date: &str) -> String {
    if !DATE_SHAPE.is_match(date) {
        return date.to_string();
    }
    match DateTime::parse_from_str(date, DATE_INPUT_FORMAT) {
        Ok(t) => t.format(DATE_OUTPUT_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}

/// Markdown link with `]` escaped in the label and `)` escaped in the URL.
pub fn format_link(label: &str, url: &str) -> String {
    format!(
        "[{}]({})",
        label.replace(']', r"\]"),
        url.replace(')', r"\)")
    )
}
