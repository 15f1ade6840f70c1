//! Minimal text templates for the generated README.
//!
//! Supported actions:
//! - `{{ .name }}` inserts the value of field `name`
//! - `{{/* ... */}}` is a comment
//! - `{{-` trims whitespace before the action, `-}}` trims whitespace after it

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template: line {line}: unclosed action")]
    Unclosed { line: usize },
    #[error("template: line {line}: missing value for action")]
    Empty { line: usize },
    #[error("template: line {line}: unsupported action {action:?}")]
    Unsupported { line: usize, action: String },
    #[error("template: no value for field .{0}")]
    MissingField(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Field(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Reads and parses the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read template: {}", path.display()))?;
        let tmpl = Self::parse(&text).with_context(|| format!("parse template: {}", path.display()))?;
        Ok(tmpl)
    }

    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut nodes = Vec::new();
        let mut pending = String::new();
        let mut rest = text;
        let mut trim_next = false;

        while let Some(open) = rest.find("{{") {
            let line = line_of(text, rest, open);
            let mut literal = &rest[..open];
            if trim_next {
                literal = literal.trim_start();
            }
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or(TemplateError::Unclosed { line })?;
            let mut inner = &after_open[..close];
            rest = &after_open[close + 2..];

            if let Some(stripped) = inner.strip_prefix("- ") {
                literal = literal.trim_end();
                inner = stripped;
            }
            trim_next = false;
            if let Some(stripped) = inner.strip_suffix(" -") {
                trim_next = true;
                inner = stripped;
            }
            pending.push_str(literal);

            let action = inner.trim();
            if action.is_empty() {
                return Err(TemplateError::Empty { line });
            }
            if action.starts_with("/*") && action.ends_with("*/") && action.len() >= 4 {
                continue;
            }
            match action.strip_prefix('.') {
                Some(field) if is_identifier(field) => {
                    if !pending.is_empty() {
                        nodes.push(Node::Text(std::mem::take(&mut pending)));
                    }
                    nodes.push(Node::Field(field.to_string()));
                }
                _ => {
                    return Err(TemplateError::Unsupported {
                        line,
                        action: action.to_string(),
                    })
                }
            }
        }

        pending.push_str(if trim_next { rest.trim_start() } else { rest });
        if !pending.is_empty() {
            nodes.push(Node::Text(pending));
        }
        Ok(Self { nodes })
    }

    /// Renders the template with `data` supplying field values.
    pub fn execute(&self, data: &HashMap<&str, &str>) -> Result<String, TemplateError> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Field(name) => {
                    let value = data
                        .get(name.as_str())
                        .ok_or_else(|| TemplateError::MissingField(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// 1-based line of `rest[offset]` within `text` (`rest` is a suffix of `text`).
fn line_of(text: &str, rest: &str, offset: usize) -> usize {
    let consumed = text.len() - rest.len() + offset;
    text[..consumed].matches('\n').count() + 1
}
