//! README generation: catalog → table → template → output file.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::WscConfig;
use crate::project::{load_projects, Project};
use crate::table::render_table_with;
use crate::template::Template;
use crate::url_label::LabelRules;

/// Template field holding the rendered table.
pub const PROJECTS_FIELD: &str = "projects";

/// Files read and written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratePaths {
    pub projects: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl GeneratePaths {
    pub fn from_config(cfg: &WscConfig) -> Self {
        Self {
            projects: cfg.projects_file.clone(),
            template: cfg.template_file.clone(),
            output: cfg.output_file.clone(),
        }
    }
}

/// Renders the catalog table and injects it into `template`.
pub fn render_document(
    projects: &[Project],
    template: &Template,
    rules: &LabelRules,
) -> Result<String> {
    let table = render_table_with(projects, rules).context("render project table")?;
    let mut data = HashMap::new();
    data.insert(PROJECTS_FIELD, table.as_str());
    let doc = template.execute(&data)?;
    Ok(doc)
}

/// Generates the output document. Nothing is written unless every step succeeds.
/// Returns the number of projects in the table.
pub fn generate(paths: &GeneratePaths, rules: &LabelRules) -> Result<usize> {
    let projects = load_projects(&paths.projects)?;
    let template = Template::from_file(&paths.template)?;
    let doc = render_document(&projects, &template, rules)?;
    std::fs::write(&paths.output, doc)
        .with_context(|| format!("write output: {}", paths.output.display()))?;
    tracing::info!(
        projects = projects.len(),
        "wrote {}",
        paths.output.display()
    );
    Ok(projects.len())
}
