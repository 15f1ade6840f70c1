//! `wsc licenses` – fill in missing licenses from GitHub, print catalog to stdout.

use anyhow::Result;
use std::path::PathBuf;
use wsc_core::config::WscConfig;
use wsc_core::license::{enrich, GitHubClient};
use wsc_core::project::{load_projects, write_projects_json};

pub fn run_licenses(cfg: &WscConfig, projects: Option<PathBuf>) -> Result<()> {
    let path = projects.unwrap_or_else(|| cfg.projects_file.clone());
    let projects = load_projects(&path)?;
    let client = GitHubClient::from_config(cfg);

    let progress = |url: &str| eprintln!("Getting license for {url}");
    let outcome = enrich(projects, &client, Some(&progress));
    if let Some(err) = &outcome.error {
        // Partial results are still printed.
        eprintln!("{err}");
    }
    tracing::info!(
        updated = outcome.updated,
        stopped_early = outcome.error.is_some(),
        "license pass finished"
    );

    write_projects_json(std::io::stdout().lock(), &outcome.projects)
}
