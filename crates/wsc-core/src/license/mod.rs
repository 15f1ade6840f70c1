//! License enrichment: fill in missing `license` fields from GitHub.
//!
//! Only projects whose first source URL is a bare GitHub repository URL are
//! looked up. Lookups run one at a time; the first failed lookup stops the pass,
//! and the collection is handed back as far as it got.

mod github;
mod response;

pub use github::GitHubClient;
pub use response::{LicenseInfo, LicenseResponse, NOT_FOUND, OTHER};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::project::Project;

#[derive(Debug, thiserror::Error)]
pub enum LicenseError {
    #[error("message: {0}")]
    Message(String),
    #[error("request {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can resolve the license of a GitHub repository (`owner/name`).
pub trait LicenseSource {
    fn license(&self, repo: &str) -> Result<String, LicenseError>;
}

/// A lookup failure that stopped the pass.
#[derive(Debug, thiserror::Error)]
#[error("license lookup for {repo} failed: {source}")]
pub struct EnrichError {
    /// Index of the project whose lookup failed.
    pub index: usize,
    pub repo: String,
    #[source]
    pub source: LicenseError,
}

/// Result of an enrichment pass.
#[derive(Debug)]
pub struct EnrichOutcome {
    /// All projects, in input order, enriched up to the point the pass stopped.
    pub projects: Vec<Project>,
    /// Number of projects whose license was filled in.
    pub updated: usize,
    pub error: Option<EnrichError>,
}

const GITHUB_PREFIX: &str = "https://github.com/";

static GITHUB_REPO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/[^/]+/[^/]+$").expect("GitHub repo pattern is valid")
});

/// `owner/name` if the project needs a license and its first source is a GitHub repo.
pub fn lookup_target(project: &Project) -> Option<&str> {
    if project.has_license() {
        return None;
    }
    let first = project.source.first()?;
    if !GITHUB_REPO.is_match(first) {
        return None;
    }
    first.strip_prefix(GITHUB_PREFIX)
}

/// Fills in missing licenses using `source`.
///
/// `progress` is called with each source URL before it is looked up. Projects
/// that already have a license are never looked up.
pub fn enrich<S: LicenseSource + ?Sized>(
    mut projects: Vec<Project>,
    source: &S,
    progress: Option<&dyn Fn(&str)>,
) -> EnrichOutcome {
    let mut updated = 0;
    let mut error = None;

    for (index, project) in projects.iter_mut().enumerate() {
        let Some(repo) = lookup_target(project) else {
            continue;
        };
        let repo = repo.to_string();
        if let Some(progress) = progress {
            progress(&project.source[0]);
        }
        tracing::info!(%repo, "getting license");
        match source.license(&repo) {
            Ok(license) if license.is_empty() => {
                tracing::debug!(%repo, "license unresolved");
            }
            Ok(license) => {
                tracing::debug!(%repo, %license, "license resolved");
                project.license = license;
                updated += 1;
            }
            Err(err) => {
                tracing::error!(%repo, "license lookup failed: {err}");
                error = Some(EnrichError {
                    index,
                    repo,
                    source: err,
                });
                break;
            }
        }
    }

    EnrichOutcome {
        projects,
        updated,
        error,
    }
}
