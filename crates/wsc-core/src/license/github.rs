//! GitHub REST client for the repository license endpoint.
//!
//! Uses the curl crate (libcurl). One blocking GET per call, redirects followed,
//! no timeout beyond libcurl's defaults.

use crate::config::WscConfig;

use super::response::LicenseResponse;
use super::{LicenseError, LicenseSource};

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("wsc/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GitHubClient {
    api_base: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            api_base: api_base.into(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Client for `cfg.github_api_base`, authenticated if the token variable is set.
    pub fn from_config(cfg: &WscConfig) -> Self {
        Self::new(cfg.github_api_base.clone(), cfg.github_token())
    }

    /// License endpoint for `repo` (`owner/name`).
    pub fn license_url(&self, repo: &str) -> String {
        format!(
            "{}/repos/{}/license",
            self.api_base.trim_end_matches('/'),
            repo
        )
    }

    /// Request header lines; `Authorization` only when a token is configured.
    fn headers(&self) -> Vec<String> {
        let mut headers = vec![format!("Accept: {ACCEPT}")];
        if let Some(token) = &self.token {
            headers.push(format!("Authorization: token {token}"));
        }
        headers
    }

    /// GETs `url` and returns the status code and body.
    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(USER_AGENT)?;

        let mut list = curl::easy::List::new();
        for header in self.headers() {
            list.append(&header)?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl LicenseSource for GitHubClient {
    fn license(&self, repo: &str) -> Result<String, LicenseError> {
        let url = self.license_url(repo);
        let (code, body) = self.get(&url).map_err(|source| LicenseError::Transport {
            url: url.clone(),
            source,
        })?;
        tracing::debug!(%url, code, bytes = body.len(), "license response");
        // Error statuses still carry a JSON body with `message`.
        let resp: LicenseResponse =
            serde_json::from_slice(&body).map_err(|source| LicenseError::Decode {
                url: url.clone(),
                source,
            })?;
        resp.resolve()
    }
}
