//! GitHub `GET /repos/{owner}/{repo}/license` response body.

use serde::Deserialize;

use super::LicenseError;

/// License marker for `NOASSERTION` (GitHub could not identify the license).
pub const OTHER: &str = "other";
/// License marker for repositories that no longer exist.
pub const NOT_FOUND: &str = "not found";

/// Only the fields used for resolution; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseInfo {
    #[serde(default)]
    pub spdx_id: Option<String>,
}

impl LicenseResponse {
    /// Maps the response to a catalog license value.
    ///
    /// An SPDX id wins over any message. An empty string means the license is
    /// still unknown; the project is left unchanged.
    pub fn resolve(&self) -> Result<String, LicenseError> {
        let id = self
            .license
            .as_ref()
            .and_then(|l| l.spdx_id.as_deref())
            .unwrap_or("");
        if !id.is_empty() {
            return Ok(match id {
                "NOASSERTION" => OTHER.to_string(),
                _ => id.to_string(),
            });
        }
        match self.message.as_deref().unwrap_or("") {
            "" => Ok(String::new()),
            "Not Found" => Ok(NOT_FOUND.to_string()),
            msg => Err(LicenseError::Message(msg.to_string())),
        }
    }
}
