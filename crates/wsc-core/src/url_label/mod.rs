//! Short display labels for catalog source URLs.
//!
//! Scheme-less strings are accepted and have no host, so they label as the
//! empty string. A source URL is first unwrapped if it points into the Wayback Machine, then
//! its host is stripped of `www.` and offered to an ordered chain of rules:
//!
//! 1. path prefix on a specific host (the whitespace mailing list archive)
//! 2. sub-site platforms, labelled by subdomain (`example.blogspot.com` → `example`)
//! 3. per-host path patterns (`reddit.com/r/foo/...` → `r/foo`)
//! 4. static host labels (`github.com` → `GitHub`)
//!
//! The first rule that produces a label wins; otherwise the host itself is the label.

mod archive;
mod rules;
mod source;

pub use rules::{
    HostLabelRule, LabelRule, LabelTarget, PathPatternRule, PathPrefixRule, SubSiteRule,
};

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("parse URL {url:?}: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("parse URL {url:?}: {reason}")]
    Invalid { url: String, reason: &'static str },
}

/// Ordered label rules; see the module docs for the default chain.
pub struct LabelRules {
    rules: Vec<Box<dyn LabelRule>>,
}

impl Default for LabelRules {
    fn default() -> Self {
        Self::with_host_labels(&BTreeMap::new())
    }
}

impl LabelRules {
    pub fn new(rules: Vec<Box<dyn LabelRule>>) -> Self {
        Self { rules }
    }

    /// Default chain with `extra` entries added to (or replacing) the built-in host labels.
    pub fn with_host_labels(extra: &BTreeMap<String, String>) -> Self {
        let mut hosts = HostLabelRule::default();
        hosts
            .labels
            .extend(extra.iter().map(|(h, l)| (h.clone(), l.clone())));
        Self::new(vec![
            Box::new(PathPrefixRule::mailing_list()),
            Box::new(SubSiteRule::default()),
            Box::new(PathPatternRule::default()),
            Box::new(hosts),
        ])
    }

    /// Derives the label for `raw`, failing only if a URL cannot be parsed.
    pub fn label(&self, raw: &str) -> Result<String, LabelError> {
        let url = archive::unwrap_archive(source::parse_source(raw)?)?;
        let host = url.host.strip_prefix("www.").unwrap_or(&url.host);
        let target = LabelTarget {
            host,
            path: &url.path,
        };
        let label = self
            .rules
            .iter()
            .find_map(|rule| rule.label(target))
            .unwrap_or_else(|| host.to_string());
        Ok(label)
    }
}

static DEFAULT_RULES: Lazy<LabelRules> = Lazy::new(LabelRules::default);

/// Label for `raw` using the built-in rule chain.
pub fn url_label(raw: &str) -> Result<String, LabelError> {
    DEFAULT_RULES.label(raw)
}
