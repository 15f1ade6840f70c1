//! Host/path label rules, tried in order by [`LabelRules`](super::LabelRules).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Host and percent-decoded path of a source URL after archive unwrapping and `www.` stripping.
#[derive(Debug, Clone, Copy)]
pub struct LabelTarget<'a> {
    pub host: &'a str,
    pub path: &'a str,
}

/// One label rule. Returns `None` to defer to the next rule.
pub trait LabelRule: Send + Sync {
    fn label(&self, target: LabelTarget<'_>) -> Option<String>;
}

/// Fixed label for a path prefix on one host.
#[derive(Debug, Clone)]
pub struct PathPrefixRule {
    pub host: String,
    pub prefix: String,
    pub label: String,
}

impl PathPrefixRule {
    /// The whitespace mailing list archive on the Durham CompSoc site.
    pub fn mailing_list() -> Self {
        Self {
            host: "compsoc.dur.ac.uk".to_string(),
            prefix: "/archives/whitespace/".to_string(),
            label: "Mailing list".to_string(),
        }
    }
}

impl LabelRule for PathPrefixRule {
    fn label(&self, target: LabelTarget<'_>) -> Option<String> {
        (target.host == self.host && target.path.starts_with(&self.prefix))
            .then(|| self.label.clone())
    }
}

/// Platforms hosting one site per subdomain; the subdomain is the label.
#[derive(Debug, Clone)]
pub struct SubSiteRule {
    pub platforms: Vec<String>,
}

impl Default for SubSiteRule {
    fn default() -> Self {
        Self {
            platforms: vec!["blogspot.com".to_string()],
        }
    }
}

impl LabelRule for SubSiteRule {
    fn label(&self, target: LabelTarget<'_>) -> Option<String> {
        let (sub, parent) = target.host.split_once('.')?;
        self.platforms
            .iter()
            .any(|p| p == parent)
            .then(|| sub.to_string())
    }
}

static SUBREDDIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(r/[^/]+).*").expect("subreddit pattern is valid"));

/// Per-host regex replaced by `$1` over the path; a non-empty result is the label.
#[derive(Debug, Clone)]
pub struct PathPatternRule {
    pub patterns: HashMap<String, Regex>,
}

impl Default for PathPatternRule {
    fn default() -> Self {
        let mut patterns = HashMap::new();
        patterns.insert("reddit.com".to_string(), SUBREDDIT.clone());
        Self { patterns }
    }
}

impl LabelRule for PathPatternRule {
    fn label(&self, target: LabelTarget<'_>) -> Option<String> {
        let pattern = self.patterns.get(target.host)?;
        let label = pattern.replace_all(target.path, "$1");
        (!label.is_empty()).then(|| label.into_owned())
    }
}

/// Static host → label table.
#[derive(Debug, Clone)]
pub struct HostLabelRule {
    pub labels: HashMap<String, String>,
}

const BUILTIN_HOST_LABELS: &[(&str, &str)] = &[
    ("github.com", "GitHub"),
    ("gitlab.com", "GitLab"),
    ("gist.github.com", "GitHub Gist"),
    ("news.ycombinator.com", "HN"),
    ("codegolf.stackexchange.com", "Code Golf"),
    ("code.activestate.com", "ActiveState Code"),
    ("compsoc.dur.ac.uk", "CompSoc"),
    ("cs.newcastle.edu.au", "Newcastle"),
    ("what.thedailywtf.com", "What the Daily WTF?"),
];

impl Default for HostLabelRule {
    fn default() -> Self {
        Self {
            labels: BUILTIN_HOST_LABELS
                .iter()
                .map(|(host, label)| (host.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl LabelRule for HostLabelRule {
    fn label(&self, target: LabelTarget<'_>) -> Option<String> {
        self.labels.get(target.host).cloned()
    }
}
