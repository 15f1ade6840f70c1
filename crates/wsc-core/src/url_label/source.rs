//! Lenient parsing of catalog source URLs down to a host and a decoded path.
//!
//! Absolute URLs go through `url::Url`. Scheme-less strings (`example.com/foo`,
//! `//host/path`, the empty string) are read as references: they have no host
//! unless they start with `//`. Control characters, malformed `%` escapes and a
//! colon in the first segment of a scheme-less string are rejected.

use url::{Host, ParseError, Url};

use super::LabelError;

/// Host and percent-decoded path of a source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SourceUrl {
    /// Without IPv6 brackets or port; empty when the URL has no authority.
    pub host: String,
    pub path: String,
}

pub(super) fn parse_source(raw: &str) -> Result<SourceUrl, LabelError> {
    if raw.chars().any(|c| c < ' ' || c == '\x7f') {
        return Err(invalid(raw, "invalid control character in URL"));
    }
    match Url::parse(raw) {
        Ok(url) => {
            let host = match url.host() {
                Some(Host::Domain(domain)) => domain.to_string(),
                Some(Host::Ipv4(addr)) => addr.to_string(),
                Some(Host::Ipv6(addr)) => addr.to_string(),
                None => String::new(),
            };
            let path = decode_path(raw, url.path())?;
            Ok(SourceUrl { host, path })
        }
        Err(ParseError::RelativeUrlWithoutBase) => parse_reference(raw),
        Err(source) => Err(LabelError::Parse {
            url: raw.to_string(),
            source,
        }),
    }
}

fn parse_reference(raw: &str) -> Result<SourceUrl, LabelError> {
    let rest = raw.split_once('#').map_or(raw, |(before, _)| before);
    let rest = rest.split_once('?').map_or(rest, |(before, _)| before);

    if let Some(authority_and_path) = rest.strip_prefix("//") {
        let (authority, path) = match authority_and_path.find('/') {
            Some(i) => authority_and_path.split_at(i),
            None => (authority_and_path, ""),
        };
        return Ok(SourceUrl {
            host: authority_host(authority).to_string(),
            path: decode_path(raw, path)?,
        });
    }

    let first_segment = rest.split('/').next().unwrap_or("");
    if first_segment.contains(':') {
        return Err(invalid(raw, "missing protocol scheme"));
    }
    Ok(SourceUrl {
        host: String::new(),
        path: decode_path(raw, rest)?,
    })
}

/// Host part of `[userinfo@]host[:port]`, IPv6 brackets removed.
fn authority_host(authority: &str) -> &str {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split_once(']').map_or(bracketed, |(h, _)| h);
    }
    host_port.split_once(':').map_or(host_port, |(h, _)| h)
}

fn decode_path(raw: &str, path: &str) -> Result<String, LabelError> {
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(invalid(raw, "invalid URL escape"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    let decoded = urlencoding::decode_binary(bytes);
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}

fn invalid(raw: &str, reason: &'static str) -> LabelError {
    LabelError::Invalid {
        url: raw.to_string(),
        reason,
    }
}
