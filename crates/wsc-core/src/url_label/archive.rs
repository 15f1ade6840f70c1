//! Unwrapping of Wayback Machine snapshot URLs.

use super::source::{parse_source, SourceUrl};
use super::LabelError;

const ARCHIVE_HOST: &str = "web.archive.org";
const ARCHIVE_PREFIX: &str = "/web/";

/// If `url` is a snapshot URL (`https://web.archive.org/web/<timestamp>/<original>`),
/// returns the parsed original URL. Any other URL is returned unchanged.
pub(super) fn unwrap_archive(url: SourceUrl) -> Result<SourceUrl, LabelError> {
    if url.host != ARCHIVE_HOST {
        return Ok(url);
    }
    let Some(rest) = url.path.strip_prefix(ARCHIVE_PREFIX) else {
        return Ok(url);
    };
    match rest.split_once('/') {
        Some((_timestamp, original)) => parse_source(original),
        None => Ok(url),
    }
}
