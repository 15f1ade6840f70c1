//! Read and write the catalog JSON array.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::Project;

/// Reads the catalog file at `path`.
pub fn load_projects(path: &Path) -> Result<Vec<Project>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read projects file: {}", path.display()))?;
    let projects = decode_projects(&bytes)
        .with_context(|| format!("parse projects JSON: {}", path.display()))?;
    tracing::debug!(count = projects.len(), "loaded projects from {}", path.display());
    Ok(projects)
}

/// Decodes a JSON array of project records.
pub fn decode_projects(bytes: &[u8]) -> Result<Vec<Project>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Writes `projects` as one compact JSON line. `<`, `>` and `&` are not escaped.
pub fn write_projects_json<W: Write>(mut w: W, projects: &[Project]) -> Result<()> {
    serde_json::to_writer(&mut w, projects).context("encode projects JSON")?;
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn load_projects_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(br#"[{"name": "a"}, {"name": "b", "source": ["https://github.com/x/y"]}]"#)
            .unwrap();
        f.flush().unwrap();
        let projects = load_projects(f.path()).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].source, vec!["https://github.com/x/y"]);
    }

    #[test]
    fn load_projects_missing_file_err() {
        let err = load_projects(Path::new("/nonexistent/projects.json")).unwrap_err();
        assert!(format!("{err:#}").contains("read projects file"));
    }

    #[test]
    fn decode_projects_rejects_non_array() {
        assert!(decode_projects(br#"{"name": "a"}"#).is_err());
        assert!(decode_projects(b"[").is_err());
    }

    #[test]
    fn write_projects_json_keeps_html_characters() {
        let projects = vec![Project {
            name: "<ws> & co".to_string(),
            ..Project::default()
        }];
        let mut out = Vec::new();
        write_projects_json(&mut out, &projects).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""name":"<ws> & co""#));
        assert!(text.ends_with("]\n"));
        assert_eq!(text.lines().count(), 1);
    }
}
