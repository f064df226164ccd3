use std::path::{Path, PathBuf};

use thiserror::Error;

/// Document served for the bare `/` target.
pub const DEFAULT_DOCUMENT: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A `..` segment would climb above the serving root.
    #[error("path escapes the serving root: {0}")]
    Escape(String),
    /// The normalized target names a hidden entry at the top of the root.
    #[error("hidden files are not served: {0}")]
    Hidden(String),
}

/// A filesystem path confined to the serving root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    full: PathBuf,
    relative: String,
}

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.full
    }

    /// The normalized path relative to the serving root.
    pub fn relative(&self) -> &str {
        &self.relative
    }
}

/// Maps a request target onto a file below `root`.
///
/// The target is normalized as if `root` were `/`: empty and `.` segments
/// are dropped and `..` removes the previous segment. A `..` with nothing
/// left to remove is refused as an escape. What remains is the path
/// relative to the root. A relative path whose first character is `.` is
/// refused as hidden, which also covers `.well-known/...`. The empty result
/// maps to [`DEFAULT_DOCUMENT`].
///
/// Only the first character is checked, so `docs/.secret` is served.
///
/// ```
/// # use std::path::Path;
/// # use webserv::http::path::resolve;
/// let root = Path::new("/srv/www");
/// assert_eq!(resolve("", root).unwrap().as_path(), Path::new("/srv/www/index.html"));
/// assert_eq!(resolve("a/../b.json", root).unwrap().relative(), "b.json");
/// assert!(resolve("../../etc/passwd", root).is_err());
/// assert!(resolve(".env", root).is_err());
/// ```
pub fn resolve(url_path: &str, root: &Path) -> Result<ResolvedPath, PathError> {
    let relative = normalize(url_path)?;

    if relative.starts_with('.') {
        return Err(PathError::Hidden(relative));
    }

    let relative = if relative.is_empty() {
        DEFAULT_DOCUMENT.to_string()
    } else {
        relative
    };

    Ok(ResolvedPath {
        full: root.join(&relative),
        relative,
    })
}

/// Lexically normalizes `url_path` against a virtual root.
fn normalize(url_path: &str) -> Result<String, PathError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in url_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(PathError::Escape(url_path.to_string()));
                }
            }
            other => segments.push(other),
        }
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_segments() {
        assert_eq!(normalize("a//b/./c").unwrap(), "a/b/c");
        assert_eq!(normalize("a/b/../c").unwrap(), "a/c");
        assert_eq!(normalize("/abs/path").unwrap(), "abs/path");
        assert_eq!(normalize("a/..").unwrap(), "");
    }

    #[test]
    fn normalize_refuses_to_climb_above_root() {
        assert!(matches!(normalize(".."), Err(PathError::Escape(_))));
        assert!(matches!(normalize("a/../../b"), Err(PathError::Escape(_))));
    }

    #[test]
    fn encoded_separator_is_a_plain_segment() {
        let root = Path::new("/root");
        assert!(matches!(
            resolve("..%2f/x.html", root),
            Err(PathError::Hidden(_))
        ));
    }
}
