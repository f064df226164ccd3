use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http::parser::ParseError;
use crate::http::path::PathError;
use crate::http::response::Response;

/// Everything that can go wrong while serving a single request.
///
/// Each kind maps to exactly one response in [`RequestError::to_response`];
/// nothing here escapes the connection that produced it.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] ParseError),

    #[error("forbidden path: {0}")]
    ForbiddenPath(#[from] PathError),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RequestError {
    /// Classifies a failure to load `path` from disk.
    ///
    /// Missing and unreadable files are a 404; anything else (a directory,
    /// an I/O fault) is internal.
    pub fn from_io(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                RequestError::NotFound(path)
            }
            _ => RequestError::Internal(
                anyhow::Error::new(err).context(format!("failed to read {}", path.display())),
            ),
        }
    }

    pub fn to_response(&self) -> Response {
        match self {
            RequestError::MalformedRequest(_) => Response::bad_request(),
            RequestError::NotFound(_) => Response::not_found(),
            RequestError::ForbiddenPath(_) | RequestError::Internal(_) => {
                Response::internal_error()
            }
        }
    }

    /// True when the client is told nothing beyond a generic 500.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RequestError::ForbiddenPath(_) | RequestError::Internal(_)
        )
    }
}
