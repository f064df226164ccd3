use std::fmt;

use crate::http::mime::ContentKind;

/// HTTP request methods accepted by the server.
///
/// Every method routes to the same static file lookup; the verb is only
/// validated and logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// PATCH - Partial modification of a resource
    PATCH,
}

impl Method {
    /// Parses an HTTP method token, ignoring case.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the token names one of the supported methods,
    /// `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use webserv::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("patch"), Some(Method::PATCH));
    /// assert_eq!(Method::from_token("HEAD"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::PATCH => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request as extracted from its request line.
///
/// Header lines and any body are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The HTTP method, normalized to uppercase
    pub method: Method,
    /// Request target with the leading `/` stripped, not yet resolved
    pub path: String,
    /// Content kind inferred from the target's extension
    pub content_kind: ContentKind,
}

impl ParsedRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let content_kind = ContentKind::from_path(&path);

        Self {
            method,
            path,
            content_kind,
        }
    }
}
