use std::fmt;

/// Content kind of a served resource.
///
/// Only three kinds exist; the kind is inferred from the extension of the
/// final path segment and anything unrecognised falls back to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Html,
    Json,
    Text,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Html, ContentKind::Json, ContentKind::Text];

    /// Infers the content kind from a URL path.
    ///
    /// ```
    /// # use webserv::http::mime::ContentKind;
    /// assert_eq!(ContentKind::from_path("docs/index.html"), ContentKind::Html);
    /// assert_eq!(ContentKind::from_path("data.json"), ContentKind::Json);
    /// assert_eq!(ContentKind::from_path("README"), ContentKind::Text);
    /// ```
    pub fn from_path(path: &str) -> Self {
        let segment = path.rsplit('/').next().unwrap_or(path);

        match segment.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => ContentKind::Text,
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "html" => ContentKind::Html,
            "json" => ContentKind::Json,
            _ => ContentKind::Text,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::Json => "json",
            ContentKind::Text => "text",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ContentKind::Html => "text/html",
            ContentKind::Json => "application/json",
            ContentKind::Text => "text/plain",
        }
    }

    /// Full header line as written on the wire, trailing `;` included.
    pub fn header_line(&self) -> &'static str {
        match self {
            ContentKind::Html => "Content-Type: text/html;",
            ContentKind::Json => "Content-Type: application/json;",
            ContentKind::Text => "Content-Type: text/plain;",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
