//! Resolution of the configured quote file.
//!
//! The settings store keeps the file as a URI (`file:///usr/share/...`), but
//! hand-written configs usually hold a plain path. Both resolve to the local
//! path that is handed to fortune.

use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// The configured quote file, as written and as resolved locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSource {
    uri: String,
    path: Option<PathBuf>,
}

impl QuoteSource {
    /// Resolve a configured `file` value.
    ///
    /// - `file://` URIs are percent-decoded into a local path
    /// - values without a scheme are local paths, with `~/` expanded
    /// - any other scheme has no local path
    pub fn resolve(uri: &str) -> Self {
        let path = if uri.starts_with("file:") {
            Url::parse(uri)
                .ok()
                .and_then(|url| url.to_file_path().ok())
        } else if uri.contains("://") {
            None
        } else if let Some(rest) = uri.strip_prefix("~/") {
            dirs::home_dir().map(|home| home.join(rest))
        } else {
            Some(PathBuf::from(uri))
        };

        Self {
            uri: uri.to_string(),
            path,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The argument passed to fortune: the local path when there is one,
    /// otherwise the value as configured.
    pub fn argument(&self) -> String {
        match &self.path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => self.uri.clone(),
        }
    }

    /// Whether the file exists locally. Non-local sources never do.
    pub fn exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::exists)
    }
}

impl fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
