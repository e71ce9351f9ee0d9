//! Response fixture catalog
//!
//! Loads serialized HTTP responses from disk for replay through the mock
//! transport. Fixtures live under a `Mock/` directory next to the calling
//! test, with a parent-level `Mock/` directory as fallback for fixtures
//! shared between test modules.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::client::HttpResponse;

/// Fixture resolution and parsing errors
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Fixture {name:?} not found in {primary:?} or {fallback:?}")]
    NotFound {
        name: String,
        primary: PathBuf,
        fallback: PathBuf,
    },

    #[error("Failed to read fixture {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture: {0}")]
    Malformed(String),
}

/// A reference to a fixture: either a relative path resolved through a
/// [`FixtureCatalog`], or an already materialized response used directly.
#[derive(Clone, Debug)]
pub enum FixtureRef {
    Path(String),
    Response(HttpResponse),
}

impl From<&str> for FixtureRef {
    fn from(path: &str) -> Self {
        FixtureRef::Path(path.to_string())
    }
}

impl From<String> for FixtureRef {
    fn from(path: String) -> Self {
        FixtureRef::Path(path)
    }
}

impl From<HttpResponse> for FixtureRef {
    fn from(response: HttpResponse) -> Self {
        FixtureRef::Response(response)
    }
}

/// On-disk fixture collection rooted at a test directory.
///
/// ```no_run
/// use gateway_conformance::FixtureCatalog;
/// use std::path::Path;
///
/// let catalog = FixtureCatalog::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests"));
/// let response = catalog.load("PurchaseSuccess.txt").unwrap();
/// assert!(response.is_success());
/// ```
#[derive(Clone, Debug)]
pub struct FixtureCatalog {
    base_dir: PathBuf,
}

impl FixtureCatalog {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a fixture name to a file path.
    ///
    /// Tries `<base>/Mock/<name>` first, `<base>/../Mock/<name>` second.
    /// Absent from both is a fatal setup error.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FixtureError> {
        let primary = self.base_dir.join("Mock").join(name);
        if primary.exists() {
            return Ok(primary);
        }

        let fallback = self.base_dir.join("..").join("Mock").join(name);
        if fallback.exists() {
            return Ok(fallback);
        }

        Err(FixtureError::NotFound {
            name: name.to_string(),
            primary,
            fallback,
        })
    }

    /// Resolve and parse a fixture into a response.
    pub fn load(&self, name: &str) -> Result<HttpResponse, FixtureError> {
        let path = self.resolve(name)?;
        debug!("Loading fixture {:?}", path);

        let raw = fs::read_to_string(&path).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;

        parse_response(&raw).map_err(|e| match e {
            FixtureError::Malformed(reason) => {
                FixtureError::Malformed(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Parse a serialized HTTP response: status line, header lines, blank line,
/// body. Header names are lowercased for case-insensitive lookup.
pub fn parse_response(raw: &str) -> Result<HttpResponse, FixtureError> {
    let normalized = raw.replace("\r\n", "\n");
    let (head, body) = match normalized.split_once("\n\n") {
        Some((head, body)) => (head, body),
        None => (normalized.as_str(), ""),
    };

    let mut lines = head.lines();
    let status_line = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| FixtureError::Malformed("empty fixture".to_string()))?;

    let mut parts = status_line.splitn(3, ' ');
    let protocol = parts
        .next()
        .ok_or_else(|| FixtureError::Malformed("missing status line".to_string()))?;
    if !protocol.starts_with("HTTP/") {
        return Err(FixtureError::Malformed(format!(
            "expected HTTP status line, got {status_line:?}"
        )));
    }

    let status_code = parts
        .next()
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| {
            FixtureError::Malformed(format!("invalid status code in {status_line:?}"))
        })?;

    let mut response = HttpResponse::new(status_code);
    for line in lines {
        let (key, value) = line.split_once(':').ok_or_else(|| {
            FixtureError::Malformed(format!("invalid header line {line:?}"))
        })?;
        response
            .headers
            .insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    response.body = body.to_string();
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PURCHASE_SUCCESS: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\r\n{\"id\":\"tx_1\"}";

    #[test]
    fn test_parse_response() {
        let response = parse_response(PURCHASE_SUCCESS).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.get_header("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body, "{\"id\":\"tx_1\"}");
    }

    #[test]
    fn test_parse_response_without_body() {
        let response = parse_response("HTTP/1.1 204 No Content\nServer: test\n").unwrap();
        assert_eq!(response.status_code, 204);
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_parse_response_rejects_garbage() {
        assert!(matches!(
            parse_response(""),
            Err(FixtureError::Malformed(_))
        ));
        assert!(matches!(
            parse_response("{\"not\":\"http\"}"),
            Err(FixtureError::Malformed(_))
        ));
        assert!(matches!(
            parse_response("HTTP/1.1 banana OK"),
            Err(FixtureError::Malformed(_))
        ));
    }

    #[test]
    fn test_resolve_primary_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Mock")).unwrap();
        fs::write(dir.path().join("Mock/PurchaseSuccess.txt"), PURCHASE_SUCCESS).unwrap();

        let catalog = FixtureCatalog::new(dir.path());
        let response = catalog.load("PurchaseSuccess.txt").unwrap();
        assert!(response.is_success());
        assert!(response.body_contains("tx_1"));
    }

    #[test]
    fn test_resolve_falls_back_to_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("Gateway");
        fs::create_dir(&nested).unwrap();
        fs::create_dir(dir.path().join("Mock")).unwrap();
        fs::write(dir.path().join("Mock/Shared.txt"), PURCHASE_SUCCESS).unwrap();

        // catalog rooted at the nested directory, fixture only in the parent
        let catalog = FixtureCatalog::new(&nested);
        let response = catalog.load("Shared.txt").unwrap();
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn test_missing_fixture_is_fatal() {
        let dir = TempDir::new().unwrap();
        let catalog = FixtureCatalog::new(dir.path());

        let err = catalog.load("Nope.txt").unwrap_err();
        assert!(matches!(err, FixtureError::NotFound { .. }));
        assert!(err.to_string().contains("Nope.txt"));
    }

    #[test]
    fn test_malformed_fixture_names_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Mock")).unwrap();
        fs::write(dir.path().join("Mock/Bad.txt"), "not an http response").unwrap();

        let catalog = FixtureCatalog::new(dir.path());
        let err = catalog.load("Bad.txt").unwrap_err();
        assert!(err.to_string().contains("Bad.txt"));
    }
}
