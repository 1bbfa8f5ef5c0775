//! Candidate sources.
//!
//! The portal never cares where candidates come from, only that a source
//! hands back the full list or an error. Three implementations live here:
//! - [`HttpSource`]: the json-server style REST backend
//! - [`FileSource`]: a JSON file on disk (bare list or database document)
//! - [`InMemorySource`]: a fixed list, for tests and demos

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::Candidate;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Something that can produce the full candidate list.
///
/// `Send + Sync` so a session holding a boxed source can live on any
/// runtime thread.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Human-readable origin, used in logs and error context
    fn describe(&self) -> String;

    /// Fetch every candidate record
    async fn fetch(&self) -> Result<Vec<Candidate>>;
}

// =============================================================================
// HTTP
// =============================================================================

/// Fetches `GET <base>/candidates` from a REST backend.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Where the development backend listens by default
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3001";

    /// Create a source for a backend base URL.
    ///
    /// A URL that already ends in `/candidates` is used as-is.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base = base_url.as_ref().trim_end_matches('/');
        let url = if base.ends_with("/candidates") {
            base.to_string()
        } else {
            format!("{base}/candidates")
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("recruit-portal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CandidateSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Candidate>> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataLoadError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let candidates = parser::parse_candidates(&body)?;
        info!("Fetched {} candidates from {}", candidates.len(), self.url);
        Ok(candidates)
    }
}

// =============================================================================
// File
// =============================================================================

/// Reads candidates from a JSON file on every fetch.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CandidateSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Candidate>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                    path: self.path.display().to_string(),
                },
                _ => DataLoadError::IoError(e),
            })?;
        let candidates = parser::parse_candidates(&content)?;
        info!(
            "Loaded {} candidates from {}",
            candidates.len(),
            self.path.display()
        );
        Ok(candidates)
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Serves a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    candidates: Vec<Candidate>,
}

impl InMemorySource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

#[async_trait]
impl CandidateSource for InMemorySource {
    fn describe(&self) -> String {
        format!("in-memory ({} candidates)", self.candidates.len())
    }

    async fn fetch(&self) -> Result<Vec<Candidate>> {
        Ok(self.candidates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BODY: &str = r#"[{"id": 2, "name": "Bob Smith", "email": "bob@test.com", "position": "Backend Developer", "status": "Interview", "experience": 3}]"#;

    /// Serve exactly one canned HTTP response on a random port
    async fn start_mock_backend(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to get local address");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept failed");
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write failed");
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_http_source_url_building() {
        let source = HttpSource::new("http://localhost:3001/").unwrap();
        assert_eq!(source.url(), "http://localhost:3001/candidates");

        let source = HttpSource::new("http://api.local/v1/candidates").unwrap();
        assert_eq!(source.url(), "http://api.local/v1/candidates");
    }

    #[tokio::test]
    async fn test_http_source_fetches_candidates() {
        let base = start_mock_backend("200 OK", BODY).await;
        let source = HttpSource::new(&base).unwrap();

        let candidates = source.fetch().await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Bob Smith");
    }

    #[tokio::test]
    async fn test_http_source_reports_status_errors() {
        let base = start_mock_backend("503 Service Unavailable", "").await;
        let source = HttpSource::new(&base).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, DataLoadError::Http { status: 503 }));
    }

    #[tokio::test]
    async fn test_file_source_reads_database_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"candidates": {BODY}}}"#).unwrap();

        let source = FileSource::new(file.path());
        let candidates = source.fetch().await.unwrap();
        assert_eq!(candidates[0].id, 2);
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSource::new("/definitely/not/here.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_in_memory_source_returns_its_list() {
        let source = InMemorySource::new(vec![Candidate::new(
            9, "Eve", "eve@test.com", "Designer", "New", 0,
        )]);
        assert_eq!(source.fetch().await.unwrap().len(), 1);
        assert!(source.describe().contains("1 candidates"));
    }
}
