use crate::model::SurveyResult;
use crate::sample;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("response status: {status}")]
    Status { status: u16 },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed survey result: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One diagnostic entry per `fetch_remote_result` call: the parsed payload
/// on success, a message on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Payload(SurveyResult),
    Failure(String),
}

/// Where `fetch_remote_result` reports its outcome. The default sink
/// forwards to `tracing`; tests inject a recording sink.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, entry: Diagnostic);
}

pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, entry: Diagnostic) {
        match entry {
            Diagnostic::Payload(result) => {
                tracing::info!(
                    title = %result.title,
                    rounds = result.votes.len(),
                    "fetched survey result"
                );
            }
            Diagnostic::Failure(message) => {
                tracing::error!(%message, "survey result fetch failed");
            }
        }
    }
}

/// Supplies a survey result, either from a configured resource location or
/// from the built-in sample. Holds no state between calls.
pub struct SurveyResultProvider {
    resource_location: String,
    diagnostics: Arc<dyn DiagnosticSink>,
    client: reqwest::Client,
}

impl SurveyResultProvider {
    pub fn new(resource_location: impl Into<String>) -> SurveyResultProvider {
        SurveyResultProvider::with_diagnostics(resource_location, Arc::new(TracingSink))
    }

    pub fn with_diagnostics(
        resource_location: impl Into<String>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> SurveyResultProvider {
        SurveyResultProvider {
            resource_location: resource_location.into(),
            diagnostics,
            client: reqwest::Client::new(),
        }
    }

    pub fn resource_location(&self) -> &str {
        &self.resource_location
    }

    /// Fetch and parse the configured resource. `http`/`https` locations go
    /// over the wire; `file://` URLs and bare paths are read from disk.
    pub async fn fetch_result(&self) -> Result<SurveyResult, FetchError> {
        let location = &self.resource_location;
        if location.starts_with("http://") || location.starts_with("https://") {
            let response = self.client.get(location).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            let body = tokio::fs::read_to_string(Path::new(path)).await?;
            Ok(serde_json::from_str(&body)?)
        }
    }

    /// Fetch the configured resource, reducing the outcome to exactly one
    /// diagnostic entry. Never fails from the caller's point of view; this
    /// is the contract the result view was written against.
    pub async fn fetch_remote_result(&self) {
        match self.fetch_result().await {
            Ok(result) => self.diagnostics.emit(Diagnostic::Payload(result)),
            Err(error) => self.diagnostics.emit(Diagnostic::Failure(error.to_string())),
        }
    }

    /// The fixed sample result. Synchronous and infallible.
    pub fn sample_result(&self) -> SurveyResult {
        sample::sample_result()
    }
}
