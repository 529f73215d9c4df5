use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use quiz_core::model::QuestionSet;
use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use url::Url;

use crate::error::{LoadValidationError, SourceError};

/// Where the question payload lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Url(Url),
    Path(PathBuf),
}

impl QuestionSource {
    /// Payload name used when nothing else is configured.
    pub const DEFAULT: &'static str = "questions.json";

    /// Interpret `raw` as an `http(s)` URL, a `file://` URL, or a local path.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for blank input, unsupported schemes, or `file://`
    /// URLs that do not map to a local path.
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SourceError::Empty);
        }

        let Ok(url) = Url::parse(raw) else {
            return Ok(Self::Path(PathBuf::from(raw)));
        };

        match url.scheme() {
            "http" | "https" => Ok(Self::Url(url)),
            "file" => url
                .to_file_path()
                .map(Self::Path)
                .map_err(|()| SourceError::InvalidFileUrl(raw.to_owned())),
            // Drive letters (`C:\quiz\questions.json`) parse as one-letter schemes.
            scheme if scheme.len() == 1 => Ok(Self::Path(PathBuf::from(raw))),
            scheme => Err(SourceError::UnsupportedScheme(scheme.to_owned())),
        }
    }

    /// Short resource name for user-facing messages, e.g. `questions.json`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            QuestionSource::Url(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty())
                .map_or_else(|| url.to_string(), str::to_owned),
            QuestionSource::Path(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| {
                    name.to_string_lossy().into_owned()
                }),
        }
    }
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::Path(PathBuf::from(Self::DEFAULT))
    }
}

impl FromStr for QuestionSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Url(url) => write!(f, "{url}"),
            QuestionSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Performs the single startup read of the question payload.
#[derive(Clone, Debug)]
pub struct QuestionLoader {
    client: Client,
    source: QuestionSource,
}

impl QuestionLoader {
    #[must_use]
    pub fn new(source: QuestionSource) -> Self {
        Self {
            client: Client::new(),
            source,
        }
    }

    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    /// Fetch, parse, and validate the payload.
    ///
    /// # Errors
    ///
    /// Returns `LoadValidationError` when the resource is unreachable, answers with a
    /// non-success status, is not JSON, or fails question validation.
    pub async fn load(&self) -> Result<QuestionSet, LoadValidationError> {
        tracing::debug!(source = %self.source, "fetching question payload");

        let body = match &self.source {
            QuestionSource::Url(url) => self.fetch_url(url).await?,
            QuestionSource::Path(path) => self.read_path(path).await?,
        };
        let set = parse_question_set(&body)?;

        tracing::info!(
            topic = set.topic(),
            questions = set.len(),
            "question set loaded"
        );
        Ok(set)
    }

    async fn fetch_url(&self, url: &Url) -> Result<Vec<u8>, LoadValidationError> {
        let response = self
            .client
            .get(url.clone())
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        ensure_success(response.status(), &self.source.display_name())?;

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "question payload received");
        Ok(body.to_vec())
    }

    async fn read_path(&self, path: &Path) -> Result<Vec<u8>, LoadValidationError> {
        let body = tokio::fs::read(path)
            .await
            .map_err(|source| LoadValidationError::Io {
                resource: self.source.display_name(),
                source,
            })?;
        tracing::debug!(bytes = body.len(), path = %path.display(), "question payload read");
        Ok(body)
    }
}

/// Parse raw bytes as JSON and validate them into a `QuestionSet`.
///
/// # Errors
///
/// Returns `LoadValidationError::Json` for malformed JSON and
/// `LoadValidationError::Validation` for structural problems.
pub fn parse_question_set(body: &[u8]) -> Result<QuestionSet, LoadValidationError> {
    let raw: Value = serde_json::from_slice(body)?;
    Ok(QuestionSet::from_value(&raw)?)
}

fn ensure_success(status: StatusCode, resource: &str) -> Result<(), LoadValidationError> {
    if status.is_success() {
        return Ok(());
    }
    Err(LoadValidationError::HttpStatus {
        status: status.as_u16(),
        resource: resource.to_owned(),
    })
}
