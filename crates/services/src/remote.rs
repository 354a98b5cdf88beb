//! Optional remote backend: catalog download and result write-back.
//!
//! The app is fully usable offline; everything here degrades to the
//! built-in catalog and the local pending-sync queue.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use storage::repository::{PendingRecord, PendingSyncRepository};
use study_core::model::{Question, QuestionId, SessionResult, SubjectKey, Video, VideoId};

use crate::question_bank::QuestionBank;
use crate::video_catalog::VideoCatalog;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteError {
    #[error("remote fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid remote url: {0}")]
    Url(#[from] url::ParseError),

    #[error("no remote endpoint configured")]
    NotConfigured,
}

/// Row envelope used by the backend for every collection.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    id: String,
    subject: String,
    question: String,
    options: Vec<String>,
    correct: usize,
    #[serde(default)]
    explanation: String,
}

#[derive(Debug, Deserialize)]
struct WireVideo {
    id: String,
    subject_id: String,
    title: String,
    #[serde(default)]
    description: String,
    video_url: String,
    #[serde(default)]
    duration: u64,
}

/// Parse a base URL, forcing a trailing slash on the path so that
/// `Url::join` appends resource paths instead of replacing the last
/// segment (`https://host/api` would otherwise lose `api`).
fn normalize_base(raw: &str) -> Result<Url, RemoteError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

/// Read-only client for the remote question catalog.
pub struct RemoteCatalog {
    client: reqwest::Client,
    base: Url,
}

impl RemoteCatalog {
    /// # Errors
    ///
    /// Returns `RemoteError::Url` when `base` is not a valid URL and
    /// `RemoteError::Fetch` when the HTTP client cannot be constructed.
    pub fn new(base: &str) -> Result<Self, RemoteError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base: normalize_base(base)?,
        })
    }

    /// Download the full catalog into a [`QuestionBank`].
    ///
    /// Individual rows that fail validation (unknown subject, bad option
    /// count) are skipped with a warning rather than failing the whole
    /// download.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Fetch` when the request or decoding fails.
    pub async fn fetch_bank(&self) -> Result<QuestionBank, RemoteError> {
        let url = self.base.join("tables/questions")?;
        let envelope: Envelope<WireQuestion> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut questions = Vec::with_capacity(envelope.data.len());
        for row in envelope.data {
            match decode_question(row) {
                Ok(question) => questions.push(question),
                Err(reason) => warn!(%reason, "skipping invalid catalog row"),
            }
        }
        debug!(count = questions.len(), "downloaded remote catalog");
        Ok(QuestionBank::from_questions(questions))
    }

    /// Fetch the remote catalog, falling back to the built-in one when the
    /// remote is unreachable.
    pub async fn fetch_bank_or_builtin(&self) -> QuestionBank {
        match self.fetch_bank().await {
            Ok(bank) if !bank.is_empty() => bank,
            Ok(_) => {
                warn!("remote catalog is empty, using built-in questions");
                QuestionBank::builtin()
            }
            Err(err) => {
                warn!(error = %err, "remote catalog unavailable, using built-in questions");
                QuestionBank::builtin()
            }
        }
    }

    /// Download the lesson-video catalog.
    ///
    /// Rows with an unknown subject are skipped with a warning, same as
    /// question rows.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Fetch` when the request or decoding fails.
    pub async fn fetch_videos(&self) -> Result<VideoCatalog, RemoteError> {
        let url = self.base.join("tables/videos")?;
        let envelope: Envelope<WireVideo> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut videos = Vec::with_capacity(envelope.data.len());
        for row in envelope.data {
            match decode_video(row) {
                Ok(video) => videos.push(video),
                Err(reason) => warn!(%reason, "skipping invalid video row"),
            }
        }
        debug!(count = videos.len(), "downloaded remote video catalog");
        Ok(VideoCatalog::from_videos(videos))
    }

    /// Fetch the remote video catalog, falling back to the built-in demo
    /// list when the remote is unreachable or empty.
    pub async fn fetch_videos_or_builtin(&self) -> VideoCatalog {
        match self.fetch_videos().await {
            Ok(catalog) if !catalog.is_empty() => catalog,
            Ok(_) => {
                warn!("remote video catalog is empty, using built-in videos");
                VideoCatalog::builtin()
            }
            Err(err) => {
                warn!(error = %err, "remote video catalog unavailable, using built-in videos");
                VideoCatalog::builtin()
            }
        }
    }
}

fn decode_question(row: WireQuestion) -> Result<Question, String> {
    let subject = SubjectKey::from_str(&row.subject).map_err(|e| e.to_string())?;
    Question::new(
        QuestionId::new(row.id),
        subject,
        row.question,
        row.options,
        row.correct,
        row.explanation,
    )
    .map_err(|e| e.to_string())
}

fn decode_video(row: WireVideo) -> Result<Video, String> {
    let subject = SubjectKey::from_str(&row.subject_id).map_err(|e| e.to_string())?;
    Ok(Video::new(
        VideoId::new(row.id),
        subject,
        row.title,
        row.description,
        row.video_url,
        row.duration,
    ))
}

/// Write-back path for finished session results.
///
/// A result that cannot be delivered is queued locally instead of lost;
/// delivery never blocks or fails the session flow.
pub struct ResultOutbox {
    client: reqwest::Client,
    base: Option<Url>,
    pending: Arc<dyn PendingSyncRepository>,
}

impl ResultOutbox {
    /// An outbox with no remote configured: every result goes straight to
    /// the pending queue.
    #[must_use]
    pub fn offline(pending: Arc<dyn PendingSyncRepository>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: None,
            pending,
        }
    }

    /// # Errors
    ///
    /// Returns `RemoteError::Url` when `base` is not a valid URL and
    /// `RemoteError::Fetch` when the HTTP client cannot be constructed.
    pub fn new(base: &str, pending: Arc<dyn PendingSyncRepository>) -> Result<Self, RemoteError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base: Some(normalize_base(base)?),
            pending,
        })
    }

    /// Deliver a result to the remote, queueing it locally on any failure.
    pub async fn push(&self, result: &SessionResult) {
        let payload = match serde_json::to_string(result) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "could not serialize session result");
                return;
            }
        };

        match self.try_send(&payload).await {
            Ok(()) => debug!(session = %result.session_id(), "session result delivered"),
            Err(err) => {
                warn!(error = %err, "result delivery failed, queueing for later sync");
                self.enqueue(payload, result).await;
            }
        }
    }

    async fn try_send(&self, payload: &str) -> Result<(), RemoteError> {
        let Some(base) = &self.base else {
            return Err(RemoteError::NotConfigured);
        };
        let url = base.join("tables/tests")?;
        self.client
            .post(url)
            .header("content-type", "application/json")
            .body(payload.to_owned())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn enqueue(&self, payload: String, result: &SessionResult) {
        let record = PendingRecord {
            resource: "tests".to_string(),
            payload,
            queued_at: result.completed_at(),
        };
        if let Err(err) = self.pending.enqueue(&record).await {
            warn!(error = %err, "could not queue session result locally");
        }
    }
}
