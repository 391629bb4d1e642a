use crate::models::AttendanceEntry;
use std::{env, fmt, time::Duration};
use tracing::info;

/// What a push actually tells us. The sheet webhook never acknowledges at
/// the application level, so `Dispatched` only means the request left this
/// process; a silently rejected entry looks identical to an accepted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// No webhook configured; nothing was sent.
    Skipped,
    /// Delivery attempted, acceptance unknown.
    Dispatched,
}

/// Transport-level failure of a push. Local data is unaffected.
#[derive(Debug)]
pub struct SyncError {
    pub message: String,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sheet sync failed: {}", self.message)
    }
}

impl std::error::Error for SyncError {}

/// Best-effort mirror of saved entries to a spreadsheet webhook. One attempt
/// per entry, no retry, no queue.
#[derive(Clone)]
pub struct MirrorClient {
    webhook_url: Option<String>,
    http: reqwest::Client,
}

impl MirrorClient {
    pub fn new(webhook_url: Option<String>) -> Self {
        let webhook_url = webhook_url.filter(|url| !url.trim().is_empty());
        Self {
            webhook_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("SHEETS_WEBHOOK_URL").ok())
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    pub async fn push(&self, entry: &AttendanceEntry) -> Result<PushOutcome, SyncError> {
        let Some(url) = self.webhook_url.as_deref() else {
            // Demo mode: pretend the round trip happened.
            tokio::time::sleep(Duration::from_millis(800)).await;
            return Ok(PushOutcome::Skipped);
        };

        let body = serde_json::to_string(entry).map_err(|err| SyncError {
            message: err.to_string(),
        })?;

        // The Apps Script sink cannot answer a CORS preflight, so the entry
        // goes out as text/plain and the script reads the raw post body. The
        // response carries no usable acknowledgment and is dropped.
        self.http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|err| SyncError {
                message: err.to_string(),
            })?;

        info!(date = %entry.date, "entry dispatched to sheet webhook");
        Ok(PushOutcome::Dispatched)
    }
}
