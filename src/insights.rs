use crate::models::AttendanceEntry;
use std::env;
use tracing::{error, warn};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-3-flash-preview";
const RECENT_ENTRIES: usize = 10;

pub const FALLBACK_INSIGHT: &str =
    "Unable to generate insights at this moment. Maintain consistent attendance for better reporting.";

/// Client for the generative-AI summary on the dashboard. Insights are
/// decoration: every failure path collapses to a fixed fallback line and is
/// never surfaced as an error.
#[derive(Clone)]
pub struct InsightClient {
    api_key: Option<String>,
    endpoint: String,
    http: reqwest::Client,
}

impl InsightClient {
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(env::var("INSIGHTS_API_KEY").ok())
    }

    pub async fn dashboard_insights(&self, entries: &[AttendanceEntry]) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return FALLBACK_INSIGHT.to_string();
        };

        match self.request(key, entries).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("insight service returned empty text");
                FALLBACK_INSIGHT.to_string()
            }
            Err(err) => {
                error!("insight request failed: {err}");
                FALLBACK_INSIGHT.to_string()
            }
        }
    }

    async fn request(
        &self,
        key: &str,
        entries: &[AttendanceEntry],
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let recent = &entries[entries.len().saturating_sub(RECENT_ENTRIES)..];
        let summary = serde_json::to_string(recent)?;
        let prompt = format!(
            "Analyze the following staff attendance data and provide 3 short, \
             professional insights or recommendations for productivity: {summary}"
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": {
                "parts": [{
                    "text": "You are an HR data analyst. Keep insights concise, professional, and helpful."
                }]
            },
            "generationConfig": { "temperature": 0.7 }
        });

        let response = self
            .http
            .post(format!(
                "{}/v1beta/models/{MODEL}:generateContent",
                self.endpoint
            ))
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        Ok(text)
    }
}
