//! Gemini-backed suggestion engine.
//!
//! Wraps the Google generative-language HTTP API behind the
//! [`SuggestionEngine`] port. The adapter owns no state beyond its HTTP
//! client and configuration; every call is a single request/response round
//! trip with an explicit timeout.

use crate::config::GeminiConfig;
use crate::task::ports::{
    MIN_SUGGESTION_CHARS, SuggestionEngine, SuggestionError, SuggestionRequest, SuggestionResult,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const MAX_OUTPUT_TOKENS: u32 = 300;

/// Suggestion engine backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiSuggestionEngine {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiSuggestionEngine {
    /// Creates an engine from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError::Provider`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: &GeminiConfig) -> SuggestionResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| SuggestionError::Provider(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl SuggestionEngine for GeminiSuggestionEngine {
    async fn improve(&self, request: &SuggestionRequest) -> SuggestionResult<String> {
        let prompt = build_prompt(request);
        let body = GenerateContentBody {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };
        let url = format!("{}/v1/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(model = %self.model, "requesting suggestion from Gemini");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("Gemini transport error: {err}");
                SuggestionError::Provider(format!("transport error: {err}"))
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Gemini quota exceeded");
            return Err(SuggestionError::RateLimited);
        }
        if !status.is_success() {
            let envelope: GeminiErrorEnvelope = response.json().await.unwrap_or_default();
            if envelope.error.as_ref().and_then(|error| error.code) == Some(429) {
                tracing::warn!("Gemini quota exceeded");
                return Err(SuggestionError::RateLimited);
            }
            let detail = envelope
                .error
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("status {status}"));
            tracing::warn!("Gemini request failed: {detail}");
            return Err(SuggestionError::Provider(detail));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| SuggestionError::Provider(format!("malformed provider response: {err}")))?;
        let text = extract_text(payload);
        if text.chars().count() < MIN_SUGGESTION_CHARS {
            return Err(SuggestionError::Provider(
                "empty or undersized provider response".to_owned(),
            ));
        }
        Ok(text)
    }
}

/// Builds the instruction prompt handed to the provider.
pub(crate) fn build_prompt(request: &SuggestionRequest) -> String {
    format!(
        "You are a professional task management assistant.\n\n\
         You will receive a task title, a task description, and the current \
         priority (low, medium, or high).\n\n\
         Rewrite the description so it is clearer and more actionable, then \
         briefly state whether the current priority is appropriate; if it is \
         not, name the priority it should be.\n\n\
         Rules: return plain text only. Do not use bullet points, headings, \
         markdown, or section labels, and do not ask questions. Keep it \
         professional and concise.\n\n\
         Task title:\n\"{title}\"\n\n\
         Current description:\n\"{description}\"\n\n\
         Current priority:\n\"{priority}\"\n",
        title = request.title,
        description = request.description,
        priority = request.priority,
    )
}

/// Concatenates the text parts of the first candidate, trimmed.
pub(crate) fn extract_text(payload: GenerateContentResponse) -> String {
    payload
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
        .trim()
        .to_owned()
}

#[derive(Debug, Serialize)]
struct GenerateContentBody<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Successful `generateContent` response payload.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<GeminiCandidate>,
}

/// Single response candidate.
#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidate {
    pub(crate) content: Option<GeminiContent>,
}

/// Candidate content holding text parts.
#[derive(Debug, Deserialize)]
pub(crate) struct GeminiContent {
    #[serde(default)]
    pub(crate) parts: Vec<GeminiPart>,
}

/// Single content part.
#[derive(Debug, Deserialize)]
pub(crate) struct GeminiPart {
    pub(crate) text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiErrorEnvelope {
    error: Option<GeminiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    code: Option<u16>,
    message: Option<String>,
}
