// src/infrastructure/content/gemini.rs
use crate::application::ports::content::{ArticleDraft, ContentSource, ContentSourceError};
use crate::domain::article::{Article, Category};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::prompts;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Empty when no credential is configured; every call then fails.
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

/// `generateContent` client for the Gemini REST API.
pub struct GeminiContentSource {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiContentSource {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn generate(&self, body: Value) -> Result<String, ContentSourceError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ContentSourceError::MissingCredentials);
        }

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ContentSourceError::Transport(err.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|err| ContentSourceError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ContentSourceError::Status {
                status: status.as_u16(),
                message: error_message(&payload),
            });
        }

        response_text(&payload)
    }
}

#[async_trait]
impl ContentSource for GeminiContentSource {
    async fn latest_articles(&self) -> Result<Vec<ArticleDraft>, ContentSourceError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompts::LATEST_ARTICLES }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompts::latest_articles_schema(),
            },
        });
        let text = self.generate(body).await?;
        parse_drafts(&text)
    }

    async fn article_body(&self, article: &Article) -> Result<String, ContentSourceError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompts::article_body(article) }] }],
        });
        self.generate(body).await
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDraft {
    title: String,
    summary: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    author: String,
    read_time: String,
    date: String,
}

/// Concatenated text parts of the first candidate.
fn response_text(payload: &str) -> Result<String, ContentSourceError> {
    let response: GenerateContentResponse = serde_json::from_str(payload)
        .map_err(|err| ContentSourceError::Malformed(err.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ContentSourceError::Empty);
    }
    Ok(text)
}

fn error_message(payload: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(payload)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| payload.chars().take(200).collect())
}

/// Records whose category is not a real article category are skipped.
fn parse_drafts(text: &str) -> Result<Vec<ArticleDraft>, ContentSourceError> {
    let raw: Vec<RawDraft> =
        serde_json::from_str(text).map_err(|err| ContentSourceError::Malformed(err.to_string()))?;

    let drafts = raw
        .into_iter()
        .filter_map(|draft| {
            let Some(category) = Category::parse(&draft.category) else {
                tracing::warn!(category = %draft.category, title = %draft.title, "skipping article with unknown category");
                return None;
            };
            Some(ArticleDraft {
                title: draft.title,
                summary: draft.summary,
                category,
                tags: draft.tags,
                author: draft.author,
                read_time: draft.read_time,
                date: draft.date,
            })
        })
        .collect();

    Ok(drafts)
}
