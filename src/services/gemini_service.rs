use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_ATTEMPTS: u32 = 2;

#[derive(Debug)]
pub enum GeminiError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            GeminiError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeminiError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::HttpError(err)
    }
}

/// Everything the client needs, resolved once at startup and passed in
/// explicitly. No ambient globals are read after construction.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = env::var("GOOGLE_API_KEY")
            .map_err(|_| GeminiError::EnvironmentError("GOOGLE_API_KEY not set".to_string()))?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_attempts: MAX_ATTEMPTS,
        })
    }
}

/// One message in a multi-turn completion. Gemini expects roles
/// "user" and "model".
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GeminiError::HttpError)?;

        Ok(Self { client, config })
    }

    /// Single-shot prompt, used for initial itinerary generation.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let contents = vec![json!({ "role": "user", "parts": [{ "text": prompt }] })];
        self.request(contents).await
    }

    /// Multi-turn completion, used for the chat-edit path.
    pub async fn chat_complete(&self, messages: &[ChatTurn]) -> Result<String, GeminiError> {
        let contents: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role, "parts": [{ "text": m.text }] }))
            .collect();
        self.request(contents).await
    }

    async fn request(&self, contents: Vec<Value>) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = json!({ "contents": contents });

        let mut last_err = GeminiError::ResponseError("no attempts made".to_string());
        for attempt in 1..=self.config.max_attempts {
            match self.execute(&url, &body).await {
                Ok(text) => return Ok(text),
                Err(err) => {
                    eprintln!(
                        "Gemini request attempt {}/{} failed: {}",
                        attempt, self.config.max_attempts, err
                    );
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }

    async fn execute(&self, url: &str, body: &Value) -> Result<String, GeminiError> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::ResponseError(format!(
                "Request failed with status {}: {}",
                status, error_text
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            GeminiError::ResponseError(format!("Failed to parse response: {}", e))
        })?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::ResponseError(
                "Model returned no text candidates".to_string(),
            ));
        }

        Ok(text)
    }
}
