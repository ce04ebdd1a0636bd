use serde::{Deserialize, Serialize};

use super::types::ExtractionClient;
use super::AnalysisError;

/// Groq OpenAI-compatible chat completions endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used for the structured extraction call.
pub const EXTRACTION_MODEL: &str = "llama-3.3-70b-versatile";

/// HTTP client for the remote extraction service.
pub struct GroqClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GroqClient {
    /// Create a client against the production endpoint with a 2-minute timeout.
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, GROQ_API_URL, 120)
    }

    /// Create a client against an explicit endpoint (used by tests).
    pub fn with_base_url(api_key: &str, base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }
}

/// Request body for the chat completions call.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat<'a>,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl ExtractionClient for GroqClient {
    fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, AnalysisError> {
        let body = ChatRequest {
            model: EXTRACTION_MODEL,
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    AnalysisError::ServiceUnreachable(self.base_url.clone())
                } else if e.is_timeout() {
                    AnalysisError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    AnalysisError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| AnalysisError::ResponseDecoding(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AnalysisError::ResponseDecoding("response contained no choices".into()))
    }
}

/// Mock extraction client for testing — returns a configurable response.
pub struct MockExtractionClient {
    response: Result<String, String>,
}

impl MockExtractionClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    /// A client whose call always fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

impl ExtractionClient for MockExtractionClient {
    fn complete(&self, _system_prompt: &str, _prompt: &str) -> Result<String, AnalysisError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AnalysisError::HttpClient(message.clone())),
        }
    }
}
