//! Gemini generateContent client
//!
//! Carries the itinerary chat exchange: one request per turn, grounded only
//! in the itinerary context plus the new message. No retries; failures
//! surface to the caller once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::GatewayError;
use crate::config::GeminiConfig;

/// Reply used when the response body lacks the expected candidate structure
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response.";

/// Backend that answers one chat turn
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a message with the itinerary as grounding context
    async fn send(&self, message: &str, context: &str) -> Result<String, GatewayError>;
}

/// Gemini generateContent API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client from configuration plus an explicit API key
    pub fn new(config: &GeminiConfig, api_key: String) -> Result<Self, GatewayError> {
        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Build the request body: context and message as two ordered parts of a
    /// single user turn
    fn build_request_body(context: &str, message: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        { "text": context },
                        { "text": message }
                    ]
                }
            ]
        })
    }

    /// Pull the reply out of `candidates[0].content.parts[0].text`, falling
    /// back to a fixed sentence when the shape is missing
    fn extract_reply(response: GenerateContentResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_else(|| {
                debug!("extract_reply: no candidate text, using fallback");
                FALLBACK_REPLY.to_string()
            })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::Network(e)
        }
    }
}

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn send(&self, message: &str, context: &str) -> Result<String, GatewayError> {
        debug!(
            model = %self.model,
            message_len = message.len(),
            context_len = context.len(),
            "send: posting chat turn"
        );
        let body = Self::build_request_body(context, message);

        let response = self
            .http
            .post(self.endpoint())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "send: non-success status");
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        Ok(Self::extract_reply(api_response))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GeminiClient::build_request_body("the itinerary", "what about museums?");

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "the itinerary");
        assert_eq!(body["contents"][0]["parts"][1]["text"], "what about museums?");
        // exactly one turn, exactly two parts
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["parts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_extract_reply_happy_path() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "Visit the Meiji Shrine." } ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(GeminiClient::extract_reply(response), "Visit the Meiji Shrine.");
    }

    #[test]
    fn test_extract_reply_missing_candidates_uses_fallback() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(GeminiClient::extract_reply(response), FALLBACK_REPLY);
    }

    #[test]
    fn test_extract_reply_empty_parts_uses_fallback() {
        let json = r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(GeminiClient::extract_reply(response), FALLBACK_REPLY);
    }

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let config = GeminiConfig::default();
        let client = GeminiClient::new(&config, "test-key".to_string()).unwrap();
        let endpoint = client.endpoint();

        assert!(endpoint.starts_with("https://generativelanguage.googleapis.com/v1/models/"));
        assert!(endpoint.contains(":generateContent?key=test-key"));
    }
}
