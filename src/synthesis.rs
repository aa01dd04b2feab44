use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("model error: {0}")]
    Model(String),
    #[error("malformed model response: {0}")]
    Parse(String),
}

// generateContent wire types
#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    message: String,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

/// Client for the hosted text-generation API. One request per synthesis
/// cycle: no retries, no streaming.
pub struct SynthesisClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl SynthesisClient {
    pub fn new(endpoint: String, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("CentristNews/1.0 (RSS Aggregator)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            model,
        }
    }

    /// Single generateContent call. Distinguishes network, model, and
    /// malformed-response failures.
    pub async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, SynthesisError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        info!("Requesting synthesis from model '{}'", self.model);
        let response = self.client.post(&url).json(&request).send().await?;
        let body = response.text().await?;

        // Error statuses still carry a JSON body with an "error" object, so
        // parse before checking anything else.
        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| SynthesisError::Parse(e.to_string()))?;

        Self::extract_text(parsed)
    }

    fn extract_text(response: GenerateResponse) -> Result<String, SynthesisError> {
        if let Some(api_error) = response.error {
            return Err(SynthesisError::Model(api_error.message));
        }

        response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| SynthesisError::Parse("no candidates in response".to_string()))
    }

    /// Always returns display text: failures collapse to an error message
    /// string so the page renders something on every cycle.
    pub async fn synthesize(&self, prompt: &str, api_key: &str) -> String {
        match self.generate(prompt, api_key).await {
            Ok(text) => text,
            Err(e) => {
                error!("Synthesis failed: {}", e);
                format!("Error synthesizing news: {}", e)
            }
        }
    }
}
