/// Completion client - the single point of entry for all Hugging Face
/// Inference API calls in the policy service.
///
/// ARCHITECTURAL RULE: No other module may call the Inference API directly.
/// All completion calls MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const HF_INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";
/// Default completion model. Overridable via the `HF_MODEL` environment variable.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";
/// Generation length cap sent with every call.
const MAX_NEW_TOKENS: u32 = 700;
/// Sampling temperature sent with every call.
const TEMPERATURE: f32 = 0.8;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion returned no generated text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

/// One generation in the Inference API response array.
#[derive(Debug, Deserialize)]
struct HfGeneration {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct HfErrorBody {
    error: String,
}

/// The completion model seam. `AppState` carries an `Arc<dyn CompletionModel>`
/// so handlers and the generator stay independent of the concrete backend,
/// and tests can swap in a scripted fake.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends one prompt to the model and returns the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Hugging Face Inference API client. One reqwest client, reused across requests.
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    api_token: String,
    endpoint: String,
}

impl HfClient {
    pub fn new(api_token: String, model_id: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_token,
            endpoint: format!("{HF_INFERENCE_API_BASE}/{model_id}"),
        }
    }
}

#[async_trait]
impl CompletionModel for HfClient {
    /// One-shot call: no retry or backoff. The call either completes or the
    /// error propagates to the caller.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = HfRequest {
            inputs: prompt,
            parameters: HfParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The Inference API wraps failures as {"error": "..."}
            let message = serde_json::from_str::<HfErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generations: Vec<HfGeneration> = response.json().await?;

        let text = generations
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("completion succeeded: {} chars", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_array_deserializes() {
        let json = r#"[{"generated_text": "Return Window: 21 days\nSpecial Notes: none"}]"#;
        let generations: Vec<HfGeneration> = serde_json::from_str(json).unwrap();
        assert_eq!(generations.len(), 1);
        assert!(generations[0].generated_text.starts_with("Return Window"));
    }

    #[test]
    fn test_error_body_message_extracted() {
        let json = r#"{"error": "Model mistralai/Mistral-7B-Instruct-v0.3 is currently loading"}"#;
        let body: HfErrorBody = serde_json::from_str(json).unwrap();
        assert!(body.error.contains("currently loading"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = HfRequest {
            inputs: "generate a policy",
            parameters: HfParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["inputs"], "generate a policy");
        assert_eq!(value["parameters"]["max_new_tokens"], 700);
        assert_eq!(value["parameters"]["return_full_text"], false);
    }

    #[test]
    fn test_endpoint_includes_model_id() {
        let client = HfClient::new("token".to_string(), DEFAULT_MODEL.to_string());
        assert_eq!(
            client.endpoint,
            "https://api-inference.huggingface.co/models/mistralai/Mistral-7B-Instruct-v0.3"
        );
    }
}
