use super::{detect_image_mime, ImageGenerationService};
use crate::models::{Config, InferenceRequest, ProviderError};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Client for a hosted text-to-image model served over HTTPS.
pub struct HfInferenceClient {
    client: Client,
    token: String,
    model_url: String,
}

impl HfInferenceClient {
    pub fn new(token: String, model_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            token,
            model_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.hf_token.clone(),
            config.model_url.clone(),
            config.timeout,
        )
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ProviderError>(body) {
        Ok(ProviderError {
            error,
            estimated_time: Some(eta),
        }) if status == StatusCode::SERVICE_UNAVAILABLE => format!(
            "Inference API error (status {}): {} (estimated time {:.0}s)",
            status, error, eta
        ),
        Ok(provider) => format!("Inference API error (status {}): {}", status, provider.error),
        Err(_) => format!("Inference API error (status {}): {}", status, body.trim()),
    }
}

#[async_trait]
impl ImageGenerationService for HfInferenceClient {
    async fn generate_image(&self, request: &InferenceRequest) -> Result<Vec<u8>> {
        tracing::debug!("Sending image generation request to {}", self.model_url);

        let response = self
            .client
            .post(&self.model_url)
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to inference API: {}", e);
                Error::Generation(format!("Request to inference API failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Failed to read inference API error body: {}", e);
                    String::new()
                }
            };
            tracing::error!("Inference API error (status {}): {}", status, error_text);
            return Err(Error::Generation(describe_failure(status, &error_text)));
        }

        let body = response.bytes().await.map_err(|e| {
            Error::Generation(format!("Failed to read inference API response: {}", e))
        })?;

        if body.is_empty() {
            return Err(Error::Generation(
                "Inference API returned an empty payload".to_string(),
            ));
        }

        if detect_image_mime(&body).is_none() {
            if let Ok(provider) = serde_json::from_slice::<ProviderError>(&body) {
                tracing::error!("Inference API reported an error: {}", provider.error);
                return Err(Error::Generation(format!(
                    "Inference API error: {}",
                    provider.error
                )));
            }
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?})",
                &body[..body.len().min(4)]
            );
        }

        tracing::debug!("Received {} bytes from inference API", body.len());
        Ok(body.to_vec())
    }
}
