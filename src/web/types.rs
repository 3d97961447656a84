use crate::app::{GenerationOutcome, GenerationState};
use crate::app::STATUS_INVALID_REQUEST;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default)]
    pub guidance_scale: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub state: GenerationState,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl GenerateResponse {
    /// Response for a body that could not be parsed as a generate request.
    pub fn rejected(reason: &str) -> Self {
        Self {
            state: GenerationState::Error,
            status: format!("{}: {}", STATUS_INVALID_REQUEST, reason),
            image: None,
            width: None,
            height: None,
        }
    }
}

impl From<GenerationOutcome> for GenerateResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            state: outcome.state,
            status: outcome.status,
            width: outcome.image.as_ref().map(|image| image.width),
            height: outcome.image.as_ref().map(|image| image.height),
            image: outcome.image.as_ref().map(|image| image.to_data_uri()),
        }
    }
}
