//! Request handling for a single prompt-to-image generation.

use crate::ai::{HfInferenceClient, ImageGenerationService};
use crate::image::{decode_image, GeneratedImage};
use crate::models::{Config, GenerationOptions, InferenceParameters, InferenceRequest};
use crate::{prompts, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

pub const STATUS_SUCCESS: &str = "Image generated successfully.";
pub const STATUS_EMPTY_PROMPT: &str = "Please enter a prompt to generate an image.";
pub const STATUS_INVALID_REQUEST: &str = "Invalid generation request";

/// Lifecycle of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationState {
    Idle,
    Generating,
    Done,
    Error,
}

/// What the UI renders after a request: an image (or none) and a status line.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub state: GenerationState,
    pub image: Option<GeneratedImage>,
    pub status: String,
    empty_prompt: bool,
}

impl GenerationOutcome {
    fn done(image: GeneratedImage) -> Self {
        Self {
            state: GenerationState::Done,
            image: Some(image),
            status: STATUS_SUCCESS.to_string(),
            empty_prompt: false,
        }
    }

    fn failed(err: &Error) -> Self {
        let status = match err {
            Error::EmptyPrompt => STATUS_EMPTY_PROMPT.to_string(),
            other => format!("Error generating image: {}", other),
        };

        Self {
            state: GenerationState::Error,
            image: None,
            status,
            empty_prompt: matches!(err, Error::EmptyPrompt),
        }
    }

    pub fn is_empty_prompt(&self) -> bool {
        self.empty_prompt
    }
}

/// Validates prompts, enriches them, and performs the single outbound call.
pub struct App {
    image_gen: Box<dyn ImageGenerationService>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            image_gen: services.image_gen,
        }
    }

    /// Construct an app from a loaded [`Config`].
    pub fn new(config: &Config) -> Result<Self> {
        let client = HfInferenceClient::from_config(config)?;
        info!("Inference endpoint: {}", client.model_url());

        Ok(Self::with_services(AppServices {
            image_gen: Box::new(client),
        }))
    }

    /// Generate an image for a raw user prompt.
    ///
    /// Fails with [`Error::EmptyPrompt`] before any network call when the
    /// trimmed prompt is empty; every other failure is an
    /// [`Error::Generation`].
    pub async fn generate(
        &self,
        raw_prompt: &str,
        options: GenerationOptions,
    ) -> Result<GeneratedImage> {
        let prompt = raw_prompt.trim();
        if prompt.is_empty() {
            warn!("Rejected empty prompt");
            return Err(Error::EmptyPrompt);
        }

        let request_id = Uuid::new_v4();
        let request = InferenceRequest {
            inputs: prompts::enrich(prompt),
            parameters: InferenceParameters {
                negative_prompt: prompts::negative_prompt().to_string(),
                num_inference_steps: options.steps,
                guidance_scale: options.guidance_scale,
            },
        };

        info!(
            "[{}] {:?} -> {:?} ({} chars, {} steps, guidance {})",
            request_id,
            GenerationState::Idle,
            GenerationState::Generating,
            prompt.len(),
            options.steps,
            options.guidance_scale
        );

        let image = match self.request_image(&request).await {
            Ok(image) => image,
            Err(e) => {
                error!(
                    "[{}] {:?}: image generation failed: {}",
                    request_id,
                    GenerationState::Error,
                    e
                );
                return Err(e);
            }
        };

        info!(
            "[{}] {:?}: generated {}x{} image",
            request_id,
            GenerationState::Done,
            image.width,
            image.height
        );

        Ok(image)
    }

    async fn request_image(&self, request: &InferenceRequest) -> Result<GeneratedImage> {
        let bytes = self
            .image_gen
            .generate_image(request)
            .await
            .map_err(Error::into_generation)?;
        info!("Received image payload ({} bytes)", bytes.len());

        decode_image(bytes).await.map_err(Error::into_generation)
    }

    /// Run [`App::generate`] and map the result to what the UI displays.
    pub async fn handle(&self, raw_prompt: &str, options: GenerationOptions) -> GenerationOutcome {
        match self.generate(raw_prompt, options).await {
            Ok(image) => GenerationOutcome::done(image),
            Err(e) => GenerationOutcome::failed(&e),
        }
    }
}
