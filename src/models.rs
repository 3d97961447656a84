//! Data models and structures
//!
//! Defines the generation options, the inference API payloads, and the
//! process configuration loaded once at startup.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;

pub const MIN_STEPS: u32 = 10;
pub const MAX_STEPS: u32 = 100;
pub const DEFAULT_STEPS: u32 = 50;
pub const MIN_GUIDANCE: f32 = 1.0;
pub const MAX_GUIDANCE: f32 = 20.0;
pub const DEFAULT_GUIDANCE: f32 = 7.5;

/// Advanced sampling options exposed next to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub steps: u32,
    pub guidance_scale: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            guidance_scale: DEFAULT_GUIDANCE,
        }
    }
}

impl GenerationOptions {
    /// Build options from optional user values, clamping into range.
    pub fn from_parts(steps: Option<u32>, guidance_scale: Option<f32>) -> Self {
        let defaults = Self::default();
        let guidance_scale = guidance_scale
            .filter(|g| g.is_finite())
            .unwrap_or(defaults.guidance_scale);

        Self {
            steps: steps
                .unwrap_or(defaults.steps)
                .clamp(MIN_STEPS, MAX_STEPS),
            guidance_scale: guidance_scale.clamp(MIN_GUIDANCE, MAX_GUIDANCE),
        }
    }
}

// Inference API Request/Response models
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceParameters {
    pub negative_prompt: String,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

/// Error body returned by the inference API on failure.
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub error: String,
    pub estimated_time: Option<f64>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_token: String,
    pub model_url: String,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hf_token = lookup("HF_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                crate::Error::Config(
                    "HF_TOKEN not set. Set HF_TOKEN in .env or environment variables".to_string(),
                )
            })?;

        let timeout_secs = match lookup("HF_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                crate::Error::Config(format!("Invalid HF_TIMEOUT_SECS '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| crate::Error::Config(format!("Invalid PORT '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            hf_token,
            model_url: lookup("HF_MODEL_URL").unwrap_or_else(|| DEFAULT_MODEL_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
