//! Text-to-image inference integration
//!
//! Sends enriched prompts to a hosted text-to-image model and returns the
//! raw encoded image bytes it produces.

pub mod client;
pub mod mime;
pub mod mock;

pub use client::HfInferenceClient;
pub use mime::detect_image_mime;
pub use mock::MockImageGenerationClient;

use crate::models::InferenceRequest;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Issue exactly one generation request and return the encoded image.
    async fn generate_image(&self, request: &InferenceRequest) -> Result<Vec<u8>>;
}
