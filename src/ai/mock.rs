use super::ImageGenerationService;
use crate::models::InferenceRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Encode a solid 1x1 PNG, returned when no response is scripted.
pub fn placeholder_png() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(1, 1, image::Rgb([128, 128, 128]));
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[derive(Clone)]
enum Scripted {
    Image(Vec<u8>),
    Failure(String),
}

#[derive(Clone, Default)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<Scripted>>>,
    requests: Arc<Mutex<Vec<InferenceRequest>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Image(response));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Scripted::Failure(message.to_string()));
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, request: &InferenceRequest) -> Result<Vec<u8>> {
        let count = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(placeholder_png());
        }

        match &responses[(count - 1) % responses.len()] {
            Scripted::Image(bytes) => Ok(bytes.clone()),
            Scripted::Failure(message) => Err(Error::Generation(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InferenceParameters;

    fn request(inputs: &str) -> InferenceRequest {
        InferenceRequest {
            inputs: inputs.to_string(),
            parameters: InferenceParameters {
                negative_prompt: String::new(),
                num_inference_steps: 50,
                guidance_scale: 7.5,
            },
        }
    }

    #[tokio::test]
    async fn test_mock_default_response_is_png() {
        let client = MockImageGenerationClient::new();
        let bytes = client.generate_image(&request("a")).await.unwrap();
        assert_eq!(bytes, placeholder_png());
        assert!(image::load_from_memory(&bytes).is_ok());
    }

    #[tokio::test]
    async fn test_mock_cycles_scripted_responses() {
        let client = MockImageGenerationClient::new()
            .with_image_response(vec![1, 2, 3])
            .with_failure("boom");

        assert_eq!(
            client.generate_image(&request("a")).await.unwrap(),
            vec![1, 2, 3]
        );
        assert!(client.generate_image(&request("b")).await.is_err());
        // Should cycle back
        assert!(client.generate_image(&request("c")).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockImageGenerationClient::new();
        let calls = client.clone();

        assert_eq!(calls.get_call_count(), 0);
        client.generate_image(&request("first")).await.unwrap();
        assert_eq!(calls.get_call_count(), 1);
        assert_eq!(calls.requests()[0].inputs, "first");
    }
}
