use photoreal_studio::{
    ai::HfInferenceClient,
    app::{App, AppServices, GenerationState, STATUS_EMPTY_PROMPT, STATUS_SUCCESS},
    models::GenerationOptions,
    prompts,
};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn app_for(server: &MockServer) -> App {
    let client = HfInferenceClient::new(
        "hf_integration".to_string(),
        format!("{}/models/sdxl", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    App::with_services(AppServices {
        image_gen: Box::new(client),
    })
}

#[tokio::test]
async fn test_full_workflow_against_stubbed_endpoint() {
    let server = MockServer::start().await;
    let payload = png_bytes(16, 8);

    Mock::given(method("POST"))
        .and(path("/models/sdxl"))
        .and(body_partial_json(serde_json::json!({
            "inputs": prompts::enrich("a misty forest at dawn"),
            "parameters": { "negative_prompt": prompts::negative_prompt() }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload))
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);

    let outcome = app
        .handle("a misty forest at dawn", GenerationOptions::default())
        .await;

    assert_eq!(outcome.state, GenerationState::Done);
    assert_eq!(outcome.status, STATUS_SUCCESS);
    let image = outcome.image.unwrap();
    assert_eq!((image.width, image.height), (16, 8));
}

#[tokio::test]
async fn test_empty_prompt_never_reaches_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(1, 1)))
        .expect(0)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let outcome = app.handle("    ", GenerationOptions::default()).await;

    assert_eq!(outcome.state, GenerationState::Error);
    assert_eq!(outcome.status, STATUS_EMPTY_PROMPT);
    assert!(outcome.image.is_none());
}

#[tokio::test]
async fn test_endpoint_error_is_reported_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/sdxl"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "error": "Model stabilityai/stable-diffusion-xl-base-1.0 is currently loading",
                "estimated_time": 42.0
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = app_for(&server);
    let outcome = app.handle("a desert", GenerationOptions::default()).await;

    assert_eq!(outcome.state, GenerationState::Error);
    assert!(outcome.image.is_none());
    assert!(outcome.status.starts_with("Error generating image:"));
    assert!(outcome.status.contains("currently loading"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_generation_error() {
    let client = HfInferenceClient::new(
        "hf_integration".to_string(),
        "http://127.0.0.1:9/models/sdxl".to_string(),
        Duration::from_secs(2),
    )
    .unwrap();
    let app = App::with_services(AppServices {
        image_gen: Box::new(client),
    });

    let err = app
        .generate("a harbor", GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, photoreal_studio::Error::Generation(_)));
}
