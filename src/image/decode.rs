use super::GeneratedImage;
use crate::{Error, Result};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

fn decode_sync(bytes: Vec<u8>) -> Result<GeneratedImage> {
    let rgb = image::load_from_memory(&bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut png = Vec::new();
    DynamicImage::ImageRgb8(rgb).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(GeneratedImage { width, height, png })
}

/// Decode an encoded image payload, convert it to RGB and re-encode as PNG.
pub async fn decode_image(bytes: Vec<u8>) -> Result<GeneratedImage> {
    tokio::task::spawn_blocking(move || decode_sync(bytes))
        .await
        .map_err(|e| Error::Generic(format!("Image decoding task join error: {}", e)))?
}
