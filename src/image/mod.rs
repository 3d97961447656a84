//! Image decoding
//!
//! Turns the raw payload returned by the inference API into a displayable
//! RGB PNG.

pub mod decode;

pub use decode::decode_image;

use base64::Engine as _;

/// A decoded, display-ready image.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl GeneratedImage {
    /// Render the PNG as a `data:` URI for embedding in a page.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}
