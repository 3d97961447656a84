//! Photoreal Studio - a small web front-end for hosted text-to-image models
//!
//! Accepts a prompt, enriches it with fixed photographic qualifiers, sends it
//! to an inference endpoint, and renders the returned image with a status line.

pub mod ai;
pub mod app;
pub mod error;
pub mod image;
pub mod models;
pub mod prompts;
pub mod web;

pub use error::{Error, Result};
