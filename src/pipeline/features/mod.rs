//! Coarse shape and color features from a pill photo.
//!
//! Shape comes from the aspect ratio of the (orientation-corrected) photo.
//! Color comes from a [`FeatureExtractionStrategy`]:
//! - [`PixelSampling`]: HSL bucketing of sampled pixels, deterministic
//! - [`HeuristicRandom`]: shape-conditioned weighted guess, no pixel access

pub mod color;
pub mod extractor;
pub mod heuristic;
pub mod orientation;
pub mod shape;
pub mod types;

pub use color::*;
pub use extractor::*;
pub use heuristic::HeuristicRandom;
pub use shape::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Image decoding failed: {0}")]
    Decode(String),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}
