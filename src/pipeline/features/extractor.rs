use std::path::Path;

use image::{DynamicImage, GenericImageView};

use super::orientation::Orientation;
use super::shape::classify_shape;
use super::types::{ColorAnalysis, ExtractedFeatures};
use super::{FeatureError, HeuristicRandom, PixelSampling};
use crate::models::PillShape;

/// How the color half of the features is produced.
///
/// Shape always comes from the aspect ratio; only color differs.
pub trait FeatureExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn analyze_color(&self, image: &DynamicImage, shape: PillShape) -> ColorAnalysis;
}

/// Derives [`ExtractedFeatures`] from a photo.
pub struct FeatureExtractor {
    strategy: Box<dyn FeatureExtractionStrategy>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::pixel_sampling()
    }
}

impl FeatureExtractor {
    pub fn new(strategy: Box<dyn FeatureExtractionStrategy>) -> Self {
        Self { strategy }
    }

    /// Deterministic pixel-based color analysis.
    pub fn pixel_sampling() -> Self {
        Self::new(Box::new(PixelSampling::default()))
    }

    /// Shape-conditioned random color guess, seeded from the clock.
    pub fn heuristic() -> Self {
        Self::new(Box::new(HeuristicRandom::from_clock()))
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Extract features, falling back to [`ExtractedFeatures::default`] on
    /// any decode problem.
    pub fn extract(&self, image_bytes: &[u8]) -> ExtractedFeatures {
        match self.try_extract(image_bytes) {
            Ok(features) => features,
            Err(e) => {
                tracing::warn!(error = %e, "Image analysis failed, using default features");
                ExtractedFeatures::default()
            }
        }
    }

    /// Read the photo from disk and extract features. Never fails.
    pub async fn extract_from_path(&self, path: &Path) -> ExtractedFeatures {
        match tokio::fs::read(path).await {
            Ok(bytes) => self.extract(&bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read image, using default features");
                ExtractedFeatures::default()
            }
        }
    }

    pub fn try_extract(&self, image_bytes: &[u8]) -> Result<ExtractedFeatures, FeatureError> {
        let _span = tracing::debug_span!(
            "extract_features",
            strategy = self.strategy.name(),
            image_size = image_bytes.len(),
        )
        .entered();

        let decoded = image::load_from_memory(image_bytes)
            .map_err(|e| FeatureError::Decode(e.to_string()))?;
        let orientation = Orientation::detect(image_bytes);
        let img = orientation.apply(decoded);

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(FeatureError::EmptyImage { width, height });
        }

        let aspect_ratio = width as f32 / height as f32;
        let shape = classify_shape(aspect_ratio);
        let color = self.strategy.analyze_color(&img, shape);

        tracing::debug!(
            width,
            height,
            rotated = orientation.swaps_axes(),
            aspect_ratio,
            shape = %shape,
            color = %color.dominant,
            brightness = color.brightness,
            "Image analysis complete"
        );

        Ok(ExtractedFeatures {
            dominant_color: color.dominant,
            color_palette: color.palette,
            shape,
            aspect_ratio,
            brightness: color.brightness,
        })
    }
}
