use serde::{Deserialize, Serialize};

use crate::models::{ColorLabel, PillColor, PillShape};

/// Coarse visual features of one photographed pill.
///
/// Created per identification attempt and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFeatures {
    pub dominant_color: ColorLabel,
    /// Most prominent colors first, dominant included.
    pub color_palette: Vec<ColorLabel>,
    pub shape: PillShape,
    /// Width over height after orientation correction.
    pub aspect_ratio: f32,
    /// Estimated lightness, 0-255.
    pub brightness: f32,
}

impl Default for ExtractedFeatures {
    /// Used whenever the image cannot be read or decoded.
    fn default() -> Self {
        Self {
            dominant_color: ColorLabel::solid(PillColor::White),
            color_palette: vec![ColorLabel::solid(PillColor::White)],
            shape: PillShape::Round,
            aspect_ratio: 1.0,
            brightness: 200.0,
        }
    }
}

/// Output of a color strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAnalysis {
    pub dominant: ColorLabel,
    pub palette: Vec<ColorLabel>,
    pub brightness: f32,
}
