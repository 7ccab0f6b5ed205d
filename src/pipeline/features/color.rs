//! Deterministic color analysis by sampling pixels.

use image::{DynamicImage, GenericImageView};

use super::types::ColorAnalysis;
use super::FeatureExtractionStrategy;
use crate::models::{ColorLabel, PillColor, PillShape};

/// Chroma (max - min channel) below this is treated as achromatic.
const ACHROMATIC_CHROMA: f32 = 30.0;
const WHITE_LIGHTNESS: f32 = 240.0;
const BLACK_LIGHTNESS: f32 = 15.0;
const GRAY_SATURATION: f32 = 0.2;

/// Bucket an sRGB pixel into a named color using HSL thresholds.
pub fn color_name(r: u8, g: u8, b: u8) -> PillColor {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let lightness = (max + min) / 2.0;

    if lightness > WHITE_LIGHTNESS {
        return PillColor::White;
    }
    if lightness < BLACK_LIGHTNESS {
        return PillColor::Black;
    }
    if chroma < ACHROMATIC_CHROMA {
        return PillColor::Gray;
    }

    let saturation = chroma / (255.0 - (2.0 * lightness - 255.0).abs());
    if saturation < GRAY_SATURATION {
        return PillColor::Gray;
    }

    let mut hue = if max == r {
        ((g - b) / chroma) * 60.0
    } else if max == g {
        120.0 + ((b - r) / chroma) * 60.0
    } else {
        240.0 + ((r - g) / chroma) * 60.0
    };
    if hue < 0.0 {
        hue += 360.0;
    }

    match hue {
        h if h < 15.0 => PillColor::Red,
        h if h < 45.0 => PillColor::Orange,
        h if h < 75.0 => PillColor::Yellow,
        h if h < 150.0 => PillColor::Green,
        h if h < 210.0 => PillColor::Blue,
        h if h < 270.0 => PillColor::Purple,
        h if h < 330.0 => PillColor::Pink,
        _ => PillColor::Red,
    }
}

/// Samples a grid over the central region of the photo and reports the most
/// frequent color buckets. Deterministic for a given image.
#[derive(Debug, Clone)]
pub struct PixelSampling {
    /// Samples per axis.
    grid: u32,
    /// A second bucket holding at least this share of samples makes the
    /// dominant label two-tone (capsules).
    two_tone_share: f32,
}

impl Default for PixelSampling {
    fn default() -> Self {
        Self {
            grid: 16,
            two_tone_share: 0.3,
        }
    }
}

impl PixelSampling {
    pub fn new(grid: u32) -> Self {
        Self {
            grid: grid.max(1),
            ..Self::default()
        }
    }

    /// Sample coordinates inside the central half of the image.
    fn sample_points(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let (x0, x1) = (width / 4, (width * 3 / 4).max(width / 4 + 1).min(width));
        let (y0, y1) = (height / 4, (height * 3 / 4).max(height / 4 + 1).min(height));
        let mut points = Vec::with_capacity((self.grid * self.grid) as usize);
        for gy in 0..self.grid {
            for gx in 0..self.grid {
                let x = x0 + (x1 - x0) * (2 * gx + 1) / (2 * self.grid);
                let y = y0 + (y1 - y0) * (2 * gy + 1) / (2 * self.grid);
                points.push((x.min(width - 1), y.min(height - 1)));
            }
        }
        points
    }
}

impl FeatureExtractionStrategy for PixelSampling {
    fn name(&self) -> &'static str {
        "pixel_sampling"
    }

    fn analyze_color(&self, image: &DynamicImage, _shape: PillShape) -> ColorAnalysis {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            let fallback = super::types::ExtractedFeatures::default();
            return ColorAnalysis {
                dominant: fallback.dominant_color,
                palette: fallback.color_palette,
                brightness: fallback.brightness,
            };
        }

        let rgb = image.to_rgb8();
        let points = self.sample_points(width, height);
        let mut counts = [0usize; 10];
        let mut lightness_sum = 0.0f32;

        for &(x, y) in &points {
            let p = rgb.get_pixel(x, y);
            let [r, g, b] = p.0;
            let max = r.max(g).max(b) as f32;
            let min = r.min(g).min(b) as f32;
            lightness_sum += (max + min) / 2.0;

            let color = color_name(r, g, b);
            if let Some(idx) = PillColor::ALL.iter().position(|c| *c == color) {
                counts[idx] += 1;
            }
        }

        // Most frequent first; ties keep declaration order.
        let mut ranked: Vec<(PillColor, usize)> = PillColor::ALL
            .iter()
            .copied()
            .zip(counts.iter().copied())
            .filter(|(_, n)| *n > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let total = points.len().max(1) as f32;
        let first = ranked.first().map(|(c, _)| *c).unwrap_or(PillColor::White);
        let dominant = match ranked.get(1) {
            Some((second, n)) if *n as f32 / total >= self.two_tone_share => {
                ColorLabel::two_tone(first, *second)
            }
            _ => ColorLabel::solid(first),
        };

        let palette = ranked
            .iter()
            .take(3)
            .map(|(c, _)| ColorLabel::solid(*c))
            .collect();

        ColorAnalysis {
            dominant,
            palette,
            brightness: lightness_sum / total,
        }
    }
}
