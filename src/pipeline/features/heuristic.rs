//! Shape-conditioned color guess.
//!
//! This does not look at pixels. It picks a color from a per-shape candidate
//! list whose repeats act as weights, mirroring how often each color occurs
//! for that shape in practice. Results vary between calls unless the RNG is
//! seeded.

use std::sync::Mutex;

use image::DynamicImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::ColorAnalysis;
use super::FeatureExtractionStrategy;
use crate::models::{ColorLabel, PillColor, PillShape};

use crate::models::PillColor::{Blue, Gray, Orange, Pink, White, Yellow};

const fn c(color: PillColor) -> ColorLabel {
    ColorLabel::solid(color)
}

const WHITE_BLUE: ColorLabel = ColorLabel::two_tone(White, Blue);

const ROUND_CANDIDATES: &[ColorLabel] = &[
    c(White), c(Yellow), c(Pink), c(White), c(Yellow),
    c(Orange), c(White), c(Pink), c(Yellow), c(White),
];
const OVAL_CANDIDATES: &[ColorLabel] = &[
    c(White), c(Yellow), c(Orange), c(White), c(Yellow),
    c(White), c(Orange), c(Yellow), c(White), c(Pink),
];
const CAPSULE_CANDIDATES: &[ColorLabel] = &[
    c(White), WHITE_BLUE, c(Blue), c(Yellow), c(Pink),
    c(White), c(Blue), WHITE_BLUE, c(Yellow), c(Pink),
];
const SQUARE_CANDIDATES: &[ColorLabel] = &[
    c(White), c(Gray), c(White), c(Gray), c(White),
    c(Yellow), c(Gray), c(White), c(Gray), c(White),
];
const UNKNOWN_CANDIDATES: &[ColorLabel] = &[
    c(White), c(Gray), c(White), c(Yellow), c(Gray),
    c(White), c(Pink), c(Gray), c(White), c(Blue),
];

pub fn candidates_for(shape: PillShape) -> &'static [ColorLabel] {
    match shape {
        PillShape::Round => ROUND_CANDIDATES,
        PillShape::Oval => OVAL_CANDIDATES,
        PillShape::Capsule => CAPSULE_CANDIDATES,
        PillShape::Square => SQUARE_CANDIDATES,
        PillShape::Unknown => UNKNOWN_CANDIDATES,
    }
}

/// Typical lightness for a guessed color; the first matching component wins.
pub fn brightness_for(label: &ColorLabel) -> f32 {
    const TABLE: &[(PillColor, f32)] = &[
        (White, 240.0),
        (Yellow, 220.0),
        (Orange, 200.0),
        (Pink, 210.0),
        (Blue, 150.0),
        (Gray, 120.0),
    ];
    TABLE
        .iter()
        .find(|(color, _)| label.contains(*color))
        .map(|(_, b)| *b)
        .unwrap_or(180.0)
}

/// Dominant color first, then its two-tone parts or a commonly confused
/// neighbour.
pub fn palette_for(label: &ColorLabel) -> Vec<ColorLabel> {
    let mut palette = vec![*label];
    if let Some(secondary) = label.secondary() {
        palette.push(c(label.primary()));
        palette.push(c(secondary));
        return palette;
    }
    let related = match label.primary() {
        White => Some(Gray),
        Blue => Some(White),
        Yellow => Some(Orange),
        _ => None,
    };
    palette.extend(related.map(c));
    palette
}

/// Weighted random color pick conditioned on shape.
pub struct HeuristicRandom {
    rng: Mutex<StdRng>,
}

impl HeuristicRandom {
    /// Seed from the wall clock, so consecutive scans differ.
    pub fn from_clock() -> Self {
        let seed = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::seeded(seed)
    }

    /// Reproducible sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self, candidates: &[ColorLabel]) -> ColorLabel {
        let idx = match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..candidates.len()),
            Err(poisoned) => poisoned.into_inner().gen_range(0..candidates.len()),
        };
        candidates[idx]
    }
}

impl FeatureExtractionStrategy for HeuristicRandom {
    fn name(&self) -> &'static str {
        "heuristic_random"
    }

    fn analyze_color(&self, _image: &DynamicImage, shape: PillShape) -> ColorAnalysis {
        let dominant = self.pick(candidates_for(shape));
        tracing::debug!(
            color = %dominant,
            options = candidates_for(shape).len(),
            shape = %shape,
            "Heuristic color pick"
        );
        ColorAnalysis {
            dominant,
            palette: palette_for(&dominant),
            brightness: brightness_for(&dominant),
        }
    }
}
