use crate::models::PillShape;

/// Aspect-ratio bands, checked in this order. The Round and Square bands
/// overlap; Round wins anywhere inside [0.9, 1.1], so Square only covers
/// [0.85, 0.9) and (1.1, 1.15].
const ROUND_BAND: (f32, f32) = (0.9, 1.1);
const SQUARE_BAND: (f32, f32) = (0.85, 1.15);
const OVAL_MAX: f32 = 2.5;

/// Classify a pill shape from its width / height ratio.
pub fn classify_shape(aspect_ratio: f32) -> PillShape {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return PillShape::Unknown;
    }
    if (ROUND_BAND.0..=ROUND_BAND.1).contains(&aspect_ratio) {
        PillShape::Round
    } else if (SQUARE_BAND.0..=SQUARE_BAND.1).contains(&aspect_ratio) {
        PillShape::Square
    } else if aspect_ratio > ROUND_BAND.1 && aspect_ratio <= OVAL_MAX {
        PillShape::Oval
    } else if aspect_ratio > OVAL_MAX {
        PillShape::Capsule
    } else {
        PillShape::Unknown
    }
}
