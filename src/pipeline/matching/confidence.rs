use super::catalog::MedicationRecord;
use crate::pipeline::features::ExtractedFeatures;

pub const BASE_CONFIDENCE: u8 = 60;
pub const COLOR_BONUS: u8 = 15;
pub const SHAPE_BONUS: u8 = 15;
pub const BRIGHTNESS_BONUS: u8 = 5;
pub const MAX_LOCAL_CONFIDENCE: u8 = 95;

/// Brightness strictly inside this range suggests a well-lit photo.
const WELL_LIT: (f32, f32) = (150.0, 220.0);

/// Which parts of the features agreed with the chosen record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agreement {
    pub color: bool,
    pub shape: bool,
    pub well_lit: bool,
}

impl Agreement {
    pub fn between(record: &MedicationRecord, features: &ExtractedFeatures) -> Self {
        Self {
            color: record.matches_color(&features.dominant_color),
            shape: record.matches_shape(features.shape),
            well_lit: is_well_lit(features.brightness),
        }
    }
}

pub fn is_well_lit(brightness: f32) -> bool {
    brightness > WELL_LIT.0 && brightness < WELL_LIT.1
}

/// Heuristic score for a local match, capped at [`MAX_LOCAL_CONFIDENCE`].
pub fn score(agreement: Agreement) -> u8 {
    let mut confidence = BASE_CONFIDENCE;
    if agreement.color {
        confidence += COLOR_BONUS;
    }
    if agreement.shape {
        confidence += SHAPE_BONUS;
    }
    if agreement.well_lit {
        confidence += BRIGHTNESS_BONUS;
    }
    confidence.min(MAX_LOCAL_CONFIDENCE)
}

/// Score how well `features` agree with `record`.
pub fn score_for(record: &MedicationRecord, features: &ExtractedFeatures) -> u8 {
    let agreement = Agreement::between(record, features);
    tracing::trace!(
        record = record.name,
        color = agreement.color,
        shape = agreement.shape,
        well_lit = agreement.well_lit,
        "Scoring local match"
    );
    score(agreement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn agreement(color: bool, shape: bool, well_lit: bool) -> Agreement {
        Agreement { color, shape, well_lit }
    }

    #[test]
    fn bonuses_add_up() {
        assert_eq!(score(agreement(false, false, false)), 60);
        assert_eq!(score(agreement(true, false, false)), 75);
        assert_eq!(score(agreement(false, true, false)), 75);
        assert_eq!(score(agreement(true, true, false)), 90);
        assert_eq!(score(agreement(false, false, true)), 65);
    }

    #[test]
    fn full_agreement_is_capped() {
        assert_eq!(score(agreement(true, true, true)), MAX_LOCAL_CONFIDENCE);
    }

    #[test]
    fn well_lit_bounds_are_exclusive() {
        assert!(!is_well_lit(150.0));
        assert!(is_well_lit(150.5));
        assert!(is_well_lit(200.0));
        assert!(!is_well_lit(220.0));
        assert!(!is_well_lit(f32::NAN));
    }

    proptest! {
        #[test]
        fn exact_beats_partial_beats_none(well_lit in any::<bool>()) {
            let exact = score(agreement(true, true, well_lit));
            let color_only = score(agreement(true, false, well_lit));
            let shape_only = score(agreement(false, true, well_lit));
            let none = score(agreement(false, false, well_lit));
            prop_assert!(exact >= color_only);
            prop_assert!(color_only >= shape_only);
            prop_assert!(shape_only >= none);
            prop_assert!(none >= BASE_CONFIDENCE);
        }

        #[test]
        fn never_above_cap(color in any::<bool>(), shape in any::<bool>(), brightness in 0.0f32..=255.0) {
            let s = score(Agreement { color, shape, well_lit: is_well_lit(brightness) });
            prop_assert!(s <= MAX_LOCAL_CONFIDENCE);
        }
    }
}
