use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::catalog::{MedicationRecord, CATALOG};
use super::confidence::score_for;
use crate::i18n::{render_tags, translate_usage};
use crate::models::{generate_pill_id, Locale, Pill, UNKNOWN_PILL_NAME};
use crate::pipeline::features::ExtractedFeatures;

/// How strongly the chosen subset agreed with the features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Color and shape both agree.
    Exact,
    ColorOnly,
    ShapeOnly,
    /// Nothing agreed; any record could be chosen.
    Unfiltered,
}

/// Choice among equally good candidates.
#[derive(Debug)]
pub enum SelectionPolicy {
    /// Cycle through candidates using the matcher's own cursor.
    RoundRobin,
    /// Uniform pick from an owned RNG.
    Random(StdRng),
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::RoundRobin
    }
}

impl SelectionPolicy {
    pub fn random_seeded(seed: u64) -> Self {
        Self::Random(StdRng::seed_from_u64(seed))
    }

    pub fn random_from_entropy() -> Self {
        Self::Random(StdRng::from_entropy())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub pill: Pill,
    pub match_kind: MatchKind,
    pub confidence: u8,
}

/// Offline identification by comparing features against the catalog.
pub struct LocalMatcher {
    catalog: &'static [MedicationRecord],
    policy: SelectionPolicy,
    cursor: usize,
    locale: Locale,
}

impl Default for LocalMatcher {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

impl LocalMatcher {
    pub fn new(catalog: &'static [MedicationRecord]) -> Self {
        Self {
            catalog,
            policy: SelectionPolicy::default(),
            cursor: 0,
            locale: Locale::default(),
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Narrow the catalog to the best-agreeing subset.
    ///
    /// Cascade: color and shape, then color alone, then shape alone, then
    /// everything. The first non-empty level wins.
    pub fn candidates(&self, features: &ExtractedFeatures) -> (MatchKind, Vec<&'static MedicationRecord>) {
        let catalog = self.catalog;
        let filter = |pred: &dyn Fn(&MedicationRecord) -> bool| -> Vec<&'static MedicationRecord> {
            catalog.iter().filter(|r| pred(*r)).collect()
        };

        let color = |r: &MedicationRecord| r.matches_color(&features.dominant_color);
        let shape = |r: &MedicationRecord| r.matches_shape(features.shape);

        let exact = filter(&|r: &MedicationRecord| color(r) && shape(r));
        if !exact.is_empty() {
            return (MatchKind::Exact, exact);
        }
        let by_color = filter(&color);
        if !by_color.is_empty() {
            return (MatchKind::ColorOnly, by_color);
        }
        let by_shape = filter(&shape);
        if !by_shape.is_empty() {
            return (MatchKind::ShapeOnly, by_shape);
        }
        (MatchKind::Unfiltered, catalog.iter().collect())
    }

    fn select(&mut self, candidates: &[&'static MedicationRecord]) -> &'static MedicationRecord {
        let idx = match &mut self.policy {
            SelectionPolicy::RoundRobin => {
                let idx = self.cursor % candidates.len();
                self.cursor = self.cursor.wrapping_add(1);
                idx
            }
            SelectionPolicy::Random(rng) => rng.gen_range(0..candidates.len()),
        };
        candidates[idx]
    }

    /// Pick a catalog record for the features. Never fails.
    pub fn identify(&mut self, features: &ExtractedFeatures) -> MatchOutcome {
        let (match_kind, candidates) = self.candidates(features);
        if candidates.is_empty() {
            tracing::warn!("Medication catalog is empty, returning placeholder");
            return MatchOutcome {
                pill: unknown_pill(),
                match_kind,
                confidence: 0,
            };
        }

        let record = self.select(&candidates);
        let confidence = score_for(record, features);

        tracing::info!(
            name = record.name,
            match_kind = ?match_kind,
            candidates = candidates.len(),
            confidence,
            "Local match"
        );

        MatchOutcome {
            pill: self.render(record, confidence),
            match_kind,
            confidence,
        }
    }

    fn render(&self, record: &MedicationRecord, confidence: u8) -> Pill {
        let now = Utc::now();
        let usage: Vec<String> = record.usage.iter().map(|s| s.to_string()).collect();
        Pill {
            id: generate_pill_id(now),
            name: record.name.to_string(),
            description: record.description.to_string(),
            usage: translate_usage(&usage, self.locale),
            tags: render_tags(record.tags, self.locale),
            color: record.color.map(|c| c.to_string()),
            shape: record.shape.map(|s| s.as_str().to_string()),
            dosage: record.dosage.map(str::to_string),
            confidence,
            scanned_at: now,
            important: record.important.map(str::to_string),
        }
    }
}

fn unknown_pill() -> Pill {
    let now = Utc::now();
    Pill {
        id: generate_pill_id(now),
        name: UNKNOWN_PILL_NAME.to_string(),
        description: "No description available".to_string(),
        usage: Vec::new(),
        tags: Vec::new(),
        color: None,
        shape: None,
        dosage: None,
        confidence: 0,
        scanned_at: now,
        important: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Tag;
    use crate::models::{ColorLabel, PillColor, PillShape};
    use crate::pipeline::features::extractor::test_images::png;
    use crate::pipeline::features::FeatureExtractor;

    fn features(color: ColorLabel, shape: PillShape, brightness: f32) -> ExtractedFeatures {
        ExtractedFeatures {
            dominant_color: color,
            color_palette: vec![color],
            shape,
            aspect_ratio: 1.0,
            brightness,
        }
    }

    fn white_round() -> ExtractedFeatures {
        features(ColorLabel::solid(PillColor::White), PillShape::Round, 200.0)
    }

    #[test]
    fn white_round_has_exact_candidates() {
        let matcher = LocalMatcher::default();
        let (kind, candidates) = matcher.candidates(&white_round());
        assert_eq!(kind, MatchKind::Exact);
        assert!(candidates.len() >= 5);
        assert!(candidates.iter().all(|r| r.shape == Some(PillShape::Round)));
    }

    #[test]
    fn exact_match_scores_capped() {
        let outcome = LocalMatcher::default().identify(&white_round());
        assert_eq!(outcome.match_kind, MatchKind::Exact);
        assert_eq!(outcome.confidence, 95);
        assert_eq!(outcome.pill.confidence, 95);
        assert_eq!(outcome.pill.shape.as_deref(), Some("Round"));
        assert_eq!(outcome.pill.color.as_deref(), Some("White"));
    }

    #[test]
    fn blue_capsule_matches_two_tone_record() {
        let f = features(ColorLabel::solid(PillColor::Blue), PillShape::Capsule, 100.0);
        let (kind, candidates) = LocalMatcher::default().candidates(&f);
        assert_eq!(kind, MatchKind::Exact);
        assert!(candidates.iter().any(|r| r.name == "Amoxicillin 500mg"));
    }

    #[test]
    fn color_only_when_no_shape_agrees() {
        let f = features(ColorLabel::solid(PillColor::Red), PillShape::Round, 100.0);
        let outcome = LocalMatcher::default().identify(&f);
        assert_eq!(outcome.match_kind, MatchKind::ColorOnly);
        assert_eq!(outcome.pill.name, "Albendazole 400mg");
        assert_eq!(outcome.confidence, 75);
    }

    #[test]
    fn shape_only_when_no_color_agrees() {
        let f = features(ColorLabel::solid(PillColor::Black), PillShape::Square, 100.0);
        let outcome = LocalMatcher::default().identify(&f);
        assert_eq!(outcome.match_kind, MatchKind::ShapeOnly);
        assert_eq!(outcome.pill.shape.as_deref(), Some("Square"));
        assert_eq!(outcome.confidence, 75);
    }

    #[test]
    fn unfiltered_when_nothing_agrees() {
        let f = features(ColorLabel::solid(PillColor::Black), PillShape::Unknown, 100.0);
        let outcome = LocalMatcher::default().identify(&f);
        assert_eq!(outcome.match_kind, MatchKind::Unfiltered);
        assert_eq!(outcome.confidence, 60);
    }

    #[test]
    fn round_robin_cycles_through_subset() {
        let mut matcher = LocalMatcher::default();
        let (_, candidates) = matcher.candidates(&white_round());
        let names: Vec<String> = (0..candidates.len() * 2)
            .map(|_| matcher.identify(&white_round()).pill.name)
            .collect();
        let (first, second) = names.split_at(candidates.len());
        assert_eq!(first, second);
        let expected: Vec<&str> = candidates.iter().map(|r| r.name).collect();
        assert_eq!(first, expected.as_slice());
    }

    #[test]
    fn cursor_is_per_instance() {
        let mut a = LocalMatcher::default();
        let mut b = LocalMatcher::default();
        a.identify(&white_round());
        a.identify(&white_round());
        assert_eq!(b.identify(&white_round()).pill.name, "Ibuprofen 200mg");
    }

    #[test]
    fn seeded_random_policy_is_reproducible() {
        let pick = |seed| {
            let mut m = LocalMatcher::default().with_policy(SelectionPolicy::random_seeded(seed));
            (0..5).map(|_| m.identify(&white_round()).pill.name).collect::<Vec<_>>()
        };
        assert_eq!(pick(3), pick(3));
    }

    #[test]
    fn empty_catalog_gives_unknown_pill() {
        let outcome = LocalMatcher::new(&[]).identify(&white_round());
        assert_eq!(outcome.pill.name, UNKNOWN_PILL_NAME);
        assert_eq!(outcome.confidence, 0);
        assert_eq!(outcome.match_kind, MatchKind::Unfiltered);
    }

    #[test]
    fn output_is_localized() {
        let mut matcher = LocalMatcher::default().with_locale(Locale::Ru);
        let pill = matcher.identify(&white_round()).pill;
        assert_eq!(pill.name, "Ibuprofen 200mg");
        assert_eq!(pill.tags[0], Tag::PainRelief.label(Locale::Ru));
        assert!(pill.usage[1].starts_with("Не превышать"));
    }

    #[test]
    fn result_ids_are_unique() {
        let mut matcher = LocalMatcher::default();
        let a = matcher.identify(&white_round()).pill.id;
        let b = matcher.identify(&white_round()).pill.id;
        assert!(a.starts_with("pill_"));
        assert_ne!(a, b);
    }

    #[test]
    fn white_photo_end_to_end() {
        let features = FeatureExtractor::pixel_sampling().extract(&png(100, 100, [255, 255, 255]));
        let outcome = LocalMatcher::default().identify(&features);
        assert_eq!(outcome.pill.shape.as_deref(), Some("Round"));
        assert!(outcome.pill.color.as_deref().unwrap_or_default().contains("White"));
        assert!(outcome.confidence >= 60);
    }
}
