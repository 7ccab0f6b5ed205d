//! Scan orchestrator.
//!
//! Single entry point that drives one identification:
//! photo → local features + catalog match, or photo → vision model,
//! then optionally into the history.

use std::path::Path;

use serde::Serialize;

use crate::i18n::localize_pill;
use crate::models::{Locale, Pill};
use crate::pipeline::features::{ExtractedFeatures, FeatureExtractor};
use crate::pipeline::matching::{LocalMatcher, MatchKind};
use crate::pipeline::remote::RemoteIdentifier;
use crate::storage::HistoryStore;

/// Which identification path to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Offline catalog match. Never fails.
    #[default]
    Local,
    /// Hosted vision model.
    Remote,
}

/// Result of one scan, with the details of the path actually taken.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub pill: Pill,
    /// May differ from the requested mode when no remote identifier is configured.
    pub mode: ScanMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_kind: Option<MatchKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<ExtractedFeatures>,
}

pub struct PillScanner {
    extractor: FeatureExtractor,
    matcher: LocalMatcher,
    remote: Option<RemoteIdentifier>,
    history: HistoryStore,
    locale: Locale,
}

impl PillScanner {
    pub fn new(
        extractor: FeatureExtractor,
        matcher: LocalMatcher,
        remote: Option<RemoteIdentifier>,
        history: HistoryStore,
    ) -> Self {
        let locale = matcher.locale();
        Self {
            extractor,
            matcher,
            remote,
            history,
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Display language for tags and usage lines of subsequent scans.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.matcher.set_locale(locale);
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub async fn scan(&mut self, image_bytes: &[u8], mode: ScanMode) -> ScanOutcome {
        if mode == ScanMode::Remote {
            if let Some(remote) = &self.remote {
                let pill = remote.identify(image_bytes).await;
                let pill = if pill.is_error() {
                    pill
                } else {
                    localize_pill(pill, self.locale)
                };
                return ScanOutcome {
                    pill,
                    mode: ScanMode::Remote,
                    match_kind: None,
                    features: None,
                };
            }
            tracing::warn!("Remote scan requested without a configured identifier, using local matcher");
        }
        self.scan_local(image_bytes)
    }

    fn scan_local(&mut self, image_bytes: &[u8]) -> ScanOutcome {
        let features = self.extractor.extract(image_bytes);
        let outcome = self.matcher.identify(&features);
        ScanOutcome {
            pill: outcome.pill,
            mode: ScanMode::Local,
            match_kind: Some(outcome.match_kind),
            features: Some(features),
        }
    }

    /// Read the photo and scan it. An unreadable file behaves like an
    /// undecodable image.
    pub async fn scan_path(&mut self, path: &Path, mode: ScanMode) -> ScanOutcome {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot read image");
                Vec::new()
            }
        };
        self.scan(&bytes, mode).await
    }

    /// Scan and save the result to history. Error results are not saved.
    pub async fn scan_and_record(&mut self, image_bytes: &[u8], mode: ScanMode) -> ScanOutcome {
        let outcome = self.scan(image_bytes, mode).await;
        self.record(&outcome).await;
        outcome
    }

    pub async fn scan_path_and_record(&mut self, path: &Path, mode: ScanMode) -> ScanOutcome {
        let outcome = self.scan_path(path, mode).await;
        self.record(&outcome).await;
        outcome
    }

    async fn record(&self, outcome: &ScanOutcome) {
        if outcome.pill.is_error() {
            tracing::info!(name = %outcome.pill.name, "Not saving error result to history");
            return;
        }
        self.history.append(&outcome.pill).await;
    }
}
