//! Stream quality analysis
//!
//! Classifies stream candidates by resolution tier and HDR-class tags based
//! on the free text of their title and name.

use crate::addon::StreamCandidate;
use serde::Serialize;

/// Number of candidates that fell into one resolution tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub label: String,
    pub count: usize,
}

/// Summary of the resolutions and HDR tags seen in a stream list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    /// Tier counts in first-seen order
    pub tiers: Vec<TierCount>,
    /// Number of analyzed candidates
    pub total: usize,
    #[serde(rename = "has4K")]
    pub has_4k: bool,
    #[serde(rename = "hasHDR")]
    pub has_hdr: bool,
}

impl QualityReport {
    /// Count for `label`, zero if the tier never appeared
    pub fn count_for(&self, label: &str) -> usize {
        self.tiers
            .iter()
            .find(|tier| tier.label == label)
            .map_or(0, |tier| tier.count)
    }
}

/// Resolution tiers, checked in priority order
const TIERS: &[(&str, &[&str])] = &[
    ("4K", &["4k", "2160"]),
    ("1080p", &["1080"]),
    ("720p", &["720"]),
    ("480p", &["480"]),
];

const UNKNOWN_TIER: &str = "unknown";

const HDR_TAGS: &[&str] = &["hdr", "dolby", "dv"];

/// Classifies lower-cased label text into a tier
fn tier_of(text: &str) -> &'static str {
    TIERS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|token| text.contains(token)))
        .map_or(UNKNOWN_TIER, |(label, _)| *label)
}

/// Builds a quality report for `streams`
///
/// Each candidate lands in exactly one tier; HDR detection is independent of
/// the tier.
pub fn analyze_quality(streams: &[StreamCandidate]) -> QualityReport {
    let mut report = QualityReport::default();

    for stream in streams {
        let text = stream.label_text();
        let tier = tier_of(&text);

        if tier == "4K" {
            report.has_4k = true;
        }
        if HDR_TAGS.iter().any(|tag| text.contains(tag)) {
            report.has_hdr = true;
        }

        match report.tiers.iter_mut().find(|t| t.label == tier) {
            Some(existing) => existing.count += 1,
            None => report.tiers.push(TierCount {
                label: tier.to_string(),
                count: 1,
            }),
        }
        report.total += 1;
    }

    report
}
