use serde::Serialize;

use super::classifier;
use super::lexicon::{Lexicon, ToneCategory};

/// Suggested mark range derived from statement language alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkRecommendation {
    pub min: f64,
    pub max: f64,
    pub suggested: f64,
}

impl MarkRecommendation {
    const fn new(min: f64, max: f64, suggested: f64) -> Self {
        Self {
            min,
            max,
            suggested,
        }
    }

    /// Wide default returned when the statement is too thin to read.
    pub(crate) const fn wide_default() -> Self {
        Self::new(3.0, 5.0, 4.0)
    }
}

/// Text-to-mark direction: these thresholds are deliberately independent of
/// the alignment policy's band rules and must not be derived from them.
pub(crate) fn recommend(lexicon: &Lexicon, statement: &str) -> MarkRecommendation {
    if classifier::is_degenerate(statement) {
        return MarkRecommendation::wide_default();
    }

    let lowered = statement.to_lowercase();
    let positive = lexicon.count_in_lowered(&lowered, ToneCategory::Positive);
    let negative = lexicon.count_in_lowered(&lowered, ToneCategory::Negative);

    if positive >= 3 && negative == 0 {
        MarkRecommendation::new(4.5, 5.0, 4.7)
    } else if positive >= 1 && negative == 0 {
        MarkRecommendation::new(4.0, 4.6, 4.3)
    } else if positive > 0 && negative > 0 {
        MarkRecommendation::new(3.0, 4.0, 3.5)
    } else if negative >= 2 {
        MarkRecommendation::new(1.0, 2.5, 2.0)
    } else if negative == 1 {
        MarkRecommendation::new(2.0, 3.0, 2.5)
    } else {
        MarkRecommendation::new(3.0, 4.0, 3.5)
    }
}
