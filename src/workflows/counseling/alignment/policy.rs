use serde::Serialize;

use super::classifier::{self, Tone};
use super::lexicon::{Lexicon, ToneCategory};
use crate::workflows::counseling::domain::Mark;

/// Half-open mark ranges, checked top-down. A NaN mark (unparseable input)
/// matches no band and funnels to the insufficient verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkBand {
    Superior,
    AboveAverage,
    Average,
    BelowAverage,
}

impl MarkBand {
    pub fn classify(value: f64) -> Option<Self> {
        if value >= 4.5 {
            Some(Self::Superior)
        } else if value >= 4.0 {
            Some(Self::AboveAverage)
        } else if value >= 3.0 {
            Some(Self::Average)
        } else if value < 3.0 {
            Some(Self::BelowAverage)
        } else {
            None
        }
    }
}

/// Display severity of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Good,
    Warning,
    Neutral,
}

impl VerdictStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
        }
    }
}

/// How the statement relates to its mark. Absent when the statement was too
/// short to judge at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictCategory {
    Aligned,
    Mismatch,
    Insufficient,
}

/// The engine's judgment of one (statement, mark) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentVerdict {
    pub status: VerdictStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<VerdictCategory>,
}

impl AlignmentVerdict {
    fn good(message: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Good,
            message: message.into(),
            category: Some(VerdictCategory::Aligned),
        }
    }

    fn warning(message: String) -> Self {
        Self {
            status: VerdictStatus::Warning,
            message,
            category: Some(VerdictCategory::Mismatch),
        }
    }

    fn insufficient() -> Self {
        Self {
            status: VerdictStatus::Neutral,
            message: "Add more detail to the statement for better alignment feedback.".to_string(),
            category: Some(VerdictCategory::Insufficient),
        }
    }

    fn too_short() -> Self {
        Self {
            status: VerdictStatus::Neutral,
            message: String::new(),
            category: None,
        }
    }
}

pub(crate) fn evaluate(lexicon: &Lexicon, statement: &str, mark: &Mark) -> AlignmentVerdict {
    if classifier::is_degenerate(statement) {
        return AlignmentVerdict::too_short();
    }

    let reading = classifier::classify(lexicon, statement);
    let profile = reading.profile;

    match MarkBand::classify(mark.value()) {
        Some(MarkBand::Superior) => {
            if profile.negative > 0 {
                let lowered = statement.to_lowercase();
                let phrase = lexicon
                    .first_match(&lowered, ToneCategory::Negative)
                    .unwrap_or_default();
                return AlignmentVerdict::warning(format!(
                    "Statement contains negative language (\"{phrase}\") but mark is {mark}. \
                     Consider adjusting the language or mark."
                ));
            }
            if reading.tone == Tone::Positive {
                return AlignmentVerdict::good("Mark and language align well.");
            }
            AlignmentVerdict::insufficient()
        }
        Some(MarkBand::AboveAverage) => {
            if profile.negative > profile.positive {
                return AlignmentVerdict::warning(format!(
                    "Statement leans negative but mark is above average ({mark}). \
                     Consider adjusting."
                ));
            }
            AlignmentVerdict::good("Mark and language align.")
        }
        Some(MarkBand::Average) => {
            if profile.positive > 2 && profile.negative == 0 {
                return AlignmentVerdict::warning(format!(
                    "Statement is very positive but mark is average ({mark}). \
                     Consider a higher mark or adjust language."
                ));
            }
            AlignmentVerdict::good("Mark and language align.")
        }
        Some(MarkBand::BelowAverage) => {
            if profile.positive > profile.negative && profile.positive > 0 {
                return AlignmentVerdict::warning(format!(
                    "Statement is positive but mark is below average ({mark}). \
                     Consider adjusting the mark or language."
                ));
            }
            if profile.negative > 0 {
                return AlignmentVerdict::good("Mark and language align.");
            }
            AlignmentVerdict::insufficient()
        }
        None => AlignmentVerdict::insufficient(),
    }
}
