use serde::Serialize;

use super::lexicon::{Lexicon, ToneCategory};

/// Statements shorter than this (after trimming) carry too little signal to
/// judge; every engine operation short-circuits on them.
pub const MIN_STATEMENT_CHARS: usize = 10;

/// Indicator occurrence counts for one statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndicatorProfile {
    pub positive: usize,
    pub negative: usize,
    pub average: usize,
}

/// Dominant sentiment derived from an indicator profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Average,
    Neutral,
}

/// Classifier output for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToneReading {
    pub profile: IndicatorProfile,
    pub tone: Tone,
}

impl ToneReading {
    pub(crate) const fn neutral() -> Self {
        Self {
            profile: IndicatorProfile {
                positive: 0,
                negative: 0,
                average: 0,
            },
            tone: Tone::Neutral,
        }
    }
}

pub(crate) fn is_degenerate(statement: &str) -> bool {
    statement.trim().chars().count() < MIN_STATEMENT_CHARS
}

pub(crate) fn classify(lexicon: &Lexicon, statement: &str) -> ToneReading {
    if is_degenerate(statement) {
        return ToneReading::neutral();
    }

    let lowered = statement.to_lowercase();
    let profile = IndicatorProfile {
        positive: lexicon.count_in_lowered(&lowered, ToneCategory::Positive),
        negative: lexicon.count_in_lowered(&lowered, ToneCategory::Negative),
        average: lexicon.count_in_lowered(&lowered, ToneCategory::Average),
    };

    ToneReading {
        profile,
        tone: dominant_tone(profile),
    }
}

/// First-match precedence. Rule 2 deliberately ignores the average count, so
/// equal negative/average counts with zero positive still read as negative;
/// there is no symmetric shortcut for positive.
fn dominant_tone(profile: IndicatorProfile) -> Tone {
    if profile.positive > profile.negative && profile.positive > profile.average {
        Tone::Positive
    } else if profile.negative > profile.positive {
        Tone::Negative
    } else if profile.average > 0 {
        Tone::Average
    } else {
        Tone::Neutral
    }
}
