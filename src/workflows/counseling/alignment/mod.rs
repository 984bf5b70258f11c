//! Mark/language alignment engine: lexical tone counting, band policy, and
//! mark recommendation. Every operation is a pure function of its inputs and
//! the injected lexicon; malformed input never errors, it only degrades to
//! the neutral/insufficient outcomes.

mod classifier;
mod lexicon;
mod policy;
mod recommend;

pub use classifier::{IndicatorProfile, Tone, ToneReading, MIN_STATEMENT_CHARS};
pub use lexicon::{Lexicon, ToneCategory};
pub use policy::{AlignmentVerdict, MarkBand, VerdictCategory, VerdictStatus};
pub use recommend::MarkRecommendation;

use serde::Serialize;

use crate::workflows::counseling::domain::{Mark, StatementKind};

/// Stateless engine applying one lexicon to statements and marks. Cheap to
/// call on every keystroke; holds no per-call state.
#[derive(Debug, Clone)]
pub struct AlignmentEngine {
    lexicon: Lexicon,
}

impl AlignmentEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Engine over the built-in indicator sets.
    pub fn standard() -> Self {
        Self::new(Lexicon::standard())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Indicator counts and dominant tone for one statement.
    pub fn classify(&self, statement: &str) -> ToneReading {
        classifier::classify(&self.lexicon, statement)
    }

    /// Judge one (statement, mark) pair against the band policy.
    pub fn evaluate(&self, statement: &str, mark: &Mark) -> AlignmentVerdict {
        policy::evaluate(&self.lexicon, statement, mark)
    }

    /// Suggest a mark range from statement language alone.
    pub fn recommend(&self, statement: &str) -> MarkRecommendation {
        recommend::recommend(&self.lexicon, statement)
    }

    /// Evaluate both worksheet fields and merge the verdicts. Warnings are
    /// collected in field order with field labels; when neither field warns
    /// but one is good, only the generic aligned message survives.
    pub fn evaluate_worksheet(
        &self,
        proficiency_statement: &str,
        proficiency_mark: &Mark,
        conduct_statement: &str,
        conduct_mark: &Mark,
    ) -> CombinedVerdict {
        let proficiency = self.evaluate(proficiency_statement, proficiency_mark);
        let conduct = self.evaluate(conduct_statement, conduct_mark);

        let mut warnings = Vec::new();
        for (kind, verdict) in [
            (StatementKind::Proficiency, &proficiency),
            (StatementKind::Conduct, &conduct),
        ] {
            if verdict.status == VerdictStatus::Warning {
                warnings.push(format!("{}: {}", kind.label(), verdict.message));
            }
        }

        if !warnings.is_empty() {
            return CombinedVerdict {
                status: VerdictStatus::Warning,
                messages: warnings,
                proficiency,
                conduct,
            };
        }

        if proficiency.status == VerdictStatus::Good || conduct.status == VerdictStatus::Good {
            return CombinedVerdict {
                status: VerdictStatus::Good,
                messages: vec!["Mark and language align.".to_string()],
                proficiency,
                conduct,
            };
        }

        CombinedVerdict {
            status: VerdictStatus::Neutral,
            messages: Vec::new(),
            proficiency,
            conduct,
        }
    }
}

/// Worksheet-level verdict over both statement fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedVerdict {
    pub status: VerdictStatus,
    pub messages: Vec<String>,
    pub proficiency: AlignmentVerdict,
    pub conduct: AlignmentVerdict,
}
