/// Role a phrase set plays in tone counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCategory {
    Positive,
    Negative,
    Average,
}

/// Three phrase sets matched by substring containment against lowercased
/// statement text. Declaration order is significant: warning messages cite
/// the first matching negative phrase in that order.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
    average: Vec<String>,
}

const POSITIVE_INDICATORS: &[&str] = &[
    "outstanding",
    "exceptional",
    "superior",
    "excellent",
    "exemplary",
    "exceeds",
    "expert",
    "flawless",
    "impeccable",
    "highest",
    "best",
    "top",
    "above average",
    "well above",
    "strong",
    "role model",
    "mentor",
    "leader",
    "initiative",
    "proactive",
];

const NEGATIVE_INDICATORS: &[&str] = &[
    "fails",
    "failing",
    "lacking",
    "deficient",
    "poor",
    "inadequate",
    "requires improvement",
    "below average",
    "below standard",
    "unsatisfactory",
    "inconsistent",
    "unable",
    "does not",
    "has not",
    "struggles",
    "deficiencies",
    "issues",
    "problems",
    "counseling",
    "njp",
    "disciplinary",
    "negative influence",
    "detrimental",
    "constant supervision",
];

const AVERAGE_INDICATORS: &[&str] = &[
    "satisfactory",
    "adequate",
    "acceptable",
    "meets minimum",
    "meets standards",
    "generally",
    "occasional",
    "basic",
];

impl Lexicon {
    /// Build a lexicon from caller-supplied phrase sets. Phrases are
    /// lowercased on entry so matching is a plain substring scan.
    pub fn new(
        positive: impl IntoIterator<Item = String>,
        negative: impl IntoIterator<Item = String>,
        average: impl IntoIterator<Item = String>,
    ) -> Self {
        fn lowered(set: impl IntoIterator<Item = String>) -> Vec<String> {
            set.into_iter().map(|phrase| phrase.to_lowercase()).collect()
        }

        Self {
            positive: lowered(positive),
            negative: lowered(negative),
            average: lowered(average),
        }
    }

    /// The built-in counseling-language indicator sets.
    pub fn standard() -> Self {
        fn owned(set: &[&str]) -> Vec<String> {
            set.iter().map(|phrase| (*phrase).to_string()).collect()
        }

        Self {
            positive: owned(POSITIVE_INDICATORS),
            negative: owned(NEGATIVE_INDICATORS),
            average: owned(AVERAGE_INDICATORS),
        }
    }

    fn set(&self, category: ToneCategory) -> &[String] {
        match category {
            ToneCategory::Positive => &self.positive,
            ToneCategory::Negative => &self.negative,
            ToneCategory::Average => &self.average,
        }
    }

    /// Number of phrases in the category present anywhere in `text`.
    /// Presence per phrase, not occurrences.
    pub fn count(&self, text: &str, category: ToneCategory) -> usize {
        self.count_in_lowered(&text.to_lowercase(), category)
    }

    pub(crate) fn count_in_lowered(&self, lowered: &str, category: ToneCategory) -> usize {
        self.set(category)
            .iter()
            .filter(|phrase| lowered.contains(phrase.as_str()))
            .count()
    }

    /// First phrase of the category found in `lowered`, in declaration order.
    pub(crate) fn first_match(&self, lowered: &str, category: ToneCategory) -> Option<&str> {
        self.set(category)
            .iter()
            .find(|phrase| lowered.contains(phrase.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_per_phrase_presence() {
        let lexicon = Lexicon::standard();
        // "outstanding" twice still counts once; "leader" adds a second phrase.
        let text = "Outstanding Marine, outstanding leader.";
        assert_eq!(lexicon.count(text, ToneCategory::Positive), 2);
    }

    #[test]
    fn matching_is_substring_containment() {
        let lexicon = Lexicon::standard();
        // "unsatisfactory" contains the average indicator "satisfactory" too.
        let text = "Performance has been unsatisfactory.";
        assert_eq!(lexicon.count(text, ToneCategory::Negative), 1);
        assert_eq!(lexicon.count(text, ToneCategory::Average), 1);
    }

    #[test]
    fn first_match_respects_declaration_order() {
        let lexicon = Lexicon::standard();
        let lowered = "struggles with duties and fails inspections".to_lowercase();
        // "fails" precedes "struggles" in the negative set.
        assert_eq!(
            lexicon.first_match(&lowered, ToneCategory::Negative),
            Some("fails")
        );
    }

    #[test]
    fn custom_sets_are_lowercased_on_entry() {
        let lexicon = Lexicon::new(
            vec!["Stellar".to_string()],
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(lexicon.count("a stellar quarter", ToneCategory::Positive), 1);
    }
}
