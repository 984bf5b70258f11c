use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a saved worksheet draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DraftId(pub String);

/// Which narrative field of the worksheet a statement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Proficiency,
    Conduct,
}

impl StatementKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Proficiency => "Proficiency",
            Self::Conduct => "Conduct",
        }
    }
}

/// A mark as supplied by the caller. The raw text is kept for verdict
/// messages; unparseable input is carried as NaN so no band matches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Mark {
    raw: String,
    value: f64,
}

impl Mark {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self { raw, value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Raw caller-supplied text, trimmed for display.
    pub fn display(&self) -> &str {
        self.raw.trim()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl From<String> for Mark {
    fn from(value: String) -> Self {
        Self::parse(value)
    }
}

impl From<Mark> for String {
    fn from(value: Mark) -> Self {
        value.raw
    }
}

impl From<f64> for Mark {
    fn from(value: f64) -> Self {
        Self {
            raw: format!("{value:.1}"),
            value,
        }
    }
}

/// MOS families the phrase banks carry tailored language for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MosCategory {
    Admin,
    Combat,
    Aviation,
    Logistics,
    Communications,
    Intelligence,
    MotorTransport,
    #[default]
    General,
}

impl MosCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administration",
            Self::Combat => "Combat Arms",
            Self::Aviation => "Aviation",
            Self::Logistics => "Logistics",
            Self::Communications => "Communications",
            Self::Intelligence => "Intelligence",
            Self::MotorTransport => "Motor Transport",
            Self::General => "General",
        }
    }
}

/// Everything the worksheet form holds besides the draft name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetForm {
    #[serde(default)]
    pub proficiency_statement: String,
    #[serde(default)]
    pub conduct_statement: String,
    #[serde(default = "default_mark")]
    pub proficiency_mark: Mark,
    #[serde(default = "default_mark")]
    pub conduct_mark: Mark,
    #[serde(default = "default_mark")]
    pub performance_level: Mark,
    #[serde(default)]
    pub mos: MosCategory,
}

fn default_mark() -> Mark {
    Mark::parse("4.0")
}

impl Default for WorksheetForm {
    fn default() -> Self {
        Self {
            proficiency_statement: String::new(),
            conduct_statement: String::new(),
            proficiency_mark: default_mark(),
            conduct_mark: default_mark(),
            performance_level: default_mark(),
            mos: MosCategory::General,
        }
    }
}

/// Format a timestamp the way the worksheet's draft list shows it.
pub fn display_date(when: DateTime<Utc>) -> String {
    when.format("%d %b %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn mark_parses_numeric_input() {
        let mark = Mark::parse(" 4.5 ");
        assert_eq!(mark.value(), 4.5);
        assert_eq!(mark.display(), "4.5");
    }

    #[test]
    fn unparseable_mark_becomes_nan() {
        let mark = Mark::parse("n/a");
        assert!(mark.value().is_nan());
        assert_eq!(mark.display(), "n/a");
    }

    #[test]
    fn display_date_matches_worksheet_format() {
        let when = Utc.with_ymd_and_hms(2026, 8, 24, 14, 5, 0).unwrap();
        assert_eq!(display_date(when), "24 Aug 2026 14:05");
    }
}
