//! Phrase banks: stock statement language tiered by mark level, action verbs
//! by category, and MOS-specific phrases, plus the insertion rule the form
//! uses to splice a phrase into an existing statement.

use serde::{Deserialize, Serialize};

use super::domain::{MosCategory, StatementKind};

/// Action verb families offered alongside the phrase banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbCategory {
    Leadership,
    Performance,
    Initiative,
    Technical,
    Support,
}

const PROFICIENCY_5_0: &[&str] = &[
    "Performs all duties in an exemplary manner",
    "Consistently exceeds standards in all areas",
    "Demonstrates exceptional technical proficiency",
    "Produces work of the highest quality",
    "Displays superior knowledge of MOS",
    "Takes charge and leads effectively",
    "Mentors junior Marines beyond expectations",
    "Achieves exceptional results consistently",
    "Expert-level proficiency in primary duties",
    "Outstanding initiative and resourcefulness",
    "Exceptional problem-solving abilities",
    "Completes all assignments ahead of schedule",
    "Work quality is consistently flawless",
    "Superior performer in all aspects",
];

const PROFICIENCY_4_5: &[&str] = &[
    "Exceeds standards in performance of duties",
    "Highly proficient in MOS skills",
    "Produces high-quality work consistently",
    "Strong technical knowledge",
    "Reliable and effective performer",
    "Takes initiative without prompting",
    "Excellent work ethic",
    "Demonstrates leadership potential",
    "Eager to accept additional responsibilities",
    "Thorough and detail-oriented",
];

const PROFICIENCY_4_0: &[&str] = &[
    "Performs duties well above average",
    "Solid technical proficiency",
    "Consistent quality of work",
    "Reliable performer",
    "Meets and often exceeds standards",
    "Good initiative",
    "Professional approach to duties",
    "Completes tasks efficiently",
];

const PROFICIENCY_3_5: &[&str] = &[
    "Performs duties satisfactorily",
    "Meets minimum standards",
    "Adequate technical knowledge",
    "Acceptable work quality",
    "Requires occasional supervision",
    "Generally reliable",
    "Satisfactory performer",
    "Meets basic requirements",
];

const PROFICIENCY_2_5: &[&str] = &[
    "Fails to meet standards consistently",
    "Requires frequent supervision",
    "Work quality is inconsistent",
    "Technical knowledge is lacking",
    "Does not take initiative",
    "Performance needs improvement",
    "Struggles with basic duties",
    "Below expectations for grade",
];

const PROFICIENCY_1_5: &[&str] = &[
    "Consistently fails to meet minimum standards",
    "Unable to perform basic duties",
    "Requires constant supervision",
    "Significant performance deficiencies",
    "Has not responded to corrective guidance",
    "Detrimental to unit readiness",
];

const CONDUCT_5_0: &[&str] = &[
    "Exemplary conduct in all regards",
    "Sets the standard for junior Marines",
    "Outstanding military bearing",
    "Impeccable personal appearance",
    "Role model for peers and subordinates",
    "Exceptional self-discipline",
    "Positive influence on entire unit",
    "Highest moral and ethical standards",
    "Perfect adherence to regulations",
];

const CONDUCT_4_5: &[&str] = &[
    "Excellent conduct and bearing",
    "Strong positive influence on others",
    "Professional demeanor at all times",
    "Highly reliable and trustworthy",
    "Maintains high standards",
    "Positive attitude",
    "Respects authority",
];

const CONDUCT_4_0: &[&str] = &[
    "Good conduct and military bearing",
    "Professional appearance",
    "Reliable and punctual",
    "Positive influence on peers",
    "Follows orders without issue",
    "Good self-discipline",
];

const CONDUCT_3_5: &[&str] = &[
    "Satisfactory conduct",
    "Generally follows regulations",
    "Adequate military bearing",
    "Acceptable appearance",
    "Minor issues only",
    "Requires occasional reminder of standards",
];

const CONDUCT_2_5: &[&str] = &[
    "Conduct issues noted",
    "Has received counseling for behavior",
    "Requires frequent correction",
    "Negative influence on peers",
    "Military bearing needs improvement",
    "Does not consistently follow regulations",
];

const CONDUCT_1_5: &[&str] = &[
    "Serious conduct deficiencies",
    "Has received NJP/disciplinary action",
    "Consistent disregard for regulations",
    "Detrimental influence on unit",
    "Does not respond to corrective measures",
];

const VERBS_LEADERSHIP: &[&str] = &[
    "Leads", "Directs", "Guides", "Mentors", "Coaches", "Develops", "Supervises", "Manages",
    "Coordinates", "Organizes", "Delegates", "Motivates", "Inspires", "Influences",
];

const VERBS_PERFORMANCE: &[&str] = &[
    "Performs",
    "Executes",
    "Accomplishes",
    "Achieves",
    "Completes",
    "Delivers",
    "Produces",
    "Maintains",
    "Ensures",
    "Demonstrates",
    "Exhibits",
    "Displays",
];

const VERBS_INITIATIVE: &[&str] = &[
    "Initiates",
    "Volunteers",
    "Seeks",
    "Pursues",
    "Identifies",
    "Recognizes",
    "Anticipates",
    "Proposes",
    "Recommends",
    "Implements",
];

const VERBS_TECHNICAL: &[&str] = &[
    "Masters",
    "Operates",
    "Repairs",
    "Troubleshoots",
    "Analyzes",
    "Evaluates",
    "Assesses",
    "Inspects",
    "Verifies",
    "Calibrates",
];

const VERBS_SUPPORT: &[&str] = &[
    "Assists",
    "Supports",
    "Aids",
    "Helps",
    "Contributes",
    "Participates",
    "Cooperates",
    "Collaborates",
];

const MOS_ADMIN: &[&str] = &[
    "Maintains accurate administrative records",
    "Processes correspondence efficiently",
    "Demonstrates proficiency in Marine Online systems",
    "Ensures compliance with records management procedures",
];

const MOS_COMBAT: &[&str] = &[
    "Maintains combat readiness at all times",
    "Demonstrates proficiency with assigned weapons systems",
    "Excels in tactical operations",
    "Leads fire team/squad effectively in field environments",
];

const MOS_AVIATION: &[&str] = &[
    "Maintains aircraft to highest safety standards",
    "Demonstrates technical expertise in aviation systems",
    "Ensures flight safety compliance",
    "Proficient in pre-flight and post-flight procedures",
];

const MOS_LOGISTICS: &[&str] = &[
    "Manages supply chain operations effectively",
    "Maintains accurate inventory records",
    "Ensures timely distribution of supplies",
    "Demonstrates proficiency in logistics information systems",
];

const MOS_COMMUNICATIONS: &[&str] = &[
    "Maintains communications equipment to standard",
    "Ensures network security and reliability",
    "Demonstrates proficiency with multiple comm systems",
    "Troubleshoots technical issues effectively",
];

const MOS_INTELLIGENCE: &[&str] = &[
    "Produces accurate and timely intelligence products",
    "Demonstrates analytical thinking skills",
    "Maintains security of classified materials",
    "Briefs effectively at all levels",
];

const MOS_MOTOR_TRANSPORT: &[&str] = &[
    "Maintains vehicles to highest standards",
    "Operates vehicles safely in all conditions",
    "Ensures proper preventive maintenance",
    "Demonstrates proficiency in convoy operations",
];

/// Phrase tier for a statement kind at a mark level. Adjacent levels share a
/// tier (3.5 covers the 3.x marks, 2.5 the 2.x marks, and so on).
pub fn level_phrases(kind: StatementKind, level: f64) -> &'static [&'static str] {
    let tiers: [&[&str]; 6] = match kind {
        StatementKind::Proficiency => [
            PROFICIENCY_5_0,
            PROFICIENCY_4_5,
            PROFICIENCY_4_0,
            PROFICIENCY_3_5,
            PROFICIENCY_2_5,
            PROFICIENCY_1_5,
        ],
        StatementKind::Conduct => [
            CONDUCT_5_0,
            CONDUCT_4_5,
            CONDUCT_4_0,
            CONDUCT_3_5,
            CONDUCT_2_5,
            CONDUCT_1_5,
        ],
    };

    if level >= 5.0 {
        tiers[0]
    } else if level >= 4.5 {
        tiers[1]
    } else if level >= 4.0 {
        tiers[2]
    } else if level >= 3.0 {
        tiers[3]
    } else if level >= 2.0 {
        tiers[4]
    } else {
        tiers[5]
    }
}

/// Short list shown as one-click buttons next to the form.
pub fn quick_phrases(kind: StatementKind, level: f64) -> &'static [&'static str] {
    let phrases = level_phrases(kind, level);
    &phrases[..phrases.len().min(5)]
}

pub fn mos_phrases(mos: MosCategory) -> &'static [&'static str] {
    match mos {
        MosCategory::Admin => MOS_ADMIN,
        MosCategory::Combat => MOS_COMBAT,
        MosCategory::Aviation => MOS_AVIATION,
        MosCategory::Logistics => MOS_LOGISTICS,
        MosCategory::Communications => MOS_COMMUNICATIONS,
        MosCategory::Intelligence => MOS_INTELLIGENCE,
        MosCategory::MotorTransport => MOS_MOTOR_TRANSPORT,
        MosCategory::General => &[],
    }
}

pub fn action_verbs(category: VerbCategory) -> &'static [&'static str] {
    match category {
        VerbCategory::Leadership => VERBS_LEADERSHIP,
        VerbCategory::Performance => VERBS_PERFORMANCE,
        VerbCategory::Initiative => VERBS_INITIATIVE,
        VerbCategory::Technical => VERBS_TECHNICAL,
        VerbCategory::Support => VERBS_SUPPORT,
    }
}

/// Splice a phrase onto an existing statement and close it with a period.
/// A trailing period on the statement gets a space, any other non-empty
/// ending gets ". " first.
pub fn insert_phrase(statement: &str, phrase: &str) -> String {
    let current = statement.trim();
    if current.is_empty() {
        return format!("{phrase}.");
    }

    let separator = if current.ends_with('.') { " " } else { ". " };
    format!("{current}{separator}{phrase}.")
}
