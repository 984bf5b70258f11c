//! Statement templates for the common counseling scenarios, each carrying
//! scaffolding text for both fields and the marks a writer would typically
//! start from.

use serde::{Deserialize, Serialize};

use super::domain::{Mark, WorksheetForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Promotion,
    SemiAnnual,
    Adverse,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Promotion, Self::SemiAnnual, Self::Adverse];
}

/// One counseling template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounselingTemplate {
    pub kind: TemplateKind,
    pub name: &'static str,
    pub description: &'static str,
    pub proficiency: &'static str,
    pub conduct: &'static str,
}

pub fn template(kind: TemplateKind) -> CounselingTemplate {
    match kind {
        TemplateKind::Promotion => CounselingTemplate {
            kind,
            name: "Promotion Statement",
            description: "Standard format for promotion recommendation counselings",
            proficiency: "[Marine] demonstrates [level] performance in all assigned duties. \
                [He/She] displays [technical proficiency description] and [leadership qualities]. \
                [Specific achievement or example]. [PFT/CFT performance if notable].",
            conduct: "[Marine] maintains [level] conduct and military bearing. [He/She] \
                [conduct description] and serves as a [positive/negative] influence on \
                [peers/subordinates]. [Specific example of conduct if applicable].",
        },
        TemplateKind::SemiAnnual => CounselingTemplate {
            kind,
            name: "Semi-Annual Counseling",
            description: "Standard format for regular semi-annual performance reviews",
            proficiency: "During the marking period, [Marine] demonstrated [level] performance \
                in assigned duties. [He/She] [specific performance observations]. \
                [Areas of strength]. [Areas for continued development if applicable].",
            conduct: "[Marine]'s conduct during this period was [level]. [He/She] \
                [conduct observations]. [Positive behaviors or areas requiring attention].",
        },
        TemplateKind::Adverse => CounselingTemplate {
            kind,
            name: "Adverse Counseling",
            description: "Format for documenting performance or conduct deficiencies",
            proficiency: "[Marine] has displayed [specific deficiency] requiring formal \
                counseling. [Description of pattern or incident]. This has impacted \
                [unit readiness/mission accomplishment/etc.]. [Marine] is directed to \
                [specific corrective actions]. Failure to improve may result in [consequences].",
            conduct: "[Marine]'s conduct has been [below standard/unsatisfactory]. \
                [Specific incident or pattern description]. This behavior is \
                [contrary to regulations/detrimental to unit]. [Marine] must \
                [corrective action required]. Continued deficiencies will result in \
                [administrative/disciplinary action].",
        },
    }
}

/// Marks a writer would typically pair with the template: (proficiency, conduct).
pub fn suggested_marks(kind: TemplateKind) -> (Mark, Mark) {
    let (pro, con) = match kind {
        TemplateKind::Promotion => ("4.3", "4.4"),
        TemplateKind::SemiAnnual => ("4.0", "4.0"),
        TemplateKind::Adverse => ("2.5", "2.5"),
    };
    (Mark::parse(pro), Mark::parse(con))
}

/// A worksheet pre-filled from a template.
pub fn apply(kind: TemplateKind) -> WorksheetForm {
    let template = template(kind);
    let (proficiency_mark, conduct_mark) = suggested_marks(kind);
    WorksheetForm {
        proficiency_statement: template.proficiency.to_string(),
        conduct_statement: template.conduct.to_string(),
        performance_level: proficiency_mark.clone(),
        proficiency_mark,
        conduct_mark,
        ..WorksheetForm::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adverse_template_suggests_low_marks() {
        let (pro, con) = suggested_marks(TemplateKind::Adverse);
        assert_eq!(pro.display(), "2.5");
        assert_eq!(con.display(), "2.5");
    }

    #[test]
    fn apply_prefills_statements_and_marks() {
        let form = apply(TemplateKind::Promotion);
        assert!(form.proficiency_statement.contains("[Marine]"));
        assert!(form.conduct_statement.contains("military bearing"));
        assert_eq!(form.proficiency_mark.display(), "4.3");
        assert_eq!(form.conduct_mark.display(), "4.4");
    }
}
