use chrono::{Duration, Utc};

use super::common::*;
use crate::workflows::counseling::alignment::VerdictStatus;
use crate::workflows::counseling::domain::DraftId;
use crate::workflows::counseling::repository::{DraftRecord, DraftRepository};
use crate::workflows::counseling::service::CounselingServiceError;
use crate::workflows::counseling::templates::TemplateKind;

#[test]
fn draft_round_trip_through_the_service() {
    let (service, _repository) = build_service();
    let saved = service
        .save_draft("Cpl Doe semi-annual", form(MIXED, "3.5", PLAINLY_AVERAGE, "3.0"))
        .expect("draft saves");

    assert!(saved.id.0.starts_with("draft-"));

    let loaded = service.load_draft(&saved.id).expect("draft loads");
    assert_eq!(loaded.name, "Cpl Doe semi-annual");
    assert_eq!(loaded.form.proficiency_statement, MIXED);

    service.delete_draft(&saved.id).expect("draft deletes");
    assert!(matches!(
        service.load_draft(&saved.id),
        Err(CounselingServiceError::Repository(_))
    ));
    assert_eq!(service.draft_count().expect("count"), 0);
}

#[test]
fn blank_draft_names_are_rejected() {
    let (service, _repository) = build_service();
    let result = service.save_draft("   ", form("", "4.0", "", "4.0"));
    assert!(matches!(
        result,
        Err(CounselingServiceError::EmptyDraftName)
    ));
}

#[test]
fn draft_names_are_trimmed_on_save() {
    let (service, _repository) = build_service();
    let saved = service
        .save_draft("  June counseling  ", form("", "4.0", "", "4.0"))
        .expect("draft saves");
    assert_eq!(saved.name, "June counseling");
}

#[test]
fn listing_orders_drafts_newest_first() {
    let (service, repository) = build_service();
    let now = Utc::now();

    for (id, name, age_minutes) in [
        ("draft-a", "older", 30),
        ("draft-b", "newest", 0),
        ("draft-c", "middle", 10),
    ] {
        repository
            .insert(DraftRecord {
                id: DraftId(id.to_string()),
                name: name.to_string(),
                created_at: now - Duration::minutes(age_minutes),
                form: form("", "4.0", "", "4.0"),
            })
            .expect("insert");
    }

    let listed = service.list_drafts().expect("list");
    let names: Vec<&str> = listed.iter().map(|draft| draft.name.as_str()).collect();
    assert_eq!(names, vec!["newest", "middle", "older"]);
}

#[test]
fn applied_template_checks_out_through_the_engine() {
    let (service, _repository) = build_service();
    let form = service.apply_template(TemplateKind::SemiAnnual);
    assert_eq!(form.proficiency_mark.display(), "4.0");

    // Scaffolding text is placeholder-heavy but long enough to evaluate.
    let verdict = service.check_worksheet(&form);
    assert_ne!(verdict.status, VerdictStatus::Warning);
}

#[test]
fn worksheet_check_and_export_share_the_form() {
    let (service, _repository) = build_service();
    let form = form(STRONG_POSITIVE, "4.8", CLEARLY_NEGATIVE, "4.8");

    let verdict = service.check_worksheet(&form);
    assert_eq!(verdict.status, VerdictStatus::Warning);

    let text = service.export_text(&form);
    assert!(text.contains("PROFICIENCY (4.8):"));
    assert!(text.contains("CONDUCT (4.8):"));
}
