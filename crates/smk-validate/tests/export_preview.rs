mod support;

use smk_core::ProgressContext;
use smk_model::{AdditionalSelfEducationDays, DataBundle, ExportStatus, ModuleId, SmkVersion};
use smk_validate::preview_export;

use support::{catalog, course, date, scenario, self_education, specialization};

#[test]
fn scenario_preview() {
    let catalog = catalog();
    let bundle = scenario();
    let ctx = ProgressContext::new(&catalog, &bundle, date(2024, 6, 1));

    let preview = preview_export(&ctx);
    insta::assert_json_snapshot!(preview, @r#"
    {
      "specialization_id": 10,
      "specialization_name": "Testowa",
      "smk_version": "new",
      "internship_count": 1,
      "course_count": 0,
      "medical_shift_count": 1,
      "procedure_count": 3,
      "self_education_days": 0,
      "warnings": [
        "No courses to export",
        "Self-education days 0 below the export minimum of 5"
      ],
      "status": "has_warnings",
      "can_export": true
    }
    "#);
}

#[test]
fn complete_bundle_is_ready() {
    let catalog = catalog();
    let mut bundle = scenario();
    bundle.courses = vec![course(1, 1, "elective", "Kurs atestacyjny")];
    bundle.self_education = vec![self_education(1, Some(1), 2024, 4)];
    bundle.additional_self_education_days = vec![AdditionalSelfEducationDays {
        module_id: ModuleId(1),
        internship_id: None,
        start_date: date(2024, 4, 8),
        end_date: date(2024, 4, 9),
        number_of_days: 2,
        event_name: "Zjazd naukowy".to_string(),
        is_approved: true,
    }];
    let ctx = ProgressContext::new(&catalog, &bundle, date(2024, 6, 1));

    let preview = preview_export(&ctx);
    assert_eq!(preview.self_education_days, 6);
    assert_eq!(preview.status, ExportStatus::Ready);
    assert!(preview.warnings.is_empty());
    assert!(preview.can_export);
}

#[test]
fn empty_bundle_cannot_export() {
    let catalog = catalog();
    let bundle = DataBundle::new(specialization("Testowa", SmkVersion::Old));
    let ctx = ProgressContext::new(&catalog, &bundle, date(2024, 6, 1));

    let preview = preview_export(&ctx);
    assert_eq!(preview.warnings.len(), 5);
    assert_eq!(preview.status, ExportStatus::HasWarnings);
    assert!(!preview.can_export);
    assert_eq!(preview.procedure_count, 0);
}
