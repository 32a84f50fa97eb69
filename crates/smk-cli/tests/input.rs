use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;

use smk_cli::input::{authorize, doctor, load_bundle, load_catalog};
use smk_model::{DataBundle, SmkError, SmkVersion, Specialization, SpecializationId, UserId};
use smk_standards::standards_root;

fn unique_temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("smk-cli-{label}-{}-{nanos}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn bundle() -> DataBundle {
    DataBundle::new(Specialization {
        id: SpecializationId(7),
        user_id: UserId(3),
        name: "Kardiologia".to_string(),
        program_code: "KARD-2023".to_string(),
        smk_version: SmkVersion::New,
        start_date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        planned_end_date: None,
        duration_years: 6,
        base_duration_weeks: 312,
        basic_module_duration_weeks: 104,
        specialistic_module_duration_weeks: 208,
        vacation_days_per_year: 26,
        self_education_days_per_year: 6,
        statutory_holidays_per_year: 13,
        required_duty_hours_per_week: 10.0,
        required_publications: 0,
        required_conferences: 0,
    })
}

#[test]
fn bundle_round_trips_through_a_file() {
    let dir = unique_temp_dir("bundle");
    let path = dir.join("bundle.json");
    let original = bundle();
    fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    let loaded = load_bundle(&path).expect("bundle loads");
    assert_eq!(loaded, original);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn unreadable_bundle_names_the_file() {
    let dir = unique_temp_dir("broken");
    let path = dir.join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let error = load_bundle(&path).unwrap_err();
    assert!(format!("{error:#}").contains("broken.json"));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn foreign_user_is_rejected_before_computing() {
    let bundle = bundle();
    assert!(authorize(&bundle, None).is_ok());
    assert!(authorize(&bundle, Some(3)).is_ok());

    let error = authorize(&bundle, Some(4)).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<SmkError>(),
        Some(SmkError::Unauthorized { .. })
    ));
}

#[test]
fn doctor_reports_the_checked_in_standards() {
    let report = doctor(&standards_root()).expect("standards verify");
    assert_eq!(report.schema, "smk.standards-doctor");
    assert_eq!(report.counts.files, report.files.len());

    let catalog = load_catalog(Some(&standards_root())).expect("catalog loads");
    assert!(
        !catalog
            .get_requirements("Kardiologia", SmkVersion::New)
            .is_default
    );
}
