use chrono::NaiveDate;

use smk_model::{
    Absence, AbsenceId, AbsenceType, Course, CourseId, Internship, InternshipId, MedicalShift,
    ModuleId, Publication, PublicationId, PublicationType, Recognition, RecognitionId,
    RecognitionType, SelfEducation, SelfEducationId, SelfEducationType, ShiftId, SmkVersion,
    Specialization, SpecializationId, UserId,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_internship(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Internship {
    Internship {
        id: InternshipId(1),
        specialization_id: SpecializationId(1),
        module_id: Some(ModuleId(1)),
        name: "Oddział kardiologii".to_string(),
        institution_name: String::new(),
        department_name: String::new(),
        supervisor_name: None,
        start_date: start,
        end_date: end,
        days_count: None,
        is_completed: false,
        is_approved: false,
    }
}

fn make_absence(absence_type: AbsenceType, days: u32, affects: bool, approved: bool) -> Absence {
    Absence {
        id: AbsenceId(1),
        specialization_id: SpecializationId(1),
        absence_type,
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 1),
        duration_days: days,
        affects_specialization_length: affects,
        is_approved: approved,
    }
}

#[test]
fn internship_span_is_inclusive() {
    let internship = make_internship(Some(date(2024, 1, 1)), Some(date(2024, 1, 30)));
    assert_eq!(internship.span_days(), Some(30));
    assert_eq!(internship.effective_days(), 30);
}

#[test]
fn internship_span_needs_ordered_dates() {
    let reversed = make_internship(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
    assert_eq!(reversed.span_days(), None);
    let open = make_internship(Some(date(2024, 2, 1)), None);
    assert_eq!(open.span_days(), None);
    assert_eq!(open.effective_days(), 0);
    assert_eq!(open.contains(date(2024, 2, 2)), None);
}

#[test]
fn shift_hours_include_minutes() {
    let shift = MedicalShift {
        id: ShiftId(1),
        internship_id: InternshipId(1),
        date: date(2024, 1, 5),
        hours: 8,
        minutes: 30,
        location: "SOR".to_string(),
        year: 1,
    };
    assert!((shift.total_hours() - 8.5).abs() < 1e-9);
}

#[test]
fn course_certificate_requires_non_blank_number() {
    let mut course = Course {
        id: CourseId(1),
        specialization_id: SpecializationId(1),
        module_id: None,
        course_type: "mandatory".to_string(),
        name: "Kurs podstawowy".to_string(),
        scheduled_date: None,
        completion_date: None,
        certificate_number: Some("   ".to_string()),
        is_completed: true,
        is_approved: false,
    };
    assert!(!course.has_certificate());
    assert!(!course.counts_as_completed());
    course.certificate_number = Some("CMKP/2024/15".to_string());
    course.completion_date = Some(date(2024, 5, 1));
    assert!(course.has_certificate());
    assert!(course.counts_as_completed());
}

#[test]
fn self_education_days_fall_back_to_hours() {
    let mut record = SelfEducation {
        id: SelfEducationId(1),
        specialization_id: SpecializationId(1),
        module_id: None,
        education_type: SelfEducationType::Conference,
        title: "Zjazd PTK".to_string(),
        year: 2024,
        duration_days: None,
        duration_hours: Some(12),
        is_completed: true,
        has_certificate: true,
        recognized_provider: false,
        doi: None,
        isbn: None,
    };
    assert!((record.days() - 1.5).abs() < 1e-9);
    // conference 10 + completed 5 + certificate 3 + long duration 2
    assert_eq!(record.quality_score(), 20);
    record.duration_days = Some(2);
    assert!((record.days() - 2.0).abs() < 1e-9);
}

#[test]
fn absence_extension_respects_approval_and_flag() {
    assert_eq!(
        make_absence(AbsenceType::Maternity, 120, true, true).affecting_days(),
        120
    );
    assert_eq!(
        make_absence(AbsenceType::Maternity, 120, true, false).affecting_days(),
        0
    );
    assert_eq!(
        make_absence(AbsenceType::Vacation, 10, false, true).affecting_days(),
        0
    );
    let sick = make_absence(AbsenceType::Sick, 120, true, true);
    assert_eq!(sick.affecting_days(), 120);
    assert_eq!(sick.capped_extension_days(), 90);
}

#[test]
fn recognition_reduction_is_capped_per_type() {
    let recognition = Recognition {
        id: RecognitionId(1),
        specialization_id: SpecializationId(1),
        recognition_type: RecognitionType::Research,
        title: "Doktorat".to_string(),
        days_reduction: 400,
        is_approved: true,
    };
    assert_eq!(recognition.effective_reduction(), 180);

    let pending = Recognition {
        is_approved: false,
        ..recognition
    };
    assert_eq!(pending.effective_reduction(), 0);
}

#[test]
fn publication_impact_score_adds_bonuses() {
    let publication = Publication {
        id: PublicationId(1),
        user_id: UserId(1),
        specialization_id: Some(SpecializationId(1)),
        publication_type: PublicationType::Journal,
        title: "Case series".to_string(),
        publication_date: date(2023, 6, 1),
        is_peer_reviewed: true,
        is_first_author: true,
        is_corresponding_author: false,
        doi: Some("10.1000/xyz".to_string()),
        pmid: None,
        impact_factor: Some(5.5),
    };
    // journal 10 + first author 3 + doi 2 + recent 1 + IF tier 3
    assert_eq!(publication.impact_score(date(2024, 6, 1)), 19);
    // no longer recent ten years later
    assert_eq!(publication.impact_score(date(2034, 6, 1)), 18);
}

#[test]
fn module_weeks_must_sum_to_base_without_overflowing() {
    let mut specialization = Specialization {
        id: SpecializationId(1),
        user_id: UserId(1),
        name: "Kardiologia".to_string(),
        program_code: "KARD-2023".to_string(),
        smk_version: SmkVersion::New,
        start_date: date(2024, 1, 1),
        planned_end_date: None,
        duration_years: 6,
        base_duration_weeks: 312,
        basic_module_duration_weeks: 156,
        specialistic_module_duration_weeks: 156,
        vacation_days_per_year: 26,
        self_education_days_per_year: 6,
        statutory_holidays_per_year: 13,
        required_duty_hours_per_week: 0.0,
        required_publications: 0,
        required_conferences: 0,
    };
    assert!(specialization.durations_consistent());

    specialization.specialistic_module_duration_weeks = 100;
    assert!(!specialization.durations_consistent());

    specialization.basic_module_duration_weeks = u32::MAX;
    specialization.base_duration_weeks = u32::MAX;
    assert!(!specialization.durations_consistent());
}
