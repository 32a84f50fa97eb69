//! Builders shared by the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;

use smk_model::{
    Course, CourseId, DataBundle, Internship, InternshipId, MedicalShift, Module, ModuleId,
    ModuleType, NewSmkProcedure, ProcedureId, ProcedureRecord, ShiftId, SmkVersion,
    Specialization, SpecializationId, UserId,
};
use smk_standards::{
    ModuleRequirement, ProcedureRequirement, RequirementCatalog, RequirementSet, WeeklyHours,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_specialization(version: SmkVersion) -> Specialization {
    Specialization {
        id: SpecializationId(10),
        user_id: UserId(1),
        name: "Testowa".to_string(),
        program_code: "TEST-01".to_string(),
        smk_version: version,
        start_date: date(2024, 1, 1),
        planned_end_date: None,
        duration_years: 2,
        base_duration_weeks: 104,
        basic_module_duration_weeks: 52,
        specialistic_module_duration_weeks: 52,
        vacation_days_per_year: 26,
        self_education_days_per_year: 6,
        statutory_holidays_per_year: 13,
        required_duty_hours_per_week: 10.0,
        required_publications: 0,
        required_conferences: 0,
    }
}

pub fn make_module(id: u64, module_type: ModuleType, start: NaiveDate, end: NaiveDate) -> Module {
    Module {
        id: ModuleId(id),
        specialization_id: SpecializationId(10),
        module_type,
        name: format!("{} module", module_type.label()),
        sequence: u32::try_from(id).unwrap(),
        start_date: start,
        end_date: end,
    }
}

pub fn make_internship(
    id: u64,
    module_id: u64,
    start: NaiveDate,
    end: NaiveDate,
    completed: bool,
) -> Internship {
    Internship {
        id: InternshipId(id),
        specialization_id: SpecializationId(10),
        module_id: Some(ModuleId(module_id)),
        name: format!("Staż {id}"),
        institution_name: "Szpital Kliniczny".to_string(),
        department_name: "Oddział".to_string(),
        supervisor_name: Some("dr Nowak".to_string()),
        start_date: Some(start),
        end_date: Some(end),
        days_count: Some(u32::try_from((end - start).num_days() + 1).unwrap()),
        is_completed: completed,
        is_approved: completed,
    }
}

pub fn make_shift(id: u64, internship_id: u64, date: NaiveDate, hours: u32, minutes: u32) -> MedicalShift {
    MedicalShift {
        id: ShiftId(id),
        internship_id: InternshipId(internship_id),
        date,
        hours,
        minutes,
        location: "SOR".to_string(),
        year: 1,
    }
}

pub fn make_course(id: u64, module_id: u64, completed: Option<NaiveDate>) -> Course {
    Course {
        id: CourseId(id),
        specialization_id: SpecializationId(10),
        module_id: Some(ModuleId(module_id)),
        course_type: "elective".to_string(),
        name: format!("Kurs {id}"),
        scheduled_date: None,
        completion_date: completed,
        certificate_number: None,
        is_completed: completed.is_some(),
        is_approved: false,
    }
}

pub fn make_new_procedure(
    id: u64,
    module_id: u64,
    code: &str,
    operator: u32,
    assistant: u32,
    date: NaiveDate,
) -> ProcedureRecord {
    ProcedureRecord::New(NewSmkProcedure {
        id: ProcedureId(id),
        module_id: ModuleId(module_id),
        internship_id: None,
        requirement_code: Some(code.to_string()),
        procedure_name: code.to_string(),
        count_operator: operator,
        count_assistant: assistant,
        date,
    })
}

/// Catalog with a "Testowa" entry: one basic module requiring one internship,
/// one course and procedure T001 (2 as operator, 1 as assistant).
pub fn make_catalog() -> RequirementCatalog {
    let mut catalog = RequirementCatalog::builtin().expect("builtin catalog");
    catalog.insert(RequirementSet {
        specialization_key: "testowa".to_string(),
        specialization_name: "Testowa".to_string(),
        smk_version: SmkVersion::New,
        duration_years: 2,
        monthly_hours_minimum: 160,
        weekly_hours: WeeklyHours {
            minimum: 40,
            maximum: 48,
            average_hours: 10,
            average_minutes: 5,
        },
        modules: vec![ModuleRequirement {
            module_type: ModuleType::Basic,
            name: "Basic module".to_string(),
            duration_months: 12,
            required_internships: 1,
            required_internship_days: 30,
            required_courses: 1,
            procedures: vec![ProcedureRequirement {
                code: "T001".to_string(),
                name: "Procedura testowa".to_string(),
                required_as_operator: 2,
                required_as_assistant: 1,
            }],
        }],
        required_courses: Vec::new(),
        is_default: false,
    });
    catalog
}

/// One module, one 30-day internship inside it, one 8h30m shift inside the
/// internship, and two operator plus one assistant realization of T001.
pub fn make_scenario_bundle() -> DataBundle {
    let mut bundle = DataBundle::new(make_specialization(SmkVersion::New));
    bundle.modules = vec![make_module(
        1,
        ModuleType::Basic,
        date(2024, 1, 1),
        date(2024, 12, 31),
    )];
    bundle.internships = vec![make_internship(
        1,
        1,
        date(2024, 2, 1),
        date(2024, 3, 1),
        true,
    )];
    bundle.medical_shifts = vec![make_shift(1, 1, date(2024, 2, 10), 8, 30)];
    bundle.procedures = vec![
        make_new_procedure(1, 1, "T001", 2, 0, date(2024, 2, 12)),
        make_new_procedure(2, 1, "T001", 0, 1, date(2024, 2, 14)),
    ];
    bundle
}
