//! Bundle builders for validator tests.
#![allow(dead_code)]

use chrono::NaiveDate;

use smk_model::{
    Course, CourseId, DataBundle, Internship, InternshipId, MedicalShift, Module, ModuleId,
    ModuleType, NewSmkProcedure, OldSmkProcedure, ProcedureId, ProcedureRecord, SelfEducation,
    SelfEducationId, SelfEducationType, ShiftId, SmkVersion, Specialization, SpecializationId,
    UserId,
};
use smk_standards::{
    ModuleRequirement, ProcedureRequirement, RequirementCatalog, RequirementSet, WeeklyHours,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn specialization(name: &str, version: SmkVersion) -> Specialization {
    Specialization {
        id: SpecializationId(10),
        user_id: UserId(1),
        name: name.to_string(),
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

pub fn module(id: u64, module_type: ModuleType, start: NaiveDate, end: NaiveDate) -> Module {
    Module {
        id: ModuleId(id),
        specialization_id: SpecializationId(10),
        module_type,
        name: format!("Moduł {}", module_type.as_str()),
        sequence: u32::try_from(id).unwrap(),
        start_date: start,
        end_date: end,
    }
}

pub fn internship(id: u64, module_id: Option<u64>, start: NaiveDate, end: NaiveDate) -> Internship {
    Internship {
        id: InternshipId(id),
        specialization_id: SpecializationId(10),
        module_id: module_id.map(ModuleId),
        name: format!("Staż {id}"),
        institution_name: "Szpital Wojewódzki".to_string(),
        department_name: "Oddział wewnętrzny".to_string(),
        supervisor_name: Some("dr Kowalska".to_string()),
        start_date: Some(start),
        end_date: Some(end),
        days_count: Some(u32::try_from((end - start).num_days() + 1).unwrap()),
        is_completed: true,
        is_approved: true,
    }
}

pub fn shift(id: u64, internship_id: u64, date: NaiveDate, hours: u32, minutes: u32) -> MedicalShift {
    MedicalShift {
        id: ShiftId(id),
        internship_id: InternshipId(internship_id),
        date,
        hours,
        minutes,
        location: "Izba przyjęć".to_string(),
        year: 1,
    }
}

pub fn course(id: u64, module_id: u64, course_type: &str, name: &str) -> Course {
    Course {
        id: CourseId(id),
        specialization_id: SpecializationId(10),
        module_id: Some(ModuleId(module_id)),
        course_type: course_type.to_string(),
        name: name.to_string(),
        scheduled_date: None,
        completion_date: Some(date(2024, 3, 15)),
        certificate_number: None,
        is_completed: true,
        is_approved: true,
    }
}

pub fn new_procedure(
    id: u64,
    module_id: u64,
    code: Option<&str>,
    operator: u32,
    assistant: u32,
    date: NaiveDate,
) -> ProcedureRecord {
    ProcedureRecord::New(NewSmkProcedure {
        id: ProcedureId(id),
        module_id: ModuleId(module_id),
        internship_id: None,
        requirement_code: code.map(str::to_string),
        procedure_name: "Procedura".to_string(),
        count_operator: operator,
        count_assistant: assistant,
        date,
    })
}

pub fn old_procedure(id: u64, internship_id: u64, code: &str, execution_code: &str) -> ProcedureRecord {
    ProcedureRecord::Old(OldSmkProcedure {
        id: ProcedureId(id),
        internship_id: InternshipId(internship_id),
        code: code.to_string(),
        execution_code: execution_code.to_string(),
        date: date(2024, 2, 20),
        year: 1,
        location: "Blok operacyjny".to_string(),
    })
}

pub fn self_education(id: u64, module_id: Option<u64>, year: i32, days: u32) -> SelfEducation {
    SelfEducation {
        id: SelfEducationId(id),
        specialization_id: SpecializationId(10),
        module_id: module_id.map(ModuleId),
        education_type: SelfEducationType::Workshop,
        title: format!("Warsztaty {id}"),
        year,
        duration_days: Some(days),
        duration_hours: None,
        is_completed: true,
        has_certificate: true,
        recognized_provider: true,
        doi: None,
        isbn: None,
    }
}

/// Builtin catalog plus "Testowa" (new dialect): a basic module requiring
/// one internship of 30 days, one course and T001 twice as operator and
/// once as assistant.
pub fn catalog() -> RequirementCatalog {
    let mut catalog = RequirementCatalog::builtin().expect("builtin catalog");
    catalog.insert(RequirementSet {
        specialization_key: "testowa".to_string(),
        specialization_name: "Testowa".to_string(),
        smk_version: SmkVersion::New,
        duration_years: 2,
        monthly_hours_minimum: 40,
        weekly_hours: WeeklyHours {
            minimum: 40,
            maximum: 48,
            average_hours: 10,
            average_minutes: 5,
        },
        modules: vec![ModuleRequirement {
            module_type: ModuleType::Basic,
            name: "Moduł podstawowy".to_string(),
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

/// One module, a 30-day internship inside it, one 8h30m shift inside the
/// internship, and T001 realized twice as operator and once as assistant.
pub fn scenario() -> DataBundle {
    let mut bundle = DataBundle::new(specialization("Testowa", SmkVersion::New));
    bundle.modules = vec![module(
        1,
        ModuleType::Basic,
        date(2024, 1, 1),
        date(2024, 12, 31),
    )];
    bundle.internships = vec![internship(1, Some(1), date(2024, 2, 1), date(2024, 3, 1))];
    bundle.medical_shifts = vec![shift(1, 1, date(2024, 2, 10), 8, 30)];
    bundle.procedures = vec![
        new_procedure(1, 1, Some("T001"), 2, 0, date(2024, 2, 12)),
        new_procedure(2, 1, Some("T001"), 0, 1, date(2024, 2, 14)),
    ];
    bundle
}
