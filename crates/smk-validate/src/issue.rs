//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Severity, bucket and
//! module scope are derived from the variant.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smk_model::{
    CourseId, InternshipId, ModuleId, ModuleType, ProcedureId, ProcedureRole, ShiftId,
    SmkVersion,
};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks export
    Error,
    /// Should review
    Warning,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Result bucket an unscoped error is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    UserData,
    MedicalShift,
    Procedure,
    Module,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[
            Self::UserData,
            Self::MedicalShift,
            Self::Procedure,
            Self::Module,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UserData => "User data",
            Self::MedicalShift => "Medical shifts",
            Self::Procedure => "Procedures",
            Self::Module => "Modules",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    // User data
    MissingSpecializationName,
    MissingProgramCode,
    StartDateTooFarAhead {
        start_date: NaiveDate,
        latest_allowed: NaiveDate,
    },
    ModuleDurationMismatch {
        basic_weeks: u32,
        specialistic_weeks: u32,
        base_weeks: u32,
    },

    // Internships
    NoInternships,
    InternshipEndBeforeStart {
        internship: InternshipId,
        module_id: Option<ModuleId>,
        name: String,
    },
    InternshipUnknownModule {
        internship: InternshipId,
        module_id: ModuleId,
        name: String,
    },
    InternshipOutsideModule {
        internship: InternshipId,
        module_id: ModuleId,
        name: String,
    },
    InternshipDaysMismatch {
        internship: InternshipId,
        module_id: Option<ModuleId>,
        recorded: u32,
        span: u32,
    },
    InternshipNotCompleted {
        internship: InternshipId,
        module_id: Option<ModuleId>,
        name: String,
        end_date: NaiveDate,
    },
    InternshipMissingSupervisor {
        internship: InternshipId,
        module_id: Option<ModuleId>,
        name: String,
    },

    // Medical shifts
    NoShifts,
    InvalidShiftMinutes {
        shift: ShiftId,
        minutes: u32,
    },
    ShiftOutsideInternship {
        shift: ShiftId,
        internship: InternshipId,
        date: NaiveDate,
    },
    ShiftUnknownInternship {
        shift: ShiftId,
        internship: InternshipId,
    },
    ShiftMissingLocation {
        shift: ShiftId,
    },
    WeeklyAverageOutOfRange {
        average: f64,
        low: f64,
        high: f64,
    },
    MonthsBelowMinimum {
        months: Vec<String>,
        minimum: f64,
    },
    WeeklyHoursExceeded {
        week: String,
        hours: f64,
        maximum: f64,
    },

    // Procedures
    NoProcedures,
    RequirementIncomplete {
        module_id: ModuleId,
        code: String,
        completed_as_operator: u32,
        required_as_operator: u32,
        completed_as_assistant: u32,
        required_as_assistant: u32,
    },
    RequirementExceeded {
        module_id: ModuleId,
        code: String,
        role: ProcedureRole,
        completed: u32,
        required: u32,
    },
    InvalidExecutionCode {
        procedure: ProcedureId,
        execution_code: String,
    },
    MissingRequirementCode {
        procedure: ProcedureId,
    },
    ProcedureDialectMismatch {
        procedure: ProcedureId,
        record_version: SmkVersion,
        specialization_version: SmkVersion,
    },

    // Courses
    NoCourses,
    CourseMissingCompletionDate {
        course: CourseId,
        module_id: Option<ModuleId>,
        name: String,
    },
    CourseMissingCertificate {
        course: CourseId,
        module_id: Option<ModuleId>,
        name: String,
    },
    CourseCertificateFormat {
        course: CourseId,
        module_id: Option<ModuleId>,
        certificate_number: String,
    },

    // Self-education
    SelfEducationBelowMinimum {
        days: f64,
        required: f64,
    },
    SelfEducationYearExceeded {
        year: i32,
        days: f64,
        maximum: u32,
    },
    SelfEducationPoolExceeded {
        module_id: ModuleId,
        used: f64,
        available: f64,
    },

    // Modules
    DuplicateModuleType {
        module_type: ModuleType,
        count: usize,
    },
    ModulesOverlap {
        first: ModuleId,
        second: ModuleId,
    },
}

impl Issue {
    pub fn rule_id(&self) -> &'static str {
        match self {
            Issue::MissingSpecializationName => "SMK-U001",
            Issue::MissingProgramCode => "SMK-U002",
            Issue::StartDateTooFarAhead { .. } => "SMK-U003",
            Issue::ModuleDurationMismatch { .. } => "SMK-U004",
            Issue::NoInternships => "SMK-I001",
            Issue::InternshipEndBeforeStart { .. } => "SMK-I002",
            Issue::InternshipOutsideModule { .. } => "SMK-I003",
            Issue::InternshipDaysMismatch { .. } => "SMK-I004",
            Issue::InternshipNotCompleted { .. } => "SMK-I005",
            Issue::InternshipMissingSupervisor { .. } => "SMK-I006",
            Issue::InternshipUnknownModule { .. } => "SMK-I007",
            Issue::NoShifts => "SMK-S001",
            Issue::InvalidShiftMinutes { .. } => "SMK-S002",
            Issue::ShiftOutsideInternship { .. } => "SMK-S003",
            Issue::ShiftUnknownInternship { .. } => "SMK-S004",
            Issue::ShiftMissingLocation { .. } => "SMK-S005",
            Issue::WeeklyAverageOutOfRange { .. } => "SMK-S006",
            Issue::MonthsBelowMinimum { .. } => "SMK-S007",
            Issue::WeeklyHoursExceeded { .. } => "SMK-S008",
            Issue::NoProcedures => "SMK-P001",
            Issue::RequirementIncomplete { .. } => "SMK-P002",
            Issue::InvalidExecutionCode { .. } => "SMK-P003",
            Issue::MissingRequirementCode { .. } => "SMK-P004",
            Issue::RequirementExceeded { .. } => "SMK-P005",
            Issue::ProcedureDialectMismatch { .. } => "SMK-P006",
            Issue::NoCourses => "SMK-C001",
            Issue::CourseMissingCompletionDate { .. } => "SMK-C002",
            Issue::CourseMissingCertificate { .. } => "SMK-C003",
            Issue::CourseCertificateFormat { .. } => "SMK-C004",
            Issue::SelfEducationBelowMinimum { .. } => "SMK-E001",
            Issue::SelfEducationYearExceeded { .. } => "SMK-E002",
            Issue::SelfEducationPoolExceeded { .. } => "SMK-E003",
            Issue::DuplicateModuleType { .. } => "SMK-M001",
            Issue::ModulesOverlap { .. } => "SMK-M002",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::MissingSpecializationName
            | Issue::MissingProgramCode
            | Issue::StartDateTooFarAhead { .. }
            | Issue::ModuleDurationMismatch { .. } => Category::UserData,

            Issue::NoShifts
            | Issue::InvalidShiftMinutes { .. }
            | Issue::ShiftOutsideInternship { .. }
            | Issue::ShiftUnknownInternship { .. }
            | Issue::ShiftMissingLocation { .. }
            | Issue::WeeklyAverageOutOfRange { .. }
            | Issue::MonthsBelowMinimum { .. }
            | Issue::WeeklyHoursExceeded { .. } => Category::MedicalShift,

            Issue::NoProcedures
            | Issue::RequirementIncomplete { .. }
            | Issue::RequirementExceeded { .. }
            | Issue::InvalidExecutionCode { .. }
            | Issue::MissingRequirementCode { .. }
            | Issue::ProcedureDialectMismatch { .. } => Category::Procedure,

            _ => Category::Module,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::InternshipDaysMismatch { .. }
            | Issue::InternshipNotCompleted { .. }
            | Issue::InternshipMissingSupervisor { .. }
            | Issue::NoShifts
            | Issue::ShiftMissingLocation { .. }
            | Issue::WeeklyAverageOutOfRange { .. }
            | Issue::MonthsBelowMinimum { .. }
            | Issue::NoProcedures
            | Issue::RequirementExceeded { .. }
            | Issue::NoCourses
            | Issue::CourseCertificateFormat { .. }
            | Issue::SelfEducationBelowMinimum { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Module the issue is reported under, if any.
    pub fn module_id(&self) -> Option<ModuleId> {
        match self {
            Issue::InternshipOutsideModule { module_id, .. }
            | Issue::RequirementIncomplete { module_id, .. }
            | Issue::RequirementExceeded { module_id, .. }
            | Issue::SelfEducationPoolExceeded { module_id, .. } => Some(*module_id),
            Issue::InternshipEndBeforeStart { module_id, .. }
            | Issue::InternshipDaysMismatch { module_id, .. }
            | Issue::InternshipNotCompleted { module_id, .. }
            | Issue::InternshipMissingSupervisor { module_id, .. }
            | Issue::CourseMissingCompletionDate { module_id, .. }
            | Issue::CourseMissingCertificate { module_id, .. }
            | Issue::CourseCertificateFormat { module_id, .. } => *module_id,
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::MissingSpecializationName => "Specialization name is missing".to_string(),
            Issue::MissingProgramCode => "Specialization program code is missing".to_string(),
            Issue::StartDateTooFarAhead {
                start_date,
                latest_allowed,
            } => format!(
                "Start date {start_date} is later than the latest allowed {latest_allowed}"
            ),
            Issue::ModuleDurationMismatch {
                basic_weeks,
                specialistic_weeks,
                base_weeks,
            } => format!(
                "Module durations ({basic_weeks} + {specialistic_weeks} weeks) do not add up to the base duration of {base_weeks} weeks"
            ),
            Issue::NoInternships => "No internships recorded".to_string(),
            Issue::InternshipEndBeforeStart { name, .. } => {
                format!("Internship '{name}' ends before it starts")
            }
            Issue::InternshipUnknownModule {
                name, module_id, ..
            } => format!("Internship '{name}' references unknown module {module_id}"),
            Issue::InternshipOutsideModule { name, .. } => {
                format!("Internship '{name}' falls outside its module's date range")
            }
            Issue::InternshipDaysMismatch {
                internship,
                recorded,
                span,
                ..
            } => format!(
                "Internship {internship} records {recorded} day(s) but its dates span {span}"
            ),
            Issue::InternshipNotCompleted { name, end_date, .. } => {
                format!("Internship '{name}' ended on {end_date} but is not marked completed")
            }
            Issue::InternshipMissingSupervisor { name, .. } => {
                format!("Internship '{name}' has no supervisor")
            }
            Issue::NoShifts => "No medical shifts recorded".to_string(),
            Issue::InvalidShiftMinutes { shift, minutes } => {
                format!("Shift {shift} has {minutes} minutes; minutes must be 0-59")
            }
            Issue::ShiftOutsideInternship {
                shift,
                internship,
                date,
            } => format!("Shift {shift} on {date} lies outside internship {internship}"),
            Issue::ShiftUnknownInternship { shift, internship } => {
                format!("Shift {shift} references unknown internship {internship}")
            }
            Issue::ShiftMissingLocation { shift } => format!("Shift {shift} has no location"),
            Issue::WeeklyAverageOutOfRange { average, low, high } => format!(
                "Weekly shift average {average:.2} h is outside the expected {low:.2}-{high:.2} h"
            ),
            Issue::MonthsBelowMinimum { months, minimum } => format!(
                "{} month(s) below the monthly minimum of {minimum} h: {}",
                months.len(),
                months.join(", ")
            ),
            Issue::WeeklyHoursExceeded {
                week,
                hours,
                maximum,
            } => format!(
                "Week {week} has {hours:.2} h of shifts, above the weekly maximum of {maximum} h"
            ),
            Issue::NoProcedures => "No procedures recorded".to_string(),
            Issue::RequirementIncomplete {
                code,
                completed_as_operator,
                required_as_operator,
                completed_as_assistant,
                required_as_assistant,
                ..
            } => format!(
                "Procedure {code} incomplete: operator {completed_as_operator}/{required_as_operator}, assistant {completed_as_assistant}/{required_as_assistant}"
            ),
            Issue::RequirementExceeded {
                code,
                role,
                completed,
                required,
                ..
            } => format!("Procedure {code} exceeds the {role} requirement: {completed}/{required}"),
            Issue::InvalidExecutionCode {
                procedure,
                execution_code,
            } => format!(
                "Procedure {procedure} has execution code '{execution_code}'; expected A or B"
            ),
            Issue::MissingRequirementCode { procedure } => {
                format!("Procedure {procedure} is not linked to a requirement")
            }
            Issue::ProcedureDialectMismatch {
                procedure,
                record_version,
                specialization_version,
            } => format!(
                "Procedure {procedure} is a {record_version} SMK record in a {specialization_version} SMK specialization"
            ),
            Issue::NoCourses => "No courses recorded".to_string(),
            Issue::CourseMissingCompletionDate { name, .. } => {
                format!("Course '{name}' is completed but has no completion date")
            }
            Issue::CourseMissingCertificate { name, .. } => {
                format!("Course '{name}' requires a CMKP certificate number")
            }
            Issue::CourseCertificateFormat {
                certificate_number, ..
            } => format!(
                "Certificate number '{certificate_number}' does not match CMKP/YYYY/N"
            ),
            Issue::SelfEducationBelowMinimum { days, required } => format!(
                "Self-education days {days:.1} below the required {required:.1}"
            ),
            Issue::SelfEducationYearExceeded {
                year,
                days,
                maximum,
            } => format!("Self-education in {year} uses {days:.1} day(s); at most {maximum} allowed"),
            Issue::SelfEducationPoolExceeded {
                used, available, ..
            } => format!(
                "Self-education uses {used:.1} day(s) but only {available:.1} are available in this module"
            ),
            Issue::DuplicateModuleType { module_type, count } => {
                format!("{count} {} modules; at most one is allowed", module_type.as_str())
            }
            Issue::ModulesOverlap { first, second } => {
                format!("Modules {first} and {second} overlap in time")
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule_id(), self.message())
    }
}
