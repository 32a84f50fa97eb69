//! Output DTOs handed to the API and mobile layers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ModuleType, SmkVersion};
use crate::ids::{ModuleId, SpecializationId, UserId};
use crate::summary::{
    AbsenceSummary, CourseSummary, InternshipSummary, PublicationSummary, RecognitionSummary,
    SelfEducationSummary, ShiftSummary,
};

/// One progress axis: `ratio = completed / required`, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisProgress {
    pub completed: u32,
    pub required: u32,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleProgressDto {
    pub module_id: ModuleId,
    pub module_name: String,
    pub module_type: ModuleType,
    pub courses: AxisProgress,
    pub internships: AxisProgress,
    /// Operator (code A) performances, capped per requirement.
    pub procedures_operator: AxisProgress,
    /// Assistant (code B) performances, capped per requirement.
    pub procedures_assistant: AxisProgress,
    /// Share of procedure requirements that are fully complete.
    pub procedures_percentage: f64,
    /// Mean of the four axis ratios.
    pub progress: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportantDateKind {
    Start,
    ModuleEnd,
    End,
    Course,
    Internship,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantDateDto {
    pub date: NaiveDate,
    pub kind: ImportantDateKind,
    pub title: String,
    pub description: String,
    pub is_past: bool,
    pub days_remaining: i64,
    pub related_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationInfoDto {
    pub id: SpecializationId,
    pub name: String,
    pub program_code: String,
    pub smk_version: SmkVersion,
    pub start_date: NaiveDate,
    pub planned_end_date: Option<NaiveDate>,
    pub expected_end_date: NaiveDate,
    pub duration_years: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardInternshipProgress {
    pub completed: u32,
    pub required: u32,
    pub completed_days: u32,
    pub required_days: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCourseProgress {
    pub completed: u32,
    pub required: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardProcedureProgress {
    pub completed_operator: u32,
    pub required_operator: u32,
    pub completed_assistant: u32,
    pub required_assistant: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardShiftProgress {
    pub completed_hours: f64,
    pub required_hours: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardModuleProgress {
    pub internships: DashboardInternshipProgress,
    pub courses: DashboardCourseProgress,
    pub procedures: DashboardProcedureProgress,
    pub medical_shifts: DashboardShiftProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverviewDto {
    pub overall_progress: f64,
    pub current_module_id: Option<ModuleId>,
    pub current_module_name: Option<String>,
    pub module_type: Option<ModuleType>,
    pub specialization: SpecializationInfoDto,
    pub module_progress: Option<DashboardModuleProgress>,
    pub self_education_count: usize,
    pub publications_count: usize,
    pub upcoming_events: Vec<ImportantDateDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureProgressDto {
    pub requirement_code: String,
    pub name: String,
    pub required_as_operator: u32,
    pub required_as_assistant: u32,
    pub completed_as_operator: u32,
    pub completed_as_assistant: u32,
    pub is_completed: bool,
    pub exceeds_operator: bool,
    pub exceeds_assistant: bool,
    pub last_realization_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleProcedureSummary {
    pub total_requirements: usize,
    pub completed_requirements: usize,
    pub completion_percentage: f64,
    pub total_realizations_as_operator: u32,
    pub total_realizations_as_assistant: u32,
    pub last_realization_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleProceduresDto {
    pub module_id: ModuleId,
    pub module_name: String,
    pub module_type: ModuleType,
    pub smk_version: SmkVersion,
    pub procedures: Vec<ProcedureProgressDto>,
    pub summary: ModuleProcedureSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProcedureSummary {
    pub total_modules: usize,
    pub total_procedures: usize,
    pub completed_procedures: usize,
    pub total_realizations_as_operator: u32,
    pub total_realizations_as_assistant: u32,
    pub overall_completion_percentage: f64,
    pub last_realization_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProceduresDto {
    pub user_id: UserId,
    pub specialization_id: SpecializationId,
    pub modules: Vec<ModuleProceduresDto>,
    pub summary: UserProcedureSummary,
}

/// Whole-programme statistics.
///
/// `expected_end_date` moves by the uncapped `absences.affecting_days`, while
/// `absences.capped_extension_days` applies the per-type caps (sick leave at
/// 90 days). The two figures differ whenever a capped absence runs long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationStatisticsDto {
    pub specialization_id: SpecializationId,
    pub smk_version: SmkVersion,
    /// True when the catalog had no entry and the default set was used.
    pub requirements_are_default: bool,
    pub overall_progress: f64,
    pub modules: Vec<ModuleProgressDto>,
    pub internships: InternshipSummary,
    pub medical_shifts: ShiftSummary,
    pub procedures: UserProcedureSummary,
    pub courses: CourseSummary,
    pub self_education: SelfEducationSummary,
    pub publications: PublicationSummary,
    pub absences: AbsenceSummary,
    pub recognitions: RecognitionSummary,
    pub expected_end_date: NaiveDate,
    pub important_dates: Vec<ImportantDateDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleValidationInfo {
    pub module_id: ModuleId,
    pub module_name: String,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmkValidationResultDto {
    pub specialization_id: SpecializationId,
    pub smk_version: SmkVersion,
    pub validation_date: NaiveDate,
    pub is_valid: bool,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub user_data_errors: Vec<String>,
    pub medical_shift_errors: Vec<String>,
    pub procedure_errors: Vec<String>,
    pub module_errors: Vec<String>,
    /// Warnings not attributed to a specific module.
    pub warnings: Vec<String>,
    pub module_validations: Vec<ModuleValidationInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    Ready,
    HasWarnings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmkExportPreviewDto {
    pub specialization_id: SpecializationId,
    pub specialization_name: String,
    pub smk_version: SmkVersion,
    pub internship_count: usize,
    pub course_count: usize,
    pub medical_shift_count: usize,
    pub procedure_count: u32,
    pub self_education_days: u32,
    pub warnings: Vec<String>,
    pub status: ExportStatus,
    pub can_export: bool,
}
