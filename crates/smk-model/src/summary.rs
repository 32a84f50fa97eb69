//! Aggregator outputs. All breakdowns are sorted newest first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::AbsenceType;
use crate::ids::ModuleId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternshipSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub approved: usize,
    pub total_days: u32,
    pub completed_days: u32,
    pub by_module: Vec<ModuleInternships>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleInternships {
    /// `None` groups internships not assigned to a module.
    pub module_id: Option<ModuleId>,
    pub total: usize,
    pub completed: usize,
    pub days: u32,
}

/// Hours worked in one calendar period (`YYYY-MM` or `YYYY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodHours {
    pub period: String,
    pub hours: f64,
    pub shifts: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingYearHours {
    pub year: u32,
    pub hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub shift_count: usize,
    pub total_hours: f64,
    pub weekly_average: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub monthly: Vec<PeriodHours>,
    pub yearly: Vec<PeriodHours>,
    pub by_training_year: Vec<TrainingYearHours>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearDays {
    pub year: i32,
    pub days: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub total: usize,
    pub completed: usize,
    pub approved: usize,
    pub with_certificate: usize,
    pub by_year: Vec<YearCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfEducationSummary {
    pub records: usize,
    pub completed: usize,
    pub total_days: f64,
    pub additional_days: u32,
    pub quality_score_total: u32,
    pub by_year: Vec<YearDays>,
}

impl SelfEducationSummary {
    /// Recorded days plus approved additional days.
    pub fn combined_days(&self) -> f64 {
        self.total_days + f64::from(self.additional_days)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceTypeDays {
    pub absence_type: AbsenceType,
    pub days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsenceSummary {
    pub total: usize,
    pub approved: usize,
    /// Σ duration of approved absences flagged as extending training.
    pub affecting_days: u32,
    /// Same total with per-type extension caps applied.
    pub capped_extension_days: u32,
    pub by_type: Vec<AbsenceTypeDays>,
    pub by_year: Vec<YearDays>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionSummary {
    pub total: usize,
    pub approved: usize,
    pub total_reduction_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationSummary {
    pub total: usize,
    pub first_author: usize,
    pub peer_reviewed: usize,
    pub impact_score_total: u32,
    pub by_year: Vec<YearCount>,
}
