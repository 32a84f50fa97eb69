use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::enums::{ModuleType, SmkVersion};
use crate::ids::{ModuleId, SpecializationId, UserId};

/// A physician's specialization programme as supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: SpecializationId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub program_code: String,
    pub smk_version: SmkVersion,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub planned_end_date: Option<NaiveDate>,
    pub duration_years: u32,
    pub base_duration_weeks: u32,
    pub basic_module_duration_weeks: u32,
    pub specialistic_module_duration_weeks: u32,
    #[serde(default)]
    pub vacation_days_per_year: u32,
    #[serde(default = "default_self_education_days")]
    pub self_education_days_per_year: u32,
    #[serde(default)]
    pub statutory_holidays_per_year: u32,
    /// Required duty hours per week; zero means "use the dialect default".
    #[serde(default)]
    pub required_duty_hours_per_week: f64,
    #[serde(default)]
    pub required_publications: u32,
    #[serde(default)]
    pub required_conferences: u32,
}

fn default_self_education_days() -> u32 {
    6
}

impl Specialization {
    /// `basic + specialistic == base` must hold for the week counts.
    pub fn durations_consistent(&self) -> bool {
        self.basic_module_duration_weeks
            .checked_add(self.specialistic_module_duration_weeks)
            == Some(self.base_duration_weeks)
    }

    /// Start date plus the base programme length, before absences.
    pub fn base_end_date(&self) -> NaiveDate {
        add_days(self.start_date, u64::from(self.base_duration_weeks) * 7)
    }

    pub fn basic_module_end_date(&self) -> NaiveDate {
        add_days(self.start_date, u64::from(self.basic_module_duration_weeks) * 7)
    }
}

/// A training phase inside a specialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub specialization_id: SpecializationId,
    pub module_type: ModuleType,
    pub name: String,
    /// Ordering index within the specialization (basic first).
    #[serde(default)]
    pub sequence: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Module {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn overlaps(&self, other: &Module) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Whole weeks covered by the active range, at least one.
    pub fn duration_weeks(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days().max(0);
        u32::try_from(days / 7).unwrap_or(u32::MAX).max(1)
    }
}

/// Saturating date addition; dates past the calendar range stay at the maximum.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

pub fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}
