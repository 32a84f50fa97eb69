//! Training records consumed read-only by the aggregators and validator.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::enums::{AbsenceType, PublicationType, RecognitionType, SelfEducationType};
use crate::ids::{
    AbsenceId, CourseId, InternshipId, ModuleId, PublicationId, RecognitionId, SelfEducationId,
    ShiftId, SpecializationId, UserId,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: InternshipId,
    pub specialization_id: SpecializationId,
    #[serde(default)]
    pub module_id: Option<ModuleId>,
    pub name: String,
    #[serde(default)]
    pub institution_name: String,
    #[serde(default)]
    pub department_name: String,
    #[serde(default)]
    pub supervisor_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub days_count: Option<u32>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_approved: bool,
}

impl Internship {
    /// Inclusive day span when both ends are known and ordered.
    pub fn span_days(&self) -> Option<u32> {
        let (start, end) = (self.start_date?, self.end_date?);
        let days = (end - start).num_days();
        if days < 0 {
            return None;
        }
        u32::try_from(days + 1).ok()
    }

    /// Recorded day count, falling back to the inclusive span.
    pub fn effective_days(&self) -> u32 {
        self.days_count.or_else(|| self.span_days()).unwrap_or(0)
    }

    pub fn contains(&self, date: NaiveDate) -> Option<bool> {
        Some(self.start_date? <= date && date <= self.end_date?)
    }
}

/// A single duty shift. Duration is whole hours plus minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalShift {
    pub id: ShiftId,
    pub internship_id: InternshipId,
    pub date: NaiveDate,
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub location: String,
    /// Year of training the shift is tagged with.
    #[serde(default)]
    pub year: u32,
}

impl MedicalShift {
    pub fn total_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub specialization_id: SpecializationId,
    #[serde(default)]
    pub module_id: Option<ModuleId>,
    pub course_type: String,
    pub name: String,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    #[serde(default)]
    pub certificate_number: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_approved: bool,
}

impl Course {
    pub fn has_certificate(&self) -> bool {
        self.certificate_number
            .as_deref()
            .is_some_and(|number| !number.trim().is_empty())
    }

    /// Completed and dated; undated completions do not count towards progress.
    pub fn counts_as_completed(&self) -> bool {
        self.is_completed && self.completion_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfEducation {
    pub id: SelfEducationId,
    pub specialization_id: SpecializationId,
    #[serde(default)]
    pub module_id: Option<ModuleId>,
    pub education_type: SelfEducationType,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub duration_hours: Option<u32>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub has_certificate: bool,
    #[serde(default)]
    pub recognized_provider: bool,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

impl SelfEducation {
    /// Days of allowance used; eight credit hours make one day.
    pub fn days(&self) -> f64 {
        match (self.duration_days, self.duration_hours) {
            (Some(days), _) => f64::from(days),
            (None, Some(hours)) => f64::from(hours) / 8.0,
            (None, None) => 0.0,
        }
    }

    pub fn quality_score(&self) -> u32 {
        let mut score = self.education_type.base_score();
        if self.is_completed {
            score += 5;
        }
        if self.has_certificate {
            score += 3;
        }
        if self.recognized_provider {
            score += 2;
        }
        if self.doi.is_some() || self.isbn.is_some() {
            score += 1;
        }
        if self.duration_hours.is_some_and(|hours| hours >= 8) {
            score += 2;
        }
        score
    }
}

/// Extra self-education days granted for a specific event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalSelfEducationDays {
    pub module_id: ModuleId,
    #[serde(default)]
    pub internship_id: Option<InternshipId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_days: u32,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub is_approved: bool,
}

impl AdditionalSelfEducationDays {
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    pub id: AbsenceId,
    pub specialization_id: SpecializationId,
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    pub affects_specialization_length: bool,
    #[serde(default)]
    pub is_approved: bool,
}

impl Absence {
    /// Days this absence pushes the expected end date by.
    pub fn affecting_days(&self) -> u32 {
        if self.is_approved && self.affects_specialization_length {
            self.duration_days
        } else {
            0
        }
    }

    /// Extension allowed by the per-type caps (sick leave at most 90 days).
    pub fn capped_extension_days(&self) -> u32 {
        let days = self.affecting_days();
        match self.absence_type.extension_cap_days() {
            Some(cap) => days.min(cap),
            None => days,
        }
    }

    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub id: RecognitionId,
    pub specialization_id: SpecializationId,
    pub recognition_type: RecognitionType,
    pub title: String,
    pub days_reduction: u32,
    #[serde(default)]
    pub is_approved: bool,
}

impl Recognition {
    pub fn effective_reduction(&self) -> u32 {
        if !self.is_approved {
            return 0;
        }
        self.days_reduction
            .min(self.recognition_type.max_days_reduction())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: PublicationId,
    pub user_id: UserId,
    #[serde(default)]
    pub specialization_id: Option<SpecializationId>,
    pub publication_type: PublicationType,
    pub title: String,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub is_peer_reviewed: bool,
    #[serde(default)]
    pub is_first_author: bool,
    #[serde(default)]
    pub is_corresponding_author: bool,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pmid: Option<String>,
    #[serde(default)]
    pub impact_factor: Option<f64>,
}

impl Publication {
    pub fn has_digital_identifier(&self) -> bool {
        self.doi.is_some() || self.pmid.is_some()
    }

    /// Published within the five years before `today`.
    pub fn is_recent(&self, today: NaiveDate) -> bool {
        let cutoff = today
            .with_year(today.year() - 5)
            .unwrap_or_else(|| crate::specialization::sub_days(today, 5 * 365));
        self.publication_date >= cutoff
    }

    pub fn impact_score(&self, today: NaiveDate) -> u32 {
        let mut score = self.publication_type.base_score(self.is_peer_reviewed);
        if self.is_first_author {
            score += 3;
        }
        if self.is_corresponding_author {
            score += 2;
        }
        if self.has_digital_identifier() {
            score += 2;
        }
        if self.is_recent(today) {
            score += 1;
        }
        if let Some(factor) = self.impact_factor {
            score += if factor >= 10.0 {
                5
            } else if factor >= 5.0 {
                3
            } else if factor >= 2.0 {
                2
            } else {
                1
            };
        }
        score
    }
}
