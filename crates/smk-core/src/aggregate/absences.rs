use std::collections::BTreeMap;

use smk_model::{
    Absence, AbsenceSummary, AbsenceType, AbsenceTypeDays, Recognition, RecognitionSummary,
    YearDays,
};

pub fn summarize_absences(absences: &[Absence]) -> AbsenceSummary {
    let mut by_type: BTreeMap<AbsenceType, u32> = BTreeMap::new();
    let mut by_year: BTreeMap<i32, u32> = BTreeMap::new();
    for absence in absences {
        let days = absence.duration_days;
        let type_days = by_type.entry(absence.absence_type).or_insert(0);
        *type_days = type_days.saturating_add(days);
        let year_days = by_year.entry(absence.year()).or_insert(0);
        *year_days = year_days.saturating_add(days);
    }
    AbsenceSummary {
        total: absences.len(),
        approved: absences.iter().filter(|a| a.is_approved).count(),
        affecting_days: absences
            .iter()
            .map(Absence::affecting_days)
            .fold(0, u32::saturating_add),
        capped_extension_days: absences
            .iter()
            .map(Absence::capped_extension_days)
            .fold(0, u32::saturating_add),
        by_type: by_type
            .into_iter()
            .map(|(absence_type, days)| AbsenceTypeDays { absence_type, days })
            .collect(),
        by_year: by_year
            .into_iter()
            .rev()
            .map(|(year, days)| YearDays {
                year,
                days: f64::from(days),
            })
            .collect(),
    }
}

/// Approved self-education leave taken in `year`.
pub fn self_education_leave_days(absences: &[Absence], year: i32) -> u32 {
    absences
        .iter()
        .filter(|a| {
            a.absence_type == AbsenceType::SelfEducation && a.is_approved && a.year() == year
        })
        .map(|a| a.duration_days)
        .fold(0, u32::saturating_add)
}

pub fn summarize_recognitions(recognitions: &[Recognition]) -> RecognitionSummary {
    RecognitionSummary {
        total: recognitions.len(),
        approved: recognitions.iter().filter(|r| r.is_approved).count(),
        total_reduction_days: recognitions
            .iter()
            .map(Recognition::effective_reduction)
            .fold(0, u32::saturating_add),
    }
}
