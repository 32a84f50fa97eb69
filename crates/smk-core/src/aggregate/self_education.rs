use std::collections::BTreeMap;

use smk_model::{
    AdditionalSelfEducationDays, ModuleId, SelfEducation, SelfEducationSummary, YearDays,
};

/// Totals over self-education records. Only approved additional days count.
pub fn summarize_self_education(
    records: &[SelfEducation],
    additional: &[AdditionalSelfEducationDays],
) -> SelfEducationSummary {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for record in records {
        *by_year.entry(record.year).or_insert(0.0) += record.days();
    }
    SelfEducationSummary {
        records: records.len(),
        completed: records.iter().filter(|r| r.is_completed).count(),
        total_days: records.iter().map(SelfEducation::days).sum(),
        additional_days: additional
            .iter()
            .filter(|extra| extra.is_approved)
            .map(|extra| extra.number_of_days)
            .sum(),
        quality_score_total: records.iter().map(SelfEducation::quality_score).sum(),
        by_year: by_year
            .into_iter()
            .rev()
            .map(|(year, days)| YearDays { year, days })
            .collect(),
    }
}

/// Days used per module, records without a module under `None`.
pub fn self_education_days_by_module(records: &[SelfEducation]) -> BTreeMap<Option<ModuleId>, f64> {
    let mut days: BTreeMap<Option<ModuleId>, f64> = BTreeMap::new();
    for record in records {
        *days.entry(record.module_id).or_insert(0.0) += record.days();
    }
    days
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use smk_model::{SelfEducationId, SelfEducationType, SpecializationId};

    use super::*;

    fn make_record(year: i32, days: Option<u32>, hours: Option<u32>) -> SelfEducation {
        SelfEducation {
            id: SelfEducationId(1),
            specialization_id: SpecializationId(1),
            module_id: Some(ModuleId(1)),
            education_type: SelfEducationType::Workshop,
            title: "Warsztaty".to_string(),
            year,
            duration_days: days,
            duration_hours: hours,
            is_completed: true,
            has_certificate: false,
            recognized_provider: false,
            doi: None,
            isbn: None,
        }
    }

    #[test]
    fn combines_days_hours_and_approved_extras() {
        let extra = |approved| AdditionalSelfEducationDays {
            module_id: ModuleId(1),
            internship_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            number_of_days: 2,
            event_name: "Kongres".to_string(),
            is_approved: approved,
        };
        let summary = summarize_self_education(
            &[make_record(2023, Some(2), None), make_record(2024, None, Some(12))],
            &[extra(true), extra(false)],
        );
        assert!((summary.total_days - 3.5).abs() < 1e-9);
        assert_eq!(summary.additional_days, 2);
        assert!((summary.combined_days() - 5.5).abs() < 1e-9);
        assert_eq!(summary.by_year[0].year, 2024);
    }

    #[test]
    fn groups_days_by_module() {
        let mut unassigned = make_record(2024, Some(1), None);
        unassigned.module_id = None;
        let days = self_education_days_by_module(&[make_record(2024, Some(3), None), unassigned]);
        assert_eq!(days.get(&Some(ModuleId(1))).copied(), Some(3.0));
        assert_eq!(days.get(&None).copied(), Some(1.0));
    }
}
