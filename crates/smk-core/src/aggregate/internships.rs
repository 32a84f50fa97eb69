use std::collections::BTreeMap;

use smk_model::{Internship, InternshipSummary, ModuleId, ModuleInternships};

pub fn summarize_internships(internships: &[Internship]) -> InternshipSummary {
    let mut summary = InternshipSummary {
        total: internships.len(),
        ..InternshipSummary::default()
    };
    let mut by_module: BTreeMap<Option<ModuleId>, ModuleInternships> = BTreeMap::new();

    for internship in internships {
        let days = internship.effective_days();
        summary.total_days = summary.total_days.saturating_add(days);
        if internship.is_completed {
            summary.completed += 1;
            summary.completed_days = summary.completed_days.saturating_add(days);
        }
        if internship.is_approved {
            summary.approved += 1;
        }

        let group = by_module
            .entry(internship.module_id)
            .or_insert_with(|| ModuleInternships {
                module_id: internship.module_id,
                total: 0,
                completed: 0,
                days: 0,
            });
        group.total += 1;
        group.days = group.days.saturating_add(days);
        if internship.is_completed {
            group.completed += 1;
        }
    }

    summary.pending = summary.total - summary.completed;
    summary.by_module = by_module.into_values().collect();
    summary
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use smk_model::{InternshipId, SpecializationId};

    use super::*;

    fn make_internship(id: u64, module: Option<u64>, days: u32, completed: bool) -> Internship {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Internship {
            id: InternshipId(id),
            specialization_id: SpecializationId(1),
            module_id: module.map(ModuleId),
            name: format!("Staż {id}"),
            institution_name: String::new(),
            department_name: String::new(),
            supervisor_name: None,
            start_date: Some(start),
            end_date: None,
            days_count: Some(days),
            is_completed: completed,
            is_approved: false,
        }
    }

    #[test]
    fn empty_input_is_all_zero() {
        let summary = summarize_internships(&[]);
        assert_eq!(summary, InternshipSummary::default());
    }

    #[test]
    fn groups_by_module_with_unassigned_first() {
        let summary = summarize_internships(&[
            make_internship(1, Some(2), 30, true),
            make_internship(2, None, 10, false),
            make_internship(3, Some(2), 20, false),
        ]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.total_days, 60);
        assert_eq!(summary.completed_days, 30);
        assert_eq!(summary.by_module.len(), 2);
        assert_eq!(summary.by_module[0].module_id, None);
        assert_eq!(summary.by_module[1].total, 2);
        assert_eq!(summary.by_module[1].days, 50);
    }

    #[test]
    fn absurd_day_counts_saturate() {
        let summary = summarize_internships(&[
            make_internship(1, Some(1), u32::MAX, true),
            make_internship(2, Some(1), 1, true),
        ]);
        assert_eq!(summary.total_days, u32::MAX);
        assert_eq!(summary.completed_days, u32::MAX);
        assert_eq!(summary.by_module[0].days, u32::MAX);
    }
}
