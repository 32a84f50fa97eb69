//! Module and overall progress.
//!
//! Four axes are tracked per module: courses, internships, operator
//! performances and assistant performances. Each axis ratio is clamped to
//! `[0, 1]` and is 0 when nothing is required. Module progress is the plain
//! mean of the four ratios.

use smk_model::{AxisProgress, Module, ModuleProgressDto, ProcedureProgressDto};
use smk_standards::ModuleRequirement;

use crate::aggregate::procedures::capped_role_totals;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn ratio(completed: u32, required: u32) -> f64 {
    if required == 0 {
        return 0.0;
    }
    (f64::from(completed) / f64::from(required)).clamp(0.0, 1.0)
}

/// Clamped percentage in `[0, 100]`, two decimals.
pub fn percentage(completed: f64, required: f64) -> f64 {
    if required <= 0.0 || !completed.is_finite() || !required.is_finite() {
        return 0.0;
    }
    round2((completed / required * 100.0).clamp(0.0, 100.0))
}

pub fn axis(completed: u32, required: u32) -> AxisProgress {
    AxisProgress {
        completed,
        required,
        ratio: ratio(completed, required),
    }
}

/// Completed work inside one module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleTotals {
    pub completed_courses: u32,
    pub completed_internships: u32,
    pub procedures: Vec<ProcedureProgressDto>,
}

/// Progress of a single module against its requirement.
///
/// A module whose type has no catalog requirement has nothing required and
/// reports zero progress.
pub fn calculate_module_progress(
    module: &Module,
    requirement: Option<&ModuleRequirement>,
    totals: &ModuleTotals,
) -> ModuleProgressDto {
    let (required_courses, required_internships) = requirement
        .map(|r| (r.required_courses, r.required_internships))
        .unwrap_or((0, 0));
    let ((operator, operator_required), (assistant, assistant_required)) =
        capped_role_totals(&totals.procedures);

    let courses = axis(totals.completed_courses, required_courses);
    let internships = axis(totals.completed_internships, required_internships);
    let procedures_operator = axis(operator, operator_required);
    let procedures_assistant = axis(assistant, assistant_required);

    let completed_requirements = totals.procedures.iter().filter(|p| p.is_completed).count();
    let procedures_percentage = if totals.procedures.is_empty() {
        0.0
    } else {
        round2(completed_requirements as f64 / totals.procedures.len() as f64 * 100.0)
    };

    let progress = (courses.ratio
        + internships.ratio
        + procedures_operator.ratio
        + procedures_assistant.ratio)
        / 4.0;

    ModuleProgressDto {
        module_id: module.id,
        module_name: module.name.clone(),
        module_type: module.module_type,
        courses,
        internships,
        procedures_operator,
        procedures_assistant,
        procedures_percentage,
        progress,
        percentage: round2(progress * 100.0),
    }
}

/// Mean module progress as a percentage; 0 without modules.
pub fn calculate_overall_progress(modules: &[ModuleProgressDto]) -> f64 {
    if modules.is_empty() {
        return 0.0;
    }
    let mean = modules.iter().map(|m| m.progress).sum::<f64>() / modules.len() as f64;
    round2(mean * 100.0)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use smk_model::{ModuleId, ModuleType, SpecializationId};

    use super::*;

    fn make_module() -> Module {
        Module {
            id: ModuleId(1),
            specialization_id: SpecializationId(1),
            module_type: ModuleType::Basic,
            name: "Moduł podstawowy".to_string(),
            sequence: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        }
    }

    fn make_requirement() -> ModuleRequirement {
        ModuleRequirement {
            module_type: ModuleType::Basic,
            name: "Moduł podstawowy".to_string(),
            duration_months: 24,
            required_internships: 4,
            required_internship_days: 0,
            required_courses: 2,
            procedures: Vec::new(),
        }
    }

    #[test]
    fn zero_required_is_zero_not_nan() {
        assert_eq!(ratio(5, 0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(ratio(7, 2), 1.0);
    }

    #[test]
    fn module_progress_is_mean_of_axes() {
        let totals = ModuleTotals {
            completed_courses: 1,
            completed_internships: 4,
            procedures: Vec::new(),
        };
        let progress = calculate_module_progress(&make_module(), Some(&make_requirement()), &totals);
        // courses 0.5, internships 1.0, procedures 0 and 0
        assert!((progress.progress - 0.375).abs() < 1e-9);
        assert_eq!(progress.percentage, 37.5);
        assert_eq!(progress.procedures_percentage, 0.0);
    }

    #[test]
    fn module_without_requirement_has_no_progress() {
        let totals = ModuleTotals {
            completed_courses: 3,
            completed_internships: 3,
            procedures: Vec::new(),
        };
        let progress = calculate_module_progress(&make_module(), None, &totals);
        assert_eq!(progress.progress, 0.0);
    }

    #[test]
    fn overall_is_zero_without_modules() {
        assert_eq!(calculate_overall_progress(&[]), 0.0);
    }
}
