use smk_core::ProgressContext;
use smk_model::add_days;

use crate::issue::Issue;

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let specialization = ctx.specialization();
    let mut issues = Vec::new();

    if specialization.name.trim().is_empty() {
        issues.push(Issue::MissingSpecializationName);
    }
    if specialization.program_code.trim().is_empty() {
        issues.push(Issue::MissingProgramCode);
    }

    let latest_allowed = add_days(ctx.today, u64::from(ctx.rules.max_start_lead_days));
    if specialization.start_date > latest_allowed {
        issues.push(Issue::StartDateTooFarAhead {
            start_date: specialization.start_date,
            latest_allowed,
        });
    }

    if !specialization.durations_consistent() {
        issues.push(Issue::ModuleDurationMismatch {
            basic_weeks: specialization.basic_module_duration_weeks,
            specialistic_weeks: specialization.specialistic_module_duration_weeks,
            base_weeks: specialization.base_duration_weeks,
        });
    }

    issues
}
