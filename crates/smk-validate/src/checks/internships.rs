use smk_core::ProgressContext;
use smk_model::{Internship, Module};

use crate::issue::Issue;

/// Both ends of the internship lie inside the module's active range.
pub fn internship_within_module(internship: &Internship, module: &Module) -> bool {
    match (internship.start_date, internship.end_date) {
        (Some(start), Some(end)) => module.contains(start) && module.contains(end),
        (Some(start), None) => module.contains(start),
        (None, Some(end)) => module.contains(end),
        (None, None) => true,
    }
}

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let bundle = ctx.bundle;
    let mut issues = Vec::new();

    if bundle.internships.is_empty() {
        issues.push(Issue::NoInternships);
        return issues;
    }

    for internship in &bundle.internships {
        let name = internship.name.clone();

        if let (Some(start), Some(end)) = (internship.start_date, internship.end_date)
            && end < start
        {
            issues.push(Issue::InternshipEndBeforeStart {
                internship: internship.id,
                module_id: internship.module_id,
                name: name.clone(),
            });
        }

        if let Some(module_id) = internship.module_id {
            match bundle.module(module_id) {
                Some(module) if !internship_within_module(internship, module) => {
                    issues.push(Issue::InternshipOutsideModule {
                        internship: internship.id,
                        module_id,
                        name: name.clone(),
                    });
                }
                Some(_) => {}
                None => issues.push(Issue::InternshipUnknownModule {
                    internship: internship.id,
                    module_id,
                    name: name.clone(),
                }),
            }
        }

        if let (Some(recorded), Some(span)) = (internship.days_count, internship.span_days())
            && recorded != span
        {
            issues.push(Issue::InternshipDaysMismatch {
                internship: internship.id,
                module_id: internship.module_id,
                recorded,
                span,
            });
        }

        if let Some(end_date) = internship.end_date
            && end_date < ctx.today
            && !internship.is_completed
        {
            issues.push(Issue::InternshipNotCompleted {
                internship: internship.id,
                module_id: internship.module_id,
                name: name.clone(),
                end_date,
            });
        }

        let has_supervisor = internship
            .supervisor_name
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        if !has_supervisor {
            issues.push(Issue::InternshipMissingSupervisor {
                internship: internship.id,
                module_id: internship.module_id,
                name,
            });
        }
    }

    issues
}
