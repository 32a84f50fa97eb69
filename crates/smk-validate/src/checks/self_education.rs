//! Self-education allowance.
//!
//! The minimum is the yearly allowance times the elapsed training years.
//! Per-year pooling caps each calendar year; per-module pooling gives every
//! module its own pool, and unused days carry forward into later modules only.

use std::collections::BTreeMap;

use smk_core::ProgressContext;
use smk_core::aggregate::{self_education_days_by_module, summarize_self_education};
use smk_model::ModuleId;
use smk_standards::SelfEducationPooling;

use crate::issue::Issue;

/// Training years started by `today`, at least one and at most the programme length.
fn elapsed_training_years(ctx: &ProgressContext<'_>) -> u32 {
    let specialization = ctx.specialization();
    let days = (ctx.today - specialization.start_date).num_days().max(0);
    let years = u32::try_from(days / 365).unwrap_or(u32::MAX).saturating_add(1);
    years.min(specialization.duration_years.max(1))
}

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let bundle = ctx.bundle;
    let allowance = ctx.specialization().self_education_days_per_year;
    let mut issues = Vec::new();

    let summary =
        summarize_self_education(&bundle.self_education, &bundle.additional_self_education_days);
    let required = f64::from(allowance) * f64::from(elapsed_training_years(ctx));
    if summary.combined_days() < required {
        issues.push(Issue::SelfEducationBelowMinimum {
            days: summary.combined_days(),
            required,
        });
    }

    match ctx.rules.self_education_pooling {
        SelfEducationPooling::PerYear => {
            let maximum = ctx.rules.self_education_days_per_year_maximum;
            let mut by_year: BTreeMap<i32, f64> =
                summary.by_year.iter().map(|y| (y.year, y.days)).collect();
            for extra in bundle
                .additional_self_education_days
                .iter()
                .filter(|extra| extra.is_approved)
            {
                *by_year.entry(extra.year()).or_insert(0.0) += f64::from(extra.number_of_days);
            }
            for (year, days) in by_year {
                if days > f64::from(maximum) {
                    issues.push(Issue::SelfEducationYearExceeded {
                        year,
                        days,
                        maximum,
                    });
                }
            }
        }
        SelfEducationPooling::PerModule => {
            let mut used: BTreeMap<Option<ModuleId>, f64> =
                self_education_days_by_module(&bundle.self_education);
            for extra in bundle
                .additional_self_education_days
                .iter()
                .filter(|extra| extra.is_approved)
            {
                *used.entry(Some(extra.module_id)).or_insert(0.0) +=
                    f64::from(extra.number_of_days);
            }

            let mut carried = 0.0;
            for module in ctx.ordered_modules() {
                let years = (module.duration_weeks() / 52).max(1);
                let available = f64::from(allowance) * f64::from(years) + carried;
                let module_used = used.get(&Some(module.id)).copied().unwrap_or(0.0);
                if module_used > available {
                    issues.push(Issue::SelfEducationPoolExceeded {
                        module_id: module.id,
                        used: module_used,
                        available,
                    });
                }
                carried = (available - module_used).max(0.0);
            }
        }
    }

    issues
}
