use chrono::Datelike;

use smk_core::ProgressContext;
use smk_core::aggregate::{
    monthly_breakdown, months_below_minimum, weekly_average, weekly_breakdown, weeks_above_maximum,
};
use smk_model::{Internship, MedicalShift};

use crate::issue::Issue;

/// `None` when the internship has an open date range.
pub fn shift_within_internship(shift: &MedicalShift, internship: &Internship) -> Option<bool> {
    internship.contains(shift.date)
}

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let bundle = ctx.bundle;
    let mut issues = Vec::new();

    if bundle.medical_shifts.is_empty() {
        // missing internships already covers this
        if !bundle.internships.is_empty() {
            issues.push(Issue::NoShifts);
        }
        return issues;
    }

    for shift in &bundle.medical_shifts {
        if shift.minutes > 59 {
            issues.push(Issue::InvalidShiftMinutes {
                shift: shift.id,
                minutes: shift.minutes,
            });
        }
        match bundle.internship(shift.internship_id) {
            Some(internship) => {
                if shift_within_internship(shift, internship) == Some(false) {
                    issues.push(Issue::ShiftOutsideInternship {
                        shift: shift.id,
                        internship: internship.id,
                        date: shift.date,
                    });
                }
            }
            None => issues.push(Issue::ShiftUnknownInternship {
                shift: shift.id,
                internship: shift.internship_id,
            }),
        }
        if shift.location.trim().is_empty() {
            issues.push(Issue::ShiftMissingLocation { shift: shift.id });
        }
    }

    let specialization = ctx.specialization();
    let target = if specialization.required_duty_hours_per_week > 0.0 {
        specialization.required_duty_hours_per_week
    } else {
        ctx.rules.weekly_average_target_hours()
    };
    let (low, high) = ctx.rules.weekly_average_band(target);
    let average = weekly_average(&bundle.medical_shifts, specialization.base_duration_weeks);
    if average < low || average > high {
        issues.push(Issue::WeeklyAverageOutOfRange { average, low, high });
    }

    // the running month is not judged yet
    let current_month = format!("{:04}-{:02}", ctx.today.year(), ctx.today.month());
    let minimum = f64::from(ctx.requirements.monthly_hours_minimum);
    let short: Vec<String> = months_below_minimum(&monthly_breakdown(&bundle.medical_shifts), minimum)
        .into_iter()
        .filter(|period| period.period < current_month)
        .map(|period| period.period)
        .collect();
    if !short.is_empty() {
        issues.push(Issue::MonthsBelowMinimum {
            months: short,
            minimum,
        });
    }

    let maximum = f64::from(ctx.requirements.weekly_hours.maximum);
    for period in weeks_above_maximum(&weekly_breakdown(&bundle.medical_shifts), maximum)
        .into_iter()
        .rev()
    {
        issues.push(Issue::WeeklyHoursExceeded {
            week: period.period,
            hours: period.hours,
            maximum,
        });
    }

    issues
}
