//! Duty shift hours.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use smk_model::{MedicalShift, PeriodHours, ShiftSummary, TrainingYearHours};

pub fn total_hours(shifts: &[MedicalShift]) -> f64 {
    shifts.iter().map(MedicalShift::total_hours).sum()
}

fn date_range(shifts: &[MedicalShift]) -> Option<(NaiveDate, NaiveDate)> {
    let first = shifts.iter().map(|s| s.date).min()?;
    let last = shifts.iter().map(|s| s.date).max()?;
    Some((first, last))
}

/// Whole weeks between the first and last shift, at least one.
///
/// Zero only when there are no shifts at all.
pub fn span_weeks(shifts: &[MedicalShift]) -> u32 {
    let Some((first, last)) = date_range(shifts) else {
        return 0;
    };
    let weeks = (last - first).num_days() / 7;
    u32::try_from(weeks).unwrap_or(u32::MAX).max(1)
}

/// Average hours per week over `min(requested_weeks, span_weeks)` weeks.
pub fn weekly_average(shifts: &[MedicalShift], requested_weeks: u32) -> f64 {
    if shifts.is_empty() {
        return 0.0;
    }
    let weeks = requested_weeks.min(span_weeks(shifts)).max(1);
    total_hours(shifts) / f64::from(weeks)
}

fn collect_periods<K: Ord>(
    shifts: &[MedicalShift],
    key: impl Fn(NaiveDate) -> K,
    label: impl Fn(&K) -> String,
) -> Vec<PeriodHours> {
    let mut periods: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for shift in shifts {
        let entry = periods.entry(key(shift.date)).or_insert((0.0, 0));
        entry.0 += shift.total_hours();
        entry.1 += 1;
    }
    periods
        .iter()
        .rev()
        .map(|(period, (hours, count))| PeriodHours {
            period: label(period),
            hours: *hours,
            shifts: *count,
        })
        .collect()
}

/// Hours per `YYYY-MM`, newest month first.
pub fn monthly_breakdown(shifts: &[MedicalShift]) -> Vec<PeriodHours> {
    collect_periods(
        shifts,
        |date| (date.year(), date.month()),
        |(year, month)| format!("{year:04}-{month:02}"),
    )
}

/// Hours per ISO week (`YYYY-Www`), newest week first.
pub fn weekly_breakdown(shifts: &[MedicalShift]) -> Vec<PeriodHours> {
    collect_periods(
        shifts,
        |date| {
            let week = date.iso_week();
            (week.year(), week.week())
        },
        |(year, week)| format!("{year:04}-W{week:02}"),
    )
}

/// Weeks whose hours go over `maximum`.
pub fn weeks_above_maximum(weekly: &[PeriodHours], maximum: f64) -> Vec<PeriodHours> {
    weekly
        .iter()
        .filter(|period| period.hours > maximum)
        .cloned()
        .collect()
}

/// Hours per calendar year, newest first.
pub fn yearly_breakdown(shifts: &[MedicalShift]) -> Vec<PeriodHours> {
    collect_periods(shifts, |date| date.year(), |year| format!("{year:04}"))
}

pub fn hours_by_training_year(shifts: &[MedicalShift]) -> Vec<TrainingYearHours> {
    let mut years: BTreeMap<u32, f64> = BTreeMap::new();
    for shift in shifts {
        *years.entry(shift.year).or_insert(0.0) += shift.total_hours();
    }
    years
        .into_iter()
        .rev()
        .map(|(year, hours)| TrainingYearHours { year, hours })
        .collect()
}

/// Months whose hours fall short of `minimum`.
///
/// Months with no shifts at all are not listed; they are not in the breakdown.
pub fn months_below_minimum(monthly: &[PeriodHours], minimum: f64) -> Vec<PeriodHours> {
    monthly
        .iter()
        .filter(|period| period.hours < minimum)
        .cloned()
        .collect()
}

pub fn summarize_shifts(shifts: &[MedicalShift], requested_weeks: u32) -> ShiftSummary {
    let range = date_range(shifts);
    ShiftSummary {
        shift_count: shifts.len(),
        total_hours: total_hours(shifts),
        weekly_average: weekly_average(shifts, requested_weeks),
        first_date: range.map(|(first, _)| first),
        last_date: range.map(|(_, last)| last),
        monthly: monthly_breakdown(shifts),
        yearly: yearly_breakdown(shifts),
        by_training_year: hours_by_training_year(shifts),
    }
}
