//! Date projections: expected end date, current module, timeline entries.

use chrono::{Datelike, NaiveDate};

use smk_model::{
    Absence, Course, ImportantDateDto, ImportantDateKind, Internship, Module, Recognition,
    Specialization, add_days, sub_days,
};

use crate::aggregate::absences::self_education_leave_days;

/// The self-education reminder is shown from this many days before year end.
const SELF_EDUCATION_REMINDER_DAYS: u64 = 14;

/// Base end date pushed out by approved length-affecting absences and pulled
/// in by approved recognitions.
///
/// Derived on every call; never stored.
pub fn expected_end_date(
    specialization: &Specialization,
    absences: &[Absence],
    recognitions: &[Recognition],
) -> NaiveDate {
    let extension: i64 = absences
        .iter()
        .map(|a| i64::from(a.affecting_days()))
        .sum();
    let reduction: i64 = recognitions
        .iter()
        .map(|r| i64::from(r.effective_reduction()))
        .sum();
    shift_date(specialization.base_end_date(), extension - reduction)
}

fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        add_days(date, days.unsigned_abs())
    } else {
        sub_days(date, days.unsigned_abs())
    }
}

/// Module running today; else the latest one already started; else the first.
pub fn current_module<'a>(modules: &[&'a Module], today: NaiveDate) -> Option<&'a Module> {
    if let Some(module) = modules.iter().find(|m| m.contains(today)) {
        return Some(*module);
    }
    modules
        .iter()
        .filter(|m| m.start_date <= today)
        .max_by_key(|m| m.start_date)
        .or_else(|| modules.first())
        .copied()
}

/// Self-education days still unused in `year`.
pub fn remaining_self_education_days(
    specialization: &Specialization,
    absences: &[Absence],
    year: i32,
) -> u32 {
    specialization
        .self_education_days_per_year
        .saturating_sub(self_education_leave_days(absences, year))
}

fn entry(
    date: NaiveDate,
    kind: ImportantDateKind,
    title: impl Into<String>,
    description: impl Into<String>,
    related_id: Option<u64>,
    today: NaiveDate,
) -> ImportantDateDto {
    ImportantDateDto {
        date,
        kind,
        title: title.into(),
        description: description.into(),
        is_past: date < today,
        days_remaining: (date - today).num_days().max(0),
        related_id,
    }
}

/// Inputs for [`important_dates`].
#[derive(Debug, Clone, Copy)]
pub struct TimelineInputs<'a> {
    pub specialization: &'a Specialization,
    pub courses: &'a [Course],
    pub internships: &'a [Internship],
    pub absences: &'a [Absence],
    pub recognitions: &'a [Recognition],
}

/// Timeline entries sorted by date, oldest first.
pub fn important_dates(inputs: TimelineInputs<'_>, today: NaiveDate) -> Vec<ImportantDateDto> {
    let specialization = inputs.specialization;
    let mut dates = Vec::new();

    dates.push(entry(
        specialization.start_date,
        ImportantDateKind::Start,
        "Specialization start",
        format!("Start of {}", specialization.name),
        None,
        today,
    ));

    let basic_end = specialization.basic_module_end_date();
    dates.push(entry(
        basic_end,
        ImportantDateKind::ModuleEnd,
        "Basic module end",
        format!(
            "Projected after {} weeks",
            specialization.basic_module_duration_weeks
        ),
        None,
        today,
    ));
    dates.push(entry(
        add_days(
            basic_end,
            u64::from(specialization.specialistic_module_duration_weeks) * 7,
        ),
        ImportantDateKind::ModuleEnd,
        "Specialistic module end",
        format!(
            "Projected after {} weeks",
            specialization.specialistic_module_duration_weeks
        ),
        None,
        today,
    ));

    let expected_end = expected_end_date(specialization, inputs.absences, inputs.recognitions);
    dates.push(entry(
        expected_end,
        ImportantDateKind::End,
        "Expected specialization end",
        "Includes approved absences and recognitions",
        None,
        today,
    ));

    for course in inputs.courses.iter().filter(|c| !c.is_completed) {
        if let Some(date) = course.scheduled_date {
            dates.push(entry(
                date,
                ImportantDateKind::Course,
                course.name.clone(),
                format!("Scheduled {} course", course.course_type),
                Some(course.id.value()),
                today,
            ));
        }
    }

    for internship in inputs.internships.iter().filter(|i| !i.is_completed) {
        if let Some(date) = internship.start_date {
            let description = if internship.institution_name.is_empty() {
                "Internship start".to_string()
            } else {
                format!("Internship at {}", internship.institution_name)
            };
            dates.push(entry(
                date,
                ImportantDateKind::Internship,
                internship.name.clone(),
                description,
                Some(internship.id.value()),
                today,
            ));
        }
    }

    let remaining = remaining_self_education_days(specialization, inputs.absences, today.year());
    if remaining > 0
        && let Some(year_end) = NaiveDate::from_ymd_opt(today.year(), 12, 31)
    {
        let anchor = today.max(sub_days(year_end, SELF_EDUCATION_REMINDER_DAYS));
        let mut reminder = entry(
            anchor,
            ImportantDateKind::Warning,
            "Unused self-education days",
            format!("{remaining} self-education day(s) left this year"),
            None,
            today,
        );
        reminder.days_remaining = (year_end - today).num_days().max(0);
        dates.push(reminder);
    }

    dates.sort_by_key(|d| d.date);
    dates
}

#[cfg(test)]
mod tests {
    use smk_model::{AbsenceId, AbsenceType, ModuleId, ModuleType, SmkVersion, SpecializationId, UserId};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_specialization() -> Specialization {
        Specialization {
            id: SpecializationId(1),
            user_id: UserId(1),
            name: "Kardiologia".to_string(),
            program_code: "KARD".to_string(),
            smk_version: SmkVersion::New,
            start_date: date(2024, 1, 1),
            planned_end_date: None,
            duration_years: 2,
            base_duration_weeks: 104,
            basic_module_duration_weeks: 52,
            specialistic_module_duration_weeks: 52,
            vacation_days_per_year: 26,
            self_education_days_per_year: 6,
            statutory_holidays_per_year: 13,
            required_duty_hours_per_week: 10.0,
            required_publications: 0,
            required_conferences: 0,
        }
    }

    fn make_module(id: u64, start: NaiveDate, end: NaiveDate) -> Module {
        Module {
            id: ModuleId(id),
            specialization_id: SpecializationId(1),
            module_type: ModuleType::Basic,
            name: format!("Moduł {id}"),
            sequence: u32::try_from(id).unwrap(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn current_module_prefers_containing_range() {
        let first = make_module(1, date(2024, 1, 1), date(2024, 12, 31));
        let second = make_module(2, date(2025, 2, 1), date(2025, 12, 31));
        let modules = [&first, &second];
        assert_eq!(current_module(&modules, date(2024, 6, 1)).map(|m| m.id), Some(ModuleId(1)));
        // gap between modules: latest started
        assert_eq!(current_module(&modules, date(2025, 1, 15)).map(|m| m.id), Some(ModuleId(1)));
        assert_eq!(current_module(&modules, date(2026, 1, 15)).map(|m| m.id), Some(ModuleId(2)));
        // before anything started: first
        assert_eq!(current_module(&modules, date(2023, 1, 1)).map(|m| m.id), Some(ModuleId(1)));
        assert!(current_module(&[], date(2024, 1, 1)).is_none());
    }

    #[test]
    fn negative_adjustment_moves_end_date_back() {
        assert_eq!(shift_date(date(2024, 1, 10), -9), date(2024, 1, 1));
        assert_eq!(shift_date(date(2024, 1, 1), 0), date(2024, 1, 1));
    }

    #[test]
    fn self_education_reminder_anchors_near_year_end() {
        let specialization = make_specialization();
        let inputs = TimelineInputs {
            specialization: &specialization,
            courses: &[],
            internships: &[],
            absences: &[],
            recognitions: &[],
        };
        let dates = important_dates(inputs, date(2024, 6, 1));
        let reminder = dates
            .iter()
            .find(|d| d.kind == ImportantDateKind::Warning)
            .expect("reminder");
        assert_eq!(reminder.date, date(2024, 12, 17));
        assert_eq!(reminder.days_remaining, 213);

        // after the reminder window opens the anchor follows today
        let late = important_dates(inputs, date(2024, 12, 20));
        let reminder = late
            .iter()
            .find(|d| d.kind == ImportantDateKind::Warning)
            .expect("reminder");
        assert_eq!(reminder.date, date(2024, 12, 20));
        assert!(!reminder.is_past);
        assert_eq!(reminder.days_remaining, 11);
    }

    #[test]
    fn reminder_disappears_when_allowance_is_used() {
        let specialization = make_specialization();
        let leave = Absence {
            id: AbsenceId(1),
            specialization_id: SpecializationId(1),
            absence_type: AbsenceType::SelfEducation,
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 6),
            duration_days: 6,
            affects_specialization_length: false,
            is_approved: true,
        };
        let absences = [leave];
        let inputs = TimelineInputs {
            specialization: &specialization,
            courses: &[],
            internships: &[],
            absences: &absences,
            recognitions: &[],
        };
        let dates = important_dates(inputs, date(2024, 6, 1));
        assert!(dates.iter().all(|d| d.kind != ImportantDateKind::Warning));
        assert_eq!(dates.len(), 4);
        assert!(dates.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(dates[0].is_past);
        assert_eq!(dates[0].days_remaining, 0);
    }
}
