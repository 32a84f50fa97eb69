use tracing::debug;

use smk_model::{
    DashboardCourseProgress, DashboardInternshipProgress, DashboardModuleProgress,
    DashboardOverviewDto, DashboardProcedureProgress, DashboardShiftProgress, Module,
    SpecializationInfoDto,
};

use crate::aggregate::procedures::capped_role_totals;
use crate::aggregate::shifts::total_hours;
use crate::context::ProgressContext;
use crate::dates::{TimelineInputs, current_module, expected_end_date, important_dates};
use crate::progress::{calculate_overall_progress, percentage};

/// Upcoming events shown on the dashboard.
const UPCOMING_EVENT_LIMIT: usize = 5;

pub fn specialization_info(ctx: &ProgressContext<'_>) -> SpecializationInfoDto {
    let specialization = ctx.specialization();
    SpecializationInfoDto {
        id: specialization.id,
        name: specialization.name.clone(),
        program_code: specialization.program_code.clone(),
        smk_version: specialization.smk_version,
        start_date: specialization.start_date,
        planned_end_date: specialization.planned_end_date,
        expected_end_date: expected_end_date(
            specialization,
            &ctx.bundle.absences,
            &ctx.bundle.recognitions,
        ),
        duration_years: specialization.duration_years,
    }
}

pub fn timeline_inputs<'a>(ctx: &ProgressContext<'a>) -> TimelineInputs<'a> {
    TimelineInputs {
        specialization: ctx.specialization(),
        courses: &ctx.bundle.courses,
        internships: &ctx.bundle.internships,
        absences: &ctx.bundle.absences,
        recognitions: &ctx.bundle.recognitions,
    }
}

/// Weekly duty hours the specialization requires; falls back to the
/// dialect's weekly average target when the specialization leaves it unset.
fn weekly_duty_hours(ctx: &ProgressContext<'_>) -> f64 {
    let configured = ctx.specialization().required_duty_hours_per_week;
    if configured > 0.0 {
        configured
    } else {
        ctx.rules.weekly_average_target_hours()
    }
}

/// Per-axis breakdown for one module.
pub fn dashboard_module_progress(
    ctx: &ProgressContext<'_>,
    module: &Module,
) -> DashboardModuleProgress {
    let requirement = ctx.module_requirement(module);
    let internships = ctx.module_internships(module.id);
    let completed: Vec<_> = internships.iter().filter(|i| i.is_completed).collect();
    let completed_internships = u32::try_from(completed.len()).unwrap_or(u32::MAX);
    let completed_days = completed
        .iter()
        .map(|i| i.effective_days())
        .fold(0, u32::saturating_add);
    let (required_internships, required_days, required_courses) = requirement
        .map(|r| (r.required_internships, r.required_internship_days, r.required_courses))
        .unwrap_or((0, 0, 0));

    let completed_courses = ctx
        .module_courses(module.id)
        .iter()
        .filter(|c| c.counts_as_completed())
        .count();
    let completed_courses = u32::try_from(completed_courses).unwrap_or(u32::MAX);

    let procedures = ctx.module_procedure_progress(module);
    let ((operator, operator_required), (assistant, assistant_required)) =
        capped_role_totals(&procedures);

    let completed_hours = total_hours(&ctx.module_shifts(module.id));
    let required_hours = weekly_duty_hours(ctx) * f64::from(module.duration_weeks());

    DashboardModuleProgress {
        internships: DashboardInternshipProgress {
            completed: completed_internships,
            required: required_internships,
            completed_days,
            required_days,
            percentage: percentage(
                f64::from(completed_internships),
                f64::from(required_internships),
            ),
        },
        courses: DashboardCourseProgress {
            completed: completed_courses,
            required: required_courses,
            percentage: percentage(f64::from(completed_courses), f64::from(required_courses)),
        },
        procedures: DashboardProcedureProgress {
            completed_operator: operator,
            required_operator: operator_required,
            completed_assistant: assistant,
            required_assistant: assistant_required,
            percentage: percentage(
                f64::from(operator) + f64::from(assistant),
                f64::from(operator_required) + f64::from(assistant_required),
            ),
        },
        medical_shifts: DashboardShiftProgress {
            completed_hours,
            required_hours,
            percentage: percentage(completed_hours, required_hours),
        },
    }
}

pub fn build_dashboard(ctx: &ProgressContext<'_>) -> DashboardOverviewDto {
    let modules = ctx.ordered_modules();
    debug!(
        specialization_id = %ctx.specialization().id,
        modules = modules.len(),
        internships = ctx.bundle.internships.len(),
        procedures = ctx.realizations().len(),
        "building dashboard"
    );

    let module_progress = ctx.all_module_progress();
    let current = current_module(&modules, ctx.today);
    let upcoming_events = important_dates(timeline_inputs(ctx), ctx.today)
        .into_iter()
        .filter(|event| !event.is_past)
        .take(UPCOMING_EVENT_LIMIT)
        .collect();

    DashboardOverviewDto {
        overall_progress: calculate_overall_progress(&module_progress),
        current_module_id: current.map(|m| m.id),
        current_module_name: current.map(|m| m.name.clone()),
        module_type: current.map(|m| m.module_type),
        specialization: specialization_info(ctx),
        module_progress: current.map(|m| dashboard_module_progress(ctx, m)),
        self_education_count: ctx.bundle.self_education.len(),
        publications_count: ctx.bundle.publications.len(),
        upcoming_events,
    }
}
