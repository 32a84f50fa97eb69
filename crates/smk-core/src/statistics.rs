use tracing::debug;

use smk_model::SpecializationStatisticsDto;

use crate::aggregate::{
    summarize_absences, summarize_courses, summarize_internships, summarize_publications,
    summarize_recognitions, summarize_self_education, summarize_shifts,
};
use crate::context::ProgressContext;
use crate::dashboard::timeline_inputs;
use crate::dates::{expected_end_date, important_dates};
use crate::procedures::build_user_procedures;
use crate::progress::calculate_overall_progress;

/// Full statistics for one specialization.
///
/// The shift weekly average is taken over the programme's base length,
/// limited to the span actually covered by shifts.
pub fn build_statistics(ctx: &ProgressContext<'_>) -> SpecializationStatisticsDto {
    let bundle = ctx.bundle;
    let specialization = ctx.specialization();
    debug!(
        specialization_id = %specialization.id,
        smk_version = %specialization.smk_version,
        shifts = bundle.medical_shifts.len(),
        courses = bundle.courses.len(),
        "building statistics"
    );

    let modules = ctx.all_module_progress();
    SpecializationStatisticsDto {
        specialization_id: specialization.id,
        smk_version: specialization.smk_version,
        requirements_are_default: ctx.requirements.is_default,
        overall_progress: calculate_overall_progress(&modules),
        modules,
        internships: summarize_internships(&bundle.internships),
        medical_shifts: summarize_shifts(
            &bundle.medical_shifts,
            specialization.base_duration_weeks,
        ),
        procedures: build_user_procedures(ctx).summary,
        courses: summarize_courses(&bundle.courses),
        self_education: summarize_self_education(
            &bundle.self_education,
            &bundle.additional_self_education_days,
        ),
        publications: summarize_publications(&bundle.publications, ctx.today),
        absences: summarize_absences(&bundle.absences),
        recognitions: summarize_recognitions(&bundle.recognitions),
        expected_end_date: expected_end_date(specialization, &bundle.absences, &bundle.recognitions),
        important_dates: important_dates(timeline_inputs(ctx), ctx.today),
    }
}
