//! Pre-export summary.

use tracing::debug;

use smk_core::ProgressContext;
use smk_core::aggregate::summarize_self_education;
use smk_model::{ExportStatus, SmkExportPreviewDto};

use crate::validator::validate;

/// Counts-only preview of what an export would contain, plus the warnings
/// the user should see first. Export is allowed only when validation
/// reports no errors.
pub fn preview_export(ctx: &ProgressContext<'_>) -> SmkExportPreviewDto {
    let bundle = ctx.bundle;
    let specialization = ctx.specialization();

    let self_education =
        summarize_self_education(&bundle.self_education, &bundle.additional_self_education_days);
    let self_education_days = self_education.combined_days().max(0.0).round() as u32;
    let procedure_count: u32 = ctx.realizations().iter().map(|r| r.count).sum();

    let mut warnings = Vec::new();
    if bundle.internships.is_empty() {
        warnings.push("No internships to export".to_string());
    }
    if bundle.medical_shifts.is_empty() {
        warnings.push("No medical shifts to export".to_string());
    }
    if bundle.procedures.is_empty() {
        warnings.push("No procedures to export".to_string());
    }
    if bundle.courses.is_empty() {
        warnings.push("No courses to export".to_string());
    }
    let minimum = ctx.rules.export_self_education_days_minimum;
    if self_education_days < minimum {
        warnings.push(format!(
            "Self-education days {self_education_days} below the export minimum of {minimum}"
        ));
    }

    let validation = validate(ctx);
    debug!(
        specialization_id = %specialization.id,
        warnings = warnings.len(),
        errors = validation.total_errors,
        "export preview"
    );

    SmkExportPreviewDto {
        specialization_id: specialization.id,
        specialization_name: specialization.name.clone(),
        smk_version: specialization.smk_version,
        internship_count: bundle.internships.len(),
        course_count: bundle.courses.len(),
        medical_shift_count: bundle.medical_shifts.len(),
        procedure_count,
        self_education_days,
        status: if warnings.is_empty() {
            ExportStatus::Ready
        } else {
            ExportStatus::HasWarnings
        },
        warnings,
        can_export: validation.is_valid,
    }
}
