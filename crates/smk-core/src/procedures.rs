//! Module and user procedure views.

use smk_model::{
    Module, ModuleId, ModuleProceduresDto, Result, UserProcedureSummary, UserProceduresDto,
};

use crate::aggregate::procedures::summarize_module_procedures;
use crate::context::ProgressContext;
use crate::progress::round2;

fn module_view(ctx: &ProgressContext<'_>, module: &Module) -> ModuleProceduresDto {
    let procedures = ctx.module_procedure_progress(module);
    let summary = summarize_module_procedures(&procedures, ctx.realizations(), module.id);
    ModuleProceduresDto {
        module_id: module.id,
        module_name: module.name.clone(),
        module_type: module.module_type,
        smk_version: ctx.smk_version(),
        procedures,
        summary,
    }
}

/// Procedure progress of one module. Unknown module ids are not found.
pub fn build_module_procedures(
    ctx: &ProgressContext<'_>,
    module_id: ModuleId,
) -> Result<ModuleProceduresDto> {
    let module = ctx.bundle.require_module(module_id)?;
    Ok(module_view(ctx, module))
}

pub fn build_user_procedures(ctx: &ProgressContext<'_>) -> UserProceduresDto {
    let modules: Vec<ModuleProceduresDto> = ctx
        .ordered_modules()
        .into_iter()
        .map(|module| module_view(ctx, module))
        .collect();

    let mut summary = UserProcedureSummary {
        total_modules: modules.len(),
        ..UserProcedureSummary::default()
    };
    for module in &modules {
        summary.total_procedures += module.summary.total_requirements;
        summary.completed_procedures += module.summary.completed_requirements;
        summary.total_realizations_as_operator = summary
            .total_realizations_as_operator
            .saturating_add(module.summary.total_realizations_as_operator);
        summary.total_realizations_as_assistant = summary
            .total_realizations_as_assistant
            .saturating_add(module.summary.total_realizations_as_assistant);
        summary.last_realization_date = summary
            .last_realization_date
            .max(module.summary.last_realization_date);
    }
    if summary.total_procedures > 0 {
        summary.overall_completion_percentage = round2(
            summary.completed_procedures as f64 / summary.total_procedures as f64 * 100.0,
        );
    }

    let specialization = ctx.specialization();
    UserProceduresDto {
        user_id: specialization.user_id,
        specialization_id: specialization.id,
        modules,
        summary,
    }
}
