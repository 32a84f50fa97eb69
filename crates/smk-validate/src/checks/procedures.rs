use smk_core::ProgressContext;
use smk_model::{ProcedureRecord, ProcedureRole};

use crate::issue::Issue;

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let bundle = ctx.bundle;
    let mut issues = Vec::new();

    if bundle.procedures.is_empty() {
        issues.push(Issue::NoProcedures);
    }

    let version = ctx.smk_version();
    for record in &bundle.procedures {
        if record.smk_version() != version {
            issues.push(Issue::ProcedureDialectMismatch {
                procedure: record.id(),
                record_version: record.smk_version(),
                specialization_version: version,
            });
        }
        match record {
            ProcedureRecord::Old(old) => {
                if ProcedureRole::from_execution_code(&old.execution_code).is_none() {
                    issues.push(Issue::InvalidExecutionCode {
                        procedure: old.id,
                        execution_code: old.execution_code.clone(),
                    });
                }
            }
            ProcedureRecord::New(new) => {
                let linked = new
                    .requirement_code
                    .as_deref()
                    .is_some_and(|code| !code.trim().is_empty());
                if !linked {
                    issues.push(Issue::MissingRequirementCode { procedure: new.id });
                }
            }
        }
    }

    for module in ctx.ordered_modules() {
        for progress in ctx.module_procedure_progress(module) {
            if !progress.is_completed {
                issues.push(Issue::RequirementIncomplete {
                    module_id: module.id,
                    code: progress.requirement_code.clone(),
                    completed_as_operator: progress.completed_as_operator,
                    required_as_operator: progress.required_as_operator,
                    completed_as_assistant: progress.completed_as_assistant,
                    required_as_assistant: progress.required_as_assistant,
                });
            }
            for (role, exceeds, completed, required) in [
                (
                    ProcedureRole::Operator,
                    progress.exceeds_operator,
                    progress.completed_as_operator,
                    progress.required_as_operator,
                ),
                (
                    ProcedureRole::Assistant,
                    progress.exceeds_assistant,
                    progress.completed_as_assistant,
                    progress.required_as_assistant,
                ),
            ] {
                if exceeds {
                    issues.push(Issue::RequirementExceeded {
                        module_id: module.id,
                        code: progress.requirement_code.clone(),
                        role,
                        completed,
                        required,
                    });
                }
            }
        }
    }

    issues
}
