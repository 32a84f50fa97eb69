//! Validation run and result assembly.

use std::collections::BTreeMap;

use tracing::{debug, info};

use smk_core::ProgressContext;
use smk_model::{ModuleId, ModuleValidationInfo, SmkValidationResultDto};

use crate::checks;
use crate::issue::{Category, Issue, Severity};

/// Lifecycle of a single validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Pending,
    Validating,
    Valid,
    Invalid,
}

impl ValidationState {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Valid | Self::Invalid)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Validating => "Validating",
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }
}

/// One validation pass over a bundle. Reusable: every call to
/// [`ValidationRun::execute`] starts again from `Pending`.
#[derive(Debug, Clone, Default)]
pub struct ValidationRun {
    state: ValidationState,
    issues: Vec<Issue>,
}

impl ValidationRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Issues found by the last execution, in check order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn execute(&mut self, ctx: &ProgressContext<'_>) -> SmkValidationResultDto {
        self.state = ValidationState::Pending;
        self.issues.clear();

        self.state = ValidationState::Validating;
        debug!(
            specialization_id = %ctx.specialization().id,
            smk_version = %ctx.smk_version(),
            "validating specialization"
        );
        self.issues = checks::run_all(ctx);

        let result = build_result(ctx, &self.issues);
        self.state = if result.is_valid {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        };
        info!(
            specialization_id = %result.specialization_id,
            state = self.state.label(),
            errors = result.total_errors,
            warnings = result.total_warnings,
            "validation finished"
        );
        result
    }
}

/// Validate a bundle and return the structured result.
pub fn validate(ctx: &ProgressContext<'_>) -> SmkValidationResultDto {
    ValidationRun::new().execute(ctx)
}

/// Sort issues into result buckets.
///
/// Issues scoped to a module in the bundle are reported under that module;
/// everything else goes to the category buckets (errors) or the shared
/// warning list.
pub fn build_result(ctx: &ProgressContext<'_>, issues: &[Issue]) -> SmkValidationResultDto {
    let specialization = ctx.specialization();
    let modules = ctx.ordered_modules();

    let mut module_infos: BTreeMap<ModuleId, ModuleValidationInfo> = modules
        .iter()
        .map(|module| {
            (
                module.id,
                ModuleValidationInfo {
                    module_id: module.id,
                    module_name: module.name.clone(),
                    is_valid: true,
                    errors: Vec::new(),
                    warnings: Vec::new(),
                },
            )
        })
        .collect();

    let mut result = SmkValidationResultDto {
        specialization_id: specialization.id,
        smk_version: specialization.smk_version,
        validation_date: ctx.today,
        is_valid: true,
        total_errors: 0,
        total_warnings: 0,
        user_data_errors: Vec::new(),
        medical_shift_errors: Vec::new(),
        procedure_errors: Vec::new(),
        module_errors: Vec::new(),
        warnings: Vec::new(),
        module_validations: Vec::new(),
    };

    for issue in issues {
        let text = issue.to_string();
        let scoped = issue.module_id().and_then(|id| module_infos.get_mut(&id));
        match (scoped, issue.severity()) {
            (Some(info), Severity::Error) => {
                info.is_valid = false;
                info.errors.push(text);
            }
            (Some(info), Severity::Warning) => info.warnings.push(text),
            (None, Severity::Warning) => result.warnings.push(text),
            (None, Severity::Error) => match issue.category() {
                Category::UserData => result.user_data_errors.push(text),
                Category::MedicalShift => result.medical_shift_errors.push(text),
                Category::Procedure => result.procedure_errors.push(text),
                Category::Module => result.module_errors.push(text),
            },
        }
    }

    // Keep module order, not id order.
    result.module_validations = modules
        .iter()
        .filter_map(|module| module_infos.remove(&module.id))
        .collect();

    let bucket_errors = result.user_data_errors.len()
        + result.medical_shift_errors.len()
        + result.procedure_errors.len()
        + result.module_errors.len();
    let module_errors: usize = result.module_validations.iter().map(|m| m.errors.len()).sum();
    let module_warnings: usize = result
        .module_validations
        .iter()
        .map(|m| m.warnings.len())
        .sum();

    result.total_errors = bucket_errors + module_errors;
    result.total_warnings = result.warnings.len() + module_warnings;
    result.is_valid = result.total_errors == 0;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_labels() {
        assert_eq!(ValidationState::default(), ValidationState::Pending);
        assert!(!ValidationState::Validating.is_finished());
        assert!(ValidationState::Invalid.is_finished());
        assert_eq!(ValidationState::Valid.label(), "Valid");
    }
}
