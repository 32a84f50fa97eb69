//! SMK compliance validation.
//!
//! Runs every rule check over a [`smk_core::ProgressContext`] and sorts the
//! resulting [`Issue`]s into a [`smk_model::SmkValidationResultDto`]. Checks
//! never stop at the first problem.

#![deny(unsafe_code)]

pub mod checks;
pub mod export;
pub mod issue;
pub mod validator;

pub use export::preview_export;
pub use issue::{Category, Issue, Severity};
pub use validator::{ValidationRun, ValidationState, build_result, validate};
