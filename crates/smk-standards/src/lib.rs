#![deny(unsafe_code)]

//! Versioned SMK requirement catalog.
//!
//! Rule sets, specialization requirements and procedure requirements for
//! both SMK dialects, loaded from the pinned `standards/` tree.

pub mod catalog;
pub mod doctor;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod procedures;
pub mod requirements;
pub mod rules;

pub use crate::catalog::{DialectStandards, RequirementCatalog, VerifySummary};
pub use crate::doctor::{DoctorCounts, DoctorReport};
pub use crate::error::{Result, StandardsError};
pub use crate::paths::{STANDARDS_ENV_VAR, standards_root};
pub use crate::requirements::{
    CourseRequirement, ModuleRequirement, ProcedureRequirement, RequirementSet, WeeklyHours,
    normalize_key,
};
pub use crate::rules::{RuleSet, SelfEducationPooling};
