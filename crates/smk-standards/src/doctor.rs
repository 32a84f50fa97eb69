#![deny(unsafe_code)]

use crate::catalog::VerifySummary;
use crate::manifest::{ManifestFile, Pins};

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub standards_dir: String,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
    pub counts: DoctorCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DoctorCounts {
    pub files: usize,
    pub old_specializations: usize,
    pub new_specializations: usize,
    pub old_procedures: usize,
    pub new_procedures: usize,
}

impl DoctorReport {
    pub fn from_verify_summary(summary: &VerifySummary, files: Vec<ManifestFile>) -> Self {
        Self {
            schema: "smk.standards-doctor".to_string(),
            schema_version: 1,
            standards_dir: summary.standards_dir.display().to_string(),
            pins: summary.manifest_pins.clone(),
            files,
            counts: DoctorCounts {
                files: summary.file_count,
                old_specializations: summary.specialization_count_old,
                new_specializations: summary.specialization_count_new,
                old_procedures: summary.procedure_count_old,
                new_procedures: summary.procedure_count_new,
            },
        }
    }
}
