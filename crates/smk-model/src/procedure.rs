//! Procedure records in both registry dialects and their normalized form.
//!
//! The old dialect logs one performance per record with an execution code
//! (`A` = operator, `B` = assistant) against an internship. The new dialect
//! logs batches against a module requirement with separate operator and
//! assistant counts. Both are resolved once into [`ProcedureRealization`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{ProcedureRole, SmkVersion};
use crate::ids::{InternshipId, ModuleId, ProcedureId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "smk_version", rename_all = "lowercase")]
pub enum ProcedureRecord {
    Old(OldSmkProcedure),
    New(NewSmkProcedure),
}

impl ProcedureRecord {
    pub fn id(&self) -> ProcedureId {
        match self {
            ProcedureRecord::Old(record) => record.id,
            ProcedureRecord::New(record) => record.id,
        }
    }

    pub fn smk_version(&self) -> SmkVersion {
        match self {
            ProcedureRecord::Old(_) => SmkVersion::Old,
            ProcedureRecord::New(_) => SmkVersion::New,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            ProcedureRecord::Old(record) => record.date,
            ProcedureRecord::New(record) => record.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OldSmkProcedure {
    pub id: ProcedureId,
    pub internship_id: InternshipId,
    /// Requirement code the performance counts towards.
    pub code: String,
    /// Execution code: `A` (operator) or `B` (assistant).
    pub execution_code: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSmkProcedure {
    pub id: ProcedureId,
    pub module_id: ModuleId,
    #[serde(default)]
    pub internship_id: Option<InternshipId>,
    #[serde(default)]
    pub requirement_code: Option<String>,
    #[serde(default)]
    pub procedure_name: String,
    #[serde(default)]
    pub count_operator: u32,
    #[serde(default)]
    pub count_assistant: u32,
    pub date: NaiveDate,
}

/// Dialect-free procedure performance(s) attributed to one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRealization {
    pub procedure_id: ProcedureId,
    pub requirement_code: String,
    pub module_id: Option<ModuleId>,
    pub role: ProcedureRole,
    /// Number of performances this realization stands for.
    pub count: u32,
    pub date: NaiveDate,
}
