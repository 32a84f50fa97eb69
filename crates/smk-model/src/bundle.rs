use serde::{Deserialize, Serialize};

use crate::error::{Result, SmkError};
use crate::ids::{InternshipId, ModuleId, SpecializationId, UserId};
use crate::procedure::ProcedureRecord;
use crate::records::{
    Absence, AdditionalSelfEducationDays, Course, Internship, MedicalShift, Publication,
    Recognition, SelfEducation,
};
use crate::specialization::{Module, Specialization};

/// Fully materialized snapshot of one specialization's records.
///
/// Collections are already scoped to the specialization by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBundle {
    pub specialization: Specialization,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub internships: Vec<Internship>,
    #[serde(default)]
    pub medical_shifts: Vec<MedicalShift>,
    #[serde(default)]
    pub procedures: Vec<ProcedureRecord>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub self_education: Vec<SelfEducation>,
    #[serde(default)]
    pub additional_self_education_days: Vec<AdditionalSelfEducationDays>,
    #[serde(default)]
    pub absences: Vec<Absence>,
    #[serde(default)]
    pub recognitions: Vec<Recognition>,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

impl DataBundle {
    pub fn new(specialization: Specialization) -> Self {
        Self {
            specialization,
            modules: Vec::new(),
            internships: Vec::new(),
            medical_shifts: Vec::new(),
            procedures: Vec::new(),
            courses: Vec::new(),
            self_education: Vec::new(),
            additional_self_education_days: Vec::new(),
            absences: Vec::new(),
            recognitions: Vec::new(),
            publications: Vec::new(),
        }
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|module| module.id == id)
    }

    pub fn internship(&self, id: InternshipId) -> Option<&Internship> {
        self.internships.iter().find(|internship| internship.id == id)
    }

    /// Modules ordered by sequence, then start date.
    pub fn ordered_modules(&self) -> Vec<&Module> {
        let mut modules: Vec<&Module> = self.modules.iter().collect();
        modules.sort_by(|a, b| {
            a.sequence
                .cmp(&b.sequence)
                .then_with(|| a.start_date.cmp(&b.start_date))
                .then_with(|| a.id.cmp(&b.id))
        });
        modules
    }

    pub fn require_module(&self, id: ModuleId) -> Result<&Module> {
        self.module(id)
            .ok_or_else(|| SmkError::not_found("module", id))
    }
}

/// Caller identity already checked by the API layer.
///
/// Entry points take this instead of re-deriving ownership; [`authorize`]
/// only confirms that the bundle belongs to the verified user.
///
/// [`authorize`]: OwnershipContext::authorize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipContext {
    pub user_id: UserId,
    pub specialization_id: SpecializationId,
}

impl OwnershipContext {
    pub fn new(user_id: UserId, specialization_id: SpecializationId) -> Self {
        Self {
            user_id,
            specialization_id,
        }
    }

    pub fn authorize<'a>(&self, bundle: &'a DataBundle) -> Result<&'a DataBundle> {
        let specialization = &bundle.specialization;
        if specialization.id != self.specialization_id {
            return Err(SmkError::not_found(
                "specialization",
                self.specialization_id,
            ));
        }
        if specialization.user_id != self.user_id {
            return Err(SmkError::Unauthorized {
                user: self.user_id,
                specialization: specialization.id,
            });
        }
        Ok(bundle)
    }
}
