//! Per-invocation calculation context.
//!
//! A [`ProgressContext`] pairs one specialization's [`DataBundle`] with the
//! requirement set and rule set resolved for its SMK version. Procedure
//! records are ingested once on construction. Nothing here is cached across
//! invocations.

use chrono::NaiveDate;

use smk_model::{
    Course, DataBundle, Internship, MedicalShift, Module, ModuleId, ModuleProgressDto,
    OwnershipContext, ProcedureProgressDto, ProcedureRealization, Result, SmkVersion,
    Specialization,
};
use smk_standards::{ModuleRequirement, RequirementCatalog, RequirementSet, RuleSet};

use crate::aggregate::procedures::{ingest_procedures, module_requirement_progress};
use crate::progress::{ModuleTotals, calculate_module_progress};

#[derive(Debug, Clone)]
pub struct ProgressContext<'a> {
    pub bundle: &'a DataBundle,
    pub requirements: RequirementSet,
    pub rules: &'a RuleSet,
    pub today: NaiveDate,
    realizations: Vec<ProcedureRealization>,
}

impl<'a> ProgressContext<'a> {
    pub fn new(catalog: &'a RequirementCatalog, bundle: &'a DataBundle, today: NaiveDate) -> Self {
        let specialization = &bundle.specialization;
        let version = specialization.smk_version;
        Self {
            bundle,
            requirements: catalog.get_requirements(&specialization.name, version),
            rules: catalog.rules(version),
            today,
            realizations: ingest_procedures(&bundle.procedures, &bundle.internships),
        }
    }

    /// Like [`ProgressContext::new`], after confirming the caller owns the bundle.
    pub fn authorized(
        catalog: &'a RequirementCatalog,
        ownership: &OwnershipContext,
        bundle: &'a DataBundle,
        today: NaiveDate,
    ) -> Result<Self> {
        let bundle = ownership.authorize(bundle)?;
        Ok(Self::new(catalog, bundle, today))
    }

    pub fn specialization(&self) -> &'a Specialization {
        &self.bundle.specialization
    }

    pub fn smk_version(&self) -> SmkVersion {
        self.bundle.specialization.smk_version
    }

    pub fn realizations(&self) -> &[ProcedureRealization] {
        &self.realizations
    }

    pub fn ordered_modules(&self) -> Vec<&'a Module> {
        self.bundle.ordered_modules()
    }

    pub fn module_requirement(&self, module: &Module) -> Option<&ModuleRequirement> {
        self.requirements.module(module.module_type)
    }

    pub fn module_internships(&self, module_id: ModuleId) -> Vec<&'a Internship> {
        self.bundle
            .internships
            .iter()
            .filter(|i| i.module_id == Some(module_id))
            .collect()
    }

    pub fn module_courses(&self, module_id: ModuleId) -> Vec<&'a Course> {
        self.bundle
            .courses
            .iter()
            .filter(|c| c.module_id == Some(module_id))
            .collect()
    }

    /// Shifts logged on the module's internships.
    pub fn module_shifts(&self, module_id: ModuleId) -> Vec<MedicalShift> {
        let internships: Vec<_> = self
            .module_internships(module_id)
            .iter()
            .map(|i| i.id)
            .collect();
        self.bundle
            .medical_shifts
            .iter()
            .filter(|s| internships.contains(&s.internship_id))
            .cloned()
            .collect()
    }

    pub fn module_procedure_progress(&self, module: &Module) -> Vec<ProcedureProgressDto> {
        self.module_requirement(module)
            .map(|requirement| {
                module_requirement_progress(requirement, &self.realizations, module.id)
            })
            .unwrap_or_default()
    }

    pub fn module_totals(&self, module: &Module) -> ModuleTotals {
        let completed_courses = self
            .module_courses(module.id)
            .iter()
            .filter(|c| c.counts_as_completed())
            .count();
        let completed_internships = self
            .module_internships(module.id)
            .iter()
            .filter(|i| i.is_completed)
            .count();
        ModuleTotals {
            completed_courses: u32::try_from(completed_courses).unwrap_or(u32::MAX),
            completed_internships: u32::try_from(completed_internships).unwrap_or(u32::MAX),
            procedures: self.module_procedure_progress(module),
        }
    }

    pub fn module_progress(&self, module: &Module) -> ModuleProgressDto {
        calculate_module_progress(
            module,
            self.module_requirement(module),
            &self.module_totals(module),
        )
    }

    /// Progress of every module in sequence order.
    pub fn all_module_progress(&self) -> Vec<ModuleProgressDto> {
        self.ordered_modules()
            .into_iter()
            .map(|module| self.module_progress(module))
            .collect()
    }
}
