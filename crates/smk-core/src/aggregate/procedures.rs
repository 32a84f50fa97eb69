//! Procedure ingestion and per-requirement progress.
//!
//! Records of either dialect are resolved once into [`ProcedureRealization`]
//! values. Everything downstream counts realizations by role and never looks
//! at the dialect again.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use smk_model::{
    Internship, ModuleId, ModuleProcedureSummary, ProcedureProgressDto, ProcedureRealization,
    ProcedureRecord, ProcedureRole,
};
use smk_standards::{ModuleRequirement, ProcedureRequirement};

use crate::progress::round2;

/// Resolve dialect records into realizations.
///
/// Old records take their module from the owning internship and count one
/// performance each. New records may carry both an operator and an assistant
/// count and yield one realization per non-zero role. Records without a
/// usable role or requirement code are skipped here; the validator reports
/// them.
pub fn ingest_procedures(
    records: &[ProcedureRecord],
    internships: &[Internship],
) -> Vec<ProcedureRealization> {
    let internship_modules: BTreeMap<_, _> = internships
        .iter()
        .map(|internship| (internship.id, internship.module_id))
        .collect();

    let mut realizations = Vec::new();
    for record in records {
        match record {
            ProcedureRecord::Old(old) => {
                let Some(role) = ProcedureRole::from_execution_code(&old.execution_code) else {
                    continue;
                };
                let code = old.code.trim();
                if code.is_empty() {
                    continue;
                }
                realizations.push(ProcedureRealization {
                    procedure_id: old.id,
                    requirement_code: code.to_string(),
                    module_id: internship_modules.get(&old.internship_id).copied().flatten(),
                    role,
                    count: 1,
                    date: old.date,
                });
            }
            ProcedureRecord::New(new) => {
                let Some(code) = new
                    .requirement_code
                    .as_deref()
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                else {
                    continue;
                };
                for (role, count) in [
                    (ProcedureRole::Operator, new.count_operator),
                    (ProcedureRole::Assistant, new.count_assistant),
                ] {
                    if count == 0 {
                        continue;
                    }
                    realizations.push(ProcedureRealization {
                        procedure_id: new.id,
                        requirement_code: code.to_string(),
                        module_id: Some(new.module_id),
                        role,
                        count,
                        date: new.date,
                    });
                }
            }
        }
    }
    realizations
}

/// Realization counts for one requirement code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcedureTally {
    pub operator: u32,
    pub assistant: u32,
    pub last_date: Option<NaiveDate>,
}

impl ProcedureTally {
    fn add(&mut self, realization: &ProcedureRealization) {
        match realization.role {
            ProcedureRole::Operator => {
                self.operator = self.operator.saturating_add(realization.count);
            }
            ProcedureRole::Assistant => {
                self.assistant = self.assistant.saturating_add(realization.count);
            }
        }
        self.last_date = self.last_date.max(Some(realization.date));
    }
}

/// Tally realizations of one module by upper-cased requirement code.
pub fn tally_realizations(
    realizations: &[ProcedureRealization],
    module_id: ModuleId,
) -> BTreeMap<String, ProcedureTally> {
    let mut tallies: BTreeMap<String, ProcedureTally> = BTreeMap::new();
    for realization in realizations
        .iter()
        .filter(|r| r.module_id == Some(module_id))
    {
        tallies
            .entry(realization.requirement_code.to_ascii_uppercase())
            .or_default()
            .add(realization);
    }
    tallies
}

/// Both role thresholds must clear independently.
pub fn is_requirement_complete(
    requirement: &ProcedureRequirement,
    completed_as_operator: u32,
    completed_as_assistant: u32,
) -> bool {
    completed_as_operator >= requirement.required_as_operator
        && completed_as_assistant >= requirement.required_as_assistant
}

pub fn requirement_progress(
    requirement: &ProcedureRequirement,
    tally: ProcedureTally,
) -> ProcedureProgressDto {
    ProcedureProgressDto {
        requirement_code: requirement.code.clone(),
        name: requirement.name.clone(),
        required_as_operator: requirement.required_as_operator,
        required_as_assistant: requirement.required_as_assistant,
        completed_as_operator: tally.operator,
        completed_as_assistant: tally.assistant,
        is_completed: is_requirement_complete(requirement, tally.operator, tally.assistant),
        exceeds_operator: tally.operator > requirement.required_as_operator,
        exceeds_assistant: tally.assistant > requirement.required_as_assistant,
        last_realization_date: tally.last_date,
    }
}

/// Progress of every requirement in a module, in catalog order.
pub fn module_requirement_progress(
    requirement: &ModuleRequirement,
    realizations: &[ProcedureRealization],
    module_id: ModuleId,
) -> Vec<ProcedureProgressDto> {
    let tallies = tally_realizations(realizations, module_id);
    requirement
        .procedures
        .iter()
        .map(|procedure| {
            let tally = tallies
                .get(&procedure.code.to_ascii_uppercase())
                .copied()
                .unwrap_or_default();
            requirement_progress(procedure, tally)
        })
        .collect()
}

/// Summary over one module's requirements.
///
/// Realization totals count every realization in the module, including codes
/// the catalog does not list.
pub fn summarize_module_procedures(
    progress: &[ProcedureProgressDto],
    realizations: &[ProcedureRealization],
    module_id: ModuleId,
) -> ModuleProcedureSummary {
    let completed = progress.iter().filter(|p| p.is_completed).count();
    let mut summary = ModuleProcedureSummary {
        total_requirements: progress.len(),
        completed_requirements: completed,
        completion_percentage: if progress.is_empty() {
            0.0
        } else {
            round2(completed as f64 / progress.len() as f64 * 100.0)
        },
        ..ModuleProcedureSummary::default()
    };
    for realization in realizations
        .iter()
        .filter(|r| r.module_id == Some(module_id))
    {
        match realization.role {
            ProcedureRole::Operator => {
                summary.total_realizations_as_operator = summary
                    .total_realizations_as_operator
                    .saturating_add(realization.count);
            }
            ProcedureRole::Assistant => {
                summary.total_realizations_as_assistant = summary
                    .total_realizations_as_assistant
                    .saturating_add(realization.count);
            }
        }
        summary.last_realization_date = summary.last_realization_date.max(Some(realization.date));
    }
    summary
}

/// Operator and assistant sums with each requirement capped at its target.
pub fn capped_role_totals(progress: &[ProcedureProgressDto]) -> ((u32, u32), (u32, u32)) {
    progress.iter().fold(((0, 0), (0, 0)), |((op, op_req), (asst, asst_req)), p| {
        (
            (
                op + p.completed_as_operator.min(p.required_as_operator),
                op_req + p.required_as_operator,
            ),
            (
                asst + p.completed_as_assistant.min(p.required_as_assistant),
                asst_req + p.required_as_assistant,
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use smk_model::{
        InternshipId, NewSmkProcedure, OldSmkProcedure, ProcedureId, SpecializationId,
    };

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_requirement(code: &str, operator: u32, assistant: u32) -> ProcedureRequirement {
        ProcedureRequirement {
            code: code.to_string(),
            name: code.to_string(),
            required_as_operator: operator,
            required_as_assistant: assistant,
        }
    }

    fn make_old(id: u64, code: &str, execution_code: &str) -> ProcedureRecord {
        ProcedureRecord::Old(OldSmkProcedure {
            id: ProcedureId(id),
            internship_id: InternshipId(7),
            code: code.to_string(),
            execution_code: execution_code.to_string(),
            date: date(2024, 2, u32::try_from(id).unwrap()),
            year: 1,
            location: String::new(),
        })
    }

    fn make_internship() -> Internship {
        Internship {
            id: InternshipId(7),
            specialization_id: SpecializationId(1),
            module_id: Some(ModuleId(3)),
            name: "Staż".to_string(),
            institution_name: String::new(),
            department_name: String::new(),
            supervisor_name: None,
            start_date: None,
            end_date: None,
            days_count: None,
            is_completed: false,
            is_approved: false,
        }
    }

    #[test]
    fn old_execution_codes_map_to_roles() {
        let records = [
            make_old(1, "P001", "A"),
            make_old(2, "P001", "B"),
            make_old(3, "P001", "X"),
        ];
        let realizations = ingest_procedures(&records, &[make_internship()]);
        assert_eq!(realizations.len(), 2);
        assert_eq!(realizations[0].role, ProcedureRole::Operator);
        assert_eq!(realizations[0].module_id, Some(ModuleId(3)));
        assert_eq!(realizations[1].role, ProcedureRole::Assistant);
    }

    #[test]
    fn new_records_split_by_role_and_need_a_code() {
        let records = [
            ProcedureRecord::New(NewSmkProcedure {
                id: ProcedureId(1),
                module_id: ModuleId(3),
                internship_id: None,
                requirement_code: Some("n001".to_string()),
                procedure_name: "Echo".to_string(),
                count_operator: 4,
                count_assistant: 2,
                date: date(2024, 5, 1),
            }),
            ProcedureRecord::New(NewSmkProcedure {
                id: ProcedureId(2),
                module_id: ModuleId(3),
                internship_id: None,
                requirement_code: None,
                procedure_name: "Echo".to_string(),
                count_operator: 9,
                count_assistant: 0,
                date: date(2024, 5, 2),
            }),
        ];
        let realizations = ingest_procedures(&records, &[]);
        assert_eq!(realizations.len(), 2);
        let tallies = tally_realizations(&realizations, ModuleId(3));
        let tally = tallies["N001"];
        assert_eq!((tally.operator, tally.assistant), (4, 2));
        assert_eq!(tally.last_date, Some(date(2024, 5, 1)));
    }

    #[test]
    fn completion_is_conjunctive() {
        let requirement = make_requirement("P001", 2, 1);
        assert!(is_requirement_complete(&requirement, 2, 1));
        assert!(!is_requirement_complete(&requirement, 10, 0));
        assert!(!is_requirement_complete(&requirement, 1, 10));

        let operator_only = make_requirement("P002", 2, 0);
        assert!(is_requirement_complete(&operator_only, 2, 0));
    }

    #[test]
    fn excess_is_flagged_and_capped_in_totals() {
        let requirement = make_requirement("P001", 2, 1);
        let progress = requirement_progress(
            &requirement,
            ProcedureTally {
                operator: 5,
                assistant: 0,
                last_date: None,
            },
        );
        assert!(progress.exceeds_operator);
        assert!(!progress.exceeds_assistant);
        assert!(!progress.is_completed);
        let ((op, op_req), (asst, asst_req)) = capped_role_totals(&[progress]);
        assert_eq!((op, op_req, asst, asst_req), (2, 2, 0, 1));
    }

    #[test]
    fn module_summary_of_empty_module_is_zero() {
        let summary = summarize_module_procedures(&[], &[], ModuleId(1));
        assert_eq!(summary, ModuleProcedureSummary::default());
    }
}
