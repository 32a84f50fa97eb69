use serde::{Deserialize, Serialize};

use smk_model::{ModuleType, SmkVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub minimum: u32,
    pub maximum: u32,
    pub average_hours: u32,
    pub average_minutes: u32,
}

impl WeeklyHours {
    pub fn average(&self) -> f64 {
        f64::from(self.average_hours) + f64::from(self.average_minutes) / 60.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequirement {
    pub course_type: String,
    pub course_name: String,
    #[serde(default)]
    pub requires_cmkp_certificate: bool,
    #[serde(default)]
    pub minimum_hours: u32,
}

/// Required performances of one procedure, by role.
///
/// Old-dialect `Required Count Code A/B` columns are mapped onto the operator
/// and assistant counts when the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRequirement {
    pub code: String,
    pub name: String,
    pub required_as_operator: u32,
    pub required_as_assistant: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRequirement {
    pub module_type: ModuleType,
    pub name: String,
    pub duration_months: u32,
    pub required_internships: u32,
    #[serde(default)]
    pub required_internship_days: u32,
    pub required_courses: u32,
    #[serde(default)]
    pub procedures: Vec<ProcedureRequirement>,
}

impl ModuleRequirement {
    pub fn procedure(&self, code: &str) -> Option<&ProcedureRequirement> {
        self.procedures
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(code))
    }
}

/// Everything required for one specialization under one dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    pub specialization_key: String,
    pub specialization_name: String,
    pub smk_version: SmkVersion,
    pub duration_years: u32,
    pub monthly_hours_minimum: u32,
    pub weekly_hours: WeeklyHours,
    pub modules: Vec<ModuleRequirement>,
    pub required_courses: Vec<CourseRequirement>,
    /// Set when this is the catalog's fallback, not an exact entry.
    pub is_default: bool,
}

impl RequirementSet {
    pub fn module(&self, module_type: ModuleType) -> Option<&ModuleRequirement> {
        self.modules.iter().find(|m| m.module_type == module_type)
    }

    /// Whether a course of this type or name must carry a CMKP certificate.
    pub fn course_requires_cmkp(&self, course_type: &str, course_name: &str) -> bool {
        self.required_courses.iter().any(|course| {
            course.requires_cmkp_certificate
                && (course.course_type.eq_ignore_ascii_case(course_type.trim())
                    || course.course_name.eq_ignore_ascii_case(course_name.trim()))
        })
    }

    pub fn procedure_count(&self) -> usize {
        self.modules.iter().map(|m| m.procedures.len()).sum()
    }
}

/// Normalize a specialization name to its catalog key.
///
/// Lower-case, Polish diacritics folded, whitespace runs joined by `-`,
/// so "Chirurgia  ogólna" and "chirurgia-ogolna" resolve alike.
pub fn normalize_key(name: &str) -> String {
    let folded: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_diacritic)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join("-")
}

fn fold_diacritic(c: char) -> char {
    match c {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' | 'ż' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_names_to_kebab_keys() {
        assert_eq!(normalize_key("Kardiologia"), "kardiologia");
        assert_eq!(normalize_key("  Chirurgia   ogólna "), "chirurgia-ogolna");
        assert_eq!(normalize_key("chirurgia-ogolna"), "chirurgia-ogolna");
    }

    #[test]
    fn weekly_average_includes_minutes() {
        let hours = WeeklyHours {
            minimum: 40,
            maximum: 48,
            average_hours: 45,
            average_minutes: 30,
        };
        assert!((hours.average() - 45.5).abs() < 1e-9);
    }
}
