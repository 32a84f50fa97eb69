//! Per-dialect rule thresholds.
//!
//! Each SMK dialect ships one `rules.toml`. The validator and calculator only
//! read the resolved [`RuleSet`]; they never branch on the dialect themselves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use smk_model::SmkVersion;

use crate::error::{Result, StandardsError};

/// How the yearly self-education allowance may be spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfEducationPooling {
    /// Flat allowance per calendar year.
    PerYear,
    /// Pool per module; unused days carry into later modules only.
    PerModule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub smk_version: SmkVersion,
    pub revision: String,
    pub self_education_pooling: SelfEducationPooling,
    pub weekly_average_target_minutes: u32,
    pub weekly_average_tolerance_percent: u32,
    pub self_education_days_per_year_maximum: u32,
    pub export_self_education_days_minimum: u32,
    pub max_start_lead_days: u32,
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    rules: RuleSet,
}

impl RuleSet {
    /// Target weekly duty hours (e.g. 605 minutes = 10.083 h).
    pub fn weekly_average_target_hours(&self) -> f64 {
        f64::from(self.weekly_average_target_minutes) / 60.0
    }

    /// Accepted weekly average band around `target_hours`.
    pub fn weekly_average_band(&self, target_hours: f64) -> (f64, f64) {
        let tolerance = f64::from(self.weekly_average_tolerance_percent) / 100.0;
        (target_hours * (1.0 - tolerance), target_hours * (1.0 + tolerance))
    }
}

pub(crate) fn parse_rules(contents: &str, path: &Path, expected: SmkVersion) -> Result<RuleSet> {
    let file: RulesFile = toml::from_str(contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rules = file.rules;
    if rules.smk_version != expected {
        return Err(StandardsError::catalog(
            path,
            format!(
                "rules declare SMK version '{}' but were registered for '{}'",
                rules.smk_version, expected
            ),
        ));
    }
    if rules.weekly_average_tolerance_percent > 100 {
        return Err(StandardsError::catalog(
            path,
            "weekly_average_tolerance_percent must be at most 100",
        ));
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD_RULES: &str = r#"
[rules]
smk_version = "old"
revision = "smk-2014"
self_education_pooling = "per_year"
weekly_average_target_minutes = 605
weekly_average_tolerance_percent = 20
self_education_days_per_year_maximum = 6
export_self_education_days_minimum = 5
max_start_lead_days = 365
"#;

    #[test]
    fn parses_old_rules() {
        let rules = parse_rules(OLD_RULES, Path::new("rules.toml"), SmkVersion::Old).unwrap();
        assert_eq!(rules.self_education_pooling, SelfEducationPooling::PerYear);
        let (low, high) = rules.weekly_average_band(10.0);
        assert!((low - 8.0).abs() < 1e-9);
        assert!((high - 12.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_rules_registered_under_other_dialect() {
        let err = parse_rules(OLD_RULES, Path::new("rules.toml"), SmkVersion::New).unwrap_err();
        assert!(matches!(err, StandardsError::InvalidCatalog { .. }));
    }
}
