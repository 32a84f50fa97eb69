//! Loading bundles and the requirement catalog for a command.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use smk_model::{DataBundle, OwnershipContext, UserId};
use smk_standards::{DoctorReport, RequirementCatalog};

/// Read a JSON data bundle.
pub fn load_bundle(path: &Path) -> Result<DataBundle> {
    let file = File::open(path).with_context(|| format!("open bundle {}", path.display()))?;
    let bundle: DataBundle = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse bundle {}", path.display()))?;
    debug!(
        path = %path.display(),
        specialization_id = %bundle.specialization.id,
        modules = bundle.modules.len(),
        internships = bundle.internships.len(),
        shifts = bundle.medical_shifts.len(),
        procedures = bundle.procedures.len(),
        "loaded bundle"
    );
    Ok(bundle)
}

/// The built-in catalog, or one verified and loaded from `standards_dir`.
pub fn load_catalog(standards_dir: Option<&Path>) -> Result<RequirementCatalog> {
    match standards_dir {
        Some(dir) => {
            let (catalog, summary) = RequirementCatalog::verify_and_load(dir)
                .with_context(|| format!("load standards from {}", dir.display()))?;
            info!(
                standards_dir = %dir.display(),
                files = summary.file_count,
                "standards verified"
            );
            Ok(catalog)
        }
        None => RequirementCatalog::builtin().context("load built-in standards"),
    }
}

/// Verify a standards directory and describe what it holds.
pub fn doctor(standards_dir: &Path) -> Result<DoctorReport> {
    let (catalog, summary) = RequirementCatalog::verify_and_load(standards_dir)
        .with_context(|| format!("verify standards in {}", standards_dir.display()))?;
    Ok(DoctorReport::from_verify_summary(
        &summary,
        catalog.manifest.files,
    ))
}

/// Reject the bundle unless `user` owns it. No user means no check.
pub fn authorize(bundle: &DataBundle, user: Option<u64>) -> Result<()> {
    if let Some(user) = user {
        let ownership = OwnershipContext::new(UserId(user), bundle.specialization.id);
        ownership.authorize(bundle)?;
    }
    Ok(())
}

pub fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_today_is_kept() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(resolve_today(Some(date)), date);
    }
}
