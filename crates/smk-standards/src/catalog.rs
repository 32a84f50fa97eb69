//! Requirement catalog: rule sets plus per-specialization requirement sets.
//!
//! The catalog is built once from the pinned `standards/` files (or the copy
//! compiled into the crate) and is read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use smk_model::{ModuleType, SmkVersion};

use crate::error::{Result, StandardsError};
use crate::hash::{matches_sha256, sha256_hex};
use crate::manifest::{Manifest, ManifestFile, Pins, role_name};
use crate::procedures::parse_procedures_csv;
use crate::requirements::{
    CourseRequirement, ModuleRequirement, RequirementSet, WeeklyHours, normalize_key,
};
use crate::rules::{RuleSet, parse_rules};

const MANIFEST_SCHEMA: &str = "smk.standards-manifest";

const DIALECT_PARTS: &[&str] = &["rules", "catalog", "procedures"];

const ALLOWED_KINDS: &[&str] = &["csv", "toml"];

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub standards_dir: PathBuf,
    pub manifest_pins: Pins,
    pub file_count: usize,
    pub specialization_count_old: usize,
    pub specialization_count_new: usize,
    pub procedure_count_old: usize,
    pub procedure_count_new: usize,
}

/// Standards for a single dialect.
#[derive(Debug, Clone)]
pub struct DialectStandards {
    pub rules: RuleSet,
    pub default: RequirementSet,
    pub specializations: BTreeMap<String, RequirementSet>,
}

impl DialectStandards {
    fn procedure_count(&self) -> usize {
        self.specializations
            .values()
            .map(RequirementSet::procedure_count)
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct RequirementCatalog {
    pub manifest: Manifest,
    old: DialectStandards,
    new: DialectStandards,
}

/// Raw contents of one dialect's three files.
struct DialectSources<'a> {
    rules: (&'a str, PathBuf),
    catalog: (&'a str, PathBuf),
    procedures: (&'a [u8], PathBuf),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    catalog: CatalogHeader,
    default: CatalogEntry,
    #[serde(default)]
    specializations: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogHeader {
    smk_version: SmkVersion,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    key: Option<String>,
    name: String,
    duration_years: u32,
    monthly_hours_minimum: u32,
    weekly_hours: WeeklyHours,
    #[serde(default)]
    modules: Vec<ModuleRequirement>,
    #[serde(default)]
    courses: Vec<CourseRequirement>,
}

impl CatalogEntry {
    fn into_requirement_set(
        self,
        key: String,
        version: SmkVersion,
        is_default: bool,
    ) -> RequirementSet {
        RequirementSet {
            specialization_key: key,
            specialization_name: self.name,
            smk_version: version,
            duration_years: self.duration_years,
            monthly_hours_minimum: self.monthly_hours_minimum,
            weekly_hours: self.weekly_hours,
            modules: self.modules,
            required_courses: self.courses,
            is_default,
        }
    }
}

mod builtin_sources {
    pub const MANIFEST: &str = include_str!("../../../standards/manifest.toml");
    pub const OLD_RULES: &str = include_str!("../../../standards/smk/old/rules.toml");
    pub const OLD_CATALOG: &str = include_str!("../../../standards/smk/old/catalog.toml");
    pub const OLD_PROCEDURES: &str = include_str!("../../../standards/smk/old/procedures.csv");
    pub const NEW_RULES: &str = include_str!("../../../standards/smk/new/rules.toml");
    pub const NEW_CATALOG: &str = include_str!("../../../standards/smk/new/catalog.toml");
    pub const NEW_PROCEDURES: &str = include_str!("../../../standards/smk/new/procedures.csv");
}

impl RequirementCatalog {
    /// Load the copy of `standards/` compiled into this crate.
    ///
    /// Embedded files are still checked against the embedded manifest pins.
    pub fn builtin() -> Result<Self> {
        let manifest_path = PathBuf::from("<builtin>/manifest.toml");
        let manifest: Manifest =
            toml::from_str(builtin_sources::MANIFEST).map_err(|e| StandardsError::Toml {
                path: manifest_path,
                source: e,
            })?;
        validate_manifest_entries(&manifest)?;

        let embedded: [(SmkVersion, &str, &str); 6] = [
            (SmkVersion::Old, "rules", builtin_sources::OLD_RULES),
            (SmkVersion::Old, "catalog", builtin_sources::OLD_CATALOG),
            (SmkVersion::Old, "procedures", builtin_sources::OLD_PROCEDURES),
            (SmkVersion::New, "rules", builtin_sources::NEW_RULES),
            (SmkVersion::New, "catalog", builtin_sources::NEW_CATALOG),
            (SmkVersion::New, "procedures", builtin_sources::NEW_PROCEDURES),
        ];
        for (version, part, contents) in embedded {
            let file = find_role(&manifest.files, &role_name(version, part))?;
            if !matches_sha256(contents.as_bytes(), &file.sha256) {
                return Err(StandardsError::Sha256Mismatch {
                    path: PathBuf::from("<builtin>").join(&file.path),
                    expected: file.sha256.to_ascii_lowercase(),
                    actual: sha256_hex(contents.as_bytes()),
                });
            }
        }

        let builtin_path = |part: &str, version: SmkVersion| -> Result<PathBuf> {
            let file = find_role(&manifest.files, &role_name(version, part))?;
            Ok(PathBuf::from("<builtin>").join(&file.path))
        };
        let old = load_dialect(
            SmkVersion::Old,
            &DialectSources {
                rules: (builtin_sources::OLD_RULES, builtin_path("rules", SmkVersion::Old)?),
                catalog: (
                    builtin_sources::OLD_CATALOG,
                    builtin_path("catalog", SmkVersion::Old)?,
                ),
                procedures: (
                    builtin_sources::OLD_PROCEDURES.as_bytes(),
                    builtin_path("procedures", SmkVersion::Old)?,
                ),
            },
            &manifest.pins,
        )?;
        let new = load_dialect(
            SmkVersion::New,
            &DialectSources {
                rules: (builtin_sources::NEW_RULES, builtin_path("rules", SmkVersion::New)?),
                catalog: (
                    builtin_sources::NEW_CATALOG,
                    builtin_path("catalog", SmkVersion::New)?,
                ),
                procedures: (
                    builtin_sources::NEW_PROCEDURES.as_bytes(),
                    builtin_path("procedures", SmkVersion::New)?,
                ),
            },
            &manifest.pins,
        )?;
        Ok(Self { manifest, old, new })
    }

    /// Verify every pinned file under `standards_dir` and build the catalog.
    pub fn verify_and_load(standards_dir: &Path) -> Result<(Self, VerifySummary)> {
        let manifest = load_manifest(&standards_dir.join("manifest.toml"))?;
        validate_manifest_entries(&manifest)?;
        reject_unlisted_files(&manifest, standards_dir)?;

        let mut files = manifest.files.clone();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let mut contents: BTreeMap<String, (Vec<u8>, PathBuf)> = BTreeMap::new();
        for file in &files {
            let full_path = standards_dir.join(&file.path);
            let bytes = read_verified(&full_path, file)?;
            contents.insert(file.role.clone(), (bytes, full_path));
        }

        let old = load_dialect_from(&contents, SmkVersion::Old, &manifest.pins)?;
        let new = load_dialect_from(&contents, SmkVersion::New, &manifest.pins)?;

        let summary = VerifySummary {
            standards_dir: standards_dir.to_path_buf(),
            manifest_pins: manifest.pins.clone(),
            file_count: files.len(),
            specialization_count_old: old.specializations.len(),
            specialization_count_new: new.specializations.len(),
            procedure_count_old: old.procedure_count(),
            procedure_count_new: new.procedure_count(),
        };
        info!(
            standards_dir = %standards_dir.display(),
            files = summary.file_count,
            "standards verified"
        );
        Ok((Self { manifest, old, new }, summary))
    }

    pub fn dialect(&self, version: SmkVersion) -> &DialectStandards {
        match version {
            SmkVersion::Old => &self.old,
            SmkVersion::New => &self.new,
        }
    }

    pub fn rules(&self, version: SmkVersion) -> &RuleSet {
        &self.dialect(version).rules
    }

    /// Exact catalog entry, if one exists.
    pub fn find(&self, specialization: &str, version: SmkVersion) -> Option<&RequirementSet> {
        self.dialect(version)
            .specializations
            .get(&normalize_key(specialization))
    }

    /// Requirement set for a specialization, or the documented default.
    ///
    /// The default is best-effort: it carries `is_default = true` and the
    /// caller's specialization name.
    pub fn get_requirements(&self, specialization: &str, version: SmkVersion) -> RequirementSet {
        if let Some(set) = self.find(specialization, version) {
            return set.clone();
        }
        warn!(
            specialization,
            smk_version = %version,
            "no catalog entry, using default requirements"
        );
        let mut fallback = self.dialect(version).default.clone();
        fallback.specialization_key = normalize_key(specialization);
        fallback.specialization_name = specialization.trim().to_string();
        fallback
    }

    pub fn list_specializations(&self, version: SmkVersion) -> Vec<&RequirementSet> {
        self.dialect(version).specializations.values().collect()
    }

    /// Add or replace a specialization entry, e.g. a locally defined programme.
    pub fn insert(&mut self, mut set: RequirementSet) -> Option<RequirementSet> {
        set.specialization_key = normalize_key(&set.specialization_key);
        set.is_default = false;
        let dialect = match set.smk_version {
            SmkVersion::Old => &mut self.old,
            SmkVersion::New => &mut self.new,
        };
        dialect
            .specializations
            .insert(set.specialization_key.clone(), set)
    }
}

fn load_manifest(path: &Path) -> Result<Manifest> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest_entries(manifest: &Manifest) -> Result<()> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != 1 {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.clone(),
            });
        }
        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(StandardsError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }
        validate_sha(&file.sha256, &file.path)?;
        validate_path(&file.path)?;
    }

    for version in SmkVersion::ALL {
        for part in DIALECT_PARTS {
            let role = role_name(version, part);
            if !roles.contains(role.as_str()) {
                return Err(StandardsError::MissingRole { role });
            }
        }
    }
    Ok(())
}

fn reject_unlisted_files(manifest: &Manifest, standards_dir: &Path) -> Result<()> {
    let listed: BTreeSet<PathBuf> = manifest
        .files
        .iter()
        .map(|f| normalize_path(Path::new(&f.path)))
        .collect();
    for path in list_files_under(standards_dir)? {
        if path == Path::new("manifest.toml") {
            continue;
        }
        if !listed.contains(&normalize_path(&path)) {
            return Err(StandardsError::UnexpectedFile {
                path: standards_dir.join(path),
            });
        }
    }
    Ok(())
}

fn read_verified(full_path: &Path, file: &ManifestFile) -> Result<Vec<u8>> {
    let bytes = std::fs::read(full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: full_path.to_path_buf(),
            }
        } else {
            StandardsError::io(full_path, e)
        }
    })?;
    if !matches_sha256(&bytes, &file.sha256) {
        return Err(StandardsError::Sha256Mismatch {
            path: full_path.to_path_buf(),
            expected: file.sha256.to_ascii_lowercase(),
            actual: sha256_hex(&bytes),
        });
    }
    Ok(bytes)
}

fn find_role<'a>(files: &'a [ManifestFile], role: &str) -> Result<&'a ManifestFile> {
    files
        .iter()
        .find(|f| f.role == role)
        .ok_or_else(|| StandardsError::MissingRole {
            role: role.to_string(),
        })
}

fn load_dialect_from(
    contents: &BTreeMap<String, (Vec<u8>, PathBuf)>,
    version: SmkVersion,
    pins: &Pins,
) -> Result<DialectStandards> {
    let lookup = |part: &str| -> Result<&(Vec<u8>, PathBuf)> {
        let role = role_name(version, part);
        contents
            .get(&role)
            .ok_or(StandardsError::MissingRole { role })
    };
    let as_text = |entry: &(Vec<u8>, PathBuf)| -> Result<String> {
        String::from_utf8(entry.0.clone())
            .map_err(|_| StandardsError::catalog(&entry.1, "file is not valid UTF-8"))
    };

    let rules_entry = lookup("rules")?;
    let catalog_entry = lookup("catalog")?;
    let procedures_entry = lookup("procedures")?;
    let rules_text = as_text(rules_entry)?;
    let catalog_text = as_text(catalog_entry)?;
    load_dialect(
        version,
        &DialectSources {
            rules: (rules_text.as_str(), rules_entry.1.clone()),
            catalog: (catalog_text.as_str(), catalog_entry.1.clone()),
            procedures: (procedures_entry.0.as_slice(), procedures_entry.1.clone()),
        },
        pins,
    )
}

fn load_dialect(
    version: SmkVersion,
    sources: &DialectSources<'_>,
    pins: &Pins,
) -> Result<DialectStandards> {
    let (rules_text, rules_path) = &sources.rules;
    let rules = parse_rules(rules_text, rules_path, version)?;
    if rules.revision != pins.revision(version) {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "{} rules revision '{}' does not match pinned '{}'",
                version,
                rules.revision,
                pins.revision(version)
            ),
        });
    }

    let (catalog_text, catalog_path) = &sources.catalog;
    let catalog: CatalogFile = toml::from_str(catalog_text).map_err(|e| StandardsError::Toml {
        path: catalog_path.clone(),
        source: e,
    })?;
    if catalog.catalog.smk_version != version {
        return Err(StandardsError::catalog(
            catalog_path,
            format!(
                "catalog declares SMK version '{}' but was registered for '{}'",
                catalog.catalog.smk_version, version
            ),
        ));
    }

    let default = catalog
        .default
        .into_requirement_set("default".to_string(), version, true);
    let mut specializations: BTreeMap<String, RequirementSet> = BTreeMap::new();
    for entry in catalog.specializations {
        let key = normalize_key(entry.key.as_deref().unwrap_or(entry.name.as_str()));
        check_unique_modules(&entry.modules, &key, catalog_path)?;
        let set = entry.into_requirement_set(key.clone(), version, false);
        if specializations.insert(key.clone(), set).is_some() {
            return Err(StandardsError::catalog(
                catalog_path,
                format!("duplicate specialization key '{key}'"),
            ));
        }
    }

    let (procedure_bytes, procedures_path) = &sources.procedures;
    for row in parse_procedures_csv(procedure_bytes, procedures_path, version)? {
        let key = normalize_key(&row.specialization_key);
        let set = specializations.get_mut(&key).ok_or_else(|| {
            StandardsError::catalog(
                procedures_path,
                format!("procedure {} references unknown specialization '{key}'", row.requirement.code),
            )
        })?;
        let module = module_mut(set, row.module_type).ok_or_else(|| {
            StandardsError::catalog(
                procedures_path,
                format!(
                    "procedure {} references {} module missing from '{key}'",
                    row.requirement.code,
                    row.module_type.as_str()
                ),
            )
        })?;
        if module.procedure(&row.requirement.code).is_some() {
            return Err(StandardsError::catalog(
                procedures_path,
                format!("duplicate procedure code {} in '{key}'", row.requirement.code),
            ));
        }
        module.procedures.push(row.requirement);
    }

    Ok(DialectStandards {
        rules,
        default,
        specializations,
    })
}

fn module_mut(set: &mut RequirementSet, module_type: ModuleType) -> Option<&mut ModuleRequirement> {
    set.modules
        .iter_mut()
        .find(|m| m.module_type == module_type)
}

fn check_unique_modules(modules: &[ModuleRequirement], key: &str, path: &Path) -> Result<()> {
    let mut seen = BTreeSet::new();
    for module in modules {
        if !seen.insert(module.module_type) {
            return Err(StandardsError::catalog(
                path,
                format!(
                    "'{key}' lists more than one {} module",
                    module.module_type.as_str()
                ),
            ));
        }
    }
    Ok(())
}

fn validate_sha(sha: &str, path: &str) -> Result<()> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf> {
    if path.contains('\\') {
        return Err(StandardsError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }
    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }
    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must not traverse out of standards/".to_string(),
        });
    }
    Ok(p)
}

fn list_files_under(root: &Path) -> Result<BTreeSet<PathBuf>> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = BTreeSet::new();
    while let Some(dir) = stack.pop() {
        for entry in std::fs::read_dir(&dir).map_err(|e| StandardsError::io(&dir, e))? {
            let entry = entry.map_err(|e| StandardsError::io(&dir, e))?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                let rel = path
                    .strip_prefix(root)
                    .map_err(|e| StandardsError::InvalidPath {
                        path: path.clone(),
                        message: format!("failed to relativize path: {e}"),
                    })?
                    .to_path_buf();
                files.insert(rel);
            }
        }
    }
    Ok(files)
}

fn normalize_path(p: &Path) -> PathBuf {
    p.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads_both_dialects() {
        let catalog = RequirementCatalog::builtin().expect("builtin catalog");
        assert_eq!(catalog.rules(SmkVersion::Old).revision, "smk-2014");
        assert_eq!(catalog.rules(SmkVersion::New).revision, "smk-2023");
        assert_eq!(catalog.list_specializations(SmkVersion::Old).len(), 2);
    }

    #[test]
    fn validate_path_rejects_traversal() {
        assert!(validate_path("../etc/passwd").is_err());
        assert!(validate_path("smk\\old\\rules.toml").is_err());
        assert!(validate_path("smk/old/rules.toml").is_ok());
    }
}
