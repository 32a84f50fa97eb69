#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use smk_model::SmkVersion;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

/// Rule-set revision pinned for each dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pins {
    pub old: String,
    pub new: String,
}

impl Pins {
    pub fn revision(&self, version: SmkVersion) -> &str {
        match version {
            SmkVersion::Old => &self.old,
            SmkVersion::New => &self.new,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub kind: String,
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Role name of a dialect file, e.g. `old_catalog`.
pub fn role_name(version: SmkVersion, part: &str) -> String {
    format!("{}_{}", version.as_str(), part)
}
