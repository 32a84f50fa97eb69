//! Type-safe enumerations for specialization records.
//!
//! These enums replace the free-form strings the registry exports use for
//! rule dialects, module kinds, performer roles and record categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registry rule dialect a specialization is reported under.
///
/// The two dialects differ in how procedures are coded (execution codes A/B
/// vs. operator/assistant roles) and how self-education allowance is pooled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmkVersion {
    Old,
    New,
}

impl SmkVersion {
    pub const ALL: [SmkVersion; 2] = [SmkVersion::Old, SmkVersion::New];

    /// Parse a dialect name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    /// Lower-case key used by the requirement catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }
}

impl fmt::Display for SmkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmkVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown SMK version: {s}"))
    }
}

/// Training phase a module represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Basic,
    Specialistic,
}

impl ModuleType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "specialistic" => Some(Self::Specialistic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Specialistic => "specialistic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Specialistic => "Specialistic",
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModuleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown module type: {s}"))
    }
}

/// Role of the physician in a single procedure performance.
///
/// The old dialect records this as execution code `A` (operator) or `B`
/// (assistant); both spellings resolve to the same role here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureRole {
    Operator,
    Assistant,
}

impl ProcedureRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "operator" | "a" => Some(Self::Operator),
            "assistant" | "b" => Some(Self::Assistant),
            _ => None,
        }
    }

    /// Resolve an old-dialect execution code. Only `A` and `B` are accepted.
    pub fn from_execution_code(code: &str) -> Option<Self> {
        match code.trim() {
            "A" | "a" => Some(Self::Operator),
            "B" | "b" => Some(Self::Assistant),
            _ => None,
        }
    }

    pub fn execution_code(&self) -> &'static str {
        match self {
            Self::Operator => "A",
            Self::Assistant => "B",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ProcedureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    Sick,
    Maternity,
    Paternity,
    Unpaid,
    Vacation,
    SelfEducation,
    Other,
}

impl AbsenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sick => "sick",
            Self::Maternity => "maternity",
            Self::Paternity => "paternity",
            Self::Unpaid => "unpaid",
            Self::Vacation => "vacation",
            Self::SelfEducation => "self_education",
            Self::Other => "other",
        }
    }

    /// Longest extension a single approved absence of this type may add.
    /// `None` means the full duration counts.
    pub fn extension_cap_days(&self) -> Option<u32> {
        match self {
            Self::Sick => Some(90),
            Self::Maternity | Self::Paternity | Self::Unpaid => None,
            Self::Vacation | Self::SelfEducation | Self::Other => Some(0),
        }
    }
}

impl fmt::Display for AbsenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionType {
    PreviousEducation,
    WorkExperience,
    ForeignQualifications,
    Research,
    Other,
}

impl RecognitionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreviousEducation => "previous_education",
            Self::WorkExperience => "work_experience",
            Self::ForeignQualifications => "foreign_qualifications",
            Self::Research => "research",
            Self::Other => "other",
        }
    }

    /// Upper bound on the days a recognition of this type may shorten training by.
    pub fn max_days_reduction(&self) -> u32 {
        match self {
            Self::PreviousEducation => 365,
            Self::WorkExperience => 730,
            Self::ForeignQualifications => 1095,
            Self::Research => 180,
            Self::Other => 90,
        }
    }
}

impl fmt::Display for RecognitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
    Journal,
    Conference,
    Book,
    Chapter,
    Thesis,
    Poster,
    Abstract,
    CaseReport,
    Review,
    Other,
}

impl PublicationType {
    pub fn base_score(&self, peer_reviewed: bool) -> u32 {
        match self {
            Self::Journal => {
                if peer_reviewed {
                    10
                } else {
                    5
                }
            }
            Self::Conference => {
                if peer_reviewed {
                    7
                } else {
                    4
                }
            }
            Self::Review => {
                if peer_reviewed {
                    12
                } else {
                    6
                }
            }
            Self::Book => 8,
            Self::Chapter => 6,
            Self::Thesis => 5,
            Self::CaseReport => 4,
            Self::Poster => 3,
            Self::Abstract => 2,
            Self::Other => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfEducationType {
    OnlineCourse,
    Conference,
    Workshop,
    Webinar,
    MedicalJournal,
    ClinicalGuideline,
    Research,
    Book,
    Article,
    Literature,
    Video,
    Podcast,
    Other,
}

impl SelfEducationType {
    pub fn base_score(&self) -> u32 {
        match self {
            Self::Conference | Self::Research => 10,
            Self::MedicalJournal => 9,
            Self::OnlineCourse | Self::ClinicalGuideline => 8,
            Self::Workshop => 7,
            Self::Book => 6,
            Self::Webinar | Self::Literature => 5,
            Self::Article => 4,
            Self::Video | Self::Podcast => 3,
            Self::Other => 2,
        }
    }
}
