#![deny(unsafe_code)]

use std::path::Path;

use smk_model::{ModuleType, SmkVersion};

use crate::error::{Result, StandardsError};
use crate::requirements::ProcedureRequirement;

/// One row of a dialect's `procedures.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureRow {
    pub specialization_key: String,
    pub module_type: ModuleType,
    pub requirement: ProcedureRequirement,
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}') == name)
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn get_count(
    row: &csv::StringRecord,
    idx: Option<usize>,
    path: &Path,
    line: usize,
    column: &str,
) -> Result<u32> {
    let Some(raw) = get_string(row, idx) else {
        return Ok(0);
    };
    raw.parse::<u32>().map_err(|_| StandardsError::Csv {
        path: path.to_path_buf(),
        message: format!("line {line}: '{column}' is not a non-negative integer: {raw}"),
    })
}

/// Count columns per dialect: old files use execution codes A/B, new files
/// use roles. Both land on operator/assistant.
fn count_columns(version: SmkVersion) -> (&'static str, &'static str) {
    match version {
        SmkVersion::Old => ("Required Count Code A", "Required Count Code B"),
        SmkVersion::New => ("Required As Operator", "Required As Assistant"),
    }
}

pub fn parse_procedures_csv(
    bytes: &[u8],
    path: &Path,
    version: SmkVersion,
) -> Result<Vec<ProcedureRow>> {
    let csv_error = |e: csv::Error| StandardsError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let (operator_column, assistant_column) = count_columns(version);
    let idx_specialization = header_index(&headers, "Specialization");
    let idx_module = header_index(&headers, "Module");
    let idx_code = header_index(&headers, "Code");
    let idx_name = header_index(&headers, "Name");
    let idx_operator = header_index(&headers, operator_column);
    let idx_assistant = header_index(&headers, assistant_column);

    for (column, idx) in [
        ("Specialization", idx_specialization),
        ("Module", idx_module),
        ("Code", idx_code),
        (operator_column, idx_operator),
        (assistant_column, idx_assistant),
    ] {
        if idx.is_none() {
            return Err(StandardsError::Csv {
                path: path.to_path_buf(),
                message: format!("missing column '{column}' for {version} procedures"),
            });
        }
    }

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        // header is line 1
        let line = offset + 2;
        let Some(code) = get_string(&record, idx_code) else {
            continue;
        };
        let specialization_key = get_string(&record, idx_specialization).ok_or_else(|| {
            StandardsError::Csv {
                path: path.to_path_buf(),
                message: format!("line {line}: procedure {code} has no specialization"),
            }
        })?;
        let module_raw = get_string(&record, idx_module).unwrap_or_default();
        let module_type = ModuleType::parse(&module_raw).ok_or_else(|| StandardsError::Csv {
            path: path.to_path_buf(),
            message: format!("line {line}: unknown module type '{module_raw}'"),
        })?;
        let name = get_string(&record, idx_name).unwrap_or_else(|| code.clone());
        let required_as_operator =
            get_count(&record, idx_operator, path, line, operator_column)?;
        let required_as_assistant =
            get_count(&record, idx_assistant, path, line, assistant_column)?;
        rows.push(ProcedureRow {
            specialization_key,
            module_type,
            requirement: ProcedureRequirement {
                code,
                name,
                required_as_operator,
                required_as_assistant,
            },
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_codes_map_to_roles() {
        let csv = br#""Specialization","Module","Code","Name","Required Count Code A","Required Count Code B"
"kardiologia","basic","P001","Echokardiografia","100","50"
"#;
        let rows = parse_procedures_csv(csv, Path::new("old.csv"), SmkVersion::Old).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].module_type, ModuleType::Basic);
        assert_eq!(rows[0].requirement.required_as_operator, 100);
        assert_eq!(rows[0].requirement.required_as_assistant, 50);
    }

    #[test]
    fn new_file_requires_role_columns() {
        let csv = br#""Specialization","Module","Code","Name","Required Count Code A","Required Count Code B"
"kardiologia","basic","P001","Echokardiografia","100","50"
"#;
        let err = parse_procedures_csv(csv, Path::new("new.csv"), SmkVersion::New).unwrap_err();
        assert!(err.to_string().contains("Required As Operator"));
    }

    #[test]
    fn rejects_negative_counts() {
        let csv = br#""Specialization","Module","Code","Name","Required As Operator","Required As Assistant"
"kardiologia","basic","N001","Echo","-1","5"
"#;
        let err = parse_procedures_csv(csv, Path::new("new.csv"), SmkVersion::New).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
