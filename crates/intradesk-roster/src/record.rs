//! Employee records and CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::RosterError;

/// Required columns as `(canonical header, legacy header)` pairs.
///
/// Either spelling satisfies the requirement.
pub const REQUIRED_COLUMNS: &[(&str, &str)] = &[
    ("employee_id", "社員ID"),
    ("full_name", "氏名（フルネーム）"),
    ("gender", "性別"),
    ("age", "年齢"),
    ("department", "部署"),
    ("title", "役職"),
    ("employment_type", "従業員区分"),
    ("hire_date", "入社日"),
    ("email", "メールアドレス"),
    ("skills", "スキルセット"),
    ("certifications", "保有資格"),
    ("university", "大学名"),
    ("faculty", "学部・学科"),
    ("graduation_date", "卒業年月日"),
];

/// One row of the employee roster.
///
/// Empty cells read as `None`; an age that is not a whole number also reads
/// as `None` rather than failing the row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeRecord {
    #[serde(alias = "社員ID")]
    pub employee_id: Option<String>,
    #[serde(alias = "氏名（フルネーム）")]
    pub full_name: Option<String>,
    #[serde(alias = "性別")]
    pub gender: Option<String>,
    #[serde(alias = "年齢", default, deserialize_with = "csv::invalid_option")]
    pub age: Option<u32>,
    #[serde(alias = "部署")]
    pub department: Option<String>,
    #[serde(alias = "役職")]
    pub title: Option<String>,
    #[serde(alias = "従業員区分")]
    pub employment_type: Option<String>,
    #[serde(alias = "入社日")]
    pub hire_date: Option<String>,
    #[serde(alias = "メールアドレス")]
    pub email: Option<String>,
    #[serde(alias = "スキルセット")]
    pub skills: Option<String>,
    #[serde(alias = "保有資格")]
    pub certifications: Option<String>,
    #[serde(alias = "大学名")]
    pub university: Option<String>,
    #[serde(alias = "学部・学科")]
    pub faculty: Option<String>,
    #[serde(alias = "卒業年月日")]
    pub graduation_date: Option<String>,
}

/// Read every record from a roster CSV on disk.
pub fn read_records(path: &Path) -> Result<Vec<EmployeeRecord>, RosterError> {
    let label = path.display().to_string();
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: label.clone(),
        source,
    })?;
    read_records_from(file, &label)
}

/// Read every record from any UTF-8 CSV source.
///
/// `path` is only used to label errors.
pub fn read_records_from<R: Read>(
    source: R,
    path: &str,
) -> Result<Vec<EmployeeRecord>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|source| RosterError::Csv {
            path: path.to_string(),
            source,
        })?
        .clone();
    let present: Vec<&str> = headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}'))
        .collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|(canonical, legacy)| !present.iter().any(|h| h == canonical || h == legacy))
        .map(|(canonical, _)| canonical.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RosterError::MissingColumns {
            path: path.to_string(),
            missing,
        });
    }

    let records = reader
        .deserialize()
        .collect::<Result<Vec<EmployeeRecord>, csv::Error>>()
        .map_err(|source| RosterError::Csv {
            path: path.to_string(),
            source,
        })?;

    debug!(path, records = records.len(), "Roster records read");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "employee_id,full_name,gender,age,department,title,employment_type,hire_date,email,skills,certifications,university,faculty,graduation_date";

    #[test]
    fn test_reads_english_headers() {
        let csv = format!(
            "{HEADER}\nE001,Alice Smith,Female,34,Sales,Manager,Full-time,2015-04-01,alice@example.com,Negotiation,CPA,Tokyo University,Economics,2013-03-31\n"
        );
        let records = read_records_from(csv.as_bytes(), "inline").unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.employee_id.as_deref(), Some("E001"));
        assert_eq!(r.full_name.as_deref(), Some("Alice Smith"));
        assert_eq!(r.age, Some(34));
        assert_eq!(r.department.as_deref(), Some("Sales"));
        assert_eq!(r.graduation_date.as_deref(), Some("2013-03-31"));
    }

    #[test]
    fn test_reads_legacy_headers() {
        let csv = "社員ID,氏名（フルネーム）,性別,年齢,部署,役職,従業員区分,入社日,メールアドレス,スキルセット,保有資格,大学名,学部・学科,卒業年月日\n\
                   E010,山田太郎,男性,41,人事部,部長,正社員,2005-04-01,yamada@example.com,労務管理,社会保険労務士,京都大学,法学部,2004-03-31\n";
        let records = read_records_from(csv.as_bytes(), "inline").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name.as_deref(), Some("山田太郎"));
        assert_eq!(records[0].department.as_deref(), Some("人事部"));
        assert_eq!(records[0].age, Some(41));
    }

    #[test]
    fn test_empty_cells_read_as_none() {
        let csv = format!("{HEADER}\nE002,Bob,,,Sales,,,,,,,,,\n");
        let records = read_records_from(csv.as_bytes(), "inline").unwrap();
        let r = &records[0];
        assert_eq!(r.gender, None);
        assert_eq!(r.age, None);
        assert_eq!(r.title, None);
        assert_eq!(r.graduation_date, None);
    }

    #[test]
    fn test_non_numeric_age_reads_as_none() {
        let csv = format!("{HEADER}\nE003,Carol,Female,unknown,HR,Staff,Contract,,,,,,,\n");
        let records = read_records_from(csv.as_bytes(), "inline").unwrap();
        assert_eq!(records[0].age, None);
        assert_eq!(records[0].employment_type.as_deref(), Some("Contract"));
    }

    #[test]
    fn test_missing_columns_reported() {
        let csv = "employee_id,full_name,department\nE001,Alice,Sales\n";
        let err = read_records_from(csv.as_bytes(), "inline").unwrap_err();
        match err {
            RosterError::MissingColumns { missing, .. } => {
                assert!(missing.contains(&"email".to_string()));
                assert!(missing.contains(&"age".to_string()));
                assert!(!missing.contains(&"department".to_string()));
            }
            other => panic!("Expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let csv = format!("{HEADER}\nE001,Alice,Female\n");
        let err = read_records_from(csv.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, RosterError::Csv { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_records(Path::new("/nonexistent/roster.csv")).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = read_records_from(format!("{HEADER}\n").as_bytes(), "inline").unwrap();
        assert!(records.is_empty());
    }
}
