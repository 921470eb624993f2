use super::domain::{CaseRecord, CaseStatus};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum CaseImportError {
    #[error("failed to read case export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid case CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("case {case_number} has unknown status '{value}'")]
    UnknownStatus { case_number: String, value: String },
    #[error("case number {0} appears more than once")]
    DuplicateCaseNumber(String),
    #[error("row {row} is missing a case number")]
    MissingCaseNumber { row: usize },
}

/// Loads case records from a CSV export with camelCase headers.
pub struct CaseImporter;

impl CaseImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CaseRecord>, CaseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CaseRecord>, CaseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<CaseRow>().enumerate() {
            let row = row?;
            if row.case_number.is_empty() {
                return Err(CaseImportError::MissingCaseNumber { row: index + 1 });
            }
            if !seen.insert(row.case_number.clone()) {
                return Err(CaseImportError::DuplicateCaseNumber(row.case_number));
            }
            records.push(row.into_record()?);
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaseRow {
    case_number: String,
    petitioner_name: String,
    respondent_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    advocate_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    court_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    case_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    filing_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    disposal_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    costs: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    remarks: Option<String>,
}

impl CaseRow {
    fn into_record(self) -> Result<CaseRecord, CaseImportError> {
        let status = match self.status {
            Some(value) => Some(CaseStatus::parse(&value).ok_or_else(|| {
                CaseImportError::UnknownStatus {
                    case_number: self.case_number.clone(),
                    value,
                }
            })?),
            None => None,
        };

        let filing_date = self.filing_date.as_deref().and_then(|raw| {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                warn!(case_number = %self.case_number, value = %raw, "unparseable filing date; case left out of date statistics");
            }
            parsed
        });
        let disposal_date = self.disposal_date.as_deref().and_then(parse_date);

        let costs = match self.costs.as_deref() {
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value >= 0.0 => value as u64,
                _ => {
                    warn!(case_number = %self.case_number, value = %raw, "invalid costs; defaulting to zero");
                    0
                }
            },
            None => 0,
        };

        Ok(CaseRecord {
            case_number: self.case_number,
            petitioner_name: self.petitioner_name,
            respondent_name: self.respondent_name,
            advocate_name: self.advocate_name,
            court_name: self.court_name,
            case_type: self.case_type,
            filing_date,
            disposal_date,
            status,
            costs,
            remarks: self.remarks,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (date part kept).
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}
