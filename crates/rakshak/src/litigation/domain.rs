use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of statuses a filing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Pending,
    Dismissed,
    Frivolous,
    Closed,
    Ongoing,
    Withdrawn,
}

impl CaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Dismissed => "Dismissed",
            Self::Frivolous => "Frivolous",
            Self::Closed => "Closed",
            Self::Ongoing => "Ongoing",
            Self::Withdrawn => "Withdrawn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Pending" => Some(Self::Pending),
            "Dismissed" => Some(Self::Dismissed),
            "Frivolous" => Some(Self::Frivolous),
            "Closed" => Some(Self::Closed),
            "Ongoing" => Some(Self::Ongoing),
            "Withdrawn" => Some(Self::Withdrawn),
            _ => None,
        }
    }

    /// Three-way outcome classification used by the dismissal rate.
    pub const fn outcome_bucket(self) -> OutcomeBucket {
        match self {
            Self::Dismissed | Self::Withdrawn | Self::Frivolous => OutcomeBucket::Negative,
            Self::Ongoing | Self::Pending => OutcomeBucket::Active,
            Self::Closed => OutcomeBucket::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeBucket {
    Negative,
    Active,
    Other,
}

/// True when the filing ended in a dismissal, withdrawal or frivolous finding.
/// A record with no status is never negative.
pub fn is_negative_outcome(status: Option<CaseStatus>) -> bool {
    matches!(
        status.map(CaseStatus::outcome_bucket),
        Some(OutcomeBucket::Negative)
    )
}

/// Column a filing lands in on the per-year status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartBucket {
    Dismissed,
    Ongoing,
    Allowed,
}

/// Year chart mapping. Anything that is neither negative nor still running
/// (including a missing status) is shown as allowed.
pub fn chart_bucket(status: Option<CaseStatus>) -> ChartBucket {
    match status {
        Some(CaseStatus::Dismissed | CaseStatus::Withdrawn | CaseStatus::Frivolous) => {
            ChartBucket::Dismissed
        }
        Some(CaseStatus::Ongoing | CaseStatus::Pending) => ChartBucket::Ongoing,
        Some(CaseStatus::Closed) | None => ChartBucket::Allowed,
    }
}

/// One litigation filing. Created at ingestion and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub case_number: String,
    pub petitioner_name: String,
    pub respondent_name: String,
    #[serde(default)]
    pub advocate_name: Option<String>,
    #[serde(default)]
    pub court_name: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub filing_date: Option<NaiveDate>,
    #[serde(default)]
    pub disposal_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<CaseStatus>,
    #[serde(default)]
    pub costs: u64,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl CaseRecord {
    pub fn new(
        case_number: impl Into<String>,
        petitioner_name: impl Into<String>,
        respondent_name: impl Into<String>,
    ) -> Self {
        Self {
            case_number: case_number.into(),
            petitioner_name: petitioner_name.into(),
            respondent_name: respondent_name.into(),
            advocate_name: None,
            court_name: None,
            case_type: None,
            filing_date: None,
            disposal_date: None,
            status: None,
            costs: 0,
            remarks: None,
        }
    }

    pub fn filed_on(mut self, date: NaiveDate) -> Self {
        self.filing_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_court(mut self, court: impl Into<String>) -> Self {
        self.court_name = Some(court.into());
        self
    }

    pub fn with_costs(mut self, costs: u64) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }
}

/// Structured findings from the last judicial-remark analysis of a petitioner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub modus_operandi: String,
    pub judicial_sentiment: String,
    pub critical_excerpts: Vec<String>,
    pub risk_indicators: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

/// Persisted analysis for one petitioner, keyed by case-insensitive name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionerAnalysisRecord {
    pub name: String,
    pub ai_analysis: Option<AiAnalysis>,
}
