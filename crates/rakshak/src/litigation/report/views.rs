use super::super::domain::{AiAnalysis, CaseStatus};
use super::super::scoring::{
    round_to_tenth, CounterpartyShare, PressureBreakdown, RiskTier, YearStatusTally, YearVolume,
};
use chrono::NaiveDate;
use serde::Serialize;

pub const RISK_NOTE: &str = "Statistical Pattern Indicator – Not a legal determination.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentReport {
    pub respondent_name: String,
    pub found_as_petitioner: bool,
    #[serde(rename = "vpiScore")]
    pub pressure_score: u8,
    pub risk_tier: RiskTier,
    pub risk_level: &'static str,
    pub risk_note: &'static str,
    pub summary: String,
    pub stats: RespondentStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<PressureBreakdown>,
    pub petitioner_distribution: Vec<CounterpartyShare>,
    pub status_distribution: Vec<YearStatusTally>,
    /// Most recent filing first.
    pub cases: Vec<RespondentCaseView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentStats {
    pub total_cases: usize,
    pub unique_petitioners: usize,
    pub repeat_petitioners: usize,
    pub dismissal_rate: f64,
    pub avg_interval: String,
    pub total_costs: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentCaseView {
    pub cnr_number: String,
    pub petitioner: String,
    pub court_name: String,
    pub filing_date: String,
    pub status: &'static str,
    pub costs: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionerProfile {
    pub name: String,
    pub stats: PetitionerStats,
    pub volume_data: Vec<YearVolume>,
    pub target_distribution: Vec<CounterpartyShare>,
    /// Oldest filing first, fields as stored.
    pub cases: Vec<PetitionerCaseView>,
    pub ai_analysis: Option<AiAnalysis>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionerStats {
    pub total_cases: usize,
    pub unique_respondents: usize,
    pub dismissal_rate: f64,
    pub avg_interval: String,
    pub concentration_score: f64,
    pub top_target: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetitionerCaseView {
    pub respondent: String,
    pub filing_date: Option<NaiveDate>,
    pub status: Option<CaseStatus>,
    pub remarks: Option<String>,
}

pub(crate) const NOT_AVAILABLE: &str = "N/A";

/// `05 Feb 2024` style, `N/A` when the filing has no date.
pub(crate) fn display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Whole thousands of rupees, truncated.
pub(crate) fn display_costs(amount: u64) -> String {
    format!("₹{}K", amount / 1000)
}

pub(crate) fn display_interval(months: Option<f64>) -> String {
    match months {
        Some(months) => format!("{:.1}mo", round_to_tenth(months)),
        None => NOT_AVAILABLE.to_string(),
    }
}
