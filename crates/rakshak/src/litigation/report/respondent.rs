use super::super::domain::{CaseRecord, CaseStatus};
use super::super::scoring::{
    round_to_tenth, status_by_year, CaseMetrics, Perspective, RiskTier,
};
use super::views::{
    display_costs, display_date, display_interval, RespondentCaseView, RespondentReport,
    RespondentStats, NOT_AVAILABLE, RISK_NOTE,
};

/// Number of counterparties listed in the distribution block.
pub const TOP_PETITIONERS: usize = 5;

const BASELINE_SUMMARY: &str = "Litigation patterns appear consistent with baseline industrial exposure. No extensive volume clustering from singular entities detected.";
const CROSS_REFERENCED_SUMMARY: &str =
    "Target identified as a petitioner in other records. No respondent history detected.";
const NO_HISTORY_SUMMARY: &str = "No prior litigation pressure detected for this entity.";

/// Report for a respondent with no matching filings.
///
/// `petitioner_alias` is the petitioner name of a record that matched the
/// query on the filing side, if any; it becomes the display name.
pub fn zero_state_report(query: &str, petitioner_alias: Option<&str>) -> RespondentReport {
    let tier = RiskTier::Normal;
    RespondentReport {
        respondent_name: petitioner_alias.unwrap_or(query).to_string(),
        found_as_petitioner: petitioner_alias.is_some(),
        pressure_score: 0,
        risk_tier: tier,
        risk_level: tier.label(),
        risk_note: RISK_NOTE,
        summary: if petitioner_alias.is_some() {
            CROSS_REFERENCED_SUMMARY.to_string()
        } else {
            NO_HISTORY_SUMMARY.to_string()
        },
        stats: RespondentStats {
            total_cases: 0,
            unique_petitioners: 0,
            repeat_petitioners: 0,
            dismissal_rate: 0.0,
            avg_interval: NOT_AVAILABLE.to_string(),
            total_costs: "₹0".to_string(),
        },
        pressure: None,
        petitioner_distribution: Vec::new(),
        status_distribution: Vec::new(),
        cases: Vec::new(),
    }
}

/// Full respondent report for filings ordered by date ascending.
/// Returns `None` when `cases` is empty.
pub fn build_respondent_report(query: &str, cases: &[CaseRecord]) -> Option<RespondentReport> {
    let metrics = CaseMetrics::compute(cases, Perspective::Respondent)?;
    let breakdown = metrics.pressure_inputs().breakdown();
    let score = breakdown.score;
    let tier = RiskTier::from_score(score);

    let summary = match metrics.top_counterparty() {
        Some(top) if tier == RiskTier::High => format!(
            "Significant concentrated pattern detected. {} accounts for {:.1}% of identified filings. Primary temporal clusters indicate non-random distribution.",
            top.name, top.percentage
        ),
        _ => BASELINE_SUMMARY.to_string(),
    };

    // same-day filings only: no meaningful cadence to show
    let avg_interval = display_interval(
        metrics
            .intervals
            .average_days
            .filter(|days| *days > 0.0)
            .map(|days| days / 30.0),
    );
    let total_costs: u64 = cases.iter().map(|case| case.costs).sum();

    let respondent_name = cases
        .first()
        .map(|case| case.respondent_name.clone())
        .unwrap_or_else(|| query.to_string());

    Some(RespondentReport {
        respondent_name,
        found_as_petitioner: false,
        pressure_score: score,
        risk_tier: tier,
        risk_level: tier.label(),
        risk_note: RISK_NOTE,
        summary,
        stats: RespondentStats {
            total_cases: metrics.total_cases,
            unique_petitioners: metrics.unique_counterparties(),
            repeat_petitioners: metrics.repeat_filers,
            dismissal_rate: round_to_tenth(metrics.dismissal_rate),
            avg_interval,
            total_costs: display_costs(total_costs),
        },
        pressure: Some(breakdown),
        petitioner_distribution: metrics.top(TOP_PETITIONERS),
        status_distribution: status_by_year(cases),
        cases: cases.iter().rev().map(case_view).collect(),
    })
}

fn case_view(case: &CaseRecord) -> RespondentCaseView {
    RespondentCaseView {
        cnr_number: if case.case_number.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            case.case_number.clone()
        },
        petitioner: case.petitioner_name.clone(),
        court_name: case
            .court_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        filing_date: display_date(case.filing_date),
        status: case.status.unwrap_or(CaseStatus::Ongoing).label(),
        costs: display_costs(case.costs),
        remarks: case.remarks.clone(),
    }
}
