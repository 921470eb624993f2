use super::super::domain::{AiAnalysis, CaseRecord};
use super::super::scoring::{round_to_tenth, volume_by_year, CaseMetrics, Perspective};
use super::views::{display_interval, PetitionerCaseView, PetitionerProfile, PetitionerStats};

/// Number of respondents listed in the target distribution.
pub const TOP_TARGETS: usize = 5;

/// Filing-side profile of a petitioner. Unlike the respondent report there is
/// no zero-state: an empty case set yields `None`. Cases stay in ascending
/// date order with their stored values.
pub fn build_petitioner_profile(
    query: &str,
    cases: &[CaseRecord],
    ai_analysis: Option<AiAnalysis>,
) -> Option<PetitionerProfile> {
    let metrics = CaseMetrics::compute(cases, Perspective::Petitioner)?;
    let top = metrics.top_counterparty()?;

    let stats = PetitionerStats {
        total_cases: metrics.total_cases,
        unique_respondents: metrics.unique_counterparties(),
        dismissal_rate: round_to_tenth(metrics.dismissal_rate),
        avg_interval: display_interval(metrics.intervals.average_months()),
        concentration_score: round_to_tenth(metrics.top_counterparty_share() * 100.0),
        top_target: top.name.clone(),
    };

    let name = cases
        .first()
        .map(|case| case.petitioner_name.clone())
        .unwrap_or_else(|| query.to_string());

    Some(PetitionerProfile {
        name,
        stats,
        volume_data: volume_by_year(cases),
        target_distribution: metrics.top(TOP_TARGETS),
        cases: cases
            .iter()
            .map(|case| PetitionerCaseView {
                respondent: case.respondent_name.clone(),
                filing_date: case.filing_date,
                status: case.status,
                remarks: case.remarks.clone(),
            })
            .collect(),
        ai_analysis,
    })
}
