use crate::infra::{load_cases, InMemoryCaseStore, InMemoryPetitionerStore};
use clap::Args;
use rakshak::config::ModelConfig;
use rakshak::error::AppError;
use rakshak::litigation::{
    GeminiClient, LitigationService, NameMatchPolicy, PetitionerProfile, RespondentReport,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RespondentReportArgs {
    /// Respondent name to look up (case-insensitive)
    #[arg(long)]
    pub(crate) name: String,
    /// CSV export of case records
    #[arg(long)]
    pub(crate) cases: PathBuf,
    /// Name matching policy: substring, exact or token
    #[arg(long = "match", default_value = "substring", value_parser = parse_policy)]
    pub(crate) match_policy: NameMatchPolicy,
    /// Include the full case listing in the output
    #[arg(long)]
    pub(crate) list_cases: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PetitionerReportArgs {
    /// Petitioner name to look up (case-insensitive)
    #[arg(long)]
    pub(crate) name: String,
    /// CSV export of case records
    #[arg(long)]
    pub(crate) cases: PathBuf,
    /// Name matching policy: substring, exact or token
    #[arg(long = "match", default_value = "substring", value_parser = parse_policy)]
    pub(crate) match_policy: NameMatchPolicy,
}

fn parse_policy(raw: &str) -> Result<NameMatchPolicy, String> {
    NameMatchPolicy::parse(raw)
        .ok_or_else(|| format!("unknown match policy '{raw}' (expected substring, exact or token)"))
}

type OfflineService = LitigationService<InMemoryCaseStore, InMemoryPetitionerStore, GeminiClient>;

fn offline_service(cases: &Path, policy: NameMatchPolicy) -> Result<OfflineService, AppError> {
    let records = load_cases(cases)?;
    Ok(LitigationService::new(
        Arc::new(InMemoryCaseStore::new(records, policy)),
        Arc::new(InMemoryPetitionerStore::new(policy)),
        Arc::new(GeminiClient::new(&ModelConfig::default())),
    ))
}

pub(crate) fn run_respondent_report(args: RespondentReportArgs) -> Result<(), AppError> {
    let service = offline_service(&args.cases, args.match_policy)?;
    let report = service.respondent_report(&args.name)?;
    render_respondent_report(&report, args.list_cases);
    Ok(())
}

pub(crate) fn run_petitioner_report(args: PetitionerReportArgs) -> Result<(), AppError> {
    let service = offline_service(&args.cases, args.match_policy)?;
    match service.petitioner_profile(&args.name)? {
        Some(profile) => render_petitioner_profile(&profile),
        None => println!("No filings found for petitioner '{}'", args.name.trim()),
    }
    Ok(())
}

pub(crate) fn render_respondent_report(report: &RespondentReport, list_cases: bool) {
    println!("Litigation pressure report: {}", report.respondent_name);
    println!(
        "Pressure score: {} / 100 ({})",
        report.pressure_score, report.risk_level
    );
    println!("{}", report.risk_note);
    println!("\n{}", report.summary);

    let stats = &report.stats;
    println!("\nFiling statistics");
    println!(
        "- {} cases | {} unique petitioners | {} repeat petitioners",
        stats.total_cases, stats.unique_petitioners, stats.repeat_petitioners
    );
    println!(
        "- Dismissal rate {:.1}% | Avg interval {} | Costs {}",
        stats.dismissal_rate, stats.avg_interval, stats.total_costs
    );

    if let Some(pressure) = &report.pressure {
        println!("\nScore breakdown");
        for component in &pressure.components {
            println!(
                "- {:?}: signal {:.2} x {:.0} = {:.1} pts",
                component.factor, component.signal, component.weight, component.points
            );
        }
    }

    if !report.petitioner_distribution.is_empty() {
        println!("\nTop petitioners");
        for share in &report.petitioner_distribution {
            println!("- {}: {} cases ({:.1}%)", share.name, share.count, share.percentage);
        }
    }

    if !report.status_distribution.is_empty() {
        println!("\nOutcomes by year");
        for year in &report.status_distribution {
            println!(
                "- {}: {} dismissed, {} ongoing, {} allowed",
                year.year, year.dismissed, year.ongoing, year.allowed
            );
        }
    }

    if list_cases {
        println!("\nCases (most recent first)");
        for case in &report.cases {
            println!(
                "- {} | {} | {} | filed {} | {} | costs {}",
                case.cnr_number,
                case.petitioner,
                case.court_name,
                case.filing_date,
                case.status,
                case.costs
            );
        }
    }
}

pub(crate) fn render_petitioner_profile(profile: &PetitionerProfile) {
    let stats = &profile.stats;
    println!("Petitioner profile: {}", profile.name);
    println!(
        "- {} cases against {} respondents | dismissal rate {:.1}% | avg interval {}",
        stats.total_cases, stats.unique_respondents, stats.dismissal_rate, stats.avg_interval
    );
    println!(
        "- Top target: {} ({:.1}% of filings)",
        stats.top_target, stats.concentration_score
    );

    if !profile.volume_data.is_empty() {
        println!("\nFilings per year");
        for volume in &profile.volume_data {
            println!("- {}: {}", volume.year, volume.count);
        }
    }

    println!("\nTargets");
    for share in &profile.target_distribution {
        println!("- {}: {} cases ({:.1}%)", share.name, share.count, share.percentage);
    }

    println!("\nCases (oldest first)");
    for case in &profile.cases {
        let filed = case
            .filing_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "undated".to_string());
        let status = case.status.map(|status| status.label()).unwrap_or("unknown");
        println!("- {} | filed {} | {}", case.respondent, filed, status);
    }

    match &profile.ai_analysis {
        Some(analysis) => {
            println!(
                "\nJudicial remark analysis (updated {})",
                analysis.last_updated.format("%Y-%m-%d %H:%M UTC")
            );
            println!("- Modus operandi: {}", analysis.modus_operandi);
            println!("- Judicial sentiment: {}", analysis.judicial_sentiment);
            for indicator in &analysis.risk_indicators {
                println!("- Risk indicator: {}", indicator);
            }
        }
        None => println!("\nJudicial remark analysis: not yet run"),
    }
}
