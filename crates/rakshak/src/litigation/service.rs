use std::sync::Arc;

use tracing::info;

use super::remarks::{
    ModelError, RemarkAnalysisError, RemarkAnalysisOutcome, RemarkAnalyzer, TextAnalysisModel,
};
use super::report::{
    build_petitioner_profile, build_respondent_report, zero_state_report, PetitionerProfile,
    RespondentReport,
};
use super::repository::{CaseRepository, PetitionerAnalysisRepository, RepositoryError};

/// Service composing the case store, analysis store, report builders and remark analyzer.
pub struct LitigationService<C, P, M> {
    cases: Arc<C>,
    analyses: Arc<P>,
    analyzer: RemarkAnalyzer<P, M>,
}

impl<C, P, M> LitigationService<C, P, M>
where
    C: CaseRepository + 'static,
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    pub fn new(cases: Arc<C>, analyses: Arc<P>, model: Arc<M>) -> Self {
        let analyzer = RemarkAnalyzer::new(analyses.clone(), model);
        Self {
            cases,
            analyses,
            analyzer,
        }
    }

    /// Pressure report for everyone the name matches on the respondent side.
    ///
    /// With no respondent-side filings the name is cross-checked against
    /// petitioners and a zero-state report is returned instead of an error.
    pub fn respondent_report(&self, name: &str) -> Result<RespondentReport, LitigationServiceError> {
        let name = required_name(name)?;
        let cases = self.cases.find_by_respondent(name)?;

        if let Some(report) = build_respondent_report(name, &cases) {
            info!(
                respondent = %report.respondent_name,
                cases = report.stats.total_cases,
                score = report.pressure_score,
                tier = report.risk_level,
                "built respondent report"
            );
            return Ok(report);
        }

        let as_petitioner = self.cases.find_by_petitioner(name)?;
        let alias = as_petitioner
            .first()
            .map(|case| case.petitioner_name.as_str());
        info!(query = %name, found_as_petitioner = alias.is_some(), "no respondent history");
        Ok(zero_state_report(name, alias))
    }

    /// Filing-side profile, `None` when the name matches no petitioner.
    pub fn petitioner_profile(
        &self,
        name: &str,
    ) -> Result<Option<PetitionerProfile>, LitigationServiceError> {
        let name = required_name(name)?;
        let cases = self.cases.find_by_petitioner(name)?;
        if cases.is_empty() {
            info!(query = %name, "no petitioner history");
            return Ok(None);
        }

        let ai_analysis = self
            .analyses
            .find_by_name(name)?
            .and_then(|record| record.ai_analysis);
        let profile = build_petitioner_profile(name, &cases, ai_analysis);
        if let Some(profile) = &profile {
            info!(
                petitioner = %profile.name,
                cases = profile.stats.total_cases,
                top_target = %profile.stats.top_target,
                "built petitioner profile"
            );
        }
        Ok(profile)
    }

    /// Runs the judicial-remark analysis for a petitioner and stores the result.
    pub async fn analyze_petitioner(
        &self,
        name: &str,
    ) -> Result<RemarkAnalysisOutcome, LitigationServiceError> {
        let name = required_name(name)?;
        let cases = self.cases.find_by_petitioner(name)?;
        if cases.is_empty() {
            return Err(LitigationServiceError::PetitionerNotFound(name.to_string()));
        }

        let outcome = self.analyzer.analyze(name, &cases).await?;
        Ok(outcome)
    }
}

fn required_name(name: &str) -> Result<&str, LitigationServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(LitigationServiceError::MissingName)
    } else {
        Ok(trimmed)
    }
}

/// Error raised by the litigation service.
#[derive(Debug, thiserror::Error)]
pub enum LitigationServiceError {
    #[error("a subject name is required")]
    MissingName,
    #[error("no cases found for petitioner '{0}'")]
    PetitionerNotFound(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl From<RemarkAnalysisError> for LitigationServiceError {
    fn from(value: RemarkAnalysisError) -> Self {
        match value {
            RemarkAnalysisError::Model(err) => Self::Model(err),
            RemarkAnalysisError::Repository(err) => Self::Repository(err),
        }
    }
}
