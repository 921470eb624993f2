use super::super::domain::{AiAnalysis, CaseRecord};
use super::super::repository::{PetitionerAnalysisRepository, RepositoryError};
use super::model::{ModelError, TextAnalysisModel};
use super::parser::{
    aggregate_remarks, no_remarks_analysis, parse_findings, task_payload, RemarkFindings,
    SYSTEM_INSTRUCTION,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkAnalysisSource {
    /// Cases carried no remarks; canned analysis, nothing stored.
    NoRemarks,
    /// Model output parsed and stored.
    Model,
    /// Model output unreadable; fallback analysis stored.
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemarkAnalysisOutcome {
    pub source: RemarkAnalysisSource,
    pub analysis: AiAnalysis,
}

impl RemarkAnalysisOutcome {
    pub fn message(&self) -> &'static str {
        match self.source {
            RemarkAnalysisSource::NoRemarks => "No judicial remarks found to analyze",
            RemarkAnalysisSource::Model | RemarkAnalysisSource::Fallback => {
                "Analysis completed successfully"
            }
        }
    }

    pub fn persisted(&self) -> bool {
        self.source != RemarkAnalysisSource::NoRemarks
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemarkAnalysisError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Sends a petitioner's judicial remarks to the text-analysis model and stores
/// the structured result.
///
/// Unparseable model output is replaced by a fixed fallback and still stored.
/// A failed model call is returned as an error and nothing is stored.
pub struct RemarkAnalyzer<P, M> {
    analyses: Arc<P>,
    model: Arc<M>,
}

impl<P, M> RemarkAnalyzer<P, M>
where
    P: PetitionerAnalysisRepository + 'static,
    M: TextAnalysisModel + 'static,
{
    pub fn new(analyses: Arc<P>, model: Arc<M>) -> Self {
        Self { analyses, model }
    }

    /// `cases` are the petitioner's filings in case order; `name` is the name as requested.
    pub async fn analyze(
        &self,
        name: &str,
        cases: &[CaseRecord],
    ) -> Result<RemarkAnalysisOutcome, RemarkAnalysisError> {
        let Some(remarks) = aggregate_remarks(cases) else {
            info!(petitioner = %name, "no judicial remarks to analyze");
            return Ok(RemarkAnalysisOutcome {
                source: RemarkAnalysisSource::NoRemarks,
                analysis: no_remarks_analysis(Utc::now()),
            });
        };

        let payload = task_payload(name, &remarks);
        let raw = self.model.generate(SYSTEM_INSTRUCTION, &payload).await?;

        let (findings, source) = match parse_findings(&raw) {
            Ok(findings) => (findings, RemarkAnalysisSource::Model),
            Err(err) => {
                warn!(petitioner = %name, error = %err, output = %raw, "model output was not valid analysis JSON");
                (RemarkFindings::parse_fallback(), RemarkAnalysisSource::Fallback)
            }
        };

        let stored = self
            .analyses
            .upsert(name, findings.into_analysis(Utc::now()))?;
        info!(petitioner = %stored.name, ?source, "stored judicial remark analysis");

        // an upsert always leaves an analysis behind
        let analysis = stored
            .ai_analysis
            .ok_or_else(|| RepositoryError::Unavailable("upsert returned no analysis".into()))?;

        Ok(RemarkAnalysisOutcome { source, analysis })
    }
}
