//! Litigation pressure scoring and petitioner intelligence over court-case records.
//!
//! Case records come from an external store through [`CaseRepository`]; the
//! scoring engine is pure, the report builders assemble its output into the
//! respondent and petitioner views, and the remark analyzer delegates free-text
//! judicial remarks to an external model behind [`TextAnalysisModel`].

pub mod domain;
pub mod import;
pub mod matching;
pub mod remarks;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    chart_bucket, is_negative_outcome, AiAnalysis, CaseRecord, CaseStatus, ChartBucket,
    OutcomeBucket, PetitionerAnalysisRecord,
};
pub use import::{CaseImportError, CaseImporter};
pub use matching::{same_name, NameMatchPolicy};
pub use remarks::{
    GeminiClient, ModelError, RemarkAnalysisOutcome, RemarkAnalysisSource, RemarkAnalyzer,
    TextAnalysisModel,
};
pub use report::{PetitionerProfile, RespondentReport};
pub use repository::{
    sort_by_filing_date, CaseRepository, PetitionerAnalysisRepository, RepositoryError,
};
pub use router::case_router;
pub use scoring::{CaseMetrics, Perspective, PressureInputs, RiskTier};
pub use service::{LitigationService, LitigationServiceError};
