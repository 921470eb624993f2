use super::domain::{AiAnalysis, CaseRecord, PetitionerAnalysisRecord};

/// Read-only access to case records.
///
/// Both lookups return every record whose party name matches the query under
/// the store's [`NameMatchPolicy`](super::NameMatchPolicy), ordered by filing
/// date ascending. Records without a filing date sort first.
pub trait CaseRepository: Send + Sync {
    fn find_by_respondent(&self, name: &str) -> Result<Vec<CaseRecord>, RepositoryError>;
    fn find_by_petitioner(&self, name: &str) -> Result<Vec<CaseRecord>, RepositoryError>;
}

/// Upsert-by-name persistence for the last remark analysis of each petitioner.
pub trait PetitionerAnalysisRepository: Send + Sync {
    /// Creates or wholly replaces the analysis for `name` (case-insensitive exact
    /// match). A new record takes `name` as given; an existing one keeps its stored name.
    fn upsert(
        &self,
        name: &str,
        analysis: AiAnalysis,
    ) -> Result<PetitionerAnalysisRecord, RepositoryError>;

    /// First stored record whose name contains `name`, case-insensitively.
    fn find_by_name(&self, name: &str)
        -> Result<Option<PetitionerAnalysisRecord>, RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Sort helper shared by store adapters so every implementation honors the same order.
pub fn sort_by_filing_date(cases: &mut [CaseRecord]) {
    cases.sort_by_key(|case| case.filing_date);
}
