use metrics_exporter_prometheus::PrometheusHandle;
use rakshak::error::AppError;
use rakshak::litigation::{
    same_name, sort_by_filing_date, AiAnalysis, CaseImporter, CaseRecord, CaseRepository,
    NameMatchPolicy, PetitionerAnalysisRecord, PetitionerAnalysisRepository, RepositoryError,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only case store over records loaded at start-up.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCaseStore {
    records: Arc<Vec<CaseRecord>>,
    policy: NameMatchPolicy,
}

impl InMemoryCaseStore {
    pub(crate) fn new(records: Vec<CaseRecord>, policy: NameMatchPolicy) -> Self {
        Self {
            records: Arc::new(records),
            policy,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    fn select<F>(&self, party: F, name: &str) -> Vec<CaseRecord>
    where
        F: Fn(&CaseRecord) -> &str,
    {
        let mut found: Vec<CaseRecord> = self
            .records
            .iter()
            .filter(|case| self.policy.matches(party(case), name))
            .cloned()
            .collect();
        sort_by_filing_date(&mut found);
        found
    }
}

impl CaseRepository for InMemoryCaseStore {
    fn find_by_respondent(&self, name: &str) -> Result<Vec<CaseRecord>, RepositoryError> {
        Ok(self.select(|case| case.respondent_name.as_str(), name))
    }

    fn find_by_petitioner(&self, name: &str) -> Result<Vec<CaseRecord>, RepositoryError> {
        Ok(self.select(|case| case.petitioner_name.as_str(), name))
    }
}

/// Petitioner analyses held for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPetitionerStore {
    records: Arc<Mutex<Vec<PetitionerAnalysisRecord>>>,
    policy: NameMatchPolicy,
}

impl InMemoryPetitionerStore {
    pub(crate) fn new(policy: NameMatchPolicy) -> Self {
        Self {
            records: Arc::default(),
            policy,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<PetitionerAnalysisRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("petitioner store lock poisoned".into()))
    }
}

impl PetitionerAnalysisRepository for InMemoryPetitionerStore {
    fn upsert(
        &self,
        name: &str,
        analysis: AiAnalysis,
    ) -> Result<PetitionerAnalysisRecord, RepositoryError> {
        let mut guard = self.lock()?;
        // existing records keep their stored spelling
        if let Some(existing) = guard.iter_mut().find(|record| same_name(&record.name, name)) {
            existing.ai_analysis = Some(analysis);
            return Ok(existing.clone());
        }

        let record = PetitionerAnalysisRecord {
            name: name.trim().to_string(),
            ai_analysis: Some(analysis),
        };
        guard.push(record.clone());
        Ok(record)
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<PetitionerAnalysisRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .iter()
            .find(|record| same_name(&record.name, name))
            .or_else(|| {
                guard
                    .iter()
                    .find(|record| self.policy.matches(&record.name, name))
            })
            .cloned())
    }
}

pub(crate) fn load_cases(path: &Path) -> Result<Vec<CaseRecord>, AppError> {
    CaseImporter::from_path(path).map_err(AppError::from)
}
