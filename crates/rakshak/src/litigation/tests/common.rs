use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{Duration, NaiveDate};
use serde_json::Value;

use crate::litigation::domain::{
    AiAnalysis, CaseRecord, CaseStatus, PetitionerAnalysisRecord,
};
use crate::litigation::matching::{same_name, NameMatchPolicy};
use crate::litigation::remarks::{ModelError, TextAnalysisModel};
use crate::litigation::repository::{
    sort_by_filing_date, CaseRepository, PetitionerAnalysisRepository, RepositoryError,
};
use crate::litigation::{case_router, LitigationService};

pub(super) fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date") + Duration::days(offset)
}

/// Four clustered, adversely decided filings by one petitioner and one later pending filing.
pub(super) fn safestreet_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord::new("CNR-SS-001", "Anil Kumar", "SafeStreet Infra Ltd")
            .filed_on(day(0))
            .with_status(CaseStatus::Dismissed)
            .with_court("Bombay High Court")
            .with_costs(65_000)
            .with_remarks("Vexatious filing; petitioner cautioned for abuse of process."),
        CaseRecord::new("CNR-SS-002", "Anil Kumar", "SafeStreet Infra Ltd")
            .filed_on(day(8))
            .with_status(CaseStatus::Frivolous)
            .with_court("Delhi High Court")
            .with_costs(40_500)
            .with_remarks("Repetitive litigation on same facts; dismissed as frivolous."),
        CaseRecord::new("CNR-SS-003", "Anil Kumar", "SafeStreet Infra Ltd")
            .filed_on(day(17))
            .with_status(CaseStatus::Dismissed)
            .with_remarks("   "),
        CaseRecord::new("CNR-SS-004", "Anil Kumar", "SafeStreet Infra Ltd")
            .filed_on(day(25))
            .with_status(CaseStatus::Frivolous)
            .with_costs(10_000),
        CaseRecord::new("CNR-SS-005", "Suman Rawat", "SafeStreet Infra Ltd").filed_on(day(225)),
    ]
}

pub(super) fn quiet_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord::new("CNR-MB-001", "Ravi Iyer", "Metro Builders")
            .filed_on(day(0))
            .with_status(CaseStatus::Closed),
        CaseRecord::new("CNR-MB-002", "Leela Nair", "Metro Builders")
            .filed_on(day(140))
            .with_status(CaseStatus::Ongoing),
        CaseRecord::new("CNR-MB-003", "Farhan Ali", "Metro Builders")
            .filed_on(day(400))
            .with_status(CaseStatus::Closed),
    ]
}

pub(super) fn all_cases() -> Vec<CaseRecord> {
    let mut cases = safestreet_cases();
    cases.extend(quiet_cases());
    cases
}

pub(super) fn sample_analysis() -> AiAnalysis {
    AiAnalysis {
        modus_operandi: "Serial writ petitions against one infrastructure firm.".to_string(),
        judicial_sentiment: "Benches repeatedly found the filings meritless.".to_string(),
        critical_excerpts: vec!["dismissed as frivolous".to_string()],
        risk_indicators: vec!["High dismissal rate".to_string()],
        last_updated: chrono::Utc::now(),
    }
}

pub(super) const VALID_MODEL_OUTPUT: &str = "```json\n{\"modus_operandi\":\"Clustered filings against a single respondent.\",\"judicial_sentiment\":\"Courts describe the petitions as repetitive.\",\"critical_excerpts\":[\"dismissed as frivolous\",\"cautioned for abuse of process\"],\"risk_indicators\":[\"80% adverse outcomes\",\"Four filings in 25 days\",\"Costs imposed\"]}\n```";

pub(super) struct MemoryCaseStore {
    records: Vec<CaseRecord>,
    policy: NameMatchPolicy,
}

impl MemoryCaseStore {
    pub(super) fn new(records: Vec<CaseRecord>) -> Self {
        Self::with_policy(records, NameMatchPolicy::Substring)
    }

    pub(super) fn with_policy(records: Vec<CaseRecord>, policy: NameMatchPolicy) -> Self {
        Self { records, policy }
    }

    fn select(&self, party: impl Fn(&CaseRecord) -> &str, name: &str) -> Vec<CaseRecord> {
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

impl CaseRepository for MemoryCaseStore {
    fn find_by_respondent(&self, name: &str) -> Result<Vec<CaseRecord>, RepositoryError> {
        Ok(self.select(|case| case.respondent_name.as_str(), name))
    }

    fn find_by_petitioner(&self, name: &str) -> Result<Vec<CaseRecord>, RepositoryError> {
        Ok(self.select(|case| case.petitioner_name.as_str(), name))
    }
}

pub(super) struct UnavailableCaseStore;

impl CaseRepository for UnavailableCaseStore {
    fn find_by_respondent(&self, _name: &str) -> Result<Vec<CaseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_petitioner(&self, _name: &str) -> Result<Vec<CaseRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryAnalysisStore {
    pub(super) records: Mutex<Vec<PetitionerAnalysisRecord>>,
}

impl MemoryAnalysisStore {
    pub(super) fn snapshot(&self) -> Vec<PetitionerAnalysisRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl PetitionerAnalysisRepository for MemoryAnalysisStore {
    fn upsert(
        &self,
        name: &str,
        analysis: AiAnalysis,
    ) -> Result<PetitionerAnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if let Some(existing) = guard.iter_mut().find(|record| same_name(&record.name, name)) {
            existing.ai_analysis = Some(analysis);
            return Ok(existing.clone());
        }
        let record = PetitionerAnalysisRecord {
            name: name.to_string(),
            ai_analysis: Some(analysis),
        };
        guard.push(record.clone());
        Ok(record)
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<PetitionerAnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| NameMatchPolicy::Substring.matches(&record.name, name))
            .cloned())
    }
}

/// Model double returning a fixed reply and recording every call.
pub(super) struct ScriptedModel {
    reply: Result<String, String>,
    delay: Option<std::time::Duration>,
    pub(super) calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedModel {
    pub(super) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Holds every reply back for `delay` before answering.
    pub(super) fn after(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.lock().expect("calls mutex poisoned").len()
    }
}

#[async_trait]
impl TextAnalysisModel for ScriptedModel {
    async fn generate(
        &self,
        system_instruction: &str,
        payload: &str,
    ) -> Result<String, ModelError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push((system_instruction.to_string(), payload.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone().map_err(ModelError::Transport)
    }
}

pub(super) type TestService = LitigationService<MemoryCaseStore, MemoryAnalysisStore, ScriptedModel>;

pub(super) fn build_service(
    records: Vec<CaseRecord>,
    model: ScriptedModel,
) -> (TestService, Arc<MemoryAnalysisStore>, Arc<ScriptedModel>) {
    let analyses = Arc::new(MemoryAnalysisStore::default());
    let model = Arc::new(model);
    let service = LitigationService::new(
        Arc::new(MemoryCaseStore::new(records)),
        analyses.clone(),
        model.clone(),
    );
    (service, analyses, model)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    case_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
