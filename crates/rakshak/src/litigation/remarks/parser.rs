use super::super::domain::{AiAnalysis, CaseRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const REMARK_SEPARATOR: &str = "\n\n---\n\n";

pub const SYSTEM_INSTRUCTION: &str = "You are a Senior Judicial Intelligence Analyst. Analyze the provided court order excerpts for a specific petitioner. Identify patterns of 'Abuse of Process'.
Output Requirements (JSON only):
'modus_operandi': 1-sentence description of filing behavior.
'judicial_sentiment': Objective summary of how judges view this petitioner.
'critical_excerpts': Array of 2-3 direct quotes where judges used terms like 'frivolous', 'meritless', or 'cost imposed'.
'risk_indicators': 3 bullet points of factual red flags (e.g., high dismissal rate).
Constraints: Do not use defamatory labels. Stick to judicial facts. If no criticism is found, return 'No recorded judicial reprimands'.";

/// Non-blank remarks in case order, joined with a visible separator.
/// `None` when no case carries a remark.
pub fn aggregate_remarks(cases: &[CaseRecord]) -> Option<String> {
    let remarks: Vec<&str> = cases
        .iter()
        .filter_map(|case| case.remarks.as_deref())
        .filter(|remark| !remark.trim().is_empty())
        .collect();

    if remarks.is_empty() {
        None
    } else {
        Some(remarks.join(REMARK_SEPARATOR))
    }
}

pub fn task_payload(petitioner: &str, remarks: &str) -> String {
    format!(
        "Analyze the following judicial remarks for petitioner \"{petitioner}\":\n\n{remarks}\n\nReturn JSON only."
    )
}

/// Structured findings as the model emits them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemarkFindings {
    #[serde(default)]
    pub modus_operandi: String,
    #[serde(default)]
    pub judicial_sentiment: String,
    #[serde(default)]
    pub critical_excerpts: Vec<String>,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
}

impl RemarkFindings {
    /// Substitute used when the model's text is not the expected JSON object.
    pub fn parse_fallback() -> Self {
        Self {
            modus_operandi: "Analysis pattern detected but response parsing failed.".to_string(),
            judicial_sentiment:
                "Pattern detection active. Judicial records indicate concentrated filing activity."
                    .to_string(),
            critical_excerpts: vec!["Manual review of judicial remarks recommended.".to_string()],
            risk_indicators: vec![
                "Automated pattern extraction encountered a parsing variance.".to_string(),
            ],
        }
    }

    pub fn into_analysis(self, last_updated: DateTime<Utc>) -> AiAnalysis {
        AiAnalysis {
            modus_operandi: self.modus_operandi,
            judicial_sentiment: self.judicial_sentiment,
            critical_excerpts: self.critical_excerpts,
            risk_indicators: self.risk_indicators,
            last_updated,
        }
    }
}

/// Analysis reported when a petitioner's cases carry no remarks. Never persisted.
pub fn no_remarks_analysis(now: DateTime<Utc>) -> AiAnalysis {
    AiAnalysis {
        modus_operandi: "No recorded judicial reprimands".to_string(),
        judicial_sentiment: "No prior judicial criticism detected in the provided records."
            .to_string(),
        critical_excerpts: Vec::new(),
        risk_indicators: vec!["No high-risk judicial patterns identified.".to_string()],
        last_updated: now,
    }
}

/// Removes every markdown code-fence marker and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_findings(raw: &str) -> Result<RemarkFindings, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_skips_blank_remarks_and_keeps_order() {
        let cases = vec![
            CaseRecord::new("C-1", "Anil Kumar", "R").with_remarks("Dismissed with costs."),
            CaseRecord::new("C-2", "Anil Kumar", "R").with_remarks("   "),
            CaseRecord::new("C-3", "Anil Kumar", "R"),
            CaseRecord::new("C-4", "Anil Kumar", "R").with_remarks("Vexatious filing."),
        ];
        assert_eq!(
            aggregate_remarks(&cases).as_deref(),
            Some("Dismissed with costs.\n\n---\n\nVexatious filing.")
        );
    }

    #[test]
    fn aggregate_is_none_without_remarks() {
        let cases = vec![CaseRecord::new("C-1", "Anil Kumar", "R").with_remarks("")];
        assert!(aggregate_remarks(&cases).is_none());
    }

    #[test]
    fn fenced_json_parses() {
        let raw = "```json\n{\"modus_operandi\":\"Serial writ petitions\",\"judicial_sentiment\":\"Critical\",\"critical_excerpts\":[\"dismissed as frivolous\"],\"risk_indicators\":[\"High dismissal rate\"]}\n```";
        let findings = parse_findings(raw).expect("parses");
        assert_eq!(findings.modus_operandi, "Serial writ petitions");
        assert_eq!(findings.critical_excerpts, vec!["dismissed as frivolous"]);
    }

    #[test]
    fn prose_does_not_parse() {
        assert!(parse_findings("The petitioner appears litigious.").is_err());
        assert!(parse_findings("[1, 2, 3]").is_err());
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let findings = parse_findings("{\"modus_operandi\":\"Repeat filings\"}").expect("parses");
        assert_eq!(findings.modus_operandi, "Repeat filings");
        assert!(findings.judicial_sentiment.is_empty());
        assert!(findings.risk_indicators.is_empty());
    }

    #[test]
    fn payload_names_petitioner() {
        let payload = task_payload("Anil Kumar", "Dismissed.");
        assert!(payload.starts_with("Analyze the following judicial remarks for petitioner \"Anil Kumar\""));
        assert!(payload.ends_with("Return JSON only."));
    }
}
