//! Judicial-remark analysis: aggregation, the external model call, output
//! parsing and persistence of the structured result.

mod analyzer;
mod gemini;
mod model;
mod parser;

pub use analyzer::{
    RemarkAnalysisError, RemarkAnalysisOutcome, RemarkAnalysisSource, RemarkAnalyzer,
};
pub use gemini::GeminiClient;
pub use model::{ModelError, TextAnalysisModel};
pub use parser::{
    aggregate_remarks, no_remarks_analysis, parse_findings, strip_code_fences, task_payload,
    RemarkFindings, REMARK_SEPARATOR, SYSTEM_INSTRUCTION,
};
