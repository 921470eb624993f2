use async_trait::async_trait;

/// Narrow seam over the external text-analysis service.
///
/// Implementations return the model's raw text. Whether that text is usable
/// JSON is decided by the caller; an `Err` here means the call itself failed.
#[async_trait]
pub trait TextAnalysisModel: Send + Sync {
    async fn generate(&self, system_instruction: &str, payload: &str)
        -> Result<String, ModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("text-analysis request failed: {0}")]
    Transport(String),
    #[error("text-analysis service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("text-analysis response envelope was unreadable: {0}")]
    Envelope(String),
    #[error("text-analysis response contained no candidates")]
    EmptyResponse,
}
