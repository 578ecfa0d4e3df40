use async_trait::async_trait;
use thiserror::Error;

/// Failure talking to a text-generation service.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential configured; raised on first use, not at startup.
    #[error("text generation credential is not configured")]
    MissingCredential,

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("http client setup failed: {0}")]
    Client(String),
}

impl ProviderError {
    /// Short machine-readable kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::MissingCredential => "missing_credential",
            ProviderError::Timeout => "timeout",
            ProviderError::Network(_) => "network",
            ProviderError::Status { .. } => "status",
            ProviderError::Malformed(_) => "malformed",
            ProviderError::Client(_) => "client",
        }
    }
}

/// A text-generation capability (one prompt in, free text out).
///
/// `Ok(None)` means the service answered but produced no text.
/// Implementations make a single attempt per call; retry policy belongs to
/// callers.
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ProviderError>;
}
