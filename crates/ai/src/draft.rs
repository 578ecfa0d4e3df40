//! Fail-soft inquiry draft generation.
//!
//! Internally every call produces a `Result<String, DraftError>` so failures
//! stay distinguishable in logs; only [`DraftGenerator::draft`] and
//! [`DraftGenerator::generate_draft`] collapse them into fixed user-facing text.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::InquiryPrompt;
use crate::provider::{ProviderError, TextGenerator};

/// Returned when the service answered without usable text.
pub const COULD_NOT_GENERATE: &str = "Could not generate draft. Please try again.";

/// Returned for every other failure (credential, network, timeout, bad response).
pub const SERVICE_FALLBACK: &str =
    "Error connecting to AI assistant. Please type your message manually.";

#[derive(Debug, Error)]
pub enum DraftError {
    /// Required credential is missing; recoverable by configuring it.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("text generation failed: {0}")]
    Service(#[source] ProviderError),

    #[error("text generation returned no draft")]
    EmptyResponse,
}

impl From<ProviderError> for DraftError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => DraftError::Configuration(err.to_string()),
            other => DraftError::Service(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftOutcome {
    Generated,
    Empty,
    Failed,
}

/// Editable email text plus what happened producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryDraft {
    pub text: String,
    pub outcome: DraftOutcome,
    pub generated_at: DateTime<Utc>,
}

/// Stateless adapter from (business name, requirements) to draft text.
#[derive(Clone)]
pub struct DraftGenerator {
    provider: Arc<dyn TextGenerator>,
}

impl core::fmt::Debug for DraftGenerator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DraftGenerator").finish_non_exhaustive()
    }
}

impl DraftGenerator {
    pub fn new(provider: Arc<dyn TextGenerator>) -> Self {
        Self { provider }
    }

    /// Single attempt, errors preserved. Text comes back exactly as the
    /// service produced it; a blank reply counts as no reply.
    pub async fn try_generate(
        &self,
        business_name: &str,
        requirements: &str,
    ) -> Result<String, DraftError> {
        let prompt = InquiryPrompt::new(business_name, requirements).render();
        match self.provider.generate(&prompt).await? {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(DraftError::EmptyResponse),
        }
    }

    /// Never fails: failures become one of the fixed fallback texts.
    pub async fn draft(&self, business_name: &str, requirements: &str) -> InquiryDraft {
        let (text, outcome) = match self.try_generate(business_name, requirements).await {
            Ok(text) => (text, DraftOutcome::Generated),
            Err(DraftError::EmptyResponse) => {
                tracing::warn!("draft generation returned no text");
                (COULD_NOT_GENERATE.to_string(), DraftOutcome::Empty)
            }
            Err(err) => {
                let kind = match &err {
                    DraftError::Service(e) => e.kind(),
                    _ => "configuration",
                };
                tracing::error!(error = %err, kind, "draft generation failed");
                (SERVICE_FALLBACK.to_string(), DraftOutcome::Failed)
            }
        };

        InquiryDraft {
            text,
            outcome,
            generated_at: Utc::now(),
        }
    }

    /// Text-only form of [`DraftGenerator::draft`].
    pub async fn generate_draft(&self, business_name: &str, requirements: &str) -> String {
        self.draft(business_name, requirements).await.text
    }
}
