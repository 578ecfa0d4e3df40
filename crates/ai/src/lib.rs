//! `hanumantay-ai`
//!
//! **Responsibility:** AI-assisted wholesale inquiry drafts.
//!
//! This crate is intentionally **not** part of the catalog domain:
//! - It must not depend on catalog state or mutate it.
//! - It consumes a text-generation service through the [`TextGenerator`] seam;
//!   [`GeminiClient`] is the bundled HTTP implementation.
//! - Its public contract is fail-soft: [`DraftGenerator::generate_draft`]
//!   always returns text, never an error.

pub mod draft;
pub mod gemini;
pub mod inflight;
pub mod prompt;
pub mod provider;

pub use draft::{
    COULD_NOT_GENERATE, DraftError, DraftGenerator, DraftOutcome, InquiryDraft, SERVICE_FALLBACK,
};
pub use gemini::{GeminiClient, GeminiConfig};
pub use inflight::{InFlightDrafts, InFlightGuard};
pub use prompt::{InquiryPrompt, MAX_WORDS, TARGET_BUSINESS};
pub use provider::{ProviderError, TextGenerator};
