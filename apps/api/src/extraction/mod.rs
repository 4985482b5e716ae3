//! Extraction Pipeline — turns an uploaded document into a contract-valid
//! portfolio record, or fails cleanly.
//!
//! The pipeline invokes the external capability exactly once, parses the
//! raw text response, validates it against the Schema Contract, and
//! absorbs it into the working model. On any failure nothing is mutated:
//! the caller's record and the store stay untouched until the caller
//! explicitly applies a successful result.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{EncodedDocument, GeminiClient, LlmError};
use crate::models::portfolio::PortfolioRecord;
use crate::schema;

pub mod handlers;
pub mod prompts;

/// The single message shown to the user for every extraction failure.
/// The underlying cause is logged, never surfaced.
pub const USER_FACING_MESSAGE: &str =
    "Failed to parse the resume. Please ensure the PDF is valid and try again.";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("extraction transport failed: {0}")]
    Transport(#[from] LlmError),

    #[error("extraction response was not valid JSON: {0}")]
    Malformed(serde_json::Error),

    #[error("extraction response did not match the record shape: {0}")]
    Shape(serde_json::Error),

    #[error("extraction response failed contract validation, missing: {0:?}")]
    Validation(Vec<String>),
}

/// The external structured-generation capability, behind a seam so tests
/// can substitute a mock for the real Gemini client.
#[async_trait]
pub trait ExtractionCapability: Send + Sync {
    /// Invokes the capability once and returns the raw response text.
    async fn generate(&self, document: &EncodedDocument) -> Result<String, LlmError>;
}

#[async_trait]
impl ExtractionCapability for GeminiClient {
    async fn generate(&self, document: &EncodedDocument) -> Result<String, LlmError> {
        let constraint = schema::portfolio_schema().to_json();
        self.generate_structured(document, prompts::EXTRACT_INSTRUCTION, &constraint)
            .await
    }
}

/// Runs the full pipeline: one capability call, parse, validate, absorb.
pub async fn extract_portfolio(
    capability: &dyn ExtractionCapability,
    document: &EncodedDocument,
) -> Result<PortfolioRecord, ExtractError> {
    let text = capability.generate(document).await?;

    let value: Value = serde_json::from_str(&text).map_err(|e| {
        warn!("extraction response is not valid JSON: {e}");
        ExtractError::Malformed(e)
    })?;

    if let Err(missing) = schema::validate(&value) {
        warn!("extraction response failed validation, missing: {missing:?}");
        return Err(ExtractError::Validation(missing));
    }

    let record = schema::absorb(value).map_err(|e| {
        // Validation only covers the strict contract; a mistyped optional
        // field surfaces here instead.
        warn!("extraction response did not match the record shape: {e}");
        ExtractError::Shape(e)
    })?;
    info!(
        "extraction succeeded: {} experience, {} education, {} skills, {} projects",
        record.experience.len(),
        record.education.len(),
        record.skills.len(),
        record.projects.len()
    );
    Ok(record)
}
