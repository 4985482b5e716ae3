use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::AppError;
use crate::extraction::extract_portfolio;
use crate::llm_client::EncodedDocument;
use crate::models::portfolio::PortfolioRecord;
use crate::state::AppState;

const DEFAULT_MIME_TYPE: &str = "application/pdf";

/// Clears the in-flight flag when the extraction settles. Clearing lives
/// in `Drop` because a disconnected client makes axum drop the handler
/// future at the await point; the flag must not outlive the call.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// POST /api/v1/record/extract
///
/// Runs the extraction pipeline against an uploaded document. Only one
/// extraction may be in flight per session; a successful result replaces
/// the session record wholesale and is persisted immediately.
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PortfolioRecord>, AppError> {
    let document = read_document(multipart).await?;

    if state.extracting.swap(true, Ordering::SeqCst) {
        return Err(AppError::ExtractionInFlight);
    }
    let _in_flight = InFlightGuard(state.extracting.clone());

    let record = extract_portfolio(state.extractor.as_ref(), &document).await?;
    state.session.lock().await.replace_record(record.clone());
    state.store.save(&record);
    Ok(Json(record))
}

/// Pulls the uploaded file out of the multipart body and encodes it for
/// transport. Document-to-bytes conversion lives here, at the upload
/// edge — the pipeline itself only ever sees an encoded document.
async fn read_document(mut multipart: Multipart) -> Result<EncodedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read uploaded file: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }
        return Ok(EncodedDocument {
            mime_type,
            data: BASE64.encode(&bytes),
        });
    }

    Err(AppError::Validation(
        "no file provided; upload a resume under the 'file' field".to_string(),
    ))
}
