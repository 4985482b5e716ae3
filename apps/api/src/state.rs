use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::extraction::ExtractionCapability;
use crate::session::Session;
use crate::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PortfolioStore>,
    /// Pluggable extraction capability. Production: `GeminiClient`;
    /// tests substitute mocks.
    pub extractor: Arc<dyn ExtractionCapability>,
    /// The single editing session: working record + transient editor
    /// state.
    pub session: Arc<Mutex<Session>>,
    /// True while an extraction call is in flight; re-submission is
    /// rejected until it settles.
    pub extracting: Arc<AtomicBool>,
    pub config: Config,
}
