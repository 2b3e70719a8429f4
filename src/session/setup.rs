//! Session setup and initialization

use crate::config::{Config, ProviderKind};
use crate::consts::cli_consts::{DEMO_LATENCY_MS, EVENT_QUEUE_SIZE, REQUEST_QUEUE_SIZE};
use crate::events::Event;
use crate::intel::{DemoIntel, IntelClient, IntelligenceService};
use crate::llm::config::{LlmConfig, effective_provider};
use crate::workers::core::EventSender;
use crate::workers::{Request, start_dispatcher};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Hands requests to the dispatcher
    pub request_sender: mpsc::Sender<Request>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// Backend label for display purposes
    pub backend_name: String,
}

/// Pick the intelligence backend.
///
/// `--demo` or a `demo` provider selects the offline backend; anything else
/// needs a resolvable provider config with an API key in the environment.
pub fn build_service(
    config: &Config,
    demo: bool,
) -> Result<Arc<dyn IntelligenceService>, Box<dyn Error>> {
    resolve_service(config, demo, &|key| std::env::var(key).ok())
}

fn resolve_service(
    config: &Config,
    demo: bool,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<Arc<dyn IntelligenceService>, Box<dyn Error>> {
    // The offline backend needs no provider settings at all
    if demo || effective_provider(config, lookup)? == ProviderKind::Demo {
        let latency = Duration::from_millis(DEMO_LATENCY_MS);
        return Ok(Arc::new(DemoIntel::new(latency)));
    }
    let llm_config = LlmConfig::resolve(config, lookup)?;
    Ok(Arc::new(IntelClient::from_config(&llm_config)?))
}

/// Wires channels and starts the request dispatcher.
pub fn setup_session(service: Arc<dyn IntelligenceService>) -> SessionData {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (request_sender, request_receiver) = mpsc::channel::<Request>(REQUEST_QUEUE_SIZE);

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let backend_name = service.backend_name();
    let dispatcher = start_dispatcher(
        service,
        request_receiver,
        EventSender::new(event_sender),
        shutdown_sender.subscribe(),
    );

    SessionData {
        event_receiver,
        request_sender,
        join_handles: vec![dispatcher],
        shutdown_sender,
        backend_name,
    }
}
