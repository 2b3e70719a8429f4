//! Request dispatcher
//!
//! Receives requests from the dashboard (or a headless command) and runs each
//! one on its own tokio task against the intelligence service. Every request
//! ends with exactly one event carrying its outcome.

use super::core::EventSender;
use super::requests::{CampaignRequest, IntelRequest, PitchRequest, Request};
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType, FlowOutcome, Worker};
use crate::intel::IntelligenceService;
use crate::intel::error::IntelError;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawns the dispatcher loop. It stops on shutdown or when every request
/// sender is dropped, cancelling whatever is still in flight.
pub fn start_dispatcher(
    service: Arc<dyn IntelligenceService>,
    mut requests: mpsc::Receiver<Request>,
    events: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let root = CancellationToken::new();
        let mut scan_token: Option<CancellationToken> = None;
        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                request = requests.recv() => {
                    let Some(request) = request else { break };
                    match request {
                        Request::Scan(request) => {
                            if let Some(previous) = scan_token.take() {
                                previous.cancel();
                            }
                            let token = root.child_token();
                            scan_token = Some(token.clone());
                            tokio::spawn(run_scan(service.clone(), request, token, events.clone()));
                        }
                        Request::CancelScan => {
                            if let Some(token) = scan_token.take() {
                                token.cancel();
                            }
                        }
                        Request::Pitch(request) => {
                            let token = root.child_token();
                            let task = run_pitch(service.clone(), request, token, events.clone());
                            tokio::spawn(task);
                        }
                        Request::Campaign(request) => {
                            let token = root.child_token();
                            let task =
                                run_campaign(service.clone(), request, token, events.clone());
                            tokio::spawn(task);
                        }
                    }
                }
            }
        }
        root.cancel();
    })
}

async fn cancellable<T>(
    token: &CancellationToken,
    call: impl Future<Output = Result<T, IntelError>>,
) -> Result<T, IntelError> {
    tokio::select! {
        _ = token.cancelled() => Err(IntelError::Cancelled),
        result = call => result,
    }
}

/// Builds the final event of a request.
fn outcome_event<T>(
    worker: Worker,
    result: Result<T, IntelError>,
    describe_success: impl FnOnce(&T) -> String,
    failure: &str,
    into_outcome: impl FnOnce(Result<T, String>) -> FlowOutcome,
) -> Event {
    match result {
        Ok(value) => {
            let message = describe_success(&value);
            Event::finished(worker, message, LogLevel::Info, into_outcome(Ok(value)))
        }
        Err(e) => {
            let level = ErrorClassifier::new().classify_intel_error(&e);
            let cancelled = matches!(e, IntelError::Cancelled);
            let mut event = Event::finished(
                worker,
                format!("{failure}: {e}"),
                level,
                into_outcome(Err(e.short_message())),
            );
            if cancelled {
                event.event_type = EventType::Cancelled;
            }
            event
        }
    }
}

async fn run_scan(
    service: Arc<dyn IntelligenceService>,
    request: IntelRequest,
    token: CancellationToken,
    events: EventSender,
) {
    let worker = Worker::MarketAnalyzer;
    let IntelRequest { ticket, industry } = request;
    events
        .send_progress(
            worker,
            format!("Scanning the {industry} market (request #{ticket})"),
            LogLevel::Info,
        )
        .await;

    let result = cancellable(&token, service.analyze_market(&industry)).await;
    let event = outcome_event(
        worker,
        result,
        |report| {
            format!(
                "Market report ready for {industry}: {} trends, {} competitors, {} sources",
                report.trends.len(),
                report.competitors.len(),
                report.grounding_sources.len()
            )
        },
        &format!("Market scan for {industry} failed"),
        |result| FlowOutcome::Intel {
            ticket,
            result: result.map(Box::new),
        },
    );
    events.send_event(event).await;
}

async fn run_pitch(
    service: Arc<dyn IntelligenceService>,
    request: PitchRequest,
    token: CancellationToken,
    events: EventSender,
) {
    let worker = Worker::PitchGenerator;
    let PitchRequest {
        ticket,
        lead_id,
        lead_context,
        product,
    } = request;
    events
        .send_progress(
            worker,
            format!("Writing a pitch for {lead_context}"),
            LogLevel::Info,
        )
        .await;

    let result = cancellable(&token, service.generate_pitch(&lead_context, &product)).await;
    let event = outcome_event(
        worker,
        result,
        |script| {
            format!(
                "Pitch ready for lead {lead_id} ({} objections handled)",
                script.handling_objections.len()
            )
        },
        &format!("Pitch for lead {lead_id} failed"),
        |result| FlowOutcome::Script {
            ticket,
            lead_id: lead_id.clone(),
            result,
        },
    );
    events.send_event(event).await;
}

async fn run_campaign(
    service: Arc<dyn IntelligenceService>,
    request: CampaignRequest,
    token: CancellationToken,
    events: EventSender,
) {
    let worker = Worker::CampaignPlanner;
    events
        .send_progress(worker, "Planning campaign".to_string(), LogLevel::Info)
        .await;

    let result = cancellable(&token, service.plan_campaign(&request.objective)).await;
    let event = outcome_event(
        worker,
        result,
        |insight| format!("Campaign plan ready across {} channels", insight.channels.len()),
        "Campaign planning failed",
        |result| FlowOutcome::Campaign { result },
    );
    events.send_event(event).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::MockIntelligenceService;
    use crate::intel::demo::{demo_report, demo_script};
    use crate::intel::types::{CampaignInsight, IntelligenceReport, SalesScript};
    use crate::llm::types::LlmError;
    use std::time::Duration;

    struct Harness {
        requests: mpsc::Sender<Request>,
        events: mpsc::Receiver<Event>,
        shutdown: broadcast::Sender<()>,
        handle: JoinHandle<()>,
    }

    fn start(service: Arc<dyn IntelligenceService>) -> Harness {
        let (request_tx, request_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let handle = start_dispatcher(service, request_rx, EventSender::new(event_tx), shutdown_rx);
        Harness {
            requests: request_tx,
            events: event_rx,
            shutdown: shutdown_tx,
            handle,
        }
    }

    /// Waits for the event that carries an outcome, skipping progress events.
    async fn next_outcome(events: &mut mpsc::Receiver<Event>) -> Event {
        loop {
            let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
                .await
                .expect("timed out waiting for an event")
                .expect("event channel closed");
            if event.outcome.is_some() {
                return event;
            }
        }
    }

    /// Never answers; only cancellation ends its calls.
    struct HangingIntel;

    #[async_trait::async_trait]
    impl IntelligenceService for HangingIntel {
        fn backend_name(&self) -> String {
            "hanging".to_string()
        }

        async fn analyze_market(&self, _industry: &str) -> Result<IntelligenceReport, IntelError> {
            std::future::pending().await
        }

        async fn generate_pitch(&self, _: &str, _: &str) -> Result<SalesScript, IntelError> {
            std::future::pending().await
        }

        async fn plan_campaign(&self, _: &str) -> Result<CampaignInsight, IntelError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_scan_success_carries_ticket_and_report() {
        let mut mock = MockIntelligenceService::new();
        mock.expect_analyze_market()
            .withf(|industry: &str| industry == "Fintech")
            .times(1)
            .returning(|industry| Ok(demo_report(industry)));
        let mut harness = start(Arc::new(mock));

        harness
            .requests
            .send(Request::Scan(IntelRequest {
                ticket: 7,
                industry: "Fintech".to_string(),
            }))
            .await
            .unwrap();

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.worker, Worker::MarketAnalyzer);
        assert_eq!(event.event_type, EventType::Success);
        match event.outcome {
            Some(FlowOutcome::Intel { ticket, result }) => {
                assert_eq!(ticket, 7);
                assert!(result.unwrap().summary.starts_with("Fintech"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_pitch_failure_is_classified() {
        let mut mock = MockIntelligenceService::new();
        mock.expect_generate_pitch().returning(|_, _| {
            Err(IntelError::Llm(LlmError::ApiResponse {
                status: 401,
                body: "bad key".to_string(),
            }))
        });
        let mut harness = start(Arc::new(mock));

        harness
            .requests
            .send(Request::Pitch(PitchRequest {
                ticket: 3,
                lead_id: "2".to_string(),
                lead_context: "Sarah Chen from Nova Health in the Healthtech sector".to_string(),
                product: "Widget".to_string(),
            }))
            .await
            .unwrap();

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.log_level, LogLevel::Error);
        assert!(event.msg.starts_with("Pitch for lead 2 failed"));
        assert_eq!(
            event.outcome,
            Some(FlowOutcome::Script {
                ticket: 3,
                lead_id: "2".to_string(),
                result: Err("provider returned HTTP 401".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_pitch_success_reports_objections() {
        let mut mock = MockIntelligenceService::new();
        mock.expect_generate_pitch()
            .returning(|context, product| Ok(demo_script(context, product)));
        let mut harness = start(Arc::new(mock));

        harness
            .requests
            .send(
                PitchRequest {
                    ticket: 1,
                    lead_id: "1".to_string(),
                    lead_context: "Alex Rivera from CloudScale Inc. in the SaaS sector".to_string(),
                    product: "Widget".to_string(),
                }
                .into(),
            )
            .await
            .unwrap();

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.msg, "Pitch ready for lead 1 (3 objections handled)");
    }

    #[tokio::test]
    async fn test_cancel_scan_ends_with_cancelled_event() {
        let mut harness = start(Arc::new(HangingIntel));

        harness
            .requests
            .send(Request::Scan(IntelRequest {
                ticket: 1,
                industry: "Mining".to_string(),
            }))
            .await
            .unwrap();
        harness.requests.send(Request::CancelScan).await.unwrap();

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.event_type, EventType::Cancelled);
        assert_eq!(event.log_level, LogLevel::Info);
        assert_eq!(
            event.outcome,
            Some(FlowOutcome::Intel {
                ticket: 1,
                result: Err("cancelled".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_shutdown_cancels_in_flight_requests() {
        let mut harness = start(Arc::new(HangingIntel));

        harness
            .requests
            .send(Request::Campaign(CampaignRequest {
                objective: "Grow".to_string(),
            }))
            .await
            .unwrap();
        // Let the dispatcher pick the request up before shutting down.
        tokio::time::sleep(Duration::from_millis(50)).await;
        harness.shutdown.send(()).unwrap();

        let event = next_outcome(&mut harness.events).await;
        assert_eq!(event.worker, Worker::CampaignPlanner);
        assert_eq!(event.event_type, EventType::Cancelled);
        tokio::time::timeout(Duration::from_secs(5), harness.handle)
            .await
            .unwrap()
            .unwrap();
    }
}
