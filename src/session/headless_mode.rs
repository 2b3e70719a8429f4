//! Headless mode execution
//!
//! One-shot commands send a single request to the dispatcher, print worker
//! events to the console and hand back the final outcome.

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, FlowOutcome};
use crate::logging::level_label;
use crate::workers::Request;
use std::error::Error;
use tokio::sync::mpsc;

/// Runs one request in headless mode
///
/// Returns `Ok(None)` when the run was interrupted with Ctrl+C before the
/// request finished.
pub async fn run_headless_request(
    mut session: SessionData,
    request: Request,
) -> Result<Option<FlowOutcome>, Box<dyn Error>> {
    print_session_starting("headless", &session.backend_name);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    session.request_sender.send(request).await?;

    let outcome = tokio::select! {
        outcome = await_outcome(&mut session.event_receiver) => outcome,
        _ = shutdown_receiver.recv() => None,
    };

    // Stop the dispatcher and wait for it
    print_session_shutdown();
    let _ = session.shutdown_sender.send(());
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(outcome)
}

/// Log events to the console until one carries an outcome.
async fn await_outcome(events: &mut mpsc::Receiver<Event>) -> Option<FlowOutcome> {
    while let Some(event) = events.recv().await {
        if event.should_display() {
            println!("{:<5} {}", level_label(event.log_level), event);
        }
        if let Some(outcome) = event.outcome {
            return Some(outcome);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::DemoIntel;
    use crate::session::setup_session;
    use crate::workers::CampaignRequest;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_campaign_request_returns_outcome() {
        let session = setup_session(Arc::new(DemoIntel::new(Duration::ZERO)));
        let outcome = run_headless_request(
            session,
            Request::Campaign(CampaignRequest {
                objective: "Grow EU pipeline".to_string(),
            }),
        )
        .await
        .unwrap();

        match outcome {
            Some(FlowOutcome::Campaign { result: Ok(plan) }) => {
                assert_eq!(plan.objective, "Grow EU pipeline");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_event_stream_yields_no_outcome() {
        let (sender, mut receiver) = mpsc::channel::<Event>(1);
        drop(sender);
        assert!(await_outcome(&mut receiver).await.is_none());
    }
}
