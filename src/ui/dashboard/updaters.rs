//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from events

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, FlowOutcome};

impl DashboardState {
    /// Advance the animation tick and apply queued worker events.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            if event.should_display() {
                self.add_to_activity_log(event);
            }
        }
    }

    /// Apply the outcome carried by an event, if any.
    fn process_event(&mut self, event: &WorkerEvent) {
        let Some(outcome) = &event.outcome else {
            return;
        };
        match outcome {
            FlowOutcome::Intel { ticket, result } => {
                let result = result.as_ref().map(|report| (**report).clone()).map_err(Clone::clone);
                self.apply_intel_result(*ticket, result);
            }
            FlowOutcome::Script {
                ticket,
                lead_id,
                result,
            } => {
                self.apply_script_result(*ticket, lead_id, result.clone());
            }
            // Campaign plans are only requested by the headless command
            FlowOutcome::Campaign { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::events::{EventType, Worker};
    use crate::intel::demo::demo_report;
    use crate::ui::UIConfig;
    use crate::ui::dashboard::state::Tab;
    use std::time::Instant;

    #[test]
    fn test_update_applies_latest_scan_and_logs_it() {
        let mut state = DashboardState::new(Instant::now(), UIConfig::default());
        let request = state.select_tab(Tab::Intelligence).unwrap();

        state.add_event(WorkerEvent::with_level(
            Worker::MarketAnalyzer,
            "Scanning".to_string(),
            EventType::Waiting,
            LogLevel::Info,
        ));
        state.add_event(WorkerEvent::finished(
            Worker::MarketAnalyzer,
            "Market report ready".to_string(),
            LogLevel::Info,
            FlowOutcome::Intel {
                ticket: request.ticket,
                result: Ok(Box::new(demo_report("Cybersecurity"))),
            },
        ));
        state.update();

        assert!(state.pending_events.is_empty());
        assert_eq!(state.activity_logs.len(), 2);
        assert!(!state.intel_loading());
        assert!(state.report().is_some());
        assert_eq!(state.tick, 1);
    }

    #[test]
    fn test_update_ignores_outcome_of_cancelled_scan() {
        let mut state = DashboardState::new(Instant::now(), UIConfig::default());
        let request = state.begin_scan().unwrap();
        state.cancel_scan();

        state.add_event(WorkerEvent::finished(
            Worker::MarketAnalyzer,
            "Market report ready".to_string(),
            LogLevel::Info,
            FlowOutcome::Intel {
                ticket: request.ticket,
                result: Ok(Box::new(demo_report("Cybersecurity"))),
            },
        ));
        state.update();

        assert!(state.report().is_none());
        // Still logged for the operator
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn test_rate_limited_scan_failure_is_logged() {
        use crate::error_classifier::ErrorClassifier;
        use crate::intel::error::IntelError;
        use crate::llm::types::LlmError;

        let mut state = DashboardState::new(Instant::now(), UIConfig::default());
        let request = state.begin_scan().unwrap();
        let error = IntelError::Llm(LlmError::ApiResponse {
            status: 429,
            body: String::new(),
        });
        let level = ErrorClassifier::new().classify_intel_error(&error);
        assert_eq!(level, LogLevel::Debug);

        state.add_event(WorkerEvent::finished(
            Worker::MarketAnalyzer,
            format!("Market scan failed: {}", error),
            level,
            FlowOutcome::Intel {
                ticket: request.ticket,
                result: Err(error.short_message()),
            },
        ));
        state.update();

        assert!(!state.intel_loading());
        assert_eq!(state.activity_logs.len(), 1);
        assert_eq!(state.activity_logs[0].event_type, EventType::Error);
    }

    #[test]
    fn test_hidden_events_are_not_logged() {
        let mut state = DashboardState::new(Instant::now(), UIConfig::default());
        state.add_event(WorkerEvent::with_level(
            Worker::Dashboard,
            "redraw".to_string(),
            EventType::StateChange,
            LogLevel::Trace,
        ));
        state.update();
        assert!(state.activity_logs.is_empty());
    }
}
