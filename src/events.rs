//! Event System
//!
//! Types and implementations for worker events and logging

use crate::error_classifier::LogLevel;
use crate::intel::types::{CampaignInsight, IntelligenceReport, SalesScript};
use crate::logging::should_log_with_env;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Worker {
    /// Worker that runs market intelligence scans.
    #[strum(serialize = "market")]
    MarketAnalyzer,
    /// Worker that writes sales scripts for the selected lead.
    #[strum(serialize = "copilot")]
    PitchGenerator,
    /// Worker that drafts campaign plans.
    #[strum(serialize = "campaign")]
    CampaignPlanner,
    /// The dashboard itself (navigation, cancellations).
    #[strum(serialize = "dashboard")]
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Waiting,
    Cancelled,
    StateChange,
}

/// Result of a finished request, tagged with the ticket it was issued under.
///
/// Failures carry the short, operator-facing message; the full error text is
/// in the event's `msg`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Intel {
        ticket: u64,
        result: Result<Box<IntelligenceReport>, String>,
    },
    Script {
        ticket: u64,
        lead_id: String,
        result: Result<SalesScript, String>,
    },
    Campaign {
        result: Result<CampaignInsight, String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Present on the final event of a request.
    pub outcome: Option<FlowOutcome>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            outcome: None,
        }
    }

    pub fn with_level(
        worker: Worker,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(worker, msg, event_type, log_level)
    }

    pub fn dashboard(msg: String, event_type: EventType) -> Self {
        Self::new(Worker::Dashboard, msg, event_type, LogLevel::Info)
    }

    /// Final event of a request, carrying its outcome.
    pub fn finished(
        worker: Worker,
        msg: String,
        log_level: LogLevel,
        outcome: FlowOutcome,
    ) -> Self {
        let event_type = if outcome.is_success() {
            EventType::Success
        } else {
            EventType::Error
        };
        Self {
            outcome: Some(outcome),
            ..Self::new(worker, msg, event_type, log_level)
        }
    }

    pub fn should_display(&self) -> bool {
        // Every finished request reaches the log, whatever its level
        if self.outcome.is_some() {
            return true;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        if self.event_type == EventType::StateChange {
            return false;
        }
        should_log_with_env(self.log_level)
    }
}

impl FlowOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            FlowOutcome::Intel { result, .. } => result.is_ok(),
            FlowOutcome::Script { result, .. } => result.is_ok(),
            FlowOutcome::Campaign { result } => result.is_ok(),
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.worker, self.msg
        )
    }
}
