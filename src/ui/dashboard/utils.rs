//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::intel::types::{Sentiment, ThreatLevel};
use ratatui::prelude::Color;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::MarketAnalyzer => Color::Cyan,
        Worker::PitchGenerator => Color::LightMagenta,
        Worker::CampaignPlanner => Color::Yellow,
        Worker::Dashboard => Color::Gray,
    }
}

/// Spinner glyph for the given animation tick.
pub fn spinner(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::LightGreen,
        Sentiment::Neutral => Color::Gray,
        Sentiment::Negative => Color::LightRed,
    }
}

pub fn threat_color(threat: ThreatLevel) -> Color {
    match threat {
        ThreatLevel::High => Color::LightRed,
        ThreatLevel::Medium => Color::Yellow,
        ThreatLevel::Low => Color::Green,
    }
}

/// Color for an intent score, 0-100.
pub fn intent_color(score: u8) -> Color {
    match score {
        80.. => Color::LightGreen,
        50..=79 => Color::Yellow,
        _ => Color::LightRed,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Shorten the transport part of an error message, keeping what failed.
pub fn clean_http_error_message(msg: &str) -> String {
    let Some(start) = msg.find("API request failed") else {
        return msg.to_string();
    };
    let detail = &msg[start..];
    let short = if detail.contains("timed out") {
        "provider request timed out"
    } else if detail.contains("error sending request") {
        "network error - provider unreachable"
    } else {
        return msg.to_string();
    };
    format!("{}{}", &msg[..start], short)
}
