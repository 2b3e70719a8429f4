//! Activity log panel

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_worker_color};
use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn status_icon(event: &Event) -> &'static str {
    match (event.event_type, event.log_level) {
        (EventType::Success, _) => "✅",
        (EventType::Error, LogLevel::Error) => "❌",
        (EventType::Error, _) => "⚠️",
        (EventType::Cancelled, _) => "⏹",
        (EventType::Waiting, _) => "⏳",
        (EventType::StateChange, _) => "•",
    }
}

fn log_line(event: &Event) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", status_icon(event))),
        Span::styled(
            format!("{} ", format_compact_timestamp(&event.timestamp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<9}", event.worker.to_string()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            clean_http_error_message(&event.msg),
            Style::default().fg(get_worker_color(&event.worker)),
        ),
    ])
}

/// Render the activity log, newest first.
pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let mut lines: Vec<Line> = state
        .activity_logs
        .iter()
        .rev()
        .take(visible)
        .map(log_line)
        .collect();
    if lines.is_empty() {
        lines.push(Line::styled(
            "No activity yet. Open Market Intel or the Sales Copilot to get started.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
