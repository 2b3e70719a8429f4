//! Dashboard header component
//!
//! Renders the title and request progress gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and request progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!(
        "MARKETMIND v{}  |  {}  |  {}",
        version,
        state.active_tab(),
        state.backend_name
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    // Animated gauge while anything is in flight; scans take priority
    let animated = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
    let (progress_text, gauge_color, progress_percent) = if state.intel_loading() {
        (
            format!("SCANNING - {} market", state.industry_query().trim()),
            Color::LightCyan,
            animated,
        )
    } else if state.script_generating() {
        let who = state
            .selected_lead()
            .map(|lead| lead.name.as_str())
            .unwrap_or("lead");
        (
            format!("WRITING - Pitch for {}", who),
            Color::LightMagenta,
            animated,
        )
    } else {
        ("READY".to_string(), Color::LightGreen, 100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
