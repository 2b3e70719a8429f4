//! Dashboard sidebar component
//!
//! Renders tab navigation and session information

use super::super::state::{DashboardState, Tab};
use super::super::utils::spinner;
use crate::leads::{average_intent, qualified_count};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Fill(1)])
        .split(area);

    render_navigation(f, chunks[0], state);
    render_session_info(f, chunks[1], state);
}

fn render_navigation(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = Tab::ALL
        .iter()
        .map(|&tab| {
            let busy = match tab {
                Tab::Intelligence => state.intel_loading(),
                Tab::Copilot => state.script_generating(),
                Tab::Pipeline => false,
            };
            let marker = if busy { spinner(state.tick) } else { " " };
            let label = format!("[{}] {} {}", tab.index() + 1, tab, marker);
            if tab == state.active_tab() {
                Line::from(Span::styled(
                    format!("> {}", label),
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", label),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .title("PLATFORM")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn format_uptime(secs: u64) -> String {
    match (secs / 3600, (secs % 3600) / 60, secs % 60) {
        (0, m, s) => format!("{}m {}s", m, s),
        (h, m, s) => format!("{}h {}m {}s", h, m, s),
    }
}

fn info_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<11}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_session_info(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines = vec![
        info_line("Backend", state.backend_name.clone(), Color::LightBlue),
        info_line("Version", env!("CARGO_PKG_VERSION").to_string(), Color::Cyan),
        info_line(
            "Uptime",
            format_uptime(state.start_time.elapsed().as_secs()),
            Color::LightGreen,
        ),
        info_line(
            "Leads",
            format!(
                "{} ({} qualified)",
                state.leads.len(),
                qualified_count(&state.leads)
            ),
            Color::LightYellow,
        ),
        info_line(
            "Avg intent",
            format!("{:.1}", average_intent(&state.leads)),
            Color::LightCyan,
        ),
    ];

    let block = Block::default()
        .title("SESSION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
