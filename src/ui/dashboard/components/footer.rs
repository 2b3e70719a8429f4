//! Dashboard footer component
//!
//! Renders the failure notice, if any, and the key hints for the active tab

use super::super::state::{DashboardState, Tab};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn key_hints(state: &DashboardState) -> &'static str {
    if state.editing_query {
        return "[Enter] Scan | [Esc] Stop editing | [Backspace] Delete";
    }
    match state.active_tab() {
        Tab::Pipeline => "[Q] Quit | [1-3/Tab] Switch | [↑↓] Move | [Enter] Open lead | [r] Draft outreach",
        Tab::Intelligence => "[Q] Quit | [1-3/Tab] Switch | [/] Edit industry | [s] Scan | [x] Cancel scan",
        Tab::Copilot => "[Q] Quit | [1-3/Tab] Switch | [↑↓] Move | [Enter] Select lead | [g] Generate",
    }
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2)])
        .split(area);

    if let Some(notice) = state.notice() {
        let text = format!("{} failed: {}  [d] dismiss", notice.flow, notice.message);
        let notice_line = Paragraph::new(text).alignment(Alignment::Center).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(notice_line, rows[0]);
    }

    let footer = Paragraph::new(key_hints(state))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, rows[1]);
}
