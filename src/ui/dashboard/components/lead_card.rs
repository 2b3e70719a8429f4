//! Lead card component

use super::super::utils::intent_color;
use crate::leads::{Lead, LeadStatus};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

fn status_color(status: LeadStatus) -> Color {
    match status {
        LeadStatus::New => Color::LightBlue,
        LeadStatus::Contacted => Color::Yellow,
        LeadStatus::Qualified => Color::LightGreen,
        LeadStatus::Lost => Color::DarkGray,
    }
}

/// Render one lead: name, company, status and an intent gauge.
pub fn render_lead_card(f: &mut Frame, area: Rect, lead: &Lead, highlighted: bool, selected: bool) {
    let border_color = if highlighted {
        Color::LightBlue
    } else {
        Color::DarkGray
    };
    let title = if selected {
        format!(" {} (selected) ", lead.name)
    } else {
        format!(" {} ", lead.name)
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let details = Line::from(vec![
        Span::styled(
            format!("{} | {} | ", lead.company, lead.industry),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            lead.status.to_string(),
            Style::default()
                .fg(status_color(lead.status))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" | {}", lead.last_activity),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(details), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(intent_color(lead.intent_score)))
        .percent(u16::from(lead.intent_score.min(100)))
        .label(format!("Intent {}", lead.intent_score));
    f.render_widget(gauge, rows[1]);
}
