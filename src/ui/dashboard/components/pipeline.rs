//! Pipeline tab
//!
//! Header stats, lead cards, market map, recommended action and meetings

use super::super::state::DashboardState;
use super::lead_card::render_lead_card;
use super::market_map::render_market_map;
use crate::leads::{average_intent, qualified_count};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

const CARD_HEIGHT: u16 = 4;

pub fn render_pipeline(f: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(CARD_HEIGHT * state.leads.len() as u16),
            Constraint::Min(6),
        ])
        .split(columns[0]);

    render_stats(f, left[0], state);
    render_lead_cards(f, left[1], state);
    render_market_map(f, left[2], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Fill(1)])
        .split(columns[1]);

    render_recommended_action(f, right[0], state);
    render_meetings(f, right[1], state);
}

fn render_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = Line::from(vec![
        Span::styled("Avg Intent ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.1}", average_intent(&state.leads)),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Qualified ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            qualified_count(&state.leads).to_string(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Active Leads ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.leads.len().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .title("PIPELINE INTELLIGENCE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(stats).block(block), area);
}

fn render_lead_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            state
                .leads
                .iter()
                .map(|_| Constraint::Length(CARD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(area);

    let selected_id = state.selected_lead().map(|lead| lead.id.as_str());
    for (index, (lead, row)) in state.leads.iter().zip(rows.iter()).enumerate() {
        render_lead_card(
            f,
            *row,
            lead,
            index == state.pipeline_cursor,
            selected_id == Some(lead.id.as_str()),
        );
    }
}

fn render_recommended_action(f: &mut Frame, area: Rect, state: &DashboardState) {
    let text = match state.recommended_lead() {
        Some(lead) => format!(
            "{} ({}) just updated their tech stack to include Kubernetes. \
             This matches our Tier-1 trigger. Recommend immediate reach-out with the Scale-Ready pitch.",
            lead.company, lead.name
        ),
        None => "No recommendation right now.".to_string(),
    };
    let lines = vec![
        Line::from(Span::styled(text, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Draft Outreach",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let block = Block::default()
        .title("AI RECOMMENDED ACTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightBlue))
        .padding(Padding::horizontal(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_meetings(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = Vec::new();
    for meeting in &state.meetings {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<9}", meeting.time),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                meeting.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("         {}", meeting.with),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let block = Block::default()
        .title("UPCOMING MEETINGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
