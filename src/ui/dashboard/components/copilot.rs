//! Sales copilot tab
//!
//! Lead picker, context for the selected lead, and the generated pitch

use super::super::state::DashboardState;
use super::super::utils::{intent_color, spinner};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_copilot(f: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(state.leads.len() as u16 + 2),
            Constraint::Fill(1),
        ])
        .split(columns[0]);

    render_lead_picker(f, left[0], state);
    render_context(f, left[1], state);
    render_script(f, columns[1], state);
}

fn render_lead_picker(f: &mut Frame, area: Rect, state: &DashboardState) {
    let selected_id = state.selected_lead().map(|lead| lead.id.as_str());
    let lines: Vec<Line> = state
        .leads
        .iter()
        .enumerate()
        .map(|(index, lead)| {
            let pointer = if index == state.copilot_cursor { ">" } else { " " };
            let mark = if selected_id == Some(lead.id.as_str()) {
                "●"
            } else {
                "○"
            };
            let style = if selected_id == Some(lead.id.as_str()) {
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{} {} ", pointer, mark)),
                Span::styled(lead.name.clone(), style),
                Span::styled(
                    format!("  {}", lead.company.to_uppercase()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    let block = Block::default()
        .title("1. SELECT TARGET LEAD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_context(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines = match state.selected_lead() {
        Some(lead) => {
            let generate = if state.script_generating() {
                Line::from(Span::styled(
                    format!("{} Generating script...", spinner(state.tick)),
                    Style::default().fg(Color::LightMagenta),
                ))
            } else {
                Line::from(Span::styled(
                    "[g] Generate High-Impact Script",
                    Style::default()
                        .fg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD),
                ))
            };
            vec![
                Line::from(vec![
                    Span::styled("Lead Strength    ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!(
                            "{} ({:.1}/10)",
                            lead.strength_label(),
                            lead.strength_out_of_ten()
                        ),
                        Style::default()
                            .fg(intent_color(lead.intent_score))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Sector           ", Style::default().fg(Color::DarkGray)),
                    Span::raw(lead.industry.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Status           ", Style::default().fg(Color::DarkGray)),
                    Span::raw(format!("{} ({})", lead.status, lead.last_activity)),
                ]),
                Line::from(vec![
                    Span::styled("Preferred Channel", Style::default().fg(Color::DarkGray)),
                    Span::styled(" LinkedIn DM", Style::default().fg(Color::LightBlue)),
                ]),
                Line::from(""),
                generate,
            ]
        }
        None => vec![Line::from(Span::styled(
            "Select a lead with [Enter] to see its context.",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let block = Block::default()
        .title("2. CONTEXTUAL DATA")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn section(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        label.to_uppercase(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_script(f: &mut Frame, area: Rect, state: &DashboardState) {
    let mut lines = Vec::new();
    match state.script() {
        Some(generated) => {
            if state.script_is_stale() {
                let written_for = state
                    .script_lead()
                    .map(|lead| lead.name.clone())
                    .unwrap_or_else(|| format!("lead {}", generated.lead_id));
                lines.push(Line::from(Span::styled(
                    format!("⚠ Written for {}. Press [g] to regenerate.", written_for),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }
            let script = &generated.script;
            lines.push(section("Opening"));
            lines.push(Line::from(format!("\"{}\"", script.opening)));
            lines.push(Line::from(""));
            lines.push(section("Value Proposition"));
            lines.push(Line::from(script.value_prop.clone()));
            lines.push(Line::from(""));
            lines.push(section("Handling Objections"));
            for objection in &script.handling_objections {
                lines.push(Line::from(format!("• {}", objection)));
            }
            lines.push(Line::from(""));
            lines.push(section("The Close"));
            lines.push(Line::from(Span::styled(
                script.closing.clone(),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No pitch yet. Select a lead and press [g].",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    let block = Block::default()
        .title("GENERATED PITCH")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightBlue))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
