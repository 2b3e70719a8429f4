//! Market intelligence tab
//!
//! Query box with scan status, then the report or the empty-state prompt

use super::super::state::DashboardState;
use super::super::utils::{sentiment_color, spinner, threat_color};
use crate::intel::types::IntelligenceReport;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_intelligence(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_query(f, rows[0], state);
    match state.report() {
        Some(report) => render_report(f, rows[1], report),
        None => render_empty(f, rows[1], state),
    }
}

fn render_query(f: &mut Frame, area: Rect, state: &DashboardState) {
    let icon = if state.intel_loading() {
        spinner(state.tick)
    } else {
        "◍"
    };
    let cursor = if state.editing_query { "▏" } else { "" };
    let hint = if state.intel_loading() {
        "  scanning... [x] cancel"
    } else if state.editing_query {
        "  [Enter] scan  [Esc] done"
    } else {
        "  [/] edit  [s] scan"
    };
    let query_style = if state.editing_query {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightBlue)
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(Color::LightCyan)),
        Span::styled(format!("{}{}", state.industry_query(), cursor), query_style),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);
    let block = Block::default()
        .title("MARKET INTELLIGENCE - INDUSTRY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if state.editing_query {
            Color::LightBlue
        } else {
            Color::Cyan
        }));
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_empty(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines = if state.intel_loading() {
        vec![Line::from(Span::styled(
            format!("{} Gathering live market signals...", spinner(state.tick)),
            Style::default().fg(Color::LightCyan),
        ))]
    } else {
        vec![
            Line::from(Span::styled(
                "No Market Data Loaded",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Enter an industry and press [s] to generate a real-time intelligence report.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::top(area.height.saturating_sub(4) / 2));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn panel(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1))
}

fn render_report(f: &mut Frame, area: Rect, report: &IntelligenceReport) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(1),
        ])
        .split(area);

    let summary = Paragraph::new(report.summary.as_str())
        .style(Style::default().fg(Color::White))
        .block(panel("EXECUTIVE SUMMARY", Color::Yellow))
        .wrap(Wrap { trim: true });
    f.render_widget(summary, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let mut trend_lines = Vec::new();
    for trend in &report.trends {
        trend_lines.push(Line::from(vec![
            Span::styled(
                trend.topic.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{:+}%", trend.growth),
                Style::default().fg(sentiment_color(trend.sentiment)),
            ),
        ]));
        trend_lines.push(Line::from(Span::styled(
            trend.description.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(trend_lines)
            .block(panel("KEY TRENDS", Color::LightGreen))
            .wrap(Wrap { trim: true }),
        middle[0],
    );

    let mut competitor_lines = Vec::new();
    for insight in &report.competitors {
        competitor_lines.push(Line::from(vec![
            Span::styled(
                insight.competitor.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                insight.threat_level.to_string().to_uppercase(),
                Style::default()
                    .fg(threat_color(insight.threat_level))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        let detail = if insight.notes.is_empty() {
            insight.strategy.clone()
        } else {
            format!("{} - {}", insight.strategy, insight.notes)
        };
        competitor_lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(competitor_lines)
            .block(panel("COMPETITOR ANALYSIS", Color::LightRed))
            .wrap(Wrap { trim: true }),
        middle[1],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let opportunity_lines: Vec<Line> = report
        .opportunities
        .iter()
        .map(|item| Line::from(format!("• {}", item)))
        .collect();
    f.render_widget(
        Paragraph::new(opportunity_lines)
            .block(panel("TOP OPPORTUNITIES", Color::LightBlue))
            .wrap(Wrap { trim: true }),
        bottom[0],
    );

    let source_lines: Vec<Line> = if report.grounding_sources.is_empty() {
        vec![Line::from(Span::styled(
            "No sources cited",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        report
            .grounding_sources
            .iter()
            .map(|source| {
                Line::from(vec![
                    Span::raw(format!("{}  ", source.title)),
                    Span::styled(source.uri.clone(), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect()
    };
    f.render_widget(
        Paragraph::new(source_lines)
            .block(panel("GROUNDING SOURCES", Color::Cyan))
            .wrap(Wrap { trim: true }),
        bottom[1],
    );
}
