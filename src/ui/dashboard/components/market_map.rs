//! Market map component
//!
//! Average intent per industry as a bar chart

use super::super::state::DashboardState;
use crate::leads::intent_by_industry;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{BarChart, Block, BorderType, Borders};

pub fn render_market_map(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = intent_by_industry(&state.leads);
    let bars: Vec<(&str, u64)> = data
        .iter()
        .map(|(industry, score)| (industry.as_str(), *score))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("MARKET MAP - INTENT BY INDUSTRY")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(bars.as_slice())
        .max(100)
        .bar_width(10)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::LightBlue))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(chart, area);
}
