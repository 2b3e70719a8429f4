//! Dashboard main renderer

use super::components::{copilot, footer, header, intelligence, logs, pipeline, sidebar};
use super::state::{DashboardState, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

const SIDEBAR_WIDTH: u16 = 30;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(2, 6, 23))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, content_chunks[0], state);
    match state.active_tab() {
        Tab::Pipeline => pipeline::render_pipeline(f, content_chunks[1], state),
        Tab::Intelligence => intelligence::render_intelligence(f, content_chunks[1], state),
        Tab::Copilot => copilot::render_copilot(f, content_chunks[1], state),
    }
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::demo::{demo_report, demo_script};
    use crate::ui::UIConfig;
    use crate::ui::dashboard::state::SelectionOrigin;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state() -> DashboardState {
        DashboardState::new(Instant::now(), UIConfig::default())
    }

    #[test]
    fn test_pipeline_renders_seed_leads_and_meetings() {
        let text = screen_text(&state());
        assert!(text.contains("Alex Rivera"));
        assert!(text.contains("Blackwood Capital"));
        assert!(text.contains("UPCOMING MEETINGS"));
        assert!(text.contains("Contract Review"));
        assert!(text.contains("AI RECOMMENDED ACTION"));
    }

    #[test]
    fn test_intelligence_empty_state_and_report() {
        let mut state = state();
        let request = state.select_tab(Tab::Intelligence).unwrap();
        state.apply_intel_result(request.ticket, Err("provider error".to_string()));
        let text = screen_text(&state);
        assert!(text.contains("No Market Data Loaded"));
        assert!(text.contains("Market scan failed: provider error"));

        let request = state.begin_scan().unwrap();
        state.apply_intel_result(request.ticket, Ok(demo_report("Cybersecurity")));
        let text = screen_text(&state);
        assert!(text.contains("EXECUTIVE SUMMARY"));
        assert!(text.contains("Incumbent Suite Co."));
        assert!(text.contains("cybersecurity-outlook"));
    }

    #[test]
    fn test_copilot_shows_staleness_marker() {
        let mut state = state();
        let alex = state.leads[0].clone();
        let elena = state.leads[3].clone();
        state.select_lead(alex, SelectionOrigin::Pipeline);
        let request = state.begin_pitch().unwrap();
        state.apply_script_result(
            request.ticket,
            &request.lead_id,
            Ok(demo_script(&request.lead_context, &request.product)),
        );
        let text = screen_text(&state);
        assert!(text.contains("GENERATED PITCH"));
        assert!(!text.contains("Written for"));

        state.select_lead(elena, SelectionOrigin::Copilot);
        let text = screen_text(&state);
        assert!(text.contains("Written for Alex Rivera"));
    }
}
