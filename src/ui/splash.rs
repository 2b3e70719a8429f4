//! Splash screen shown while the dashboard starts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ███╗   ███╗  █████╗  ██████╗  ██╗  ██╗ ███████╗ ████████╗
  ████╗ ████║ ██╔══██╗ ██╔══██╗ ██║ ██╔╝ ██╔════╝ ╚══██╔══╝
  ██╔████╔██║ ███████║ ██████╔╝ █████╔╝  █████╗      ██║
  ██║╚██╔╝██║ ██╔══██║ ██╔══██╗ ██╔═██╗  ██╔══╝      ██║
  ██║ ╚═╝ ██║ ██║  ██║ ██║  ██║ ██║  ██╗ ███████╗    ██║
  ╚═╝     ╚═╝ ╚═╝  ╚═╝ ╚═╝  ╚═╝ ╚═╝  ╚═╝ ╚══════╝    ╚═╝
                    M  I  N  D
"#;

fn splash_text() -> Text<'static> {
    let logo_style = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);
    let mut text: Text = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| Line::styled(line.to_string(), logo_style))
        .collect::<Vec<_>>()
        .into();

    text.push_line(Line::default());
    text.push_line(Line::from("Sales & market intelligence").gray());
    text.push_line(
        Line::from(format!("Version {}", env!("CARGO_PKG_VERSION")))
            .light_blue()
            .italic(),
    );
    text.push_line(Line::from("press any key to continue").dark_gray());
    text.centered()
}

pub fn render_splash(f: &mut Frame) {
    let text = splash_text();
    let [area] = Layout::vertical([Constraint::Length(text.height() as u16)])
        .flex(Flex::Center)
        .areas(f.area());
    f.render_widget(Paragraph::new(text), area);
}
