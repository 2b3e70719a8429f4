//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{
    DEFAULT_INDUSTRY, PRODUCT_DESCRIPTION, SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS,
};
use crate::events::{Event as WorkerEvent, EventType};
use crate::ui::dashboard::{DashboardState, KeyOutcome, handle_key, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::Request;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Shown in the header, e.g. "Gemini gemini-2.5-flash".
    pub backend_name: String,
    pub product: String,
    pub default_industry: String,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        backend_name: String,
        product: String,
        default_industry: String,
    ) -> Self {
        Self {
            with_background_color,
            backend_name,
            product,
            default_industry,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self::new(
            false,
            "Demo (offline)".to_string(),
            PRODUCT_DESCRIPTION.to_string(),
            DEFAULT_INDUSTRY.to_string(),
        )
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The MarketMind dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from workers.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Hands requests to the dispatcher.
    request_sender: mpsc::Sender<Request>,

    /// Broadcasts shutdown signal to workers.
    shutdown_sender: broadcast::Sender<()>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<WorkerEvent>,
        request_sender: mpsc::Sender<Request>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            event_receiver,
            request_sender,
            shutdown_sender,
            ui_config,
        }
    }

    fn open_dashboard(&mut self) {
        let state = DashboardState::new(self.start_time, self.ui_config.clone());
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Send a request to the dispatcher. If the dispatcher is gone the request
/// fails in place so its flow does not stay busy forever.
async fn dispatch(sender: &mpsc::Sender<Request>, state: &mut DashboardState, request: Request) {
    if sender.send(request.clone()).await.is_ok() {
        return;
    }
    let reason = "dispatcher stopped".to_string();
    match request {
        Request::Scan(scan) => {
            state.apply_intel_result(scan.ticket, Err(reason.clone()));
        }
        Request::Pitch(pitch) => {
            state.apply_script_result(pitch.ticket, &pitch.lead_id, Err(reason.clone()));
        }
        Request::CancelScan | Request::Campaign(_) => {}
    }
    state.add_to_activity_log(WorkerEvent::dashboard(
        format!("Request dropped: {}", reason),
        EventType::Error,
    ));
}

/// Drives the splash and dashboard until the operator quits or shutdown is broadcast.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);
    let mut shutdown_receiver = app.shutdown_sender.subscribe();

    loop {
        // Shutdown broadcast by another task
        if shutdown_receiver.try_recv().is_ok() {
            return Ok(());
        }

        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                        // Any other key skips the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => match handle_key(state, key) {
                        KeyOutcome::Quit => {
                            let _ = app.shutdown_sender.send(());
                            return Ok(());
                        }
                        KeyOutcome::Dispatch(request) => {
                            dispatch(&app.request_sender, state, request).await;
                        }
                        KeyOutcome::Nothing => {}
                    },
                }
            }
        }
    }
}

fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
