pub mod headless_mode;
pub mod messages;
pub mod output;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::run_headless_request;
pub use setup::{SessionData, build_service, setup_session};
pub use tui_mode::run_tui_mode;
