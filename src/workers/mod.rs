//! Background workers that run intelligence requests off the UI loop.

pub mod core;
pub mod dispatcher;
pub mod requests;

pub use dispatcher::start_dispatcher;
pub use requests::{CampaignRequest, IntelRequest, PitchRequest, Request};
