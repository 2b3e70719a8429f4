//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod copilot;
pub mod footer;
pub mod header;
pub mod intelligence;
pub mod lead_card;
pub mod logs;
pub mod market_map;
pub mod pipeline;
pub mod sidebar;
