//! TUI widgets

mod mode_indicator;
mod status_badge;

pub use mode_indicator::ModeIndicator;
pub use status_badge::{status_color, StatusBadge};
