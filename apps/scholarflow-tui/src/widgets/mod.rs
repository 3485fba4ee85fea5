//! TUI widgets

mod badge;
mod mode_indicator;
mod sidebar;

pub use badge::{badge_span, score_color, stoplight_span, tone_color};
pub use mode_indicator::ModeIndicator;
pub use sidebar::Sidebar;
