//! Common styling for TUI components

use ratatui::style::Color;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Color for values that are adjusted but not yet applied
pub const PENDING_COLOR: Color = Color::Yellow;

/// Standard color for errors
pub const ERROR_COLOR: Color = Color::Red;

/// Closed-form curve
pub const THEORETICAL_COLOR: Color = Color::White;

/// Monte Carlo curve
pub const EMPIRICAL_COLOR: Color = Color::Blue;

/// 50% reference line
pub const THRESHOLD_COLOR: Color = Color::Red;
