//! The components module contains all shared components for our app.

pub mod count_input;
pub mod mode_switch;
pub mod pico;
pub mod totals_panel;
