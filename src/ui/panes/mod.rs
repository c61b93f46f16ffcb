//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane:
//!
//! - [`bars`]: the bar chart itself, one bar per element with the most
//!   recently mutated index highlighted
//! - [`metrics`]: loop/space counters for a single run
//! - [`compare`]: progress and final complexity table for compare mode
//! - [`status`]: status bar with keybindings and run state

pub mod bars;
pub mod compare;
pub mod metrics;
pub mod status;

pub use bars::render_bars_pane;
pub use compare::{render_compare_pane, CompareRow};
pub use metrics::render_metrics_pane;
pub use status::render_status_bar;
