//! TUI pane rendering modules
//!
//! Stateless render functions, one per visible region:
//!
//! - [`header`]: current configuration line
//! - [`visual`]: the buffer as bars, dots or a radial plot
//! - [`stats`]: comparison, swap and elapsed-time counters
//! - [`info`]: name, complexity and description of the algorithm
//! - [`steps`]: scrollable log of the most recent steps
//! - [`status`]: status bar with run state and keybindings

pub mod header;
pub mod info;
pub mod stats;
pub mod status;
pub mod steps;
pub mod visual;

// Re-export render functions for convenience
pub use header::render_header;
pub use info::render_info_pane;
pub use stats::render_stats_pane;
pub use status::render_status_bar;
pub use steps::render_steps_pane;
pub use visual::render_visual_pane;
