//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: application state, keyboard event loop, run lifecycle
//! - **[`view`]**: folds step events into values, highlights and a step log
//! - **[`panes`]**: stateless render functions for each visible region
//! - **[`settings`]**: user-facing configuration shared with the command line
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with [`Settings`] and
//! call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod settings;
pub mod theme;
pub mod view;

pub use app::App;
pub use settings::{Settings, View};
