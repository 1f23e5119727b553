//! User settings for period calculation and display.
//!
//! This module provides the [`PeriodSettings`] type and its JSON persistence.
//! Settings are threaded explicitly into every period and aggregation call;
//! the engine never holds them in global state.
//!
//! # Example
//!
//! ```no_run
//! use worklog_engine::config::load_settings_or_default;
//!
//! let settings = load_settings_or_default("./settings.json");
//! assert!(settings.period_start_day >= 1);
//! ```

mod loader;
mod types;

pub use loader::{load_settings, load_settings_or_default, save_settings};
pub use types::PeriodSettings;
