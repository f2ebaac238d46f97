pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpHoroscopeSource, storage::LocalStorage};
pub use config::Settings;
pub use core::daily_info::{DailyInfoEngine, DailyReport, RunOptions};
pub use utils::error::{DailyInfoError, Result};
