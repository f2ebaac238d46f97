use thiserror::Error;

#[derive(Error, Debug)]
pub enum DailyInfoError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid date '{value}': {reason}")]
    InvalidDateError { value: String, reason: String },

    #[error("File '{path}' is empty")]
    EmptyFileError { path: String },

    #[error("Unexpected response status: {status}")]
    HttpStatusError { status: u16 },

    #[error("Scrape error: {message}")]
    ScrapeError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
}

impl DailyInfoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::HttpStatusError { .. } | Self::ScrapeError { .. } => {
                ErrorCategory::Network
            }
            Self::IoError(_) | Self::JsonError(_) | Self::EmptyFileError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InvalidDateError { .. } => ErrorCategory::Input,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch the daily horoscope: {}", self),
            ErrorCategory::Data => format!("Could not read reference data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the horoscope base_url",
            ErrorCategory::Data => "Check that the data directory contains valid JSON files",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::Input => "Use the ISO date format YYYY-MM-DD",
        }
    }
}

pub type Result<T> = std::result::Result<T, DailyInfoError>;
