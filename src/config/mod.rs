pub mod profile;
pub mod toml_config;

use crate::core::sun_sign::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use chrono::NaiveDate;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use profile::Profile;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_SIGN_RANGES_FILE: &str = "horoscope-dates.json";
pub const DEFAULT_NUMBER_DESCRIPTIONS_FILE: &str = "number-descriptions.json";

/// Resolved configuration handed to the engine.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: String,
    pub sign_ranges_file: String,
    pub number_descriptions_file: String,
    pub horoscope_base_url: String,
    pub fallback_birth_date: NaiveDate,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            sign_ranges_file: DEFAULT_SIGN_RANGES_FILE.to_string(),
            number_descriptions_file: DEFAULT_NUMBER_DESCRIPTIONS_FILE.to_string(),
            horoscope_base_url: DEFAULT_BASE_URL.to_string(),
            fallback_birth_date: NaiveDate::from_ymd_opt(1990, 12, 31).unwrap_or_default(),
        }
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn sign_ranges_file(&self) -> &str {
        &self.sign_ranges_file
    }

    fn number_descriptions_file(&self) -> &str {
        &self.number_descriptions_file
    }

    fn horoscope_base_url(&self) -> &str {
        &self.horoscope_base_url
    }

    fn fallback_birth_date(&self) -> NaiveDate {
        self.fallback_birth_date
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("horoscope.base_url", &self.horoscope_base_url)?;
        validate_path("data.sign_ranges_file", &self.sign_ranges_file)?;
        validate_path("data.number_descriptions_file", &self.number_descriptions_file)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "daily-info")]
#[command(about = "Daily Number and Daily Horoscope for a birth date")]
pub struct CliConfig {
    /// Birth date (YYYY-MM-DD)
    #[arg(env = "DATE_OF_BIRTH")]
    pub birth_date: Option<String>,

    /// Date of the reading (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub target_date: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the reference JSON files
    #[arg(long)]
    pub data_dir: Option<String>,

    /// JSON file with a DATE_OF_BIRTH entry, read when no birth date is given
    #[arg(long, default_value = "DATA.json")]
    pub profile: String,

    /// Horoscope site base URL
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, help = "Append the horoscope source URL")]
    pub show_source: bool,

    #[arg(long, help = "Print the diagnostic log after the report")]
    pub show_logs: bool,

    #[arg(long, help = "Resolve dates and sign without calculating or fetching")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the TOML file (if any), then command line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_settings()?
            }
            None => Settings::default(),
        };

        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(url) = &self.base_url {
            settings.horoscope_base_url = url.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Argument or `DATE_OF_BIRTH`, then the profile file, then the configured fallback.
    pub fn resolve_birth_date<C: ConfigProvider>(&self, settings: &C) -> String {
        if let Some(date) = self.birth_date.as_deref().filter(|d| !d.trim().is_empty()) {
            return date.to_string();
        }

        match Profile::load_if_present(&self.profile) {
            Ok(Some(Profile {
                date_of_birth: Some(date),
            })) => {
                tracing::debug!("Birth date taken from profile {}", self.profile);
                return date;
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Profile '{}' ignored: {}", self.profile, e),
        }

        let fallback = settings.fallback_birth_date();
        tracing::info!("No birth date given, using fallback {}", fallback);
        fallback.format("%Y-%m-%d").to_string()
    }
}
