use crate::domain::model::DiagnosticLog;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// Human-readable location of `path`, used in diagnostics.
    fn describe(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn sign_ranges_file(&self) -> &str;
    fn number_descriptions_file(&self) -> &str;
    fn horoscope_base_url(&self) -> &str;
    fn fallback_birth_date(&self) -> NaiveDate;
}

/// Fetches the raw HTML page of a horoscope URL.
#[async_trait]
pub trait HoroscopeSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

/// One section of the daily report.
pub trait Reading: std::fmt::Display {
    fn summary(&self) -> String;
    fn diagnostics(&self) -> &DiagnosticLog;
}
