use crate::core::HoroscopeSource;
use crate::utils::error::{DailyInfoError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// reqwest based [`HoroscopeSource`]. Sends a bare POST and accepts only `200 OK`.
///
/// No timeout or retry is configured; a hanging server blocks the query.
#[derive(Debug, Clone, Default)]
pub struct HttpHoroscopeSource {
    client: Client,
}

impl HttpHoroscopeSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HoroscopeSource for HttpHoroscopeSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        tracing::debug!("Making horoscope request to: {}", url);
        let response = self.client.post(url).send().await?;
        tracing::debug!("Horoscope response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(DailyInfoError::HttpStatusError {
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
