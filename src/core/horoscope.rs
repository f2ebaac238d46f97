use crate::core::sun_sign::capitalize;
use crate::domain::model::{DateRange, DiagnosticLog};
use crate::domain::ports::{HoroscopeSource, Reading};
use crate::utils::error::{DailyInfoError, Result};
use regex::Regex;
use std::fmt;

const LD_JSON_SCRIPT: &str =
    r#"(?is)<script\b[^>]*\stype\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script\s*>"#;

/// Pulls `articleBody` out of the first `application/ld+json` script block.
pub fn extract_article_body(html: &str) -> Result<String> {
    let re = Regex::new(LD_JSON_SCRIPT).map_err(|e| DailyInfoError::ScrapeError {
        message: e.to_string(),
    })?;

    let script = re
        .captures(html)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| DailyInfoError::ScrapeError {
            message: "no application/ld+json script found".to_string(),
        })?;

    let json: serde_json::Value = serde_json::from_str(script.as_str().trim())?;
    let body = json
        .get("articleBody")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DailyInfoError::ScrapeError {
            message: "ld+json block has no 'articleBody' text".to_string(),
        })?;

    // 右單引號 (U+2019) 換成 ASCII 單引號
    Ok(body.replace('\u{2019}', "'"))
}

/// Fetches and scrapes `url`. Failures leave the description empty and are noted in `log`.
pub async fn fetch_description<H>(source: &H, url: &str, log: &mut DiagnosticLog) -> String
where
    H: HoroscopeSource + ?Sized,
{
    let result = match source.fetch_page(url).await {
        Ok(html) => extract_article_body(&html),
        Err(e) => Err(e),
    };

    match result {
        Ok(description) => {
            tracing::debug!("Fetched horoscope description ({} chars)", description.len());
            description
        }
        Err(e) => {
            log.error(format!("Website '{}' is unreachable: {}", url, e));
            String::new()
        }
    }
}

/// The Daily Horoscope reading for one date range.
#[derive(Debug, Clone)]
pub struct DailyHoroscope {
    pub dates: DateRange,
    pub sun_sign: Option<String>,
    pub url: Option<String>,
    pub description: String,
    pub show_source: bool,
    pub log: DiagnosticLog,
}

impl DailyHoroscope {
    pub fn sign_display(&self) -> String {
        self.sun_sign
            .as_deref()
            .map(capitalize)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

impl fmt::Display for DailyHoroscope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "Daily Horoscope [{}]", self.dates.dates())?;
        } else {
            write!(
                f,
                "Your Daily Horoscope, {}.\n{}",
                self.sign_display(),
                self.description
            )?;
        }

        if self.show_source {
            if let Some(url) = &self.url {
                write!(f, "\n# Source: {}", url)?;
            }
        }
        Ok(())
    }
}

impl Reading for DailyHoroscope {
    fn summary(&self) -> String {
        format!("DailyHoroscope({}, {})", self.dates.dates(), self.sign_display())
    }

    fn diagnostics(&self) -> &DiagnosticLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StaticSource(Result<String>);

    #[async_trait]
    impl HoroscopeSource for StaticSource {
        async fn fetch_page(&self, _url: &str) -> Result<String> {
            match &self.0 {
                Ok(html) => Ok(html.clone()),
                Err(_) => Err(DailyInfoError::HttpStatusError { status: 503 }),
            }
        }
    }

    fn dates() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(1990, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        )
    }

    fn page(body: &str) -> String {
        format!(
            r#"<html><head>
<script type="text/javascript">var x = 1;</script>
<script type="application/ld+json">{{"@type": "Article", "articleBody": "{}"}}</script>
</head><body></body></html>"#,
            body
        )
    }

    #[test]
    fn test_extract_article_body_normalizes_apostrophe() {
        let body = extract_article_body(&page("It\u{2019}s a good day.")).unwrap();
        assert_eq!(body, "It's a good day.");
    }

    #[test]
    fn test_extract_article_body_errors() {
        assert!(extract_article_body("<html></html>").is_err());
        assert!(extract_article_body(
            r#"<script type="application/ld+json">{"headline": "x"}</script>"#
        )
        .is_err());
        assert!(extract_article_body(r#"<script type="application/ld+json">{not json</script>"#)
            .is_err());
    }

    #[test]
    fn test_extract_article_body_ignores_data_type_attribute() {
        let html = r#"<script data-type="application/ld+json">{"articleBody": "wrong"}</script>
<script type="application/ld+json">{"articleBody": "right"}</script>"#;
        assert_eq!(extract_article_body(html).unwrap(), "right");

        let html = r#"<script async
    type='application/ld+json'>{"articleBody": "multi-line tag"}</script>"#;
        assert_eq!(extract_article_body(html).unwrap(), "multi-line tag");
    }

    #[tokio::test]
    async fn test_fetch_description_failure_is_logged() {
        let source = StaticSource(Err(DailyInfoError::HttpStatusError { status: 503 }));
        let mut log = DiagnosticLog::new();
        let description = fetch_description(&source, "http://h/leo/2022-01-01", &mut log).await;

        assert!(description.is_empty());
        assert!(log.contains("Website 'http://h/leo/2022-01-01' is unreachable"));
    }

    #[tokio::test]
    async fn test_fetch_description_success() {
        let source = StaticSource(Ok(page("Stars align.")));
        let mut log = DiagnosticLog::new();
        let description = fetch_description(&source, "http://h/leo/2022-01-01", &mut log).await;

        assert_eq!(description, "Stars align.");
        assert!(log.is_empty());
    }

    #[test]
    fn test_display_fallback_and_source() {
        let mut horoscope = DailyHoroscope {
            dates: dates(),
            sun_sign: Some("capricorn".to_string()),
            url: Some("https://www.tarot.com/daily-horoscope/capricorn/2022-01-01".to_string()),
            description: String::new(),
            show_source: false,
            log: DiagnosticLog::new(),
        };
        assert_eq!(horoscope.to_string(), "Daily Horoscope [31.Dec.1990, 01.Jan.2022]");
        assert_eq!(
            horoscope.summary(),
            "DailyHoroscope(31.Dec.1990, 01.Jan.2022, Capricorn)"
        );

        horoscope.description = "Stars align.".to_string();
        horoscope.show_source = true;
        assert_eq!(
            horoscope.to_string(),
            "Your Daily Horoscope, Capricorn.\nStars align.\n# Source: https://www.tarot.com/daily-horoscope/capricorn/2022-01-01"
        );
    }
}
