use crate::domain::model::{DateRange, DiagnosticLog};
use crate::utils::error::{DailyInfoError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// ISO date-time forms with a UTC offset; the date is taken in that offset.
const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// 解析 ISO 日期 (YYYY-MM-DD)，也接受 ISO 日期時間並只取日期部分
pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    let date_error = match text.parse::<NaiveDate>() {
        Ok(date) => return Ok(date),
        Err(e) => e,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.date_naive());
    }
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt.date_naive());
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt.date());
        }
    }

    Err(DailyInfoError::InvalidDateError {
        value: text.to_string(),
        reason: date_error.to_string(),
    })
}

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

/// Builds a [`DateRange`] from user text. Never fails: unparseable input falls
/// back to `today` (target) or the target date (birth) and is noted in `log`.
pub fn normalize_dates(
    birth_text: Option<&str>,
    target_text: Option<&str>,
    today: NaiveDate,
    log: &mut DiagnosticLog,
) -> DateRange {
    let target_date = match present(target_text) {
        Some(text) => parse_iso_date(text).unwrap_or_else(|e| {
            tracing::debug!("target date rejected: {}", e);
            log.error(
                "Argument 'target_date' is not in ISO format (YYYY-MM-DD), using today's date.",
            );
            today
        }),
        None => today,
    };

    let birth_date = match present(birth_text) {
        Some(text) => parse_iso_date(text).unwrap_or_else(|e| {
            tracing::debug!("birth date rejected: {}", e);
            log.error(
                "Argument 'birth_date' is not in ISO format (YYYY-MM-DD), using the 'target_date' date.",
            );
            target_date
        }),
        None => target_date,
    };

    DateRange::new(birth_date, target_date)
}
