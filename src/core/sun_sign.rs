use crate::domain::model::{DiagnosticLog, SignRange};
use crate::utils::error::{DailyInfoError, Result};
use chrono::{Datelike, NaiveDate};

pub const DEFAULT_BASE_URL: &str = "https://www.tarot.com/daily-horoscope";

/// Parses `MM-DD` into `(month, day)`.
pub fn parse_month_day(text: &str) -> Result<(u32, u32)> {
    let invalid = |reason: &str| DailyInfoError::InvalidDateError {
        value: text.to_string(),
        reason: reason.to_string(),
    };

    let (month, day) = text.trim().split_once('-').ok_or_else(|| invalid("expected MM-DD"))?;
    let month: u32 = month.parse().map_err(|_| invalid("month is not a number"))?;
    let day: u32 = day.parse().map_err(|_| invalid("day is not a number"))?;
    Ok((month, day))
}

/// Inclusive window; `begin > end` wraps around (e.g. months 12..01).
fn in_window(value: u32, begin: u32, end: u32) -> bool {
    if begin <= end {
        value >= begin && value <= end
    } else {
        value >= begin || value <= end
    }
}

/// Scans `ranges` in order. The first range whose month window holds the birth
/// month decides: itself if the day window also matches, otherwise the next
/// range (wrapping to the first). No month match falls back to the first range.
pub fn resolve_sign<'a>(
    ranges: &'a [SignRange],
    birth_date: NaiveDate,
    log: &mut DiagnosticLog,
) -> Option<&'a SignRange> {
    let first = ranges.first()?;
    let (month, day) = (birth_date.month(), birth_date.day());

    for (i, range) in ranges.iter().enumerate() {
        let bounds = parse_month_day(&range.begin)
            .and_then(|begin| parse_month_day(&range.end).map(|end| (begin, end)));
        let ((begin_month, begin_day), (end_month, end_day)) = match bounds {
            Ok(bounds) => bounds,
            Err(e) => {
                log.error(format!("Sign range '{}' skipped: {}", range.name, e));
                continue;
            }
        };

        if in_window(month, begin_month, end_month) {
            if in_window(day, begin_day, end_day) {
                return Some(range);
            }
            return Some(&ranges[(i + 1) % ranges.len()]);
        }
    }

    Some(first)
}

pub fn horoscope_url(base_url: &str, sign: &str, target_date: NaiveDate) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        sign.to_lowercase(),
        target_date.format("%Y-%m-%d")
    )
}

/// `"capricorn"` -> `"Capricorn"`
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(name: &str, begin: &str, end: &str) -> SignRange {
        SignRange {
            name: name.to_string(),
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, m, d).unwrap()
    }

    fn resolve(ranges: &[SignRange], m: u32, d: u32) -> Option<String> {
        resolve_sign(ranges, date(m, d), &mut DiagnosticLog::new()).map(|s| s.name.clone())
    }

    #[test]
    fn test_capricorn_boundary_day_21_vs_22() {
        let ranges = vec![
            sign("Capricorn", "12-22", "01-19"),
            sign("Aquarius", "01-20", "02-18"),
        ];
        assert_eq!(resolve(&ranges, 12, 21).as_deref(), Some("Aquarius"));
        assert_eq!(resolve(&ranges, 12, 22).as_deref(), Some("Capricorn"));
    }

    #[test]
    fn test_month_records_give_zodiac_boundaries() {
        let ranges = vec![
            sign("Capricorn", "01-01", "01-19"),
            sign("Aquarius", "02-01", "02-18"),
            sign("Pisces", "03-01", "03-20"),
            sign("Aries", "04-01", "04-19"),
        ];
        assert_eq!(resolve(&ranges, 1, 19).as_deref(), Some("Capricorn"));
        assert_eq!(resolve(&ranges, 1, 20).as_deref(), Some("Aquarius"));
        assert_eq!(resolve(&ranges, 3, 20).as_deref(), Some("Pisces"));
        assert_eq!(resolve(&ranges, 3, 21).as_deref(), Some("Aries"));
        assert_eq!(resolve(&ranges, 4, 20).as_deref(), Some("Capricorn"));
    }

    #[test]
    fn test_day_mismatch_selects_next_range() {
        let ranges = vec![
            sign("Alpha", "03-01", "04-10"),
            sign("Beta", "05-01", "06-10"),
        ];
        assert_eq!(resolve(&ranges, 3, 5).as_deref(), Some("Alpha"));
        assert_eq!(resolve(&ranges, 3, 10).as_deref(), Some("Alpha"));
        assert_eq!(resolve(&ranges, 3, 11).as_deref(), Some("Beta"));
        assert_eq!(resolve(&ranges, 4, 1).as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_next_range_wraps_to_first() {
        let ranges = vec![
            sign("Alpha", "01-01", "02-10"),
            sign("Omega", "11-01", "12-10"),
        ];
        assert_eq!(resolve(&ranges, 12, 20).as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_no_month_window_defaults_to_first() {
        let ranges = vec![
            sign("Alpha", "01-01", "02-10"),
            sign("Beta", "03-01", "04-10"),
        ];
        assert_eq!(resolve(&ranges, 7, 4).as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_empty_ranges_resolve_nothing() {
        assert_eq!(resolve(&[], 7, 4), None);
    }

    #[test]
    fn test_malformed_range_is_skipped() {
        let ranges = vec![
            sign("Broken", "xx", "02-10"),
            sign("Beta", "01-01", "02-28"),
        ];
        let mut log = DiagnosticLog::new();
        let resolved = resolve_sign(&ranges, date(2, 3), &mut log).map(|s| s.name.as_str());
        assert_eq!(resolved, Some("Beta"));
        assert!(log.contains("Sign range 'Broken' skipped"));
    }

    #[test]
    fn test_horoscope_url() {
        let target = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(
            horoscope_url(DEFAULT_BASE_URL, "Capricorn", target),
            "https://www.tarot.com/daily-horoscope/capricorn/2022-01-01"
        );
        assert_eq!(
            horoscope_url("http://localhost:8080/h/", "LEO", target),
            "http://localhost:8080/h/leo/2022-01-01"
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("capricorn"), "Capricorn");
        assert_eq!(capitalize("sAGITTARIUS"), "Sagittarius");
        assert_eq!(capitalize(""), "");
    }
}
