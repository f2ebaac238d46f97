use crate::domain::model::{DateRange, DiagnosticLog, DigitReduction, NumberDescriptions};
use crate::domain::ports::Reading;
use chrono::Datelike;
use std::fmt;

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Numbers that carry a meaning: 1..=9 and the master numbers.
pub fn is_daily_number(n: u32) -> bool {
    (1..=9).contains(&n) || is_master(n)
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digit reduction with at most one extra pass.
///
/// `9999 -> 36 -> 9`, `29 -> 11` (kept when `preserve_master`),
/// `1999 -> 28 -> 10`: the second pass is not repeated.
pub fn reduce(n: u32, preserve_master: bool) -> u32 {
    if preserve_master && is_master(n) {
        return n;
    }
    if n < 10 {
        return n;
    }

    let sum = digit_sum(n);
    if sum >= 10 && !(preserve_master && is_master(sum)) {
        return digit_sum(sum);
    }
    sum
}

pub fn compute(dates: &DateRange) -> DigitReduction {
    let components = [
        reduce(dates.birth_date.day(), true),
        reduce(dates.birth_date.month(), true),
        reduce(dates.target_date.day(), true),
        reduce(dates.target_date.month(), true),
        reduce(dates.target_date.year().unsigned_abs(), true),
    ];
    let total = reduce(components.iter().sum(), true);

    DigitReduction { components, total }
}

/// The Daily Number reading for one date range.
#[derive(Debug, Clone)]
pub struct DailyNumber {
    pub dates: DateRange,
    pub reduction: Option<DigitReduction>,
    pub description: String,
    pub information: String,
    pub log: DiagnosticLog,
}

impl DailyNumber {
    /// `reduction` is `None` when the numbers were not calculated.
    pub fn describe(
        dates: DateRange,
        reduction: Option<DigitReduction>,
        descriptions: &NumberDescriptions,
        log: DiagnosticLog,
    ) -> Self {
        let number = reduction.map(|r| r.total).unwrap_or(0);

        let (information, description) = match reduction {
            Some(r) if is_daily_number(number) => (
                format!("Your Daily Number is {}. [{}]", number, r.equation()),
                descriptions
                    .get(&number.to_string())
                    .cloned()
                    .unwrap_or_default(),
            ),
            _ => (format!("Daily Number [{}]", dates.dates()), String::new()),
        };

        Self {
            dates,
            reduction,
            description,
            information,
            log,
        }
    }

    pub fn number(&self) -> u32 {
        self.reduction.map(|r| r.total).unwrap_or(0)
    }
}

impl fmt::Display for DailyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.information)?;
        if !self.description.is_empty() {
            write!(f, "\n{}", self.description)?;
        }
        Ok(())
    }
}

impl Reading for DailyNumber {
    fn summary(&self) -> String {
        format!("DailyNumber({}, {})", self.dates.dates(), self.number())
    }

    fn diagnostics(&self) -> &DiagnosticLog {
        &self.log
    }
}
