use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Birth date and the date the reading is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub birth_date: NaiveDate,
    pub target_date: NaiveDate,
}

/// `DD.Mon.YYYY`, e.g. `31.Dec.1990`
pub const DISPLAY_DATE_FORMAT: &str = "%d.%b.%Y";

impl DateRange {
    pub fn new(birth_date: NaiveDate, target_date: NaiveDate) -> Self {
        Self {
            birth_date,
            target_date,
        }
    }

    pub fn dates(&self) -> String {
        format!(
            "{}, {}",
            self.birth_date.format(DISPLAY_DATE_FORMAT),
            self.target_date.format(DISPLAY_DATE_FORMAT)
        )
    }
}

/// Reduced components (birth day, birth month, target day, target month,
/// target year) and the reduction of their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitReduction {
    pub components: [u32; 5],
    pub total: u32,
}

impl DigitReduction {
    pub fn equation(&self) -> String {
        self.components
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("+")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignRange {
    pub name: String,
    /// `MM-DD`
    pub begin: String,
    /// `MM-DD`
    pub end: String,
}

pub type NumberDescriptions = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Info,
    Error,
}

/// Append-only list of recovery notes. Entries are informational, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
    entries: Vec<String>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(DiagnosticLevel::Info, message.into());
    }

    fn push(&mut self, level: DiagnosticLevel, message: String) {
        let entry = match level {
            DiagnosticLevel::Error => {
                tracing::warn!("{}", message);
                format!("Error - {}", message)
            }
            DiagnosticLevel::Info => {
                tracing::info!("{}", message);
                format!("Info - {}", message)
            }
        };
        self.entries.push(entry);
    }

    pub fn extend(&mut self, other: &DiagnosticLog) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.contains(needle))
    }
}

impl fmt::Display for DiagnosticLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.entries.iter().map(|e| format!("[{}]", e)).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
