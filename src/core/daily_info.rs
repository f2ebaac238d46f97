use crate::core::dates::normalize_dates;
use crate::core::horoscope::{fetch_description, DailyHoroscope};
use crate::core::numerology::{compute, DailyNumber};
use crate::core::reference::ReferenceData;
use crate::core::sun_sign::{horoscope_url, resolve_sign};
use crate::domain::model::{DateRange, DiagnosticLog};
use crate::domain::ports::{ConfigProvider, HoroscopeSource, Reading, Storage};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub compute_number: bool,
    pub fetch_horoscope: bool,
    pub show_source: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            compute_number: true,
            fetch_horoscope: true,
            show_source: false,
        }
    }
}

impl RunOptions {
    /// Resolve dates and sign only; nothing is calculated or fetched.
    pub fn dry_run() -> Self {
        Self {
            compute_number: false,
            fetch_horoscope: false,
            show_source: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DailyReport {
    /// Notes from date parsing, shared by both readings.
    pub date_log: DiagnosticLog,
    pub horoscope: DailyHoroscope,
    pub number: DailyNumber,
}

impl DailyReport {
    pub fn readings(&self) -> [&dyn Reading; 2] {
        [&self.horoscope as &dyn Reading, &self.number]
    }

    pub fn diagnostics(&self) -> DiagnosticLog {
        let mut log = self.date_log.clone();
        for reading in self.readings() {
            log.extend(reading.diagnostics());
        }
        log
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: Vec<String> = self
            .readings()
            .iter()
            .map(|r| format!("\n ~ {} ~\n\n{}", r.summary(), r))
            .collect();
        writeln!(f, "{}", sections.join("\n"))
    }
}

pub struct DailyInfoEngine<S: Storage, C: ConfigProvider, H: HoroscopeSource> {
    storage: S,
    config: C,
    source: H,
    options: RunOptions,
}

impl<S: Storage, C: ConfigProvider, H: HoroscopeSource> DailyInfoEngine<S, C, H> {
    pub fn new(storage: S, config: C, source: H) -> Self {
        Self::new_with_options(storage, config, source, RunOptions::default())
    }

    pub fn new_with_options(storage: S, config: C, source: H, options: RunOptions) -> Self {
        Self {
            storage,
            config,
            source,
            options,
        }
    }

    /// Runs one query. Every recoverable problem ends up in the report's diagnostics.
    pub async fn run(
        &self,
        birth_date: Option<&str>,
        target_date: Option<&str>,
        today: NaiveDate,
    ) -> DailyReport {
        tracing::info!("Starting daily info for birth date {:?}", birth_date);

        let mut date_log = DiagnosticLog::new();
        let dates = normalize_dates(birth_date, target_date, today, &mut date_log);
        tracing::debug!("Resolved dates: {}", dates.dates());

        let horoscope = self.horoscope(dates).await;
        let number = self.number(dates).await;

        tracing::info!("Daily info ready: {}, {}", horoscope.summary(), number.summary());
        DailyReport {
            date_log,
            horoscope,
            number,
        }
    }

    async fn number(&self, dates: DateRange) -> DailyNumber {
        let mut log = DiagnosticLog::new();
        let descriptions = ReferenceData::load_number_descriptions(
            &self.storage,
            self.config.number_descriptions_file(),
            &mut log,
        )
        .await;

        let reduction = if self.options.compute_number {
            Some(compute(&dates))
        } else {
            log.info("Dates are saved but no numbers were calculated.");
            None
        };

        DailyNumber::describe(dates, reduction, &descriptions, log)
    }

    async fn horoscope(&self, dates: DateRange) -> DailyHoroscope {
        let mut log = DiagnosticLog::new();
        let ranges =
            ReferenceData::load_sign_ranges(&self.storage, self.config.sign_ranges_file(), &mut log)
                .await;

        let sun_sign = resolve_sign(&ranges, dates.birth_date, &mut log).map(|s| s.name.clone());
        let url = sun_sign
            .as_deref()
            .map(|sign| horoscope_url(self.config.horoscope_base_url(), sign, dates.target_date));

        let description = match (&url, self.options.fetch_horoscope) {
            (Some(url), true) => fetch_description(&self.source, url, &mut log).await,
            (Some(_), false) => {
                log.info("Dates are saved but no description was fetched.");
                String::new()
            }
            (None, _) => {
                log.error("No sign ranges available, the horoscope was not fetched.");
                String::new()
            }
        };

        DailyHoroscope {
            dates,
            sun_sign,
            url,
            description,
            show_source: self.options.show_source,
            log,
        }
    }
}
