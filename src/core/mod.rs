pub mod daily_info;
pub mod dates;
pub mod horoscope;
pub mod numerology;
pub mod reference;
pub mod sun_sign;

pub use crate::domain::model::{DateRange, DiagnosticLog, DigitReduction, SignRange};
pub use crate::domain::ports::{ConfigProvider, HoroscopeSource, Reading, Storage};
pub use crate::utils::error::Result;
