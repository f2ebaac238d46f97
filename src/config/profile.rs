use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Personal data file, e.g. `DATA.json`:
///
/// ```json
/// { "DATE_OF_BIRTH": "1990-12-31" }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(rename = "DATE_OF_BIRTH")]
    pub date_of_birth: Option<String>,
}

impl Profile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_if_present<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        if !path.as_ref().exists() {
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }
}
