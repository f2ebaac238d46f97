use crate::domain::model::{DiagnosticLog, NumberDescriptions, SignRange};
use crate::domain::ports::Storage;
use crate::utils::error::{DailyInfoError, Result};
use serde::de::DeserializeOwned;

/// Files of this size or smaller (`[]`, `{}`) count as empty.
const MIN_FILE_LEN: usize = 2;

async fn load_json<S, T>(storage: &S, path: &str) -> Result<T>
where
    S: Storage,
    T: DeserializeOwned,
{
    let bytes = storage.read_file(path).await?;
    if bytes.len() <= MIN_FILE_LEN {
        return Err(DailyInfoError::EmptyFileError {
            path: storage.describe(path),
        });
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read-only lookup tables. Either table may be empty.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub sign_ranges: Vec<SignRange>,
    pub number_descriptions: NumberDescriptions,
}

impl ReferenceData {
    pub async fn load_sign_ranges<S: Storage>(
        storage: &S,
        path: &str,
        log: &mut DiagnosticLog,
    ) -> Vec<SignRange> {
        match load_json::<_, Vec<SignRange>>(storage, path).await {
            Ok(ranges) => {
                tracing::debug!("Loaded {} sign ranges from {}", ranges.len(), storage.describe(path));
                ranges
            }
            Err(e) => {
                tracing::debug!("sign ranges not loaded: {}", e);
                log.error(format!("JSON File '{}' wasn't used.", storage.describe(path)));
                Vec::new()
            }
        }
    }

    pub async fn load_number_descriptions<S: Storage>(
        storage: &S,
        path: &str,
        log: &mut DiagnosticLog,
    ) -> NumberDescriptions {
        match load_json::<_, NumberDescriptions>(storage, path).await {
            Ok(table) => {
                tracing::debug!(
                    "Loaded {} number descriptions from {}",
                    table.len(),
                    storage.describe(path)
                );
                table
            }
            Err(e) => {
                tracing::debug!("number descriptions not loaded: {}", e);
                log.error(format!(
                    "JSON File '{}' wasn't used, no description will be added.",
                    storage.describe(path)
                ));
                NumberDescriptions::new()
            }
        }
    }
}
