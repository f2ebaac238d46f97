use crate::config::Settings;
use crate::utils::error::{DailyInfoError, Result};
use crate::utils::validation::{validate_iso_date, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub data: Option<DataConfig>,
    pub horoscope: Option<HoroscopeConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    /// 沒有提供生日時使用的日期 (YYYY-MM-DD)
    pub fallback_birth_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    pub dir: Option<String>,
    pub sign_ranges_file: Option<String>,
    pub number_descriptions_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HoroscopeConfig {
    pub base_url: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DailyInfoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DailyInfoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DAILY_INFO_DATA})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DailyInfoError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays the values present in this file on top of `base`.
    pub fn apply_to(&self, mut base: Settings) -> Result<Settings> {
        if let Some(input) = &self.input {
            if let Some(date) = &input.fallback_birth_date {
                base.fallback_birth_date = validate_iso_date("input.fallback_birth_date", date)?;
            }
        }

        if let Some(data) = &self.data {
            if let Some(dir) = &data.dir {
                base.data_dir = dir.clone();
            }
            if let Some(file) = &data.sign_ranges_file {
                base.sign_ranges_file = file.clone();
            }
            if let Some(file) = &data.number_descriptions_file {
                base.number_descriptions_file = file.clone();
            }
        }

        if let Some(horoscope) = &self.horoscope {
            if let Some(url) = &horoscope.base_url {
                base.horoscope_base_url = url.clone();
            }
        }

        base.validate()?;
        Ok(base)
    }

    pub fn to_settings(&self) -> Result<Settings> {
        self.apply_to(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[input]
fallback_birth_date = "1985-06-15"

[data]
dir = "./reference"
sign_ranges_file = "signs.json"
number_descriptions_file = "numbers.json"

[horoscope]
base_url = "https://horoscope.example.com/daily"
"#;

        let settings = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .to_settings()
            .unwrap();

        assert_eq!(settings.data_dir(), "./reference");
        assert_eq!(settings.sign_ranges_file(), "signs.json");
        assert_eq!(settings.number_descriptions_file(), "numbers.json");
        assert_eq!(settings.horoscope_base_url(), "https://horoscope.example.com/daily");
        assert_eq!(
            settings.fallback_birth_date(),
            NaiveDate::from_ymd_opt(1985, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = TomlConfig::from_toml_str("").unwrap().to_settings().unwrap();
        let defaults = Settings::default();

        assert_eq!(settings.data_dir(), defaults.data_dir());
        assert_eq!(settings.horoscope_base_url(), defaults.horoscope_base_url());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DAILY_INFO_TEST_DATA_DIR", "/srv/daily-info");

        let toml_content = r#"
[data]
dir = "${DAILY_INFO_TEST_DATA_DIR}"
"#;

        let settings = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .to_settings()
            .unwrap();
        assert_eq!(settings.data_dir(), "/srv/daily-info");

        std::env::remove_var("DAILY_INFO_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[horoscope]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(bad_url.to_settings().is_err());

        let bad_date =
            TomlConfig::from_toml_str("[input]\nfallback_birth_date = \"31.12.1990\"\n").unwrap();
        assert!(bad_date.to_settings().is_err());

        assert!(TomlConfig::from_toml_str("[data\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[data]\nsign_ranges_file = \"zodiac.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.data.unwrap().sign_ranges_file.as_deref(),
            Some("zodiac.json")
        );
    }
}
