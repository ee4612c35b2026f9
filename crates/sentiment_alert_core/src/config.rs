use thiserror::Error;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_LANGUAGE_CODE: &str = "en";
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = 0.6;

pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const SNS_TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";
pub const LANGUAGE_CODE_VAR: &str = "LANGUAGE_CODE";
pub const NEGATIVE_THRESHOLD_VAR: &str = "NEGATIVE_THRESHOLD";
pub const DDB_TABLE_VAR: &str = "DDB_TABLE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("NEGATIVE_THRESHOLD must be a finite number, got '{0}'")]
    InvalidThreshold(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandlerConfig {
    pub log_level: String,
    pub language_code: String,
    pub negative_threshold: f64,
    pub notification_channel: Option<String>,
    pub storage_target: Option<String>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            negative_threshold: DEFAULT_NEGATIVE_THRESHOLD,
            notification_channel: None,
            storage_target: None,
        }
    }
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let negative_threshold = match non_blank(lookup(NEGATIVE_THRESHOLD_VAR)) {
            Some(raw) => parse_threshold(&raw)?,
            None => defaults.negative_threshold,
        };

        Ok(Self {
            log_level: non_blank(lookup(LOG_LEVEL_VAR)).unwrap_or(defaults.log_level),
            language_code: non_blank(lookup(LANGUAGE_CODE_VAR)).unwrap_or(defaults.language_code),
            negative_threshold,
            notification_channel: non_blank(lookup(SNS_TOPIC_ARN_VAR)),
            storage_target: non_blank(lookup(DDB_TABLE_VAR)),
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConfigError::InvalidThreshold(raw.to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
