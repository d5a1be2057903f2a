// Process configuration.
//
// Read once at startup. Every key is optional and falls back to a default suited to local
// development against the seeded in-memory store.

use crate::modules::reports::core::sort::{SortError, Sorter};
use crate::modules::reports::use_cases::generate_report::handler::ReportSettings;
use crate::shared::core::dictionary::Dictionaries;
use crate::shared::infrastructure::storage::remote::normalize_base_url;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const ADDR_VAR: &str = "OPS_DASHBOARD_ADDR";
pub const STORAGE_VAR: &str = "OPS_DASHBOARD_STORAGE";
pub const REMOTE_URL_VAR: &str = "OPS_DASHBOARD_REMOTE_URL";
pub const SORT_LOCALE_VAR: &str = "OPS_DASHBOARD_SORT_LOCALE";
pub const REPORT_WEEKS_VAR: &str = "OPS_DASHBOARD_REPORT_WEEKS";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REMOTE_URL: &str = "http://127.0.0.1:8090";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPS_DASHBOARD_ADDR={value:?} is not a socket address")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("OPS_DASHBOARD_STORAGE={0:?} must be \"fixture\" or \"remote\"")]
    UnknownStorage(String),

    #[error("OPS_DASHBOARD_SORT_LOCALE is unusable: {0}")]
    InvalidLocale(#[source] SortError),

    #[error("OPS_DASHBOARD_REPORT_WEEKS={0:?} must be a positive whole number")]
    InvalidReportWeeks(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageSelection {
    /// Seeded in-memory demo data.
    Fixture,
    Remote { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub storage: StorageSelection,
    pub reports: ReportSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_addr = read(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let storage = match read(STORAGE_VAR).as_deref() {
            None | Some("fixture") => StorageSelection::Fixture,
            Some("remote") => StorageSelection::Remote {
                base_url: normalize_base_url(
                    &read(REMOTE_URL_VAR).unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string()),
                ),
            },
            Some(other) => return Err(ConfigError::UnknownStorage(other.to_string())),
        };

        let defaults = ReportSettings::default();
        let sort_locale = read(SORT_LOCALE_VAR).unwrap_or(defaults.sort_locale);
        Sorter::new(&Dictionaries::default(), &sort_locale).map_err(ConfigError::InvalidLocale)?;

        let report_weeks = match read(REPORT_WEEKS_VAR) {
            None => defaults.report_weeks,
            Some(raw) => match raw.parse::<u32>() {
                Ok(weeks) if weeks > 0 => weeks,
                _ => return Err(ConfigError::InvalidReportWeeks(raw)),
            },
        };

        Ok(Self {
            addr,
            storage,
            reports: ReportSettings {
                sort_locale,
                report_weeks,
            },
        })
    }
}
