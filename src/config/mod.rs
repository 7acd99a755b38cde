//! Runtime configuration read from the environment.
//!
//! Every setting has a default so the service starts with no configuration
//! at all: in-memory storage, in-memory photos, port 8080.

use crate::adoption::domain::DEFAULT_REPORT_THRESHOLD;
use crate::listing::domain::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::media::domain::DEFAULT_MAX_IMAGE_BYTES;
use camino::Utf8PathBuf;
use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Listen address variable.
pub const BIND_VAR: &str = "AMIGO_FIEL_BIND";
/// `PostgreSQL` connection string variable.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Photo directory variable.
pub const MEDIA_DIR_VAR: &str = "AMIGO_FIEL_MEDIA_DIR";
/// Public base URL variable.
pub const PUBLIC_URL_VAR: &str = "AMIGO_FIEL_PUBLIC_URL";
/// Page size variable.
pub const PAGE_SIZE_VAR: &str = "AMIGO_FIEL_PAGE_SIZE";
/// Report threshold variable.
pub const REPORT_THRESHOLD_VAR: &str = "AMIGO_FIEL_REPORT_THRESHOLD";
/// Upload size limit variable.
pub const MAX_IMAGE_BYTES_VAR: &str = "AMIGO_FIEL_MAX_IMAGE_BYTES";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable held a value that could not be parsed.
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A numeric variable was outside its accepted range.
    #[error("{key} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        /// Variable name.
        key: &'static str,
        /// Smallest accepted value.
        min: u64,
        /// Largest accepted value.
        max: u64,
        /// Supplied value.
        actual: u64,
    },
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind: SocketAddr,
    /// `PostgreSQL` URL; `None` selects in-memory repositories.
    pub database_url: Option<String>,
    /// Directory for uploaded photos; `None` keeps them in memory.
    pub media_dir: Option<Utf8PathBuf>,
    /// Public base URL used for photo and share links.
    pub public_url: String,
    /// Listings per page.
    pub page_size: u32,
    /// Reports after which an adoption's contact is hidden.
    pub report_threshold: u32,
    /// Largest accepted photo upload in bytes.
    pub max_image_bytes: usize,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable if it is set. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind = parse_or(BIND_VAR, read(BIND_VAR), DEFAULT_BIND)?;
        let page_size: u32 =
            parse_or(PAGE_SIZE_VAR, read(PAGE_SIZE_VAR), &DEFAULT_PAGE_SIZE.to_string())?;
        ensure_range(PAGE_SIZE_VAR, page_size.into(), 1, MAX_PAGE_SIZE.into())?;
        let report_threshold: u32 = parse_or(
            REPORT_THRESHOLD_VAR,
            read(REPORT_THRESHOLD_VAR),
            &DEFAULT_REPORT_THRESHOLD.to_string(),
        )?;
        ensure_range(
            REPORT_THRESHOLD_VAR,
            report_threshold.into(),
            1,
            i32::MAX.unsigned_abs().into(),
        )?;
        let max_image_bytes: usize = parse_or(
            MAX_IMAGE_BYTES_VAR,
            read(MAX_IMAGE_BYTES_VAR),
            &DEFAULT_MAX_IMAGE_BYTES.to_string(),
        )?;
        if max_image_bytes == 0 {
            return Err(ConfigError::OutOfRange {
                key: MAX_IMAGE_BYTES_VAR,
                min: 1,
                max: u64::MAX,
                actual: 0,
            });
        }

        Ok(Self {
            bind,
            database_url: read(DATABASE_URL_VAR).map(|url| url.trim().to_owned()),
            media_dir: read(MEDIA_DIR_VAR).map(|dir| Utf8PathBuf::from(dir.trim())),
            public_url: read(PUBLIC_URL_VAR)
                .map_or_else(|| DEFAULT_PUBLIC_URL.to_owned(), |url| url.trim().to_owned())
                .trim_end_matches('/')
                .to_owned(),
            page_size,
            report_threshold,
            max_image_bytes,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = raw.unwrap_or_else(|| default.to_owned());
    value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        key,
        reason: err.to_string(),
        value,
    })
}

const fn ensure_range(key: &'static str, actual: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if actual < min || actual > max {
        return Err(ConfigError::OutOfRange {
            key,
            min,
            max,
            actual,
        });
    }
    Ok(())
}
