use crate::error::ConfigError;
use crate::loader::DEFAULT_STRAINS_PATH;
use crate::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";
pub const DEFAULT_TITLE: &str = "MaryPy Cannabis Directory";

/// Runtime settings for the dashboard server.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub bind_addr: String,
    pub page_size: usize,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_STRAINS_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read `MARYPY_*` variables, then let positional arguments
    /// (`[data_path] [bind_addr]`) override them.
    pub fn from_env_and_args(args: &[String]) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), args)
    }

    /// Build a config from any variable source. `args` excludes the program name.
    pub fn from_lookup<F>(lookup: F, args: &[String]) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(path) = lookup("MARYPY_DATA_PATH") {
            cfg.data_path = PathBuf::from(non_empty("MARYPY_DATA_PATH", path)?);
        }
        if let Some(addr) = lookup("MARYPY_BIND_ADDR") {
            cfg.bind_addr = non_empty("MARYPY_BIND_ADDR", addr)?;
        }
        if let Some(size) = lookup("MARYPY_PAGE_SIZE") {
            cfg.page_size = parse_page_size(&size)?;
        }
        if let Some(title) = lookup("MARYPY_TITLE") {
            cfg.title = non_empty("MARYPY_TITLE", title)?;
        }

        if let Some(path) = args.first() {
            cfg.data_path = PathBuf::from(path);
        }
        if let Some(addr) = args.get(1) {
            cfg.bind_addr = addr.clone();
        }

        Ok(cfg)
    }
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { key });
    }
    Ok(value)
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    let key = "MARYPY_PAGE_SIZE";
    let value = raw.trim().parse::<usize>().map_err(|_| ConfigError::NotANumber {
        key,
        value: raw.to_string(),
    })?;
    if !(1..=MAX_PAGE_SIZE).contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min: 1,
            max: MAX_PAGE_SIZE,
        });
    }
    Ok(value)
}
