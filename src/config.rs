// src/config.rs

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use url::Url;

use crate::fetch::Source;
use crate::parse::ParseMode;

/// Path of an optional YAML config file.
pub const CONFIG_ENV: &str = "BOOTHGRID_CONFIG";
pub const SOURCE_ENV: &str = "BOOTHGRID_SOURCE";
pub const BASE_URL_ENV: &str = "BOOTHGRID_BASE_URL";
pub const OUTPUT_ENV: &str = "BOOTHGRID_OUTPUT";
pub const TIMEOUT_ENV: &str = "BOOTHGRID_TIMEOUT_SECS";
pub const PARSE_MODE_ENV: &str = "BOOTHGRID_PARSE_MODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config file {path:?}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// CSV location: URL, path, or a reference relative to `base_url`.
    pub source: String,
    /// Address the page is served from; relative sources resolve against it.
    pub base_url: Option<String>,
    /// Where the rendered page is written.
    pub output: PathBuf,
    pub timeout_secs: Option<u64>,
    pub parse_mode: ParseMode,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "booths.csv".to_string(),
            base_url: None,
            output: PathBuf::from("index.html"),
            timeout_secs: None,
            parse_mode: ParseMode::Split,
            title: "攤位列表".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `$BOOTHGRID_CONFIG`, then `BOOTHGRID_*` variables, then
    /// positional `[source] [output]` arguments.
    pub fn load() -> Result<Self, ConfigError> {
        let file = env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::from_sources(file.as_deref(), |k| env::var(k).ok(), env::args().skip(1))
    }

    pub fn from_sources<F, I>(file: Option<&Path>, lookup: F, args: I) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = match file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(SOURCE_ENV) {
            self.source = v;
        }
        if let Some(v) = lookup(BASE_URL_ENV) {
            self.base_url = Some(v);
        }
        if let Some(v) = lookup(OUTPUT_ENV) {
            self.output = PathBuf::from(v);
        }
        if let Some(v) = lookup(TIMEOUT_ENV) {
            let secs = v.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: TIMEOUT_ENV,
                value: v.clone(),
                reason: e.to_string(),
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Some(v) = lookup(PARSE_MODE_ENV) {
            self.parse_mode = v
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: PARSE_MODE_ENV,
                    value: v.clone(),
                    reason,
                })?;
        }
        Ok(())
    }

    fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        if let Some(source) = args.next() {
            self.source = source;
        }
        if let Some(output) = args.next() {
            self.output = PathBuf::from(output);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "source",
                value: self.source.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        self.base_url()?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<Option<Url>, ConfigError> {
        self.base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
                    key: "base_url",
                    value: raw.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The [`Source`] this config points at.
    pub fn resolve_source(&self) -> anyhow::Result<Source> {
        let base = self.base_url()?;
        Ok(Source::resolve(self.source.trim(), base.as_ref())?)
    }
}
