//! Configuration for yarrow.
//!
//! `~/.yarrow/config.toml` (or the file named by `YARROW_CONFIG`) is read into
//! raw, all-optional structs and resolved into engine types in one place.
//! A missing file means defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;
use yarrow_engine::{HousePolicy, InvalidHouseSeedError, PileCounts, RoomOffsets};
use yarrow_types::{HexagramOrder, OrderParseError, State};

pub const CONFIG_ENV: &str = "YARROW_CONFIG";
pub const SEED_ENV: &str = "YARROW_SEED";

// serde takes a function for non-false bool defaults
pub(crate) const fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: TomlError,
    },
    #[error("invalid ritual pile: {0}")]
    Pile(#[from] InvalidHouseSeedError),
    #[error("invalid display order: {0}")]
    Order(#[from] OrderParseError),
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YarrowConfig {
    pub ritual: Option<RitualConfig>,
    pub display: Option<DisplayConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RitualConfig {
    pub yin: Option<usize>,
    pub yang: Option<usize>,
    pub old_yang: Option<usize>,
    pub old_yin: Option<usize>,
    /// Fixed seed; every play repeats the same draw sequence.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Ordering used for hexagram position numbers.
    pub order: Option<String>,
    /// `"dot"` (default) or `"ledger"`.
    pub style: Option<String>,
    pub intent_column: Option<usize>,
    #[serde(default = "default_true")]
    pub split_long_fourth_room: bool,
    pub offsets: Option<RoomOffsets>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            order: None,
            style: None,
            intent_column: None,
            split_long_fourth_room: true,
            offsets: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"debug"` or `"yarrow_engine=trace"`.
    pub level: Option<String>,
    /// Log file tried before `~/.yarrow/logs/yarrow.log`.
    pub file: Option<PathBuf>,
}

/// Configuration resolved into the types the engine consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pile: PileCounts,
    pub seed: Option<u64>,
    pub policy: HousePolicy,
    pub numbering: HexagramOrder,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pile: PileCounts::default(),
            seed: None,
            policy: HousePolicy::default(),
            numbering: HexagramOrder::KingWen,
            log_level: None,
            log_file: None,
        }
    }
}

impl Settings {
    /// Load the config file, resolve it, and apply `YARROW_SEED`.
    pub fn load() -> Result<Self, ConfigError> {
        let config = YarrowConfig::load()?.unwrap_or_default();
        let mut settings = config.resolve()?;
        if let Some(raw) = env::var_os(SEED_ENV) {
            settings.seed = Some(parse_seed(&raw.to_string_lossy())?);
        }
        Ok(settings)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

impl YarrowConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Config loaded");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let defaults = PileCounts::default();
        let ritual = self.ritual.as_ref();
        let count = |field: fn(&RitualConfig) -> Option<usize>, fallback: usize| {
            ritual.and_then(field).unwrap_or(fallback)
        };
        let pile = PileCounts::new(
            count(|r| r.yin, defaults.count(State::Yin)),
            count(|r| r.yang, defaults.count(State::Yang)),
            count(|r| r.old_yang, defaults.count(State::OldYang)),
            count(|r| r.old_yin, defaults.count(State::OldYin)),
        )?;

        let display = self.display.as_ref();
        let mut policy = match display.and_then(|d| d.style.as_deref()) {
            None | Some("dot") => HousePolicy::default(),
            Some("ledger") => HousePolicy::ledger(),
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "display.style",
                    reason: format!("'{other}' is not one of: dot, ledger"),
                });
            }
        };
        if let Some(display) = display {
            policy = policy.with_split_long_fourth_room(display.split_long_fourth_room);
            if let Some(column) = display.intent_column {
                policy = policy.with_intent_column(column);
            }
            if let Some(offsets) = display.offsets {
                policy = policy.with_offsets(offsets);
            }
        }

        let numbering = match display.and_then(|d| d.order.as_deref()) {
            Some(order) => HexagramOrder::parse(order)?,
            None => HexagramOrder::KingWen,
        };

        Ok(Settings {
            pile,
            seed: ritual.and_then(|r| r.seed),
            policy,
            numbering,
            log_level: self.log.as_ref().and_then(|l| l.level.clone()),
            log_file: self.log.as_ref().and_then(|l| l.file.clone()),
        })
    }
}

pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key: SEED_ENV,
        reason: format!("'{raw}' is not an unsigned integer"),
    })
}

/// `YARROW_CONFIG` if set, otherwise `~/.yarrow/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_ENV))
}

fn config_path_from(explicit: Option<OsString>) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => yarrow_dir().map(|dir| dir.join("config.toml")),
    }
}

/// `~/.yarrow`.
#[must_use]
pub fn yarrow_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".yarrow"))
}
