//! Session configuration.
//!
//! Everything has a default, so an empty YAML file is a valid config:
//!
//! ```yaml
//! units: imperial
//! disc_dir: discs
//! environment: summer
//! log_level: debug
//! launch:
//!   speed: 22.0
//!   roll_angle: -10.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::Constants;
use crate::disc::DiscId;
use crate::error::ConfigError;
use crate::params::LaunchParameters;
use crate::units::UnitSystem;

/// Most discs one comparison can hold.
pub const MAX_DISCS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub units: UnitSystem,
    /// Directory holding `<disc>.yaml` coefficient tables
    pub disc_dir: PathBuf,
    pub launch: LaunchParameters,
    pub constants: Constants,
    /// Named constants preset; replaces `constants` when set
    pub environment: Option<String>,
    /// Default tracing filter, e.g. `info` or `disc_calc=debug`
    pub log_level: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            disc_dir: PathBuf::from("discs"),
            launch: LaunchParameters::default(),
            constants: Constants::default(),
            environment: None,
            log_level: None,
        }
    }
}

impl SessionConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.launch.validate()?;
        config.apply_environment()?;
        config.constants.validate()?;
        Ok(config)
    }

    /// Swap in the constants of the named environment, if one is set.
    pub fn apply_environment(&mut self) -> Result<(), ConfigError> {
        if let Some(name) = &self.environment {
            self.constants =
                Constants::preset(name).ok_or_else(|| ConfigError::UnknownEnvironment(name.clone()))?;
        }
        Ok(())
    }
}

/// A comparison needs between one and [`MAX_DISCS`] discs.
pub fn validate_disc_list(discs: &[DiscId]) -> Result<(), ConfigError> {
    match discs.len() {
        0 => Err(ConfigError::NoDiscs),
        n if n > MAX_DISCS => Err(ConfigError::TooManyDiscs {
            count: n,
            max: MAX_DISCS,
        }),
        _ => Ok(()),
    }
}
