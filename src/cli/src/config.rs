use std::{fs, path::Path};

use color_eyre::eyre::WrapErr;
use serde::Deserialize;

/// Defaults for the command line, read from a TOML file.
///
/// ```toml
/// size = 4
///
/// [scramble]
/// count = 30
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub size: usize,
    pub scramble: ScrambleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    pub count: usize,
    pub seed: u64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            size: 3,
            scramble: ScrambleConfig::default(),
        }
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig { count: 20, seed: 0 }
    }
}

impl CubeConfig {
    /// Read the config file if one was given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<CubeConfig> {
        let Some(path) = path else {
            return Ok(CubeConfig::default());
        };

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read the config file {}", path.display()))?;

        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse the config file {}", path.display()))
    }
}
