// src/config.rs
//! Configuration file for treeseek.

#![deny(missing_docs)]

use crate::error::SeekError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Config struct for treeseek: defaults layered under the command line.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default recursion bound when `-maxdepth` is not given; absent or
    /// negative means unlimited.
    pub maxdepth: Option<i32>,
    /// Colored diagnostics on stderr.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maxdepth: None,
            color: true,
        }
    }
}

impl Config {
    /// Load `.treeseek.toml` from `dir`. If missing, return defaults;
    /// fields missing from the file keep their defaults.
    pub fn load_or_default(dir: &Path) -> SeekError<Self> {
        let file = dir.join(".treeseek.toml");
        if file.exists() {
            let s = fs::read_to_string(&file)?;
            let cfg: Config = toml::from_str(&s)?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }
}
