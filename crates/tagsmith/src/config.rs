//! # Configuration
//!
//! Grid header resolution reads and writes two query parameters. Their names
//! are configurable through [`GridConfig`], managed by [`confique`].
//!
//! ## Loading
//!
//! Configuration is resolved in priority order:
//! 1. **TOML file**: passed to [`GridConfig::load`].
//! 2. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sort_by_param` | `sb` | Query parameter naming the sorted column |
//! | `sort_dir_param` | `sd` | Query parameter holding the sort direction |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Query parameter names used by grid headers, stored in e.g. `grid.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Parameter holding the column the grid is sorted by.
    #[config(default = "sb")]
    pub sort_by_param: String,

    /// Parameter holding the sort direction.
    #[config(default = "sd")]
    pub sort_dir_param: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            sort_by_param: "sb".to_string(),
            sort_dir_param: "sd".to_string(),
        }
    }
}

impl GridConfig {
    /// Load from a TOML file, falling back to defaults for missing keys.
    ///
    /// A missing file is not an error; every key then takes its default.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = GridConfig::builder().file(path.as_ref()).load()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.sort_by_param, "sb");
        assert_eq!(config.sort_dir_param, "sd");
    }

    #[test]
    fn test_toml_deserialize() {
        let config: GridConfig = toml::from_str(
            r#"
            sort_by_param = "order"
            sort_dir_param = "dir"
            "#,
        )
        .unwrap();
        assert_eq!(config.sort_by_param, "order");
        assert_eq!(config.sort_dir_param, "dir");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "sort_by_param = \"order\"").unwrap();

        let config = GridConfig::load(file.path()).unwrap();
        assert_eq!(config.sort_by_param, "order");
        assert_eq!(config.sort_dir_param, "sd");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GridConfig::load(dir.path().join("grid.toml")).unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn test_load_invalid_file_errors() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "sort_by_param = [").unwrap();
        assert!(GridConfig::load(file.path()).is_err());
    }
}
