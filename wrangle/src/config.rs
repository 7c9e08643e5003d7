//! The `config.toml` wrangle reads at startup.
//!
//! ```toml
//! # Layout used when none is named on the command line.
//! default_layout = "expand"
//! # Consider windows on every workspace, not just the current one.
//! all_workspaces = false
//! # Keep `expand` off panels and docks.
//! expand_respects_struts = false
//! ```
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wrangle_core::layouts::EXPAND;
use xdg::BaseDirectories;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub default_layout: String,
    pub all_workspaces: bool,
    pub expand_respects_struts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_layout: EXPAND.to_owned(),
            all_workspaces: false,
            expand_respects_struts: false,
        }
    }
}

impl wrangle_core::Config for Config {
    fn default_layout(&self) -> String {
        self.default_layout.clone()
    }

    fn all_workspaces(&self) -> bool {
        self.all_workspaces
    }

    fn expand_respects_struts(&self) -> bool {
        self.expand_respects_struts
    }
}

/// Load the config, from `path` if given, otherwise from the XDG config directory.
///
/// A missing file means defaults. A broken one is reported and also means defaults.
#[must_use]
pub fn load(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => load_from_path(path),
        None => load_from_file(),
    };
    loaded
        .map_err(|err| {
            tracing::error!("Couldn't load config: {:#}", err);
            eprintln!("ERROR LOADING CONFIG: {err:#}");
        })
        .unwrap_or_default()
}

/// Where the config lives, `$XDG_CONFIG_HOME/wrangle/config.toml`.
///
/// # Errors
///
/// Fails if no home directory can be found.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("wrangle")?;
    Ok(path.get_config_file(CONFIG_FILE))
}

/// # Errors
///
/// Fails if the XDG directories can't be determined or the file is there but unreadable or
/// malformed.
fn load_from_file() -> Result<Config> {
    let path = default_path()?;
    if path.exists() {
        load_from_path(&path)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

/// # Errors
///
/// Fails if the file can't be read or isn't valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    tracing::debug!("Loading config from {}", path.display());
    let contents =
        fs::read_to_string(path).with_context(|| format!("Couldn't read {}", path.display()))?;
    let config =
        toml::from_str(&contents).with_context(|| format!("Couldn't parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wrangle_core::layouts::FILL;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn deserialize_full_config() {
        let file = config_file(
            r#"
default_layout = "fill"
all_workspaces = true
expand_respects_struts = true
"#,
        );
        let config = load_from_path(file.path()).unwrap();
        assert_eq!(
            config,
            Config {
                default_layout: FILL.to_owned(),
                all_workspaces: true,
                expand_respects_struts: true,
            }
        );
    }

    #[test]
    fn missing_keys_take_their_defaults() {
        let file = config_file("all_workspaces = true\n");
        let config = load_from_path(file.path()).unwrap();
        assert_eq!(config.default_layout, EXPAND);
        assert!(config.all_workspaces);
        assert!(!config.expand_respects_struts);
    }

    #[test]
    fn an_empty_file_is_the_default_config() {
        let file = config_file("");
        assert_eq!(load_from_path(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn malformed_files_are_errors() {
        for contents in [
            "default_layout = ",
            "all_workspaces = \"yes\"",
            "default_layot = \"fill\"",
        ] {
            let file = config_file(contents);
            assert!(load_from_path(file.path()).is_err(), "{contents:?}");
        }
    }

    #[test]
    fn broken_configs_fall_back_to_defaults() {
        let file = config_file("all_workspaces = 3");
        assert_eq!(load(Some(file.path())), Config::default());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(CONFIG_FILE);
        assert_eq!(load(Some(missing.as_path())), Config::default());
    }
}
