//! YAML persistence for scrim configuration files
//!
//! Loading never fails: a missing file means defaults, and a broken file is
//! reported and replaced by defaults. Whatever comes back has been through
//! `Validate`, so callers never see out-of-range values.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Clamp a configuration into its supported ranges
pub trait Validate {
    fn validate(&mut self);
}

/// Load and validate a configuration file
///
/// ```ignore
/// let config: ModalConfig = load_config(&default_config_path());
/// ```
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default + Validate,
{
    let mut config = match read_config(path) {
        Ok(Some(config)) => {
            log::info!("config: loaded {}", path.display());
            config
        }
        Ok(None) => {
            log::info!("config: no file at {}, using defaults", path.display());
            T::default()
        }
        Err(e) => {
            log::warn!("config: {:#}; using defaults", e);
            T::default()
        }
    };
    config.validate();
    config
}

/// `Ok(None)` when the file does not exist
fn read_config<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
    };

    serde_yaml::from_str(&text)
        .map(Some)
        .with_context(|| format!("{} is not a valid scrim config", path.display()))
}

/// Write a configuration file, creating its directory
///
/// The YAML goes to a sibling `.tmp` file first and is renamed into place,
/// so a crash mid-write leaves the previous file intact.
pub fn save_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create config directory {}", dir.display()))?;
    }

    let yaml = serde_yaml::to_string(config).context("cannot encode scrim config as YAML")?;
    let staging = path.with_extension("yaml.tmp");
    std::fs::write(&staging, yaml)
        .with_context(|| format!("cannot write {}", staging.display()))?;
    std::fs::rename(&staging, path)
        .with_context(|| format!("cannot move config into place at {}", path.display()))?;

    log::info!("config: saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackdropConfig, ModalConfig};
    use crate::easing::Easing;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config: ModalConfig = load_config(&dir.path().join("absent.yaml"));
        assert_eq!(config, ModalConfig::default());
    }

    #[test]
    fn test_unparsable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "duration_ms: [not, a, number]").unwrap();

        let config: ModalConfig = load_config(&path);
        assert_eq!(config, ModalConfig::default());
    }

    #[test]
    fn test_load_clamps_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loud.yaml");
        std::fs::write(
            &path,
            "duration_ms: 90\nbackdrop:\n  color: [2.0, 0.5, -1.0]\n  max_opacity: 4.0\n",
        )
        .unwrap();

        let config: ModalConfig = load_config(&path);
        assert_eq!(config.duration_ms, 90);
        assert_eq!(config.backdrop.color, [1.0, 0.5, 0.0]);
        assert_eq!(config.backdrop.max_opacity, 1.0);
        // Fields absent from the file keep their defaults
        assert_eq!(config.show_easing, Easing::OutExpo);
    }

    #[test]
    fn test_save_creates_directories_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scrim.yaml");

        let config = ModalConfig {
            duration_ms: 120,
            show_easing: Easing::OutCubic,
            hide_easing: Easing::Linear,
            backdrop: BackdropConfig {
                color: [0.1, 0.1, 0.2],
                max_opacity: 0.6,
            },
        };

        save_config(&config, &path).unwrap();
        assert!(!path.with_extension("yaml.tmp").exists());

        let loaded: ModalConfig = load_config(&path);
        assert_eq!(loaded, config);
    }
}
