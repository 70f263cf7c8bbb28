//! Demo configuration
//!
//! Default location: ~/.config/scrim/demo.yaml

use std::path::{Path, PathBuf};

use anyhow::Result;
use scrim_core::config::{self as core_config, BackdropConfig, ModalConfig, Validate};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Dialog modal (slot 0)
    pub dialog: ModalConfig,
    /// Notice modal stacked above dialogs (slot 1)
    pub notice: ModalConfig,
    /// Initial window size
    pub window: WindowConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dialog: ModalConfig::default(),
            notice: ModalConfig {
                duration_ms: 150,
                backdrop: BackdropConfig {
                    color: [0.0, 0.0, 0.0],
                    max_opacity: 0.35,
                },
                ..ModalConfig::default()
            },
            window: WindowConfig::default(),
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&mut self) {
        self.dialog.validate();
        self.notice.validate();
        self.window.validate();
    }
}

/// Window configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&mut self) {
        self.width = self.width.max(320.0);
        self.height = self.height.max(480.0);
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/scrim/demo.yaml
pub fn default_config_path() -> PathBuf {
    core_config::default_config_path().with_file_name("demo.yaml")
}

/// Load the demo configuration
///
/// Missing or invalid files fall back to defaults.
pub fn load_config(path: &Path) -> DemoConfig {
    let config: DemoConfig = core_config::load_config(path);
    log::info!(
        "config: dialog {}ms ({} / {}), notice {}ms",
        config.dialog.duration_ms,
        config.dialog.show_easing,
        config.dialog.hide_easing,
        config.notice.duration_ms
    );
    config
}

/// Save the demo configuration
pub fn save_config(config: &DemoConfig, path: &Path) -> Result<()> {
    core_config::save_config(config, path)
}
