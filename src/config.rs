use std::path::Path;
use std::time::Duration;

use crate::board::Stone;
use crate::error::ConfigError;
use crate::geometry::{CellGeometry, CoordinateMapper};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub input: InputConfig,
    pub window: WindowConfig,
}

/// Board geometry and opening setup
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub cell_width: f32,
    pub cell_height: f32,
    pub gap: f32,
    /// Column count the board is horizontally centered on
    pub nominal_columns: u32,
    /// Player who makes move zero
    pub first_player: Stone,
    /// Start with the second player's stone at (0, 0)
    pub opening_stone: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let geometry = CellGeometry::default();
        BoardConfig {
            cell_width: geometry.width,
            cell_height: geometry.height,
            gap: geometry.gap,
            nominal_columns: 3,
            first_player: Stone::Player1,
            opening_stone: false,
        }
    }
}

impl BoardConfig {
    pub fn geometry(&self) -> CellGeometry {
        CellGeometry {
            width: self.cell_width,
            height: self.cell_height,
            gap: self.gap,
        }
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.geometry(), self.nominal_columns)
    }
}

/// Pointer gesture settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// How long a press must be held before it turns into a drag
    pub drag_delay_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { drag_delay_ms: 200 }
    }
}

impl InputConfig {
    pub fn drag_delay(&self) -> Duration {
        Duration::from_millis(self.drag_delay_ms)
    }
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800.0,
            height: 600.0,
            title: "Gomoku".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.board;
        if !(b.cell_width.is_finite() && b.cell_width > 0.0) {
            return Err(ConfigError::Invalid("board.cell_width must be > 0".into()));
        }
        if !(b.cell_height.is_finite() && b.cell_height > 0.0) {
            return Err(ConfigError::Invalid("board.cell_height must be > 0".into()));
        }
        if !(b.gap.is_finite() && b.gap >= 0.0) {
            return Err(ConfigError::Invalid("board.gap must be >= 0".into()));
        }
        if b.nominal_columns == 0 {
            return Err(ConfigError::Invalid("board.nominal_columns must be >= 1".into()));
        }
        if b.first_player == Stone::Empty {
            return Err(ConfigError::Invalid(
                "board.first_player must be player1 or player2".into(),
            ));
        }
        if self.input.drag_delay_ms == 0 {
            return Err(ConfigError::Invalid("input.drag_delay_ms must be >= 1".into()));
        }
        let w = &self.window;
        if !(w.width.is_finite() && w.width > 0.0 && w.height.is_finite() && w.height > 0.0) {
            return Err(ConfigError::Invalid("window size must be > 0".into()));
        }
        Ok(())
    }
}
