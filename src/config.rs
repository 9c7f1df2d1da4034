use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "tile-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 35;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 35;

/// Smallest grid that still fits the start layout plus one step inside the walls.
pub const MIN_GRID_WIDTH: u16 = 10;
pub const MIN_GRID_HEIGHT: u16 = 6;

/// Delay between ticks for a freshly reset body, in milliseconds.
pub const INITIAL_SPEED_MS: u32 = 250;

/// Delay removed from the tick interval per grown segment.
pub const SPEED_STEP_MS: u32 = 4;

/// Fastest allowed tick interval.
pub const SPEED_FLOOR_MS: u32 = 50;

/// Target frame interval for the control loop.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Logical grid dimensions, walls included.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Number of playable columns between the left and right walls.
    #[must_use]
    pub fn inner_width(self) -> u16 {
        self.width.saturating_sub(2)
    }

    /// Number of playable rows between the top and bottom walls.
    #[must_use]
    pub fn inner_height(self) -> u16 {
        self.height.saturating_sub(2)
    }

    /// Index of the right wall column.
    #[must_use]
    pub fn last_column(self) -> i32 {
        i32::from(self.width) - 1
    }

    /// Index of the bottom wall row.
    #[must_use]
    pub fn last_row(self) -> i32 {
        i32::from(self.height) - 1
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Friction curve: how the tick delay shrinks as the body grows.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedCurve {
    pub initial_ms: u32,
    pub step_ms: u32,
    pub floor_ms: u32,
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self {
            initial_ms: INITIAL_SPEED_MS,
            step_ms: SPEED_STEP_MS,
            floor_ms: SPEED_FLOOR_MS,
        }
    }
}

/// Tunable game parameters, loadable from a JSON file.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid: GridSize,
    pub speed: SpeedCurve,
}

impl GameConfig {
    /// Rejects grids too small for the start layout and inverted speed curves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width < MIN_GRID_WIDTH || self.grid.height < MIN_GRID_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "grid {}x{} is smaller than the minimum {MIN_GRID_WIDTH}x{MIN_GRID_HEIGHT}",
                self.grid.width, self.grid.height
            )));
        }

        if self.speed.floor_ms == 0 {
            return Err(ConfigError::Invalid("speed floor must be positive".to_owned()));
        }

        if self.speed.initial_ms < self.speed.floor_ms {
            return Err(ConfigError::Invalid(format!(
                "initial speed {}ms is below the floor {}ms",
                self.speed.initial_ms, self.speed.floor_ms
            )));
        }

        Ok(())
    }
}

/// Returns the platform-correct location of the optional tuning file.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    Some(base)
}

/// Loads the tuning file.
///
/// An explicit path must exist. Without one, the platform config file is used
/// when present, and built-in defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<GameConfig, ConfigError> {
    match explicit {
        Some(path) => load_from_path(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => load_from_path(&path),
            _ => Ok(GameConfig::default()),
        },
    }
}

fn load_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fixed colors used by the renderer.
#[derive(Debug)]
pub struct Palette {
    pub border_paused: Color,
    pub border_running: Color,
    pub border_lost: Color,
    pub background: Color,
    pub head: Color,
    pub body: Color,
    pub pickup: Color,
    pub hud_text: Color,
}

pub const PALETTE: Palette = Palette {
    border_paused: Color::Rgb(112, 193, 179),
    border_running: Color::Rgb(36, 123, 160),
    border_lost: Color::Rgb(242, 95, 92),
    background: Color::Rgb(80, 81, 79),
    head: Color::Rgb(244, 244, 244),
    body: Color::Rgb(219, 219, 219),
    pickup: Color::Rgb(255, 224, 102),
    hud_text: Color::Gray,
};

/// Full-block glyph pair drawn for one grid cell (two columns keep tiles square).
pub const GLYPH_TILE: &str = "██";

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load, GameConfig, GridSize, SpeedCurve};
    use crate::error::ConfigError;

    #[test]
    fn defaults_describe_35_cell_square_grid() {
        let config = GameConfig::default();

        assert_eq!(
            config.grid,
            GridSize {
                width: 35,
                height: 35
            }
        );
        assert_eq!(config.grid.inner_width(), 33);
        assert_eq!(config.speed.initial_ms, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "speed": { "floor_ms": 80 } }"#);

        let config = load(Some(&path)).expect("partial config should load");

        assert_eq!(config.grid, GridSize::default());
        assert_eq!(
            config.speed,
            SpeedCurve {
                floor_ms: 80,
                ..SpeedCurve::default()
            }
        );
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let path = unique_test_path("missing");

        assert!(matches!(load(Some(&path)), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn validation_rejects_tiny_grid_and_inverted_curve() {
        let tiny = GameConfig {
            grid: GridSize {
                width: 8,
                height: 8,
            },
            ..GameConfig::default()
        };
        assert!(tiny.validate().is_err());

        let inverted = GameConfig {
            speed: SpeedCurve {
                initial_ms: 40,
                step_ms: 4,
                floor_ms: 50,
            },
            ..GameConfig::default()
        };
        assert!(inverted.validate().is_err());
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("tile-snake-config-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
