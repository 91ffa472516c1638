use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::BoundsOriginRoot;

pub const DEFAULT_SAVE_PATH: &str = "resources/grids/saved_grid.json";
pub const DEFAULT_LOG_FILE: &str = "maze_chase.log";

/// Construction-time settings; nothing here changes once the game is running.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "maze-chase",
    version,
    about = "Dodge the enemies roaming a random terminal maze"
)]
pub struct GameConfig {
    /// Grid width in cells.
    #[arg(long, env = "MAZE_CHASE_WIDTH", default_value_t = 60)]
    pub width: i32,

    /// Grid height in cells.
    #[arg(long, env = "MAZE_CHASE_HEIGHT", default_value_t = 20)]
    pub height: i32,

    /// Redraws per second.
    #[arg(long, env = "MAZE_CHASE_FPS", default_value_t = 30)]
    pub fps: u32,

    /// Enemy evolutions per second.
    #[arg(long, env = "MAZE_CHASE_EPS", default_value_t = 5)]
    pub eps: u32,

    #[arg(long, env = "MAZE_CHASE_ENEMIES", default_value_t = 5)]
    pub enemies: usize,

    /// Probability that a generated cell is a wall.
    #[arg(long, env = "MAZE_CHASE_DENSITY", default_value_t = 0.2)]
    pub density: f32,

    /// Seed for reproducible mazes and enemy movement.
    #[arg(long, env = "MAZE_CHASE_SEED")]
    pub seed: Option<u64>,

    #[arg(long, env = "MAZE_CHASE_SAVE_PATH", default_value = DEFAULT_SAVE_PATH)]
    pub save_path: PathBuf,

    #[arg(long, env = "MAZE_CHASE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            fps: 30,
            eps: 5,
            enemies: 5,
            density: 0.2,
            seed: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            bail!("grid must be at least 1x1, got {}x{}", self.width, self.height);
        }
        if self.fps == 0 || self.eps == 0 {
            bail!("fps and eps must be positive (fps={}, eps={})", self.fps, self.eps);
        }
        if !(0.0..=1.0).contains(&self.density) {
            bail!("density must be within [0, 1], got {}", self.density);
        }
        let cells = self.width as i64 * self.height as i64;
        if self.enemies as i64 + 1 > cells {
            bail!("{} enemies and a player do not fit in {} cells", self.enemies, cells);
        }
        Ok(())
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        BoundsOriginRoot::new(self.width, self.height)
    }

    pub fn evolve_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.eps.max(1) as f64)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    /// Sends logs to `log_file`; the terminal itself belongs to the game.
    /// `RUST_LOG` overrides the default `info` filter.
    pub fn init_tracing(&self) -> Result<()> {
        let log_file = File::create(&self.log_file)
            .with_context(|| format!("failed to create log file {}", self.log_file.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .try_init()
            .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;
        Ok(())
    }
}
