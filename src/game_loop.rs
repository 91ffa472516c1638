use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::core::{
    CATCH_NOTICE, COMMAND_NOTICE, Cell, EnemyOutcome, GameError, GameUpdate, MAX_POLL_WAIT, UserAction, World,
    evolve_enemies, step,
};
use crate::models::{GameRenderState, PlayerColor};
use crate::persistence::{GridStore, SavedGrid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Modal overlay; the world is frozen until it is dismissed.
    Help { on_start: bool },
    Playing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub until: Instant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    pub evolved: bool,
    pub redraw: bool,
}

/// Owns the world and decides, from the clock and the input stream, when it
/// evolves and when it must be drawn. Never touches the terminal itself.
pub struct GameLoop<R, S> {
    config: GameConfig,
    world: World,
    rng: R,
    store: S,
    mode: Mode,
    notice: Option<Notice>,
    player_color: PlayerColor,
    last_evolution: Instant,
    last_render: Instant,
    redraw_requested: bool,
}

impl<R: Rng, S: GridStore> GameLoop<R, S> {
    pub fn new(config: GameConfig, mut rng: R, store: S, now: Instant) -> Result<Self> {
        let world = World::generate(config.bounds(), config.density, config.enemies, &mut rng)
            .context("failed to generate the initial grid")?;
        info!(
            columns = config.width,
            rows = config.height,
            enemies = config.enemies,
            density = config.density,
            "grid generated"
        );
        Ok(Self::with_world(config, world, rng, store, now))
    }

    pub fn with_world(config: GameConfig, world: World, rng: R, store: S, now: Instant) -> Self {
        Self {
            config,
            world,
            rng,
            store,
            mode: Mode::Help { on_start: true },
            notice: None,
            player_color: PlayerColor::Magenta,
            last_evolution: now,
            last_render: now,
            redraw_requested: true,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player_color(&self) -> PlayerColor {
        self.player_color
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn render_state(&self) -> GameRenderState<'_> {
        GameRenderState {
            world: &self.world,
            player_color: self.player_color,
            help: match self.mode {
                Mode::Help { on_start } => Some(on_start),
                Mode::Playing => None,
            },
            notice: self.notice.as_ref().map(|n| n.text.as_str()),
        }
    }

    /// Dispatch a single input. While help is up only the help toggle gets through.
    pub fn handle(&mut self, action: UserAction, now: Instant) -> Flow {
        if let Mode::Help { .. } = self.mode {
            if action == UserAction::ToggleHelp {
                self.mode = Mode::Playing;
                self.redraw_requested = true;
            }
            return Flow::Continue;
        }

        match action {
            UserAction::Move(direction) => {
                if let GameUpdate::Moved(pos) = step(&mut self.world, direction) {
                    debug!(col = pos.col, row = pos.row, "player moved");
                }
            }
            UserAction::ToggleHelp => {
                self.mode = Mode::Help { on_start: false };
                self.redraw_requested = true;
            }
            UserAction::Save => self.save(now),
            UserAction::Regenerate => self.regenerate(now),
            UserAction::Load => self.load(now),
            UserAction::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Fire whichever timers are due.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let mut tick = Tick::default();

        if self.notice.as_ref().is_some_and(|n| now >= n.until) {
            self.notice = None;
            self.redraw_requested = true;
        }

        if self.mode == Mode::Playing && now.duration_since(self.last_evolution) >= self.config.evolve_interval() {
            self.evolve(now);
            self.last_evolution = now;
            tick.evolved = true;
        }

        let render_due = self.mode == Mode::Playing && now.duration_since(self.last_render) >= self.config.render_interval();
        if self.redraw_requested || render_due {
            self.redraw_requested = false;
            self.last_render = now;
            tick.redraw = true;
        }

        tick
    }

    /// How long input polling may block before a timer or notice needs attention.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.redraw_requested {
            return Duration::ZERO;
        }
        let mut deadlines = Vec::with_capacity(3);
        if self.mode == Mode::Playing {
            deadlines.push(self.last_evolution + self.config.evolve_interval());
            deadlines.push(self.last_render + self.config.render_interval());
        }
        if let Some(notice) = &self.notice {
            deadlines.push(notice.until);
        }
        deadlines
            .into_iter()
            .map(|deadline| deadline.saturating_duration_since(now))
            .min()
            .unwrap_or(MAX_POLL_WAIT)
            .min(MAX_POLL_WAIT)
    }

    fn evolve(&mut self, now: Instant) {
        let outcomes = evolve_enemies(&mut self.world, &mut self.rng);
        for outcome in outcomes {
            if outcome == EnemyOutcome::CaughtPlayer {
                self.player_color = self.player_color.flipped();
                self.show_notice("Gotcha!", CATCH_NOTICE, now);
            }
        }
    }

    fn save(&mut self, now: Instant) {
        match self.store.save(&SavedGrid::from_world(&self.world)) {
            Ok(()) => self.show_notice("Map Saved", COMMAND_NOTICE, now),
            Err(err) => {
                warn!(%err, "saving the grid failed");
                self.show_notice("Can't save map", COMMAND_NOTICE, now);
            }
        }
    }

    fn regenerate(&mut self, now: Instant) {
        match World::generate(self.config.bounds(), self.config.density, self.config.enemies, &mut self.rng) {
            Ok(world) => {
                self.world = world;
                info!("grid regenerated");
                self.show_notice("Map Regenerated", COMMAND_NOTICE, now);
            }
            Err(err) => {
                warn!(%err, "regenerating the grid failed");
                self.show_notice("Can't regenerate map", COMMAND_NOTICE, now);
            }
        }
    }

    fn load(&mut self, now: Instant) {
        match self.try_load() {
            Ok(world) => {
                info!(enemies = world.enemies().len(), "grid loaded");
                self.world = world;
                self.show_notice("Map loaded", COMMAND_NOTICE, now);
            }
            Err(err) => {
                warn!(%err, "loading the grid failed");
                self.show_notice(load_failure_text(&err), COMMAND_NOTICE, now);
            }
        }
    }

    /// Builds the replacement world without touching the live one.
    fn try_load(&self) -> Result<World, GameError> {
        let saved = self.store.load()?;
        let expected = self.config.bounds();
        if saved.bounds() != expected {
            return Err(GameError::DimensionMismatch {
                expected,
                found: saved.bounds(),
            });
        }
        let world = saved.into_world()?;
        let (expected, found) = (self.config.enemies, world.enemies().len());
        if found < expected {
            return Err(GameError::AgentNotFound(Cell::Enemy));
        }
        if found > expected {
            return Err(GameError::EnemyCountMismatch { expected, found });
        }
        Ok(world)
    }

    fn show_notice(&mut self, text: &str, duration: Duration, now: Instant) {
        self.notice = Some(Notice {
            text: text.to_string(),
            until: now + duration,
        });
        self.redraw_requested = true;
    }
}

fn load_failure_text(err: &GameError) -> &'static str {
    match err {
        GameError::SaveFileMissing(_) => "Can't load map (not found)",
        GameError::DimensionMismatch { .. } => "Can't load map (size mismatch)",
        GameError::AgentNotFound(_) => "Can't load map (agents missing)",
        GameError::EnemyCountMismatch { .. } => "Can't load map (enemy count mismatch)",
        GameError::Deserialization(_) | GameError::MalformedGrid(_) => "Can't load map (corrupt save)",
        _ => "Can't load map (read error)",
    }
}
