// Terminal maze chase.
// Controls: h/j/k/l to move, shift+H help, shift+S save, shift+L load, shift+R regenerate, Esc to quit.
// Tiles: '#' wall, '@' player, '&' enemy, ' ' floor.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use maze_chase::config::GameConfig;
use maze_chase::console_interface::{ConsoleInput, TerminalGuard, handle_input, render_game};
use maze_chase::game_loop::{Flow, GameLoop};
use maze_chase::persistence::{FileGridStore, GridStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

fn main() -> Result<()> {
    let config = GameConfig::parse();
    config.validate()?;
    config.init_tracing()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let store = FileGridStore::new(config.save_path.clone());
    let grid = config.bounds();
    let game = GameLoop::new(config, rng, store, Instant::now())?;

    let mut guard = TerminalGuard::setup(grid)?;
    let result = run(&mut guard, game);
    drop(guard);

    info!("Shutting down");
    result
}

fn run<S: GridStore>(guard: &mut TerminalGuard, mut game: GameLoop<StdRng, S>) -> Result<()> {
    info!("Starting maze chase");
    loop {
        let now = Instant::now();
        let tick = game.tick(now);
        if tick.redraw {
            render_game(guard.terminal_mut(), &game.render_state())?;
        }

        match handle_input(game.poll_timeout(Instant::now()))? {
            ConsoleInput::UserAction(action) => {
                if game.handle(action, Instant::now()) == Flow::Quit {
                    break;
                }
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
    Ok(())
}
