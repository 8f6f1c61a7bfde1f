//! Terminal Snake runner (default binary).
//!
//! One cycle = non-blocking key poll, one tick, fixed sleep. The first wall or
//! self collision ends the game; any key then exits.

use std::thread;

use anyhow::Result;
use tracing::info;

use tui_snake::core::{Board, Game, GameState, SnakeChain};
use tui_snake::input::{poll_input, wait_key, Input};
use tui_snake::term::{show_message, TerminalRenderer};
use tui_snake::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let board = Board::new(SnakeChain::new(), term, config.width, config.height)?;
    let mut game = Game::new(board);
    let tick = config.tick();

    loop {
        if let GameState::Over(violation) = *game.state() {
            let reason = violation.to_string();
            let ticks = format!("survived {} ticks", game.ticks());
            let board = game.board_mut();
            let (w, h) = (board.width(), board.height());
            show_message(
                board.surface_mut(),
                w,
                h,
                &["GAME OVER", &reason, &ticks, "", "press any key to exit"],
            )?;
            wait_key()?;
            return Ok(());
        }

        let input = match poll_input()? {
            Some(Input::Quit) => {
                info!(ticks = game.ticks(), "quit requested");
                return Ok(());
            }
            Some(Input::Turn(direction)) => Some(direction),
            None => None,
        };

        game.cycle(input)?;

        if !game.is_over() {
            thread::sleep(tick);
        }
    }
}
