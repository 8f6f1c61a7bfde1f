//! Game state module - drives the board from optional direction input
//!
//! The game is either `Running` or `Over`. Every cycle with input issues a
//! tick in that direction; a cycle without input repeats the last one. The
//! first rejected tick moves the game to `Over`, which is terminal.

use std::io;

use tracing::info;

use crate::board::{Board, TickOutcome, Violation};
use crate::surface::TerminalSurface;
use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Ended by the given violation
    Over(Violation),
}

/// A single session: one board, one chain, until the first violation.
#[derive(Debug)]
pub struct Game<S> {
    board: Board<S>,
    state: GameState,
    ticks: u64,
}

impl<S: TerminalSurface> Game<S> {
    pub fn new(board: Board<S>) -> Self {
        Self {
            board,
            state: GameState::Running,
            ticks: 0,
        }
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<S> {
        &mut self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over(_))
    }

    /// Number of committed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one cycle. `None` means no direction arrived this cycle.
    ///
    /// Cycles after the game is over do nothing.
    pub fn cycle(&mut self, input: Option<Direction>) -> io::Result<&GameState> {
        if self.is_over() {
            return Ok(&self.state);
        }

        let outcome = match input {
            Some(direction) => self.board.next_tick(direction)?,
            None => self.board.repeat_tick()?,
        };

        match outcome {
            TickOutcome::Advanced => self.ticks += 1,
            TickOutcome::GameOver(violation) => {
                info!(%violation, ticks = self.ticks, "game over");
                self.state = GameState::Over(violation);
            }
        }

        Ok(&self.state)
    }
}
