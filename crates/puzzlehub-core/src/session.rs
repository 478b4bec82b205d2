//! Game session state machine
//!
//! One session covers a single puzzle attempt: `Idle` until a catalog match
//! starts it, `Playing` while the 1 Hz tick runs, `Completed` once the grid
//! matches the solution (or the placeholder demo action fires), and back to
//! `Idle` on save or skip. Every transition is an explicit method, so whole
//! sessions run deterministically in tests.

use log::{debug, info};
use thiserror::Error;

use crate::catalog::{Catalog, Difficulty, PuzzleRecord, PuzzleType};
use crate::entities::{self, Score};
use crate::generator::Generator;
use crate::grid::{Board, Position};
use crate::score;

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The catalog has no entry for the requested (type, difficulty) pair.
    #[error("no {kind} puzzle available on {difficulty} difficulty")]
    PuzzleUnavailable {
        kind: PuzzleType,
        difficulty: Difficulty,
    },
    /// A score needs a non-empty trimmed player name.
    #[error("player name must not be empty")]
    EmptyPlayerName,
    /// Scores can only be taken from a completed session.
    #[error("no completed puzzle to score")]
    NotCompleted,
}

pub struct GameSession {
    phase: Phase,
    difficulty: Difficulty,
    selected: Option<PuzzleRecord>,
    board: Option<Board>,
    elapsed_secs: u64,
    paused: bool,
    cursor: Option<Position>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            phase: Phase::Idle,
            difficulty,
            selected: None,
            board: None,
            elapsed_secs: 0,
            paused: false,
            cursor: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn selected_puzzle(&self) -> Option<&PuzzleRecord> {
        self.selected.as_ref()
    }

    pub fn selected_cell(&self) -> Option<Position> {
        self.cursor
    }

    /// Change the difficulty selection. Only honored while idle; the
    /// selection survives play and resets.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    /// Start a puzzle of the given type at the current difficulty. Fails
    /// without touching any state when the catalog has no match; otherwise
    /// enters `Playing` with a zeroed, unpaused timer. Sudoku gets a fresh
    /// board; other types play as placeholder panels.
    pub fn start(
        &mut self,
        catalog: &Catalog,
        kind: PuzzleType,
        generator: &mut Generator,
    ) -> Result<(), SessionError> {
        let Some(record) = catalog.find(kind, self.difficulty) else {
            return Err(SessionError::PuzzleUnavailable {
                kind,
                difficulty: self.difficulty,
            });
        };

        self.selected = Some(record.clone());
        self.phase = Phase::Playing;
        self.elapsed_secs = 0;
        self.paused = false;
        self.cursor = None;
        self.board = match kind {
            PuzzleType::Sudoku => Some(generator.generate(self.difficulty)),
            _ => None,
        };

        info!("session started: {} on {}", kind, self.difficulty);
        Ok(())
    }

    /// Advance the timer by one whole second. The caller owns the 1 Hz wall
    /// clock; ticks outside unpaused play are ignored.
    pub fn tick(&mut self) {
        if self.phase == Phase::Playing && !self.paused {
            self.elapsed_secs += 1;
        }
    }

    /// Suspend or resume timer advancement without resetting elapsed time.
    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == Phase::Playing {
            self.paused = !self.paused;
            debug!("session {}", if self.paused { "paused" } else { "resumed" });
        }
        self.paused
    }

    /// Move the input cursor. Only meaningful during Sudoku play.
    pub fn select_cell(&mut self, pos: Position) -> bool {
        if self.phase == Phase::Playing && self.board.is_some() {
            self.cursor = Some(pos);
            true
        } else {
            false
        }
    }

    /// Enter a digit at the selected cell. Rejected input (no cursor, clue
    /// or filled cell, paused session) is ignored without an error. A full
    /// correct grid completes the session.
    pub fn input(&mut self, digit: u8) -> bool {
        if self.phase != Phase::Playing || self.paused {
            return false;
        }
        let Some(pos) = self.cursor else {
            return false;
        };
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        if !board.apply(pos, digit) {
            return false;
        }
        if board.is_complete() {
            self.finish();
        }
        true
    }

    /// Manual completion, the demo action for placeholder puzzle types.
    pub fn complete(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.finish();
        true
    }

    fn finish(&mut self) {
        self.phase = Phase::Completed;
        info!(
            "puzzle completed in {}s for {} points",
            self.elapsed_secs,
            self.score()
        );
    }

    /// The point value at the current elapsed time.
    pub fn score(&self) -> u64 {
        score::compute(self.difficulty, self.elapsed_secs)
    }

    /// Build the immutable score record for a completed session. The name
    /// is trimmed and must be non-empty; the session itself is untouched,
    /// so a rejected name leaves the prompt open.
    pub fn score_entry(&self, player_name: &str) -> Result<Score, SessionError> {
        if self.phase != Phase::Completed {
            return Err(SessionError::NotCompleted);
        }
        let name = player_name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }
        let puzzle_id = self
            .selected
            .as_ref()
            .map(|p| p.id.clone())
            .unwrap_or_default();
        Ok(Score {
            id: String::new(),
            puzzle_id,
            player_name: name.to_string(),
            time: self.elapsed_secs,
            points: self.score(),
            date: entities::today_stamp(),
        })
    }

    /// Decline to save a completed score. Same full reset as a save.
    pub fn skip(&mut self) {
        self.reset();
    }

    /// Return to `Idle` from any state: no puzzle, no board, timer zeroed,
    /// unpaused, cursor cleared. The difficulty selection is kept.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.selected = None;
        self.board = None;
        self.elapsed_secs = 0;
        self.paused = false;
        self.cursor = None;
        debug!("session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}
