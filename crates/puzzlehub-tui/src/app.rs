use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use log::warn;
use puzzlehub_core::{
    top_scores, Catalog, DailyChallenge, Difficulty, GameSession, Generator, Phase, Position,
    Progress, PuzzleType, Score, SessionError, Stores,
};
use std::time::{Duration, Instant};

/// Maximum player name length accepted by the prompt.
const MAX_NAME_LEN: usize = 24;

/// Result of handling a key press.
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Daily challenge banner, categories, leaderboard
    Home,
    /// Active puzzle (Sudoku grid or placeholder panel)
    Arena,
    /// Name prompt after completion
    NameEntry,
}

/// The main application state.
pub struct App {
    pub session: GameSession,
    pub generator: Generator,
    pub stores: Stores,
    pub catalog: Catalog,
    pub screen: Screen,
    pub theme: Theme,
    /// Grid cursor for Sudoku input
    pub cursor: Position,
    /// Highlighted category on the home screen
    pub type_index: usize,
    /// Name prompt buffer
    pub name_input: String,
    /// Cached leaderboard view (top 5 by points)
    pub top_scores: Vec<Score>,
    pub daily_challenge: Option<DailyChallenge>,
    pub progress: Option<Progress>,
    /// Transient status message
    pub message: Option<String>,
    message_timer: u32,
    /// Wall-clock anchor for whole-second session ticks
    tick_anchor: Instant,
}

impl App {
    /// Load home-screen data from the stores and start idle.
    pub fn new(stores: Stores, difficulty: Difficulty, generator: Generator, theme: Theme) -> Self {
        let catalog = stores.catalog();
        let top = top_scores(stores.scores.get_all(), 5);
        let daily_challenge = stores.daily_challenges.get_all().into_iter().next();
        let progress = stores.progress.get_all().into_iter().next();

        Self {
            session: GameSession::new(difficulty),
            generator,
            stores,
            catalog,
            screen: Screen::Home,
            theme,
            cursor: Position::new(4, 4),
            type_index: 0,
            name_input: String::new(),
            top_scores: top,
            daily_challenge,
            progress,
            message: None,
            message_timer: 0,
            tick_anchor: Instant::now(),
        }
    }

    /// Show a temporary status message.
    pub fn show_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.message_timer = 30; // ~3 seconds at the 100ms poll cadence
    }

    /// Called on every loop tick: expire the status message and forward
    /// whole elapsed seconds to the session timer.
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        while self.tick_anchor.elapsed() >= Duration::from_secs(1) {
            self.tick_anchor += Duration::from_secs(1);
            self.session.tick();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Arena => self.handle_arena_key(key),
            Screen::NameEntry => self.handle_name_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> AppAction {
        let type_count = PuzzleType::ALL.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Left | KeyCode::Char('h') => {
                self.type_index = (self.type_index + type_count - 1) % type_count;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.type_index = (self.type_index + 1) % type_count;
            }
            KeyCode::Char('d') | KeyCode::Tab => {
                let next = self.session.difficulty().next();
                self.session.set_difficulty(next);
            }
            KeyCode::Char(c @ '1'..='5') => {
                self.type_index = (c as u8 - b'1') as usize;
                self.start_selected();
            }
            KeyCode::Enter => self.start_selected(),
            _ => {}
        }
        AppAction::Continue
    }

    fn start_selected(&mut self) {
        let kind = PuzzleType::ALL[self.type_index];
        let difficulty = self.session.difficulty();
        match self.session.start(&self.catalog, kind, &mut self.generator) {
            Ok(()) => {
                self.cursor = Position::new(4, 4);
                self.tick_anchor = Instant::now();
                self.screen = Screen::Arena;
                self.show_message(format!(
                    "Starting {} puzzle on {} difficulty!",
                    kind, difficulty
                ));
            }
            Err(err) => {
                warn!("start rejected: {}", err);
                self.show_message(err.to_string());
            }
        }
    }

    fn handle_arena_key(&mut self, key: KeyEvent) -> AppAction {
        let is_sudoku = self.session.board().is_some();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session.reset();
                self.screen = Screen::Home;
            }
            KeyCode::Char('r') => {
                self.session.reset();
                self.screen = Screen::Home;
                self.show_message("Game reset");
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                let paused = self.session.toggle_pause();
                self.show_message(if paused { "Game paused" } else { "Game resumed" });
            }
            KeyCode::Up | KeyCode::Char('k') if is_sudoku => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') if is_sudoku => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') if is_sudoku => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') if is_sudoku => self.move_cursor(0, 1),
            KeyCode::Char(c @ '1'..='9') if is_sudoku => {
                self.session.select_cell(self.cursor);
                self.session.input(c as u8 - b'0');
                self.check_completion();
            }
            KeyCode::Char('c') if !is_sudoku => {
                if self.session.complete() {
                    self.check_completion();
                }
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, dr: i32, dc: i32) {
        let row = (self.cursor.row as i32 + dr).clamp(0, 8) as usize;
        let col = (self.cursor.col as i32 + dc).clamp(0, 8) as usize;
        self.cursor = Position::new(row, col);
        self.session.select_cell(self.cursor);
    }

    fn check_completion(&mut self) {
        if self.session.phase() == Phase::Completed {
            self.show_message(format!(
                "Puzzle completed! Score: {} points",
                self.session.score()
            ));
            self.name_input.clear();
            self.screen = Screen::NameEntry;
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc => {
                self.session.skip();
                self.screen = Screen::Home;
            }
            KeyCode::Enter => self.save_score(),
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Char(c) if !c.is_control() && self.name_input.len() < MAX_NAME_LEN => {
                self.name_input.push(c);
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn save_score(&mut self) {
        match self.session.score_entry(&self.name_input) {
            Ok(entry) => {
                self.stores.scores.create(entry);
                self.top_scores = top_scores(self.stores.scores.get_all(), 5);
                self.session.reset();
                self.name_input.clear();
                self.screen = Screen::Home;
                self.show_message("Score saved successfully!");
            }
            Err(SessionError::EmptyPlayerName) => {
                self.show_message("Please enter your name");
            }
            Err(err) => {
                warn!("score save failed: {}", err);
                self.show_message("Failed to save score");
            }
        }
    }
}

/// Format elapsed seconds as MM:SS.
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
    }
}
