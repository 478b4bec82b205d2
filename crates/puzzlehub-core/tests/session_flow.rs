//! End-to-end session flows against the seeded stores, without a terminal.

use puzzlehub_core::grid::{solution_is_valid, GRID_SIZE};
use puzzlehub_core::{
    top_scores, Catalog, Difficulty, GameSession, Generator, Phase, Position, PuzzleType,
    SessionError, Latency, Stores,
};

fn seeded() -> Stores {
    Stores::seeded(Latency::none()).expect("embedded fixtures must parse")
}

/// Fill every blank cell from the board's own solution.
fn solve(session: &mut GameSession) {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            let board = session.board().expect("sudoku session has a board");
            if board.grid().get(pos).is_none() {
                let digit = board.solution_at(pos);
                session.select_cell(pos);
                session.input(digit);
            }
        }
    }
}

#[test]
fn full_session_start_solve_save() {
    let stores = seeded();
    let catalog = stores.catalog();

    let mut session = GameSession::new(Difficulty::Easy);
    let mut generator = Generator::with_seed(42);
    session
        .start(&catalog, PuzzleType::Sudoku, &mut generator)
        .expect("easy sudoku is in the catalog");

    assert!(solution_is_valid(session.board().unwrap().solution()));
    assert_eq!(
        session.board().unwrap().grid().empty_count(),
        81 - Difficulty::Easy.clue_count()
    );

    // One minute on the clock, then solve.
    for _ in 0..60 {
        session.tick();
    }
    solve(&mut session);
    assert_eq!(session.phase(), Phase::Completed);
    assert_eq!(session.score(), 100 + (600 - 60) * 2);

    let before = stores.scores.len();
    let entry = session.score_entry("Ada").unwrap();
    let saved = stores.scores.create(entry);
    assert!(!saved.id.is_empty());
    assert_eq!(stores.scores.len(), before + 1);
    assert_eq!(saved.time, 60);

    // The new score tops the leaderboard view.
    let top = top_scores(stores.scores.get_all(), 5);
    assert_eq!(top[0].player_name, "Ada");
    assert_eq!(top[0].points, 1180);

    session.reset();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.board().is_none());
}

#[test]
fn placeholder_session_complete_and_skip() {
    let stores = seeded();
    let catalog = stores.catalog();

    let mut session = GameSession::new(Difficulty::Medium);
    let mut generator = Generator::with_seed(7);
    session
        .start(&catalog, PuzzleType::Crossword, &mut generator)
        .unwrap();
    assert!(session.board().is_none());

    session.tick();
    assert!(session.complete());
    assert_eq!(session.phase(), Phase::Completed);

    let before = stores.scores.len();
    session.skip();
    assert_eq!(stores.scores.len(), before, "skip saves nothing");
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.selected_puzzle().is_none());
    assert_eq!(session.elapsed_secs(), 0);
    assert!(!session.is_paused());
    assert!(session.selected_cell().is_none());
    assert_eq!(session.difficulty(), Difficulty::Medium);
}

#[test]
fn unavailable_combination_leaves_idle() {
    let mut session = GameSession::new(Difficulty::Hard);
    let mut generator = Generator::with_seed(1);
    let empty_catalog = Catalog::new(Vec::new());

    let err = session
        .start(&empty_catalog, PuzzleType::Trivia, &mut generator)
        .unwrap_err();
    assert!(matches!(err, SessionError::PuzzleUnavailable { .. }));
    assert_eq!(
        err.to_string(),
        "no trivia puzzle available on hard difficulty"
    );
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.selected_puzzle().is_none());
}

#[test]
fn every_catalog_combination_starts() {
    let stores = seeded();
    let catalog = stores.catalog();
    let mut generator = Generator::with_seed(3);

    for kind in PuzzleType::ALL {
        for difficulty in Difficulty::ALL {
            let mut session = GameSession::new(difficulty);
            session
                .start(&catalog, kind, &mut generator)
                .unwrap_or_else(|e| panic!("{kind} on {difficulty} should start: {e}"));
            assert_eq!(session.phase(), Phase::Playing);
            assert_eq!(session.board().is_some(), kind == PuzzleType::Sudoku);
        }
    }
}

#[test]
fn failed_save_keeps_session_completed() {
    let stores = seeded();
    let catalog = stores.catalog();

    let mut session = GameSession::new(Difficulty::Easy);
    let mut generator = Generator::with_seed(11);
    session
        .start(&catalog, PuzzleType::Logic, &mut generator)
        .unwrap();
    session.complete();

    assert_eq!(
        session.score_entry("").unwrap_err(),
        SessionError::EmptyPlayerName
    );
    assert_eq!(session.phase(), Phase::Completed);

    // A valid retry still goes through.
    let entry = session.score_entry("Grace").unwrap();
    stores.scores.create(entry);
    session.reset();
    assert_eq!(session.phase(), Phase::Idle);
}
