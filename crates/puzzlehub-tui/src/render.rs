use crate::app::{format_time, App, Screen};
use crate::theme::{difficulty_accent, type_accent};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use puzzlehub_core::{Difficulty, Position, PuzzleType};
use std::io;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    match app.screen {
        Screen::Home => render_home(stdout, app)?,
        Screen::Arena => render_arena(stdout, app, term_width)?,
        Screen::NameEntry => render_name_prompt(stdout, app, term_width, term_height)?,
    }

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_height)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn print_at(stdout: &mut io::Stdout, x: u16, y: u16, color: Color, text: &str) -> io::Result<()> {
    execute!(stdout, MoveTo(x, y), SetForegroundColor(color), Print(text))
}

fn render_home(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let x = 2;

    print_at(stdout, x, 1, theme.title, "PuzzleHub")?;
    print_at(stdout, x + 11, 1, theme.info, "Challenge your mind, every day.")?;

    if let Some(ref challenge) = app.daily_challenge {
        let banner = format!(
            "Daily Challenge · {} participants · Best: {} pts",
            challenge.participants, challenge.top_score
        );
        print_at(stdout, x, 3, theme.key, &banner)?;
        print_at(
            stdout,
            x + banner.chars().count() as u16 + 3,
            3,
            theme.info,
            &challenge.date,
        )?;
    }

    if let Some(ref progress) = app.progress {
        let line = format!(
            "Streak: {}   Solved: {}",
            progress.current_streak, progress.total_completed
        );
        print_at(stdout, x, 4, theme.info, &line)?;
    }

    print_at(stdout, x, 6, theme.fg, "Select Difficulty")?;
    let mut dx = x;
    for difficulty in Difficulty::ALL {
        let selected = difficulty == app.session.difficulty();
        let label = format!(
            "{} {} ({}min limit) ",
            if selected { "▸" } else { " " },
            difficulty.label(),
            difficulty.time_limit_secs() / 60
        );
        let color = if selected {
            difficulty_accent(difficulty)
        } else {
            theme.info
        };
        print_at(stdout, dx, 7, color, &label)?;
        dx += label.chars().count() as u16 + 1;
    }

    print_at(stdout, x, 9, theme.fg, "Choose Puzzle Type")?;
    for (i, kind) in PuzzleType::ALL.iter().enumerate() {
        let y = 10 + i as u16;
        let selected = i == app.type_index;
        let marker = if selected { "▸" } else { " " };
        let line = format!("{} {}. {:<10} {}", marker, i + 1, kind.name(), kind.tagline());
        let color = if selected { type_accent(*kind) } else { theme.fg };
        print_at(stdout, x, y, color, &line)?;
    }

    print_at(stdout, x, 16, theme.fg, "Leaderboard")?;
    if app.top_scores.is_empty() {
        print_at(stdout, x, 17, theme.info, "No scores yet — be the first!")?;
    }
    for (i, score) in app.top_scores.iter().enumerate() {
        let y = 17 + i as u16;
        let line = format!(
            "{}. {:<12} {:>5} pts   {}   {}",
            i + 1,
            score.player_name,
            score.points,
            format_time(score.time),
            score.date
        );
        let color = if i == 0 { theme.key } else { theme.info };
        print_at(stdout, x, y, color, &line)?;
    }

    let controls = "←/→ category · d difficulty · Enter/1-5 start · q quit";
    print_at(stdout, x, 23, theme.key, controls)?;
    Ok(())
}

fn render_arena(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let x = 2;

    let title = app
        .session
        .selected_puzzle()
        .map(|p| format!("{} — {}", p.title, app.session.difficulty().label()))
        .unwrap_or_else(|| "Puzzle Arena".to_string());
    print_at(stdout, x, 1, theme.title, &title)?;

    let clock = format_time(app.session.elapsed_secs());
    print_at(stdout, term_width.saturating_sub(14), 1, theme.info, &clock)?;
    if app.session.is_paused() {
        print_at(
            stdout,
            term_width.saturating_sub(8),
            1,
            theme.key,
            "PAUSED",
        )?;
    }

    match app.session.board() {
        Some(_) => render_grid(stdout, app, x, 3)?,
        None => render_placeholder(stdout, app, x, 4)?,
    }

    let controls = if app.session.board().is_some() {
        "arrows move · 1-9 enter · p pause · r reset · q home"
    } else {
        "c complete (demo) · p pause · r reset · q home"
    };
    print_at(stdout, x, 23, theme.key, controls)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let board = match app.session.board() {
        Some(board) => board,
        None => return Ok(()),
    };
    let paused = app.session.is_paused();

    // 37 chars wide: each cell " X ", thick borders at 3x3 boundaries.
    print_at(
        stdout,
        x,
        y,
        theme.box_border,
        "+===+===+===+===+===+===+===+===+===+",
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            let border_color = if col % 3 == 0 {
                theme.box_border
            } else {
                theme.border
            };
            execute!(stdout, SetForegroundColor(border_color), Print("|"))?;

            let pos = Position::new(row, col);
            let selected = app.cursor == pos;
            let value = board.grid().get(pos);

            let text = match value {
                // Pausing hides the board, like flipping it face down.
                Some(_) if paused => " · ".to_string(),
                Some(v) => format!(" {} ", v),
                None => " . ".to_string(),
            };
            let fg = if board.grid().is_given(pos) {
                theme.given
            } else {
                theme.filled
            };
            if selected {
                execute!(stdout, SetBackgroundColor(theme.selected_bg))?;
            }
            execute!(stdout, SetForegroundColor(fg), Print(&text))?;
            if selected {
                execute!(stdout, SetBackgroundColor(theme.bg))?;
            }
        }
        execute!(stdout, SetForegroundColor(theme.box_border), Print("|"))?;

        // Row separator, thick on box boundaries.
        let sep_y = cell_y + 1;
        let (sep, color) = if (row + 1) % 3 == 0 {
            ("+===+===+===+===+===+===+===+===+===+", theme.box_border)
        } else {
            ("+---+---+---+---+---+---+---+---+---+", theme.border)
        };
        print_at(stdout, x, sep_y, color, sep)?;
    }

    Ok(())
}

fn render_placeholder(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let kind = app.session.selected_puzzle().map(|p| p.kind);
    let name = kind.map(|k| k.name()).unwrap_or("Puzzle");

    if let Some(kind) = kind {
        print_at(stdout, x, y, type_accent(kind), &format!("{} Puzzle", name))?;
    }
    print_at(
        stdout,
        x,
        y + 2,
        theme.fg,
        "This puzzle type is coming soon! For now, enjoy our Sudoku",
    )?;
    print_at(stdout, x, y + 3, theme.fg, "implementation.")?;
    print_at(
        stdout,
        x,
        y + 5,
        theme.info,
        "Press c to complete the demo and bank a score.",
    )?;
    Ok(())
}

fn render_name_prompt(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let box_width: u16 = 44;
    let x = term_width.saturating_sub(box_width) / 2;
    let y = term_height.saturating_sub(10) / 2;

    print_at(stdout, x, y, theme.success, "Puzzle Completed!")?;
    let summary = format!(
        "Time: {}   Score: {} pts",
        format_time(app.session.elapsed_secs()),
        app.session.score()
    );
    print_at(stdout, x, y + 2, theme.fg, &summary)?;
    print_at(
        stdout,
        x,
        y + 4,
        theme.info,
        "Enter your name for the leaderboard:",
    )?;
    let field = format!("> {}_", app.name_input);
    print_at(stdout, x, y + 5, theme.fg, &field)?;
    print_at(stdout, x, y + 7, theme.key, "[Enter] save · [Esc] skip")?;
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_height: u16,
) -> io::Result<()> {
    let y = term_height.saturating_sub(1);
    print_at(stdout, 2, y, app.theme.key, msg)?;
    Ok(())
}
