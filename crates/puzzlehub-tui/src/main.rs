mod app;
mod render;
mod theme;

use app::{App, AppAction};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use puzzlehub_core::{Difficulty, Generator, Latency, Stores};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::Theme;

/// Terminal front-end for the PuzzleHub puzzle arcade.
#[derive(Parser)]
#[command(name = "puzzlehub", version, about)]
struct Args {
    /// Initial difficulty selection
    #[arg(long, value_enum, default_value_t = DifficultyArg::Easy)]
    difficulty: DifficultyArg,

    /// Seed the board generator for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Skip the simulated store latency
    #[arg(long)]
    fast: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
    HighContrast,
}

impl ThemeArg {
    fn theme(self) -> Theme {
        match self {
            ThemeArg::Dark => Theme::dark(),
            ThemeArg::Light => Theme::light(),
            ThemeArg::HighContrast => Theme::high_contrast(),
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let latency = if args.fast {
        Latency::none()
    } else {
        Latency::realistic()
    };

    // Load before entering raw mode so a fixture failure is a plain fatal
    // error and the latency shows up as a loading pause, not a frozen UI.
    println!("Loading puzzles...");
    let stores = match Stores::seeded(latency) {
        Ok(stores) => stores,
        Err(err) => {
            eprintln!("Error loading puzzles: {err}");
            std::process::exit(1);
        }
    };

    let generator = match args.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    let mut app = App::new(stores, args.difficulty.into(), generator, args.theme.theme());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with a timeout so the timer keeps moving.
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
