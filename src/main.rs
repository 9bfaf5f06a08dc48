//! Main entry point for the podcast-player CLI application.

use clap::Parser;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info, warn};
use podcast_player::catalog::load_catalog;
use podcast_player::config::Config;
use podcast_player::media::ClockBackend;
use podcast_player::player::Player;
use podcast_player::surface::Surface;
use podcast_player::tui::{draw, poll_event, Action, App};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Command-line arguments for the podcast-player application.
#[derive(Parser, Debug)]
#[command(
    name = "podcast-player",
    version,
    about = "A terminal podcast player",
    long_about = "Queue, scrub, shuffle and loop podcast episodes from a JSON catalog."
)]
struct Args {
    /// Catalog file (JSON array of episodes); overrides the config file
    catalog: Option<PathBuf>,

    /// Log verbosity level: 0=error, 1=warn, 2=info, 3=debug, 4=trace
    #[arg(short, long, default_value_t = 1)]
    log: u8,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Milliseconds between UI ticks (overrides config)
    #[arg(short, long)]
    tick_ms: Option<u64>,

    /// Write a default config file if none exists, print its path and exit
    #[arg(long)]
    init_config: bool,
}

/// Initialize the terminal for TUI rendering.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false);
    if let Some(path) = &args.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();

    debug!("Log level set to {:?}", log_level);

    if args.init_config {
        let path = Config::create_default_if_missing()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        Config::new()
    });

    // CLI wins over config
    let catalog_path = match args.catalog.or_else(|| config.catalog.clone().map(PathBuf::from)) {
        Some(path) => path,
        None => {
            eprintln!("Error: no catalog given. Pass a catalog file or set `catalog` in the config.");
            std::process::exit(1);
        }
    };

    let catalog = match load_catalog(&catalog_path) {
        Ok(episodes) => episodes,
        Err(e) => {
            eprintln!("Error: {}: {}", catalog_path.display(), e);
            std::process::exit(1);
        }
    };

    let tick = Duration::from_millis(args.tick_ms.unwrap_or(config.tick_ms).max(1));
    info!("Ticking every {:?}", tick);

    let mut terminal = init_terminal()?;

    let mut app = App::new(catalog, config.keybindings.clone());
    let mut player = Player::new();
    let mut surface = Surface::new(ClockBackend);

    let result = run_app(
        &mut terminal,
        &mut app,
        &mut player,
        &mut surface,
        tick,
        config.seek_step,
    );

    restore_terminal()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    player: &mut Player,
    surface: &mut Surface<ClockBackend>,
    tick: Duration,
    seek_step: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let seek_step = seek_step as i64;

    loop {
        terminal.draw(|f| draw(f, app, player.state(), surface.progress()))?;

        if let Some(Event::Key(key)) = poll_event(tick)? {
            if key.kind == KeyEventKind::Press {
                let action = app.handle_input(key);

                // Clear error after any input
                if !matches!(action, Action::None) {
                    app.clear_error();
                }

                match action {
                    Action::Quit => break,
                    Action::PlaySingle(i) => {
                        if let Some(episode) = app.catalog.get(i).cloned() {
                            app.set_status(&format!("Playing '{}'", episode.title));
                            player.play_single(episode);
                            surface.sync(player.state());
                        }
                    }
                    Action::PlayFromList(i) => {
                        player.play_from_list(app.catalog.clone(), i);
                        surface.sync(player.state());
                        app.set_status(&format!("Queued {} episodes", app.catalog.len()));
                    }
                    Action::Press(control) => {
                        surface.press(player, control);
                    }
                    Action::SeekForward | Action::SeekBackward => {
                        let delta = if action == Action::SeekForward {
                            seek_step
                        } else {
                            -seek_step
                        };
                        if let Err(e) = surface.seek_by(player.state(), delta) {
                            app.set_error(&e.to_string());
                        }
                    }
                    Action::None => {}
                }
            }
        }

        surface.pump(player, Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
