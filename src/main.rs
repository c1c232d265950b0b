//! Terminal Fracture Grid runner (default binary).
//!
//! Reads configuration from the environment, runs the puzzle in the alternate
//! screen, and prints a JSON summary (including the seed) on exit.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use rand::Rng;
use tracing_subscriber::EnvFilter;

use fracture_grid::config::AppConfig;
use fracture_grid::engine::Session;
use fracture_grid::input::{handle_key_event, should_quit, Focus, InputHandler, Intent};
use fracture_grid::summary::Summary;
use fracture_grid::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(path) = &config.log_path {
        init_tracing(path)?;
    }

    let mut session = Session::new(config.seed, config.generator);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!("{}", serde_json::to_string(&Summary::from(&session))?);
    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();

    loop {
        let state = session.state();
        let focus = Focus {
            cursor: state.cursor(),
            mode: state.mode(),
            size: state.size(),
        };

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(session, input.marker(focus), Viewport::new(w, h)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(Intent::NewGame) => {
                        let seed = rand::thread_rng().gen_range(0..1_000_000_000);
                        session.new_game(seed);
                    }
                    Some(intent) => {
                        if let Some(command) = input.handle(intent, focus) {
                            session.apply(command);
                        }
                    }
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
