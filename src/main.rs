//! Terminal 2048 runner (default binary).
//!
//! The outer loop is synchronous: it polls crossterm events and runs one
//! move resolution at a time on a current-thread tokio runtime. Input
//! arriving while a move resolves is simply not polled until the
//! resolution completes, so overlapping resolutions cannot occur.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_2048::core::GameState;
use tui_2048::engine::{MoveEngine, MoveOutcome};
use tui_2048::input::{map_key, Command};
use tui_2048::term::{AnimationDriver, GameView, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);

    let mut state = GameState::new_default(seed);
    state.start();

    let view = GameView::default();
    let mut engine = MoveEngine::new(AnimationDriver);

    term.draw(&view.render(&state))?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                let Some(command) = map_key(key) else {
                    continue;
                };

                match command {
                    Command::Quit => return Ok(()),
                    Command::Restart => {
                        state.restart();
                        term.draw(&view.render(&state))?;
                    }
                    Command::Move(direction) => {
                        if state.game_over() {
                            continue;
                        }
                        // One resolution at a time; block_on serializes input.
                        let outcome = rt.block_on(engine.resolve(&mut state, direction));
                        if outcome != MoveOutcome::Rejected {
                            term.draw(&view.render(&state))?;
                        }
                    }
                }
            }
            Event::Resize(..) => {
                term.draw(&view.render(&state))?;
            }
            _ => {}
        }
    }
}
