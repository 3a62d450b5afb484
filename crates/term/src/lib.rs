//! Terminal front end: view, renderer, and the animation collaborator.
//!
//! - [`game_view`]: pure state-to-styled-lines mapping (unit-testable)
//! - [`renderer`]: raw mode / alternate screen lifecycle and frame draws
//! - [`driver`]: the `TransitionDriver` that gives tile moves duration

pub mod driver;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_types as types;

pub use driver::AnimationDriver;
pub use game_view::{GameView, Lines, Span};
pub use renderer::TerminalRenderer;
