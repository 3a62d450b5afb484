//! GameView: maps `core::GameState` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::GameState;
use crate::types::TileValue;

/// One run of same-styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Color,
    pub bold: bool,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: Color::Reset,
            bold: false,
        }
    }

    fn tile(text: impl Into<String>, value: TileValue) -> Self {
        Self {
            text: text.into(),
            fg: tile_color(value),
            bold: value >= 128,
        }
    }
}

/// A rendered frame: one vec of spans per terminal line.
pub type Lines = Vec<Vec<Span>>;

/// Color ramp by tile magnitude. High tiles get the loud colors.
fn tile_color(value: TileValue) -> Color {
    match value {
        0 => Color::DarkGrey,
        2 => Color::Grey,
        4 => Color::White,
        8 => Color::Yellow,
        16 => Color::DarkYellow,
        32 => Color::Magenta,
        64 => Color::Red,
        128 | 256 => Color::Cyan,
        512 | 1024 => Color::Green,
        _ => Color::DarkGreen,
    }
}

/// A lightweight terminal view of the puzzle board.
pub struct GameView {
    /// Interior width of one board cell in terminal columns.
    cell_w: usize,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a centered 5-digit tile.
        Self { cell_w: 6 }
    }
}

impl GameView {
    pub fn new(cell_w: usize) -> Self {
        Self { cell_w }
    }

    /// Render the current game state as styled lines, top to bottom.
    pub fn render(&self, state: &GameState) -> Lines {
        let mut lines = Lines::new();

        lines.push(vec![
            Span {
                text: " 2048 ".to_string(),
                fg: Color::Yellow,
                bold: true,
            },
            Span::plain(format!(
                " score {}  best tile {}  moves {}",
                state.score(),
                state.max_tile(),
                state.move_count()
            )),
        ]);
        lines.push(Vec::new());

        let size = state.grid().size();
        lines.push(vec![Span::plain(self.border_line('┌', '┬', '┐', size))]);
        for row in 0..size {
            let mut spans = vec![Span::plain("│")];
            for column in 0..size {
                let value = state
                    .grid()
                    .cell(row, column)
                    .tile()
                    .map(|t| t.value)
                    .unwrap_or(0);
                let text = if value == 0 {
                    " ".repeat(self.cell_w)
                } else {
                    format!("{:^width$}", value, width = self.cell_w)
                };
                spans.push(Span::tile(text, value));
                spans.push(Span::plain("│"));
            }
            lines.push(spans);
            if row + 1 < size {
                lines.push(vec![Span::plain(self.border_line('├', '┼', '┤', size))]);
            }
        }
        lines.push(vec![Span::plain(self.border_line('└', '┴', '┘', size))]);

        lines.push(Vec::new());
        if state.game_over() {
            lines.push(vec![Span {
                text: " game over - r to restart, q to quit ".to_string(),
                fg: Color::Red,
                bold: true,
            }]);
        } else {
            lines.push(vec![Span::plain(
                " arrows/wasd to slide  r restart  q quit ",
            )]);
        }

        lines
    }

    fn border_line(&self, left: char, mid: char, right: char, size: u8) -> String {
        let segment = "─".repeat(self.cell_w);
        let mut line = String::new();
        line.push(left);
        for i in 0..size {
            line.push_str(&segment);
            line.push(if i + 1 < size { mid } else { right });
        }
        line
    }
}
