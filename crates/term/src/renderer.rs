//! TerminalRenderer: flushes rendered lines to a real terminal.
//!
//! The drawing API is intentionally small: a 4x4 board is a handful of
//! lines, so every frame is a full redraw into a reused byte buffer and
//! a single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::game_view::Lines;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame of rendered lines.
    pub fn draw(&mut self, lines: &Lines) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(terminal::Clear(terminal::ClearType::All))?;

        for (y, spans) in lines.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, y as u16))?;
            for span in spans {
                self.buf.queue(SetForegroundColor(span.fg))?;
                if span.bold {
                    self.buf.queue(SetAttribute(Attribute::Bold))?;
                }
                self.buf.queue(Print(span.text.as_str()))?;
                if span.bold {
                    self.buf.queue(SetAttribute(Attribute::Reset))?;
                }
            }
            self.buf.queue(ResetColor)?;
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
