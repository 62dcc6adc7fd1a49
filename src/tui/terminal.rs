use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{cursor, execute};

use crate::app::{Result, RunnelError};

/// Terminal capability used by the browsing loop.
///
/// The crossterm implementation drives the real terminal; tests substitute
/// a scripted fake and assert that `enter` and `leave` stay balanced.
pub trait Console {
    /// Raw single-key input, hidden cursor.
    fn enter(&mut self) -> Result<()>;
    /// Undo whatever `enter` did.
    fn leave(&mut self) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn print(&mut self, line: &str) -> Result<()>;
    /// Blocks until a keystroke arrives.
    fn read_key(&mut self) -> Result<KeyEvent>;
}

#[derive(Default)]
pub struct CrosstermConsole;

impl Console for CrosstermConsole {
    fn enter(&mut self) -> Result<()> {
        enable_raw_mode().map_err(terminal_err)?;
        execute!(io::stdout(), cursor::Hide).map_err(terminal_err)
    }

    fn leave(&mut self) -> Result<()> {
        // Attempt both halves even if one fails.
        let cursor = execute!(io::stdout(), cursor::Show);
        let mode = disable_raw_mode();
        cursor.and(mode).map_err(terminal_err)
    }

    fn clear(&mut self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0)).map_err(terminal_err)
    }

    fn print(&mut self, line: &str) -> Result<()> {
        // Raw mode turns off newline translation; emit the carriage return
        // ourselves.
        let mut stdout = io::stdout();
        write!(stdout, "{line}\r\n").map_err(terminal_err)?;
        stdout.flush().map_err(terminal_err)
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read().map_err(terminal_err)? {
                if key.kind != KeyEventKind::Release {
                    return Ok(key);
                }
            }
        }
    }
}

fn terminal_err(e: io::Error) -> RunnelError {
    RunnelError::Terminal(e.to_string())
}
