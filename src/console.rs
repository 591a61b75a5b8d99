use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io::{self, Write};
use torus_life::{Grid, Tile};

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Terminal sink drawing one block per live tile
pub struct ConsoleRender {
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            report: String::new(),
        })
    }

    pub fn render(&self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // the bottom line is the footer
        let board_rows = rows.saturating_sub(1);

        let mut stdout = io::stdout().lock();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for tile in grid.tiles().iter() {
            let (col, row) = screen_cell(&tile, cols, board_rows);
            if col < cols && row < board_rows {
                queue!(stdout, cursor::MoveTo(col, row))?;
                stdout.write_all("█".as_bytes())?;
            }
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, board_rows))?;
        stdout.write_all(self.report.as_bytes())?;

        stdout.flush()
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let command = match event::read()? {
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Esc | KeyCode::Char('q'),
                ..
            }) => ConsoleCommand::Exit,
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(command))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen)
            .expect("restore terminal");
    }
}

/// Maps a tile's viewport rectangle onto a terminal character
///
/// Viewport y grows upwards while terminal rows grow downwards.
fn screen_cell(tile: &Tile, cols: u16, rows: u16) -> (u16, u16) {
    let col = (tile.left * cols as f32).round();
    let row = ((1.0 - tile.bottom - tile.height) * rows as f32).round();
    (col.max(0.0) as u16, row.max(0.0) as u16)
}
