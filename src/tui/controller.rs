use crate::operator::Operator;
use crate::table::Table;
use crate::tui::app::AppState;
use crate::tui::ui;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// [`Operator`] backed by a raw-mode terminal.
///
/// Terminal setup and teardown stay with the caller; this only draws and
/// reads keys.
pub struct TuiOperator<'t> {
    terminal: &'t mut Terminal<CrosstermBackend<Stdout>>,
    app: AppState,
}

impl<'t> TuiOperator<'t> {
    pub fn new(terminal: &'t mut Terminal<CrosstermBackend<Stdout>>) -> Self {
        Self { terminal, app: AppState::default() }
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw(f, &self.app))?;
        Ok(())
    }
}

impl Operator for TuiOperator<'_> {
    fn show(&mut self, table: &Table, prompt: &str) -> io::Result<()> {
        self.app.present(table, prompt);
        self.redraw()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let token = self.app.handle_key(key);
                    if token.is_some() {
                        return Ok(token);
                    }
                    self.redraw()?;
                }
                Event::Resize(_, _) => self.redraw()?,
                _ => {}
            }
        }
    }

    fn invalid_input(&mut self, input: &str) -> io::Result<()> {
        self.app.reject(input);
        self.redraw()
    }
}
