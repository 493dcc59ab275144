use crate::display::TableView;
use crate::table::Table;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the TUI currently shows.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct AppState {
    pub view: TableView,
    pub prompt: String,
    notice: Option<String>,
    help_open: bool,
}

impl AppState {
    /// Take a fresh snapshot of `table` and clear any stale notice.
    pub fn present(&mut self, table: &Table, prompt: &str) {
        self.view = TableView::of(table);
        self.prompt = prompt.to_string();
        self.notice = None;
    }

    pub fn reject(&mut self, input: &str) {
        self.notice = Some(format!("Invalid input: '{}'", input.trim()));
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    /// Turn a key press into an operator token, or `None` when the key only
    /// affects the screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Some("Q".to_string());
        }
        match key.code {
            KeyCode::Char('?') => {
                self.help_open = !self.help_open;
                None
            }
            KeyCode::Esc if self.help_open => {
                self.help_open = false;
                None
            }
            KeyCode::Esc => Some("Q".to_string()),
            KeyCode::Char(c) if !c.is_whitespace() => {
                self.help_open = false;
                Some(c.to_string())
            }
            _ => None,
        }
    }
}
