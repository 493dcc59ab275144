use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use poker_drill::config::TableConfig;
use poker_drill::state::TableState;
use poker_drill::table::Table;
use poker_drill::tui::app::AppState;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn letters_become_tokens() {
    let mut app = AppState::default();
    assert_eq!(app.handle_key(key(KeyCode::Char('f'))), Some("f".to_string()));
    assert_eq!(app.handle_key(key(KeyCode::Char('Z'))), Some("Z".to_string()));
    assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
    assert_eq!(app.handle_key(key(KeyCode::Char(' '))), None);
}

#[test]
fn escape_and_ctrl_c_quit() {
    let mut app = AppState::default();
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Some("Q".to_string()));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(app.handle_key(ctrl_c), Some("Q".to_string()));
}

#[test]
fn help_toggle_swallows_keys() {
    let mut app = AppState::default();
    assert_eq!(app.handle_key(key(KeyCode::Char('?'))), None);
    assert!(app.help_open());
    assert_eq!(app.handle_key(key(KeyCode::Esc)), None);
    assert!(!app.help_open());
}

#[test]
fn present_snapshots_the_table_and_clears_notices() {
    let mut table = Table::new(TableConfig::default().with_seed(5));
    table.auto_advance().unwrap();
    let mut app = AppState::default();

    app.reject("x");
    assert_eq!(app.notice(), Some("Invalid input: 'x'"));

    app.present(&table, table.state().prompt());
    assert_eq!(app.notice(), None);
    assert_eq!(app.view.state, TableState::PreFlop);
    assert_eq!(app.view.seats.len(), 9);
    assert!(app.prompt.contains("F: Deal the flop"));
    let hero = app.view.seats.iter().find(|s| s.hand.len() == 2);
    assert!(hero.is_some());
}

#[test]
fn board_cards_are_drawn() {
    use poker_drill::cards::Suit;
    use poker_drill::state::Command;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    let mut table = Table::new(TableConfig::default().with_seed(8));
    table.auto_advance().unwrap();
    table.apply(Command::Flop).unwrap();
    table.apply(Command::Turn).unwrap();
    let mut app = AppState::default();
    app.present(&table, table.state().prompt());

    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| poker_drill::tui::ui::draw(f, &app)).unwrap();
    let screen: String =
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();

    let board: Vec<_> = table.flop().iter().copied().chain(table.turn()).collect();
    assert_eq!(board.len(), 4);
    for card in board {
        let glyph = match card.card().suit() {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        };
        let drawn = format!("{}{glyph}", card.card().rank());
        assert!(screen.contains(&drawn), "{drawn} missing from the board");
    }
}
