use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_drill::config::Args;
use poker_drill::operator::{play, LineOperator, RunError};
use poker_drill::table::Table;
use poker_drill::tui::controller::TuiOperator;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<(), RunError> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let mut table = Table::new(args.table_config());
    log::info!("starting poker-drill {} with {:?}", poker_drill::VERSION, table.config());

    if args.plain || !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        let stdin = io::stdin();
        let mut operator = LineOperator::new(stdin.lock(), io::stdout());
        return play(&mut table, &mut operator);
    }

    let mut terminal = setup_terminal()?;
    let res = play(&mut table, &mut TuiOperator::new(&mut terminal));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
