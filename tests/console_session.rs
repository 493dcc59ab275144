use poker_drill::config::TableConfig;
use poker_drill::operator::{play, Flow, LineOperator};
use poker_drill::state::TableState;
use poker_drill::table::Table;

fn session(seed: u64, input: &str) -> (Table, String) {
    let mut table = Table::new(TableConfig::default().with_seed(seed));
    let mut op = LineOperator::new(input.as_bytes(), Vec::new());
    play(&mut table, &mut op).unwrap();
    let (_, out) = op.into_inner();
    (table, String::from_utf8(out).unwrap())
}

#[test]
fn walks_to_the_river_with_lowercase_commands() {
    let (table, out) = session(1, "f\nt\nr\nq\n");
    assert_eq!(table.state(), TableState::River);
    assert_eq!(table.deck().number_of_cards_not_dealt(), 45);
    assert!(out.contains("F: Deal the flop"));
    assert!(out.contains("T: Deal the turn"));
    assert!(out.contains("R: Deal the river"));
    assert!(out.contains("R: Re-deal the river"));
    assert!(!out.contains("Invalid input."));
}

#[test]
fn bad_input_is_reported_and_reprompted() {
    let (table, out) = session(2, "x\nT\n\nhs\nF\nQ\n");
    assert_eq!(out.matches("Invalid input.").count(), 4);
    assert_eq!(table.state(), TableState::Flop);
    assert_eq!(table.deck().number_of_cards_not_dealt(), 47);
    // the table is shown once per state, not once per attempt
    assert_eq!(out.matches("Board:").count(), 2);
}

#[test]
fn table_is_printed_before_each_prompt() {
    let (_, out) = session(3, "h\nq\n");
    let first_board = out.find("Board:").unwrap();
    let first_prompt = out.find("> ").unwrap();
    assert!(first_board < first_prompt);
    assert_eq!(out.matches("Seat 1 - UTG ").count(), 2);
    assert_eq!(out.matches(" - H - [").count(), 2);
}

#[test]
fn end_of_input_quits_cleanly() {
    let (table, out) = session(4, "f\n");
    assert_eq!(table.state(), TableState::Flop);
    assert!(out.ends_with("> "));
}

#[test]
fn start_over_mid_hand() {
    let (table, _) = session(5, "f\nt\nn\nq\n");
    assert_eq!(table.state(), TableState::PreFlop);
    assert_eq!(table.deck().number_of_cards_not_dealt(), 50);
    table.verify_custody().unwrap();
}

#[test]
fn run_reports_quit_without_touching_the_table() {
    let mut table = Table::new(TableConfig::default().with_seed(6));
    let mut op = LineOperator::new("q\n".as_bytes(), Vec::new());
    assert_eq!(table.run(&mut op).unwrap(), Flow::Continue);
    assert_eq!(table.state(), TableState::PreFlop);
    assert_eq!(table.run(&mut op).unwrap(), Flow::Quit);
    assert_eq!(table.state(), TableState::PreFlop);
    assert_eq!(table.deck().number_of_cards_not_dealt(), 50);
}

#[test]
fn non_utf8_line_is_rejected_and_reprompted() {
    let mut table = Table::new(TableConfig::default().with_seed(7));
    let mut op = LineOperator::new(&b"\xff\xfe\nf\nq\n"[..], Vec::new());
    play(&mut table, &mut op).unwrap();
    let (_, out) = op.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Invalid input.").count(), 1);
    assert_eq!(table.state(), TableState::Flop);
    assert_eq!(table.deck().number_of_cards_not_dealt(), 47);
}
