use poker_drill::config::TableConfig;
use poker_drill::state::Command;
use poker_drill::table::Table;

fn dealt_in(seed: u64) -> Table {
    let mut t = Table::new(TableConfig::default().with_seed(seed).with_villain_hand(true));
    t.auto_advance().unwrap();
    t
}

#[test]
fn villain_gets_a_hand_when_enabled() {
    let t = dealt_in(1);
    let villain = t.get_villain_seat().unwrap().unwrap();
    assert_eq!(villain.hand().len(), 2);
    assert_eq!(t.deck().number_of_cards_not_dealt(), 48);
    t.verify_custody().unwrap();
}

#[test]
fn moving_villain_carries_the_hand() {
    let mut t = dealt_in(2);
    let old = t.get_villain_seat().unwrap().unwrap().clone();

    t.apply(Command::MoveVillain).unwrap();

    let villain = t.get_villain_seat().unwrap().unwrap();
    assert_ne!(villain.number(), old.number());
    assert_eq!(villain.hand(), old.hand());
    assert!(t.get_seat_by_number(old.number()).unwrap().hand().is_empty());
    t.verify_custody().unwrap();
}

#[test]
fn new_hero_hand_leaves_villain_alone() {
    let mut t = dealt_in(3);
    let villain = t.get_villain_seat().unwrap().unwrap().clone();
    t.apply(Command::NewHand).unwrap();
    t.apply(Command::Flop).unwrap();
    assert_eq!(t.get_villain_seat().unwrap().unwrap(), &villain);
    assert_eq!(t.deck().number_of_cards_not_dealt(), 45);
    t.verify_custody().unwrap();
}

#[test]
fn reset_keeps_the_villain_hand_setting() {
    let mut t = dealt_in(4);
    t.apply(Command::Reset).unwrap();
    assert_eq!(t.get_villain_seat().unwrap().unwrap().hand().len(), 2);
    assert_eq!(t.deck().number_of_cards_not_dealt(), 48);
}
