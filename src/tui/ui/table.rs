use crate::cards::{Card, Suit};
use crate::display::SeatView;
use crate::state::TableState;
use crate::table::Role;
use crate::tui::app::AppState;
use ratatui::layout::{Flex, Margin};
use ratatui::prelude::*;
use ratatui::widgets::*;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let prompt_lines = app.prompt.lines().count() as u16 + 1;
    let [header_area, board_area, seats_area, prompt_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(8),
        Constraint::Length(prompt_lines + 2),
    ])
    .areas(f.area());

    let header = Paragraph::new(Line::from(format!(
        "Street: {}   Hero: {}   Villain: {}",
        app.view.state,
        seat_label(&app.view.seats, Role::Hero),
        seat_label(&app.view.seats, Role::Villain),
    )))
    .block(Block::default().title("poker-drill").borders(Borders::ALL));
    f.render_widget(header, header_area);

    draw_board(f, board_area, app);
    draw_seats(f, seats_area, &app.view.seats);
    draw_prompt(f, prompt_area, app);

    if app.help_open() {
        draw_help(f);
    }
}

fn seat_label(seats: &[SeatView], role: Role) -> String {
    seats
        .iter()
        .find(|s| s.role == Some(role))
        .map_or_else(|| "--".to_string(), |s| format!("{} ({})", s.number, s.name))
}

fn draw_board(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().title("Board").borders(Borders::ALL), area);
    let slots = Layout::horizontal([Constraint::Length(8); 5])
        .flex(Flex::Center)
        .split(area.inner(Margin::new(1, 1)));
    let newest = match app.view.state {
        TableState::Flop => 0..3,
        TableState::Turn => 3..4,
        TableState::River => 4..5,
        _ => 0..0,
    };
    let board = app.view.board();
    for (i, slot) in slots.iter().enumerate() {
        let border = newest.contains(&i).then_some(Color::Yellow);
        render_card_widget(f, *slot, board.get(i).copied(), border);
    }
}

// Top row runs left to right over seats 1-5, bottom row right to left over
// 6-9, roughly tracing the table's oval.
fn draw_seats(f: &mut Frame, area: Rect, seats: &[SeatView]) {
    let top = seats.len().div_ceil(2);
    let [top_row, bottom_row] =
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
    let (upper, lower) = seats.split_at(top);
    let columns = |n: usize| vec![Constraint::Ratio(1, top as u32); n];

    let top_cells = Layout::horizontal(columns(upper.len())).split(top_row);
    for (seat, cell) in upper.iter().zip(top_cells.iter()) {
        render_seat(f, *cell, seat);
    }
    let bottom_cells = Layout::horizontal(columns(lower.len())).flex(Flex::Center).split(bottom_row);
    for (seat, cell) in lower.iter().rev().zip(bottom_cells.iter()) {
        render_seat(f, *cell, seat);
    }
}

fn render_seat(f: &mut Frame, area: Rect, seat: &SeatView) {
    let mut title = format!("{} {}", seat.number, seat.name);
    let mut block = Block::default().borders(Borders::ALL);
    match seat.role {
        Some(Role::Hero) => {
            title.push_str(" [HERO]");
            block = block.border_style(Style::default().fg(Color::Cyan));
        }
        Some(Role::Villain) => {
            title.push_str(" [VILLAIN]");
            block = block.border_style(Style::default().fg(Color::LightRed));
        }
        _ => block = block.border_style(Style::default().fg(Color::DarkGray)),
    }
    f.render_widget(block.title(title), area);

    let inside = area.inner(Margin::new(1, 1));
    if seat.hand.is_empty() {
        return;
    }
    if inside.height < 3 {
        let text: Vec<String> = seat.hand.iter().map(|&c| short_card(c)).collect();
        f.render_widget(Paragraph::new(text.join(" ")), inside);
        return;
    }
    let cells = Layout::horizontal(vec![Constraint::Length(7); seat.hand.len()])
        .flex(Flex::Center)
        .split(Rect { height: 3, ..inside });
    for (card, cell) in seat.hand.iter().zip(cells.iter()) {
        render_card_widget(f, *cell, Some(*card), None);
    }
}

fn draw_prompt(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = app.prompt.lines().map(Line::from).collect();
    match app.notice() {
        Some(notice) => {
            lines.push(Line::from(Span::styled(notice, Style::default().fg(Color::Red))))
        }
        None => lines.push(Line::from(Span::styled(
            "? help • Esc quit",
            Style::default().add_modifier(Modifier::DIM),
        ))),
    }
    let para = Paragraph::new(lines)
        .block(Block::default().title("Commands").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn draw_help(f: &mut Frame) {
    let [row] = Layout::vertical([Constraint::Length(12)]).flex(Flex::Center).areas(f.area());
    let [area] = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center).areas(row);
    let lines = vec![
        Line::from(Span::styled("Keys", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- H / S / V: new hero hand, move hero, move villain"),
        Line::from("- F / T / R: deal or re-deal flop, turn, river"),
        Line::from("- N: start over"),
        Line::from("- Q, Esc or Ctrl-C: quit"),
        Line::from(""),
        Line::from("Keys not listed under Commands are rejected."),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn short_card(c: Card) -> String {
    let (glyph, _) = suit_glyph_and_style(c.suit());
    format!("{}{}", c.rank(), glyph)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = match card {
        Some(c) => {
            let (_, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(short_card(c), style))
        }
        None => Line::from("  "),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center).block(block), area);
}
