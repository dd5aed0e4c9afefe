use crate::cards::Card;
use crate::game::HandReport;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

/// Above this many cards the hand is listed as text instead of card widgets.
const MAX_CARD_WIDGETS: usize = 13;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(7), // cards
            Constraint::Length(6), // info
            Constraint::Min(0),
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let seed = app.seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    let header = Paragraph::new(Line::from(format!(
        "Deck: {} cards left   Hand size: {}   Seed: {seed}",
        app.game.cards_remaining(),
        app.hand_size,
    )))
    .block(Block::default().title("card-game").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_hand(f, chunks[1], app);
    draw_info(f, chunks[2], app.report());

    let status_area = chunks[4];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));
    let left = match app.error() {
        Some(err) => {
            Line::from(Span::styled(format!("Error: {err}"), Style::default().fg(Color::Red)))
        }
        None if !app.game.hand().has_cards() => Line::from("Press Space to deal a hand."),
        None if app.report().is_none() => Line::from("Press C to check the hand."),
        None => Line::from("Space deals a new hand."),
    };
    let right = vec![
        Line::from("Space deal • C check • S shuffle • R reset"),
        Line::from("? help • M menu • Q quit"),
    ];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Hand").borders(Borders::ALL);
    f.render_widget(block, area);
    let cards = app.game.hand().cards_on_hand();
    let area = inner(area);
    if cards.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No cards dealt",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    }
    if cards.len() > MAX_CARD_WIDGETS {
        let spans: Vec<Span> =
            cards.iter().flat_map(|&c| [card_span(app, c), Span::raw(" ")]).collect();
        f.render_widget(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }), area);
        return;
    }
    for (slot, &card) in columns(area, cards.len()).into_iter().zip(cards) {
        render_card_widget(f, slot, app, card);
    }
}

fn card_span(app: &AppState, card: Card) -> Span<'static> {
    match app.faces.face_for(&card) {
        Ok(face) => {
            let color = if face.red { Color::Red } else { Color::White };
            Span::styled(face.label.clone(), Style::default().fg(color))
        }
        Err(err) => Span::styled(err.to_string(), Style::default().fg(Color::Red)),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, app: &AppState, card: Card) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(card.key())
        .title_alignment(Alignment::Center);
    let body = inner(area);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Length(1), Constraint::Min(0)])
        .split(body);
    let para = Paragraph::new(Line::from(card_span(app, card)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, rows[1]);
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "Yes"
    } else {
        "No"
    }
}

fn draw_info(f: &mut Frame, area: Rect, report: Option<&HandReport>) {
    let block = Block::default().title("Check").borders(Borders::ALL);
    f.render_widget(block, area);
    let dim = Style::default().add_modifier(Modifier::DIM);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let row = |label: &'static str, value: Option<String>| -> Line<'static> {
        let value = match value {
            Some(v) => Span::raw(v),
            None => Span::styled("--", dim),
        };
        Line::from(vec![Span::styled(label, bold), value])
    };
    let hearts = report.map(|r| {
        if r.hearts.is_empty() {
            "No".to_string()
        } else {
            r.hearts.join(", ")
        }
    });
    let left = vec![row("Sum: ", report.map(|r| r.sum.to_string())), row("Hearts: ", hearts)];
    let right = vec![
        row("Flush: ", report.map(|r| yes_no(r.flush).to_string())),
        row("Queen of Spades: ", report.map(|r| yes_no(r.queen_of_spades).to_string())),
    ];
    let cols = columns(inner(area), 2);
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(Paragraph::new(right).wrap(Wrap { trim: true }), cols[1]);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / D: deal a new hand"),
        Line::from("- C / Enter: check the hand"),
        Line::from("- S: shuffle the remaining deck"),
        Line::from("- R: reset and reshuffle the deck"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Q quits. Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
