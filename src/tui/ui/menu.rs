use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(60, 60, f.area());
    let block = Block::default().title("card-game").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let banner = ["♥ ♦ ♠ ♣", "C A R D   G A M E", "♣ ♠ ♦ ♥"];
    let banner_lines: Vec<Line> = banner
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Green))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));

    f.render_widget(Paragraph::new(banner_lines).alignment(Alignment::Center), rows[0]);

    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Configuration:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    cfg_lines.push(Line::from(""));
    cfg_lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
