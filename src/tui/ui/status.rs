use crate::tui::app::AppState;
use crate::twenty_one;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

/// Notice or error on the left, key hints on the right.
pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &AppState, keys: &str) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left: Vec<Line> = Vec::new();
    if let Some(notice) = app.notice() {
        left.push(Line::from(notice.to_string()));
    }
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right = vec![Line::from(keys.to_string()), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 90, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Tic-Tac-Toe:", bold)),
        Line::from("- 1-9: mark a cell (1 2 3 is the top row)"),
        Line::from("- Space: next round"),
        Line::from(""),
        Line::from(Span::styled("Rock-Paper-Scissors:", bold)),
        Line::from("- 1-5 or R P S K L: throw rock, paper, scissors, spock, lizard"),
        Line::from("- Space: rematch once the match is decided"),
        Line::from(""),
        Line::from(Span::styled("Twenty-One:", bold)),
        Line::from("- H: hit"),
        Line::from("- S: stay"),
        Line::from("- Space: deal again"),
    ];
    lines.extend(twenty_one::rules().into_iter().map(|rule| Line::from(format!("  {rule}"))));
    lines.extend([
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- Left / Right or + / -: adjust value"),
        Line::from("- Enter: start the selected game"),
        Line::from("- Esc: back to the running game"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ]);
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
