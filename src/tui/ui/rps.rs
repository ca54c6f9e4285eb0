use crate::rps::{Outcome, Side};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, scene_chunks};
use super::status::draw_status;

const HISTORY_ROWS: usize = 10;

pub(super) fn draw_rps(f: &mut Frame, app: &AppState) {
    let (header_area, body, status_area) = scene_chunks(f.area(), 2);
    let Some(table) = app.rps() else {
        return;
    };
    let session = table.session();

    let header = Paragraph::new(Line::from(format!(
        "{} {}  •  {} {}  •  First to {}",
        session.name(Side::Human),
        session.points(Side::Human),
        session.name(Side::Computer),
        session.points(Side::Computer),
        session.points_to_win(),
    )))
    .block(Block::default().title("Rock-Paper-Scissors").borders(Borders::ALL));
    f.render_widget(header, header_area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body);

    let set = session.move_set();
    let mut moves: Vec<Line> = Vec::new();
    for (i, kind) in set.kinds().iter().enumerate() {
        let beats: Vec<String> = set.defeats(*kind).map(|k| k.to_string()).collect();
        moves.push(Line::from(vec![
            Span::styled(format!("{} {kind}", i + 1), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  beats {}", beats.join(", ")),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
    }
    f.render_widget(Block::default().title("Moves").borders(Borders::ALL), cols[0]);
    f.render_widget(Paragraph::new(moves), inner(cols[0]));

    let rounds: Vec<Line> = session
        .history()
        .iter()
        .rev()
        .take(HISTORY_ROWS)
        .map(|r| {
            let (label, color) = match r.outcome {
                Outcome::Wins => ("win", Color::Green),
                Outcome::Loses => ("loss", Color::Red),
                Outcome::Ties => ("tie", Color::Gray),
            };
            Line::from(vec![
                Span::raw(format!("{:<9} vs {:<9} ", r.human.to_string(), r.computer.to_string())),
                Span::styled(label, Style::default().fg(color)),
            ])
        })
        .collect();
    f.render_widget(Block::default().title("Rounds").borders(Borders::ALL), cols[1]);
    f.render_widget(Paragraph::new(rounds), inner(cols[1]));

    let keys = if session.winner().is_some() { "Space rematch" } else { "1-5 throw" };
    draw_status(f, status_area, app, keys);
}
