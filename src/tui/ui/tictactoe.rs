use crate::tictactoe::{Cell, Position, RoundStatus, Seat};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner, scene_chunks};
use super::status::draw_status;

pub(super) fn draw_tictactoe(f: &mut Frame, app: &AppState) {
    let (header_area, body, status_area) = scene_chunks(f.area(), 2);
    let Some(table) = app.tictactoe() else {
        return;
    };
    let session = table.session();

    let header = Paragraph::new(Line::from(format!(
        "You ({}) {}  •  Computer ({}) {}  •  Ties {}  •  First to {}",
        session.marker(Seat::Human),
        session.score(Seat::Human),
        session.marker(Seat::Computer),
        session.score(Seat::Computer),
        session.ties(),
        session.points_to_win(),
    )))
    .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    f.render_widget(header, header_area);

    let winning = session.board().winning_line().map(|(_, line)| line);
    let grid_area = centered_rect(50, 90, body);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(grid_area);
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            let position = Position::ALL[r * 3 + c];
            let highlight = winning.is_some_and(|line| line.contains(&position));
            render_cell(f, *cell_area, position, session.board().cell(position), highlight);
        }
    }

    let keys = match session.status() {
        RoundStatus::InProgress => "1-9 mark a cell",
        _ => "Space next round",
    };
    draw_status(f, status_area, app, keys);
}

fn render_cell(f: &mut Frame, area: Rect, position: Position, cell: Cell, highlight: bool) {
    let mut block = Block::default().borders(Borders::ALL).title(position.to_string());
    if highlight {
        block = block.border_style(Style::default().fg(Color::Green));
    }
    let content = match cell.marker() {
        Some(m) => Line::from(Span::styled(
            m.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled("·", Style::default().add_modifier(Modifier::DIM))),
    };
    let text_area = inner(area);
    f.render_widget(block, area);
    let pad = text_area.height.saturating_sub(1) / 2;
    let para = Paragraph::new(content).alignment(Alignment::Center);
    let centered = Rect { y: text_area.y + pad, height: text_area.height.min(1), ..text_area };
    f.render_widget(para, centered);
}
