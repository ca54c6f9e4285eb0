use crate::cards::Card;
use crate::tui::app::AppState;
use crate::twenty_one::{Hand, Phase};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, scene_chunks};
use super::status::draw_status;

const CARD_WIDTH: u16 = 7;

pub(super) fn draw_twenty_one(f: &mut Frame, app: &AppState) {
    let (header_area, body, status_area) = scene_chunks(f.area(), 2);
    let Some(table) = app.twenty_one() else {
        return;
    };
    let round = table.round();
    let tally = table.tally();

    let header = Paragraph::new(Line::from(format!(
        "Wins {}  •  Losses {}  •  Pushes {}  •  {} cards left",
        tally.player,
        tally.dealer,
        tally.ties,
        round.cards_left(),
    )))
    .block(Block::default().title("Twenty-One").borders(Borders::ALL));
    f.render_widget(header, header_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    let hidden = round.dealer_hidden();
    let dealer_title = if hidden {
        format!("{} shows {}", table.dealer_name(), upcard_value(round.dealer()))
    } else {
        format!("{} • {}", table.dealer_name(), round.dealer().total())
    };
    draw_hand(f, rows[0], &dealer_title, round.dealer(), hidden);

    let player_title = format!("You • {}", round.player().total());
    draw_hand(f, rows[1], &player_title, round.player(), false);

    let keys = match round.phase() {
        Phase::PlayerTurn => "H hit • S stay",
        Phase::DealerTurn => "Dealer is playing",
        Phase::Dealing | Phase::RoundOver => "Space deal",
    };
    draw_status(f, status_area, app, keys);
}

fn upcard_value(dealer: &Hand) -> u32 {
    dealer.cards().first().map(|c| Hand::from_cards(vec![*c]).total()).unwrap_or(0)
}

/// Render a hand; with `hide_hole` every card after the first is face down.
fn draw_hand(f: &mut Frame, area: Rect, title: &str, hand: &Hand, hide_hole: bool) {
    let mut block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if !hide_hole && hand.is_bust() {
        block = block.border_style(Style::default().fg(Color::Red));
    }
    f.render_widget(block, area);
    let area = inner(area);
    if hand.is_empty() {
        return;
    }
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            hand.cards().iter().map(|_| Constraint::Length(CARD_WIDTH)).collect::<Vec<_>>(),
        )
        .split(area);
    for (i, (card, slot)) in hand.cards().iter().zip(cards.iter()).enumerate() {
        let shown = if hide_hole && i > 0 { None } else { Some(*card) };
        render_card_widget(f, *slot, shown);
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>) {
    let block = Block::default().borders(Borders::ALL);
    let text_area = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let color = if c.suit().is_red() { Color::Red } else { Color::White };
            let rank = match c.rank().points() {
                Some(n) if !c.rank().is_face() => n.to_string(),
                _ => c.rank().to_char().to_string(),
            };
            Line::from(Span::styled(
                format!("{rank}{}", c.suit().symbol()),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled("??", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), text_area);
}
