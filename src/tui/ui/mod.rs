mod layout;
mod menu;
mod rps;
mod status;
mod tictactoe;
mod twenty_one;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::TicTacToe => tictactoe::draw_tictactoe(f, app),
        Scene::Rps => rps::draw_rps(f, app),
        Scene::TwentyOne => twenty_one::draw_twenty_one(f, app),
    }
    if app.help_open() {
        status::draw_help(f);
    }
}
