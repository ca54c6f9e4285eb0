mod games;
mod menu;
mod state;

pub use games::{RpsTable, TicTacToeTable, TwentyOneTable};
pub use menu::{GameChoice, Settings};
pub use state::{AppState, InputAction, Scene};
