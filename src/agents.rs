//! Agents: computer opponents for the human player.
//!
//! Each bot owns its random source so the game cores stay free of global
//! state. A [`BotProfile`] carries the tuning and an optional seed; with a
//! seed the bot replays the same decisions, without one it draws from
//! entropy.

mod bots;

pub use bots::{rng_from_seed, BotProfile, RpsBot, TicTacToeBot};
