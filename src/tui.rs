//! Terminal front end. Input is mapped to [`app::InputAction`]s so the
//! state machine can be driven without a terminal.

pub mod app;
pub mod controller;
mod ui;
