use parlor_games::rps::MoveKind;
use parlor_games::tui::app::{AppState, GameChoice, InputAction, Scene, Settings};
use parlor_games::twenty_one::Phase;

fn seeded_app() -> AppState {
    AppState::with_settings(Settings::default().with_seed(Some(2024)))
}

fn start(app: &mut AppState, game: GameChoice) {
    app.menu_index = 0;
    while app.cfg.game != game {
        let _ = app.handle_input(InputAction::MenuInc);
    }
    let _ = app.handle_input(InputAction::MenuApply);
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::TicTacToe));
    assert!(app.tictactoe().is_some());
}

#[test]
fn tictactoe_occupied_cell_is_an_error() {
    let mut app = seeded_app();
    start(&mut app, GameChoice::TicTacToe);
    assert!(app.handle_input(InputAction::Place(5)));
    let marked = app.tictactoe().unwrap().session().board().marked_count();
    assert_eq!(marked, 2, "computer answers straight away");
    assert!(!app.handle_input(InputAction::Place(5)));
    assert!(app.action_error().is_some());
    assert!(!app.handle_input(InputAction::Place(0)));
    assert_eq!(app.tictactoe().unwrap().session().board().marked_count(), marked);
}

#[test]
fn next_round_waits_for_the_round_to_end() {
    let mut app = seeded_app();
    start(&mut app, GameChoice::TicTacToe);
    assert!(!app.handle_input(InputAction::NextRound));
    assert!(app.action_error().is_some());
}

#[test]
fn rps_rejects_moves_outside_the_variant() {
    let mut app = seeded_app();
    // Item 4 is the variant; switch to classic.
    app.menu_index = 4;
    let _ = app.handle_input(InputAction::MenuInc);
    start(&mut app, GameChoice::Rps);
    assert_eq!(app.scene, Scene::Rps);
    assert!(!app.handle_input(InputAction::Throw(MoveKind::Lizard)));
    assert!(app.action_error().is_some());
    assert!(app.handle_input(InputAction::Throw(MoveKind::Rock)));
    assert_eq!(app.rps().unwrap().session().history().len(), 1);
}

#[test]
fn twenty_one_dealer_plays_on_ticks() {
    let mut app = seeded_app();
    start(&mut app, GameChoice::TwentyOne);
    assert_eq!(app.scene, Scene::TwentyOne);
    assert!(app.handle_input(InputAction::Stay));
    assert!(!app.handle_input(InputAction::Hit));
    for _ in 0..20 {
        app.on_tick();
    }
    let table = app.twenty_one().unwrap();
    assert_eq!(table.round().phase(), Phase::RoundOver);
    let tally = table.tally();
    assert_eq!(tally.player + tally.dealer + tally.ties, 1);
    assert!(app.handle_input(InputAction::NextRound));
    assert_eq!(app.twenty_one().unwrap().round().phase(), Phase::PlayerTurn);
}

#[test]
fn help_toggle_and_menu_round_trip() {
    let mut app = seeded_app();
    start(&mut app, GameChoice::TwentyOne);
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert_eq!(app.scene, Scene::Menu);
    assert!(!app.help_open());
    let _ = app.handle_input(InputAction::MenuCancel);
    assert_eq!(app.scene, Scene::TwentyOne);
}
