use card_game::tui::app::{AppState, InputAction, Scene};
use card_game::tui::controller::handle_key;
use crossterm::event::KeyCode;

#[test]
fn deal_and_check_from_the_table() {
    let mut app = AppState::with_seed(31);
    assert!(matches!(app.scene, Scene::Table));
    assert!(app.handle_input(InputAction::DealHand));
    assert_eq!(app.game.hand().len(), 5);
    assert_eq!(app.game.cards_remaining(), 47);
    assert!(app.report().is_none());
    assert!(app.handle_input(InputAction::CheckHand));
    let report = app.report().cloned().unwrap();
    assert_eq!(report, app.game.evaluate());
    assert!(app.error().is_none());
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::with_seed(32);
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);

    // hand size 5 -> 7
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuInc);
    assert!(app.handle_input(InputAction::MenuApply));
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.hand_size, 7);
    assert_eq!(app.seed, Some(32));

    let _ = app.handle_input(InputAction::DealHand);
    assert_eq!(app.game.hand().len(), 7);
}

#[test]
fn seed_steps_down_to_random() {
    let mut app = AppState::with_seed(0);
    app.open_menu();
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuDec);
    assert_eq!(app.cfg_seed, None);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_seed, Some(0));
    let _ = app.handle_input(InputAction::MenuDec);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.seed, None);
}

#[test]
fn menu_cancel_keeps_config() {
    let mut app = AppState::with_seed(33);
    app.open_menu();
    let _ = app.handle_input(InputAction::MenuDec);
    let _ = app.handle_input(InputAction::MenuCancel);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.hand_size, 5);
}

#[test]
fn table_actions_ignored_in_menu() {
    let mut app = AppState::with_seed(34);
    app.open_menu();
    assert!(!app.handle_input(InputAction::DealHand));
    assert!(!app.game.hand().has_cards());
}

#[test]
fn reset_restores_full_deck() {
    let mut app = AppState::with_seed(35);
    let _ = app.handle_input(InputAction::DealHand);
    let _ = app.handle_input(InputAction::CheckHand);
    assert!(app.handle_input(InputAction::ResetDeck));
    assert_eq!(app.game.cards_remaining(), 52);
    assert!(app.report().is_none());
    assert!(!app.game.hand().has_cards());
}

#[test]
fn keys_drive_the_table() {
    let mut app = AppState::with_seed(36);
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.game.hand().len(), 5);
    assert!(!handle_key(&mut app, KeyCode::Char('c')));
    assert!(app.report().is_some());
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    // help swallows table keys
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert!(app.report().is_some());
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
