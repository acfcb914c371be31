//! Key-script tests driving the application through raw key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::{Cell, Mark, Outcome, Square, status_line};
use tictactoe_tui::{App, Signal, Theme};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Types both names and starts the game.
fn start_game(app: &mut App) {
    type_text(app, "Ann");
    app.handle_key(key(KeyCode::Tab));
    type_text(app, "Bob");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.state().started(), "game should start after both names");
}

#[test]
fn test_name_entry_and_start() {
    let mut app = App::new(Theme::Light);
    assert!(!app.state().started());

    type_text(&mut app, "Ann");
    assert_eq!(app.state().draft().get(Mark::X), "Ann");

    // Tab moves focus to the O field.
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Bob");
    assert_eq!(app.state().draft().get(Mark::O), "Bob");

    app.handle_key(key(KeyCode::Enter));
    assert!(app.state().started());
    assert_eq!(status_line(app.state()), "Next: Ann (X)");
}

#[test]
fn test_start_blocked_without_x_name() {
    let mut app = App::new(Theme::Light);
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Bob");

    app.handle_key(key(KeyCode::Enter));
    assert!(!app.state().started(), "start must be inert with one name");
    assert_eq!(status_line(app.state()), "Enter player names to start");
}

#[test]
fn test_letters_feed_fields_not_shortcuts() {
    // 'r', 't' and 'q' are game-mode shortcuts; during name entry they are
    // just characters.
    let mut app = App::new(Theme::Light);
    let theme_before = *app.theme();

    type_text(&mut app, "qrt");
    assert_eq!(app.state().draft().get(Mark::X), "qrt");
    assert_eq!(*app.theme(), theme_before);
}

#[test]
fn test_digit_keys_play_a_full_win() {
    let mut app = App::new(Theme::Light);
    start_game(&mut app);

    // X at 1, O at 4, X at 2, O at 5, X at 3 (screen labels) -> top row.
    for c in ['1', '4', '2', '5', '3'] {
        app.handle_key(key(KeyCode::Char(c)));
    }

    match app.state().outcome() {
        Outcome::Won(win) => {
            assert_eq!(win.mark, Mark::X);
            assert_eq!(win.line, [Cell::TopLeft, Cell::TopCenter, Cell::TopRight]);
        }
        other => panic!("expected a win, got {:?}", other),
    }
    assert_eq!(status_line(app.state()), "Ann (X) wins!");
}

#[test]
fn test_keys_after_win_change_nothing() {
    let mut app = App::new(Theme::Light);
    start_game(&mut app);
    for c in ['1', '4', '2', '5', '3'] {
        app.handle_key(key(KeyCode::Char(c)));
    }
    assert!(app.state().outcome().is_resolved());

    let before = app.state().clone();
    for c in ['6', '7', '8', '9'] {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.state(), &before, "resolved game must ignore placements");
}

#[test]
fn test_cursor_movement_and_placement() {
    let mut app = App::new(Theme::Light);
    start_game(&mut app);
    assert_eq!(*app.cursor(), Cell::Center);

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Left));
    assert_eq!(*app.cursor(), Cell::TopLeft);

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.state().board().get(Cell::TopLeft), Square::Taken(Mark::X));
    assert_eq!(app.state().turn(), Mark::O);

    // Space also places, at the cursor's current cell.
    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(
        app.state().board().get(Cell::TopCenter),
        Square::Taken(Mark::O)
    );
}

#[test]
fn test_restart_key_returns_to_name_entry() {
    let mut app = App::new(Theme::Light);
    start_game(&mut app);
    app.handle_key(key(KeyCode::Char('1')));

    app.handle_key(key(KeyCode::Char('r')));
    assert!(!app.state().started());
    assert_eq!(app.state().draft().get(Mark::X), "");
    assert_eq!(status_line(app.state()), "Enter player names to start");

    // Back in entry mode: characters feed the name fields again.
    type_text(&mut app, "Cleo");
    assert_eq!(app.state().draft().get(Mark::X), "Cleo");
}

#[test]
fn test_ctrl_restart_works_during_name_entry() {
    let mut app = App::new(Theme::Light);
    type_text(&mut app, "Ann");

    app.handle_key(ctrl('r'));
    assert_eq!(app.state().draft().get(Mark::X), "");
}

#[test]
fn test_theme_toggle_is_orthogonal_to_game_state() {
    let mut app = App::new(Theme::Light);

    // Ctrl+T during name entry.
    type_text(&mut app, "Ann");
    app.handle_key(ctrl('t'));
    assert_eq!(*app.theme(), Theme::Dark);
    assert_eq!(app.state().draft().get(Mark::X), "Ann");

    // Plain 't' once the game is running.
    app.handle_key(key(KeyCode::Tab));
    type_text(&mut app, "Bob");
    app.handle_key(key(KeyCode::Enter));
    let state_before = app.state().clone();

    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(*app.theme(), Theme::Light);
    assert_eq!(app.state(), &state_before, "theme never touches game state");
}

#[test]
fn test_quit_signals() {
    let mut app = App::new(Theme::Light);
    assert_eq!(app.handle_key(key(KeyCode::Esc)), Signal::Quit);

    let mut app = App::new(Theme::Light);
    start_game(&mut app);
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Signal::Quit);

    let mut app = App::new(Theme::Light);
    assert_eq!(app.handle_key(ctrl('c')), Signal::Quit);
}
