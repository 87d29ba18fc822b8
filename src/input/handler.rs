use crate::app::{AppState, Command, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle a key press. Returns true when the application should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
        UiMode::Report => handle_report_mode(app, key),
    }
}

/// Map a key in normal mode to the command it triggers
pub fn command_for_key(app: &AppState, key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter => app.select_under_cursor(),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::StartTimer),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::PauseTimer),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => Some(Command::DeleteTask),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ToggleTodayFilter),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::TogglePreviousFilter),
        _ => None,
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    if let Some(command) = command_for_key(app, key) {
        app.dispatch(command);
        return false;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.begin_add(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.toggle_report(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

/// Handle keys while typing a new task name
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            let command = app.submit_input();
            app.dispatch(command);
        }
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
    false
}

/// Handle keys while the time distribution is shown
fn handle_report_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Esc => app.toggle_report(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
