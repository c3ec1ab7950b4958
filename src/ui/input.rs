use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crate::ui::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Index => handle_index_key(app, key),
        Route::Show(_) => handle_show_key(app, key),
        Route::New => handle_form_key(app, key),
    }
}

fn handle_index_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('n') => app.navigate(Route::New),
        KeyCode::Char('r') => app.reload_posts(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_show_key(app: &mut App, key: KeyEvent) {
    if app.is_confirming_delete() {
        match key.code {
            KeyCode::Char('y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('b') | KeyCode::Esc => app.navigate(Route::Index),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.navigate(Route::Index),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
