use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::CatalogSource;
use crate::ui::app::App;

pub fn handle_key<S: CatalogSource>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Esc || is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_term();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.retry();
        return;
    }

    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FetchError, Normalizer, RawPayload};
    use crate::session::SearchSession;
    use crossterm::event::KeyEventState;
    use std::sync::Arc;

    struct NeverCalled;

    impl CatalogSource for NeverCalled {
        async fn fetch(&self) -> Result<RawPayload, FetchError> {
            Ok(Vec::new())
        }

        fn describe(&self) -> String {
            "unused".to_string()
        }
    }

    fn make_app() -> App<NeverCalled> {
        App::new(SearchSession::new(Arc::new(NeverCalled), Normalizer::default()))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn printable_chars_extend_term() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('F'), KeyModifiers::SHIFT));
        handle_key(&mut app, key(KeyCode::Char('r'), KeyModifiers::empty()));
        assert_eq!(app.search_term(), "Fr");

        handle_key(&mut app, key(KeyCode::Backspace, KeyModifiers::empty()));
        assert_eq!(app.search_term(), "F");
    }

    #[test]
    fn ctrl_u_clears_term() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('x'), KeyModifiers::empty()));
        handle_key(&mut app, key(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.search_term(), "");
    }

    #[test]
    fn control_chars_are_not_typed() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('x'), KeyModifiers::CONTROL));
        handle_key(&mut app, key(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.search_term(), "");
    }

    #[test]
    fn quit_keys() {
        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Esc, KeyModifiers::empty()));
        assert!(app.should_quit());

        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut release = key(KeyCode::Char('a'), KeyModifiers::empty());
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.search_term(), "");
    }
}
