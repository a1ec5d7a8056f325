use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, ViewMode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('1') | KeyCode::Char('m') => app.set_view(ViewMode::Map),
        KeyCode::Char('2') | KeyCode::Char('d') => app.set_view(ViewMode::Dashboard),
        KeyCode::Char('3') | KeyCode::Char('a') => app.set_view(ViewMode::Activity),
        KeyCode::Tab => app.cycle_view(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
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
    use crate::analytics::AnalyticsClient;
    use crate::config::{Config, ConfigStore};
    use crossterm::event::KeyEventState;
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config, AnalyticsClient::disabled())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn number_keys_select_views() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.view(), ViewMode::Dashboard);
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.view(), ViewMode::Activity);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.view(), ViewMode::Map);
    }

    #[test]
    fn letter_keys_mirror_number_keys() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert_eq!(app.view(), ViewMode::Dashboard);
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.view(), ViewMode::Activity);
        handle_key(&mut app, press(KeyCode::Char('m')));
        assert_eq!(app.view(), ViewMode::Map);
    }

    #[test]
    fn tab_cycles_views() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view(), ViewMode::Dashboard);
    }

    #[test]
    fn quit_keys_request_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = make_app();
            handle_key(&mut app, press(code));
            assert!(app.should_quit());
        }

        let mut app = make_app();
        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, ctrl_c);
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, release);
        assert!(!app.should_quit());
    }
}
