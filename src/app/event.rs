// Keyboard event handling
//
// Key bindings:
// - `q`, `Q` - quit
// - `Esc` - close the roulette overlay, or quit when it is closed
// - `p`, `P` - pause/resume polling and the clock
// - `r`, `R` - open/close the roulette overlay
// - `Enter`, `g`, `G` - spin the roulette (while the overlay is open)
// - `Up`/`Down` - scroll sections

use super::AppState;
use crate::poller::Poller;
use crossterm::event::KeyCode;

/// Handle one key press. Returns `false` when the application should exit.
pub fn handle_key_event(app: &mut AppState, poller: &mut Poller, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.running = false;
            false
        }
        KeyCode::Esc => {
            if app.roulette.open {
                app.roulette.toggle_open();
                true
            } else {
                app.running = false;
                false
            }
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.toggle_pause(poller);
            true
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.roulette.toggle_open();
            true
        }
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char('G') => {
            if app.roulette.open {
                app.roulette.spin();
            }
            true
        }
        KeyCode::Up => {
            app.scroll_up();
            true
        }
        KeyCode::Down => {
            app.scroll_down();
            true
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Category;

    fn fixture() -> (AppState, Poller) {
        let app = AppState::new(Category::All);
        let poller = Poller::new("http://127.0.0.1:1/api".to_string()).unwrap();
        (app, poller)
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let (mut app, mut poller) = fixture();
        assert!(app.running);
        assert!(!handle_key_event(&mut app, &mut poller, KeyCode::Char('q')));
        assert!(!app.running);

        let (mut app, mut poller) = fixture();
        assert!(!handle_key_event(&mut app, &mut poller, KeyCode::Esc));
        assert!(!app.running);
    }

    #[test]
    fn esc_closes_the_overlay_before_quitting() {
        let (mut app, mut poller) = fixture();
        app.roulette.toggle_open();
        assert!(handle_key_event(&mut app, &mut poller, KeyCode::Esc));
        assert!(!app.roulette.open);
        assert!(app.running);
    }

    #[test]
    fn pause_toggles_and_resumes() {
        let (mut app, mut poller) = fixture();
        handle_key_event(&mut app, &mut poller, KeyCode::Char('p'));
        assert!(app.paused);
        handle_key_event(&mut app, &mut poller, KeyCode::Char('P'));
        assert!(!app.paused);
    }

    #[test]
    fn spin_only_works_with_the_overlay_open() {
        let (mut app, mut poller) = fixture();
        handle_key_event(&mut app, &mut poller, KeyCode::Enter);
        assert!(!app.roulette.is_spinning());

        handle_key_event(&mut app, &mut poller, KeyCode::Char('r'));
        assert!(app.roulette.open);
        handle_key_event(&mut app, &mut poller, KeyCode::Enter);
        assert!(app.roulette.is_spinning());
    }
}
