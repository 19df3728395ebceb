//! Terminal front end state and key handling.
//!
//! Modes: Normal → EditingDelta / Renaming → Normal.
//! The game-over notice overrides every mode until acknowledged.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;

use super::input::TextField;
use crate::core::{LifeAction, Player, PlayerId, Session, SessionConfig, Sign};
use crate::events::Dispatcher;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    EditingDelta,
    Renaming,
}

/// UI-local state; a change to any of it needs a redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
struct View {
    selected: usize,
    mode: Mode,
    delta: TextField,
    rename: TextField,
    show_history: bool,
    history_scroll: usize,
    should_quit: bool,
}

pub struct App {
    dispatcher: Dispatcher,
    redraw: Rc<Cell<bool>>,

    selected: usize,
    mode: Mode,
    delta: TextField,
    rename: TextField,

    show_history: bool,
    history_scroll: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: SessionConfig) -> Self {
        let mut dispatcher = Dispatcher::new(config);
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        dispatcher.subscribe(move |_, event| {
            debug!("render requested by {event:?}");
            flag.set(true);
        });

        Self {
            dispatcher,
            redraw,
            selected: 0,
            mode: Mode::Normal,
            delta: TextField::new(),
            rename: TextField::new(),
            show_history: false,
            history_scroll: 0,
            should_quit: false,
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Accessors
    // ────────────────────────────────────────────────────────────────────

    pub fn session(&self) -> &Session {
        self.dispatcher.session()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn delta_field(&self) -> &TextField {
        &self.delta
    }

    pub fn rename_field(&self) -> &TextField {
        &self.rename
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn history_scroll(&self) -> usize {
        self.history_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Consume the pending redraw request.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    fn selected_player(&self) -> Option<&Player> {
        self.session().players().get(self.selected)
    }

    fn selected_id(&self) -> Option<PlayerId> {
        self.selected_player().map(|p| p.id)
    }

    // ────────────────────────────────────────────────────────────────────
    // Input handling
    // ────────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let before = self.view();

        if self.session().game_over() {
            self.handle_game_over(key.code);
        } else {
            match self.mode {
                Mode::Normal => self.handle_normal(key.code),
                Mode::EditingDelta => self.handle_delta(key.code),
                Mode::Renaming => self.handle_rename(key.code),
            }
        }

        self.clamp_view();

        // Session changes flag a redraw through the dispatcher listener.
        if self.view() != before {
            self.request_redraw();
        }
    }

    fn handle_game_over(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.mode = Mode::Normal;
                self.dispatch(LifeAction::AcknowledgeGameOver);
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_normal(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                let count = self.session().player_count();
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % self.session().player_count();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                let preset = self.session().config().preset(index);
                if let (Some(delta), Some(player)) = (preset, self.selected_id()) {
                    self.dispatch(LifeAction::ChangeLife { player, delta });
                }
            }
            KeyCode::Char('-') => self.apply_custom(Sign::Minus),
            KeyCode::Char('+') | KeyCode::Char('=') => self.apply_custom(Sign::Plus),
            KeyCode::Char('e') if self.session().config().variant.has_custom_delta() => {
                self.mode = Mode::EditingDelta;
            }
            KeyCode::Char('r') => {
                if let Some(name) = self.selected_player().map(|p| p.name.clone()) {
                    self.rename = TextField::with_text(&name);
                    self.mode = Mode::Renaming;
                }
            }
            KeyCode::Char('a') => self.dispatch(LifeAction::AddPlayer),
            KeyCode::Char('R') => {
                self.delta.clear();
                self.dispatch(LifeAction::Reset);
            }
            KeyCode::Char('h') => {
                self.show_history = !self.show_history;
                self.history_scroll = 0;
            }
            KeyCode::Char('[') => {
                let oldest = self.session().history().len().saturating_sub(1);
                self.history_scroll = (self.history_scroll + 1).min(oldest);
            }
            KeyCode::Char(']') => self.history_scroll = self.history_scroll.saturating_sub(1),
            _ => {}
        }
    }

    fn handle_delta(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Char(c) => self.delta.insert_char(c),
            KeyCode::Backspace => self.delta.backspace(),
            KeyCode::Left => self.delta.move_left(),
            KeyCode::Right => self.delta.move_right(),
            _ => {}
        }
    }

    fn handle_rename(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                let name = self.rename.take();
                if let Some(player) = self.selected_id() {
                    self.dispatch(LifeAction::Rename { player, name });
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => {
                self.rename.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Char(c) => self.rename.insert_char(c),
            KeyCode::Backspace => self.rename.backspace(),
            KeyCode::Left => self.rename.move_left(),
            KeyCode::Right => self.rename.move_right(),
            _ => {}
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Helpers
    // ────────────────────────────────────────────────────────────────────

    fn apply_custom(&mut self, sign: Sign) {
        if !self.session().config().variant.has_custom_delta() {
            return;
        }
        if let Some(player) = self.selected_id() {
            let input = self.delta.text().to_string();
            self.dispatch(LifeAction::CustomDelta {
                player,
                sign,
                input,
            });
        }
    }

    /// Rejected actions (a non-numeric delta) are dropped without feedback.
    /// A life change scrolls the history back to the newest entry.
    fn dispatch(&mut self, action: LifeAction) {
        let follow = action.is_life_change();
        match self.dispatcher.dispatch(action) {
            Ok(_) if follow => self.history_scroll = 0,
            Ok(_) => {}
            Err(err) => debug!("action ignored: {err}"),
        }
    }

    fn clamp_view(&mut self) {
        let count = self.session().player_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
        let oldest = self.session().history().len().saturating_sub(1);
        self.history_scroll = self.history_scroll.min(oldest);
    }

    fn view(&self) -> View {
        View {
            selected: self.selected,
            mode: self.mode,
            delta: self.delta.clone(),
            rename: self.rename.clone(),
            show_history: self.show_history,
            history_scroll: self.history_scroll,
            should_quit: self.should_quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::core::Phase;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn life(app: &App, seat: usize) -> i64 {
        app.session().players()[seat].life
    }

    #[test]
    fn test_duel_presets() {
        let mut app = App::new(SessionConfig::duel());

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(life(&app, 0), 15);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(life(&app, 0), 14);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(life(&app, 0), 19);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(life(&app, 0), 20);

        // No fifth preset
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().history().len(), 4);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::new(SessionConfig::multiplayer());

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), 3);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), 0);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(life(&app, 1), 19);
    }

    #[test]
    fn test_custom_delta_flow() {
        let mut app = App::new(SessionConfig::multiplayer());

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode(), Mode::EditingDelta);
        type_text(&mut app, "7");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), Mode::Normal);

        press(&mut app, KeyCode::Char('-'));
        assert_eq!(life(&app, 0), 13);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(life(&app, 0), 20);
    }

    #[test]
    fn test_invalid_custom_delta_is_silent() {
        let mut app = App::new(SessionConfig::multiplayer());

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('-'));

        assert_eq!(life(&app, 0), 20);
        assert!(app.session().history().is_empty());
        assert_eq!(app.session().phase(), Phase::Setup);
    }

    #[test]
    fn test_duel_has_no_custom_delta() {
        let mut app = App::new(SessionConfig::duel());

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode(), Mode::Normal);
        press(&mut app, KeyCode::Char('-'));
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_rename_prompt() {
        let mut app = App::new(SessionConfig::multiplayer());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.mode(), Mode::Renaming);
        assert_eq!(app.rename_field().text(), "Player 1");

        for _ in 0.."Player 1".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Liliana");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session().players()[0].name, "Liliana");
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_rename_cancel() {
        let mut app = App::new(SessionConfig::multiplayer());

        press(&mut app, KeyCode::Char('r'));
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.session().players()[0].name, "Player 1");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_add_player_and_reset() {
        let mut app = App::new(SessionConfig::multiplayer());

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session().player_count(), 6);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), 5);

        press(&mut app, KeyCode::Char('R'));
        assert_eq!(app.session().player_count(), 4);
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_game_over_blocks_input_until_acknowledged() {
        let mut app = App::new(SessionConfig::duel());

        for _ in 0..4 {
            press(&mut app, KeyCode::Char('1'));
        }
        assert!(app.session().game_over());
        assert_eq!(app.session().winner(), Some("Player 2"));

        // Presets do nothing while the notice is up
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(life(&app, 0), 0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().phase(), Phase::Setup);
        assert_eq!(life(&app, 0), 20);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_history_toggle_and_scroll() {
        let mut app = App::new(SessionConfig::multiplayer());
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('1'));
        }

        press(&mut app, KeyCode::Char('h'));
        assert!(app.show_history());
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.history_scroll(), 1);
        press(&mut app, KeyCode::Char('h'));
        assert!(!app.show_history());
        assert_eq!(app.history_scroll(), 0);
    }

    #[test]
    fn test_history_scroll_stops_at_oldest_entry() {
        let mut app = App::new(SessionConfig::multiplayer());
        press(&mut app, KeyCode::Char('h'));

        // Nothing to scroll yet
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.history_scroll(), 0);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('['));
        }
        assert_eq!(app.history_scroll(), 1);

        // One step back reaches the newest entry again
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.history_scroll(), 0);
    }

    #[test]
    fn test_life_change_follows_newest_history() {
        let mut app = App::new(SessionConfig::multiplayer());
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.history_scroll(), 2);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.history_scroll(), 0);
    }

    #[test]
    fn test_reset_clamps_history_scroll() {
        let mut app = App::new(SessionConfig::multiplayer());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.history_scroll(), 1);

        press(&mut app, KeyCode::Char('R'));
        assert_eq!(app.history_scroll(), 0);
    }

    #[test]
    fn test_redraw_only_on_visible_change() {
        let mut app = App::new(SessionConfig::multiplayer());
        assert!(app.take_redraw());

        // Unmapped key changes nothing
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.take_redraw());

        // Rejected delta leaves session and view untouched
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        assert!(app.take_redraw());
        press(&mut app, KeyCode::Char('-'));
        assert!(!app.take_redraw());

        // Local selection change
        press(&mut app, KeyCode::Down);
        assert!(app.take_redraw());

        // Add Player blocked once started: no event, no redraw
        press(&mut app, KeyCode::Char('1'));
        assert!(app.take_redraw());
        press(&mut app, KeyCode::Char('a'));
        assert!(!app.take_redraw());
    }

    #[test]
    fn test_session_change_redraws_through_listener() {
        let mut app = App::new(SessionConfig::duel());
        assert!(app.take_redraw());

        let player = app.session().player_at(0).unwrap();
        app.dispatch(LifeAction::ChangeLife { player, delta: -1 });
        assert!(app.take_redraw());
    }

    #[test]
    fn test_redraw_requests() {
        let mut app = App::new(SessionConfig::duel());
        assert!(app.take_redraw());
        assert!(!app.take_redraw());

        press(&mut app, KeyCode::Char('2'));
        assert!(app.take_redraw());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SessionConfig::duel());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
