use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::api::{LocationSource, NameValidator};
use crate::config::Config;
use crate::controller::{FormController, FormEvent};

use super::action::Action;
use super::error::AppError;
use super::screens::{FormScreenState, FormView, HelpState, draw_form_screen, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The entry form and its table.
    Form,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App<A> {
    screen: Screen,
    controller: FormController<A>,
    events: UnboundedReceiver<FormEvent>,
    form_screen: FormScreenState,
    help: HelpState,
    should_quit: bool,
}

impl<A> App<A>
where
    A: LocationSource + NameValidator + 'static,
{
    /// Creates a new `App` starting on the [`Screen::Form`] screen.
    pub fn new(api: Arc<A>, config: &Config) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Form,
            controller: FormController::new(api, config.debounce(), tx),
            events,
            form_screen: FormScreenState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: fetch locations, then draw → wait for a key or a
    /// controller event → dispatch, until quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut keys = EventStream::new();
        self.controller.initialize();

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            tokio::select! {
                next = keys.next() => match next {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },
                Some(event) = self.events.recv() => self.controller.handle_event(event),
            }
        }
        tracing::info!("quitting");
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Form => {
                let view = FormView::of(&self.controller);
                draw_form_screen(&self.form_screen, &view, frame, area);
            }
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Routes a key press to the current screen and applies the result.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::Form => self
                .form_screen
                .handle_key(key, self.controller.state().draft_name()),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::EditName(name) => self.controller.on_name_change(name),
            Action::NextLocation => self.controller.select_next_location(),
            Action::PreviousLocation => self.controller.select_previous_location(),
            Action::Add => {
                self.controller.on_add();
            }
            Action::Clear => self.controller.on_clear(),
            Action::Navigate(screen) => {
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the form controller.
    pub fn controller(&self) -> &FormController<A> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::api::MockApi;
    use crate::model::{FormMessage, Location};

    fn make_app() -> App<MockApi> {
        let config = Config {
            api_latency_ms: 0,
            ..Config::default()
        };
        App::new(Arc::new(MockApi::from_config(&config)), &config)
    }

    /// An app whose locations have already been delivered.
    async fn loaded_app() -> App<MockApi> {
        let mut app = make_app();
        app.controller.initialize();
        pump(&mut app, Duration::from_millis(10)).await;
        app
    }

    /// Feeds controller events to the app until `wait` has passed.
    async fn pump(app: &mut App<MockApi>, wait: Duration) {
        let deadline = tokio::time::Instant::now() + wait;
        loop {
            tokio::select! {
                biased;
                Some(event) = app.events.recv() => app.controller.handle_event(event),
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut App<MockApi>, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn new_starts_on_form() {
        let app = make_app();
        assert_eq!(app.screen(), Screen::Form);
        assert!(!app.should_quit());
        assert!(app.controller().rows().is_empty());
    }

    #[test]
    fn esc_on_form_quits() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn f1_opens_help_and_esc_returns() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Form);
        assert!(!app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn locations_load_into_form() {
        let app = loaded_app().await;
        assert_eq!(
            app.controller().state().draft_location(),
            Some(&Location::new("Canada"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn typing_and_enter_adds_row() {
        let mut app = loaded_app().await;
        type_string(&mut app, "Sam");
        assert_eq!(app.controller().state().draft_name(), "Sam");

        app.handle_key(press(KeyCode::Enter));
        let row = app.controller().rows().get(0).unwrap();
        assert_eq!(row.name, "Sam");
        assert_eq!(row.location, Some(Location::new("Canada")));
        assert_eq!(app.controller().state().draft_name(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn location_keys_change_selection() {
        let mut app = loaded_app().await;
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(
            app.controller().state().draft_location(),
            Some(&Location::new("China"))
        );
        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(
            app.controller().state().draft_location(),
            Some(&Location::new("Brazil"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn taken_name_shows_message_after_pause() {
        let mut app = loaded_app().await;
        type_string(&mut app, "invalid name");
        pump(&mut app, Duration::from_millis(200)).await;
        assert_eq!(
            app.controller().state().message(),
            Some(FormMessage::NameTaken)
        );

        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.controller().state().message(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn enter_with_empty_name_shows_message() {
        let mut app = loaded_app().await;
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            app.controller().state().message(),
            Some(FormMessage::EmptyName)
        );
        assert!(app.controller().rows().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn clear_button_resets_table() {
        let mut app = loaded_app().await;
        for name in ["a", "b", "c", "d", "e", "f"] {
            type_string(&mut app, name);
            app.handle_key(press(KeyCode::Enter));
        }
        assert!(app.controller().state().table_full());

        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.controller().rows().is_empty());
        assert!(!app.controller().state().table_full());
    }
}
