//! Entry screen: the name/location form above the five-row table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::{LocationSource, NameValidator};
use crate::controller::{FormController, LoadState};
use crate::model::{FormState, Location, RowBuffer, TABLE_FULL_MESSAGE};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{
    FORM_HEIGHT, Focus, ROWS_HEIGHT, StatusBarContext, draw_form, draw_rows, draw_status_bar,
};

/// Borrowed snapshot of everything the entry screen renders.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub state: &'a FormState,
    pub rows: &'a RowBuffer,
    pub locations: &'a [Location],
    pub load_state: LoadState,
}

impl<'a> FormView<'a> {
    /// Captures the controller's current state for drawing.
    pub fn of<A>(controller: &'a FormController<A>) -> Self
    where
        A: LocationSource + NameValidator + 'static,
    {
        Self {
            state: controller.state(),
            rows: controller.rows(),
            locations: controller.locations(),
            load_state: controller.load_state(),
        }
    }

    fn status(&self) -> StatusBarContext {
        StatusBarContext {
            load_state: self.load_state,
            location_count: self.locations.len(),
            filled_rows: self.rows.len(),
        }
    }
}

/// State for the entry screen. Form data itself lives in the controller.
#[derive(Debug, Clone, Default)]
pub struct FormScreenState {
    focus: Focus,
}

impl FormScreenState {
    /// Creates a new entry screen with focus on the name field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the focused element.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// `name` is the current draft name, used to build the edited value.
    pub fn handle_key(&mut self, key: KeyEvent, name: &str) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            _ => match self.focus {
                Focus::Name => Self::handle_name_key(key.code, name),
                Focus::Location => Self::handle_location_key(key.code),
                Focus::Clear => Self::handle_button_key(key.code, Action::Clear),
                Focus::Add => Self::handle_button_key(key.code, Action::Add),
            },
        }
    }

    fn handle_name_key(code: KeyCode, name: &str) -> Action {
        match code {
            KeyCode::Char(ch) => {
                let mut edited = name.to_string();
                edited.push(ch);
                Action::EditName(edited)
            }
            KeyCode::Backspace if !name.is_empty() => {
                let mut edited = name.to_string();
                edited.pop();
                Action::EditName(edited)
            }
            KeyCode::Enter => Action::Add,
            _ => Action::None,
        }
    }

    fn handle_location_key(code: KeyCode) -> Action {
        match code {
            KeyCode::Down | KeyCode::Right => Action::NextLocation,
            KeyCode::Up | KeyCode::Left => Action::PreviousLocation,
            KeyCode::Enter => Action::Add,
            _ => Action::None,
        }
    }

    fn handle_button_key(code: KeyCode, press: Action) -> Action {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => press,
            _ => Action::None,
        }
    }
}

/// Renders the entry screen.
#[mutants::skip]
pub fn draw_form_screen(
    state: &FormScreenState,
    view: &FormView<'_>,
    frame: &mut Frame,
    area: Rect,
) {
    let [status_area, main_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    draw_status_bar(&view.status(), frame, status_area);

    let block = Block::default()
        .title(" roster ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(main_area);
    frame.render_widget(block, main_area);

    let [form_area, _gap, table_area, full_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(ROWS_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(view.state, view.load_state, state.focus(), frame, form_area);
    draw_rows(view.rows, frame, table_area);

    if view.state.table_full() {
        let full = Paragraph::new(Line::from(Span::styled(
            TABLE_FULL_MESSAGE,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(full, full_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: focus  ↑↓: location  Enter: add  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
