//! Entry form widget: name input, location selector and the two buttons.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::LoadState;
use crate::model::FormState;

/// Rows the form occupies: name (3), message (1), location (3), buttons (1).
pub const FORM_HEIGHT: u16 = 8;

/// The focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Location,
    Clear,
    Add,
}

static FOCUS_ORDER: &[Focus] = &[Focus::Name, Focus::Location, Focus::Clear, Focus::Add];

impl Focus {
    /// The next element in tab order, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.index();
        FOCUS_ORDER[(idx + 1) % FOCUS_ORDER.len()]
    }

    /// The previous element in tab order, wrapping around.
    pub fn prev(self) -> Self {
        let idx = self.index();
        FOCUS_ORDER[(idx + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Location => 1,
            Self::Clear => 2,
            Self::Add => 3,
        }
    }
}

fn border_style(focused: bool, error: bool) -> Style {
    let color = if error {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    Style::default().fg(color)
}

/// Text shown inside the location selector.
fn location_label(state: &FormState, load_state: LoadState) -> String {
    match (state.draft_location(), load_state) {
        (Some(loc), _) => format!("◀ {loc} ▶"),
        (None, LoadState::Idle | LoadState::Loading) => "loading…".to_string(),
        (None, LoadState::Failed) => "unavailable".to_string(),
        (None, LoadState::Ready) => "(none)".to_string(),
    }
}

fn button(label: &str, focused: bool) -> Span<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(label, style)
}

/// Renders the entry form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(
    state: &FormState,
    load_state: LoadState,
    focus: Focus,
    frame: &mut Frame,
    area: Rect,
) {
    let [name_area, message_area, location_area, buttons_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let name_focused = focus == Focus::Name;
    let name_block = Block::default()
        .title("Name *")
        .borders(Borders::ALL)
        .border_style(border_style(name_focused, state.message().is_some()));
    let mut spans = vec![Span::raw(state.draft_name())];
    if name_focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(name_block), name_area);

    if let Some(message) = state.message() {
        let line = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, message_area);
    }

    let location_block = Block::default()
        .title("Location")
        .borders(Borders::ALL)
        .border_style(border_style(focus == Focus::Location, false));
    frame.render_widget(
        Paragraph::new(location_label(state, load_state)).block(location_block),
        location_area,
    );

    let buttons = Line::from(vec![
        button("[ Clear ]", focus == Focus::Clear),
        Span::raw("  "),
        button("[ Add ]", focus == Focus::Add),
    ]);
    frame.render_widget(Paragraph::new(buttons), buttons_area);
}
