//! Status bar widget: one-line summary of location loading and table fill.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::LoadState;
use crate::model::ROW_CAPACITY;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    pub load_state: LoadState,
    /// Number of locations available for selection.
    pub location_count: usize,
    /// Number of populated table rows.
    pub filled_rows: usize,
}

impl StatusBarContext {
    /// Text of the location segment, e.g. `4 locations`.
    fn locations_text(&self) -> String {
        match self.load_state {
            LoadState::Idle | LoadState::Loading => "Loading locations…".to_string(),
            LoadState::Failed => "Locations unavailable".to_string(),
            LoadState::Ready if self.location_count == 1 => "1 location".to_string(),
            LoadState::Ready => format!("{} locations", self.location_count),
        }
    }
}

/// Renders the status bar.
///
/// Display format: `Loading locations…  0/5 rows` while fetching, then
/// `4 locations  2/5 rows`. The location segment turns red if the fetch
/// failed and the row count turns yellow once the table is full.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let location_style = if ctx.load_state == LoadState::Failed {
        Style::default().fg(Color::Red)
    } else {
        cyan
    };
    let rows_style = if ctx.filled_rows >= ROW_CAPACITY {
        Style::default().fg(Color::Yellow)
    } else {
        cyan
    };

    let spans = vec![
        Span::styled(ctx.locations_text(), location_style),
        Span::styled("  ", cyan),
        Span::styled(
            format!("{}/{ROW_CAPACITY} rows", ctx.filled_rows),
            rows_style,
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_loading() {
        let ctx = StatusBarContext {
            load_state: LoadState::Loading,
            ..Default::default()
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("Loading locations"), "should show loading");
        assert!(output.contains("0/5 rows"), "should show empty table");
    }

    #[test]
    fn renders_location_count_and_rows() {
        let ctx = StatusBarContext {
            load_state: LoadState::Ready,
            location_count: 4,
            filled_rows: 2,
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("4 locations"));
        assert!(output.contains("2/5 rows"));
    }

    #[test]
    fn renders_failure() {
        let ctx = StatusBarContext {
            load_state: LoadState::Failed,
            ..Default::default()
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("Locations unavailable"));
    }

    #[test]
    fn singular_location() {
        let ctx = StatusBarContext {
            load_state: LoadState::Ready,
            location_count: 1,
            filled_rows: 0,
        };
        assert_eq!(ctx.locations_text(), "1 location");
    }
}
