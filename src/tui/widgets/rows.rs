//! The fixed five-row entries table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table};

use crate::model::RowBuffer;

/// Rows the table occupies: borders (2), header (1), slots.
pub const ROWS_HEIGHT: u16 = 2 + 1 + crate::model::ROW_CAPACITY as u16;

/// Returns `(name, location)` cell text for every slot; empty slots render blank.
pub fn row_cells(rows: &RowBuffer) -> Vec<(String, String)> {
    rows.slots()
        .iter()
        .map(|slot| match slot {
            Some(row) => (
                row.name.clone(),
                row.location
                    .as_ref()
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        })
        .collect()
}

/// Renders every slot of `rows`, populated or not.
#[mutants::skip]
pub fn draw_rows(rows: &RowBuffer, frame: &mut Frame, area: Rect) {
    let header = Row::new(vec!["Name", "Location"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body: Vec<Row> = row_cells(rows)
        .into_iter()
        .map(|(name, location)| Row::new(vec![name, location]))
        .collect();

    let widths = [Constraint::Percentage(45), Constraint::Min(0)];
    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, ROW_CAPACITY, Row as Entry};

    #[test]
    fn cells_cover_every_slot() {
        let rows = RowBuffer::new();
        let cells = row_cells(&rows);
        assert_eq!(cells.len(), ROW_CAPACITY);
        assert!(cells.iter().all(|(n, l)| n.is_empty() && l.is_empty()));
    }

    #[test]
    fn populated_slots_show_name_and_location() {
        let mut rows = RowBuffer::new();
        rows.insert(Entry::new("Sam", Some(Location::new("Canada"))))
            .unwrap();
        rows.insert(Entry::new("Kim", None)).unwrap();
        let cells = row_cells(&rows);
        assert_eq!(cells[0], ("Sam".to_string(), "Canada".to_string()));
        assert_eq!(cells[1], ("Kim".to_string(), String::new()));
        assert_eq!(cells[2], (String::new(), String::new()));
    }
}
