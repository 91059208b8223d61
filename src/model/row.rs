use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Location;

/// Number of slots in a [`RowBuffer`].
pub const ROW_CAPACITY: usize = 5;

/// One committed name/location entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    /// `None` when the row was added before any location was available.
    pub location: Option<Location>,
}

impl Row {
    pub fn new(name: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// Returned by [`RowBuffer::insert`] when every slot is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all 5 rows are populated")]
pub struct BufferFull;

/// A fixed table of [`ROW_CAPACITY`] slots, each empty or holding a [`Row`].
///
/// The buffer never grows or shrinks. New rows land in the first empty
/// slot; individual rows cannot be removed, only the whole buffer cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowBuffer {
    slots: [Option<Row>; ROW_CAPACITY],
}

impl RowBuffer {
    /// Creates a buffer with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `row` into the first empty slot and returns that slot's index.
    pub fn insert(&mut self, row: Row) -> Result<usize, BufferFull> {
        let (idx, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(BufferFull)?;
        *slot = Some(row);
        Ok(idx)
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Returns all slots in position order.
    pub fn slots(&self) -> &[Option<Row>] {
        &self.slots
    }

    /// Returns the row at `index`, if that slot is populated.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if no slot is empty.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn row(name: &str) -> Row {
        Row::new(name, Some(Location::new("Canada")))
    }

    #[test]
    fn new_buffer_has_five_empty_slots() {
        let buf = RowBuffer::new();
        assert_eq!(buf.slots().len(), ROW_CAPACITY);
        assert!(buf.slots().iter().all(Option::is_none));
        assert!(buf.is_empty());
        assert!(!buf.is_full());
    }

    #[test]
    fn insert_fills_left_to_right() {
        let mut buf = RowBuffer::new();
        assert_eq!(buf.insert(row("a")), Ok(0));
        assert_eq!(buf.insert(row("b")), Ok(1));
        assert_eq!(buf.get(0).map(|r| r.name.as_str()), Some("a"));
        assert_eq!(buf.get(1).map(|r| r.name.as_str()), Some("b"));
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn sixth_insert_is_rejected_without_change() {
        let mut buf = RowBuffer::new();
        for name in ["a", "b", "c", "d", "e"] {
            buf.insert(row(name)).unwrap();
        }
        assert!(buf.is_full());
        let before = buf.clone();
        assert_eq!(buf.insert(row("f")), Err(BufferFull));
        assert_eq!(buf, before);
    }

    #[test]
    fn insert_uses_first_gap() {
        let mut buf = RowBuffer::new();
        buf.slots[2] = Some(row("middle"));
        assert_eq!(buf.insert(row("a")), Ok(0));
        assert_eq!(buf.insert(row("b")), Ok(1));
        assert_eq!(buf.insert(row("c")), Ok(3));
    }

    #[test]
    fn clear_empties_all_slots() {
        let mut buf = RowBuffer::new();
        buf.insert(row("a")).unwrap();
        buf.insert(row("b")).unwrap();
        buf.clear();
        assert_eq!(buf, RowBuffer::new());
        assert_eq!(buf.slots().len(), ROW_CAPACITY);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let buf = RowBuffer::new();
        assert_eq!(buf.get(ROW_CAPACITY), None);
    }

    #[test]
    fn buffer_full_message() {
        assert_eq!(BufferFull.to_string(), "all 5 rows are populated");
    }

    #[quickcheck]
    fn populated_count_matches_successful_inserts(names: Vec<String>) -> bool {
        let mut buf = RowBuffer::new();
        let accepted = names
            .iter()
            .filter(|n| buf.insert(Row::new(n.as_str(), None)).is_ok())
            .count();
        accepted == names.len().min(ROW_CAPACITY)
            && buf.len() == accepted
            && buf.slots().len() == ROW_CAPACITY
    }

    #[quickcheck]
    fn fresh_buffer_keeps_insertion_order(names: Vec<String>) -> bool {
        let mut buf = RowBuffer::new();
        for n in &names {
            let _ = buf.insert(Row::new(n.as_str(), None));
        }
        names
            .iter()
            .take(ROW_CAPACITY)
            .enumerate()
            .all(|(i, n)| buf.get(i).map(|r| &r.name) == Some(n))
    }
}
