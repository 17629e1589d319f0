//! Previous/next change navigation
//!
//! Pure index arithmetic over a change list. Indices clamp at both ends and
//! never wrap; an empty list always yields index 0.

use crate::annotate::{Change, ChangeId};

/// Index of the change after `current`, clamped to the last change
pub fn next(changes: &[Change], current: usize) -> usize {
    match changes.len() {
        0 => 0,
        len => (current + 1).min(len - 1),
    }
}

/// Index of the change before `current`, clamped to the first change
pub fn prev(changes: &[Change], current: usize) -> usize {
    match changes.len() {
        0 => 0,
        len => current.saturating_sub(1).min(len - 1),
    }
}

/// Tracks the focused change of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeCursor {
    index: usize,
    len: usize,
}

impl ChangeCursor {
    pub fn new(changes: &[Change]) -> Self {
        Self {
            index: 0,
            len: changes.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.len == 0 || self.index + 1 >= self.len
    }

    pub fn next(&mut self, changes: &[Change]) -> usize {
        self.len = changes.len();
        self.index = next(changes, self.index);
        self.index
    }

    pub fn prev(&mut self, changes: &[Change]) -> usize {
        self.len = changes.len();
        self.index = prev(changes, self.index);
        self.index
    }

    /// Id of the focused change, used to look up its rendered fragment
    pub fn target(&self, changes: &[Change]) -> Option<ChangeId> {
        changes.get(self.index).map(|change| change.id)
    }

    /// Element id to scroll to
    pub fn anchor(&self, changes: &[Change]) -> Option<String> {
        self.target(changes).map(|id| id.anchor())
    }

    /// `"2 of 5"`, or `"0 of 0"` when there is nothing to navigate
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            "0 of 0".to_string()
        } else {
            format!("{} of {}", self.index + 1, self.len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::ChangeKind;

    fn changes(n: u32) -> Vec<Change> {
        (1..=n)
            .map(|id| Change {
                id: ChangeId(id),
                kind: ChangeKind::Inserted,
                text: format!("word{id}"),
                token_count: 1,
                impact_score: 1,
            })
            .collect()
    }

    #[test]
    fn test_clamping() {
        let changes = changes(3);

        assert_eq!(prev(&changes, 0), 0);
        assert_eq!(next(&changes, 2), 2);
        assert_eq!(next(&changes, 0), 1);
        assert_eq!(prev(&changes, 2), 1);
    }

    #[test]
    fn test_out_of_range_index_is_pulled_back() {
        let changes = changes(3);

        assert_eq!(next(&changes, 10), 2);
        assert_eq!(prev(&changes, 10), 2);
    }

    #[test]
    fn test_empty_changes() {
        assert_eq!(next(&[], 0), 0);
        assert_eq!(prev(&[], 0), 0);

        let cursor = ChangeCursor::new(&[]);
        assert_eq!(cursor.position_label(), "0 of 0");
        assert_eq!(cursor.anchor(&[]), None);
        assert!(cursor.is_first() && cursor.is_last());
    }

    #[test]
    fn test_cursor_walk() {
        let changes = changes(3);
        let mut cursor = ChangeCursor::new(&changes);

        assert_eq!(cursor.position_label(), "1 of 3");
        assert_eq!(cursor.anchor(&changes).as_deref(), Some("chg-1"));

        cursor.next(&changes);
        cursor.next(&changes);
        cursor.next(&changes);
        assert_eq!(cursor.index(), 2);
        assert!(cursor.is_last());
        assert_eq!(cursor.target(&changes), Some(ChangeId(3)));

        cursor.prev(&changes);
        assert_eq!(cursor.position_label(), "2 of 3");
    }
}
