//! Owned, ordered storage for notes.
//!
//! The collection is handed around explicitly: whoever owns a
//! `NoteCollection` decides when notes are appended, and the console
//! operations only ever borrow it as a slice.

use tracing::debug;

use crate::Note;

/// An ordered sequence of notes addressed by 1-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Append a note and return its display number.
    pub fn push(&mut self, note: Note) -> usize {
        self.notes.push(note);
        let number = self.notes.len();
        debug!("Stored note #{number}");
        number
    }

    /// Look up a note by its display number (1-based).
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&Note> {
        number.checked_sub(1).and_then(|index| self.notes.get(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Release the underlying notes.
    #[must_use]
    pub fn into_inner(self) -> Vec<Note> {
        self.notes
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl FromIterator<Note> for NoteCollection {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Note]> for NoteCollection {
    fn as_ref(&self) -> &[Note] {
        &self.notes
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_display_number() {
        let mut notes = NoteCollection::new();
        assert!(notes.is_empty());

        assert_eq!(notes.push(Note::new("a", "1")), 1);
        assert_eq!(notes.push(Note::new("b", "2")), 2);
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_get_is_one_based() {
        let notes: NoteCollection = vec![Note::new("a", "1"), Note::new("b", "2")].into();

        assert_eq!(notes.get(0), None);
        assert_eq!(notes.get(1).map(|n| n.title.as_str()), Some("a"));
        assert_eq!(notes.get(2).map(|n| n.title.as_str()), Some("b"));
        assert_eq!(notes.get(3), None);
    }

    #[test]
    fn test_order_is_insertion_order() {
        let notes: NoteCollection = ["x", "y", "z"]
            .into_iter()
            .map(|t| Note::new(t, ""))
            .collect();

        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["x", "y", "z"]);
        assert_eq!(notes.into_inner().len(), 3);
    }
}
