//! Collection Editor — one generic engine for editing any ordered sequence
//! of like-shaped records (experience, education, projects, links).
//!
//! Add/update/remove semantics are defined once here; each shape only
//! supplies a blank constructor and a text-form adapter via
//! [`EditableShape`]. Removal is two-phase: `request_removal` arms an
//! explicit confirmation state and only `confirm_removal` mutates.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod shapes;
pub mod text;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("index {index} is out of range for a collection of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Transient confirmation state for the two-phase delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalState {
    #[default]
    Idle,
    Armed(usize),
}

impl RemovalState {
    pub fn armed_index(&self) -> Option<usize> {
        match self {
            RemovalState::Idle => None,
            RemovalState::Armed(index) => Some(*index),
        }
    }
}

/// A record shape editable through the generic engine.
///
/// `blank` must return a fully-formed, contract-valid instance with
/// empty fields — never a partially initialized one — so the editor can
/// render it immediately after an append.
pub trait EditableShape: Clone {
    /// The flat text representation edited by the user: multi-line and
    /// comma-separated fields instead of string sequences.
    type Form: Serialize + DeserializeOwned;

    fn blank() -> Self;
    fn from_form(form: Self::Form) -> Self;
    fn to_form(&self) -> Self::Form;
}

/// Borrowing editor over one collection plus its removal state.
pub struct CollectionEditor<'a, T: EditableShape> {
    items: &'a mut Vec<T>,
    removal: &'a mut RemovalState,
}

impl<'a, T: EditableShape> CollectionEditor<'a, T> {
    pub fn new(items: &'a mut Vec<T>, removal: &'a mut RemovalState) -> Self {
        Self { items, removal }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the element at `index`; never changes the length.
    pub fn update_at(&mut self, index: usize, item: T) -> Result<(), EditError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(EditError::OutOfRange { index, len }),
        }
    }

    /// Replaces the element at `index` from its form representation.
    pub fn update_form(&mut self, index: usize, form: T::Form) -> Result<(), EditError> {
        self.update_at(index, T::from_form(form))
    }

    /// Appends one blank item; returns its index.
    pub fn append_blank(&mut self) -> usize {
        self.items.push(T::blank());
        self.items.len() - 1
    }

    /// Arms removal confirmation for `index` without mutating the
    /// sequence. Re-arming replaces any previously armed index.
    pub fn request_removal(&mut self, index: usize) -> Result<(), EditError> {
        if index >= self.items.len() {
            return Err(EditError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        *self.removal = RemovalState::Armed(index);
        Ok(())
    }

    /// Removes the armed index and disarms; a no-op when nothing is armed.
    /// Returns the removed item, if any.
    pub fn confirm_removal(&mut self) -> Option<T> {
        match std::mem::take(self.removal) {
            RemovalState::Idle => None,
            RemovalState::Armed(index) if index < self.items.len() => {
                Some(self.items.remove(index))
            }
            // Stale arm pointing past the end; disarm without mutating.
            RemovalState::Armed(_) => None,
        }
    }

    /// Disarms without mutating the sequence.
    pub fn cancel_removal(&mut self) {
        *self.removal = RemovalState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::shapes::LinkForm;
    use super::*;
    use crate::models::portfolio::Link;

    fn link(name: &str) -> Link {
        Link {
            name: name.to_string(),
            url: format!("https://example.com/{name}"),
        }
    }

    fn fixture() -> (Vec<Link>, RemovalState) {
        (vec![link("a"), link("b"), link("c")], RemovalState::Idle)
    }

    #[test]
    fn test_append_blank_increases_length_by_one() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        let index = editor.append_blank();
        assert_eq!(index, 3);
        assert_eq!(items.len(), 4);
        assert_eq!(items[3], Link::default());
    }

    #[test]
    fn test_update_at_replaces_in_place() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        editor.update_at(1, link("swapped")).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].name, "swapped");
        assert_eq!(items[0].name, "a");
        assert_eq!(items[2].name, "c");
    }

    #[test]
    fn test_update_at_out_of_range() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        let err = editor.update_at(3, link("x")).unwrap_err();
        assert_eq!(err, EditError::OutOfRange { index: 3, len: 3 });
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_request_then_cancel_leaves_sequence_unchanged() {
        let (mut items, mut removal) = fixture();
        let before = items.clone();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        editor.request_removal(1).unwrap();
        assert_eq!(removal_snapshot(&removal), Some(1));
        let mut editor = CollectionEditor::new(&mut items, &mut removal);
        editor.cancel_removal();

        assert_eq!(items, before);
        assert_eq!(removal, RemovalState::Idle);
    }

    #[test]
    fn test_request_then_confirm_removes_and_preserves_order() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        editor.request_removal(1).unwrap();
        let removed = editor.confirm_removal().unwrap();

        assert_eq!(removed.name, "b");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "a");
        assert_eq!(items[1].name, "c");
        assert_eq!(removal, RemovalState::Idle);
    }

    #[test]
    fn test_confirm_without_arm_is_noop() {
        let (mut items, mut removal) = fixture();
        let before = items.clone();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        assert!(editor.confirm_removal().is_none());
        assert_eq!(items, before);
    }

    #[test]
    fn test_request_removal_out_of_range() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        let err = editor.request_removal(7).unwrap_err();
        assert_eq!(err, EditError::OutOfRange { index: 7, len: 3 });
        assert_eq!(removal, RemovalState::Idle);
    }

    #[test]
    fn test_rearming_replaces_previous_index() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        editor.request_removal(0).unwrap();
        editor.request_removal(2).unwrap();
        let removed = editor.confirm_removal().unwrap();
        assert_eq!(removed.name, "c");
    }

    #[test]
    fn test_update_form_goes_through_shape_adapter() {
        let (mut items, mut removal) = fixture();
        let mut editor = CollectionEditor::new(&mut items, &mut removal);

        editor
            .update_form(
                0,
                LinkForm {
                    name: "Portfolio".to_string(),
                    url: "https://folio.example".to_string(),
                },
            )
            .unwrap();
        assert_eq!(items[0].name, "Portfolio");
    }

    fn removal_snapshot(state: &RemovalState) -> Option<usize> {
        state.armed_index()
    }
}
