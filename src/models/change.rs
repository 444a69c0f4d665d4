//! Change sets describe writes to a record. Every write through the form,
//! whether the user made it or an auto-fill rule derived it, comes back to the
//! caller as a `Change` so the rendering layer knows exactly which inputs need
//! a refresh.

use crate::models::{
    field::Field,
    record::Record,
};
use getset::Getters;

/// Who made a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The user typed or selected something
    User,
    /// An auto-fill rule derived the value (holds the rule's name)
    Rule(&'static str),
}

/// A single field write.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Change {
    field: Field,
    from: String,
    to: String,
    origin: Origin,
}

impl Change {
    pub fn new<T: Into<String>>(field: Field, from: T, to: T, origin: Origin) -> Self {
        Self {
            field,
            from: from.into(),
            to: to.into(),
            origin,
        }
    }

    /// Whether this write actually changes the value it replaces.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Apply this change to a record. The `from` value is not checked: the
    /// write is a plain replace.
    pub fn apply(&self, record: &mut Record) {
        record.set(self.field, self.to.as_str());
    }
}

/// An ordered list of changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changeset {
    changes: Vec<Change>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a changeset with one change in it.
    pub fn new_single(change: Change) -> Self {
        Self { changes: vec![change] }
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn extend(&mut self, other: Changeset) {
        self.changes.extend(other.changes);
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// The fields touched by this changeset, in order, without duplicates.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::with_capacity(self.changes.len());
        for change in &self.changes {
            if !fields.contains(change.field()) {
                fields.push(*change.field());
            }
        }
        fields
    }

    /// Whether any change in this set writes to `field`.
    pub fn touches(&self, field: Field) -> bool {
        self.changes.iter().any(|change| change.field == field)
    }

    /// Apply every change, in order, to the given record.
    pub fn apply(&self, record: &mut Record) {
        for change in &self.changes {
            change.apply(record);
        }
    }

    pub fn into_vec(self) -> Vec<Change> {
        self.changes
    }
}

impl IntoIterator for Changeset {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
