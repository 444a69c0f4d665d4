//! The record is the one entity this crate deals with: a flat mapping of every
//! form field to its current text value. It lives for one editing session and
//! nothing ever gets removed from it.
//!
//! Writing to a record directly with [Record::set] does nothing but replace the
//! value. The auto-fill rules only run when writes go through a
//! [Form](../../form/struct.Form.html).

use crate::{
    error::{Error, Result},
    models::field::Field,
};

hiring_fields! { record }

impl Record {
    /// Create a new record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// Replace exactly one field's value, returning what was there before.
    /// Any text at all is accepted here.
    pub fn set<T: Into<String>>(&mut self, field: Field, value: T) -> String {
        std::mem::replace(self.slot_mut(field), value.into())
    }

    /// Iterate over every field and its value, in export order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.iter().map(move |field| (*field, self.get(*field)))
    }

    /// Whether a field holds nothing but whitespace (or nothing at all).
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).trim().is_empty()
    }
}

impl RecordBuilder {
    /// Finish building, wrapping builder failures in our error type.
    pub fn finish(self) -> Result<Record> {
        self.build().map_err(|e| Error::BuilderFailed(e.to_string()))
    }
}
