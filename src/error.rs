//! The main error enum for the crate lives here. Note that validation problems
//! are *not* errors in this sense: they're collected as a list of
//! [ValidationError][verr]s and shown to the user. These are the things that
//! go wrong when driving the form itself.
//!
//! [verr]: ../validation/enum.ValidationError.html

use thiserror::Error;

/// Everything that can go awry while operating the form.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A UI binding referenced a field key we don't know about
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// A builder was missing data or otherwise blew up
    #[error("error building object: {0}")]
    BuilderFailed(String),
    /// A validation/success dialog is up and must be dismissed first
    #[error("a dialog is showing and must be dismissed first")]
    DialogOpen,
    /// The form failed validation, so nothing was exported
    #[error("the form has {0} validation error(s)")]
    FormInvalid(usize),
    /// The export sink could not take our file
    #[error("export failed: {0}")]
    ExportFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
