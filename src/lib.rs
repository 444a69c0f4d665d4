//! Welcome to the LSSR hiring unit form core. This crate holds everything the
//! form does that isn't drawing inputs on a screen: the record of entered
//! values, the auto-fill rules that react to edits, the validation checklist,
//! and the comma-separated export.
//!
//! The [Form](form/struct.Form.html) is where most callers start. A rendering
//! layer calls `set()` on every edit and `validate()`/`export()` on the two
//! buttons, and reads `record()`, `dialog()`, and `errors()` back to draw.
//!
//! ```rust
//! use lssr_form::{
//!     export::MemorySink,
//!     form::{Dialog, Form},
//!     models::field::Field,
//! };
//!
//! let mut form = Form::default();
//! form.set(Field::First, "Sammy");
//! form.set(Field::Last, "Slug");
//! form.set(Field::Email, "sammy@ucsc.edu");
//! form.set(Field::Mailcode, "1234");
//! form.set(Field::HiringUnit, "Library");
//! form.set(Field::JobTitle, "Student Assistant");
//! form.set(Field::JobNumber, "5501");
//! form.set(Field::ManagerEmail, "pat@ucsc.edu");
//! form.set(Field::FbiBackground, "No");
//! form.set(Field::ReclassDuties, "No");
//! form.set(Field::Volunteer, "Yes");
//! form.set(Field::RepTimekeeperName, "N/A");
//!
//! assert_eq!(form.validate().unwrap(), Dialog::ShowingSuccess);
//! form.dismiss();
//!
//! let mut sink = MemorySink::new();
//! form.export(&mut sink).unwrap();
//! assert_eq!(sink.last().unwrap().filename(), "LSSR_Hiring_Unit_Form.csv");
//! ```

pub mod error;
pub mod models;
pub mod config;
pub mod rules;
pub mod validation;
pub mod export;
pub mod form;
mod util;

pub use form::{Dialog, Form};
pub use models::{
    change::{Change, Changeset, Origin},
    field::{Field, InputKind, Section},
    record::Record,
};
pub use validation::ValidationError;
