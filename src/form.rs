//! The form is the stateful part of this crate: it owns the record for one
//! editing session along with the bit of UI state that goes with it (the last
//! validation result and which dialog, if any, is up).
//!
//! A rendering layer drives it like so:
//!
//! ```rust
//! use lssr_form::{
//!     export::MemorySink,
//!     form::{Dialog, Form},
//!     models::field::Field,
//! };
//!
//! let mut form = Form::default();
//! let changes = form.set(Field::Staff, "Yes");
//! // the other four categories were filled in with "No"
//! assert_eq!(changes.len(), 5);
//!
//! assert_eq!(form.validate().unwrap(), Dialog::ShowingErrors);
//! form.dismiss();
//!
//! let mut sink = MemorySink::new();
//! assert!(form.export(&mut sink).is_err());
//! assert!(sink.last().is_none());
//! ```
//!
//! Every operation is synchronous: by the time `set` returns, the auto-fill
//! rules have run and the record is consistent.

use crate::{
    config::FormConfig,
    error::{Error, Result},
    export::{Export, ExportSink},
    models::{
        change::{Change, Changeset, Origin},
        field::Field,
        record::Record,
    },
    rules::Rules,
    validation::{self, ValidationError},
};
use getset::Getters;
use log::{debug, info, trace};

/// Which (modal) dialog is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Nothing is showing, the form can be edited, validated, or exported
    Idle,
    /// Validation (or an export attempt) found problems
    ShowingErrors,
    /// Validation found nothing wrong
    ShowingSuccess,
}

impl Default for Dialog {
    fn default() -> Self {
        Dialog::Idle
    }
}

/// One editing session of the hiring unit form.
#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct Form {
    /// The values entered so far
    record: Record,
    /// The dialog currently up
    dialog: Dialog,
    /// Problems found by the last validation or export attempt
    errors: Vec<ValidationError>,
    config: FormConfig,
    #[getset(skip)]
    rules: Rules,
}

impl Form {
    /// Start a new session with an empty record.
    pub fn new(config: FormConfig) -> Self {
        Self::from_record(Record::new(), config)
    }

    /// Start a session from a record that was filled in elsewhere. The
    /// auto-fill rules run once over the whole thing.
    pub fn from_record(mut record: Record, config: FormConfig) -> Self {
        let rules = Rules::standard(&config);
        let derived = rules.settle(&mut record);
        if !derived.is_empty() {
            debug!("Form::from_record() -- rules filled {} field(s)", derived.len());
        }
        Self {
            record,
            dialog: Dialog::Idle,
            errors: Vec::new(),
            config,
            rules,
        }
    }

    /// Write a single field. The write is never rejected. Any auto-fill rules
    /// watching the field run before this returns, and what they changed is
    /// included (after the user's own change) in the returned changeset.
    pub fn set<T: Into<String>>(&mut self, field: Field, value: T) -> Changeset {
        let value = value.into();
        trace!("Form::set() -- {} = {:?}", field, value);
        let from = self.record.set(field, value.as_str());
        let mut changes = Changeset::new_single(Change::new(field, from, value, Origin::User));
        let derived = self.rules.react(&mut self.record, &changes);
        changes.extend(derived);
        changes
    }

    /// Write a single field by its camelCase key, for bindings that only
    /// speak strings.
    pub fn set_key<T: Into<String>>(&mut self, key: &str, value: T) -> Result<Changeset> {
        let field: Field = key.parse()?;
        Ok(self.set(field, value))
    }

    fn check_idle(&self) -> Result<()> {
        if self.dialog != Dialog::Idle {
            Err(Error::DialogOpen)?;
        }
        Ok(())
    }

    /// Run the validation pass and pop up the matching dialog: the error list
    /// if anything is wrong, an all-clear otherwise. Only allowed while no
    /// dialog is showing.
    pub fn validate(&mut self) -> Result<Dialog> {
        self.check_idle()?;
        self.errors = validation::validate(&self.record);
        self.dialog = if self.errors.is_empty() {
            Dialog::ShowingSuccess
        } else {
            Dialog::ShowingErrors
        };
        debug!("Form::validate() -- {:?} ({} error(s))", self.dialog, self.errors.len());
        Ok(self.dialog)
    }

    /// Close whatever dialog is showing. Does nothing if none is.
    pub fn dismiss(&mut self) {
        self.dialog = Dialog::Idle;
    }

    /// Validate and, if that passes, serialize the record and hand it to the
    /// sink. A failed validation shows the error dialog and exports nothing.
    /// A successful export doesn't show any dialog.
    pub fn export<S: ExportSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.check_idle()?;
        self.errors = validation::validate(&self.record);
        if !self.errors.is_empty() {
            self.dialog = Dialog::ShowingErrors;
            debug!("Form::export() -- aborted, {} error(s)", self.errors.len());
            Err(Error::FormInvalid(self.errors.len()))?;
        }
        let export = Export::from_record(&self.record, &self.config);
        info!("Form::export() -- handing off {} ({} bytes)", export.filename(), export.body().len());
        sink.emit(&export)
    }

    /// The messages for the current error list, as shown in the error dialog.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// End the session, keeping the record.
    pub fn into_record(self) -> Record {
        self.record
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        export::{self, MemorySink, QuoteStyle},
        util::test::{fill_form, make_record},
    };

    /// A sink that always fails.
    struct Broken;

    impl ExportSink for Broken {
        fn emit(&mut self, _export: &Export) -> Result<()> {
            Err(Error::ExportFailed("disk full".into()))
        }
    }

    #[test]
    fn set_runs_rules() {
        let mut form = Form::default();
        let changes = form.set(Field::Staff, "Yes").into_vec();
        assert_eq!(changes.len(), 5);
        assert_eq!(changes[0], Change::new(Field::Staff, "", "Yes", Origin::User));
        assert_eq!(changes[1].origin(), &Origin::Rule("category exclusivity"));
        assert_eq!(form.record().ucsc_student(), "No");
        assert_eq!(form.record().volunteer(), "No");
        assert_eq!(form.record().academic_faculty(), "No");
        assert_eq!(form.record().non_ucsc_student(), "No");
        assert_eq!(form.record().staff(), "Yes");

        let changes = form.set(Field::RepPhone, "831-555-0101");
        assert_eq!(changes.len(), 1);
        let changes = form.set(Field::RepTimekeeperName, " n/a ");
        assert_eq!(changes.fields(), vec![Field::RepTimekeeperName, Field::RepPhone, Field::RepEmail]);
        assert_eq!(form.record().rep_phone(), "NA");
        assert_eq!(form.record().rep_email(), "no_email_given@ucsc.edu");

        // the shorthand doesn't fight later manual edits
        form.set(Field::RepEmail, "rep@ucsc.edu");
        assert_eq!(form.record().rep_email(), "rep@ucsc.edu");
    }

    #[test]
    fn set_key() {
        let mut form = Form::default();
        let changes = form.set_key("hiringUnit", "Library").unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(form.record().hiring_unit(), "Library");
        assert_eq!(form.set_key("hiring unit", "x"), Err(Error::UnknownField("hiring unit".into())));
    }

    #[test]
    fn validate_errors_then_dismiss() {
        let mut form = Form::default();
        assert_eq!(form.dialog(), &Dialog::Idle);
        assert_eq!(form.validate(), Ok(Dialog::ShowingErrors));
        assert_eq!(form.errors().len(), 11);
        assert_eq!(form.error_messages()[0], "First name is required");

        // modal: no validating or exporting until it's dismissed
        assert_eq!(form.validate(), Err(Error::DialogOpen));
        assert_eq!(form.export(&mut MemorySink::new()), Err(Error::DialogOpen));

        // edits still go through
        form.set(Field::First, "Sammy");
        form.dismiss();
        assert_eq!(form.dialog(), &Dialog::Idle);
        form.dismiss();
        assert_eq!(form.dialog(), &Dialog::Idle);
        assert_eq!(form.validate(), Ok(Dialog::ShowingErrors));
        assert_eq!(form.errors().len(), 10);
    }

    #[test]
    fn validate_success_is_its_own_signal() {
        let mut form = Form::default();
        fill_form(&mut form);
        assert_eq!(form.validate(), Ok(Dialog::ShowingSuccess));
        assert!(form.errors().is_empty());
        form.dismiss();
        assert_eq!(form.dialog(), &Dialog::Idle);
    }

    #[test]
    fn export_invalid_shows_errors() {
        let mut form = Form::default();
        fill_form(&mut form);
        form.set(Field::Email, "bad-email");
        let mut sink = MemorySink::new();
        assert_eq!(form.export(&mut sink), Err(Error::FormInvalid(1)));
        assert_eq!(form.dialog(), &Dialog::ShowingErrors);
        assert_eq!(form.error_messages(), vec!["Email format is invalid"]);
        assert!(sink.exports().is_empty());
    }

    #[test]
    fn export_valid_stays_idle() {
        let mut form = Form::default();
        fill_form(&mut form);
        let mut sink = MemorySink::new();
        form.export(&mut sink).unwrap();
        assert_eq!(form.dialog(), &Dialog::Idle);
        assert!(form.errors().is_empty());
        let export = sink.last().unwrap();
        assert_eq!(export.filename(), "LSSR_Hiring_Unit_Form.csv");
        assert_eq!(export.media_type(), "text/csv");
        assert_eq!(export.body(), &export::serialize(form.record(), QuoteStyle::Escaped));

        // the session goes on
        form.export(&mut sink).unwrap();
        assert_eq!(sink.exports().len(), 2);
        assert_eq!(form.validate(), Ok(Dialog::ShowingSuccess));
    }

    #[test]
    fn export_sink_failure_propagates() {
        let mut form = Form::default();
        fill_form(&mut form);
        assert_eq!(form.export(&mut Broken), Err(Error::ExportFailed("disk full".into())));
        assert_eq!(form.dialog(), &Dialog::Idle);
    }

    #[test]
    fn from_record_settles_rules() {
        let mut record = make_record();
        for field in Field::CATEGORIES {
            record.set(*field, "");
        }
        record.set(Field::AcademicFaculty, "Yes");
        record.set(Field::RepPhone, "");
        let form = Form::from_record(record, FormConfig::default());
        assert_eq!(form.record().staff(), "No");
        assert_eq!(form.record().academic_faculty(), "Yes");
        assert_eq!(form.record().rep_phone(), "NA");
        assert_eq!(form.dialog(), &Dialog::Idle);
        assert!(validation::is_valid(&form.into_record()));
    }

    #[test]
    fn configured_placeholders_flow_through() {
        let config = FormConfig::builder()
            .rep_placeholder_email("nobody@example.edu")
            .finish().unwrap();
        let mut form = Form::new(config);
        form.set(Field::RepTimekeeperName, "NA");
        assert_eq!(form.record().rep_email(), "nobody@example.edu");
        assert_eq!(form.config().rep_placeholder_email(), "nobody@example.edu");
    }
}
