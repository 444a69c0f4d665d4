//! Typing "N/A" (or "NA") as the representative/timekeeper's name means there
//! is no representative, so their phone and email get placeholder values.

use crate::{
    config::FormConfig,
    models::{
        change::{Change, Changeset, Origin},
        field::Field,
        record::Record,
    },
    rules::Rule,
};
use getset::Getters;

/// The representative shorthand rule. Unlike the category rule this one
/// always overwrites whatever is in the phone and email fields.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct RepresentativeShorthand {
    /// Written to `repPhone`
    phone: String,
    /// Written to `repEmail`
    email: String,
}

impl RepresentativeShorthand {
    pub const NAME: &'static str = "representative shorthand";

    pub fn new<T: Into<String>>(phone: T, email: T) -> Self {
        Self {
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(config.rep_placeholder_phone().as_str(), config.rep_placeholder_email().as_str())
    }

    /// Whether a representative name is the "there isn't one" shorthand.
    pub fn is_shorthand(name: &str) -> bool {
        let name = name.trim().to_uppercase();
        name == "N/A" || name == "NA"
    }

    fn overwrite(record: &Record, field: Field, val: &str, changes: &mut Changeset) {
        let current = record.get(field);
        if current != val {
            changes.push(Change::new(field, current, val, Origin::Rule(Self::NAME)));
        }
    }
}

impl Default for RepresentativeShorthand {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl Rule for RepresentativeShorthand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn inputs(&self) -> &[Field] {
        &[Field::RepTimekeeperName]
    }

    fn evaluate(&self, record: &Record) -> Changeset {
        let mut changes = Changeset::new();
        if Self::is_shorthand(record.get(Field::RepTimekeeperName)) {
            Self::overwrite(record, Field::RepPhone, &self.phone, &mut changes);
            Self::overwrite(record, Field::RepEmail, &self.email, &mut changes);
        }
        changes
    }
}
