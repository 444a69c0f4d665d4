//! Once the user says "Yes" to one category, the categories they haven't
//! touched yet default to "No" so they don't have to answer all five.

use crate::{
    models::{
        change::{Change, Changeset, Origin},
        field::Field,
        record::Record,
    },
    rules::Rule,
    validation::is_yes,
};

/// The category exclusivity rule.
///
/// The "yes" field is the first category (in `Field::CATEGORIES` order) whose
/// value is "yes" in any case. Every *other* category that is still exactly
/// empty gets "No". Anything that already holds a value, including a second
/// "Yes", is left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CategoryExclusivity;

impl CategoryExclusivity {
    pub const NAME: &'static str = "category exclusivity";

    /// Which category counts as the selected one, if any.
    pub fn selected(record: &Record) -> Option<Field> {
        Field::CATEGORIES.iter()
            .copied()
            .find(|field| is_yes(record.get(*field)))
    }
}

impl Rule for CategoryExclusivity {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn inputs(&self) -> &[Field] {
        Field::CATEGORIES
    }

    fn evaluate(&self, record: &Record) -> Changeset {
        let mut changes = Changeset::new();
        let yes_field = match Self::selected(record) {
            Some(field) => field,
            None => return changes,
        };
        for field in Field::CATEGORIES {
            if *field != yes_field && record.get(*field).is_empty() {
                changes.push(Change::new(*field, "", "No", Origin::Rule(Self::NAME)));
            }
        }
        changes
    }
}
