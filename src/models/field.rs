//! The form has a fixed, closed set of fields. This module names them and
//! describes how a rendering layer should present them: which section each
//! lives in, what kind of input it takes, and what it's called in labels,
//! error messages, and the exported file.

use std::fmt;

hiring_fields! { field }

impl Field {
    /// The category fields, in the fixed order used to break ties when more
    /// than one of them says "Yes".
    pub const CATEGORIES: &'static [Field] = &[
        Field::Staff,
        Field::UcscStudent,
        Field::Volunteer,
        Field::AcademicFaculty,
        Field::NonUcscStudent,
    ];

    /// Whether this is one of the (mostly) mutually-exclusive category fields.
    pub fn is_category(&self) -> bool {
        Self::CATEGORIES.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The labeled groups the form is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum Section {
    Personal,
    Position,
    Manager,
    Category,
    AdditionalRequirements,
    Representative,
    Other,
}

impl Section {
    /// Every section, in display order.
    pub const ALL: &'static [Section] = &[
        Section::Personal,
        Section::Position,
        Section::Manager,
        Section::Category,
        Section::AdditionalRequirements,
        Section::Representative,
        Section::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Personal => "Personal Information",
            Section::Position => "Position Information",
            Section::Manager => "Manager Information",
            Section::Category => "Category (Select One)",
            Section::AdditionalRequirements => "Additional Requirements",
            Section::Representative => "Representative/Timekeeper Information",
            Section::Other => "Other Information",
        }
    }

    /// Helper text shown under the section title, if the section has any. Both
    /// hints describe an auto-fill rule.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Section::Category => Some("Selecting \"Yes\" for one will automatically set others to \"No\""),
            Section::Representative => Some("Enter \"N/A\" or \"NA\" to auto-fill phone and email"),
            _ => None,
        }
    }

    /// The category section as a whole is required (at least one "Yes") even
    /// though none of its fields are individually.
    pub fn is_required(&self) -> bool {
        match self {
            Section::Category => true,
            _ => false,
        }
    }

    /// The fields in this section, in layout order.
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL.iter()
            .copied()
            .filter(|field| field.section() == *self)
            .collect()
    }
}

/// What kind of input control a field is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum InputKind {
    /// Free text
    Text,
    /// Free text, but the browser is told it's an address
    Email,
    /// A select with an empty "Select..." option plus Yes and No
    YesNo,
}

impl InputKind {
    /// The values a select-style input offers. Free-text inputs have none.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            InputKind::YesNo => &["", "Yes", "No"],
            _ => &[],
        }
    }
}
