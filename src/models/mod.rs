//! Models hold the data the form operates on: the closed set of form fields
//! (along with how they're labeled, grouped, and exported), the record that
//! holds each field's value, and the change sets that describe writes to that
//! record.

/// A macro that standardizes creating the field enum and the record struct
/// from one table, so the two can never drift apart. The table is listed in
/// export order, which is also the order `Field::ALL` iterates in.
///
/// Columns: record member, enum variant, camelCase key, export header, UI
/// label, name used in validation messages, section, input kind, required.
macro_rules! hiring_fields {
    (
        @field
        $( ($ident:ident, $variant:ident, $key:literal, $header:literal, $label:literal, $noun:literal, $section:ident, $kind:ident, $required:literal), )*
    ) => {
        /// One of the fields on the hiring unit form.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[cfg_attr(feature = "with_serde", serde(rename_all = "camelCase"))]
        pub enum Field {
            $( $variant, )*
        }

        impl Field {
            /// Every field, in export order.
            pub const ALL: &'static [Field] = &[ $( Field::$variant, )* ];

            /// The camelCase key UI bindings use to refer to this field.
            pub fn key(&self) -> &'static str {
                match self {
                    $( Field::$variant => $key, )*
                }
            }

            /// The column title this field gets in the exported file.
            pub fn header(&self) -> &'static str {
                match self {
                    $( Field::$variant => $header, )*
                }
            }

            /// The label shown next to the input.
            pub fn label(&self) -> &'static str {
                match self {
                    $( Field::$variant => $label, )*
                }
            }

            /// How validation messages refer to this field.
            pub fn noun(&self) -> &'static str {
                match self {
                    $( Field::$variant => $noun, )*
                }
            }

            pub fn section(&self) -> Section {
                match self {
                    $( Field::$variant => Section::$section, )*
                }
            }

            pub fn kind(&self) -> InputKind {
                match self {
                    $( Field::$variant => InputKind::$kind, )*
                }
            }

            /// Whether the UI marks this field as required. The validation
            /// pass is what actually enforces it.
            pub fn is_required(&self) -> bool {
                match self {
                    $( Field::$variant => $required, )*
                }
            }
        }

        impl std::str::FromStr for Field {
            type Err = crate::error::Error;

            fn from_str(key: &str) -> crate::error::Result<Self> {
                match key {
                    $( $key => Ok(Field::$variant), )*
                    _ => Err(crate::error::Error::UnknownField(key.into())),
                }
            }
        }
    };

    (
        @record
        $( ($ident:ident, $variant:ident, $($_rest:tt)*), )*
    ) => {
        /// The record holds the current value of every field on the form.
        /// Values are plain text and are never absent: an untouched field is
        /// the empty string.
        #[derive(Clone, Debug, Default, PartialEq, Eq, getset::Getters, derive_builder::Builder)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[cfg_attr(feature = "with_serde", serde(rename_all = "camelCase", default))]
        #[builder(pattern = "owned", setter(into), default)]
        #[getset(get = "pub")]
        pub struct Record {
            $( $ident: String, )*
        }

        impl Record {
            /// Grab the current value of a field.
            pub fn get(&self, field: Field) -> &str {
                match field {
                    $( Field::$variant => self.$ident.as_str(), )*
                }
            }

            fn slot_mut(&mut self, field: Field) -> &mut String {
                match field {
                    $( Field::$variant => &mut self.$ident, )*
                }
            }
        }
    };

    // entry point
    ($($mode:tt)*) => {
        hiring_fields! {
            @$($mode)*
            (first, First, "first", "First", "First Name", "First name", Personal, Text, true),
            (last, Last, "last", "Last", "Last Name", "Last name", Personal, Text, true),
            (middle, Middle, "middle", "Middle", "Middle Name", "Middle name", Personal, Text, false),
            (email, Email, "email", "Email", "Email", "Email", Personal, Email, true),
            (hiring_unit, HiringUnit, "hiringUnit", "Hiring Unit", "Hiring Unit", "Hiring Unit", Position, Text, true),
            (mailcode, Mailcode, "mailcode", "Mailcode", "Mailcode", "Mailcode", Personal, Text, true),
            (manager_supervisor, ManagerSupervisor, "managerSupervisor", "Manager or Supervisor", "Manager or Supervisor", "Manager or Supervisor", Manager, Text, false),
            (manager_email, ManagerEmail, "managerEmail", "Manager or Supervisor Email", "Manager or Supervisor Email", "Manager or Supervisor Email", Manager, Email, true),
            (job_title, JobTitle, "jobTitle", "Job Title for Position", "Job Title for Position", "Job Title for Position", Position, Text, true),
            (fbi_background, FbiBackground, "fbiBackground", "FBI Background Check (Yes or No)", "FBI Background Check", "FBI Background Check", AdditionalRequirements, YesNo, true),
            (staff, Staff, "staff", "Staff (Yes or No)", "Staff", "Staff", Category, YesNo, false),
            (ucsc_student, UcscStudent, "ucscStudent", "UCSC Student (Yes or No)", "UCSC Student", "UCSC Student", Category, YesNo, false),
            (volunteer, Volunteer, "volunteer", "Volunteer (Yes or No)", "Volunteer", "Volunteer", Category, YesNo, false),
            (academic_faculty, AcademicFaculty, "academicFaculty", "Academic/Faculty (Yes or No)", "Academic/Faculty", "Academic/Faculty", Category, YesNo, false),
            (reclass_duties, ReclassDuties, "reclassDuties", "Reclass Duties Reassigned (Yes or No)", "Reclass Duties Reassigned", "Reclass Duties Reassigned", AdditionalRequirements, YesNo, true),
            (rep_timekeeper_name, RepTimekeeperName, "repTimekeeperName", "Rep/Student Timekeeper Name", "Rep/Student Timekeeper Name", "Rep/Student Timekeeper Name", Representative, Text, false),
            (rep_phone, RepPhone, "repPhone", "Rep Phone", "Rep Phone", "Rep Phone", Representative, Text, false),
            (rep_email, RepEmail, "repEmail", "Rep Email", "Rep Email", "Rep Email", Representative, Email, false),
            (job_number, JobNumber, "jobNumber", "Job Number", "Job Number", "Job Number", Position, Text, true),
            (non_ucsc_student, NonUcscStudent, "nonUcscStudent", "Non UCSC Student (Yes or No)", "Non UCSC Student", "Non UCSC Student", Category, YesNo, false),
            (current, Current, "current", "Current", "Current", "Current", Other, Text, false),
        }
    };
}

pub mod field;
pub mod record;
pub mod change;
