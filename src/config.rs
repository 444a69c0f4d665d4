//! Knobs for the form. The defaults reproduce what the hiring unit office
//! expects, so most callers never need anything but `FormConfig::default()`.
//!
//! ```rust
//! use lssr_form::{config::FormConfig, export::QuoteStyle};
//!
//! let config = FormConfig::builder()
//!     .export_filename("hiring_unit_2026.csv")
//!     .quote_style(QuoteStyle::Verbatim)
//!     .finish()
//!     .unwrap();
//! assert_eq!(config.export_filename(), "hiring_unit_2026.csv");
//! assert_eq!(config.media_type(), "text/csv");
//! ```

use crate::{
    error::{Error, Result},
    export::QuoteStyle,
};
use getset::{CopyGetters, Getters};

/// The file name the export is offered under.
pub const EXPORT_FILENAME: &str = "LSSR_Hiring_Unit_Form.csv";
/// The media type the export is labeled with.
pub const MEDIA_TYPE: &str = "text/csv";
/// What the representative's phone becomes when there is no representative.
pub const REP_PLACEHOLDER_PHONE: &str = "NA";
/// What the representative's email becomes when there is no representative.
pub const REP_PLACEHOLDER_EMAIL: &str = "no_email_given@ucsc.edu";

#[derive(Clone, Debug, PartialEq, Getters, CopyGetters, derive_builder::Builder)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
#[cfg_attr(feature = "with_serde", serde(default))]
#[builder(pattern = "owned", setter(into), default)]
pub struct FormConfig {
    /// Suggested file name handed to the export sink
    #[getset(get = "pub")]
    export_filename: String,
    /// Media type handed to the export sink
    #[getset(get = "pub")]
    media_type: String,
    /// Value the representative shorthand rule writes to `repPhone`
    #[getset(get = "pub")]
    rep_placeholder_phone: String,
    /// Value the representative shorthand rule writes to `repEmail`
    #[getset(get = "pub")]
    rep_placeholder_email: String,
    /// How values are quoted in the exported file
    #[getset(get_copy = "pub")]
    quote_style: QuoteStyle,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            export_filename: EXPORT_FILENAME.into(),
            media_type: MEDIA_TYPE.into(),
            rep_placeholder_phone: REP_PLACEHOLDER_PHONE.into(),
            rep_placeholder_email: REP_PLACEHOLDER_EMAIL.into(),
            quote_style: QuoteStyle::default(),
        }
    }
}

impl FormConfig {
    pub fn builder() -> FormConfigBuilder {
        FormConfigBuilder::default()
    }
}

impl FormConfigBuilder {
    pub fn finish(self) -> Result<FormConfig> {
        self.build().map_err(|e| Error::BuilderFailed(e.to_string()))
    }
}
