//! Serialization of a record into the two-line comma-separated file the hiring
//! unit office takes in, and the handoff of that file to whatever is hosting
//! the form.
//!
//! The file is a header row of column titles followed by one data row with
//! every value wrapped in double quotes:
//!
//! ```rust
//! use lssr_form::{
//!     export::{self, QuoteStyle},
//!     models::{field::Field, record::Record},
//! };
//!
//! let mut record = Record::new();
//! record.set(Field::First, "Ana");
//! let body = String::from_utf8(export::serialize(&record, QuoteStyle::Escaped)).unwrap();
//! let mut lines = body.lines();
//! assert!(lines.next().unwrap().starts_with("First,Last,Middle,Email,Hiring Unit,"));
//! assert!(lines.next().unwrap().starts_with("\"Ana\",\"\",\"\","));
//! ```

use crate::{
    config::FormConfig,
    error::{Error, Result},
    models::{
        field::Field,
        record::Record,
    },
};
use getset::Getters;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// How values are wrapped in the data row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub enum QuoteStyle {
    /// Wrap each value in quotes and double any quotes inside it, so values
    /// with `"` in them still read back correctly.
    Escaped,
    /// Wrap each value in quotes and nothing else. This matches the file the
    /// form has always produced, byte for byte, but a value containing `"`
    /// corrupts the row.
    Verbatim,
}

impl Default for QuoteStyle {
    fn default() -> Self {
        QuoteStyle::Escaped
    }
}

impl QuoteStyle {
    fn quote(&self, val: &str) -> String {
        match self {
            QuoteStyle::Escaped => format!("\"{}\"", val.replace('"', "\"\"")),
            QuoteStyle::Verbatim => format!("\"{}\"", val),
        }
    }
}

/// The header row: every field's column title, in export order, joined by
/// commas. Titles are not quoted.
pub fn header() -> String {
    Field::ALL.iter()
        .map(|field| field.header())
        .collect::<Vec<_>>()
        .join(",")
}

/// The data row: every field's value, quoted, in export order.
pub fn row(record: &Record, style: QuoteStyle) -> String {
    record.iter()
        .map(|(_, val)| style.quote(val))
        .collect::<Vec<_>>()
        .join(",")
}

/// Turn a record into the exported document: header, a newline, and the data
/// row. There's no trailing newline.
pub fn serialize(record: &Record, style: QuoteStyle) -> Vec<u8> {
    let mut body = header();
    body.push('\n');
    body.push_str(&row(record, style));
    body.into_bytes()
}

/// A file ready to hand off: its suggested name, its media type, and its bytes.
#[derive(Clone, Debug, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Export {
    filename: String,
    media_type: String,
    body: Vec<u8>,
}

impl Export {
    pub fn new<T: Into<String>>(filename: T, media_type: T, body: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            media_type: media_type.into(),
            body,
        }
    }

    /// Serialize a record using the file name, media type, and quoting from
    /// the given config. This does *not* validate the record.
    pub fn from_record(record: &Record, config: &FormConfig) -> Self {
        Self::new(
            config.export_filename().as_str(),
            config.media_type().as_str(),
            serialize(record, config.quote_style()),
        )
    }
}

/// Whatever is hosting the form and can take a file off our hands (a browser
/// download, a directory, an upload queue...). The form hands the export over
/// and moves on.
pub trait ExportSink {
    fn emit(&mut self, export: &Export) -> Result<()>;
}

/// Keeps every export in memory. Handy for tests and for hosts that want to
/// pick the bytes up themselves.
#[derive(Clone, Debug, Default, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct MemorySink {
    exports: Vec<Export>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent export, if there's been one.
    pub fn last(&self) -> Option<&Export> {
        self.exports.last()
    }
}

impl ExportSink for MemorySink {
    fn emit(&mut self, export: &Export) -> Result<()> {
        self.exports.push(export.clone());
        Ok(())
    }
}

/// Writes each export into a directory under its suggested file name,
/// replacing any file already there.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    /// Where a given export ends up.
    pub fn path_for(&self, export: &Export) -> PathBuf {
        // only the final component of the suggested name is used
        let name = Path::new(export.filename())
            .file_name()
            .map(|x| x.to_os_string())
            .unwrap_or_else(|| crate::config::EXPORT_FILENAME.into());
        self.dir.join(name)
    }
}

impl ExportSink for DirectorySink {
    fn emit(&mut self, export: &Export) -> Result<()> {
        let path = self.path_for(export);
        match std::fs::write(&path, export.body()) {
            Ok(()) => {
                info!("exported {} ({} bytes)", path.display(), export.body().len());
                Ok(())
            }
            Err(e) => {
                warn!("export to {} failed: {}", path.display(), e);
                Err(Error::ExportFailed(format!("{}: {}", path.display(), e)))
            }
        }
    }
}
