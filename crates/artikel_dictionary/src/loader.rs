//! Dictionary loading.
//!
//! Reads a resource line by line, skips the header and blank lines, and keeps
//! every row that [`parse_row`] accepts. Rejected rows are logged at debug
//! level and otherwise ignored. Bytes that are not valid UTF-8 are replaced
//! with U+FFFD rather than failing the load. A load fails only when the
//! resource cannot be opened or read, or when no row survives.

use std::io::BufRead;

use artikel_foundation::{EntryList, Error, ErrorContext, Level, Result};
use tracing::{debug, info, warn};

use crate::row::parse_row;
use crate::source::DictionarySource;

/// Anything that can produce the word pool for a level.
///
/// A successful load is never empty.
pub trait Dictionary {
    /// Loads the entries for `level`.
    ///
    /// # Errors
    ///
    /// Returns a load error (see [`Error::is_load_error`]) if the resource is
    /// missing, unreadable, or yields no valid entries.
    fn load(&self, level: &Level) -> Result<EntryList>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn load(&self, level: &Level) -> Result<EntryList> {
        (**self).load(level)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn load(&self, level: &Level) -> Result<EntryList> {
        (**self).load(level)
    }
}

/// Outcome of reading one resource.
#[derive(Clone, Debug, Default)]
pub struct ReadReport {
    /// Entries that parsed.
    pub entries: EntryList,
    /// Number of non-blank data rows that were rejected.
    pub dropped: usize,
}

/// Loads dictionaries from a [`DictionarySource`].
#[derive(Clone, Debug)]
pub struct DictionaryLoader<S> {
    source: S,
}

impl<S: DictionarySource> DictionaryLoader<S> {
    /// Creates a loader reading from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: DictionarySource> Dictionary for DictionaryLoader<S> {
    fn load(&self, level: &Level) -> Result<EntryList> {
        let resource = level.resource_name();
        let outcome = self
            .source
            .open(&resource)
            .and_then(|reader| read_entries(reader, &resource))
            .and_then(|report| {
                if report.entries.is_empty() {
                    Err(Error::empty_dictionary(&resource))
                } else {
                    Ok(report)
                }
            });

        match outcome {
            Ok(report) => {
                info!(
                    level = %level,
                    resource = %resource,
                    entries = report.entries.len(),
                    dropped = report.dropped,
                    "dictionary loaded"
                );
                Ok(report.entries)
            }
            Err(err) => {
                warn!(level = %level, resource = %resource, error = %err, "dictionary load failed");
                let context = err
                    .context
                    .clone()
                    .unwrap_or_default()
                    .with_level(level.as_str());
                Err(err.with_context(context))
            }
        }
    }
}

/// Reads every row of a dictionary resource.
///
/// The first line is a header and is skipped, as are blank lines. An empty
/// result is not an error here; [`DictionaryLoader`] decides that.
///
/// # Errors
///
/// Returns [`ErrorKind::Unreadable`](artikel_foundation::ErrorKind::Unreadable)
/// if the underlying reader fails.
pub fn read_entries(reader: impl BufRead, resource: &str) -> Result<ReadReport> {
    let mut report = ReadReport::default();
    let mut entries = Vec::new();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let number = index + 1;
        let bytes = bytes.map_err(|err| {
            Error::unreadable(resource, err.to_string())
                .with_context(ErrorContext::new().with_line(number))
        })?;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
        let line = String::from_utf8_lossy(bytes);

        if number == 1 || line.trim().is_empty() {
            continue;
        }

        match parse_row(&line) {
            Ok(entry) => entries.push(entry),
            Err(rejection) => {
                debug!(resource, line = number, %rejection, "skipping row");
                report.dropped += 1;
            }
        }
    }

    report.entries = entries.into();
    Ok(report)
}
