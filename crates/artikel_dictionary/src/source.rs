//! Where dictionary resources come from.
//!
//! A [`DictionarySource`] opens a named resource for line-by-line reading. The
//! loader only ever asks for names produced by
//! [`Level::resource_name`](artikel_foundation::Level::resource_name).

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use artikel_foundation::{Error, Result};

/// Opens dictionary resources by name.
pub trait DictionarySource {
    /// Opens the named resource.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ResourceNotFound`](artikel_foundation::ErrorKind::ResourceNotFound)
    /// if the resource does not exist, or
    /// [`ErrorKind::Unreadable`](artikel_foundation::ErrorKind::Unreadable) if
    /// it exists but cannot be opened.
    fn open(&self, resource: &str) -> Result<Box<dyn BufRead + '_>>;
}

impl<S: DictionarySource + ?Sized> DictionarySource for &S {
    fn open(&self, resource: &str) -> Result<Box<dyn BufRead + '_>> {
        (**self).open(resource)
    }
}

/// Resources stored as files in one directory.
#[derive(Clone, Debug)]
pub struct AssetDirectory {
    root: PathBuf,
}

impl AssetDirectory {
    /// Creates a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory resources are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DictionarySource for AssetDirectory {
    fn open(&self, resource: &str) -> Result<Box<dyn BufRead + '_>> {
        let path = self.root.join(resource);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(Error::resource_not_found(path.display().to_string()))
            }
            Err(err) => Err(Error::unreadable(path.display().to_string(), err.to_string())),
        }
    }
}

/// Resources held in memory, keyed by name. Used by tests.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    resources: HashMap<String, String>,
}

impl InMemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, replacing any previous one with the same name.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Adds a resource, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.resources.insert(name.into(), contents.into());
    }
}

impl DictionarySource for InMemorySource {
    fn open(&self, resource: &str) -> Result<Box<dyn BufRead + '_>> {
        self.resources
            .get(resource)
            .map(|contents| Box::new(Cursor::new(contents.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or_else(|| Error::resource_not_found(resource))
    }
}
