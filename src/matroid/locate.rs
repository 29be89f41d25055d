//! Resource resolution for the on-disk dataset.
//!
//! Each `(category, n, r)` maps to a logical identifier
//! `<category>/n<NN>r<NN>` under the database root. Resolution is an ordered
//! fallback: try the plain `.txt` resource first, then the `.txt.xz` resource
//! behind a streaming decoder, then fail with the coverage catalogue.

use std::fmt;
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use log::{debug, info};
use xz2::read::XzDecoder;

use super::error::{DatabaseError, Result};

/// Which section of the catalogue to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// All matroids of the given size and rank, up to isomorphism.
    All,
    /// The unorientable matroids only.
    Unorientable,
}

impl Category {
    fn dir_name(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Unorientable => "unorientable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// The logical resource identifier, without extension.
fn identifier(category: Category, n: usize, r: usize) -> String {
    format!("{}/n{:02}r{:02}", category, n, r)
}

/// An open resource, plain or transparently decompressed.
///
/// The underlying file handle is owned here and closed on drop.
pub(crate) enum ResourceReader {
    Plain(File),
    Xz(XzDecoder<File>),
}

impl Read for ResourceReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ResourceReader::Plain(file) => file.read(buf),
            ResourceReader::Xz(decoder) => decoder.read(buf),
        }
    }
}

/// Resolve and open the resource backing `(category, n, r)`.
///
/// Tries `<root>/<identifier>.txt`, then `<root>/<identifier>.txt.xz`.
///
/// # Errors
/// Returns [`DatabaseError::ResourceUnavailable`] when neither form exists;
/// any other I/O failure propagates as [`DatabaseError::Io`]. Absence is
/// permanent for a given call, there are no retries.
pub(crate) fn open_resource(
    root: &Path,
    category: Category,
    n: usize,
    r: usize,
) -> Result<ResourceReader> {
    let identifier = identifier(category, n, r);
    let dir = root.join(category.dir_name());
    let file_name = format!("n{:02}r{:02}", n, r);

    let plain = dir.join(format!("{}.txt", file_name));
    match File::open(&plain) {
        Ok(file) => {
            info!("Opened matroid resource: {}", plain.display());
            return Ok(ResourceReader::Plain(file));
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No plain resource at {}, trying xz", plain.display());
        }
        Err(e) => return Err(e.into()),
    }

    let compressed = dir.join(format!("{}.txt.xz", file_name));
    match File::open(&compressed) {
        Ok(file) => {
            info!("Opened compressed matroid resource: {}", compressed.display());
            Ok(ResourceReader::Xz(XzDecoder::new(file)))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No compressed resource at {}", compressed.display());
            Err(DatabaseError::unavailable(identifier))
        }
        Err(e) => Err(e.into()),
    }
}
