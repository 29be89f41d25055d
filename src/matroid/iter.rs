//! Lazy iterators over catalogue records.
//!
//! Two layers, mirroring the two views of a record:
//!
//! 1. [`RevlexIter`] - raw revlex strings, one per matroid
//! 2. [`BasesIter`] - each string decoded into its explicit basis list
//!
//! Both own the underlying resource handle and read on demand, so arbitrarily
//! large catalogue files are never loaded whole. Dropping an iterator, even
//! mid-stream, closes the handle.

use std::io::{BufRead, BufReader, Lines};

use super::decoder::{self, Basis};
use super::error::Result;
use super::locate::ResourceReader;

/// Iterator over the revlex encodings stored in one resource.
///
/// Yields one trimmed line per matroid, in exactly the order stored in the
/// resource. That order is the canonical enumeration of matroids for the
/// `(n, r)` and is preserved bit-for-bit.
///
/// Created by [`MatroidDatabase::revlex()`](crate::MatroidDatabase::revlex).
pub struct RevlexIter {
    lines: Lines<BufReader<ResourceReader>>,
}

impl RevlexIter {
    pub(crate) fn new(resource: ResourceReader) -> Self {
        Self {
            lines: BufReader::new(resource).lines(),
        }
    }

    /// Transforms this iterator to decode each record into its basis list.
    ///
    /// `subsets` must be the subset index for the `(n, r)` this resource was
    /// opened under.
    pub(crate) fn with_bases(self, subsets: Vec<Basis>) -> BasesIter {
        BasesIter {
            revlex_iter: self,
            subsets,
        }
    }
}

impl Iterator for RevlexIter {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(Ok(line.trim_end().to_string())),
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Iterator over decoded basis lists, one per matroid.
///
/// Each record is the ordered list of bases the revlex string marks, in
/// subset-index order. Decoding is pure; the only state is the position in
/// the underlying resource.
///
/// Created by [`MatroidDatabase::bases()`](crate::MatroidDatabase::bases).
pub struct BasesIter {
    revlex_iter: RevlexIter,
    subsets: Vec<Basis>,
}

impl Iterator for BasesIter {
    type Item = Result<Vec<Basis>>;

    fn next(&mut self) -> Option<Self::Item> {
        let revlex = match self.revlex_iter.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        Some(decoder::decode_bases(&self.subsets, &revlex))
    }
}
