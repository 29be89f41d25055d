//! Core matroid database module

pub mod decoder;
pub mod error;
mod iter;
mod locate;

use std::path::{Path, PathBuf};

pub use error::{DatabaseError, Result};
pub use iter::{BasesIter, RevlexIter};
pub use locate::Category;

/// A handle to an on-disk matroid catalogue.
///
/// The catalogue is a read-only directory tree of line-delimited text
/// resources, one per `(category, n, r)`, plain or xz-compressed. The handle
/// holds only the root path; every query opens its own resource, so concurrent
/// callers never share state.
#[derive(Debug, Clone)]
pub struct MatroidDatabase {
    root: PathBuf,
}

impl MatroidDatabase {
    /// The catalogue bundled with this crate under `data/`.
    pub fn bundled() -> Self {
        Self {
            root: Path::new(env!("CARGO_MANIFEST_DIR")).join("data"),
        }
    }

    /// A catalogue rooted at an arbitrary directory.
    ///
    /// The directory is expected to hold `all/` and `unorientable/`
    /// subdirectories with `n<NN>r<NN>.txt` or `.txt.xz` resources; nothing is
    /// checked until a query opens a resource.
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns an iterator over the revlex encodings of the matroids with
    /// `n` elements and rank `r` in the given category.
    ///
    /// # Errors
    /// Returns [`DatabaseError::ResourceUnavailable`] if the catalogue has no
    /// resource for `(category, n, r)`, before any record is yielded.
    pub fn revlex(&self, category: Category, n: usize, r: usize) -> Result<RevlexIter> {
        let resource = locate::open_resource(&self.root, category, n, r)?;
        Ok(RevlexIter::new(resource))
    }

    /// Returns an iterator over the basis lists of the matroids with `n`
    /// elements and rank `r` in the given category.
    ///
    /// Each record is the revlex string decoded against the subset index for
    /// `(n, r)`: the `r`-subsets of `{0, ..., n-1}` it marks as bases, as
    /// strictly increasing sequences, in subset-index order.
    ///
    /// # Errors
    /// Returns [`DatabaseError::ResourceUnavailable`] if the catalogue has no
    /// resource for `(category, n, r)`. A record whose length disagrees with
    /// the subset index yields [`DatabaseError::MalformedRecord`].
    pub fn bases(&self, category: Category, n: usize, r: usize) -> Result<BasesIter> {
        let revlex_iter = self.revlex(category, n, r)?;
        Ok(revlex_iter.with_bases(decoder::subset_index(n, r)))
    }
}

/// Revlex encodings of all matroids with `n` elements and rank `r`, from the
/// bundled catalogue.
pub fn all_matroids_revlex(n: usize, r: usize) -> Result<RevlexIter> {
    MatroidDatabase::bundled().revlex(Category::All, n, r)
}

/// Revlex encodings of the unorientable matroids with `n` elements and rank
/// `r`, from the bundled catalogue.
pub fn unorientable_matroids_revlex(n: usize, r: usize) -> Result<RevlexIter> {
    MatroidDatabase::bundled().revlex(Category::Unorientable, n, r)
}

/// Basis lists of all matroids with `n` elements and rank `r`, from the
/// bundled catalogue.
pub fn all_matroids_bases(n: usize, r: usize) -> Result<BasesIter> {
    MatroidDatabase::bundled().bases(Category::All, n, r)
}

/// Basis lists of the unorientable matroids with `n` elements and rank `r`,
/// from the bundled catalogue.
pub fn unorientable_matroids_bases(n: usize, r: usize) -> Result<BasesIter> {
    MatroidDatabase::bundled().bases(Category::Unorientable, n, r)
}
