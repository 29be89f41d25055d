//! # matroid-database
//!
//! Read access to a precomputed catalogue of matroids, keyed by number of
//! elements `n` and rank `r`. Each matroid is stored as a compact "revlex"
//! string that this crate can decode into an explicit list of bases.
//!
//! The catalogue itself is an external, read-only dataset; this crate only
//! locates resources (falling back from plain text to xz-compressed files),
//! streams records lazily, and decodes them.
//!
//! ```no_run
//! # fn main() -> matroid_database::Result<()> {
//! for record in matroid_database::all_matroids_bases(5, 2)? {
//!     let bases = record?;
//!     println!("{} bases", bases.len());
//! }
//! # Ok(())
//! # }
//! ```
pub mod matroid;

// Re-export the main types for convenience
pub use matroid::{
    all_matroids_bases, all_matroids_revlex,
    decoder::{binomial, decode_bases, subset_index, Basis},
    unorientable_matroids_bases, unorientable_matroids_revlex, BasesIter, Category, DatabaseError,
    MatroidDatabase, Result, RevlexIter,
};
