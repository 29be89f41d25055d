//! Revlex decoding: from indicator strings to explicit basis lists.
//!
//! The dataset encodes each matroid as one line over the alphabet `{'*', '0'}`,
//! one character per `r`-subset of the ground set `{0, ..., n-1}`. The
//! characters are aligned with the subsets enumerated in reverse-lexicographic
//! order; a `'*'` marks the subset as a basis. That ordering is the decoding
//! contract with the dataset and must not change.

use super::error::{DatabaseError, Result};

/// A single basis: a strictly increasing sequence of `r` ground-set elements.
pub type Basis = Vec<usize>;

/// The character marking a subset as a basis in a revlex string.
const BASIS_MARKER: u8 = b'*';

/// The binomial coefficient C(n, r), the length of every revlex string for
/// a given `(n, r)`.
pub fn binomial(n: usize, r: usize) -> usize {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut acc: usize = 1;
    for i in 0..r {
        // Exact at every step: the running product of i+1 consecutive
        // integers is divisible by (i+1)!.
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// All `r`-subsets of `{0, ..., n-1}` in lexicographic order.
fn combinations(n: usize, r: usize) -> Vec<Basis> {
    if r > n {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(binomial(n, r));
    let mut current: Basis = (0..r).collect();
    loop {
        out.push(current.clone());
        // Rightmost position that can still advance.
        let mut i = r;
        while i > 0 && current[i - 1] == n - r + i - 1 {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        current[i - 1] += 1;
        for j in i..r {
            current[j] = current[j - 1] + 1;
        }
    }
    out
}

/// The subset index for `(n, r)`: every `r`-subset of the ground set, ordered
/// by the reverse-lexicographic key (compare last elements first).
///
/// This is the positional frame a revlex string is decoded against. For `r = 0`
/// (and for `n = r`) the index holds exactly one subset.
pub fn subset_index(n: usize, r: usize) -> Vec<Basis> {
    let mut subsets = combinations(n, r);
    subsets.sort_by(|a, b| a.iter().rev().cmp(b.iter().rev()));
    subsets
}

/// Select the subsets a revlex string marks as bases.
///
/// `subsets` is the subset index for the `(n, r)` the string was read under;
/// positions holding the `'*'` marker are kept, in subset-index order.
///
/// # Errors
/// Returns [`DatabaseError::MalformedRecord`] when the string's length does
/// not match the subset index, rather than silently truncating to the shorter
/// of the two.
pub fn decode_bases(subsets: &[Basis], revlex: &str) -> Result<Vec<Basis>> {
    let marks = revlex.as_bytes();
    if marks.len() != subsets.len() {
        return Err(DatabaseError::MalformedRecord {
            expected: subsets.len(),
            found: marks.len(),
        });
    }
    Ok(subsets
        .iter()
        .zip(marks)
        .filter(|(_, &mark)| mark == BASIS_MARKER)
        .map(|(subset, _)| subset.clone())
        .collect())
}
