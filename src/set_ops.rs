//! Set algebra over plain value sequences.
//!
//! Equality is structural (`Eq`), duplicates are collapsed, and every result
//! is returned in first-occurrence insertion order so tests and callers can
//! assert on it directly. Backed by [`indexmap::IndexSet`] for that ordering
//! guarantee.

use std::hash::Hash;

use indexmap::IndexSet;

/// Distinct values of `first` that appear in none of `others`.
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let mut excluded: IndexSet<&T> = IndexSet::new();
    for other in others {
        excluded.extend(other.iter());
    }

    let mut out: IndexSet<T> = IndexSet::new();
    for item in first {
        if !excluded.contains(item) {
            out.insert(item.clone());
        }
    }
    out.into_iter().collect()
}

/// Distinct values that appear in any of the sequences, in first-occurrence
/// order across all of them.
pub fn union<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let mut out: IndexSet<T> = IndexSet::new();
    for sequence in sequences {
        for item in *sequence {
            out.insert(item.clone());
        }
    }
    out.into_iter().collect()
}

/// Distinct values that appear in every sequence, in first-occurrence order
/// of the first sequence. Empty input yields an empty result.
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let Some((first, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    let mut out: IndexSet<T> = IndexSet::new();
    for item in *first {
        if rest.iter().all(|seq| seq.contains(item)) {
            out.insert(item.clone());
        }
    }
    out.into_iter().collect()
}
