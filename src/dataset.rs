//! Dataset utilities: extrema, comparator search, and stable sorting.
//!
//! All functions take the sequence and the projection or comparator as
//! arguments, never mutate their input, and return `None` on empty input
//! where an extremum is requested.

use std::cmp::Ordering;

/// Ascending comparator over partially ordered values.
///
/// Incomparable pairs (e.g. NaN) compare equal; callers are expected to
/// apply comparators only on domains where they form a total order.
pub fn ascending<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Descending comparator over partially ordered values.
pub fn descending<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    ascending(a, b).reverse()
}

/// Minimum projected value, or `None` for an empty sequence.
pub fn min_of<T, K, F>(items: &[T], accessor: F) -> Option<K>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items.iter().map(&accessor).fold(None, |best, v| match best {
        Some(b) if b <= v => Some(b),
        _ => Some(v),
    })
}

/// Maximum projected value, or `None` for an empty sequence.
pub fn max_of<T, K, F>(items: &[T], accessor: F) -> Option<K>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    items.iter().map(&accessor).fold(None, |best, v| match best {
        Some(b) if b >= v => Some(b),
        _ => Some(v),
    })
}

/// Both extremes of the projected values in one pass, or `None` for an
/// empty sequence.
pub fn extent<T, K, F>(items: &[T], accessor: F) -> Option<(K, K)>
where
    K: PartialOrd + Clone,
    F: Fn(&T) -> K,
{
    let mut values = items.iter().map(&accessor);
    let first = values.next()?;
    let (mut min, mut max) = (first.clone(), first);
    for v in values {
        if v < min {
            min = v.clone();
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}

/// The item ordered lowest by `cmp`, or `None` for an empty sequence.
///
/// Single linear scan; the current best is replaced only on strict
/// improvement, so the first of equal items wins.
pub fn least<'a, T, C>(items: &'a [T], cmp: C) -> Option<&'a T>
where
    C: Fn(&T, &T) -> Ordering,
{
    items
        .iter()
        .fold(None, |best: Option<&'a T>, item| match best {
            Some(b) if cmp(item, b) == Ordering::Less => Some(item),
            None => Some(item),
            _ => best,
        })
}

/// The item ordered highest by `cmp`, or `None` for an empty sequence.
///
/// Same tie-break as [`least`]: the first of equal items wins.
pub fn greatest<'a, T, C>(items: &'a [T], cmp: C) -> Option<&'a T>
where
    C: Fn(&T, &T) -> Ordering,
{
    least(items, |a, b| cmp(a, b).reverse())
}

/// A new sequence sorted by `cmp`. The input is never mutated and the sort
/// is stable for equal keys.
pub fn sorted<T, C>(items: &[T], cmp: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let mut out = items.to_vec();
    out.sort_by(cmp);
    out
}

/// A new sequence sorted ascending by a projected key. Shortcut for
/// [`sorted`] with [`ascending`] applied to the accessor's output.
pub fn sorted_by_key<T, K, F>(items: &[T], accessor: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    sorted(items, |a, b| ascending(&accessor(a), &accessor(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;
    use crate::fixture::demo_dataset;
    use crate::record::Month;

    #[test]
    fn test_min_max_income() {
        let data = demo_dataset();
        assert_eq!(min_of(&data, accessor::value), Some(34000.0));
        assert_eq!(max_of(&data, accessor::value), Some(76000.0));
    }

    #[test]
    fn test_extent_matches_min_max() {
        let data = demo_dataset();
        assert_eq!(extent(&data, accessor::value), Some((34000.0, 76000.0)));
    }

    #[test]
    fn test_extent_over_months() {
        // Months order by their enum (chronological) ordering.
        let data = demo_dataset();
        assert_eq!(
            extent(&data, accessor::serie),
            Some((Month::Sep16, Month::Jun17))
        );
    }

    #[test]
    fn test_empty_sequence_yields_none() {
        let empty: Vec<crate::record::Record> = Vec::new();
        assert_eq!(min_of(&empty, accessor::value), None);
        assert_eq!(max_of(&empty, accessor::value), None);
        assert_eq!(extent(&empty, accessor::value), None);
        assert!(least(&empty, |a, b| ascending(&a.income, &b.income)).is_none());
        assert!(greatest(&empty, |a, b| ascending(&a.income, &b.income)).is_none());
    }

    #[test]
    fn test_least_and_greatest_records() {
        let data = demo_dataset();
        let by_income =
            |a: &crate::record::Record, b: &crate::record::Record| ascending(&a.income, &b.income);

        let least_record = least(&data, by_income).unwrap();
        assert_eq!(least_record.customer, "Other");
        assert!((least_record.income - 34000.0).abs() < f64::EPSILON);

        let greatest_record = greatest(&data, by_income).unwrap();
        // Two records share the 76000 maximum; the first in input order wins.
        assert_eq!(greatest_record.id, 16);
        assert_eq!(greatest_record.customer, "BizSupplies");
    }

    #[test]
    fn test_least_tie_break_first_wins() {
        let items = [(0, 5), (1, 1), (2, 1), (3, 9)];
        let found = least(&items, |a, b| ascending(&a.1, &b.1)).unwrap();
        assert_eq!(found.0, 1);
    }

    #[test]
    fn test_sorted_does_not_mutate_and_is_new() {
        let data = demo_dataset();
        let before = data.clone();
        let asc = sorted(&data, |a, b| ascending(&a.income, &b.income));
        assert_eq!(data, before);
        assert!(asc.windows(2).all(|w| w[0].income <= w[1].income));
    }

    #[test]
    fn test_sorted_descending_incomes() {
        let data = demo_dataset();
        let incomes: Vec<f64> = data.iter().map(accessor::value).collect();
        let desc = sorted(&incomes, descending);
        assert!(desc.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(desc[0], 76000.0);
        assert_eq!(desc[desc.len() - 1], 34000.0);
    }

    #[test]
    fn test_sorted_by_key_stability() {
        // Equal keys keep their input order.
        let items = [("a", 1), ("b", 0), ("c", 1), ("d", 0)];
        let out = sorted_by_key(&items, |t| t.1);
        let names: Vec<&str> = out.iter().map(|t| t.0).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let data = demo_dataset();
        let once = sorted_by_key(&data, accessor::value);
        let twice = sorted_by_key(&once, accessor::value);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_comparators() {
        assert_eq!(ascending(&1, &2), Ordering::Less);
        assert_eq!(ascending(&2.0, &2.0), Ordering::Equal);
        assert_eq!(descending(&1, &2), Ordering::Greater);
    }
}
