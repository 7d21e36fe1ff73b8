//! Multi-level grouping of record sequences.
//!
//! Partitions a sequence by the output of one or more key accessors into
//! explicit named pairs ([`Group`]), never positional tuples. Group order is
//! the first-occurrence order of each key in the input; member order inside
//! a group is input order. Grouping neither drops nor duplicates records:
//! concatenating all members in group order is a keyed permutation of the
//! input.

use std::hash::Hash;

use indexmap::IndexMap;

/// One partition: the key shared by all members, and the members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, M> {
    /// The value the key accessor returned for every member.
    pub key: K,
    /// The matching records (or a nested grouping).
    pub members: M,
}

/// A nested grouping over a uniform key type, one level per key accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grouping<K, T> {
    /// No more key accessors: the records themselves, in input order.
    Leaf(Vec<T>),
    /// Partitions at this level, each holding the next level down.
    Nested(Vec<Group<K, Grouping<K, T>>>),
}

impl<K, T: Clone> Grouping<K, T> {
    /// Concatenate all members depth-first in group order.
    #[must_use]
    pub fn flatten(&self) -> Vec<T> {
        match self {
            Grouping::Leaf(items) => items.clone(),
            Grouping::Nested(groups) => groups
                .iter()
                .flat_map(|g| g.members.flatten())
                .collect(),
        }
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Grouping::Leaf(items) => items.len(),
            Grouping::Nested(groups) => groups.iter().map(|g| g.members.len()).sum(),
        }
    }

    /// Whether the grouping holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition a sequence by one key accessor.
pub fn groups<T, K, F>(items: &[T], key: F) -> Vec<Group<K, Vec<T>>>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut map: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        map.entry(key(item)).or_default().push(item.clone());
    }
    map.into_iter()
        .map(|(key, members)| Group { key, members })
        .collect()
}

/// Partition by a first key, then partition each group by a second key.
pub fn groups2<T, K1, K2, F1, F2>(
    items: &[T],
    key1: F1,
    key2: F2,
) -> Vec<Group<K1, Vec<Group<K2, Vec<T>>>>>
where
    T: Clone,
    K1: Hash + Eq,
    K2: Hash + Eq,
    F1: Fn(&T) -> K1,
    F2: Fn(&T) -> K2,
{
    groups(items, key1)
        .into_iter()
        .map(|g| Group {
            key: g.key,
            members: groups(&g.members, &key2),
        })
        .collect()
}

/// Partition recursively by an ordered list of key accessors sharing one
/// key type. With one accessor the result is a single nested level; with
/// none, a [`Grouping::Leaf`] of the input.
pub fn grouping<T, K>(items: &[T], keys: &[&dyn Fn(&T) -> K]) -> Grouping<K, T>
where
    T: Clone,
    K: Hash + Eq,
{
    match keys.split_first() {
        None => Grouping::Leaf(items.to_vec()),
        Some((first, rest)) => {
            let nested = groups(items, first)
                .into_iter()
                .map(|g| Group {
                    key: g.key,
                    members: grouping(&g.members, rest),
                })
                .collect();
            Grouping::Nested(nested)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor;
    use crate::fixture::demo_dataset;
    use crate::record::{Month, Record};

    fn customer(r: &Record) -> String {
        r.customer.clone()
    }

    #[test]
    fn test_groups_by_customer() {
        let data = demo_dataset();
        let grouped = groups(&data, customer);

        // First-occurrence order of the five customers.
        let keys: Vec<&str> = grouped.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "BizSupplies",
                "Dynamic Attire",
                "Harmonic Sonics",
                "Plumb'n'Stuff",
                "Other"
            ]
        );
        // One record per month for each customer, in input order.
        for group in &grouped {
            assert_eq!(group.members.len(), 4);
            let months: Vec<Month> = group.members.iter().map(accessor::serie).collect();
            assert_eq!(
                months,
                vec![Month::Sep16, Month::Dec16, Month::Mar17, Month::Jun17]
            );
        }
    }

    #[test]
    fn test_groups_round_trip_partition() {
        let data = demo_dataset();
        let grouped = groups(&data, customer);

        let flattened: Vec<Record> = grouped
            .iter()
            .flat_map(|g| g.members.iter().cloned())
            .collect();
        assert_eq!(flattened.len(), data.len());
        // Every member carries its group's key, and every input record is
        // present exactly once (ids act as a multiset witness).
        for group in &grouped {
            assert!(group.members.iter().all(|r| r.customer == group.key));
        }
        let mut ids: Vec<u32> = flattened.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        let mut expected: Vec<u32> = data.iter().map(|r| r.id).collect();
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_groups2_customer_then_month() {
        let data = demo_dataset();
        let nested = groups2(&data, customer, accessor::serie);

        assert_eq!(nested.len(), 5);
        for outer in &nested {
            assert_eq!(outer.members.len(), 4);
            for inner in &outer.members {
                assert_eq!(inner.members.len(), 1);
                assert_eq!(inner.members[0].month, inner.key);
                assert_eq!(inner.members[0].customer, outer.key);
            }
        }
    }

    #[test]
    fn test_groups2_order_swap() {
        let data = demo_dataset();
        let by_month_then_customer = groups2(&data, |r| r.month, customer);
        assert_eq!(by_month_then_customer.len(), 4);
        assert_eq!(by_month_then_customer[0].key, Month::Sep16);
        assert_eq!(by_month_then_customer[0].members.len(), 5);
    }

    #[test]
    fn test_groups_duplicate_key_members_merge() {
        // A second record for an existing (month, customer) pair lands in
        // the same group, in input order.
        let mut data = demo_dataset();
        data.push(Record::new(21, Month::Jun17, "Other", 20000.0));

        let nested = groups2(&data, customer, accessor::serie);
        let other = nested.iter().find(|g| g.key == "Other").unwrap();
        let jun = other
            .members
            .iter()
            .find(|g| g.key == Month::Jun17)
            .unwrap();
        assert_eq!(jun.members.len(), 2);
        assert_eq!(jun.members[0].id, 20);
        assert_eq!(jun.members[1].id, 21);
    }

    #[test]
    fn test_grouping_multi_level_flatten() {
        let data = demo_dataset();
        let month_key = |r: &Record| r.month.label().to_string();
        let customer_key = |r: &Record| r.customer.clone();
        let tree = grouping(&data, &[&month_key, &customer_key]);

        assert_eq!(tree.len(), data.len());
        let flat = tree.flatten();
        let mut ids: Vec<u32> = flat.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_grouping_no_keys_is_leaf() {
        let data = demo_dataset();
        let tree: Grouping<String, Record> = grouping(&data, &[]);
        assert_eq!(tree, Grouping::Leaf(data));
    }

    #[test]
    fn test_grouping_empty_input() {
        let data: Vec<Record> = Vec::new();
        let key = |r: &Record| r.customer.clone();
        let tree = grouping(&data, &[&key]);
        assert!(tree.is_empty());
        assert!(tree.flatten().is_empty());
    }
}
