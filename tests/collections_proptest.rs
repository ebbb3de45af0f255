use std::collections::{BTreeSet, HashMap as StdHashMap};

use proptest::prelude::*;
use stepper_lib::collections::contiguous::ArrayList;
use stepper_lib::collections::hash::HashMap;
use stepper_lib::collections::linked::LinkedList;
use stepper_lib::collections::point_tree::{PointTree, Span};
use stepper_lib::collections::traits::List;
use stepper_lib::step::{Signal, Stepper, StepperMut};

#[derive(Debug, Clone)]
enum MapOperation {
    Insert(u8, u16),
    Remove(u8),
    Get(u8),
}

fn map_operation() -> impl Strategy<Value = MapOperation> {
    prop_oneof![
        (any::<u8>(), any::<u16>()).prop_map(|(k, v)| MapOperation::Insert(k, v)),
        any::<u8>().prop_map(MapOperation::Remove),
        any::<u8>().prop_map(MapOperation::Get),
    ]
}

#[derive(Debug, Clone)]
enum ListOperation {
    Add(i16),
    RemoveFirstBelow(i16),
    RemoveAllBelow(i16),
    Double,
}

fn list_operation() -> impl Strategy<Value = ListOperation> {
    prop_oneof![
        4 => any::<i16>().prop_map(ListOperation::Add),
        1 => any::<i16>().prop_map(ListOperation::RemoveFirstBelow),
        1 => any::<i16>().prop_map(ListOperation::RemoveAllBelow),
        1 => Just(ListOperation::Double),
    ]
}

/// Applies `op` to any [`List`], returning what a removal reported.
fn apply_list<L: List<i16>>(list: &mut L, op: &ListOperation) -> Option<usize> {
    match *op {
        ListOperation::Add(v) => {
            list.add(v);
            None
        },
        ListOperation::RemoveFirstBelow(v) => list.remove_first(|x: &i16| *x < v).map(|_| 1),
        ListOperation::RemoveAllBelow(v) => Some(list.remove_all(|x: &i16| *x < v)),
        ListOperation::Double => {
            list.step_mut(|x: &mut i16| *x = x.wrapping_mul(2));
            None
        },
    }
}

fn stepped<S: Stepper<i16>>(list: &S) -> Vec<i16> {
    let mut items = Vec::new();
    list.step(|x: &i16| items.push(*x));
    items
}

proptest! {
    #[test]
    fn test_hash_map_matches_std(ops in proptest::collection::vec(map_operation(), 1..300)) {
        let mut std_map = StdHashMap::new();
        let mut map: HashMap<u8, u16> = HashMap::new();

        for op in ops {
            match op {
                MapOperation::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), std_map.insert(k, v))
                },
                MapOperation::Remove(k) => prop_assert_eq!(map.remove(&k), std_map.remove(&k)),
                MapOperation::Get(k) => prop_assert_eq!(map.get(&k), std_map.get(&k)),
            }
        }

        prop_assert_eq!(map.len(), std_map.len());
        for (k, v) in &std_map {
            prop_assert_eq!(map.get(k), Some(v), "Final content mismatch for key {}", k);
        }
    }

    #[test]
    fn test_lists_match_vec(ops in proptest::collection::vec(list_operation(), 1..200)) {
        let mut model: Vec<i16> = Vec::new();
        let mut array = ArrayList::new();
        let mut linked = LinkedList::new();

        for op in &ops {
            let expected = match *op {
                ListOperation::Add(v) => {
                    model.push(v);
                    None
                },
                ListOperation::RemoveFirstBelow(v) => model.iter()
                    .position(|x| *x < v)
                    .map(|i| {
                        model.remove(i);
                        1
                    }),
                ListOperation::RemoveAllBelow(v) => {
                    let before = model.len();
                    model.retain(|x| *x >= v);
                    Some(before - model.len())
                },
                ListOperation::Double => {
                    model.iter_mut().for_each(|x| *x = x.wrapping_mul(2));
                    None
                },
            };

            prop_assert_eq!(apply_list(&mut array, op), expected);
            prop_assert_eq!(apply_list(&mut linked, op), expected);
            prop_assert!(array.cap() >= array.len());
        }

        prop_assert_eq!(stepped(&array), model.clone());
        prop_assert_eq!(stepped(&linked), model);
    }

    #[test]
    fn test_point_tree_queries(
        points in proptest::collection::vec((0_u8..16, 0_u8..16), 0..150),
        removed in proptest::collection::vec((0_u8..16, 0_u8..16), 0..50),
        (min, max) in (0_u8..16, 0_u8..16),
        fixed in 0_u8..16,
    ) {
        let mut tree: PointTree<u8> = PointTree::new();
        let mut model = BTreeSet::new();
        for &(s, e) in &points {
            prop_assert_eq!(tree.insert(s, e), model.insert((s, e)));
        }
        for (s, e) in &removed {
            prop_assert_eq!(tree.remove(s, e).is_some(), model.remove(&(*s, *e)));
        }
        prop_assert_eq!(tree.len(), model.len());

        let mut found = BTreeSet::new();
        tree.step_within(Span::Within(&min, &max), Span::exactly(&fixed), |s: &u8, e: &u8| {
            found.insert((*s, *e));
        });
        let expected: BTreeSet<_> = model.iter()
            .filter(|(s, e)| min <= *s && *s <= max && *e == fixed)
            .copied()
            .collect();
        prop_assert_eq!(found, expected);

        let removed = tree.remove_within(Span::exactly(&fixed), Span::Any);
        let before = model.len();
        model.retain(|(s, _)| *s != fixed);
        prop_assert_eq!(removed, before - model.len());
        prop_assert_eq!(tree.iter().map(|(s, e)| (*s, *e)).collect::<BTreeSet<_>>(), model);
    }

    #[test]
    fn test_step_break_without_break_matches_step(
        items in proptest::collection::vec(any::<i16>(), 0..100),
    ) {
        let array: ArrayList<i16> = items.iter().copied().collect();
        let linked: LinkedList<i16> = items.iter().copied().collect();

        let mut broken = Vec::new();
        let signal = array.step_break(|x: &i16| {
            broken.push(*x);
            Signal::Continue
        });
        prop_assert_eq!(signal, Signal::Continue);
        prop_assert_eq!(&broken, &stepped(&array));

        broken.clear();
        linked.step_break(|x: &i16| {
            broken.push(*x);
            Signal::Continue
        });
        prop_assert_eq!(&broken, &stepped(&linked));
        prop_assert_eq!(broken, items);
    }
}

#[test]
fn test_step_mut_reaches_every_element() {
    let mut list: LinkedList<i16> = (1..=4).collect();
    list.step_mut(|x: &mut i16| *x *= 10);
    assert_eq!(stepped(&list), vec![10, 20, 30, 40]);
}
