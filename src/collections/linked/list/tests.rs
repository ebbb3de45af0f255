#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::traits::{Clear, Count, List};
use crate::step::{Signal, Stepper, StepperMut};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = LinkedList::new();
    assert_eq!(list.front(), None);
    assert_eq!(list.pop_front(), None);

    list.push_back(2);
    list.push_back(3);
    list.push_front(1);

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    *list.back_mut().unwrap() = 4;
    *list.front_mut().unwrap() = 0;
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2, 4]);

    assert_eq!(list.pop_front(), Some(0));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), Some(4));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());

    list.push_back(5);
    assert_eq!(list.front(), list.back(), "A single element should be both front and back.");
}

#[test]
fn test_append() {
    let mut a: LinkedList<_> = (0..3).collect();
    let mut b: LinkedList<_> = (3..6).collect();

    a.append(&mut b);
    assert!(b.is_empty());
    assert_eq!(a.len(), 6);
    assert_eq!(a.back(), Some(&5));

    a.push_back(6);
    assert_eq!(a.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5, 6]);

    let mut empty = LinkedList::new();
    empty.append(&mut a);
    assert_eq!(empty.len(), 7);
    assert!(a.is_empty());
}

#[test]
fn test_remove_first_and_all() {
    let mut list: LinkedList<i32> = [1, 2, 3, 2, 4, 2].into_iter().collect();

    assert_eq!(list.remove_first(|i| *i == 2), Some(2));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 2, 4, 2]);

    assert_eq!(list.remove_all_value(&2), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 4]);
    assert_eq!(list.back(), Some(&4), "Removing the last element should move the tail back.");

    list.add(5);
    assert_eq!(list.back(), Some(&5));

    assert_eq!(list.remove_first_value(&1), Some(1));
    assert_eq!(list.front(), Some(&3));
    assert_eq!(list.remove_first(|i| *i > 10), None);

    assert_eq!(list.remove_all(|_| true), 3);
    assert!(list.is_empty());
    assert_eq!(list.remove_all(|_| true), 0);

    list.add(9);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [9]);
}

#[test]
fn test_steps() {
    let mut list: LinkedList<u8> = (1..=5).collect();

    let mut stepped = Vec::new();
    list.step(|i: &u8| stepped.push(*i));
    assert_eq!(stepped, [1, 2, 3, 4, 5]);

    let mut stepped_break = Vec::new();
    let signal = list.step_break(|i: &u8| {
        stepped_break.push(*i);
        Signal::break_if(*i == 3)
    });
    assert!(signal.is_break());
    assert_eq!(stepped_break, [1, 2, 3]);

    list.step_mut(|i: &mut u8| *i *= 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4, 6, 8, 10]);

    let signal = list.step_mut_break(|i: &mut u8| {
        *i = 0;
        Signal::break_if(true)
    });
    assert!(signal.is_break());
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&10));
}

#[test]
fn test_drops() {
    let counter = Rc::new(Cell::new(0));
    let mut list = LinkedList::new();
    for _ in 0..5 {
        list.push_back(CountedDrop::new(&counter));
    }

    drop(list.pop_front());
    assert_eq!(counter.get(), 1);

    list.remove_first(|_| true);
    assert_eq!(counter.get(), 2);

    Clear::clear(&mut list);
    assert_eq!(counter.get(), 5);
    assert_eq!(Count::len(&list), 0);

    for _ in 0..3 {
        list.push_front(CountedDrop::new(&counter));
    }
    drop(list);
    assert_eq!(counter.get(), 8, "Dropping a list should drop every element.");
}

/// Panics when dropped, if `0` is true.
struct PanicOnDrop(bool);

impl Drop for PanicOnDrop {
    fn drop(&mut self) {
        if self.0 {
            panic!("dropped a value which panics on drop");
        }
    }
}

#[test]
fn test_remove_all_with_panicking_drop() {
    let mut list = LinkedList::new();
    list.push_back(PanicOnDrop(true));
    assert_panics!({ list.remove_all_where(|_| true); });
    assert_eq!(list.len(), 0, "The list should be empty once its only node is freed.");
    assert!(list.front().is_none());

    list.push_back(PanicOnDrop(true));
    list.push_back(PanicOnDrop(false));
    assert_panics!({ list.remove_all_where(|_| true); });
    assert_eq!(list.len(), 1, "Nodes after the panicking one should be kept intact.");
    assert!(list.front().is_some_and(|item| !item.0));

    list.push_back(PanicOnDrop(false));
    assert_eq!(list.remove_all_where(|_| true), 2);
    assert!(list.is_empty());
}

#[test]
fn test_clone_eq() {
    let list: LinkedList<String> = ["a", "b"].into_iter().map(String::from).collect();
    let mut clone = list.clone();
    assert_eq!(list, clone);

    clone.push_back("c".into());
    assert_ne!(list, clone);
    assert_eq!(list.len(), 2);
    assert_eq!(format!("{clone:?}"), r#"["a", "b", "c"]"#);

    assert_eq!(
        clone.into_iter().collect::<Vec<_>>(),
        ["a", "b", "c"]
    );
}
