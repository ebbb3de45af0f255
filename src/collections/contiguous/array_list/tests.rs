#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::traits::{Clear, List};
use crate::step::{Signal, Stepper, StepperMut};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_capacity_doubles_and_halves() {
    let mut list = ArrayList::with_cap(2).unwrap();
    assert_eq!(list.cap(), 2);

    for i in 0..5 {
        list.push(i);
    }
    assert_eq!(list.cap(), 8, "Capacity should double each time the list is full.");

    list.remove(0);
    assert_eq!(list.cap(), 8, "A list which is half full shouldn't shrink.");
    list.remove(0);
    assert_eq!(list.cap(), 4, "A list which is less than half full should shrink.");

    list.remove_all(|_| true);
    assert_eq!(list.cap(), 2, "Shrinking should stop at the minimum capacity.");
    assert!(list.is_empty());
}

#[test]
fn test_zero_capacity() {
    assert_eq!(ArrayList::<u8>::with_cap(0).err(), Some(ZeroCapacity));

    let list = ArrayList::<u8>::new();
    assert_eq!(list.cap(), 1);
    assert_eq!(list.min_cap(), 1);
}

#[test]
fn test_without_shrink() {
    let mut list: ArrayList<_> = (0..8).collect();
    let cap = list.cap();

    assert_eq!(list.remove_without_shrink(7), 7);
    assert_eq!(list.remove_all_without_shrink(|i| i % 2 == 0), 4);
    assert_eq!(&*list, &[1, 3, 5]);
    assert_eq!(list.cap(), cap, "Neither method should change the capacity.");

    list.trim();
    assert_eq!(list.cap(), 3);
    list.push(7);
    assert_eq!(list.cap(), 6);
}

#[test]
fn test_indexing() {
    let mut list: ArrayList<_> = "abcd".chars().collect();

    assert_eq!(*list.get(1), 'b');
    assert_eq!(list[3], 'd');
    assert_eq!(list.try_get(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    assert_eq!(list.set(0, 'z'), 'a');
    list[1] = 'y';
    *list.get_mut(2) = 'x';
    assert_eq!(list.as_slice(), ['z', 'y', 'x', 'd']);

    list.insert(1, '1');
    list.insert(5, '5');
    assert_eq!(list.iter().collect::<String>(), "z1yxd5");
    assert!(list.try_insert(7, '7').is_err());

    assert_eq!(list.remove(1), '1');
    assert_eq!(list.try_remove(5), Err(IndexOutOfBounds { index: 5, len: 5 }));

    assert_panics!({ list.get(5); }, "Getting an index out of bounds should panic.");
    assert_panics!({ list.set(9, 'a'); }, "Setting an index out of bounds should panic.");
    assert_panics!({ list.insert(9, 'a'); }, "Inserting out of bounds should panic.");
}

#[test]
fn test_list_trait() {
    let mut list: ArrayList<u32> = ArrayList::new();
    for i in [5, 1, 5, 2, 5] {
        list.add(i);
    }

    assert_eq!(list.remove_first_value(&5), Some(5));
    assert_eq!(list.remove_first(|i| *i > 100), None);
    assert_eq!(list.remove_all_value(&5), 2);
    assert_eq!(list.as_slice(), [1, 2]);
    assert!(list.contains(&2));
}

#[test]
fn test_steps() {
    let mut list: ArrayList<i32> = (1..=4).collect();

    let mut stepped = Vec::new();
    list.step(|i: &i32| stepped.push(*i));

    let mut stepped_break = Vec::new();
    let signal = list.step_break(|i: &i32| {
        stepped_break.push(*i);
        Signal::Continue
    });
    assert!(signal.is_continue());
    assert_eq!(stepped, stepped_break);

    list.step_mut(|i: &mut i32| *i = -*i);
    assert_eq!(list.as_slice(), [-1, -2, -3, -4]);

    let signal = list.step_mut_break(|i: &mut i32| {
        *i = 0;
        Signal::Break
    });
    assert!(signal.is_break());
    assert_eq!(list.as_slice(), [0, -2, -3, -4]);
}

#[test]
fn test_drops() {
    let counter = Rc::new(Cell::new(0));
    let mut list = ArrayList::new();
    for _ in 0..6 {
        list.push(CountedDrop::new(&counter));
    }

    drop(list.remove(0));
    drop(list.pop());
    assert_eq!(counter.get(), 2);

    let mut iter = list.into_iter();
    drop(iter.next());
    assert_eq!(counter.get(), 3);
    drop(iter);
    assert_eq!(counter.get(), 6, "Dropping an iterator should drop the remaining elements.");

    let mut list: ArrayList<_> = (0..4).map(|_| CountedDrop::new(&counter)).collect();
    Clear::clear(&mut list);
    assert_eq!(counter.get(), 10);
    assert_eq!(list.cap(), 1);

    list.push(CountedDrop::new(&counter));
    drop(list);
    assert_eq!(counter.get(), 11);
}

#[test]
fn test_clone() {
    let list: ArrayList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let mut clone = list.clone();
    assert_eq!(list, clone);
    assert_eq!(list.cap(), clone.cap());

    clone.set(0, "z".into());
    assert_eq!(list[0], "a");
    assert_ne!(list, clone);
}
