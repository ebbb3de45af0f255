#![cfg(test)]

use super::*;

/// A stateful step type, standing in for callers that prefer structs over closures.
#[derive(Default)]
struct Sum(i64);

impl Visit<i32> for Sum {
    fn visit(&mut self, item: &i32) {
        self.0 += *item as i64;
    }
}

#[test]
fn test_step_matches_step_break() {
    let values = [3, 1, 4, 1, 5, 9, 2, 6];

    let mut visited = Vec::new();
    values.step(|i: &i32| visited.push(*i));

    let mut visited_break = Vec::new();
    let signal = values.step_break(|i: &i32| {
        visited_break.push(*i);
        Signal::Continue
    });

    assert!(signal.is_continue(), "A step that never breaks should end with Continue.");
    assert_eq!(
        visited, visited_break,
        "Visit and VisitBreak should produce the same sequence when nothing breaks."
    );
    assert_eq!(visited, values);
}

#[test]
fn test_break_stops_immediately() {
    let values = [1, 2, 3, 4, 5];
    let mut seen = 0;

    let signal = values.step_break(|i: &i32| {
        seen += 1;
        Signal::break_if(*i == 3)
    });

    assert!(signal.is_break());
    assert_eq!(seen, 3, "No element after the breaking one should be visited.");
}

#[test]
fn test_step_mut_replaces_in_place() {
    let mut values = [1, 2, 3];
    values.step_mut(|i: &mut i32| *i *= 10);
    assert_eq!(values, [10, 20, 30]);

    let signal = values.step_mut_break(|i: &mut i32| {
        *i += 1;
        Signal::break_if(*i > 20)
    });
    assert!(signal.is_break());
    assert_eq!(values, [11, 21, 30], "Elements after a break should be left untouched.");
}

#[test]
fn test_struct_steps() {
    let values = [1, 2, 3, 4];
    let mut sum = Sum::default();
    values.step(&mut |i: &i32| sum.visit(i));
    assert_eq!(sum.0, 10);

    // Lifting a plain Visit into VisitMutBreak shouldn't change the elements.
    let mut values = [5, 6];
    let mut sum = Sum::default();
    let lifted = ReadOnly(Continuing(|i: &i32| sum.visit(i)));
    assert!(values.step_mut_break(lifted).is_continue());
    assert_eq!(sum.0, 11);
    assert_eq!(values, [5, 6]);
}

#[test]
fn test_adapters() {
    let mut count = 0;
    let mut step = Continuing(|_: &u8| count += 1);
    assert!(VisitBreak::<u8>::visit(&mut step, &0).is_continue());

    let mut doubled = Continuing(|i: &mut u8| *i *= 2);
    let mut value = 4;
    assert!(doubled.visit_mut(&mut value).is_continue());
    assert_eq!(value, 8);

    let mut read = ReadOnly(|i: &u8| Signal::break_if(*i == 8));
    assert!(read.visit_mut(&mut value).is_break());

    drop(step);
    assert_eq!(count, 1);
}

#[test]
fn test_step_range() {
    let values = [0, 1, 2, 3, 4, 5];
    let mut seen = Vec::new();

    let signal = step_range(&values, 2..5, |i: &i32| {
        seen.push(*i);
        Signal::Continue
    });
    assert_eq!(signal.ok(), Some(Signal::Continue));
    assert_eq!(seen, [2, 3, 4]);

    assert!(
        step_range(&values, 4..7, |_: &i32| Signal::Continue).is_err(),
        "A range beyond the slice should be rejected before stepping."
    );

    let mut values = values;
    let result = step_range_mut(&mut values, 0..2, |i: &mut i32| {
        *i = -*i;
        Signal::Continue
    });
    assert!(result.is_ok());
    assert_eq!(values, [0, -1, 2, 3, 4, 5]);
}
