use std::cell::Cell;

use outcome_rail::{all, err, ok, Outcome};
use smallvec::SmallVec;

#[test]
fn all_combines_ok_values() {
    let combined: Outcome<Vec<i32>, &str> = all([ok(1), ok(2), ok(3)]);
    assert_eq!(combined, Outcome::Ok(vec![1, 2, 3]));
}

#[test]
fn all_becomes_first_err() {
    let combined: Outcome<Vec<i32>, &str> = all([
        ok(1),
        err("a"),
        ok(2),
        err("b"),
        ok(3),
        err("c"),
    ]);
    assert_eq!(combined, Outcome::Err("a"));
}

#[test]
fn all_of_empty_input_is_ok_empty() {
    let combined: Outcome<Vec<i32>, &str> = all(Vec::new());
    assert_eq!(combined, Outcome::Ok(vec![]));
}

#[test]
fn all_preserves_order_and_length() {
    let inputs: Vec<Outcome<usize, ()>> = (0..100).rev().map(ok).collect();
    let combined = all(inputs).unwrap();

    assert_eq!(combined.len(), 100);
    assert_eq!(combined.first(), Some(&99));
    assert_eq!(combined.last(), Some(&0));
}

#[test]
fn all_stops_evaluating_after_first_err() {
    let evaluated = Cell::new(0);
    let combined: Outcome<Vec<i32>, String> = all((0..10).map(|n| {
        evaluated.set(evaluated.get() + 1);
        if n == 3 {
            err(format!("failed at {n}"))
        } else {
            ok(n)
        }
    }));

    assert_eq!(combined, Outcome::Err("failed at 3".to_string()));
    assert_eq!(evaluated.get(), 4);
}

#[test]
fn associated_all_matches_free_function() {
    let items = vec![Outcome::<i32, &str>::ok(1), Outcome::ok(2)];
    assert_eq!(Outcome::all(items.clone()), all(items));
}

#[test]
fn collect_into_outcome_vec() {
    let parsed: Outcome<Vec<u8>, String> = ["1", "2", "3"]
        .iter()
        .map(|s| Outcome::from(s.parse::<u8>().map_err(|e| e.to_string())))
        .collect();
    assert_eq!(parsed, Outcome::Ok(vec![1, 2, 3]));
}

#[test]
fn collect_reports_first_failure() {
    let parsed: Outcome<Vec<u8>, String> = ["1", "x", "300"]
        .iter()
        .map(|s| Outcome::from(s.parse::<u8>().map_err(|_| format!("bad: {s}"))))
        .collect();
    assert_eq!(parsed, Outcome::Err("bad: x".to_string()));
}

#[test]
fn collect_into_custom_collection_type() {
    let inputs = vec![Outcome::<i32, &str>::ok(1), Outcome::ok(2)];
    let collected: Outcome<SmallVec<[i32; 4]>, &str> = inputs.into_iter().collect();

    let values = collected.unwrap();
    assert_eq!(values.as_slice(), &[1, 2]);
    assert!(!values.spilled());
}

#[test]
fn collect_into_string() {
    let word: Outcome<String, ()> = ['o', 'k'].into_iter().map(ok).collect();
    assert_eq!(word, Outcome::Ok("ok".to_string()));
}

#[test]
fn source_iterator_is_not_advanced_past_the_failure() {
    let mut source = vec![ok(1), err("stop"), ok(3), ok(4)].into_iter();
    let combined: Outcome<Vec<i32>, &str> = source.by_ref().collect();

    assert_eq!(combined, Outcome::Err("stop"));
    assert_eq!(source.len(), 2);
}
