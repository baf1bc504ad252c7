use std::cell::Cell;

use outcome_rail::{err, ok, Outcome};

fn half(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 {
        ok(n / 2)
    } else {
        err(format!("{n} is odd"))
    }
}

fn positive(n: i32) -> Outcome<i32, String> {
    if n > 0 {
        ok(n)
    } else {
        err(format!("{n} is not positive"))
    }
}

#[test]
fn and_then_transitions_ok_results() {
    let result = Outcome::<i32, &str>::ok(1)
        .and_then(|_| ok(2))
        .and_then(|_| ok(3));
    assert_eq!(result, Outcome::Ok(3));
}

#[test]
fn err_result_stops_and_then() {
    let result = Outcome::<i32, &str>::ok(1)
        .and_then(|_| err("failure"))
        .and_then(|_: i32| ok(3));
    assert_eq!(result, Outcome::Err("failure"));
}

#[test]
fn and_then_short_circuits_without_invoking_transform() {
    let calls = Cell::new(0);
    let result = Outcome::<i32, &str>::err("e").and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::<String, &str>::ok(x.to_string())
    });

    assert_eq!(result, Outcome::Err("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_threads_the_same_error_payload() {
    let payload = String::from("original");
    let ptr = payload.as_ptr();

    let result = Outcome::<i32, String>::err(payload)
        .and_then(half)
        .and_then(positive)
        .and_then(half);

    let error = result.into_error().unwrap();
    assert_eq!(error, "original");
    assert_eq!(error.as_ptr(), ptr);
}

#[test]
fn and_then_is_associative() {
    let inputs = [8, 6, 4, 3, 0, -4];

    for n in inputs {
        for r in [ok(n), err("seed".to_string())] {
            let r: Outcome<i32, String> = r;
            let left = r.clone().and_then(half).and_then(positive);
            let right = r.and_then(|v| half(v).and_then(positive));
            assert_eq!(left, right, "associativity failed for input {n}");
        }
    }
}

#[test]
fn and_then_has_left_and_right_identity() {
    for n in [8, 3, -2] {
        assert_eq!(Outcome::ok(n).and_then(half), half(n));
        assert_eq!(half(n).and_then(Outcome::ok), half(n));
    }
}

#[test]
fn ok_result_stops_or_else() {
    let calls = Cell::new(0);
    let result = Outcome::<i32, &str>::ok(1).or_else(|_| {
        calls.set(calls.get() + 1);
        Outcome::<i32, String>::ok(2)
    });

    assert_eq!(result, Outcome::Ok(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn or_else_recovers_errors() {
    let result = Outcome::<i32, &str>::err("failure").or_else(|_| Outcome::<i32, ()>::ok(2));
    assert_eq!(result, Outcome::Ok(2));
}

#[test]
fn or_else_can_replace_the_error() {
    let result = Outcome::<i32, &str>::err("failure").or_else(|e| Outcome::<i32, usize>::err(e.len()));
    assert_eq!(result, Outcome::Err(7));
}

#[test]
fn or_else_is_associative() {
    let retry = |e: String| -> Outcome<i32, String> {
        if e.starts_with('x') {
            ok(0)
        } else {
            err(format!("x{e}"))
        }
    };
    let escalate = |e: String| -> Outcome<i32, String> { err(format!("{e}!")) };

    for r in [ok(1), err("a".to_string()), err("xa".to_string())] {
        let r: Outcome<i32, String> = r;
        let left = r.clone().or_else(retry).or_else(escalate);
        let right = r.or_else(|e| retry(e).or_else(escalate));
        assert_eq!(left, right);
    }
}
