use std::cell::Cell;

use outcome_rail::{attempt, err, ok, Outcome};

#[derive(Debug, PartialEq)]
enum AppError {
    Parse(String),
}

impl From<&str> for AppError {
    fn from(message: &str) -> Self {
        AppError::Parse(message.to_string())
    }
}

fn add(a: Outcome<i32, &'static str>, b: Outcome<i32, &'static str>) -> Outcome<i32, &'static str> {
    let a = attempt!(a);
    let b = attempt!(b);
    ok(a + b)
}

#[test]
fn attempt_unwraps_ok_values() {
    assert_eq!(add(ok(1), ok(2)), Outcome::Ok(3));
}

#[test]
fn attempt_returns_the_first_error_early() {
    let reached = Cell::new(false);
    let run = || -> Outcome<i32, &'static str> {
        let a = attempt!(Outcome::<i32, &'static str>::err("first"));
        reached.set(true);
        ok(a)
    };

    assert_eq!(run(), Outcome::Err("first"));
    assert!(!reached.get());
    assert_eq!(add(err("left"), err("right")), Outcome::Err("left"));
}

#[test]
fn attempt_converts_errors_with_from() {
    fn load(raw: Outcome<i32, &'static str>) -> Outcome<i32, AppError> {
        let value = attempt!(raw);
        ok(value * 10)
    }

    assert_eq!(load(ok(4)), Outcome::Ok(40));
    assert_eq!(load(err("bad digit")), Outcome::Err(AppError::Parse("bad digit".into())));
}
