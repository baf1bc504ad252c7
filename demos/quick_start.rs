//! Quick start: parse, validate, and aggregate configuration values.
//!
//! Run with `cargo run --example quick_start`.
use outcome_rail::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum ConfigError {
    NotANumber(String),
    OutOfRange(u32),
}

fn parse(raw: &str) -> Outcome<u32, ConfigError> {
    raw.parse::<u32>()
        .into_outcome()
        .map_err(|_| ConfigError::NotANumber(raw.to_string()))
}

fn in_range(value: u32) -> Outcome<u32, ConfigError> {
    if (1..=65535).contains(&value) {
        ok(value)
    } else {
        err(ConfigError::OutOfRange(value))
    }
}

fn port(raw: &str) -> Outcome<u32, ConfigError> {
    let value = attempt!(parse(raw));
    in_range(value)
}

fn main() {
    let good = all(["80", "443", "8080"].into_iter().map(port));
    println!("all good:    {:?}", good);

    let bad = all(["80", "http", "0", "8080"].into_iter().map(port));
    println!("first error: {:?}", bad);

    let fallback = port("70000").unwrap_or(8080);
    println!("fallback:    {}", fallback);

    let message = port("http").fold(
        |p| format!("listening on {p}"),
        |e| format!("cannot listen: {e:?}"),
    );
    println!("{}", message);
}
