//! Style 3: An Explicit Success-or-Error Type
//! Example: Outcome Construction and Chaining
//!
//! Run with: cargo run --bin p3_outcome_combinators

use error_signaling_styles::divide::{divide, int_sqrt, MathError};
use error_signaling_styles::outcome::Outcome;

fn main() {
    println!("=== An Explicit Success-or-Error Type ===\n");

    // Failure is part of the return value now
    println!("=== Construction and State ===");
    let good = divide(10, 2);
    let bad = divide(10, 0);
    println!("  10 / 2 -> is_success = {}", good.is_success());
    println!("  10 / 0 -> is_failure = {}", bad.is_failure());

    // Accessors: loud on misuse, value_or for a safe default
    println!("\n=== Accessors ===");
    println!("  value of 10 / 2       : {}", divide(10, 2).value());
    println!("  error of 10 / 0       : {}", divide(10, 0).error());
    println!("  10 / 0 value_or(0)    : {}", divide(10, 0).value_or(0));
    println!("  (value() on a Failure panics - misuse is a bug, not a branch)");

    // map: change the payload, never the state
    println!("\n=== map / map_err ===");
    let doubled = divide(10, 2).map(|q| q * 2);
    println!("  (10 / 2).map(double)  : {:?}", doubled);
    let tagged: Outcome<i32, String> =
        divide(10, 0).map_err(|e| format!("arithmetic rejected: {}", e));
    println!("  (10 / 0).map_err(tag) : {:?}", tagged);

    // and_then: chain dependent fallible steps, short-circuit on failure
    println!("\n=== and_then Chains ===");
    let chains = [
        ("divide(100, 4) -> int_sqrt", divide(100, 4).and_then(int_sqrt)),
        ("divide(10, 0)  -> int_sqrt", divide(10, 0).and_then(int_sqrt)),
        ("divide(10, -1) -> int_sqrt", divide(10, -1).and_then(int_sqrt)),
    ];
    for (label, outcome) in chains {
        match outcome {
            Outcome::Success(root) => println!("  {:<27} = {}", label, root),
            Outcome::Failure(error) => println!("  {:<27} failed: {}", label, error),
        }
    }
    println!("  (the -1 chain fails in int_sqrt: the division itself was fine)");

    // The same chain, spelled out once for comparison
    println!("\n=== What and_then Replaces ===");
    let verbose = match divide(10, -1) {
        Outcome::Success(quotient) => int_sqrt(quotient),
        Outcome::Failure(error) => Outcome::Failure(error),
    };
    match verbose {
        Outcome::Success(root) => println!("  verbose chain = {}", root),
        Outcome::Failure(MathError::NegativeSquareRoot(v)) => {
            println!("  verbose chain failed on sqrt({})", v)
        }
        Outcome::Failure(error) => println!("  verbose chain failed: {}", error),
    }

    println!("\n=== Key Points ===");
    println!("1. Success and failure share one value; the signature tells the truth");
    println!("2. value()/error() panic on the wrong side - no silent garbage");
    println!("3. map transforms a side, and_then chains dependent fallible steps");
    println!("4. A failing link short-circuits the rest of the chain");
}
