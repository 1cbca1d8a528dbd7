//! Style 2: Panics as Exceptions
//! Example: Division That Throws
//!
//! Run with: cargo run --bin p2_panic_pitfalls

use std::panic;

use error_signaling_styles::divide::divide_or_panic;

/// Pull the message out of a panic payload. `panic!` with a literal gives a
/// `&str`, with formatting a `String`.
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "<non-string panic payload>".to_string(),
        },
    }
}

fn main() {
    println!("=== Panics as Exceptions ===\n");

    // The happy path reads like plain arithmetic
    println!("=== Success Path ===");
    println!("  10 / 2 = {}", divide_or_panic(10, 2));

    // Containing the failure path takes catch_unwind
    println!("\n=== Caught Failure ===");
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {})); // keep the demo output clean
    let caught = panic::catch_unwind(|| divide_or_panic(10, 0));
    panic::set_hook(hook);

    match caught {
        Ok(result) => println!("  10 / 0 = {}", result),
        Err(payload) => println!("  caught panic: {}", panic_message(payload)),
    }

    println!("\n=== The Pitfall ===");
    println!("Uncomment the next line and the process dies with a stack trace:");
    println!("  // divide_or_panic(10, 0);");
    println!("Nothing at the call site hints that this function can panic;");
    println!("the contract lives only in the documentation.");

    println!("\n=== Key Points ===");
    println!("1. The return value is the payload again - the happy path is clean");
    println!("2. An uncaught panic terminates the process; this is a pitfall, not a design");
    println!("3. catch_unwind exists for containment at boundaries, not for control flow");
    println!("4. Failure is invisible in the signature; callers cannot see it coming");
}
