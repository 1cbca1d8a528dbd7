//! # Error Signaling Styles
//!
//! This crate contrasts three ways a fallible operation can report failure,
//! applied to the same two problems: integer division and a mocked car
//! diagnostics API with a layered primary/fallback fetch.
//!
//! ## Styles Covered
//!
//! 1. **Status Codes** - Return a code, deliver the payload through an
//!    out-parameter the caller must not touch before checking the code
//! 2. **Panics** - The closest Rust analog to thrown exceptions, shown as a
//!    pitfall: an uncaught panic terminates the process
//! 3. **Explicit Success-or-Error Type** - [`Outcome`](outcome::Outcome), a
//!    hand-built two-variant container with chaining combinators
//!
//! ## Running Examples
//!
//! ```bash
//! # Style 1: Status Codes and Out-Parameters
//! cargo run --bin p1_status_codes
//!
//! # Style 2: Panics as Exceptions
//! cargo run --bin p2_panic_pitfalls
//!
//! # Style 3: An Explicit Success-or-Error Type
//! cargo run --bin p3_outcome_combinators
//!
//! # Putting It Together: Layered Fallback
//! cargo run --bin p4_layered_fallback
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the domain error enums
//! - `anyhow` - Application-boundary error handling in the demo binaries
//! - `rand` - Coin-flip telemetry that exercises both branches on manual runs

pub mod car;
pub mod divide;
pub mod outcome;
