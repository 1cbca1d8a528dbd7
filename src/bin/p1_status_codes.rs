//! Style 1: Status Codes and Out-Parameters
//! Example: Division and the Legacy Car API
//!
//! Run with: cargo run --bin p1_status_codes

use error_signaling_styles::car::legacy::{diagnostics_with_fallback, FetchCode};
use error_signaling_styles::car::{LiveTelemetry, ScriptedTelemetry};
use error_signaling_styles::divide::divide_status;

fn main() {
    println!("=== Status Codes and Out-Parameters ===\n");

    // Division: check the code, then read the slot
    println!("=== Division (code + out-slot) ===");
    let mut result = 0;
    if divide_status(10, 2, &mut result) == 0 {
        println!("  10 / 2 -> result slot = {}", result);
    } else {
        println!("  10 / 2 -> error");
    }

    // The failure path: the slot keeps whatever was in it before
    let mut result = -999; // sentinel
    let code = divide_status(10, 0, &mut result);
    println!("  10 / 0 -> code = {}, slot untouched = {}", code, result);

    // Nothing stops a caller from skipping the check
    println!("\n=== The Pitfall: Nobody Forces the Check ===");
    let mut unchecked = 0;
    let _ = divide_status(10, 0, &mut unchecked);
    println!("  Read the slot without checking: {} (stale, not a quotient)", unchecked);

    // Car API, forced down each branch
    println!("\n=== Car Diagnostics, Scripted Branches ===");
    let branches = [
        ("network up", ScriptedTelemetry { http: true, cache: true, data: true }),
        ("network down, cache ok", ScriptedTelemetry { http: false, cache: true, data: true }),
        ("network down, cache corrupt", ScriptedTelemetry { http: false, cache: false, data: true }),
        ("connected, no data", ScriptedTelemetry { http: true, cache: true, data: false }),
    ];
    for (label, telemetry) in branches {
        let (code, data) = diagnostics_with_fallback(&telemetry);
        match (code, data) {
            (FetchCode::Success, Some(data)) => {
                println!("  {:<28} -> error code {}", label, data.error_code)
            }
            (code, _) => println!("  {:<28} -> failed: {:?}", label, code),
        }
    }

    // And with real coin flips, like the original mock
    println!("\n=== Car Diagnostics, Live Runs ===");
    for run in 1..=4 {
        let (code, data) = diagnostics_with_fallback(&LiveTelemetry);
        match (code, data) {
            (FetchCode::Success, Some(data)) => {
                println!("  run {}: diagnostics ok, error code {}", run, data.error_code)
            }
            (code, _) => println!("  run {}: failed with {:?}", run, code),
        }
    }

    println!("\n=== Key Points ===");
    println!("1. The return value is a code; the payload travels out-of-band");
    println!("2. The slot is only valid after checking the code - by convention");
    println!("3. Every call adds an if/early-return; chains grow a ladder of checks");
    println!("4. Forgetting one check silently propagates garbage");
}
