//! Putting It Together: Layered Fallback
//! Example: Primary Source, Cache Fallback, Dependent Fetch
//!
//! Run with: cargo run --bin p4_layered_fallback

use anyhow::Context;

use error_signaling_styles::car::fallible::{diagnostics_direct, diagnostics_with_fallback};
use error_signaling_styles::car::{LiveTelemetry, ScriptedTelemetry};
use error_signaling_styles::outcome::Outcome;

fn main() -> anyhow::Result<()> {
    println!("=== Layered Fallback: HTTP, then Cache, then Diagnostics ===\n");

    // Without a fallback, a dead network is the end of the story
    println!("=== Direct (no fallback) ===");
    let offline = ScriptedTelemetry { http: false, cache: true, data: true };
    match diagnostics_direct(&offline) {
        Outcome::Success(data) => println!("  network down -> error code {}", data.error_code),
        Outcome::Failure(error) => println!("  network down -> {}", error),
    }

    // With the fallback chain, every branch in one pipeline:
    // fetch_status_over_http(..)
    //     .or_else(|_| fetch_status_from_cache(..))
    //     .and_then(|status| status.diagnostic_data(..))
    println!("\n=== With Fallback, Scripted Branches ===");
    let branches = [
        ("network up", ScriptedTelemetry { http: true, cache: true, data: true }),
        ("network down, cache ok", ScriptedTelemetry { http: false, cache: true, data: true }),
        ("network down, cache corrupt", ScriptedTelemetry { http: false, cache: false, data: true }),
        ("connected, no data", ScriptedTelemetry { http: true, cache: true, data: false }),
    ];
    for (label, telemetry) in branches {
        match diagnostics_with_fallback(&telemetry) {
            Outcome::Success(data) => {
                println!("  {:<28} -> diagnostics ok, error code {}", label, data.error_code)
            }
            Outcome::Failure(error) => println!("  {:<28} -> {}", label, error),
        }
    }
    println!("  (both sources down reports the cache error; the HTTP error is");
    println!("   discarded once the fallback is attempted)");

    // Coin-flip telemetry, as the mock originally behaved
    println!("\n=== Live Runs ===");
    for run in 1..=5 {
        match diagnostics_with_fallback(&LiveTelemetry) {
            Outcome::Success(data) => {
                println!("  run {}: diagnostics ok, error code {}", run, data.error_code)
            }
            Outcome::Failure(error) => println!("  run {}: {}", run, error),
        }
    }

    // At the application boundary, Outcome hands over to Result and ?
    println!("\n=== Application Boundary ===");
    let healthy = ScriptedTelemetry { http: true, cache: true, data: true };
    let data = diagnostics_with_fallback(&healthy)
        .into_result()
        .context("car diagnostics unavailable")?;
    println!("  final report: car error code {}", data.error_code);

    println!("\n=== Key Points ===");
    println!("1. or_else expresses the fallback; it runs only when the primary fails");
    println!("2. and_then gates the dependent fetch on having a status token");
    println!("3. A failing link short-circuits: no status token, no diagnostics call");
    println!("4. into_result() joins the chain to ? and anyhow at the boundary");
    Ok(())
}
