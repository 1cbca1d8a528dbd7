//! The car API as it was first written: status codes and out-parameters.
//!
//! Every operation returns a [`FetchCode`] and delivers its payload through
//! a `&mut Option<_>` slot. The slot is written only on success; the caller
//! must check the code before touching it. Nothing stops a caller from
//! forgetting a check, which is the point of the comparison.

use super::{CarStatus, DiagnosticData, Telemetry, MOCK_ERROR_CODE};

/// Discrete result code shared by every legacy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCode {
    Success,
    NoConnection,
    CacheCorrupt,
    DataNotAvailable,
}

/// Primary source: ask the car over HTTP.
///
/// Writes `slot` and returns `Success`, or returns `NoConnection` and leaves
/// `slot` untouched.
pub fn fetch_status_over_http(
    telemetry: &impl Telemetry,
    slot: &mut Option<CarStatus>,
) -> FetchCode {
    if !telemetry.http_reachable() {
        return FetchCode::NoConnection;
    }
    *slot = Some(CarStatus);
    FetchCode::Success
}

/// Fallback source: read the last known status from the local cache.
///
/// Same contract as [`fetch_status_over_http`], failing with `CacheCorrupt`.
pub fn fetch_status_from_cache(
    telemetry: &impl Telemetry,
    slot: &mut Option<CarStatus>,
) -> FetchCode {
    if !telemetry.cache_readable() {
        return FetchCode::CacheCorrupt;
    }
    *slot = Some(CarStatus);
    FetchCode::Success
}

/// Dependent step: query diagnostics through an established status token.
pub fn get_diagnostic_data(
    telemetry: &impl Telemetry,
    _status: &CarStatus,
    slot: &mut Option<DiagnosticData>,
) -> FetchCode {
    if !telemetry.diagnostics_ready() {
        return FetchCode::DataNotAvailable;
    }
    *slot = Some(DiagnosticData {
        error_code: MOCK_ERROR_CODE,
    });
    FetchCode::Success
}

/// The full chain, written the only way this style allows: one code check
/// per call, early return on each failure.
///
/// Policy: try HTTP; on failure try the cache; if both fail, report the
/// cache's code (the HTTP code is gone by then). Only with a status token in
/// hand is the diagnostics step attempted.
pub fn diagnostics_with_fallback(
    telemetry: &impl Telemetry,
) -> (FetchCode, Option<DiagnosticData>) {
    let mut status_slot: Option<CarStatus> = None;

    let mut code = fetch_status_over_http(telemetry, &mut status_slot);
    if code != FetchCode::Success {
        code = fetch_status_from_cache(telemetry, &mut status_slot);
    }
    let status = match (code, status_slot) {
        (FetchCode::Success, Some(status)) => status,
        _ => return (code, None),
    };

    let mut data_slot: Option<DiagnosticData> = None;
    let code = get_diagnostic_data(telemetry, &status, &mut data_slot);
    match (code, data_slot) {
        (FetchCode::Success, Some(data)) => (FetchCode::Success, Some(data)),
        _ => (code, None),
    }
}
