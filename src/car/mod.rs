//! A mocked car diagnostics API with a layered primary/fallback fetch.
//!
//! Obtaining diagnostics is a two-step affair: first establish a connection
//! (over HTTP, or from a local cache when the network is down), then query
//! the diagnostic data through it. Every step can fail. The two submodules
//! implement the same orchestration policy in two historical shapes:
//!
//! - [`legacy`] - status codes plus out-parameters, checked by hand
//! - [`fallible`] - [`Outcome`](crate::outcome::Outcome) values, chained
//!   with combinators

pub mod fallible;
pub mod legacy;

use thiserror::Error;

/// Diagnostic error code reported by the mock. A real car would have
/// something to say; ours always says 42.
pub(crate) const MOCK_ERROR_CODE: i32 = 42;

/// Why a car API call failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarApiError {
    #[error("no connection to the car")]
    NoConnection,
    #[error("local status cache is corrupted")]
    CacheCorrupt,
    #[error("diagnostic data not available")]
    DataNotAvailable,
}

/// Opaque token proving a connection to car diagnostics was established.
/// Carries no data; it is the prerequisite for requesting diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarStatus;

/// Outcome of a diagnostics query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticData {
    pub error_code: i32,
}

/// Decides whether each fallible step succeeds.
///
/// The original mock flipped a coin inside every call, which makes both
/// branches reachable on manual runs but neither forcible in a test.
/// Injecting the decision source fixes that: demos use [`LiveTelemetry`],
/// tests use [`ScriptedTelemetry`].
pub trait Telemetry {
    /// Can the car be reached over HTTP right now?
    fn http_reachable(&self) -> bool;

    /// Is the local status cache readable?
    fn cache_readable(&self) -> bool;

    /// Does the car have diagnostic data ready?
    fn diagnostics_ready(&self) -> bool;
}

/// Coin-flip telemetry: every probe succeeds about half the time,
/// independently. Run a demo a few times and you will see every branch.
pub struct LiveTelemetry;

impl Telemetry for LiveTelemetry {
    fn http_reachable(&self) -> bool {
        rand::random::<bool>()
    }

    fn cache_readable(&self) -> bool {
        rand::random::<bool>()
    }

    fn diagnostics_ready(&self) -> bool {
        rand::random::<bool>()
    }
}

/// Fixed-answer telemetry for forcing a specific branch.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedTelemetry {
    pub http: bool,
    pub cache: bool,
    pub data: bool,
}

impl Telemetry for ScriptedTelemetry {
    fn http_reachable(&self) -> bool {
        self.http
    }

    fn cache_readable(&self) -> bool {
        self.cache
    }

    fn diagnostics_ready(&self) -> bool {
        self.data
    }
}
