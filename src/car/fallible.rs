//! The car API rewritten around [`Outcome`]: failures are values, the chain
//! is a combinator pipeline instead of a ladder of code checks.

use super::{CarApiError, CarStatus, DiagnosticData, Telemetry, MOCK_ERROR_CODE};
use crate::outcome::Outcome;

/// Primary source: ask the car over HTTP.
pub fn fetch_status_over_http(telemetry: &impl Telemetry) -> Outcome<CarStatus, CarApiError> {
    if !telemetry.http_reachable() {
        return Outcome::Failure(CarApiError::NoConnection);
    }
    Outcome::Success(CarStatus)
}

/// Fallback source: read the last known status from the local cache.
pub fn fetch_status_from_cache(telemetry: &impl Telemetry) -> Outcome<CarStatus, CarApiError> {
    if !telemetry.cache_readable() {
        return Outcome::Failure(CarApiError::CacheCorrupt);
    }
    Outcome::Success(CarStatus)
}

impl CarStatus {
    /// Dependent step: query diagnostics through this status token.
    pub fn diagnostic_data(
        &self,
        telemetry: &impl Telemetry,
    ) -> Outcome<DiagnosticData, CarApiError> {
        if !telemetry.diagnostics_ready() {
            return Outcome::Failure(CarApiError::DataNotAvailable);
        }
        Outcome::Success(DiagnosticData {
            error_code: MOCK_ERROR_CODE,
        })
    }
}

/// Diagnostics without a fallback: HTTP or nothing.
///
/// The first shape this rewrite took. A dead network surfaces directly as
/// `NoConnection`.
pub fn diagnostics_direct(telemetry: &impl Telemetry) -> Outcome<DiagnosticData, CarApiError> {
    fetch_status_over_http(telemetry).and_then(|status| status.diagnostic_data(telemetry))
}

/// The full chain: HTTP, then the cache on failure, then diagnostics.
///
/// Same policy as [`legacy::diagnostics_with_fallback`](super::legacy::diagnostics_with_fallback),
/// expressed as a single pipeline. When both sources fail, the terminal
/// error is the cache's; the HTTP error is discarded once the fallback is
/// attempted. A caller that needs the HTTP error must call the sources
/// individually and capture it before falling back.
pub fn diagnostics_with_fallback(
    telemetry: &impl Telemetry,
) -> Outcome<DiagnosticData, CarApiError> {
    fetch_status_over_http(telemetry)
        .or_else(|_| fetch_status_from_cache(telemetry))
        .and_then(|status| status.diagnostic_data(telemetry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car::ScriptedTelemetry;
    use std::sync::Mutex;

    /// Scripted answers plus a log of which probes were consulted, for
    /// asserting what the orchestration did *not* do.
    struct RecordingTelemetry {
        script: ScriptedTelemetry,
        probes: Mutex<Vec<&'static str>>,
    }

    impl RecordingTelemetry {
        fn new(script: ScriptedTelemetry) -> Self {
            RecordingTelemetry {
                script,
                probes: Mutex::new(Vec::new()),
            }
        }

        fn probed(&self) -> Vec<&'static str> {
            self.probes.lock().unwrap().clone()
        }
    }

    impl Telemetry for RecordingTelemetry {
        fn http_reachable(&self) -> bool {
            self.probes.lock().unwrap().push("http");
            self.script.http_reachable()
        }

        fn cache_readable(&self) -> bool {
            self.probes.lock().unwrap().push("cache");
            self.script.cache_readable()
        }

        fn diagnostics_ready(&self) -> bool {
            self.probes.lock().unwrap().push("data");
            self.script.diagnostics_ready()
        }
    }

    fn script(http: bool, cache: bool, data: bool) -> ScriptedTelemetry {
        ScriptedTelemetry { http, cache, data }
    }

    mod sources {
        use super::*;

        #[test]
        fn http_source_maps_reachability_to_no_connection() {
            assert_eq!(
                fetch_status_over_http(&script(true, false, false)),
                Outcome::Success(CarStatus)
            );
            assert_eq!(
                fetch_status_over_http(&script(false, true, true)),
                Outcome::Failure(CarApiError::NoConnection)
            );
        }

        #[test]
        fn cache_source_maps_readability_to_cache_corrupt() {
            assert_eq!(
                fetch_status_from_cache(&script(false, true, false)),
                Outcome::Success(CarStatus)
            );
            assert_eq!(
                fetch_status_from_cache(&script(true, false, true)),
                Outcome::Failure(CarApiError::CacheCorrupt)
            );
        }

        #[test]
        fn diagnostics_report_the_mock_error_code() {
            assert_eq!(
                CarStatus.diagnostic_data(&script(true, true, true)),
                Outcome::Success(DiagnosticData { error_code: 42 })
            );
            assert_eq!(
                CarStatus.diagnostic_data(&script(true, true, false)),
                Outcome::Failure(CarApiError::DataNotAvailable)
            );
        }
    }

    mod direct {
        use super::*;

        #[test]
        fn dead_network_surfaces_without_fallback() {
            let telemetry = RecordingTelemetry::new(script(false, true, true));
            assert_eq!(
                diagnostics_direct(&telemetry),
                Outcome::Failure(CarApiError::NoConnection)
            );
            // Neither the cache nor the diagnostics step was consulted.
            assert_eq!(telemetry.probed(), vec!["http"]);
        }

        #[test]
        fn good_network_reaches_diagnostics() {
            assert_eq!(
                diagnostics_direct(&script(true, false, true)),
                Outcome::Success(DiagnosticData { error_code: 42 })
            );
        }
    }

    mod with_fallback {
        use super::*;

        #[test]
        fn primary_success_never_consults_the_cache() {
            let telemetry = RecordingTelemetry::new(script(true, true, true));
            assert!(diagnostics_with_fallback(&telemetry).is_success());
            assert_eq!(telemetry.probed(), vec!["http", "data"]);
        }

        #[test]
        fn fallback_runs_only_after_primary_failure() {
            let telemetry = RecordingTelemetry::new(script(false, true, true));
            assert_eq!(
                diagnostics_with_fallback(&telemetry),
                Outcome::Success(DiagnosticData { error_code: 42 })
            );
            assert_eq!(telemetry.probed(), vec!["http", "cache", "data"]);
        }

        #[test]
        fn both_sources_down_yields_the_fallback_error() {
            let telemetry = RecordingTelemetry::new(script(false, false, true));
            assert_eq!(
                diagnostics_with_fallback(&telemetry),
                Outcome::Failure(CarApiError::CacheCorrupt)
            );
            // The dependent step never ran without a status token.
            assert_eq!(telemetry.probed(), vec!["http", "cache"]);
        }

        #[test]
        fn diagnostics_failure_is_terminal() {
            assert_eq!(
                diagnostics_with_fallback(&script(true, true, false)),
                Outcome::Failure(CarApiError::DataNotAvailable)
            );
        }
    }

    mod variants_agree {
        use super::*;
        use crate::car::legacy::{self, FetchCode};

        fn as_code(outcome: &Outcome<DiagnosticData, CarApiError>) -> FetchCode {
            match outcome {
                Outcome::Success(_) => FetchCode::Success,
                Outcome::Failure(CarApiError::NoConnection) => FetchCode::NoConnection,
                Outcome::Failure(CarApiError::CacheCorrupt) => FetchCode::CacheCorrupt,
                Outcome::Failure(CarApiError::DataNotAvailable) => FetchCode::DataNotAvailable,
            }
        }

        /// Both implementations of the fallback chain make the same decision
        /// for every combination of probe answers.
        #[test]
        fn legacy_and_outcome_chains_match_on_every_branch() {
            for http in [false, true] {
                for cache in [false, true] {
                    for data in [false, true] {
                        let telemetry = script(http, cache, data);
                        let outcome = diagnostics_with_fallback(&telemetry);
                        let (code, legacy_data) = legacy::diagnostics_with_fallback(&telemetry);
                        assert_eq!(as_code(&outcome), code, "http={http} cache={cache} data={data}");
                        match outcome {
                            Outcome::Success(new_data) => assert_eq!(Some(new_data), legacy_data),
                            Outcome::Failure(_) => assert_eq!(legacy_data, None),
                        }
                    }
                }
            }
        }
    }
}
