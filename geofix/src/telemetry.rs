//! Telemetry port.
//!
//! The core reports which source produced which result and any datastore
//! degradation through an injected sink; it never talks to an ambient
//! error-reporting client.

use crate::gateway::{StoreError, StoreTier};
use crate::result::{DataSource, LocateResult};

/// Side-effecting observer for search outcomes and degradations.
///
/// Implementations must be cheap and must not fail; this is a stats hook,
/// not a network call.
pub trait TelemetrySink: Send + Sync {
    /// Called once per top-level strategy search with the producing source
    /// and the outcome (possibly not found).
    fn emit_source_stats(&self, source: DataSource, result: &LocateResult);

    /// Called when a gateway read failed and the tier degraded to empty.
    fn report_store_failure(&self, tier: StoreTier, error: &StoreError);
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn emit_source_stats(&self, _source: DataSource, _result: &LocateResult) {}

    fn report_store_failure(&self, _tier: StoreTier, _error: &StoreError) {}
}
