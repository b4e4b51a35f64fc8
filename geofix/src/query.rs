//! The location query: candidate lookups plus caller expectations.

use std::sync::Arc;

use crate::cell::CellLookup;
use crate::config::AccuracyThresholds;
use crate::gateway::{StoreError, StoreTier};
use crate::result::{DataAccuracy, DataSource, LocateResult};
use crate::telemetry::TelemetrySink;

/// One geolocation query as seen by the search strategies.
///
/// Carries the candidate cell and area lookups, the accuracy tier the
/// caller expects, the deployment's tier thresholds and an optional
/// telemetry sink. Queries are cheap value objects built once per request.
#[derive(Clone)]
pub struct Query {
    cell: Vec<CellLookup>,
    cell_area: Vec<CellLookup>,
    expected_accuracy: DataAccuracy,
    thresholds: AccuracyThresholds,
    telemetry: Option<Arc<dyn TelemetrySink>>,
}

impl Query {
    /// Build a query from per-cell and area-only lookups.
    ///
    /// The expected accuracy defaults from the query content: cell
    /// lookups promise a medium-tier answer, area-only queries a low-tier
    /// one. Callers with stricter needs override it.
    pub fn new(cell: Vec<CellLookup>, cell_area: Vec<CellLookup>) -> Self {
        let expected_accuracy = if cell.is_empty() {
            DataAccuracy::Low
        } else {
            DataAccuracy::Medium
        };
        Self {
            cell,
            cell_area,
            expected_accuracy,
            thresholds: AccuracyThresholds::default(),
            telemetry: None,
        }
    }

    pub fn with_expected_accuracy(mut self, expected_accuracy: DataAccuracy) -> Self {
        self.expected_accuracy = expected_accuracy;
        self
    }

    pub fn with_thresholds(mut self, thresholds: AccuracyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Lookups with a full cell identity.
    pub fn cell(&self) -> &[CellLookup] {
        &self.cell
    }

    /// Lookups usable at the lac-area level only.
    ///
    /// The validation layer building the query populates this with the
    /// area identities of all observed cells, including the full-cell
    /// lookups; only these feed the area fallback tier.
    pub fn cell_area(&self) -> &[CellLookup] {
        &self.cell_area
    }

    pub fn expected_accuracy(&self) -> DataAccuracy {
        self.expected_accuracy
    }

    pub fn thresholds(&self) -> &AccuracyThresholds {
        &self.thresholds
    }

    /// Report which source produced which result for this query.
    pub fn emit_source_stats(&self, source: DataSource, result: &LocateResult) {
        if let Some(sink) = &self.telemetry {
            sink.emit_source_stats(source, result);
        }
    }

    /// Report a degraded gateway read for this query.
    pub fn report_store_failure(&self, tier: StoreTier, error: &StoreError) {
        if let Some(sink) = &self.telemetry {
            sink.report_store_failure(tier, error);
        }
    }
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("cell", &self.cell)
            .field("cell_area", &self.cell_area)
            .field("expected_accuracy", &self.expected_accuracy)
            .field("thresholds", &self.thresholds)
            .field("telemetry", &self.telemetry.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::RadioType;

    fn lookup(cid: u32) -> CellLookup {
        CellLookup {
            radio: RadioType::Gsm,
            mcc: 234,
            mnc: 15,
            lac: 42,
            cid,
        }
    }

    #[test]
    fn test_expected_accuracy_defaults_from_content() {
        let with_cells = Query::new(vec![lookup(1)], Vec::new());
        assert_eq!(with_cells.expected_accuracy(), DataAccuracy::Medium);

        let area_only = Query::new(Vec::new(), vec![lookup(1)]);
        assert_eq!(area_only.expected_accuracy(), DataAccuracy::Low);

        let empty = Query::new(Vec::new(), Vec::new());
        assert_eq!(empty.expected_accuracy(), DataAccuracy::Low);
    }

    #[test]
    fn test_expected_accuracy_override() {
        let query = Query::new(Vec::new(), Vec::new()).with_expected_accuracy(DataAccuracy::High);
        assert_eq!(query.expected_accuracy(), DataAccuracy::High);
    }

    #[test]
    fn test_stats_without_sink_is_a_noop() {
        let query = Query::new(Vec::new(), Vec::new());
        query.emit_source_stats(DataSource::Internal, &LocateResult::Empty);
        query.report_store_failure(StoreTier::Cell, &StoreError::Unavailable("down".into()));
    }
}
