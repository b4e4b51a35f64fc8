//! Cell-based position search.
//!
//! Two-tier, never merged: per-cell records first (clustered by area and
//! fused), then lac-level area records as a coarser fallback. A gateway
//! failure on either tier degrades that tier to "no data" instead of
//! failing the query.

mod cluster;
mod types;

pub use cluster::{pick_best_area, pick_best_cells};
pub use types::{AreaKey, AreaRecord, CellKey, CellLookup, CellRecord, RadioType};

use tracing::{debug, warn};

use crate::config::CellConfig;
use crate::gateway::{CellStore, StoreTier};
use crate::geomath::{aggregate_position, Circle};
use crate::query::Query;
use crate::result::{DataSource, Fallback, LocateResult, Position};
use crate::strategy::SearchStrategy;

/// Fuse a cell cluster into a position estimate.
///
/// The fused accuracy is floored by `cell_min_accuracy` inside the fusion
/// and capped at `cell_max_accuracy` afterwards.
pub fn aggregate_cell_position(
    cells: &[CellRecord],
    source: DataSource,
    config: &CellConfig,
) -> LocateResult {
    let circles: Vec<Circle> = cells
        .iter()
        .map(|cell| Circle {
            lat: cell.lat,
            lon: cell.lon,
            radius: cell.radius,
        })
        .collect();

    match aggregate_position(&circles, config.cell_min_accuracy) {
        Some((lat, lon, accuracy)) => {
            let accuracy = accuracy.min(config.cell_max_accuracy);
            LocateResult::Position(Position::new(lat, lon, accuracy, source))
        }
        None => LocateResult::Empty,
    }
}

/// Build a position estimate from a single lac-level area.
///
/// The accuracy is the area radius clamped into the area band, and the
/// result carries the lac-fallback marker.
pub fn aggregate_area_position(
    area: &AreaRecord,
    source: DataSource,
    config: &CellConfig,
) -> LocateResult {
    let accuracy = area
        .radius
        .max(config.area_min_accuracy)
        .min(config.area_max_accuracy);
    LocateResult::Position(
        Position::new(area.lat, area.lon, accuracy, source).with_fallback(Fallback::Lac),
    )
}

/// Position search over a cell datastore.
///
/// The same strategy serves the curated internal dataset and the
/// crowd-sourced one: the store and the source tag are constructor
/// configuration, not subclasses.
pub struct CellPositionStrategy<S> {
    store: S,
    source: DataSource,
    config: CellConfig,
}

impl<S: CellStore> CellPositionStrategy<S> {
    pub fn new(store: S, source: DataSource, config: CellConfig) -> Self {
        Self {
            store,
            source,
            config,
        }
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    fn fetch_cells(&self, query: &Query) -> Vec<CellRecord> {
        let keys: Vec<CellKey> = query.cell().iter().map(CellLookup::cell_key).collect();
        if keys.is_empty() {
            return Vec::new();
        }
        match self.store.query_cells(&keys) {
            Ok(cells) => cells,
            Err(error) => {
                warn!(tier = StoreTier::Cell.as_str(), %error, "cell read degraded to empty");
                query.report_store_failure(StoreTier::Cell, &error);
                Vec::new()
            }
        }
    }

    fn fetch_areas(&self, query: &Query) -> Vec<AreaRecord> {
        let keys: Vec<AreaKey> = query.cell_area().iter().map(CellLookup::area_key).collect();
        if keys.is_empty() {
            return Vec::new();
        }
        match self.store.query_areas(&keys) {
            Ok(areas) => areas,
            Err(error) => {
                warn!(tier = StoreTier::Area.as_str(), %error, "area read degraded to empty");
                query.report_store_failure(StoreTier::Area, &error);
                Vec::new()
            }
        }
    }

    fn search_cell(&self, query: &Query) -> LocateResult {
        if !query.cell().is_empty() {
            let cells = self.fetch_cells(query);
            if !cells.is_empty() {
                let best = pick_best_cells(cells);
                debug!(cluster_size = best.len(), "selected cell cluster");
                let result = aggregate_cell_position(&best, self.source, &self.config);
                if result.found() {
                    return result;
                }
            }
        }

        if !query.cell_area().is_empty() {
            let areas = self.fetch_areas(query);
            if let Some(best) = pick_best_area(areas) {
                debug!(radius = best.radius, "falling back to lac-level area");
                return aggregate_area_position(&best, self.source, &self.config);
            }
        }

        LocateResult::Empty
    }
}

impl<S: CellStore> SearchStrategy for CellPositionStrategy<S> {
    type Output = LocateResult;

    /// Decline queries with no cell or area lookups at all; there is
    /// nothing to ask the datastore for.
    fn should_search(&self, query: &Query) -> bool {
        !(query.cell().is_empty() && query.cell_area().is_empty())
    }

    fn search(&self, query: &Query) -> LocateResult {
        let result = self.search_cell(query);
        query.emit_source_stats(self.source, &result);
        result
    }
}
