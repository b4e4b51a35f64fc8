//! Region resolution from mobile country codes.
//!
//! A mobile country code maps to zero or more candidate regions; the
//! resolver emits one region result per candidate, without deduplication,
//! since downstream fusion weighs candidate multiplicity.

use std::collections::BTreeSet;

use tracing::debug;

use crate::query::Query;
use crate::result::{DataSource, LocateResult, Region, ResultList};
use crate::strategy::SearchStrategy;

/// One candidate region for a mobile country code.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionInfo {
    /// ISO 3166-1 alpha-2 country code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Radius in meters covering the region, used directly as the
    /// resulting estimate's accuracy.
    pub radius: f64,
}

/// Resolution of mobile country codes to candidate regions.
///
/// May return an empty list for unknown codes; never fails.
pub trait Geocoder: Send + Sync {
    fn regions_for_mcc(&self, mcc: u16) -> Vec<RegionInfo>;
}

/// Region search over the cells present in a query.
pub struct CellRegionStrategy<G> {
    geocoder: G,
    source: DataSource,
}

impl<G: Geocoder> CellRegionStrategy<G> {
    pub fn new(geocoder: G, source: DataSource) -> Self {
        Self { geocoder, source }
    }
}

impl<G: Geocoder> SearchStrategy for CellRegionStrategy<G> {
    type Output = ResultList;

    fn should_search(&self, query: &Query) -> bool {
        !(query.cell().is_empty() && query.cell_area().is_empty())
    }

    /// Collect the distinct mcc set across all cell and area lookups,
    /// resolve each code, and return one result per candidate region in
    /// discovery order (ascending mcc, geocoder order within one mcc).
    fn search(&self, query: &Query) -> ResultList {
        let mut codes = BTreeSet::new();
        for lookup in query.cell().iter().chain(query.cell_area()) {
            codes.insert(lookup.mcc);
        }

        let mut results = ResultList::new();
        for mcc in codes {
            for candidate in self.geocoder.regions_for_mcc(mcc) {
                results.add(LocateResult::Region(Region::new(
                    candidate.code,
                    candidate.name,
                    candidate.radius,
                    self.source,
                )));
            }
        }
        debug!(candidates = results.len(), "resolved region candidates");
        query.emit_source_stats(self.source, &results.best());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellLookup, RadioType};

    fn lookup(mcc: u16, cid: u32) -> CellLookup {
        CellLookup {
            radio: RadioType::Gsm,
            mcc,
            mnc: 1,
            lac: 1,
            cid,
        }
    }

    struct TableGeocoder;

    impl Geocoder for TableGeocoder {
        fn regions_for_mcc(&self, mcc: u16) -> Vec<RegionInfo> {
            match mcc {
                234 | 235 => vec![RegionInfo {
                    code: "GB".into(),
                    name: "United Kingdom".into(),
                    radius: 540_000.0,
                }],
                // The US mcc resolves to multiple candidates.
                310 => vec![
                    RegionInfo {
                        code: "US".into(),
                        name: "United States".into(),
                        radius: 2_970_000.0,
                    },
                    RegionInfo {
                        code: "GU".into(),
                        name: "Guam".into(),
                        radius: 30_000.0,
                    },
                ],
                _ => Vec::new(),
            }
        }
    }

    fn strategy() -> CellRegionStrategy<TableGeocoder> {
        CellRegionStrategy::new(TableGeocoder, DataSource::Internal)
    }

    #[test]
    fn test_mcc_union_across_cell_and_area_lookups() {
        // The same mcc in both lists resolves once.
        let query = Query::new(vec![lookup(234, 1)], vec![lookup(234, 0)]);
        let results = strategy().search(&query);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_one_result_per_candidate_region() {
        let query = Query::new(vec![lookup(310, 1)], Vec::new());
        let results = strategy().search(&query);
        assert_eq!(results.len(), 2);
        let codes: Vec<_> = results
            .iter()
            .filter_map(|r| match r {
                LocateResult::Region(region) => region.country_code().map(str::to_owned),
                _ => None,
            })
            .collect();
        assert_eq!(codes, vec!["US", "GU"]);
    }

    #[test]
    fn test_duplicate_regions_across_mccs_are_kept() {
        // Both UK mccs resolve to GB; the duplicates are intentional.
        let query = Query::new(vec![lookup(234, 1), lookup(235, 2)], Vec::new());
        let results = strategy().search(&query);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(result.found());
            assert_eq!(result.source(), Some(DataSource::Internal));
        }
    }

    #[test]
    fn test_unknown_mcc_is_empty_not_an_error() {
        let query = Query::new(vec![lookup(999, 1)], Vec::new());
        let results = strategy().search(&query);
        assert!(results.is_empty());
        assert_eq!(results.best(), LocateResult::Empty);
    }

    #[test]
    fn test_candidates_emitted_in_ascending_mcc_order() {
        let query = Query::new(vec![lookup(310, 1), lookup(234, 2)], Vec::new());
        let results = strategy().search(&query);
        let codes: Vec<_> = results
            .iter()
            .filter_map(|r| match r {
                LocateResult::Region(region) => region.country_code().map(str::to_owned),
                _ => None,
            })
            .collect();
        assert_eq!(codes, vec!["GB", "US", "GU"]);
    }

    #[test]
    fn test_guard_requires_some_lookup() {
        let strategy = strategy();
        assert!(!strategy.should_search(&Query::new(Vec::new(), Vec::new())));
        assert!(strategy.should_search(&Query::new(Vec::new(), vec![lookup(234, 0)])));
    }

    #[test]
    fn test_region_results_carry_radius_as_accuracy() {
        let query = Query::new(vec![lookup(234, 1)], Vec::new());
        let results = strategy().search(&query);
        let LocateResult::Region(region) = results.iter().next().unwrap() else {
            panic!("expected a region");
        };
        assert_eq!(region.accuracy(), Some(540_000.0));
    }
}
