//! Ordinal types and the result list container.

use crate::config::AccuracyThresholds;

use super::LocateResult;

/// Origin trust level of an estimate.
///
/// Declaration order is the ranking: a smaller value is strictly more
/// authoritative. This is a tie-break/override signal, never a distance
/// metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataSource {
    /// Curated internal cell database.
    Internal,
    /// Crowd-sourced cell database (OpenCellID-style).
    Ocid,
    /// Derived from another signal (e.g. an external fallback service).
    Fallback,
    /// Coarse IP-based geolocation.
    GeoIp,
}

/// Ordinal accuracy tier of an estimate.
///
/// Declaration order ranks tiers: a smaller value is more accurate, so
/// `a <= b` reads "a is at least as accurate as b". Tiers are compared
/// ordinally, never as raw meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataAccuracy {
    High,
    Medium,
    Low,
    /// No usable accuracy information.
    None,
}

impl DataAccuracy {
    /// Map an accuracy radius in meters onto a tier.
    ///
    /// Total and monotonic over the thresholds: a smaller radius never
    /// yields a worse tier. Non-finite input degrades to `Low`.
    pub fn from_meters(meters: f64, thresholds: &AccuracyThresholds) -> Self {
        if meters <= thresholds.high_max {
            DataAccuracy::High
        } else if meters <= thresholds.medium_max {
            DataAccuracy::Medium
        } else {
            DataAccuracy::Low
        }
    }
}

/// Marker for estimates derived from a coarser signal than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// Derived from area-level (lac) data rather than per-cell data.
    Lac,
    /// Derived from IP-based geolocation.
    Ip,
}

impl Fallback {
    /// Wire token used by the public API for this marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            Fallback::Lac => "lacf",
            Fallback::Ip => "ipf",
        }
    }
}

/// An ordered sequence of results.
///
/// Preserves insertion order and permits duplicates; region searches
/// deliberately emit one entry per (mcc, candidate) pair without
/// deduplication, and downstream fusion counts depend on that.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    results: Vec<LocateResult>,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: LocateResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocateResult> {
        self.results.iter()
    }

    /// The best entry under a left-to-right [`fold_best`] fold, or
    /// [`LocateResult::Empty`] for an empty list.
    ///
    /// [`fold_best`]: crate::strategy::fold_best
    pub fn best(&self) -> LocateResult {
        crate::strategy::fold_best(self.results.iter().cloned())
    }
}

impl From<Vec<LocateResult>> for ResultList {
    fn from(results: Vec<LocateResult>) -> Self {
        Self { results }
    }
}

impl IntoIterator for ResultList {
    type Item = LocateResult;
    type IntoIter = std::vec::IntoIter<LocateResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a LocateResult;
    type IntoIter = std::slice::Iter<'a, LocateResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
