//! Result model: position, region and empty estimates plus the ranking
//! rules for choosing between them.
//!
//! Every search strategy produces values of this module's types. A result
//! is a frozen snapshot: constructed once per query, rounded on
//! construction, never persisted and never mutated. Ranking between
//! results of differing origin is done by [`LocateResult::more_accurate`],
//! which encodes the trust-before-precision decision rule.

mod types;


pub use types::{DataAccuracy, DataSource, Fallback, ResultList};

use crate::config::AccuracyThresholds;
use crate::geomath::distance_meters;
use crate::query::Query;

/// Decimal places kept on coordinates and accuracy values.
///
/// Seven decimal places is ~1cm of latitude, below any real-world radio
/// positioning precision.
pub const DEGREE_DECIMAL_PLACES: u32 = 7;

fn round_value(value: f64) -> f64 {
    let factor = 10f64.powi(DEGREE_DECIMAL_PLACES as i32);
    (value * factor).round() / factor
}

/// A position estimate: lat/lon plus an uncertainty radius in meters.
///
/// All three fields are required for the estimate to count as found; a
/// `Position` missing any of them exists only as an intermediate value
/// and never wins a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    lat: Option<f64>,
    lon: Option<f64>,
    accuracy: Option<f64>,
    source: DataSource,
    fallback: Option<Fallback>,
}

impl Position {
    /// A complete position estimate. Coordinates and accuracy are rounded
    /// to [`DEGREE_DECIMAL_PLACES`].
    pub fn new(lat: f64, lon: f64, accuracy: f64, source: DataSource) -> Self {
        Self::from_parts(Some(lat), Some(lon), Some(accuracy), source)
    }

    /// A possibly-incomplete position estimate. Present fields are rounded.
    pub fn from_parts(
        lat: Option<f64>,
        lon: Option<f64>,
        accuracy: Option<f64>,
        source: DataSource,
    ) -> Self {
        Self {
            lat: lat.map(round_value),
            lon: lon.map(round_value),
            accuracy: accuracy.map(round_value),
            source,
            fallback: None,
        }
    }

    /// Tag this estimate as derived from a coarser signal.
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn fallback(&self) -> Option<Fallback> {
        self.fallback
    }

    pub fn found(&self) -> bool {
        self.lat.is_some() && self.lon.is_some() && self.accuracy.is_some()
    }

    pub fn data_accuracy(&self, thresholds: &AccuracyThresholds) -> DataAccuracy {
        match self.accuracy {
            Some(meters) => DataAccuracy::from_meters(meters, thresholds),
            None => DataAccuracy::None,
        }
    }

    /// Whether this position falls inside the *other* estimate's
    /// uncertainty circle.
    ///
    /// Asymmetric on purpose: the test uses the other's radius, not the
    /// minimum or the sum. Missing fields on either side never agree.
    pub fn agrees_with(&self, other: &Position) -> bool {
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            return false;
        };
        let (Some(other_lat), Some(other_lon), Some(other_accuracy)) =
            (other.lat, other.lon, other.accuracy)
        else {
            return false;
        };
        distance_meters(other_lat, other_lon, lat, lon) <= other_accuracy
    }

    /// The core ranking rule between two position estimates; see
    /// [`LocateResult::more_accurate`] for the contract.
    pub fn more_accurate(&self, other: &Position) -> bool {
        if !self.found() {
            return false;
        }
        if !other.found() {
            return true;
        }
        if self.source != other.source && self.source < other.source {
            return true;
        }
        match (self.accuracy, other.accuracy) {
            (Some(own), Some(theirs)) => self.agrees_with(other) && own < theirs,
            // Unreachable past the found() checks, but never rank blind.
            _ => false,
        }
    }
}

/// A country-level estimate.
///
/// Region estimates carry an accuracy radius (the region's size) but are
/// never more than low-confidence; the code and display name are the
/// required fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    country_code: Option<String>,
    country_name: Option<String>,
    accuracy: Option<f64>,
    source: DataSource,
}

impl Region {
    pub fn new(
        country_code: impl Into<String>,
        country_name: impl Into<String>,
        accuracy: f64,
        source: DataSource,
    ) -> Self {
        Self::from_parts(
            Some(country_code.into()),
            Some(country_name.into()),
            Some(accuracy),
            source,
        )
    }

    pub fn from_parts(
        country_code: Option<String>,
        country_name: Option<String>,
        accuracy: Option<f64>,
        source: DataSource,
    ) -> Self {
        Self {
            country_code,
            country_name,
            accuracy: accuracy.map(round_value),
            source,
        }
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn found(&self) -> bool {
        self.country_code.is_some() && self.country_name.is_some()
    }

    pub fn data_accuracy(&self) -> DataAccuracy {
        if self.found() {
            DataAccuracy::Low
        } else {
            DataAccuracy::None
        }
    }

    /// Two region estimates agree iff they name the same country.
    pub fn agrees_with(&self, other: &Region) -> bool {
        match (&self.country_code, &other.country_code) {
            (Some(own), Some(theirs)) => own == theirs,
            _ => false,
        }
    }

    /// Ranking between region estimates: found-ness, then source trust.
    /// There is no finer-than-country precision comparison.
    pub fn more_accurate(&self, other: &Region) -> bool {
        if !self.found() {
            return false;
        }
        if !other.found() {
            return true;
        }
        self.source < other.source
    }
}

/// A query result: nothing, a position, or a region.
///
/// Callers dispatch on the variant; there is no class hierarchy to probe.
/// `Empty` is the normal "no candidates" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LocateResult {
    #[default]
    Empty,
    Position(Position),
    Region(Region),
}

impl LocateResult {
    /// Whether every required field of the concrete variant is present.
    /// `Empty` has no required fields and is never found.
    pub fn found(&self) -> bool {
        match self {
            LocateResult::Empty => false,
            LocateResult::Position(position) => position.found(),
            LocateResult::Region(region) => region.found(),
        }
    }

    pub fn source(&self) -> Option<DataSource> {
        match self {
            LocateResult::Empty => None,
            LocateResult::Position(position) => Some(position.source()),
            LocateResult::Region(region) => Some(region.source()),
        }
    }

    pub fn fallback(&self) -> Option<Fallback> {
        match self {
            LocateResult::Position(position) => position.fallback(),
            _ => None,
        }
    }

    pub fn data_accuracy(&self, thresholds: &AccuracyThresholds) -> DataAccuracy {
        match self {
            LocateResult::Empty => DataAccuracy::None,
            LocateResult::Position(position) => position.data_accuracy(thresholds),
            LocateResult::Region(region) => region.data_accuracy(),
        }
    }

    /// Whether this result is consistent with `other`.
    ///
    /// `Empty` vacuously agrees with anything; mismatched variants never
    /// agree.
    pub fn agrees_with(&self, other: &LocateResult) -> bool {
        match (self, other) {
            (LocateResult::Empty, _) => true,
            (LocateResult::Position(own), LocateResult::Position(theirs)) => {
                own.agrees_with(theirs)
            }
            (LocateResult::Region(own), LocateResult::Region(theirs)) => own.agrees_with(theirs),
            _ => false,
        }
    }

    /// Whether this result satisfies the query's expected accuracy tier.
    ///
    /// Positions compare tiers (never raw meters); regions only need to
    /// be found; `Empty` never suffices.
    pub fn accurate_enough(&self, query: &Query) -> bool {
        match self {
            LocateResult::Empty => false,
            LocateResult::Position(position) => {
                position.data_accuracy(query.thresholds()) <= query.expected_accuracy()
            }
            LocateResult::Region(region) => region.found(),
        }
    }

    /// The core cross-result ranking rule, evaluated with short-circuit
    /// in this strict order:
    ///
    /// 1. an unfound result never beats anything;
    /// 2. a found result always beats an unfound one;
    /// 3. a strictly more authoritative source wins outright, regardless
    ///    of spatial agreement or numeric accuracy;
    /// 4. otherwise a position wins iff it agrees with the other *and* is
    ///    strictly more precise; a region never wins at this step.
    ///
    /// The trust override in step 3 makes the relation non-transitive
    /// across three or more mixed-trust results, so callers folding many
    /// results must fix the fold order; see
    /// [`fold_best`](crate::strategy::fold_best).
    pub fn more_accurate(&self, other: &LocateResult) -> bool {
        if !self.found() {
            return false;
        }
        if !other.found() {
            return true;
        }
        match (self, other) {
            (LocateResult::Position(own), LocateResult::Position(theirs)) => {
                own.more_accurate(theirs)
            }
            (LocateResult::Region(own), LocateResult::Region(theirs)) => own.more_accurate(theirs),
            // Mixed variants: only the source override can decide.
            _ => match (self.source(), other.source()) {
                (Some(own), Some(theirs)) => own != theirs && own < theirs,
                _ => false,
            },
        }
    }
}
