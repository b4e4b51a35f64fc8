//! Deployment configuration for accuracy tiers and clamping bands.
//!
//! All values are meters. Defaults match the production deployment; tests
//! and alternate deployments inject their own values rather than patching
//! constants.

use serde::{Deserialize, Serialize};

/// Default upper bound for the `High` accuracy tier.
pub const DEFAULT_HIGH_MAX_METERS: f64 = 1_000.0;
/// Default upper bound for the `Medium` accuracy tier.
pub const DEFAULT_MEDIUM_MAX_METERS: f64 = 40_000.0;

/// Default accuracy floor for per-cell estimates.
pub const DEFAULT_CELL_MIN_ACCURACY: f64 = 500.0;
/// Default accuracy ceiling for per-cell estimates.
pub const DEFAULT_CELL_MAX_ACCURACY: f64 = 50_000.0;
/// Default accuracy floor for area-level (lac) fallback estimates.
pub const DEFAULT_AREA_MIN_ACCURACY: f64 = 20_000.0;
/// Default accuracy ceiling for area-level (lac) fallback estimates.
pub const DEFAULT_AREA_MAX_ACCURACY: f64 = 500_000.0;

/// Step-function thresholds mapping an accuracy radius in meters onto a
/// [`DataAccuracy`](crate::result::DataAccuracy) tier.
///
/// The mapping is total and monotonic: a smaller radius never yields a
/// worse tier. Radii at or below `high_max` are `High`, at or below
/// `medium_max` are `Medium`, everything else is `Low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyThresholds {
    pub high_max: f64,
    pub medium_max: f64,
}

impl Default for AccuracyThresholds {
    fn default() -> Self {
        Self {
            high_max: DEFAULT_HIGH_MAX_METERS,
            medium_max: DEFAULT_MEDIUM_MAX_METERS,
        }
    }
}

/// Accuracy clamping bands for the two cell search tiers.
///
/// The per-cell band must be narrower than the area band: cell-level
/// estimates are inherently more precise than a lac-level fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellConfig {
    /// Minimum accuracy fed to position fusion for a cell cluster.
    pub cell_min_accuracy: f64,
    /// Ceiling applied to the fused cell cluster accuracy.
    pub cell_max_accuracy: f64,
    /// Floor applied to an area-level fallback accuracy.
    pub area_min_accuracy: f64,
    /// Ceiling applied to an area-level fallback accuracy.
    pub area_max_accuracy: f64,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            cell_min_accuracy: DEFAULT_CELL_MIN_ACCURACY,
            cell_max_accuracy: DEFAULT_CELL_MAX_ACCURACY,
            area_min_accuracy: DEFAULT_AREA_MIN_ACCURACY,
            area_max_accuracy: DEFAULT_AREA_MAX_ACCURACY,
        }
    }
}
