//! Cluster selection: choosing the best area group among raw records.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::types::{AreaRecord, CellRecord};

fn min_radius(group: &[CellRecord]) -> f64 {
    group
        .iter()
        .map(|cell| cell.radius)
        .fold(f64::INFINITY, f64::min)
}

/// Group cells by their area and pick the best group: the one with the
/// most members, ties broken by the group whose most precise member has
/// the smallest radius.
///
/// The winning group is returned in input order; an empty input yields an
/// empty group.
pub fn pick_best_cells(cells: Vec<CellRecord>) -> Vec<CellRecord> {
    // BTreeMap keeps full ties deterministic across runs.
    let mut groups: BTreeMap<_, Vec<CellRecord>> = BTreeMap::new();
    for cell in cells {
        groups.entry(cell.area_key).or_default().push(cell);
    }

    groups
        .into_values()
        .max_by(|a, b| {
            a.len().cmp(&b.len()).then_with(|| {
                // Smaller minimum radius ranks higher, so compare reversed.
                min_radius(b)
                    .partial_cmp(&min_radius(a))
                    .unwrap_or(Ordering::Equal)
            })
        })
        .unwrap_or_default()
}

/// Pick the most precise single area: the one with the smallest radius.
pub fn pick_best_area(areas: Vec<AreaRecord>) -> Option<AreaRecord> {
    areas.into_iter().min_by(|a, b| {
        a.radius
            .partial_cmp(&b.radius)
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::types::{AreaKey, RadioType};

    fn area(lac: u16) -> AreaKey {
        AreaKey {
            radio: RadioType::Gsm,
            mcc: 234,
            mnc: 15,
            lac,
        }
    }

    fn cell(lac: u16, radius: f64) -> CellRecord {
        CellRecord {
            lat: 51.5,
            lon: -0.1,
            radius,
            area_key: area(lac),
        }
    }

    #[test]
    fn test_largest_group_wins_regardless_of_radii() {
        let cells = vec![
            cell(1, 5_000.0),
            cell(1, 4_000.0),
            cell(1, 6_000.0),
            cell(2, 10.0),
        ];
        let best = pick_best_cells(cells);
        assert_eq!(best.len(), 3);
        assert!(best.iter().all(|c| c.area_key == area(1)));
    }

    #[test]
    fn test_count_tie_broken_by_most_precise_member() {
        let cells = vec![
            cell(1, 50.0),
            cell(1, 200.0),
            cell(2, 30.0),
            cell(2, 400.0),
        ];
        let best = pick_best_cells(cells);
        assert_eq!(best.len(), 2);
        assert!(best.iter().all(|c| c.area_key == area(2)));
    }

    #[test]
    fn test_empty_input_yields_empty_group() {
        assert!(pick_best_cells(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_group_passes_through() {
        let cells = vec![cell(9, 100.0), cell(9, 300.0)];
        let best = pick_best_cells(cells);
        assert_eq!(best.len(), 2);
    }

    #[test]
    fn test_best_area_is_smallest_radius() {
        let areas = vec![
            AreaRecord {
                lat: 51.5,
                lon: -0.1,
                radius: 500.0,
                area_key: area(1),
            },
            AreaRecord {
                lat: 48.8,
                lon: 2.3,
                radius: 200.0,
                area_key: area(2),
            },
        ];
        let best = pick_best_area(areas).unwrap();
        assert_eq!(best.radius, 200.0);
        assert_eq!(best.area_key, area(2));
    }

    #[test]
    fn test_best_area_of_empty_is_none() {
        assert!(pick_best_area(Vec::new()).is_none());
    }
}
