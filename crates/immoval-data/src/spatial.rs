//! Spatial lookups over the location coordinate table.
//!
//! Nearest-location resolution works in raw (lat, lon) space with squared
//! Euclidean distance. At city/region scale the flat-earth approximation is
//! accepted; no projection correction is applied.

use geo::Point;
use rstar::{RTree, RTreeObject, AABB};

use immoval_core::error::{ImmovalError, Result};
use immoval_core::models::LocationRecord;

use crate::loader::LocationTable;

/// A location row indexed for envelope queries.
#[derive(Debug, Clone, PartialEq)]
struct IndexedLocation {
    /// Row index into the backing table
    idx: usize,
    point: Point<f64>,
}

impl RTreeObject for IndexedLocation {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.point.y(), self.point.x()])
    }
}

/// Read-only spatial index over the location table.
///
/// The R*-tree serves the map marker layer's bounding-envelope query. The
/// nearest lookup deliberately scans the table instead: ties must break to
/// the first table occurrence, which a strict `<` scan in row order gives
/// and a tree traversal does not guarantee.
#[derive(Debug)]
pub struct LocationIndex {
    table: LocationTable,
    tree: RTree<IndexedLocation>,
}

impl LocationIndex {
    pub fn new(table: LocationTable) -> Self {
        let indexed: Vec<IndexedLocation> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| IndexedLocation {
                idx,
                point: Point::new(row.lon, row.lat),
            })
            .collect();

        Self { table, tree: RTree::bulk_load(indexed) }
    }

    pub fn records(&self) -> &[LocationRecord] {
        self.table.rows()
    }

    /// Resolve a clicked coordinate to the closest known location.
    ///
    /// Minimizes squared Euclidean distance in (lat, lon); ties break to the
    /// first occurrence in table order. There is no distance cutoff: a click
    /// far outside every known location still resolves to the closest row.
    pub fn nearest(&self, lat: f64, lon: f64) -> Result<&LocationRecord> {
        let mut best: Option<(&LocationRecord, f64)> = None;

        for row in self.table.rows() {
            let d_lat = row.lat - lat;
            let d_lon = row.lon - lon;
            let dist = d_lat * d_lat + d_lon * d_lon;

            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((row, dist)),
            }
        }

        best.map(|(row, _)| row).ok_or_else(|| ImmovalError::EmptyTable {
            table: "location_coordinates".to_string(),
        })
    }

    /// All locations inside a (lat, lon) bounding envelope, in table order.
    /// Backs the map's visible-bounds marker layer.
    pub fn within_envelope(&self, min: (f64, f64), max: (f64, f64)) -> Vec<&LocationRecord> {
        let envelope = AABB::from_corners([min.0, min.1], [max.0, max.1]);

        let mut hits: Vec<usize> =
            self.tree.locate_in_envelope(&envelope).map(|loc| loc.idx).collect();
        hits.sort_unstable();

        hits.into_iter().map(|idx| &self.table.rows()[idx]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(postal: &str, lat: f64, lon: f64) -> LocationRecord {
        LocationRecord {
            postal_code: postal.to_string(),
            municipality: format!("Municipality {}", postal),
            province: "Test".to_string(),
            lat,
            lon,
        }
    }

    fn sample_index() -> LocationIndex {
        LocationIndex::new(LocationTable::from_records(vec![
            location("1000", 50.8503, 4.3517),
            location("2000", 51.2194, 4.4025),
            location("9000", 51.0543, 3.7174),
        ]))
    }

    #[test]
    fn test_exact_coordinate_returns_that_row() {
        let index = sample_index();
        let hit = index.nearest(51.0543, 3.7174).unwrap();
        assert_eq!(hit.postal_code, "9000");
    }

    #[test]
    fn test_far_away_click_still_resolves() {
        let index = sample_index();
        // Way outside the Belgian bounding envelope; no cutoff applies.
        // Ghent is the westernmost row, so it wins for a far-southwest click.
        let hit = index.nearest(35.0, -20.0).unwrap();
        assert_eq!(hit.postal_code, "9000");
    }

    #[test]
    fn test_tie_breaks_to_first_occurrence() {
        let index = LocationIndex::new(LocationTable::from_records(vec![
            location("1000", 50.0, 4.0),
            location("1050", 50.0, 4.0),
        ]));

        let hit = index.nearest(50.0, 4.0).unwrap();
        assert_eq!(hit.postal_code, "1000");
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let index = LocationIndex::new(LocationTable::from_records(vec![]));
        let err = index.nearest(50.0, 4.0).unwrap_err();
        assert!(matches!(err, ImmovalError::EmptyTable { .. }));
    }

    #[test]
    fn test_envelope_query_in_table_order() {
        let index = sample_index();
        // Envelope covering Brussels and Ghent but not Antwerp
        let hits = index.within_envelope((50.5, 3.5), (51.1, 4.39));
        let postals: Vec<&str> = hits.iter().map(|r| r.postal_code.as_str()).collect();
        assert_eq!(postals, vec!["1000", "9000"]);
    }

    #[test]
    fn test_envelope_miss_is_empty() {
        let index = sample_index();
        let hits = index.within_envelope((0.0, 0.0), (1.0, 1.0));
        assert!(hits.is_empty());
    }
}
