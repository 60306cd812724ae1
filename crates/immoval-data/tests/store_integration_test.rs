//! Integration tests for the reference data store
//!
//! Loads both tables from on-disk CSV fixtures and exercises the lookups
//! end to end, plus property tests for the nearest-location contract.

use std::io::Write;
use tempfile::NamedTempFile;

use immoval_data::{CategoricalDomains, LocationIndex, LocationTable, ReferenceStore};
use immoval_core::models::LocationRecord;
use proptest::prelude::*;

const PROPERTY_HEADER: &str = "Locality,Type_of_Property,Subtype_of_Property,State_of_the_Building,Province,Surface_area_plot_of_land,Distance_to_Brussels,Distance_to_Nearest_Airport,total_income,Employment Rate (%),Unemployment Rate (%),Population Density,Total_Area,Total_Amenities,Average_Room_Size,Amenities_Ratio,Airport_Brussels_Interaction,Density_Unemployment_Ratio,Region_Cluster";

fn fixture_files() -> (NamedTempFile, NamedTempFile) {
    let mut features = NamedTempFile::new().unwrap();
    writeln!(features, "{}", PROPERTY_HEADER).unwrap();
    writeln!(
        features,
        "1000,Apartment,APARTMENT,GOOD,Brussels-Capital,120,0.5,11,35000,62,8.5,7500,180,3,30,0.6,5.5,882.35,3"
    )
    .unwrap();
    writeln!(
        features,
        "9000,House,VILLA,AS_NEW,East Flanders,450,55,60,41000,68,5.1,1600,420,5,52,0.8,3300,313.7,1"
    )
    .unwrap();

    let mut locations = NamedTempFile::new().unwrap();
    writeln!(locations, "postal_code,municipality,province,lat,lon").unwrap();
    writeln!(locations, "1000,Brussels,Brussels-Capital,50.8503,4.3517").unwrap();
    writeln!(locations, "2000,Antwerp,Antwerp,51.2194,4.4025").unwrap();
    writeln!(locations, "9000,Ghent,East Flanders,51.0543,3.7174").unwrap();

    (features, locations)
}

#[test]
fn test_load_and_enumerate_domains() {
    let (features, locations) = fixture_files();
    let store = ReferenceStore::load(features.path(), locations.path()).unwrap();

    assert_eq!(store.properties.len(), 2);
    assert_eq!(store.locations.len(), 3);

    let domains = CategoricalDomains::from_table(&store.properties);
    assert_eq!(domains.localities, vec!["1000", "9000"]);
    assert_eq!(domains.property_types, vec!["Apartment", "House"]);
    assert_eq!(domains.property_subtypes, vec!["APARTMENT", "VILLA"]);
    assert_eq!(domains.building_conditions, vec!["GOOD", "AS_NEW"]);
}

#[test]
fn test_load_then_resolve_location() {
    let (features, locations) = fixture_files();
    let store = ReferenceStore::load(features.path(), locations.path()).unwrap();
    let index = LocationIndex::new(store.locations);

    let hit = index.nearest(51.2, 4.41).unwrap();
    assert_eq!(hit.postal_code, "2000");
    assert_eq!(hit.municipality, "Antwerp");
}

#[test]
fn test_missing_files_are_fatal() {
    let (features, _) = fixture_files();
    let err = ReferenceStore::load(features.path(), std::path::Path::new("/no/such/file.csv"))
        .unwrap_err();
    assert!(matches!(err, immoval_core::ImmovalError::DataLoad { .. }));
}

fn arbitrary_table() -> impl Strategy<Value = Vec<LocationRecord>> {
    prop::collection::vec(
        (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lon)| LocationRecord {
            postal_code: "0000".to_string(),
            municipality: "M".to_string(),
            province: "P".to_string(),
            lat,
            lon,
        }),
        1..40,
    )
}

proptest! {
    /// Querying at an existing row's coordinate returns a row at exactly
    /// that coordinate (the first such row when duplicates exist).
    #[test]
    fn prop_exact_coordinate_resolves_to_itself(
        rows in arbitrary_table(),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = rows[pick.index(rows.len())].clone();
        let index = LocationIndex::new(LocationTable::from_records(rows));

        let hit = index.nearest(target.lat, target.lon).unwrap();
        prop_assert_eq!(hit.lat, target.lat);
        prop_assert_eq!(hit.lon, target.lon);
    }

    /// A non-empty table always resolves, no matter how far away the click.
    #[test]
    fn prop_nearest_is_total_on_nonempty_tables(
        rows in arbitrary_table(),
        lat in -90.0f64..90.0,
        lon in -180.0f64..180.0,
    ) {
        let index = LocationIndex::new(LocationTable::from_records(rows));
        prop_assert!(index.nearest(lat, lon).is_ok());
    }
}
