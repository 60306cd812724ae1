//! Categorical domain enumeration over the property feature table.

use std::collections::HashSet;

use crate::loader::PropertyTable;

/// Distinct values observed for each categorical selection field, in
/// order-preserving first-seen order. Used to populate form choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalDomains {
    pub localities: Vec<String>,
    pub property_types: Vec<String>,
    pub property_subtypes: Vec<String>,
    pub building_conditions: Vec<String>,
}

impl CategoricalDomains {
    /// Enumerate the domains. Pure and cheap; called once at startup.
    pub fn from_table(table: &PropertyTable) -> Self {
        Self {
            localities: distinct(table, |r| &r.locality),
            property_types: distinct(table, |r| &r.property_type),
            property_subtypes: distinct(table, |r| &r.property_subtype),
            building_conditions: distinct(table, |r| &r.building_condition),
        }
    }
}

fn distinct<F>(table: &PropertyTable, field: F) -> Vec<String>
where
    F: Fn(&immoval_core::models::PropertyRecord) -> &String,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in table.rows() {
        let value = field(row);
        if seen.insert(value.clone()) {
            values.push(value.clone());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use immoval_core::models::PropertyRecord;

    fn record(locality: &str, condition: &str) -> PropertyRecord {
        PropertyRecord {
            locality: locality.to_string(),
            building_condition: condition.to_string(),
            ..PropertyRecord::unknown()
        }
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let table = PropertyTable::from_records(vec![
            record("9000", "GOOD"),
            record("1000", "TO_RENOVATE"),
            record("9000", "GOOD"),
            record("2000", "AS_NEW"),
        ])
        .unwrap();

        let domains = CategoricalDomains::from_table(&table);
        assert_eq!(domains.localities, vec!["9000", "1000", "2000"]);
        assert_eq!(domains.building_conditions, vec!["GOOD", "TO_RENOVATE", "AS_NEW"]);
    }

    #[test]
    fn test_identical_inputs_enumerate_identically() {
        let rows = vec![record("1000", "GOOD"), record("2000", "JUST_RENOVATED")];
        let a = CategoricalDomains::from_table(&PropertyTable::from_records(rows.clone()).unwrap());
        let b = CategoricalDomains::from_table(&PropertyTable::from_records(rows).unwrap());
        assert_eq!(a, b);
    }
}
