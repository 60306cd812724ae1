use serde::{Deserialize, Serialize};

/// The eleven fields the model treats as discrete symbols. Membership here,
/// not the runtime representation, is what makes a field categorical: the
/// amenity flags hold the literal strings `"0"` / `"1"` and still belong to
/// this set, exactly as in the training schema.
pub const CATEGORICAL_FIELDS: [&str; 11] = [
    "Locality",
    "Type_of_Property",
    "Subtype_of_Property",
    "State_of_the_Building",
    "Fully_Equipped_Kitchen",
    "Terrace",
    "Garden",
    "Swimming_Pool",
    "Lift",
    "Municipality",
    "Province",
];

/// Every feature name in the training schema, in training column order.
pub const FIELD_NAMES: [&str; 32] = [
    "Price",
    "Locality",
    "Type_of_Property",
    "Subtype_of_Property",
    "State_of_the_Building",
    "Number_of_Rooms",
    "Living_Area",
    "Fully_Equipped_Kitchen",
    "Terrace",
    "Garden",
    "Surface_area_plot_of_land",
    "Number_of_Facades",
    "Swimming_Pool",
    "Lift",
    "Municipality",
    "Province",
    "Distance_to_Brussels",
    "Distance_to_Nearest_Airport",
    "total_income",
    "Employment Rate (%)",
    "Unemployment Rate (%)",
    "Population Density",
    "Total_Area",
    "Total_Amenities",
    "Average_Room_Size",
    "Amenities_Ratio",
    "Living_Area_log",
    "Total_Area_log",
    "total_income_log",
    "Airport_Brussels_Interaction",
    "Density_Unemployment_Ratio",
    "Region_Cluster",
];

/// A single feature value as the scorer sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

/// The exact single-row input schema the regression model was trained on.
///
/// Serde renames keep the serialized form byte-identical to the training
/// column names, including the percent-sign headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInputVector {
    /// Placeholder target column carried by the training frame; always 0.0.
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Locality")]
    pub locality: String,
    #[serde(rename = "Type_of_Property")]
    pub property_type: String,
    #[serde(rename = "Subtype_of_Property")]
    pub property_subtype: String,
    #[serde(rename = "State_of_the_Building")]
    pub building_condition: String,
    #[serde(rename = "Number_of_Rooms")]
    pub rooms: f64,
    #[serde(rename = "Living_Area")]
    pub living_area: f64,
    #[serde(rename = "Fully_Equipped_Kitchen")]
    pub kitchen: String,
    #[serde(rename = "Terrace")]
    pub terrace: String,
    #[serde(rename = "Garden")]
    pub garden: String,
    #[serde(rename = "Surface_area_plot_of_land")]
    pub surface_area_plot: f64,
    #[serde(rename = "Number_of_Facades")]
    pub facades: f64,
    #[serde(rename = "Swimming_Pool")]
    pub swimming_pool: String,
    #[serde(rename = "Lift")]
    pub lift: String,
    #[serde(rename = "Municipality")]
    pub municipality: String,
    #[serde(rename = "Province")]
    pub province: String,
    #[serde(rename = "Distance_to_Brussels")]
    pub distance_to_brussels: f64,
    #[serde(rename = "Distance_to_Nearest_Airport")]
    pub distance_to_airport: f64,
    #[serde(rename = "total_income")]
    pub total_income: f64,
    #[serde(rename = "Employment Rate (%)")]
    pub employment_rate: f64,
    #[serde(rename = "Unemployment Rate (%)")]
    pub unemployment_rate: f64,
    #[serde(rename = "Population Density")]
    pub population_density: f64,
    #[serde(rename = "Total_Area")]
    pub total_area: f64,
    #[serde(rename = "Total_Amenities")]
    pub total_amenities: f64,
    #[serde(rename = "Average_Room_Size")]
    pub average_room_size: f64,
    #[serde(rename = "Amenities_Ratio")]
    pub amenities_ratio: f64,
    #[serde(rename = "Living_Area_log")]
    pub living_area_log: f64,
    #[serde(rename = "Total_Area_log")]
    pub total_area_log: f64,
    #[serde(rename = "total_income_log")]
    pub total_income_log: f64,
    #[serde(rename = "Airport_Brussels_Interaction")]
    pub airport_brussels_interaction: f64,
    #[serde(rename = "Density_Unemployment_Ratio")]
    pub density_unemployment_ratio: f64,
    #[serde(rename = "Region_Cluster")]
    pub region_cluster: f64,
}

impl ModelInputVector {
    /// Look up a feature by its training-schema name.
    ///
    /// The match is exhaustive over [`FIELD_NAMES`]; an unknown name yields
    /// `None` and is left to the scorer's default-direction rule.
    pub fn feature(&self, name: &str) -> Option<FeatureValue<'_>> {
        let value = match name {
            "Price" => FeatureValue::Numeric(self.price),
            "Locality" => FeatureValue::Categorical(&self.locality),
            "Type_of_Property" => FeatureValue::Categorical(&self.property_type),
            "Subtype_of_Property" => FeatureValue::Categorical(&self.property_subtype),
            "State_of_the_Building" => FeatureValue::Categorical(&self.building_condition),
            "Number_of_Rooms" => FeatureValue::Numeric(self.rooms),
            "Living_Area" => FeatureValue::Numeric(self.living_area),
            "Fully_Equipped_Kitchen" => FeatureValue::Categorical(&self.kitchen),
            "Terrace" => FeatureValue::Categorical(&self.terrace),
            "Garden" => FeatureValue::Categorical(&self.garden),
            "Surface_area_plot_of_land" => FeatureValue::Numeric(self.surface_area_plot),
            "Number_of_Facades" => FeatureValue::Numeric(self.facades),
            "Swimming_Pool" => FeatureValue::Categorical(&self.swimming_pool),
            "Lift" => FeatureValue::Categorical(&self.lift),
            "Municipality" => FeatureValue::Categorical(&self.municipality),
            "Province" => FeatureValue::Categorical(&self.province),
            "Distance_to_Brussels" => FeatureValue::Numeric(self.distance_to_brussels),
            "Distance_to_Nearest_Airport" => FeatureValue::Numeric(self.distance_to_airport),
            "total_income" => FeatureValue::Numeric(self.total_income),
            "Employment Rate (%)" => FeatureValue::Numeric(self.employment_rate),
            "Unemployment Rate (%)" => FeatureValue::Numeric(self.unemployment_rate),
            "Population Density" => FeatureValue::Numeric(self.population_density),
            "Total_Area" => FeatureValue::Numeric(self.total_area),
            "Total_Amenities" => FeatureValue::Numeric(self.total_amenities),
            "Average_Room_Size" => FeatureValue::Numeric(self.average_room_size),
            "Amenities_Ratio" => FeatureValue::Numeric(self.amenities_ratio),
            "Living_Area_log" => FeatureValue::Numeric(self.living_area_log),
            "Total_Area_log" => FeatureValue::Numeric(self.total_area_log),
            "total_income_log" => FeatureValue::Numeric(self.total_income_log),
            "Airport_Brussels_Interaction" => {
                FeatureValue::Numeric(self.airport_brussels_interaction)
            }
            "Density_Unemployment_Ratio" => FeatureValue::Numeric(self.density_unemployment_ratio),
            "Region_Cluster" => FeatureValue::Numeric(self.region_cluster),
            _ => return None,
        };
        Some(value)
    }

    /// Whether a field name is in the fixed categorical subset.
    pub fn is_categorical(name: &str) -> bool {
        CATEGORICAL_FIELDS.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vector() -> ModelInputVector {
        ModelInputVector {
            price: 0.0,
            locality: "1000".to_string(),
            property_type: "Apartment".to_string(),
            property_subtype: "APARTMENT".to_string(),
            building_condition: "GOOD".to_string(),
            rooms: 2.0,
            living_area: 60.0,
            kitchen: "0".to_string(),
            terrace: "0".to_string(),
            garden: "0".to_string(),
            surface_area_plot: 120.0,
            facades: 2.0,
            swimming_pool: "0".to_string(),
            lift: "0".to_string(),
            municipality: "Brussels".to_string(),
            province: "Brussels-Capital".to_string(),
            distance_to_brussels: 0.5,
            distance_to_airport: 11.0,
            total_income: 35000.0,
            employment_rate: 62.0,
            unemployment_rate: 8.5,
            population_density: 7500.0,
            total_area: 180.0,
            total_amenities: 3.0,
            average_room_size: 30.0,
            amenities_ratio: 0.6,
            living_area_log: 60.0_f64.ln(),
            total_area_log: 180.0_f64.ln(),
            total_income_log: 35000.0_f64.ln(),
            airport_brussels_interaction: 5.5,
            density_unemployment_ratio: 882.35,
            region_cluster: 3.0,
        }
    }

    #[test]
    fn test_every_schema_name_resolves() {
        let vector = sample_vector();
        for name in FIELD_NAMES {
            assert!(vector.feature(name).is_some(), "unresolved field: {}", name);
        }
        assert!(vector.feature("Not_A_Feature").is_none());
    }

    #[test]
    fn test_categorical_partition_matches_declared_list() {
        let vector = sample_vector();
        for name in FIELD_NAMES {
            let is_cat = matches!(vector.feature(name), Some(FeatureValue::Categorical(_)));
            assert_eq!(
                is_cat,
                ModelInputVector::is_categorical(name),
                "partition mismatch for {}",
                name
            );
        }
    }

    #[test]
    fn test_serialized_names_match_training_schema() {
        let vector = sample_vector();
        let json = serde_json::to_value(&vector).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FIELD_NAMES.len());
        for name in FIELD_NAMES {
            assert!(object.contains_key(name), "missing serialized column: {}", name);
        }
        // Amenity flags serialize as strings, not numbers
        assert!(object["Terrace"].is_string());
        assert!(object["Living_Area"].is_number());
    }
}
