//! Category and feature records as returned by the catalog API.
//!
//! Both lists come from the remote API as JSON arrays. The `hours` field on a
//! feature is loosely typed upstream and arrives either as a JSON number or as
//! a numeric string, so it gets a custom deserializer that normalizes both
//! shapes to `f64`.

use serde::Deserialize;

/// A grouping of app features sharing a cost profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A selectable unit of work with an hours estimate, belonging to one category
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub id: i64,
    /// Unique within its category; used as the selection key
    pub name: String,
    /// Foreign key to `Category::id`
    pub category: i64,
    #[serde(deserialize_with = "hours_from_number_or_string")]
    pub hours: f64,
}

// The API emits hours as either a number or a numeric string
fn hours_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct HoursVisitor;

    impl<'de> Visitor<'de> for HoursVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid hours value: {:?}", value)))
        }
    }

    deserializer.deserialize_any(HoursVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_json() {
        let json = r#"{"id": 1, "name": "E-commerce"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.name, "E-commerce");
    }

    #[test]
    fn test_feature_hours_from_number() {
        let json = r#"{"id": 1, "name": "Login", "category": 1, "hours": 5}"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.hours, 5.0);
    }

    #[test]
    fn test_feature_hours_from_float() {
        let json = r#"{"id": 1, "name": "Login", "category": 1, "hours": 7.5}"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.hours, 7.5);
    }

    #[test]
    fn test_feature_hours_from_string() {
        let json = r#"{"id": 2, "name": "Chat", "category": 1, "hours": "10"}"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.hours, 10.0);
    }

    #[test]
    fn test_feature_hours_from_decimal_string() {
        let json = r#"{"id": 2, "name": "Chat", "category": 1, "hours": "2.25"}"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.hours, 2.25);
    }

    #[test]
    fn test_feature_hours_rejects_non_numeric_string() {
        let json = r#"{"id": 2, "name": "Chat", "category": 1, "hours": "lots"}"#;
        let result: Result<Feature, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_feature_list_from_json_array() {
        let json = r#"[
            {"id": 1, "name": "Login", "category": 1, "hours": 5},
            {"id": 2, "name": "Push", "category": 2, "hours": "3"}
        ]"#;
        let features: Vec<Feature> = serde_json::from_str(json).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name, "Login");
        assert_eq!(features[1].category, 2);
        assert_eq!(features[1].hours, 3.0);
    }
}
