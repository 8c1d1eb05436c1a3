//! Type inference tests

use serde_json::{json, Value};
use table_builder_sdk::models::{Dataset, SemanticType};
use table_builder_sdk::{classify_column, classify_value, detect_columns};

fn dataset(rows: Value) -> Dataset {
    serde_json::from_value(rows).expect("test rows deserialize")
}

mod classify_value_tests {
    use super::*;

    #[test]
    fn test_every_json_shape_classifies() {
        assert_eq!(classify_value(&Value::Null), SemanticType::String);
        assert_eq!(classify_value(&json!(true)), SemanticType::Boolean);
        assert_eq!(classify_value(&json!(3.5)), SemanticType::Number);
        assert_eq!(classify_value(&json!(0)), SemanticType::Number);
        assert_eq!(classify_value(&json!({"a": 1})), SemanticType::Object);
        assert_eq!(classify_value(&json!([1, 2])), SemanticType::Object);
        assert_eq!(classify_value(&json!("hello")), SemanticType::String);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let value = json!("2024-06-15");
        assert_eq!(classify_value(&value), classify_value(&value));
        assert_eq!(classify_value(&value), SemanticType::Date);
    }

    #[test]
    fn test_date_patterns() {
        assert_eq!(classify_value(&json!("2024-06-15")), SemanticType::Date);
        assert_eq!(classify_value(&json!("06/15/2024")), SemanticType::Date);
        assert_eq!(classify_value(&json!("06-15-2024")), SemanticType::Date);
        // Prefix match with a trailing time component still counts
        assert_eq!(
            classify_value(&json!("2024-06-15 10:00")),
            SemanticType::Date
        );
        // Pattern shapes that are not real dates do not
        assert_eq!(classify_value(&json!("2024-99-99")), SemanticType::String);
        assert_eq!(classify_value(&json!("15/06/2024")), SemanticType::String);
        assert_eq!(classify_value(&json!("not a date")), SemanticType::String);
    }
}

mod classify_column_tests {
    use super::*;

    #[test]
    fn test_modal_type_wins() {
        let data = dataset(json!([
            { "v": 1 },
            { "v": 2 },
            { "v": "x" },
            { "v": 3 },
            { "v": "y" }
        ]));
        assert_eq!(classify_column(&data, "v"), SemanticType::Number);
    }

    #[test]
    fn test_tie_breaks_to_first_seen() {
        let data = dataset(json!([
            { "v": "x" },
            { "v": 1 },
            { "v": "y" },
            { "v": 2 }
        ]));
        assert_eq!(classify_column(&data, "v"), SemanticType::String);

        let data = dataset(json!([
            { "v": 1 },
            { "v": "x" },
            { "v": 2 },
            { "v": "y" }
        ]));
        assert_eq!(classify_column(&data, "v"), SemanticType::Number);
    }

    #[test]
    fn test_only_first_five_rows_are_sampled() {
        // Rows past the window are all strings; the sample is numeric.
        let data = dataset(json!([
            { "v": 1 }, { "v": 2 }, { "v": 3 }, { "v": 4 }, { "v": 5 },
            { "v": "a" }, { "v": "b" }, { "v": "c" }, { "v": "d" },
            { "v": "e" }, { "v": "f" }, { "v": "g" }
        ]));
        assert_eq!(classify_column(&data, "v"), SemanticType::Number);
    }

    #[test]
    fn test_missing_fields_read_as_null() {
        let data = dataset(json!([
            { "other": 1 },
            { "other": 2 }
        ]));
        assert_eq!(classify_column(&data, "v"), SemanticType::String);
    }
}

mod detect_columns_tests {
    use super::*;

    #[test]
    fn test_round_trip_two_columns() {
        let data = dataset(json!([
            { "a": 1, "b": "x" },
            { "a": 2, "b": "y" }
        ]));
        let columns = detect_columns(&data);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].id, "a");
        assert_eq!(columns[0].semantic_type, SemanticType::Number);
        assert_eq!(columns[0].order, 0);
        assert_eq!(columns[0].label, "A");
        assert_eq!(columns[1].id, "b");
        assert_eq!(columns[1].semantic_type, SemanticType::String);
        assert_eq!(columns[1].order, 1);
        assert_eq!(columns[1].label, "B");
    }

    #[test]
    fn test_order_follows_first_record_key_order() {
        let data = dataset(json!([
            { "zeta": 1, "alpha": 2, "mid": 3 }
        ]));
        let columns = detect_columns(&data);
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_camel_case_labels() {
        let data = dataset(json!([
            { "createdAt": "2024-01-01", "isActive": true }
        ]));
        let columns = detect_columns(&data);
        assert_eq!(columns[0].label, "Created At");
        assert_eq!(columns[1].label, "Is Active");
    }

    #[test]
    fn test_empty_dataset_yields_no_columns() {
        assert!(detect_columns(&Dataset::default()).is_empty());
    }

    #[test]
    fn test_accessor_mirrors_id() {
        let data = dataset(json!([{ "field": 1 }]));
        let columns = detect_columns(&data);
        assert_eq!(columns[0].accessor, columns[0].id);
    }
}
