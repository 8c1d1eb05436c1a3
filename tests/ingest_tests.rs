//! Ingestion boundary tests

use serde_json::json;
use table_builder_sdk::models::SemanticType;
use table_builder_sdk::{detect_columns, parse_dataset, sample_dataset, IngestError, TableModel};

mod validation_tests {
    use super::*;

    #[test]
    fn test_failure_reasons_are_distinct() {
        let not_array = parse_dataset(r#"{"rows": []}"#).unwrap_err();
        let empty = parse_dataset("[]").unwrap_err();
        let not_object = parse_dataset(r#"["a", "b"]"#).unwrap_err();

        assert!(matches!(not_array, IngestError::NotAnArray));
        assert!(matches!(empty, IngestError::EmptyArray));
        assert!(matches!(not_object, IngestError::ElementNotObject));

        // Each carries its own user-visible message.
        let messages = [
            not_array.to_string(),
            empty.to_string(),
            not_object.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_nested_arrays_at_top_level_are_rejected() {
        assert!(matches!(
            parse_dataset(r#"[[1, 2], [3, 4]]"#),
            Err(IngestError::ElementNotObject)
        ));
    }

    #[test]
    fn test_invalid_json_leaves_model_unchanged() {
        let mut model = TableModel::new();
        model.replace_from_dataset(
            serde_json::from_value(json!([{ "a": 1 }, { "a": 2 }])).unwrap(),
        );
        let before = model.clone();

        // The boundary rejects the input; the model is only replaced on Ok.
        let result = parse_dataset("{not valid}");
        assert!(matches!(result, Err(IngestError::InvalidJson(_))));
        if let Ok(dataset) = result {
            model.replace_from_dataset(dataset);
        }
        assert_eq!(model, before);
    }

    #[test]
    fn test_field_order_is_preserved() {
        let dataset = parse_dataset(r#"[{"z": 1, "a": 2, "m": 3}]"#).unwrap();
        let keys: Vec<&str> = dataset.first().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}

mod sample_data_tests {
    use super::*;

    #[test]
    fn test_sample_covers_every_semantic_type() {
        let dataset = sample_dataset();
        let columns = detect_columns(&dataset);
        let types: Vec<SemanticType> = columns.iter().map(|c| c.semantic_type).collect();

        assert!(types.contains(&SemanticType::String));
        assert!(types.contains(&SemanticType::Number));
        assert!(types.contains(&SemanticType::Boolean));
        assert!(types.contains(&SemanticType::Date));
        assert!(types.contains(&SemanticType::Object));
    }

    #[test]
    fn test_sample_seeds_a_full_model() {
        let mut model = TableModel::new();
        model.replace_from_dataset(sample_dataset());
        assert_eq!(model.columns().len(), 8);
        assert!(model.visibility().values().all(|v| *v));

        // The role column sits inside the faceted-options window.
        let roles = model.derive_auto_options("role");
        let values: Vec<&str> = roles.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["Designer", "Engineer", "Manager"]);
    }
}
