//! Column configuration model tests

use serde_json::{json, Value};
use table_builder_sdk::models::{Dataset, OptionsMode};
use table_builder_sdk::{OptionField, TableModel};

fn dataset(rows: Value) -> Dataset {
    serde_json::from_value(rows).expect("test rows deserialize")
}

fn seeded_model() -> TableModel {
    let mut model = TableModel::new();
    model.replace_from_dataset(dataset(json!([
        { "name": "Ada", "status": "active", "score": 10, "joined": "2021-04-12" },
        { "name": "Bob", "status": "inactive", "score": 20, "joined": "2020-11-03" },
        { "name": "Cid", "status": "active", "score": 30, "joined": "2022-01-27" }
    ])));
    model
}

fn orders(model: &TableModel) -> Vec<usize> {
    model.columns().iter().map(|c| c.order).collect()
}

mod ordering_tests {
    use super::*;

    #[test]
    fn test_orders_stay_dense_through_reorders_and_deletes() {
        let mut model = seeded_model();

        model.reorder("score", 0);
        assert_eq!(orders(&model), [0, 1, 2, 3]);

        model.reorder("name", 3);
        assert_eq!(orders(&model), [0, 1, 2, 3]);

        model.delete_column("status");
        assert_eq!(orders(&model), [0, 1, 2]);

        model.reorder("joined", 1);
        model.delete_column("score");
        assert_eq!(orders(&model), [0, 1]);
    }

    #[test]
    fn test_reorder_moves_to_first_and_last() {
        let mut model = seeded_model();
        model.reorder("joined", 0);
        assert_eq!(model.columns()[0].id, "joined");

        model.reorder("joined", 3);
        assert_eq!(model.columns()[3].id, "joined");
    }

    #[test]
    fn test_reorder_to_current_position_is_a_no_op() {
        let mut model = seeded_model();
        let before = model.clone();
        model.reorder("status", 1);
        assert_eq!(model, before);
    }
}

mod visibility_tests {
    use super::*;

    #[test]
    fn test_delete_prunes_visibility() {
        let mut model = seeded_model();
        assert!(model.visibility().contains_key("status"));

        model.delete_column("status");
        assert!(!model.visibility().contains_key("status"));
        assert_eq!(model.visibility().len(), 3);
        assert!(model.derive_auto_options("status").is_empty());
    }

    #[test]
    fn test_set_visible_toggles_existing_columns_only() {
        let mut model = seeded_model();
        model.set_visible("name", false);
        assert_eq!(model.visibility().get("name"), Some(&false));

        model.set_visible("ghost", false);
        assert!(!model.visibility().contains_key("ghost"));
    }

    #[test]
    fn test_replacement_discards_customization() {
        let mut model = seeded_model();
        model.rename_label("name", "Full Name");
        model.set_visible("score", false);

        model.replace_from_dataset(dataset(json!([{ "name": "Eve" }])));
        assert_eq!(model.columns().len(), 1);
        assert_eq!(model.column("name").unwrap().label, "Name");
        assert_eq!(model.visibility().get("name"), Some(&true));
    }
}

mod options_tests {
    use super::*;

    #[test]
    fn test_auto_options_window_and_sort() {
        let model = seeded_model();
        let options = model.derive_auto_options("status");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["active", "inactive"]);
        assert!(options.iter().all(|o| o.label == o.value));
    }

    #[test]
    fn test_single_distinct_value_yields_no_options() {
        let mut model = TableModel::new();
        model.replace_from_dataset(dataset(json!([
            { "status": "same" },
            { "status": "same" }
        ])));
        assert!(model.derive_auto_options("status").is_empty());
    }

    #[test]
    fn test_high_cardinality_yields_no_options() {
        let rows: Vec<Value> = (0..25).map(|i| json!({ "status": format!("s{i:02}") })).collect();
        let mut model = TableModel::new();
        model.replace_from_dataset(dataset(Value::Array(rows)));

        model.toggle_faceted_filter("status", true);
        assert!(model.column("status").unwrap().has_faceted_filter);
        assert!(model.derive_auto_options("status").is_empty());
    }

    #[test]
    fn test_switching_to_custom_snapshots_auto_options() {
        let mut model = seeded_model();
        model.toggle_faceted_filter("status", true);
        model.set_options_mode("status", OptionsMode::Custom);

        let snapshot: Vec<String> = model
            .column("status")
            .unwrap()
            .options
            .iter()
            .map(|o| o.value.clone())
            .collect();
        assert_eq!(snapshot, ["active", "inactive"]);

        // A later dataset change must not rewrite the captured options.
        model.update_custom_option("status", 0, OptionField::Label, "Active people");
        assert_eq!(model.column("status").unwrap().options[0].label, "Active people");
        assert_eq!(model.column("status").unwrap().options[0].value, "active");
    }

    #[test]
    fn test_custom_option_edits() {
        let mut model = seeded_model();
        model.toggle_faceted_filter("status", true);
        model.set_options_mode("status", OptionsMode::Custom);

        model.add_custom_option("status");
        assert_eq!(model.column("status").unwrap().options.len(), 3);

        model.update_custom_option("status", 2, OptionField::Value, "archived");
        assert_eq!(model.column("status").unwrap().options[2].value, "archived");

        model.remove_custom_option("status", 0);
        assert_eq!(model.column("status").unwrap().options.len(), 2);

        // Out-of-range edits are silent no-ops.
        let before = model.clone();
        model.update_custom_option("status", 9, OptionField::Label, "x");
        model.remove_custom_option("status", 9);
        assert_eq!(model, before);
    }

    #[test]
    fn test_mismatched_type_flags_are_tolerated() {
        let mut model = seeded_model();
        model.toggle_faceted_filter("score", true);
        model.toggle_date_filter("name", true);

        assert!(model.column("score").unwrap().has_faceted_filter);
        // Non-string columns never produce options regardless of the flag.
        assert!(model.derive_auto_options("score").is_empty());
    }
}
