use notekit_core::{
    build_catalog_report, check_record, seed_catalog, seed_categories, validate, Catalog,
    ProductValidationError,
};
use serde_json::json;

#[test]
fn seed_catalog_emits_zero_diagnostics() {
    let catalog = seed_catalog();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.validate_all().is_empty());
}

#[test]
fn validate_is_false_exactly_when_a_rule_fails() {
    let cases = [
        (json!({"id": 1, "name": "Laptop", "price": 3500}), true),
        (json!({"id": 0, "name": "Laptop", "price": 3500}), false),
        (json!({"name": "Laptop", "price": 3500}), false),
        (json!({"id": 1, "name": null, "price": 3500}), false),
        (json!({"id": 1, "name": "Laptop", "price": "3500"}), false),
        (json!({"id": 1, "name": "Laptop", "price": 0}), false),
        (json!({"id": 1, "name": "", "price": 1}), true),
        (json!({"id": -7, "name": "Refund", "price": 1}), true),
    ];

    for (record, expected) in cases {
        assert_eq!(validate(&record), expected, "record={record}");
        assert_eq!(check_record(&record).is_ok(), expected, "record={record}");
    }
}

#[test]
fn report_lists_invalid_keys_and_keeps_catalog_intact() {
    let catalog = Catalog::from_json_str(
        r#"{
            "1": {"id": 1, "name": "Laptop", "price": 3500},
            "2": {"id": 2, "name": "Mouse", "price": -80},
            "4": {"id": 4, "name": ["Hub"], "price": 20}
        }"#,
    )
    .unwrap();

    let report = build_catalog_report(&catalog);
    assert_eq!(
        report.diagnostics(),
        vec![
            "invalid product with id 2".to_string(),
            "invalid product with id 4".to_string()
        ]
    );
    assert_eq!(
        report.invalid_entries[0].reason,
        ProductValidationError::NonPositivePrice { price: -80.0 }
    );
    assert_eq!(report.invalid_entries[1].reason, ProductValidationError::NameNotString);
    assert_eq!(report.products.len(), 3);
    assert_eq!(report.stats.product_count, 1);
}

#[test]
fn seed_report_matches_walkthrough_values() {
    let report = build_catalog_report(&seed_catalog());

    assert!(report.invalid_entries.is_empty());
    assert_eq!(report.initial_numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.numbers, vec![1, 3, 4, 5, 6]);
    assert!(report.has_three);
    assert_eq!(
        report.categories,
        vec![
            ("Tecnología".to_string(), "Laptop".to_string()),
            ("Accesorios".to_string(), "Mouse".to_string()),
            ("Periféricos".to_string(), "Teclado".to_string()),
        ]
    );
    assert_eq!(report.stats.product_count, 3);
    assert_eq!(report.stats.total_price, 3730.0);
    assert_eq!(
        report.stats.most_expensive.map(|product| product.name),
        Some("Laptop".to_string())
    );
}

#[test]
fn catalog_listing_follows_key_order() {
    let catalog = seed_catalog();
    assert_eq!(catalog.keys().collect::<Vec<_>>(), vec![1, 2, 3]);

    let names = catalog
        .values()
        .map(|record| record["name"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Laptop", "Mouse", "Teclado"]);

    let (key, record) = catalog.entries().nth(1).unwrap();
    assert_eq!(key, 2);
    assert_eq!(record["price"], json!(80.0));
}

#[test]
fn seed_categories_iterate_in_insertion_order() {
    let categories = seed_categories();
    let keys = categories
        .iter()
        .map(|(category, _)| category)
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["Tecnología", "Accesorios", "Periféricos"]);
    assert_eq!(categories.get("Accesorios"), Some("Mouse"));
}
