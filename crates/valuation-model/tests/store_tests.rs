use pretty_assertions::assert_eq;
use valuation_model::{
    FieldAccess, FieldStore, SnapshotError, TableId, ValuationSettings, SCHEMA_VERSION,
};

#[test]
fn unset_fields_read_as_empty_text_and_zero() {
    let store = FieldStore::new();
    assert_eq!(store.text(TableId::Table1_1, "sh_name_0"), "");
    assert_eq!(store.number(TableId::Table1_1, "sh_votes_0"), 0);
    assert!(!store.is_present(TableId::Table1_1, "sh_votes_0"));
    assert!(!store.is_checked(TableId::Table1_1, "sh_dozoku_0"));
}

#[test]
fn values_are_stored_verbatim_without_coercion() {
    let mut store = FieldStore::new();
    store.update_field(TableId::Table4, "capital", "1,000千円");
    assert_eq!(store.text(TableId::Table4, "capital"), "1,000千円");
    assert_eq!(store.number(TableId::Table4, "capital"), 1000);

    store.update_field(TableId::Table1_1, "sh_dozoku_0", "1");
    assert!(store.is_checked(TableId::Table1_1, "sh_dozoku_0"));
}

#[test]
fn tables_are_independent_namespaces() {
    let mut store = FieldStore::new();
    store.set(TableId::Table1_1, "companyName", "株式会社A");
    store.set(TableId::Table5, "companyName", "株式会社B");
    assert_eq!(store.get(TableId::Table1_1, "companyName"), Some("株式会社A"));
    assert_eq!(store.get(TableId::Table5, "companyName"), Some("株式会社B"));

    let names: Vec<_> = store.table_fields(TableId::Table5).collect();
    assert_eq!(names, vec![("companyName", "株式会社B")]);
}

#[test]
fn clear_fields_resets_only_the_listed_names() {
    let mut store = FieldStore::new();
    store.set(TableId::Table4, "capital", "10000");
    store.set(TableId::Table4, "issued_shares", "2000");
    store.set(TableId::Table4, "div_y1", "500");

    store.clear_fields(TableId::Table4, &["capital", "issued_shares"]);
    assert_eq!(store.field_count(), 1);
    assert_eq!(store.get(TableId::Table4, "div_y1"), Some("500"));
}

#[test]
fn snapshot_round_trips_and_uses_table_ids_as_keys() {
    let mut store = FieldStore::new();
    store.set(TableId::Table1_1, "sh_votes_0", "60");
    store.set(TableId::Table5, "a_name_0", "現金預金");

    let json = store.to_json().unwrap();
    assert!(json.contains("\"table1_1\""));
    assert_eq!(FieldStore::from_json(&json).unwrap(), store);
}

#[test]
fn snapshot_import_drops_blank_values() {
    let json = r#"{"schema_version":1,"tables":{"table4":{"capital":"","div_y1":"300"}}}"#;
    let store = FieldStore::from_json(json).unwrap();
    assert_eq!(store.field_count(), 1);
    assert_eq!(store.get(TableId::Table4, "capital"), None);
}

#[test]
fn snapshot_import_rejects_newer_schema() {
    let json = format!(r#"{{"schema_version":{},"tables":{{}}}}"#, SCHEMA_VERSION + 1);
    let err = FieldStore::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::UnsupportedSchema { found, supported }
            if found == SCHEMA_VERSION + 1 && supported == SCHEMA_VERSION
    ));
}

#[test]
fn snapshot_import_reports_malformed_json() {
    let err = FieldStore::from_json("{not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Json(_)));
}

#[test]
fn settings_deserialize_from_partial_json() {
    let settings: ValuationSettings =
        serde_json::from_str(r#"{"corporate_tax_rate_percent":40}"#).unwrap();
    assert_eq!(settings.corporate_tax_rate_percent, 40);
    assert_eq!(
        settings.shareholder_rows,
        ValuationSettings::default().shareholder_rows
    );
}
