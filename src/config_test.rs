use super::*;

// =============================================================
// StoreConfig
// =============================================================

#[test]
fn store_config_defaults_match_cart_db() {
    let cfg = StoreConfig::default();
    assert_eq!(cfg.db_name, "CartDB");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.store_name, "cart");
}

#[test]
fn store_indexes_are_name_and_price() {
    assert_eq!(STORE_INDEXES, ["name", "price"]);
}

#[test]
fn store_options_key_records_by_auto_increment_id() {
    let options = StoreConfig::store_options();
    assert_eq!(options["keyPath"], "id");
    assert_eq!(options["autoIncrement"], true);
}

#[test]
fn index_options_are_not_unique() {
    assert_eq!(StoreConfig::index_options(), serde_json::json!({ "unique": false }));
}

// =============================================================
// MenuConfig
// =============================================================

#[test]
fn embedded_menu_parses_with_unique_sections() {
    let menu = MenuConfig::embedded().unwrap();
    assert!(!menu.restaurant.is_empty());
    assert!(!menu.sections.is_empty());
    let ids: HashSet<_> = menu.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), menu.sections.len());
}

#[test]
fn embedded_menu_items_carry_descriptions() {
    let menu = MenuConfig::embedded().unwrap();
    for section in &menu.sections {
        assert!(!section.items.is_empty(), "section {} is empty", section.id);
        for item in &section.items {
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty());
            assert!(item.price > 0.0);
        }
    }
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = MenuConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson(_)));
}

#[test]
fn from_json_rejects_empty_section_id() {
    let raw = r#"{"restaurant":"r","sections":[{"id":"  ","title":"t","items":[]}]}"#;
    let err = MenuConfig::from_json(raw).unwrap_err();
    assert!(matches!(err, ConfigError::EmptySectionId(0)));
}

#[test]
fn from_json_rejects_duplicate_section_id() {
    let raw = r#"{"restaurant":"r","sections":[
        {"id":"mains","title":"a","items":[]},
        {"id":"mains","title":"b","items":[]}
    ]}"#;
    let err = MenuConfig::from_json(raw).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateSection(ref id) if id == "mains"));
}

#[test]
fn from_json_reads_item_fields() {
    let raw = r#"{"restaurant":"r","sections":[
        {"id":"drinks","title":"المشروبات","items":[
            {"name":"شاي","description":"شاي بالنعناع","price":1.5}
        ]}
    ]}"#;
    let menu = MenuConfig::from_json(raw).unwrap();
    let item = &menu.sections[0].items[0];
    assert_eq!(item.name, "شاي");
    assert_eq!(item.description, "شاي بالنعناع");
    assert!((item.price - 1.5).abs() < f64::EPSILON);
}
