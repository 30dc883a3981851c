use osrs_items_catalog::dataset::{parse_raw_entries_csv, read_raw_entries};
use osrs_items_catalog::{
    DatasetError, EntryError, IdParseError, ImageOptions, Item, ItemCatalog, ItemId, RawEntry,
    build_dataset, build_item, load_items, save_items,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn build_item_derives_fields() {
    let item = build_item(
        &RawEntry::new("Amulet of glory#1", "1704-1706"),
        &ImageOptions::default(),
    )
    .unwrap();
    assert_eq!(item.id, ItemId::Multiple(vec![1704, 1705, 1706]));
    assert_eq!(item.base_name, "Amulet of glory");
    assert_eq!(item.variant.as_deref(), Some("1"));
    assert_eq!(
        item.image_url,
        "https://oldschool.runescape.wiki/images/thumb/Amulet_of_glory_detail.png/120px-Amulet_of_glory_detail.png"
    );
}

#[test]
fn build_item_rejects_bad_id() {
    let err = build_item(
        &RawEntry::new("Abyssal whip", "41S1"),
        &ImageOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        EntryError::Id(IdParseError::InvalidNumber("41S1".to_string()))
    );
}

#[test]
fn build_item_rejects_empty_base_name() {
    let err = build_item(&RawEntry::new("#1", "1"), &ImageOptions::default()).unwrap_err();
    assert!(matches!(err, EntryError::EmptyName(_)));
}

#[test]
fn build_dataset_skips_bad_entries_and_keeps_order() {
    let entries = vec![
        RawEntry::new("Abyssal bludgeon", "13263"),
        RawEntry::new("Broken thing", "12-ab"),
        RawEntry::new("Amulet of glory#1", "1704-1706, 11976, 11978"),
        RawEntry::new("  ", "5"),
        RawEntry::new("Typo row", "1-4294967295"),
        RawEntry::new("Coins", "995"),
    ];
    let report = build_dataset(entries, &ImageOptions::default());

    let names: Vec<&str> = report.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Abyssal bludgeon", "Amulet of glory#1", "Coins"]);
    assert_eq!(report.skipped.len(), 3);
    assert_eq!(report.skipped[0].entry.name, "Broken thing");
    assert_eq!(
        report.skipped[2].reason,
        EntryError::Id(IdParseError::RangeTooLarge {
            start: 1,
            end: 4294967295
        })
    );
    assert_eq!(report.items[1].id.len(), 5);
}

#[test]
fn csv_entries_with_reordered_columns() {
    let csv = "id,name,members\n13263,Abyssal bludgeon,yes\n\"1704-1706, 11976\",Amulet of glory#1,no\n";
    let entries = parse_raw_entries_csv(csv).unwrap();
    assert_eq!(
        entries,
        vec![
            RawEntry::new("Abyssal bludgeon", "13263"),
            RawEntry::new("Amulet of glory#1", "1704-1706, 11976"),
        ]
    );
}

#[test]
fn csv_short_rows_are_skipped() {
    let csv = "name,id\nAbyssal bludgeon,13263\nNo id here\nCoins,995\n";
    let entries = parse_raw_entries_csv(csv).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name, "Coins");
}

#[test]
fn csv_missing_column_is_an_error() {
    let err = parse_raw_entries_csv("name,value\nCoins,995\n").unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn(ref c) if c == "id"));
}

#[test]
fn read_raw_entries_from_file() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "items.csv", "Name,ID\nAbyssal dagger#(p),13267\n");
    let entries = read_raw_entries(&tmp.path().join("items.csv")).unwrap();
    assert_eq!(entries, vec![RawEntry::new("Abyssal dagger#(p)", "13267")]);
}

#[test]
fn json_round_trip_is_lossless() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out").join("items.json");
    let opts = ImageOptions::default();
    let items = vec![
        Item::new(ItemId::Single(13263), "Abyssal bludgeon", &opts),
        Item::new(ItemId::Multiple(vec![1704, 1705]), "Amulet of glory#1", &opts),
    ];

    save_items(&path, &items).unwrap();
    assert_eq!(load_items(&path).unwrap(), items);
}

#[test]
fn json_field_names() {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "items.json",
        r#"[
  {
    "id": [1704, 1705],
    "name": "Amulet of glory#1",
    "baseName": "Amulet of glory",
    "variant": "1",
    "imageUrl": "https://oldschool.runescape.wiki/images/thumb/Amulet_of_glory_detail.png/120px-Amulet_of_glory_detail.png"
  },
  {
    "id": 995,
    "name": "Coins",
    "baseName": "Coins",
    "imageUrl": "https://oldschool.runescape.wiki/images/thumb/Coins_detail.png/120px-Coins_detail.png"
  }
]"#,
    );

    let items = load_items(&tmp.path().join("items.json")).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, ItemId::Multiple(vec![1704, 1705]));
    assert_eq!(items[1].id, ItemId::Single(995));
    assert!(items[1].variant.is_none());

    let json = serde_json::to_value(&items[1]).unwrap();
    assert!(json.get("variant").is_none());
    assert_eq!(json["baseName"], "Coins");
}

#[test]
fn catalog_load_missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    let catalog = ItemCatalog::load(&tmp.path().join("missing.json"));
    assert!(catalog.is_empty());
    assert!(catalog.get_by_id(995).is_none());
}

#[test]
fn catalog_load_garbage_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "items.json", "{ not json");
    let path = tmp.path().join("items.json");

    assert!(matches!(
        ItemCatalog::try_load(&path),
        Err(DatasetError::Json { .. })
    ));
    let catalog = ItemCatalog::load(&path);
    assert_eq!(catalog.count(), 0);
    assert!(catalog.search_by_name("coins", None).is_empty());
}

#[test]
fn catalog_load_built_dataset() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("items.json");
    let report = build_dataset(
        vec![
            RawEntry::new("Abyssal dagger", "13265"),
            RawEntry::new("Abyssal dagger#(p)", "13267"),
        ],
        &ImageOptions::default(),
    );
    save_items(&path, &report.items).unwrap();

    let catalog = ItemCatalog::load(&path);
    assert_eq!(catalog.count(), 2);
    assert_eq!(catalog.variants_of("Abyssal dagger").len(), 2);
    assert_eq!(catalog.unique_base_names(), vec!["Abyssal dagger"]);
}
