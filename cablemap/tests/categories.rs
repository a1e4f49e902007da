use cablemap::categories::{CategoryRegistry, Palette, ThemePalette, THEME_COLORS};
use cablemap::table::Table;
use cablemap::CableMap;
use serde_json::{json, Value};

fn table(rows: Value) -> Table {
    Table::from_value(json!({
        "columns": [
            {"roles": ["cable_id"]},
            {"roles": ["cable_x"]},
            {"roles": ["cable_y"]},
            {"roles": ["cable_z"]},
            {"roles": ["category"]}
        ],
        "rows": rows
    }))
    .expect("table doc")
}

#[test]
fn equal_keys_resolve_to_one_category() {
    let palette = ThemePalette::default();
    let mut reg = CategoryRegistry::new();
    let a = reg.resolve(42.0, &palette);
    let b = reg.resolve(42.0, &palette);
    let c = reg.resolve(7.0, &palette);
    assert_eq!(a, b, "value equality, not reference identity");
    assert_ne!(a, c);
    assert_eq!(reg.len(), 2);
}

#[test]
fn identities_are_distinct_per_category() {
    let palette = ThemePalette::default();
    let mut reg = CategoryRegistry::new();
    for k in [3.0, 1.0, 2.0, 1.0, 3.0] {
        reg.resolve(k, &palette);
    }
    let cats = reg.into_categories();
    assert_eq!(cats.len(), 3);
    assert_ne!(cats[0].identity, cats[1].identity);
    assert_ne!(cats[1].identity, cats[2].identity);
}

#[test]
fn first_seen_order_is_stable_across_passes() {
    let rows = json!([
        [1, 0.0, 0.0, 0.0, 30],
        [1, 1.0, 0.0, 0.0, 10],
        [2, 2.0, 0.0, 0.0, 20],
        [2, 3.0, 0.0, 0.0, 30]
    ]);
    let mut map = CableMap::new();
    map.update(&table(rows.clone())).unwrap();
    let first: Vec<f64> = map.categories().iter().map(|c| c.key).collect();
    assert_eq!(first, vec![30.0, 10.0, 20.0]);

    map.update(&table(rows)).unwrap();
    let second: Vec<f64> = map.categories().iter().map(|c| c.key).collect();
    assert_eq!(first, second);
}

#[test]
fn palette_assignment_is_deterministic_within_a_pass() {
    let mut map = CableMap::new();
    map.update(&table(json!([
        [1, 0.0, 0.0, 0.0, 5],
        [1, 1.0, 0.0, 0.0, 6],
        [2, 2.0, 0.0, 0.0, 5]
    ])))
    .unwrap();
    let cats = map.categories();
    assert_eq!(cats[0].color, THEME_COLORS[0]);
    assert_eq!(cats[1].color, THEME_COLORS[1]);
    // Key 5 seen again resolves to the same entry, hence the same color
    assert_eq!(cats.len(), 2);
}

#[test]
fn custom_palette_cycles() {
    let palette = ThemePalette::new(vec!["red".into(), "blue".into()]);
    assert_eq!(palette.color_for_value(0.0, 0), "red");
    assert_eq!(palette.color_for_value(1.0, 1), "blue");
    assert_eq!(palette.color_for_value(2.0, 2), "red");
}

#[test]
fn override_reconciliation_is_positional() {
    let palette = ThemePalette::new(vec!["red".into(), "blue".into()]);
    let mut map = CableMap::with_palette(palette);
    map.update(&table(json!([
        [1, 0.0, 0.0, 0.0, 1],
        [1, 1.0, 0.0, 0.0, 2]
    ])))
    .unwrap();
    assert_eq!(map.categories()[0].color, "red");
    assert_eq!(map.categories()[1].color, "blue");

    map.set_color_overrides(vec![Some("green".into()), Some("blue".into())]);
    assert_eq!(map.categories()[0].color, "green");
    assert_eq!(map.categories()[1].color, "blue");

    // A further no-op reconciliation keeps the override
    map.set_color_overrides(vec![Some("green".into()), Some("blue".into())]);
    assert_eq!(map.categories()[0].color, "green");
    assert_eq!(map.categories()[1].color, "blue");
}

#[test]
fn overrides_survive_reparse() {
    let mut map = CableMap::new();
    let rows = json!([
        [1, 0.0, 0.0, 0.0, 1],
        [1, 1.0, 0.0, 0.0, 2]
    ]);
    map.update(&table(rows.clone())).unwrap();
    assert!(map.set_color_override(0, "#ABCDEF"));
    assert_eq!(map.categories()[0].color, "#ABCDEF");

    map.update(&table(rows)).unwrap();
    assert_eq!(map.categories()[0].color, "#ABCDEF", "override reapplied");
    assert_eq!(map.categories()[1].color, THEME_COLORS[1], "others untouched");
}

#[test]
fn override_out_of_range_is_rejected() {
    let mut map = CableMap::new();
    map.update(&table(json!([[1, 0.0, 0.0, 0.0, 1]]))).unwrap();
    assert!(!map.set_color_override(5, "green"));
    assert_eq!(map.categories()[0].color, THEME_COLORS[0]);
}

#[test]
fn render_lines_use_overridden_colors() {
    let mut map = CableMap::new();
    map.update(&table(json!([
        [1, 0.0, 0.0, 0.0, 1],
        [1, 1.0, 0.0, 0.0, 2]
    ])))
    .unwrap();
    map.set_color_override(1, "magenta");
    let pieces = map.render_lines();
    assert_eq!(pieces[1].color, "magenta");
}
