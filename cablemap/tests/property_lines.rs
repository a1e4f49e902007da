use cablemap::table::Table;
use cablemap::CableMap;
use proptest::prelude::*;
use serde_json::json;

type ModelRow = (u8, i16, i16, i8, u8);

fn to_table(rows: &[ModelRow]) -> Table {
    let rows: Vec<_> = rows
        .iter()
        .map(|(id, x, y, z, cat)| json!([id, x, y, z, cat]))
        .collect();
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

proptest! {
    #[test]
    fn parse_matches_row_stream_model(
        rows in prop::collection::vec((0u8..5, any::<i16>(), any::<i16>(), any::<i8>(), 0u8..4), 0..200)
    ) {
        let mut map = CableMap::new();
        map.update(&to_table(&rows)).unwrap();

        // Per-line point counts and order match the row stream
        let mut expected_ids: Vec<u8> = Vec::new();
        for (id, ..) in &rows {
            if !expected_ids.contains(id) {
                expected_ids.push(*id);
            }
        }
        prop_assert_eq!(map.lines().len(), expected_ids.len());
        for (group, id) in map.lines().iter().zip(expected_ids.iter()) {
            prop_assert_eq!(group.id, *id as f64);
            let expected: Vec<(f64, f64)> = rows
                .iter()
                .filter(|(rid, ..)| rid == id)
                .map(|(_, x, y, ..)| (*x as f64, *y as f64))
                .collect();
            let got: Vec<(f64, f64)> = group.points().map(|p| (p.x, p.y)).collect();
            prop_assert_eq!(got, expected);
        }

        // Categories are deduplicated in first-seen order
        let mut expected_cats: Vec<u8> = Vec::new();
        for (.., cat) in &rows {
            if !expected_cats.contains(cat) {
                expected_cats.push(*cat);
            }
        }
        let got_cats: Vec<f64> = map.categories().iter().map(|c| c.key).collect();
        let expected_cats: Vec<f64> = expected_cats.iter().map(|c| *c as f64).collect();
        prop_assert_eq!(got_cats, expected_cats);

        // Bounds enclose every point, or are absent when nothing was built
        match map.bounds() {
            Some(b) => {
                for (_, x, y, ..) in &rows {
                    prop_assert!(b.min_x <= *x as f64 && *x as f64 <= b.max_x);
                    prop_assert!(b.min_y <= *y as f64 && *y as f64 <= b.max_y);
                }
            }
            None => prop_assert!(rows.is_empty()),
        }
    }

    #[test]
    fn chained_segments_share_boundary_points(
        rows in prop::collection::vec((0u8..3, any::<i16>(), any::<i16>(), any::<i8>(), 0u8..4), 1..100)
    ) {
        let mut map = CableMap::new();
        map.update(&to_table(&rows)).unwrap();
        for group in map.lines() {
            for pair in group.segments.windows(2) {
                prop_assert_eq!(
                    pair[0].positions.last(),
                    pair[1].positions.first(),
                    "adjacent segments stay connected"
                );
            }
            if let Some(last) = group.segments.last() {
                prop_assert_eq!(last.positions.len(), 1);
            }
        }
    }
}
