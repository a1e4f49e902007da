use crate::categories::{CategoryRegistry, Palette};
use crate::error::ParseError;
use crate::model::{LineGroup, ParseResult, Point, Segment};
use crate::table::{self, RoleMap, Table};
use std::collections::HashMap;

/// Full re-derivation of the line set from a table. Builds into a fresh
/// `ParseResult`; any error aborts the pass with no partial output.
pub fn build(table: &Table, palette: &dyn Palette) -> Result<ParseResult, ParseError> {
    table.check_caps()?;
    let roles = RoleMap::resolve(&table.columns)?;

    let mut registry = CategoryRegistry::new();
    let mut lines: Vec<LineGroup> = Vec::new();
    // Groups are kept in first-seen order; the bit-pattern map is only a
    // lookup accelerator over the ordered list.
    let mut group_index: HashMap<u64, usize> = HashMap::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let id = table::numeric_cell(row, row_idx, roles.cable_id)?;
        // fold -0.0 into 0.0 so the bit-pattern lookup agrees with numeric
        // equality
        let id = if id == 0.0 { 0.0 } else { id };
        let x = table::coord_cell(row, row_idx, roles.cable_x)?;
        let y = table::coord_cell(row, row_idx, roles.cable_y)?;
        let depth = table::numeric_cell(row, row_idx, roles.cable_z)?;
        let key = match roles.category {
            Some(col) => table::numeric_cell(row, row_idx, col)?,
            // Older data bindings omit the category role; everything lands in
            // one implicit category.
            None => 0.0,
        };
        let category = registry.resolve(key, palette);

        let point = Point { x, y };
        let segment = Segment {
            positions: vec![point],
            depth,
            category,
        };

        match group_index.get(&id.to_bits()) {
            Some(&idx) => {
                let group = &mut lines[idx];
                // Chain: the previous row's segment also receives this point,
                // so adjacent segments stay visually connected even when
                // their categories differ.
                if let Some(prev) = group.segments.last_mut() {
                    prev.positions.push(point);
                }
                group.segments.push(segment);
            }
            None => {
                group_index.insert(id.to_bits(), lines.len());
                lines.push(LineGroup {
                    id,
                    segments: vec![segment],
                });
            }
        }
    }

    Ok(ParseResult {
        lines,
        categories: registry.into_categories(),
    })
}
