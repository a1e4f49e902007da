use crate::error::ParseError;
use crate::limits;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ROLE_CABLE_ID: &str = "cable_id";
pub const ROLE_CABLE_X: &str = "cable_x";
pub const ROLE_CABLE_Y: &str = "cable_y";
pub const ROLE_CABLE_Z: &str = "cable_z";
pub const ROLE_CATEGORY: &str = "category";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Strict deserialization of the host's table document, with ingestion
    /// caps applied before any row is touched.
    pub fn from_value(v: Value) -> Result<Table, ParseError> {
        let table: Table =
            serde_json::from_value(v).map_err(|e| ParseError::Document(format!("{}", e)))?;
        table.check_caps()?;
        Ok(table)
    }

    pub fn check_caps(&self) -> Result<(), ParseError> {
        if self.columns.len() > limits::MAX_COLUMNS {
            return Err(ParseError::CapsExceeded {
                what: "columns",
                cap: limits::MAX_COLUMNS,
            });
        }
        if self.rows.len() > limits::MAX_ROWS {
            return Err(ParseError::CapsExceeded {
                what: "rows",
                cap: limits::MAX_ROWS,
            });
        }
        Ok(())
    }
}

/// Role-to-column binding, resolved once per table before row processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleMap {
    pub cable_id: usize,
    pub cable_x: usize,
    pub cable_y: usize,
    pub cable_z: usize,
    pub category: Option<usize>,
}

impl RoleMap {
    /// Scans column metadata for role declarations. When several columns
    /// claim the same role the last declaration wins. The positional roles
    /// are required; `category` degrades to an implicit default when absent.
    pub fn resolve(columns: &[Column]) -> Result<RoleMap, ParseError> {
        let mut cable_id = None;
        let mut cable_x = None;
        let mut cable_y = None;
        let mut cable_z = None;
        let mut category = None;
        for (idx, col) in columns.iter().enumerate() {
            for role in &col.roles {
                match role.as_str() {
                    ROLE_CABLE_ID => cable_id = Some(idx),
                    ROLE_CABLE_X => cable_x = Some(idx),
                    ROLE_CABLE_Y => cable_y = Some(idx),
                    ROLE_CABLE_Z => cable_z = Some(idx),
                    ROLE_CATEGORY => category = Some(idx),
                    _ => {}
                }
            }
        }
        let require = |slot: Option<usize>, role: &'static str| {
            slot.ok_or(ParseError::Configuration { role })
        };
        Ok(RoleMap {
            cable_id: require(cable_id, ROLE_CABLE_ID)?,
            cable_x: require(cable_x, ROLE_CABLE_X)?,
            cable_y: require(cable_y, ROLE_CABLE_Y)?,
            cable_z: require(cable_z, ROLE_CABLE_Z)?,
            category,
        })
    }
}

/// Numeric extraction of one consumed cell. A missing or non-numeric cell is
/// a format violation that aborts the whole pass.
pub fn numeric_cell(row: &[Value], row_idx: usize, column: usize) -> Result<f64, ParseError> {
    row.get(column)
        .and_then(Value::as_f64)
        .ok_or(ParseError::Format {
            row: row_idx,
            column,
        })
}

/// Like `numeric_cell`, additionally enforcing the coordinate sanity bounds.
pub fn coord_cell(row: &[Value], row_idx: usize, column: usize) -> Result<f64, ParseError> {
    let v = numeric_cell(row, row_idx, column)?;
    if !limits::in_coord_bounds(v) {
        return Err(ParseError::OutOfBounds {
            row: row_idx,
            column,
        });
    }
    Ok(v)
}
