pub mod builder;
pub mod categories;
pub mod error;
pub mod geometry {
    pub mod bounds;
}
pub mod limits;
pub mod model;
pub mod table;

use categories::{reconcile_colors, ThemePalette};
use error::ParseError;
use geometry::bounds::{self, Bounds};
use model::{Category, LineGroup, ParseResult, RenderLine};
use serde_json::Value;
use table::Table;

/// Visual-side state: the latest parse result plus the user color overrides
/// that survive across passes. Everything else is rebuilt, never patched.
pub struct CableMap {
    result: ParseResult,
    overrides: Vec<Option<String>>,
    palette: ThemePalette,
    pass_ver: u64,
}

impl CableMap {
    pub fn new() -> CableMap {
        CableMap::with_palette(ThemePalette::default())
    }

    pub fn with_palette(palette: ThemePalette) -> CableMap {
        CableMap {
            result: ParseResult::default(),
            overrides: Vec::new(),
            palette,
            pass_ver: 1,
        }
    }

    pub fn pass_version(&self) -> u64 {
        self.pass_ver
    }

    /// One full parse pass. On success the previous result is replaced
    /// wholesale and user overrides are re-applied positionally; on error the
    /// previous result stays untouched (stale but valid display).
    pub fn update(&mut self, table: &Table) -> Result<(), ParseError> {
        let mut result = builder::build(table, &self.palette)?;
        reconcile_colors(&mut result.categories, &self.overrides);
        self.result = result;
        self.pass_ver = self.pass_ver.wrapping_add(1);
        Ok(())
    }

    /// Strict ingestion path for the host's JSON table document.
    pub fn update_from_value(&mut self, v: Value) -> Result<(), ParseError> {
        let table = Table::from_value(v)?;
        self.update(&table)
    }

    pub fn lines(&self) -> &[LineGroup] {
        &self.result.lines
    }

    pub fn categories(&self) -> &[Category] {
        &self.result.categories
    }

    /// Bounding rectangle of all built geometry; `None` when nothing was
    /// built, in which case the host suppresses viewport fitting.
    pub fn bounds(&self) -> Option<Bounds> {
        bounds::bounds_of(self.result.iter_points())
    }

    /// One colored polyline piece per segment, in group order, carrying the
    /// owning category's effective color.
    pub fn render_lines(&self) -> Vec<RenderLine> {
        let mut out = Vec::new();
        for group in &self.result.lines {
            for segment in &group.segments {
                let color = self
                    .result
                    .categories
                    .get(segment.category as usize)
                    .map(|c| c.color.as_str())
                    .unwrap_or("");
                out.push(RenderLine {
                    id: group.id,
                    color: color.to_string(),
                    positions: segment.positions.iter().map(|p| [p.x, p.y]).collect(),
                    depth: segment.depth,
                });
            }
        }
        out
    }

    /// Persist one user-edited color and apply it to the current pass.
    /// Returns false when no category occupies `index`.
    pub fn set_color_override(&mut self, index: usize, color: &str) -> bool {
        if index >= self.result.categories.len() {
            return false;
        }
        if self.overrides.len() <= index {
            self.overrides.resize(index + 1, None);
        }
        self.overrides[index] = Some(color.to_string());
        self.result.categories[index].color = color.to_string();
        true
    }

    /// Replace the whole override slice, e.g. from the host's settings model.
    pub fn set_color_overrides(&mut self, overrides: Vec<Option<String>>) {
        self.overrides = overrides;
        reconcile_colors(&mut self.result.categories, &self.overrides);
    }

    /// Swap the palette; takes effect on the next parse pass.
    pub fn set_palette(&mut self, palette: ThemePalette) {
        self.palette = palette;
    }

    /// Drop all built geometry. Overrides persist for the next pass.
    pub fn clear(&mut self) {
        self.result = ParseResult::default();
        self.pass_ver = self.pass_ver.wrapping_add(1);
    }
}

impl Default for CableMap {
    fn default() -> CableMap {
        CableMap::new()
    }
}
