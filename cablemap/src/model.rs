use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub positions: Vec<Point>,
    pub depth: f64,
    pub category: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineGroup {
    pub id: f64,
    pub segments: Vec<Segment>,
}

impl LineGroup {
    /// Logical polyline of this line: one point per contributing row, in row
    /// order. Chaining duplicates each interior point into the previous
    /// segment, so the unique chain is the first position of every segment.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter().filter_map(|s| s.positions.first())
    }

    pub fn point_count(&self) -> usize {
        self.segments.len()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub key: f64,
    pub color: String,
    pub identity: u32,
}

/// One colored polyline piece per segment, ready for the rendering host.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenderLine {
    pub id: f64,
    pub color: String,
    pub positions: Vec<[f64; 2]>,
    pub depth: f64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParseResult {
    pub lines: Vec<LineGroup>,
    pub categories: Vec<Category>,
}

impl ParseResult {
    pub fn iter_points(&self) -> impl Iterator<Item = &Point> {
        self.lines
            .iter()
            .flat_map(|l| l.segments.iter())
            .flat_map(|s| s.positions.iter())
    }
}
