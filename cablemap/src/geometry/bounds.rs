use crate::model::Point;
use serde::{Deserialize, Serialize};

/// Minimal axis-aligned rectangle enclosing a point set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn of_point(p: &Point) -> Bounds {
        Bounds {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    pub fn expand(&mut self, p: &Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Single pass over the point set tracking running min/max per axis.
/// `None` for empty input; callers suppress viewport fitting in that case.
pub fn bounds_of<'a, I>(points: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut iter = points.into_iter();
    let mut bounds = Bounds::of_point(iter.next()?);
    for p in iter {
        bounds.expand(p);
    }
    Some(bounds)
}
