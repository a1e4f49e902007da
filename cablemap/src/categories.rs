use crate::model::Category;
use std::collections::HashMap;

/// Maps a series value to a display color. `ordinal` is the value's
/// first-seen position within the pass.
pub trait Palette {
    fn color_for_value(&self, key: f64, ordinal: usize) -> String;
}

// Default theme color table, cycled by first-seen ordinal.
pub const THEME_COLORS: [&str; 10] = [
    "#01B8AA", "#374649", "#FD625E", "#F2C80F", "#5F6B6D", "#8AD4EB", "#FE9666", "#A66999",
    "#3599B8", "#DFBFBF",
];

#[derive(Clone, Debug)]
pub struct ThemePalette {
    colors: Vec<String>,
}

impl ThemePalette {
    pub fn new(colors: Vec<String>) -> ThemePalette {
        if colors.is_empty() {
            return ThemePalette::default();
        }
        ThemePalette { colors }
    }
}

impl Default for ThemePalette {
    fn default() -> ThemePalette {
        ThemePalette {
            colors: THEME_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette for ThemePalette {
    fn color_for_value(&self, _key: f64, ordinal: usize) -> String {
        self.colors[ordinal % self.colors.len()].clone()
    }
}

/// Deduplicates category values encountered while parsing. One Category per
/// distinct key per pass, looked up by value equality on the key.
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<u64, u32>,
    next_identity: u32,
}

impl CategoryRegistry {
    pub fn new() -> CategoryRegistry {
        CategoryRegistry::default()
    }

    /// Returns the index of the Category for `key`, creating it on first
    /// sight: palette color, fresh selection identity, appended to the
    /// ordered list.
    pub fn resolve(&mut self, key: f64, palette: &dyn Palette) -> u32 {
        // fold -0.0 into 0.0 so the bit-pattern index agrees with numeric
        // equality
        let key = if key == 0.0 { 0.0 } else { key };
        if let Some(&idx) = self.index.get(&key.to_bits()) {
            return idx;
        }
        let idx = self.categories.len() as u32;
        let identity = self.next_identity;
        self.next_identity += 1;
        self.categories.push(Category {
            key,
            color: palette.color_for_value(key, idx as usize),
            identity,
        });
        self.index.insert(key.to_bits(), idx);
        idx
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }
}

/// Positional reconciliation of user-edited colors against the first-seen
/// category order of the current pass. Slots beyond either slice are ignored.
pub fn reconcile_colors(categories: &mut [Category], overrides: &[Option<String>]) {
    for (cat, ov) in categories.iter_mut().zip(overrides.iter()) {
        if let Some(color) = ov {
            cat.color = color.clone();
        }
    }
}
