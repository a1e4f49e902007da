use crate::error;
use crate::CableMap;
use cablemap::categories::ThemePalette;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl CableMap {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CableMap {
        crate::CableMap::rs_new()
    }

    pub fn pass_version(&self) -> u64 {
        self.rs_pass_version()
    }

    // Update cycle
    pub fn update(&mut self, v: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(doc) => match self.inner.update_from_value(doc) {
                Ok(()) => true,
                Err(e) => {
                    web_sys::console::warn_1(&JsValue::from_str(&format!(
                        "cablemap: update failed: {}",
                        e
                    )));
                    false
                }
            },
            Err(_) => false,
        }
    }

    pub fn update_res(&mut self, v: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<serde_json::Value>(v) {
            Ok(doc) => match self.inner.update_from_value(doc) {
                Ok(()) => error::ok(JsValue::from_f64(self.inner.pass_version() as f64)),
                Err(e) => error::parse_error(&e),
            },
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn line_count(&self) -> u32 {
        self.inner.lines().len() as u32
    }

    pub fn category_count(&self) -> u32 {
        self.inner.categories().len() as u32
    }

    // Geometry getters
    pub fn get_render_lines(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.render_lines()).unwrap()
    }

    pub fn get_render_lines_res(&self) -> JsValue {
        error::ok(self.get_render_lines())
    }

    /// Flat typed-array export: one entry per polyline piece, positions as
    /// interleaved x/y pairs, counts in points.
    pub fn get_polyline_data(&self) -> JsValue {
        let pieces = self.inner.render_lines();
        let mut ids = Vec::with_capacity(pieces.len());
        let mut counts = Vec::with_capacity(pieces.len());
        let mut colors = Vec::with_capacity(pieces.len());
        let mut positions = Vec::new();
        for piece in &pieces {
            ids.push(piece.id);
            counts.push(piece.positions.len() as u32);
            colors.push(piece.color.clone());
            for p in &piece.positions {
                positions.push(p[0]);
                positions.push(p[1]);
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_f64(&ids).into());
        crate::interop::set_kv(&obj, "counts", &crate::interop::arr_u32(&counts).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f64(&positions).into());
        crate::interop::set_kv(
            &obj,
            "colors",
            &serde_wasm_bindgen::to_value(&colors).unwrap(),
        );
        obj.into()
    }

    pub fn get_categories(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.categories()).unwrap()
    }

    pub fn get_categories_res(&self) -> JsValue {
        error::ok(self.get_categories())
    }

    pub fn get_bounds(&self) -> JsValue {
        match self.inner.bounds() {
            Some(b) => {
                serde_wasm_bindgen::to_value(&vec![b.min_x, b.min_y, b.max_x, b.max_y]).unwrap()
            }
            None => JsValue::NULL,
        }
    }

    pub fn get_bounds_res(&self) -> JsValue {
        error::ok(self.get_bounds())
    }

    // Colors
    pub fn set_color_override(&mut self, index: u32, color: &str) -> bool {
        self.inner.set_color_override(index as usize, color)
    }

    pub fn set_color_override_res(&mut self, index: u32, color: &str) -> JsValue {
        if (index as usize) >= self.inner.categories().len() {
            return error::invalid_index("category", index);
        }
        error::ok(JsValue::from_bool(
            self.inner.set_color_override(index as usize, color),
        ))
    }

    pub fn set_palette(&mut self, colors: JsValue) -> bool {
        match serde_wasm_bindgen::from_value::<Vec<String>>(colors) {
            Ok(colors) if !colors.is_empty() => {
                self.inner.set_palette(ThemePalette::new(colors));
                true
            }
            _ => false,
        }
    }

    pub fn set_palette_res(&mut self, colors: JsValue) -> JsValue {
        match serde_wasm_bindgen::from_value::<Vec<String>>(colors) {
            Ok(colors) => {
                if colors.is_empty() {
                    return error::err("invalid_palette", "palette must not be empty", None);
                }
                self.inner.set_palette(ThemePalette::new(colors));
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::err("json_parse", format!("{}", e), None),
        }
    }
}
