use cablemap::error::ParseError;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

fn set_kv(obj: &Object, k: &str, v: &JsValue) { let _ = Reflect::set(obj, &JsValue::from_str(k), v); }

fn new_obj() -> Object { Object::new() }

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

/// Map a core parse error onto the host error object, with the structured
/// location carried in `data`.
pub fn parse_error(e: &ParseError) -> JsValue {
    let d = new_obj();
    match e {
        ParseError::Format { row, column } | ParseError::OutOfBounds { row, column } => {
            set_kv(&d, "row", &JsValue::from_f64(*row as f64));
            set_kv(&d, "column", &JsValue::from_f64(*column as f64));
        }
        ParseError::Configuration { role } => {
            set_kv(&d, "role", &JsValue::from_str(role));
        }
        ParseError::CapsExceeded { what, cap } => {
            set_kv(&d, "what", &JsValue::from_str(what));
            set_kv(&d, "cap", &JsValue::from_f64(*cap as f64));
        }
        ParseError::Document(_) => {}
    }
    err(e.code(), format!("{}", e), Some(d.into()))
}

#[inline]
pub fn invalid_index(kind: &str, index: u32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "index", &JsValue::from_f64(index as f64));
    err("invalid_index", format!("invalid {} index", kind), Some(d.into()))
}
