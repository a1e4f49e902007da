use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct CableMap { pub(crate) inner: cablemap::CableMap }

impl CableMap {
    pub fn rs_new() -> CableMap { CableMap { inner: cablemap::CableMap::new() } }
    pub fn rs_pass_version(&self) -> u64 { self.inner.pass_version() }
}
