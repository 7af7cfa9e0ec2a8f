pub mod calc;
pub mod form;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
