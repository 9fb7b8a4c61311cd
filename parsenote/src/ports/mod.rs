// src/ports/mod.rs
pub mod json;
pub mod text;

pub use json::render_json;
pub use text::TextPresenter;
