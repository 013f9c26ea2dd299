// src/panels/mod.rs
pub mod detail;
pub mod legend;

pub use detail::DetailPanel;
