//src/model/mod.rs
pub mod dataset;
pub mod element;
pub mod selection;
pub mod shells;

// Re-exports for cleaner imports
pub use dataset::{DatasetError, ElementTable};
pub use element::{Element, ElementCategory};
pub use selection::{SelectionChange, SelectionState};
pub use shells::Shells;
