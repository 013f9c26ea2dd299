pub mod animation;
pub mod export;
pub mod painter;
pub mod palette;
pub mod primitives;
pub mod scene;

// Re-export specific items to keep the API clean for the rest of the app
pub use animation::AnimationLoop;
pub use export::{export_diagram, ExportError, ExportFormat};
pub use scene::{DiagramFrame, Rotation};
