pub mod diagram_view;
pub mod grid;
pub mod interactions;
pub mod preferences;

// Re-exports
pub use grid::PeriodicGrid;
pub use preferences::show_preferences_window;

use crate::rendering::palette;
use gtk4::gdk;
use gtk4::{CssProvider, STYLE_PROVIDER_PRIORITY_APPLICATION};

/// Registers the category colours and cell styles for the whole display.
pub fn install_stylesheet() {
    let provider = CssProvider::new();
    provider.load_from_data(&palette::stylesheet());

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        log::warn!("No display available; element colours will not be applied");
    }
}
