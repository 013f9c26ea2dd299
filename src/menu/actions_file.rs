use crate::panels::DetailPanel;
use crate::rendering::export_diagram;
use crate::state::AppState;
use crate::ui::show_preferences_window;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    detail: Rc<DetailPanel>,
) {
    // --- EXPORT DIAGRAM ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export", None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);
    let detail_weak = Rc::downgrade(&detail);

    export_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };
        let Some(symbol) = detail_weak
            .upgrade()
            .and_then(|d| d.displayed_frame())
            .map(|f| f.element.symbol)
        else {
            log::warn!("Select an element before exporting its diagram.");
            return;
        };

        let dialog = FileChooserNative::new(
            Some("Export Diagram"),
            Some(&win),
            FileChooserAction::Save,
            Some("Export"),
            Some("Cancel"),
        );
        dialog.set_current_name(&format!("{}.png", symbol));

        for (name, pattern) in [
            ("PNG Image (*.png)", "*.png"),
            ("PDF Document (*.pdf)", "*.pdf"),
            ("SVG Image (*.svg)", "*.svg"),
        ] {
            let filter = FileFilter::new();
            filter.set_name(Some(name));
            filter.add_pattern(pattern);
            dialog.add_filter(&filter);
        }

        let state_inner = state_weak.clone();
        let detail_inner = detail_weak.clone();
        // Holding a clone keeps the native dialog alive until it responds.
        let keep_alive = dialog.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    if let (Some(st), Some(detail)) = (state_inner.upgrade(), detail_inner.upgrade()) {
                        export_current(&path, &st.borrow(), &detail);
                    }
                }
            }
            let _ = &keep_alive;
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);

    // --- PREFERENCES ACTION ---
    let pref_action = gtk4::gio::SimpleAction::new("preferences", None);
    let win_weak_p = window.downgrade();
    let state_p = state.clone();
    let detail_p = detail.clone();
    pref_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_p.upgrade() {
            show_preferences_window(&win, state_p.clone(), detail_p.clone());
        }
    });
    app.add_action(&pref_action);

    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let win_weak_q = window.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_q.upgrade() {
            win.close();
        }
    });
    app.add_action(&quit_action);
}

fn export_current(path: &Path, state: &AppState, detail: &DetailPanel) {
    // Re-read the frame so the export matches what is on screen now.
    let Some(frame) = detail.displayed_frame() else {
        log::warn!("Nothing to export: no element is displayed.");
        return;
    };

    match export_diagram(path, &frame, &state.config.style, state.config.export_size) {
        Ok(format) => log::info!(
            "Exported {} diagram as {} to {:?}",
            frame.element.symbol,
            format.extension().to_uppercase(),
            path
        ),
        Err(e) => log::error!("Export failed: {}", e),
    }
}
