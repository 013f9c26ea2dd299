use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, License};

const CONTROLS_TEXT: &str = "\
Hover an element        Show its name and atomic number
Click an element        Show details and the atom diagram
Click it again / Esc    Clear the selection
Ctrl+E                  Export the diagram (PNG, PDF, SVG)
Ctrl+Space              Pause or resume the animation
F9                      Show or hide the console
Ctrl+P                  Preferences
Ctrl+Q                  Quit";

pub fn setup(app: &Application, window: &ApplicationWindow) {
    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("help_about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("ptable")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("An interactive periodic table with animated Bohr-style atom diagrams, written in Rust and GTK4.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);

    // --- CONTROLS ACTION ---
    let controls_action = gtk4::gio::SimpleAction::new("help_controls", None);
    let win_weak_c = window.downgrade();

    controls_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_c.upgrade() {
            let dialog = gtk4::Window::builder()
                .title("Controls & Shortcuts")
                .transient_for(&win)
                .modal(true)
                .resizable(false)
                .build();

            let label = gtk4::Label::new(Some(CONTROLS_TEXT));
            label.add_css_class("monospace");
            label.set_margin_top(15);
            label.set_margin_bottom(15);
            label.set_margin_start(20);
            label.set_margin_end(20);
            dialog.set_child(Some(&label));
            dialog.present();
        }
    });
    app.add_action(&controls_action);
}
