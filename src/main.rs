use gtk4::prelude::*;
use gtk4::{Align, Application, ApplicationWindow, Frame, Label, Orientation, Paned, ScrolledWindow, TextView};
use gtk4::Box as GtkBox;
use gtk4::{Revealer, RevealerTransitionType};
use log::LevelFilter;
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod menu;
pub mod model;
pub mod panels;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use model::ElementTable;
use panels::DetailPanel;
use state::AppState;
use ui::PeriodicGrid;

fn main() {
    let app = Application::builder()
        .application_id("org.ptable.viewer")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    // Console first, so everything after this point is logged into it.
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let console_scroll = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    let console_frame = Frame::new(None);
    console_frame.set_child(Some(&console_scroll));

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = utils::logger::init(&console_view, level) {
        eprintln!("Logger already initialised: {}", e);
    }

    let state = Rc::new(RefCell::new(AppState::load()));
    ui::install_stylesheet();

    let (width, height, show_console) = {
        let st = state.borrow();
        (st.config.window.width, st.config.window.height, st.config.window.show_console)
    };

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Interactive Periodic Table")
        .default_width(width)
        .default_height(height)
        .build();

    let console_revealer = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideUp)
        .child(&console_frame)
        .reveal_child(show_console)
        .build();

    let table = match ElementTable::builtin() {
        Ok(t) => Rc::new(t),
        Err(e) => {
            log::error!("Failed to load element data: {}", e);
            let root = GtkBox::new(Orientation::Vertical, 0);
            let msg = Label::new(Some(&format!("Failed to load element data: {}", e)));
            msg.set_vexpand(true);
            msg.set_valign(Align::Center);
            root.append(&msg);
            console_revealer.set_reveal_child(true);
            root.append(&console_revealer);
            window.set_child(Some(&root));
            window.present();
            return;
        }
    };
    log::info!("Loaded {} elements", table.len());

    // 1. TOP LEVEL: Vertical Box (Menu, Title, Legend, Content, Console)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    let title = Label::new(None);
    title.set_markup("<span size='xx-large' weight='bold'>Interactive Periodic Table</span>");
    title.set_margin_top(12);
    title.set_margin_bottom(6);

    let legend = panels::legend::build();
    legend.set_margin_start(12);
    legend.set_margin_end(12);
    legend.set_margin_bottom(6);

    // 2. MAIN CONTENT: Grid | Detail
    let grid = PeriodicGrid::new(table);
    let grid_scroll = ScrolledWindow::builder()
        .child(grid.widget())
        .hexpand(true)
        .vexpand(true)
        .build();

    let detail = DetailPanel::new(state.clone());

    let paned = Paned::new(Orientation::Horizontal);
    paned.set_start_child(Some(&grid_scroll));
    paned.set_end_child(Some(detail.widget()));
    paned.set_resize_end_child(false);
    paned.set_shrink_end_child(false);
    paned.set_vexpand(true);

    let detail_weak = Rc::downgrade(&detail);
    grid.connect_selection_changed(move |element| {
        if let Some(d) = detail_weak.upgrade() {
            d.show_element(element);
        }
    });

    // 3. Menu Bar
    let menu_bar = menu::build_menu_and_actions(
        app,
        &window,
        state.clone(),
        grid,
        detail,
        &console_revealer,
    );

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&title);
    root_vbox.append(&legend);
    root_vbox.append(&paned);
    root_vbox.append(&console_revealer);

    window.present();
}
