// src/ui/preferences.rs

use crate::config::{MAX_FRAME_RATE, MAX_ROTATION_STEP, MIN_FRAME_RATE, MIN_ROTATION_STEP};
use crate::panels::DetailPanel;
use crate::state::AppState;
use gdk4 as gdk;
use gtk4::{self as gtk, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;

type Rgb = (f64, f64, f64);

pub fn show_preferences_window(
    parent: &gtk::ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    detail: Rc<DetailPanel>,
) {
    let window = gtk::Window::builder()
        .title("Preferences")
        .transient_for(parent)
        .modal(false)
        .default_width(360)
        .default_height(420)
        .resizable(false)
        .build();

    let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);

    let notebook = gtk::Notebook::new();
    notebook.set_vexpand(true);

    let animation_tab = build_animation_tab(state.clone(), detail.clone());
    notebook.append_page(&animation_tab, Some(&gtk::Label::new(Some("Animation"))));

    let diagram_tab = build_diagram_tab(state.clone(), detail);
    notebook.append_page(&diagram_tab, Some(&gtk::Label::new(Some("Diagram"))));

    main_vbox.append(&notebook);

    // --- FOOTER (Save / Close) ---
    let footer_box = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    footer_box.set_margin_top(10);
    footer_box.set_margin_bottom(10);
    footer_box.set_margin_start(10);
    footer_box.set_margin_end(10);
    footer_box.set_halign(gtk::Align::End);

    let save_btn = gtk::Button::with_label("Save");
    let s = state.clone();
    save_btn.connect_clicked(move |_| s.borrow().save_config());

    let close_btn = gtk::Button::with_label("Close");
    let win_clone = window.clone();
    close_btn.connect_clicked(move |_| win_clone.close());

    footer_box.append(&save_btn);
    footer_box.append(&close_btn);
    main_vbox.append(&footer_box);

    window.set_child(Some(&main_vbox));
    window.present();
}

fn padded_box(margin: i32) -> gtk::Box {
    let container = gtk::Box::new(gtk::Orientation::Vertical, 10);
    container.set_margin_top(margin);
    container.set_margin_bottom(margin);
    container.set_margin_start(margin);
    container.set_margin_end(margin);
    container
}

fn add_slider(
    label: &str,
    val: f64,
    min: f64,
    max: f64,
    step: f64,
    digits: i32,
    box_cont: &gtk::Box,
    cb: impl Fn(f64) + 'static,
) {
    let lbl = gtk::Label::new(Some(label));
    lbl.set_halign(gtk::Align::Start);
    lbl.set_margin_top(5);
    box_cont.append(&lbl);

    let sc = gtk::Scale::with_range(gtk::Orientation::Horizontal, min, max, step);
    sc.set_value(val);
    sc.set_digits(digits);
    sc.set_draw_value(true);
    sc.set_margin_bottom(5);
    sc.connect_value_changed(move |s| cb(s.value()));
    box_cont.append(&sc);
}

fn build_animation_tab(state: Rc<RefCell<AppState>>, detail: Rc<DetailPanel>) -> gtk::Box {
    let container = padded_box(15);
    let anim = state.borrow().config.animation.clone();

    let check = gtk::CheckButton::with_label("Animate electrons");
    check.set_active(anim.enabled);
    let s = state.clone();
    let d = detail.clone();
    check.connect_toggled(move |btn| {
        s.borrow_mut().config.animation.enabled = btn.is_active();
        d.refresh();
    });
    container.append(&check);

    let s = state.clone();
    let d = detail.clone();
    add_slider(
        "Frame rate (fps)",
        anim.frame_rate as f64,
        MIN_FRAME_RATE as f64,
        MAX_FRAME_RATE as f64,
        1.0,
        0,
        &container,
        move |v| {
            s.borrow_mut().config.animation.frame_rate = v.round() as u32;
            d.refresh();
        },
    );

    let s = state.clone();
    let d = detail;
    add_slider(
        "Rotation speed (rad/frame)",
        anim.effective_rotation_step(),
        MIN_ROTATION_STEP,
        MAX_ROTATION_STEP,
        0.001,
        3,
        &container,
        move |v| {
            s.borrow_mut().config.animation.rotation_step = v;
            d.refresh();
        },
    );

    container
}

fn build_diagram_tab(state: Rc<RefCell<AppState>>, detail: Rc<DetailPanel>) -> gtk::Box {
    let container = padded_box(15);
    let style = state.borrow().config.style.clone();

    // (label, initial colour, setter)
    let colours: [(&str, Rgb, fn(&mut AppState, Rgb)); 4] = [
        ("Background", style.background_color, |st, c| st.config.style.background_color = c),
        ("Nucleus", style.nucleus_color, |st, c| st.config.style.nucleus_color = c),
        ("Electrons", style.electron_color, |st, c| st.config.style.electron_color = c),
        ("Orbits", style.orbit_color, |st, c| st.config.style.orbit_color = c),
    ];

    for (label, (r, g, b), setter) in colours {
        let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
        let lbl = gtk::Label::new(Some(label));
        lbl.set_halign(gtk::Align::Start);

        let btn = gtk::ColorButton::new();
        btn.set_rgba(&gdk::RGBA::new(r as f32, g as f32, b as f32, 1.0));
        btn.set_hexpand(true);
        btn.set_halign(gtk::Align::End);

        let s = state.clone();
        let d = detail.clone();
        btn.connect_color_set(move |b| {
            let c = b.rgba();
            setter(
                &mut s.borrow_mut(),
                (c.red() as f64, c.green() as f64, c.blue() as f64),
            );
            d.refresh();
        });

        row.append(&lbl);
        row.append(&btn);
        container.append(&row);
    }

    container.append(&gtk::Separator::new(gtk::Orientation::Horizontal));

    let counts = gtk::CheckButton::with_label("Show electron count per shell");
    counts.set_active(style.show_shell_counts);
    let s = state.clone();
    counts.connect_toggled(move |btn| {
        s.borrow_mut().config.style.show_shell_counts = btn.is_active();
        detail.refresh();
    });
    container.append(&counts);

    container
}
