// src/panels/detail.rs

use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, Frame, Grid, Label, Orientation, PolicyType, ScrolledWindow};

use crate::model::Element;
use crate::rendering::palette::category_class;
use crate::rendering::DiagramFrame;
use crate::state::AppState;
use crate::ui::diagram_view::DiagramView;
use crate::utils::report;
use std::cell::RefCell;
use std::rc::Rc;

/// Right-hand panel: properties of the selected element and its diagram.
pub struct DetailPanel {
    scroll: ScrolledWindow,
    content: GtkBox,
    diagram: RefCell<Option<DiagramView>>,
    state: Rc<RefCell<AppState>>,
}

impl DetailPanel {
    pub fn new(state: Rc<RefCell<AppState>>) -> Rc<Self> {
        let scroll = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vscrollbar_policy(PolicyType::Automatic)
            .min_content_width(360)
            .build();

        let content = GtkBox::new(Orientation::Vertical, 12);
        content.set_margin_start(12);
        content.set_margin_end(12);
        content.set_margin_top(12);
        content.set_margin_bottom(12);
        scroll.set_child(Some(&content));

        let panel = Rc::new(Self {
            scroll,
            content,
            diagram: RefCell::new(None),
            state,
        });
        panel.show_element(None);
        panel
    }

    pub fn widget(&self) -> &ScrolledWindow {
        &self.scroll
    }

    /// Replaces the panel contents. The previous diagram (and its frame loop)
    /// is torn down before the next one is built.
    pub fn show_element(&self, element: Option<&Element>) {
        self.diagram.borrow_mut().take();

        while let Some(child) = self.content.first_child() {
            self.content.remove(&child);
        }

        let Some(el) = element else {
            let hint = Label::new(Some("Select an element to see its details."));
            hint.set_opacity(0.6);
            hint.set_valign(Align::Center);
            hint.set_vexpand(true);
            self.content.append(&hint);
            log::debug!("Selection cleared");
            return;
        };

        self.content.append(&build_header(el));
        self.content.append(&build_properties(el));

        if !el.description.is_empty() {
            let desc = Label::new(Some(&el.description));
            desc.set_wrap(true);
            desc.set_xalign(0.0);
            self.content.append(&desc);
        }

        let view = DiagramView::new(el, self.state.clone());
        log::info!("{}", report::element_summary(el, &view.snapshot().shells));
        self.content.append(&build_structure_section(el, &view));
        *self.diagram.borrow_mut() = Some(view);
    }

    /// Current frame of the displayed diagram, if any.
    pub fn displayed_frame(&self) -> Option<DiagramFrame> {
        self.diagram.borrow().as_ref().map(|d| d.snapshot())
    }

    /// Re-applies animation settings (pause, frame rate, speed) and redraws.
    pub fn refresh(&self) {
        if let Some(view) = self.diagram.borrow().as_ref() {
            view.sync_animation();
            view.widget().queue_draw();
        }
    }
}

fn build_header(el: &Element) -> GtkBox {
    let header = GtkBox::new(Orientation::Horizontal, 12);

    let tile = Label::new(Some(&el.symbol));
    tile.add_css_class("symbol-tile");
    tile.add_css_class(&category_class(el.category));
    header.append(&tile);

    let info = GtkBox::new(Orientation::Vertical, 4);
    info.set_valign(Align::Center);

    let name = Label::new(None);
    name.set_markup(&format!(
        "<span size='x-large' weight='bold'>{}</span>",
        gtk4::glib::markup_escape_text(&el.name)
    ));
    name.set_xalign(0.0);
    info.append(&name);

    for line in [
        format!("Atomic Number: {}", el.atomic_number),
        format!("Atomic Mass: {}", el.atomic_mass),
    ] {
        let l = Label::new(Some(&line));
        l.set_xalign(0.0);
        info.append(&l);
    }

    header.append(&info);
    header
}

fn build_properties(el: &Element) -> Frame {
    let frame = Frame::new(Some("Properties"));
    let grid = Grid::new();
    grid.set_row_spacing(4);
    grid.set_column_spacing(12);
    grid.set_margin_top(8);
    grid.set_margin_bottom(8);
    grid.set_margin_start(8);
    grid.set_margin_end(8);

    for (row, (key, value)) in report::property_rows(el).into_iter().enumerate() {
        let k = Label::new(Some(key));
        k.set_xalign(0.0);
        k.set_opacity(0.7);
        let v = Label::new(Some(&value));
        v.set_xalign(0.0);
        v.set_wrap(true);
        v.set_selectable(true);
        grid.attach(&k, 0, row as i32, 1, 1);
        grid.attach(&v, 1, row as i32, 1, 1);
    }

    frame.set_child(Some(&grid));
    frame
}

fn legend_entry(css: &str, text: &str) -> GtkBox {
    let entry = GtkBox::new(Orientation::Horizontal, 6);
    let dot = GtkBox::new(Orientation::Horizontal, 0);
    dot.add_css_class("legend-dot");
    dot.add_css_class(css);
    dot.set_valign(Align::Center);
    entry.append(&dot);
    entry.append(&Label::new(Some(text)));
    entry
}

fn build_structure_section(el: &Element, view: &DiagramView) -> Frame {
    let frame = Frame::new(Some("Atomic Structure"));
    let vbox = GtkBox::new(Orientation::Vertical, 8);
    vbox.set_margin_top(8);
    vbox.set_margin_bottom(8);
    vbox.set_margin_start(8);
    vbox.set_margin_end(8);

    vbox.append(view.widget());

    let legend = GtkBox::new(Orientation::Horizontal, 16);
    legend.set_halign(Align::Center);
    legend.append(&legend_entry(
        "nucleus-dot",
        &format!("Nucleus (Z={})", el.atomic_number),
    ));
    legend.append(&legend_entry("electron-dot", "Electrons"));
    vbox.append(&legend);

    let config = Label::new(Some(&format!(
        "Electron configuration: {}",
        el.electron_configuration
    )));
    config.set_wrap(true);
    vbox.append(&config);

    let shells = Label::new(Some(&format!("Shells: {}", view.snapshot().shells)));
    shells.set_opacity(0.7);
    vbox.append(&shells);

    frame.set_child(Some(&vbox));
    frame
}
