// src/ui/grid.rs

use crate::model::{Element, ElementTable, SelectionChange, SelectionState};
use crate::rendering::palette::category_class;
use crate::ui::interactions;
use crate::utils::report;
use gtk4::prelude::*;
use gtk4::{glib, Box as GtkBox, Grid, Label, Orientation};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

type SelectionListener = Box<dyn Fn(Option<&Element>)>;

/// The periodic table itself. Owns hover/selection state and reports
/// selection changes to listeners.
pub struct PeriodicGrid {
    grid: Grid,
    table: Rc<ElementTable>,
    cells: HashMap<u32, GtkBox>,
    selection: RefCell<SelectionState>,
    listeners: RefCell<Vec<SelectionListener>>,
}

impl PeriodicGrid {
    pub fn new(table: Rc<ElementTable>) -> Rc<Self> {
        let grid = Grid::new();
        grid.set_row_spacing(3);
        grid.set_column_spacing(3);
        grid.set_margin_start(10);
        grid.set_margin_end(10);
        grid.set_margin_top(10);
        grid.set_margin_bottom(10);

        let mut cells = HashMap::with_capacity(table.len());
        let mut used_rows = HashSet::new();
        for el in table.iter() {
            let cell = build_cell(el);
            grid.attach(&cell, el.xpos as i32 - 1, el.ypos as i32 - 1, 1, 1);
            used_rows.insert(el.ypos);
            cells.insert(el.atomic_number, cell);
        }

        // Keep empty rows (the gap above the f-block) from collapsing.
        let (_, rows) = table.grid_size();
        for row in (1..=rows).filter(|r| !used_rows.contains(r)) {
            let spacer = GtkBox::new(Orientation::Horizontal, 0);
            spacer.set_size_request(-1, 12);
            grid.attach(&spacer, 0, row as i32 - 1, 1, 1);
        }

        let this = Rc::new(Self {
            grid,
            table,
            cells,
            selection: RefCell::new(SelectionState::new()),
            listeners: RefCell::new(Vec::new()),
        });

        for (&number, cell) in &this.cells {
            interactions::attach_cell_controllers(cell, number, Rc::downgrade(&this));
        }

        this
    }

    pub fn widget(&self) -> &Grid {
        &self.grid
    }

    pub fn connect_selection_changed<F>(&self, f: F)
    where
        F: Fn(Option<&Element>) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(f));
    }

    pub fn hover(&self, number: u32) {
        let previous = self.selection.borrow().hovered();
        self.selection.borrow_mut().hover(number);
        if let Some(prev) = previous {
            self.sync_classes(prev);
        }
        self.sync_classes(number);
    }

    pub fn leave(&self, number: u32) {
        self.selection.borrow_mut().leave(number);
        self.sync_classes(number);
    }

    pub fn click(&self, number: u32) {
        let previous = self.selection.borrow().selected();
        let change = self.selection.borrow_mut().click(number);
        if let Some(prev) = previous {
            self.sync_classes(prev);
        }
        self.sync_classes(number);

        if change == SelectionChange::Cleared {
            log::debug!("Deselected element {}", number);
        }
        self.notify(change.selected());
    }

    pub fn clear_selection(&self) {
        let previous = self.selection.borrow().selected();
        if self.selection.borrow_mut().clear() {
            if let Some(prev) = previous {
                self.sync_classes(prev);
            }
            self.notify(None);
        }
    }

    /// Tooltip markup for `number`, or None while a selection hides tooltips.
    pub fn tooltip_markup(&self, number: u32) -> Option<String> {
        if self.selection.borrow().tooltip_target() != Some(number) {
            return None;
        }
        let el = self.table.get(number)?;
        let [name, number_line, hint] = report::tooltip_lines(el);
        Some(format!(
            "<b>{}</b>\n{}\n<i>{}</i>",
            glib::markup_escape_text(&name),
            glib::markup_escape_text(&number_line),
            glib::markup_escape_text(&hint)
        ))
    }

    fn sync_classes(&self, number: u32) {
        let Some(cell) = self.cells.get(&number) else {
            return;
        };
        let sel = self.selection.borrow();
        set_class(cell, "hovered", sel.is_hovered(number));
        set_class(cell, "selected", sel.is_selected(number));
    }

    fn notify(&self, selected: Option<u32>) {
        let element = selected.and_then(|n| self.table.get(n));
        for listener in self.listeners.borrow().iter() {
            listener(element);
        }
    }
}

fn set_class(widget: &GtkBox, class: &str, on: bool) {
    if on {
        widget.add_css_class(class);
    } else {
        widget.remove_css_class(class);
    }
}

fn build_cell(el: &Element) -> GtkBox {
    let cell = GtkBox::new(Orientation::Vertical, 0);
    cell.add_css_class("element-cell");
    cell.add_css_class(&category_class(el.category));

    let number = Label::new(Some(&el.atomic_number.to_string()));
    number.add_css_class("cell-number");
    number.set_xalign(0.0);

    let symbol = Label::new(Some(&el.symbol));
    symbol.add_css_class("cell-symbol");

    let name = Label::new(Some(&el.name));
    name.add_css_class("cell-name");
    name.set_ellipsize(gtk4::pango::EllipsizeMode::End);
    name.set_max_width_chars(9);

    cell.append(&number);
    cell.append(&symbol);
    cell.append(&name);
    cell.set_has_tooltip(true);
    cell
}
