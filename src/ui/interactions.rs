// src/ui/interactions.rs

use crate::ui::grid::PeriodicGrid;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, EventControllerMotion, GestureClick};
use std::rc::Weak;

/// Hover, click and tooltip handling for one grid cell. Controllers hold a
/// weak reference so the grid can be dropped with its widgets.
pub fn attach_cell_controllers(cell: &GtkBox, number: u32, grid: Weak<PeriodicGrid>) {
  // 1. HOVER
  let motion = EventControllerMotion::new();
  let g = grid.clone();
  motion.connect_enter(move |_, _, _| {
    if let Some(grid) = g.upgrade() {
      grid.hover(number);
    }
  });
  let g = grid.clone();
  motion.connect_leave(move |_| {
    if let Some(grid) = g.upgrade() {
      grid.leave(number);
    }
  });
  cell.add_controller(motion);

  // 2. CLICK (SELECTION)
  let click = GestureClick::new();
  click.set_button(gtk4::gdk::BUTTON_PRIMARY);
  let g = grid.clone();
  click.connect_released(move |gesture, _n_press, _x, _y| {
    if let Some(grid) = g.upgrade() {
      grid.click(number);
      gesture.set_state(gtk4::EventSequenceState::Claimed);
    }
  });
  cell.add_controller(click);

  // 3. TOOLTIP (hidden while an element is selected)
  cell.connect_query_tooltip(move |_, _, _, _, tooltip| {
    let Some(markup) = grid.upgrade().and_then(|g| g.tooltip_markup(number)) else {
      return false;
    };
    tooltip.set_markup(Some(&markup));
    true
  });
}
