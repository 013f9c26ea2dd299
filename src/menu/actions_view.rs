// src/menu/actions_view.rs

use crate::panels::DetailPanel;
use crate::state::AppState;
use crate::ui::PeriodicGrid;
use gtk4::prelude::*;
use gtk4::{Application, Revealer};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    state: Rc<RefCell<AppState>>,
    grid: Rc<PeriodicGrid>,
    detail: Rc<DetailPanel>,
    console: &Revealer,
) {
    // 1. Clear Selection (Escape)
    let act_clear = gtk4::gio::SimpleAction::new("clear_selection", None);
    // The action owns the grid; cell controllers only hold weak references.
    act_clear.connect_activate(move |_, _| grid.clear_selection());
    app.add_action(&act_clear);

    // 2. Pause / Resume the diagram animation
    let act_pause =
        gtk4::gio::SimpleAction::new_stateful("pause_animation", None, &false.to_variant());
    let s_pause = state.clone();
    let detail_pause = Rc::downgrade(&detail);
    act_pause.connect_activate(move |action, _| {
        let paused = !action.state().and_then(|v| v.get::<bool>()).unwrap_or(false);
        action.set_state(&paused.to_variant());
        s_pause.borrow_mut().animation_paused = paused;

        if let Some(d) = detail_pause.upgrade() {
            d.refresh();
        }
        log::info!("Animation {}", if paused { "paused" } else { "resumed" });
    });
    app.add_action(&act_pause);

    // 3. Toggle Console
    let act_console = gtk4::gio::SimpleAction::new("toggle_console", None);
    let rev_weak = console.downgrade();
    let s_console = state;
    act_console.connect_activate(move |_, _| {
        if let Some(rev) = rev_weak.upgrade() {
            let show = !rev.reveals_child();
            rev.set_reveal_child(show);
            s_console.borrow_mut().config.window.show_console = show;
        }
    });
    app.add_action(&act_console);
}
