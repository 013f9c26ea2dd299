// src/ui/diagram_view.rs

use crate::model::{shells, Element};
use crate::rendering::scene::{DiagramFrame, Rotation, CANVAS_SIZE};
use crate::rendering::{painter, AnimationLoop};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::DrawingArea;
use std::cell::RefCell;
use std::rc::Rc;

/// Animated atom diagram for a single element. Built fresh for each element
/// shown; dropping it cancels its frame loop.
pub struct DiagramView {
    area: DrawingArea,
    frame: Rc<RefCell<DiagramFrame>>,
    animation: RefCell<AnimationLoop>,
    state: Rc<RefCell<AppState>>,
}

impl DiagramView {
    pub fn new(element: &Element, state: Rc<RefCell<AppState>>) -> Self {
        // Shell counts are fixed for the life of the view.
        let shells = shells::derive(&element.electron_configuration, element.atomic_number);
        if shells.exceeds_capacity() {
            log::debug!(
                "{}: configuration places more electrons in a shell than the Bohr capacity ({})",
                element.symbol,
                shells
            );
        }

        let step = state.borrow().config.animation.effective_rotation_step();
        let frame = Rc::new(RefCell::new(DiagramFrame {
            element: element.clone(),
            shells,
            rotation: Rotation::new(step),
        }));

        let area = DrawingArea::new();
        area.set_content_width(CANVAS_SIZE as i32);
        area.set_content_height(CANVAS_SIZE as i32);
        area.set_hexpand(true);

        let f = frame.clone();
        let s = state.clone();
        area.set_draw_func(move |_, cr, w, h| {
            let frame = f.borrow();
            let st = s.borrow();
            if let Err(e) = painter::draw_diagram(cr, &frame, &st.config.style, w as f64, h as f64) {
                log::error!("Failed to draw {} diagram: {}", frame.element.symbol, e);
            }
        });

        let view = Self {
            area,
            frame,
            animation: RefCell::new(AnimationLoop::new()),
            state,
        };
        view.sync_animation();
        view
    }

    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }

    /// Copy of the current frame, for export.
    pub fn snapshot(&self) -> DiagramFrame {
        self.frame.borrow().clone()
    }

    /// Starts, restarts or stops the loop to match the current settings.
    pub fn sync_animation(&self) {
        let (active, fps, step) = {
            let st = self.state.borrow();
            (
                st.animation_active(),
                st.config.animation.effective_frame_rate(),
                st.config.animation.effective_rotation_step(),
            )
        };
        self.frame.borrow_mut().rotation.set_step(step);

        let mut animation = self.animation.borrow_mut();
        if !active {
            animation.stop();
            self.area.queue_draw();
            return;
        }

        let frame = self.frame.clone();
        let area = self.area.downgrade();
        animation.start(fps, move || {
            frame.borrow_mut().rotation.advance();
            if let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        });
    }
}

impl Drop for DiagramView {
    fn drop(&mut self) {
        if self.animation.get_mut().stop() {
            log::debug!("Stopped diagram loop for {}", self.frame.borrow().element.symbol);
        }
    }
}
