// src/rendering/painter.rs

use super::primitives::{draw_centered_text, draw_sphere, fill_circle, stroke_circle};
use super::scene::{view_transform, DiagramFrame, DiagramScene};
use crate::config::DiagramStyle;
use gtk4::cairo;

const TEXT_COLOR: (f64, f64, f64) = (1.0, 1.0, 1.0);
const LABEL_COLOR: (f64, f64, f64) = (0.8, 0.8, 0.8);

/// Paints one frame of the atom diagram filling a `width` x `height` surface.
pub fn draw_diagram(
    cr: &cairo::Context,
    frame: &DiagramFrame,
    style: &DiagramStyle,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let (bg_r, bg_g, bg_b) = style.background_color;
    cr.set_source_rgb(bg_r, bg_g, bg_b);
    cr.paint()?;

    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }

    let scene = DiagramScene::from_frame(frame);
    let (scale, cx, cy) = view_transform(width, height);

    cr.save()?;
    cr.translate(cx, cy);
    cr.scale(scale, scale);
    let result = draw_scene(cr, &scene, frame, style);
    cr.restore()?;
    result
}

fn draw_scene(
    cr: &cairo::Context,
    scene: &DiagramScene,
    frame: &DiagramFrame,
    style: &DiagramStyle,
) -> Result<(), cairo::Error> {
    let nr = scene.nucleus_radius;

    // Nucleus with symbol, atomic number underneath
    draw_sphere(cr, 0.0, 0.0, nr, style.nucleus_color)?;
    draw_centered_text(cr, &frame.element.symbol, 0.0, 0.0, nr * 0.9, true, TEXT_COLOR)?;
    draw_centered_text(
        cr,
        &frame.element.atomic_number.to_string(),
        0.0,
        nr * 1.5,
        nr * 0.6,
        false,
        TEXT_COLOR,
    )?;

    for ring in &scene.rings {
        stroke_circle(cr, 0.0, 0.0, ring.radius, 1.0, style.orbit_color)?;

        for [x, y] in &ring.electrons {
            fill_circle(cr, *x, *y, ring.electron_radius, style.electron_color)?;
        }

        if style.show_shell_counts {
            draw_centered_text(
                cr,
                &ring.count.to_string(),
                ring.label_pos[0],
                ring.label_pos[1],
                8.0 * scene.zoom,
                false,
                LABEL_COLOR,
            )?;
        }
    }

    Ok(())
}
