// src/rendering/primitives.rs

use gtk4::cairo::{self, Context, FontSlant, FontWeight, RadialGradient};
use std::f64::consts::TAU;

pub type Rgb = (f64, f64, f64);

/// Shaded sphere: off-centre highlight fading to a darker rim.
pub fn draw_sphere(cr: &Context, x: f64, y: f64, radius: f64, color: Rgb) -> Result<(), cairo::Error> {
    let (r, g, b) = color;

    let gradient = RadialGradient::new(
        x - radius * 0.3,
        y - radius * 0.3,
        radius * 0.1,
        x,
        y,
        radius,
    );
    gradient.add_color_stop_rgb(0.0, (r + 0.5).min(1.0), (g + 0.5).min(1.0), (b + 0.5).min(1.0));
    gradient.add_color_stop_rgb(0.3, r, g, b);
    gradient.add_color_stop_rgb(1.0, r * 0.6, g * 0.6, b * 0.6);

    cr.set_source(&gradient)?;
    cr.arc(x, y, radius, 0.0, TAU);
    cr.fill()
}

pub fn fill_circle(cr: &Context, x: f64, y: f64, radius: f64, color: Rgb) -> Result<(), cairo::Error> {
    cr.set_source_rgb(color.0, color.1, color.2);
    cr.arc(x, y, radius, 0.0, TAU);
    cr.fill()
}

pub fn stroke_circle(
    cr: &Context,
    x: f64,
    y: f64,
    radius: f64,
    line_width: f64,
    color: Rgb,
) -> Result<(), cairo::Error> {
    cr.new_sub_path();
    cr.set_source_rgb(color.0, color.1, color.2);
    cr.set_line_width(line_width);
    cr.arc(x, y, radius, 0.0, TAU);
    cr.stroke()
}

/// Text centred on (x, y).
pub fn draw_centered_text(
    cr: &Context,
    text: &str,
    x: f64,
    y: f64,
    size: f64,
    bold: bool,
    color: Rgb,
) -> Result<(), cairo::Error> {
    let weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
    cr.select_font_face("Sans", FontSlant::Normal, weight);
    cr.set_font_size(size);

    let ext = cr.text_extents(text)?;
    cr.set_source_rgb(color.0, color.1, color.2);
    cr.move_to(
        x - ext.width() / 2.0 - ext.x_bearing(),
        y - ext.height() / 2.0 - ext.y_bearing(),
    );
    cr.show_text(text)
}
