// src/rendering/scene.rs
//
// Geometry of the atom diagram on a fixed logical canvas, centred on the
// origin. The painter scales it to whatever surface it draws on.

use crate::model::{Element, Shells};
use std::f64::consts::{FRAC_PI_4, TAU};

/// Edge of the logical canvas.
pub const CANVAS_SIZE: f64 = 300.0;

const NUCLEUS_BASE_RADIUS: f64 = 20.0;
const SHELL_SPACING_BASE: f64 = 30.0;
const MIN_ZOOM: f64 = 0.4;
const SHELL_PHASE_OFFSET: f64 = 0.5;

/// Rotation accumulator of one diagram. Grows without bound; trig
/// periodicity does the wrapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    angle: f64,
    step: f64,
}

impl Rotation {
    pub fn new(step: f64) -> Self {
        Self { angle: 0.0, step }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    pub fn advance(&mut self) -> f64 {
        self.angle += self.step;
        self.angle
    }
}

/// Everything needed to paint one frame of an element's diagram.
#[derive(Debug, Clone)]
pub struct DiagramFrame {
    pub element: Element,
    pub shells: Shells,
    pub rotation: Rotation,
}

#[derive(Debug, Clone)]
pub struct Ring {
    pub shell: usize,
    pub count: u32,
    pub radius: f64,
    pub electron_radius: f64,
    pub electrons: Vec<[f64; 2]>,
    /// Where the shell's electron count is printed (45°).
    pub label_pos: [f64; 2],
}

#[derive(Debug, Clone)]
pub struct DiagramScene {
    pub zoom: f64,
    pub nucleus_radius: f64,
    pub rings: Vec<Ring>,
}

/// Heavier atoms are drawn smaller so all shells fit.
pub fn zoom_for(atomic_number: u32) -> f64 {
    (1.0 - atomic_number as f64 / 200.0).max(MIN_ZOOM)
}

impl DiagramScene {
    pub fn compute(atomic_number: u32, shells: &Shells, angle: f64) -> Self {
        let zoom = zoom_for(atomic_number);
        let nucleus_radius = NUCLEUS_BASE_RADIUS * zoom;
        let spacing_base = SHELL_SPACING_BASE * zoom;

        let rings = shells
            .occupied()
            .map(|(shell, count)| {
                // Outer shells sit a little closer together.
                let spacing = spacing_base * (1.0 - shell as f64 * 0.05);
                let radius = nucleus_radius + (shell as f64 + 1.0) * spacing;
                let electron_radius = (5.0 * zoom * (1.0 - count as f64 / 50.0)).max(2.0);

                let phase = angle + shell as f64 * SHELL_PHASE_OFFSET;
                let electrons = (0..count)
                    .map(|i| {
                        let a = phase + TAU / count as f64 * i as f64;
                        [a.cos() * radius, a.sin() * radius]
                    })
                    .collect();

                Ring {
                    shell,
                    count,
                    radius,
                    electron_radius,
                    electrons,
                    label_pos: [FRAC_PI_4.cos() * radius, FRAC_PI_4.sin() * radius],
                }
            })
            .collect();

        Self {
            zoom,
            nucleus_radius,
            rings,
        }
    }

    pub fn from_frame(frame: &DiagramFrame) -> Self {
        Self::compute(
            frame.element.atomic_number,
            &frame.shells,
            frame.rotation.angle(),
        )
    }

    /// Radius of the outermost drawn feature.
    pub fn outer_radius(&self) -> f64 {
        self.rings
            .iter()
            .map(|r| r.radius + r.electron_radius)
            .fold(self.nucleus_radius, f64::max)
    }
}

/// (scale, centre x, centre y) mapping the logical canvas onto a surface.
pub fn view_transform(width: f64, height: f64) -> (f64, f64, f64) {
    let scale = width.min(height) / CANVAS_SIZE;
    (scale, width / 2.0, height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shells;

    #[test]
    fn test_zoom_has_a_floor() {
        assert!((zoom_for(1) - 0.995).abs() < 1e-12);
        assert!((zoom_for(100) - 0.5).abs() < 1e-12);
        assert_eq!(zoom_for(150), MIN_ZOOM);
    }

    #[test]
    fn test_empty_shells_are_skipped() {
        let sh = Shells::new([2, 0, 3, 0, 0, 0, 0]);
        let scene = DiagramScene::compute(5, &sh, 0.0);
        let drawn: Vec<usize> = scene.rings.iter().map(|r| r.shell).collect();
        assert_eq!(drawn, vec![0, 2]);
    }

    #[test]
    fn test_electrons_lie_on_their_ring() {
        let sh = shells::fallback(26);
        let scene = DiagramScene::compute(26, &sh, 1.3);
        for ring in &scene.rings {
            assert_eq!(ring.electrons.len() as u32, ring.count);
            for [x, y] in &ring.electrons {
                assert!(((x * x + y * y).sqrt() - ring.radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_ring_radii_increase_outward() {
        let sh = shells::fallback(118);
        let scene = DiagramScene::compute(118, &sh, 0.0);
        assert_eq!(scene.rings.len(), 7);
        for pair in scene.rings.windows(2) {
            assert!(pair[1].radius > pair[0].radius);
        }
        assert!(scene.outer_radius() < CANVAS_SIZE / 2.0);
    }

    #[test]
    fn test_first_electron_follows_angle_and_shell_phase() {
        let sh = Shells::new([2, 1, 0, 0, 0, 0, 0]);
        let scene = DiagramScene::compute(3, &sh, 0.25);
        let k = &scene.rings[0];
        let l = &scene.rings[1];
        let k_angle = k.electrons[0][1].atan2(k.electrons[0][0]);
        let l_angle = l.electrons[0][1].atan2(l.electrons[0][0]);
        assert!((k_angle - 0.25).abs() < 1e-9);
        assert!((l_angle - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_electron_size_has_a_minimum() {
        let sh = Shells::new([0, 0, 0, 60, 0, 0, 0]);
        let scene = DiagramScene::compute(60, &sh, 0.0);
        assert_eq!(scene.rings[0].electron_radius, 2.0);
    }

    #[test]
    fn test_rotation_advances_monotonically() {
        let mut rot = Rotation::new(0.01);
        let mut last = rot.angle();
        for _ in 0..1000 {
            let next = rot.advance();
            assert!(next > last);
            last = next;
        }
        assert!((rot.angle() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_transform_fits_smaller_edge() {
        let (scale, cx, cy) = view_transform(600.0, 300.0);
        assert_eq!(scale, 1.0);
        assert_eq!((cx, cy), (300.0, 150.0));
    }
}
