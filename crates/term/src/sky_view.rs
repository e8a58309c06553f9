//! SkyView: draws one animation frame of the night skyline.
//!
//! This module is pure (no I/O). Layers composite back-to-front in fixed
//! order - stars, moon, building lights, flasher - with later layers
//! plainly overwriting earlier ones. Nothing clears the surface between
//! frames: the buffer accumulates, and only the moon erases its previous
//! position so motion leaves no trail.

use tui_skyline_core::Skyline;
use tui_skyline_types::{
    Color, FrameInput, MoonSnapshot, Rect, MOON_DARK, MOON_LIGHT, MOON_NEW_EPSILON, MOON_OUTLINE,
};

use crate::surface::Surface;

/// Per-frame renderer. Stateless apart from the background color and the
/// bounding box of the last moon disc it drew.
pub struct SkyView {
    background: Color,
    last_moon_box: Option<Rect>,
}

impl SkyView {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            last_moon_box: None,
        }
    }

    /// Render one frame onto `surface`.
    ///
    /// Absent moon/flasher snapshots skip their layer silently. Sampling
    /// that exhausts its retry cap skips that one point; the frame always
    /// completes.
    pub fn draw_single_frame(
        &mut self,
        scene: &mut Skyline,
        frame: &FrameInput,
        surface: &mut dyn Surface,
    ) {
        // Counts are inclusive: rate + 1 points per layer per frame.
        for _ in 0..=scene.stars_per_update() {
            if let Some(p) = scene.sample_star() {
                surface.fill_rect(p.x, p.y, 1, 1, p.color);
            }
        }

        if let Some(moon) = frame.moon {
            self.draw_moon(surface, &moon);
        }

        for _ in 0..=scene.building_lights_per_update() {
            if let Some(p) = scene.sample_building_light() {
                surface.fill_rect(p.x, p.y, 1, 1, p.color);
            }
        }

        if let Some(flasher) = frame.flasher {
            surface.fill_ellipse(
                flasher.cx,
                flasher.cy,
                flasher.radius,
                flasher.radius,
                flasher.color,
            );
        }
    }

    /// Draw the moon for the supplied snapshot.
    ///
    /// The previous disc's bounding box, inflated by one pixel, is wiped
    /// to the background first so a moving moon leaves no trail. The box
    /// of the disc drawn here replaces it for next frame.
    fn draw_moon(&mut self, surface: &mut dyn Surface, moon: &MoonSnapshot) {
        if let Some(prev) = self.last_moon_box {
            let e = prev.inflated(1);
            surface.fill_rect(e.x, e.y, e.w, e.h, self.background);
        }

        let f = moon.illuminated.clamp(0.0, 1.0);
        let r = moon.radius;
        let ri = r.ceil() as i32;
        let side = (2 * ri + 1) as u32;
        let (cx, cy) = (moon.cx, moon.cy);

        if f <= MOON_NEW_EPSILON {
            surface.fill_ellipse(cx, cy, r, r, MOON_DARK);
        } else if f >= 1.0 - MOON_NEW_EPSILON {
            surface.fill_ellipse(cx, cy, r, r, MOON_LIGHT);
        } else {
            // Orthographic terminator: the lit/dark boundary of the sphere
            // projects to an ellipse with horizontal semi-axis |cos θ| · r,
            // where cos θ = 1 - 2f, and the full radius vertically.
            let cos_theta = 1.0 - 2.0 * f;
            let term_rx = cos_theta.abs() * r;

            let crescent = f < 0.5;
            let (base, sliver) = if crescent {
                (MOON_DARK, MOON_LIGHT)
            } else {
                (MOON_LIGHT, MOON_DARK)
            };
            // A crescent lights the waxing side; a gibbous moon darkens
            // the opposite one.
            let on_right = if crescent { moon.waxing } else { !moon.waxing };
            let half_x = if on_right { cx } else { cx - ri };
            let half_w = (ri + 1) as u32;

            surface.fill_ellipse(cx, cy, r, r, base);
            surface.save();
            surface.clip_ellipse(cx, cy, r, r);
            surface.clip_rect(half_x, cy - ri, half_w, side);
            surface.fill_rect(half_x, cy - ri, half_w, side, sliver);
            // Refill the terminator interior in the base color. Carving
            // with a second fill instead of an even-odd composite avoids
            // the mirrored double band a wide ellipse would produce.
            surface.fill_ellipse(cx, cy, term_rx, r, base);
            surface.restore();
        }

        surface.stroke_ellipse(cx, cy, r, r, MOON_OUTLINE);

        self.last_moon_box = Some(Rect::new(cx - ri, cy - ri, side, side));
    }
}

impl Default for SkyView {
    fn default() -> Self {
        Self::new(tui_skyline_types::BACKGROUND)
    }
}
