//! Drawing-surface abstraction.
//!
//! The frame renderer needs only a handful of primitives; anything that can
//! fill and clip rectangles and ellipses can present a skyline. Coordinates
//! outside the surface are clipped silently by the implementation - callers
//! never validate bounds and never hear about off-surface draws.

use tui_skyline_types::Color;

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill an axis-aligned rectangle; (x, y) is the bottom-left corner.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color);

    /// Fill the ellipse centered at (cx, cy) with semi-axes rx and ry.
    /// Non-positive semi-axes fill nothing.
    fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: f32, ry: f32, color: Color);

    /// Stroke a one-pixel outline of the ellipse.
    fn stroke_ellipse(&mut self, cx: i32, cy: i32, rx: f32, ry: f32, color: Color);

    /// Intersect the current clip region with a rectangle.
    fn clip_rect(&mut self, x: i32, y: i32, w: u32, h: u32);

    /// Intersect the current clip region with an ellipse.
    fn clip_ellipse(&mut self, cx: i32, cy: i32, rx: f32, ry: f32);

    /// Push the current clip state; a later `restore` returns to it.
    fn save(&mut self);

    /// Pop back to the most recent `save`. Without one, clears all clips.
    fn restore(&mut self);
}
