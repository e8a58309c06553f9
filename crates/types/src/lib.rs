//! Shared data types and constants for the skyline animation.
//!
//! All types here are pure data with no external dependencies, so they can
//! be used from any layer (scene model, renderers, tests) without pulling in
//! terminal or I/O code.
//!
//! # Coordinate system
//!
//! Scene and surface coordinates share one convention: integer pixels with
//! `y = 0` at the ground scanline and y growing upward. Buildings are
//! anchored at `y = 0`; the moon floats near the top of the canvas. The
//! terminal backend flips rows only at flush time.

/// Frame cadence of the animation shell, in milliseconds.
pub const TICK_MS: u32 = 100;

/// Retry cap for one rejection-sampled point. A sample that fails this many
/// times in a row is skipped for the frame instead of looping further.
pub const MAX_SAMPLE_ATTEMPTS: u32 = 64;

/// Illuminated fractions within this distance of 0 or 1 render as a plain
/// new/full disc with no terminator geometry.
pub const MOON_NEW_EPSILON: f32 = 0.005;

/// Default scene tunables used by the binary shell.
pub const DEFAULT_HEIGHT_CAP: f32 = 0.65;
pub const DEFAULT_WIDTH_MIN: u32 = 4;
pub const DEFAULT_WIDTH_MAX: u32 = 16;
pub const DEFAULT_STARS_PER_UPDATE: u32 = 12;
pub const DEFAULT_LIGHTS_PER_UPDATE: u32 = 15;

/// Moon cycle length for the shell's phase clock, in ticks.
pub const MOON_CYCLE_TICKS: u32 = 1200;

/// Flasher duty cycle: on for this many ticks, then off for as many.
pub const FLASHER_PERIOD_TICKS: u32 = 5;

/// Night-sky background.
pub const BACKGROUND: Color = Color::new(0.02, 0.02, 0.08);

/// Lit and shadowed lunar surface.
pub const MOON_LIGHT: Color = Color::new(0.90, 0.90, 0.78);
pub const MOON_DARK: Color = Color::new(0.09, 0.09, 0.13);

/// Mid-gray outline stroked around the moon disc in every phase.
pub const MOON_OUTLINE: Color = Color::new(0.50, 0.50, 0.50);

/// Warm window glow shared by every building.
pub const BUILDING_LIGHT: Color = Color::new(1.00, 0.85, 0.40);

/// Beacon red for the rooftop flasher.
pub const FLASHER_RED: Color = Color::new(1.00, 0.15, 0.10);

/// A color as three normalized channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantize to 8-bit channels for terminal output.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

/// One sampled point: integer coordinates plus the color to draw it in.
/// Produced per sample and consumed immediately, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Point {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Axis-aligned integer rectangle; (x, y) is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Grow the rectangle by `amount` pixels on every side.
    pub fn inflated(self, amount: u32) -> Self {
        Self {
            x: self.x - amount as i32,
            y: self.y - amount as i32,
            w: self.w + 2 * amount,
            h: self.h + 2 * amount,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w as i32 && y >= self.y && y < self.y + self.h as i32
    }
}

/// Externally owned moon state, supplied fresh each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonSnapshot {
    pub cx: i32,
    pub cy: i32,
    /// Disc radius in pixels; must be positive.
    pub radius: f32,
    /// Portion of the visible disc that is lit: 0 = new, 1 = full.
    /// Clamped into `[0, 1]` before any geometry is derived from it.
    pub illuminated: f32,
    /// True while illumination is increasing; picks the lit side.
    pub waxing: bool,
}

/// Externally owned beacon state, supplied fresh each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlasherSnapshot {
    pub cx: i32,
    pub cy: i32,
    pub radius: f32,
    pub color: Color,
}

/// Everything the frame renderer consumes besides the scene model itself.
/// Absent layers are skipped silently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub moon: Option<MoonSnapshot>,
    pub flasher: Option<FlasherSnapshot>,
}
