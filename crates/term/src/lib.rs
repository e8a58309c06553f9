//! Terminal rendering module.
//!
//! This is a small, game-oriented rendering layer: the scene renders into
//! a software pixel surface that is then flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the drawing API small: fills, ellipses, and a clip stack are
//!   everything the sky needs
//! - Allow precise control over the pixel aspect (two pixels per cell via
//!   half-block glyphs)

pub mod fb;
pub mod renderer;
pub mod sky_view;
pub mod surface;

pub use tui_skyline_core as core;
pub use tui_skyline_types as types;

pub use fb::PixelBuffer;
pub use renderer::TerminalRenderer;
pub use sky_view::SkyView;
pub use surface::Surface;
