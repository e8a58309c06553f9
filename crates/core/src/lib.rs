//! Scene-model crate - pure, deterministic, and testable
//!
//! This crate owns the procedural skyline: building generation, the
//! occlusion query, and the rejection sampling that feeds the frame
//! renderer. It has **zero dependencies** on UI, terminals, or I/O,
//! making it:
//!
//! - **Deterministic**: the same seed produces the same skyline and the
//!   same star/light sampling stream
//! - **Testable**: every generation and sampling property has unit tests
//! - **Portable**: usable from the terminal renderer, benchmarks, or any
//!   other frontend
//!
//! # Module Structure
//!
//! - [`building`]: immutable building geometry with containment and
//!   window-lit queries
//! - [`error`]: construction-time configuration errors
//! - [`rng`]: seedable LCG shared by generation and sampling
//! - [`skyline`]: the scene model - generation, occlusion, sampling
//! - [`style`]: the fixed palette of tileable window patterns
//!
//! # Example
//!
//! ```
//! use tui_skyline_core::{Skyline, SkylineConfig};
//!
//! let config = SkylineConfig::for_canvas(160, 96, 42);
//! let mut scene = Skyline::new(&config).unwrap();
//!
//! // Open-sky point, or None after the retry cap.
//! if let Some(star) = scene.sample_star() {
//!     assert!(scene.building_at(star.x, star.y).is_none());
//! }
//! ```

pub mod building;
pub mod error;
pub mod rng;
pub mod skyline;
pub mod style;

pub use building::Building;
pub use error::ConfigError;
pub use rng::SimpleRng;
pub use skyline::{Skyline, SkylineConfig};
pub use style::{BuildingStyle, STYLES};
