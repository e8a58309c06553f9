//! Skyline module - the generated scene and its sampling queries
//!
//! One `Skyline` is immutable for the lifetime of a canvas: the building
//! list is generated once, sorted by `start_x`, and only rebuilt wholesale
//! when the canvas resizes. Per-frame work is pure sampling - the renderer
//! asks for star and window-light points and draws whatever comes back.

use tui_skyline_types::{Color, Point, BUILDING_LIGHT, MAX_SAMPLE_ATTEMPTS};

use crate::building::Building;
use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::style::STYLES;

/// Construction tunables for one generated scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkylineConfig {
    pub width: u32,
    pub height: u32,
    /// Tallest possible building as a fraction of canvas height, in (0, 1].
    pub height_percent_cap: f32,
    /// Building widths are drawn uniformly from [width_min, width_max).
    pub width_min: u32,
    pub width_max: u32,
    pub building_count: u32,
    pub stars_per_update: u32,
    pub building_lights_per_update: u32,
    /// The single color every building light is drawn in.
    pub building_color: Color,
    pub seed: u32,
}

impl SkylineConfig {
    /// Defaults scaled to a canvas of the given size.
    pub fn for_canvas(width: u32, height: u32, seed: u32) -> Self {
        use tui_skyline_types::{
            DEFAULT_HEIGHT_CAP, DEFAULT_LIGHTS_PER_UPDATE, DEFAULT_STARS_PER_UPDATE,
            DEFAULT_WIDTH_MAX, DEFAULT_WIDTH_MIN,
        };
        Self {
            width,
            height,
            height_percent_cap: DEFAULT_HEIGHT_CAP,
            width_min: DEFAULT_WIDTH_MIN,
            width_max: DEFAULT_WIDTH_MAX,
            building_count: (width / 6).max(4),
            stars_per_update: DEFAULT_STARS_PER_UPDATE,
            building_lights_per_update: DEFAULT_LIGHTS_PER_UPDATE,
            building_color: BUILDING_LIGHT,
            seed,
        }
    }

    /// Fail fast on values that would make generation or sampling
    /// undefined (zero modulo, unbounded loops, empty scene).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.width_min == 0 || self.width_min >= self.width_max {
            return Err(ConfigError::BadWidthRange {
                min: self.width_min,
                max: self.width_max,
            });
        }
        if !(self.height_percent_cap > 0.0 && self.height_percent_cap <= 1.0) {
            return Err(ConfigError::BadHeightCap {
                cap: self.height_percent_cap,
            });
        }
        if self.building_count == 0 {
            return Err(ConfigError::ZeroCount {
                what: "building_count",
            });
        }
        if self.stars_per_update == 0 {
            return Err(ConfigError::ZeroCount {
                what: "stars_per_update",
            });
        }
        if self.building_lights_per_update == 0 {
            return Err(ConfigError::ZeroCount {
                what: "building_lights_per_update",
            });
        }
        Ok(())
    }
}

/// The generated scene: buildings sorted ascending by `start_x`, plus the
/// sampling state. Owns its RNG so one seed reproduces the whole animation.
#[derive(Debug, Clone)]
pub struct Skyline {
    buildings: Vec<Building>,
    width: u32,
    height: u32,
    stars_per_update: u32,
    building_lights_per_update: u32,
    /// Derived cap: `height_percent_cap * height`. Window-light sampling
    /// never probes above this line.
    building_max_height: u32,
    building_color: Color,
    rng: SimpleRng,
}

impl Skyline {
    pub fn new(config: &SkylineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SimpleRng::new(config.seed);
        let max_h = (config.height_percent_cap * config.height as f32) as u32;

        let mut buildings = Vec::with_capacity(config.building_count as usize);
        for z in 0..config.building_count {
            let style = STYLES[rng.next_range(STYLES.len() as u32) as usize];
            // Squaring the uniform draw biases toward short buildings:
            // few towers, many low roofs.
            let u = rng.next_f32();
            let height = (max_h as f32 * u * u) as u32;
            let width = config.width_min + rng.next_range(config.width_max - config.width_min);
            let start_x = rng.next_range(config.width) as i32;
            buildings.push(Building::new(start_x, width, height, z, style));
        }
        buildings.sort_by_key(|b| b.start_x());

        Ok(Self {
            buildings,
            width: config.width,
            height: config.height,
            stars_per_update: config.stars_per_update,
            building_lights_per_update: config.building_lights_per_update,
            building_max_height: max_h,
            building_color: config.building_color,
            rng,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stars_per_update(&self) -> u32 {
        self.stars_per_update
    }

    pub fn building_lights_per_update(&self) -> u32 {
        self.building_lights_per_update
    }

    pub fn building_max_height(&self) -> u32 {
        self.building_max_height
    }

    pub fn building_color(&self) -> Color {
        self.building_color
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Front-most building whose box contains (x, y), if any.
    ///
    /// The list is start_x-sorted, so the sweep stops once `start_x`
    /// passes the query column. The cutoff is one-sided: a wide building
    /// starting far to the left is still visited before the break.
    /// Overlaps resolve to the strictly highest z.
    pub fn building_at(&self, x: i32, y: i32) -> Option<&Building> {
        let mut hit: Option<&Building> = None;
        for b in &self.buildings {
            if b.start_x() > x {
                break;
            }
            if !b.contains(x, y) {
                continue;
            }
            match hit {
                Some(h) if b.z() <= h.z() => {}
                _ => hit = Some(b),
            }
        }
        hit
    }

    /// Sample one star: a point in open sky with a cold random tint.
    ///
    /// Rejection-samples until `building_at` comes back empty, giving up
    /// after `MAX_SAMPLE_ATTEMPTS` so a pathological layout skips the
    /// point instead of stalling the frame.
    pub fn sample_star(&mut self) -> Option<Point> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let x = self.rng.next_range(self.width) as i32;
            // Same squared bias as building heights; the field thickens
            // toward the ground edge.
            let u = self.rng.next_f32();
            let y = (self.height as f32 * u * u) as i32;
            if self.building_at(x, y).is_some() {
                continue;
            }
            let color = Color::new(
                self.rng.next_f32() * 0.5,
                self.rng.next_f32() * 0.5,
                self.rng.next_f32(),
            );
            return Some(Point::new(x, y, color));
        }
        None
    }

    /// Sample one window-light point inside some building, drawn in the
    /// scene's single building color.
    ///
    /// Probes y in [0, building_max_height]. A candidate is kept only
    /// while the window test at (y, x) reads unlit; the transposed,
    /// inverted lookup is long-standing behavior - the on-screen light
    /// layout depends on it, so keep the argument order.
    pub fn sample_building_light(&mut self) -> Option<Point> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let x = self.rng.next_range(self.width) as i32;
            let y = self.rng.next_range(self.building_max_height + 1) as i32;
            if let Some(b) = self.building_at(x, y) {
                if !b.is_light_on(y, x) {
                    return Some(Point::new(x, y, self.building_color));
                }
            }
        }
        None
    }

    /// Handcrafted scene for tests; keeps the start_x sort invariant.
    #[cfg(test)]
    pub(crate) fn with_buildings(
        mut buildings: Vec<Building>,
        width: u32,
        height: u32,
        seed: u32,
    ) -> Self {
        buildings.sort_by_key(|b| b.start_x());
        Self {
            buildings,
            width,
            height,
            stars_per_update: 1,
            building_lights_per_update: 1,
            building_max_height: height,
            building_color: BUILDING_LIGHT,
            rng: SimpleRng::new(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BuildingStyle;

    fn test_config(seed: u32) -> SkylineConfig {
        SkylineConfig {
            width: 200,
            height: 120,
            height_percent_cap: 0.75,
            width_min: 4,
            width_max: 20,
            building_count: 30,
            stars_per_update: 12,
            building_lights_per_update: 15,
            building_color: BUILDING_LIGHT,
            seed,
        }
    }

    #[test]
    fn building_at_ignores_non_containing_boxes() {
        let scene = Skyline::with_buildings(
            vec![
                Building::new(0, 10, 20, 0, STYLES[0]),
                Building::new(30, 10, 20, 1, STYLES[0]),
            ],
            100,
            50,
            1,
        );
        assert!(scene.building_at(15, 5).is_none());
        assert!(scene.building_at(5, 25).is_none());
        assert_eq!(scene.building_at(5, 5).unwrap().z(), 0);
        assert_eq!(scene.building_at(35, 19).unwrap().z(), 1);
    }

    #[test]
    fn building_at_prefers_highest_z_on_overlap() {
        let scene = Skyline::with_buildings(
            vec![
                Building::new(10, 20, 30, 0, STYLES[0]),
                Building::new(15, 20, 30, 2, STYLES[1]),
                Building::new(12, 20, 30, 1, STYLES[2]),
            ],
            100,
            50,
            1,
        );
        // All three contain (16, 5); the most recently constructed wins.
        assert_eq!(scene.building_at(16, 5).unwrap().z(), 2);
    }

    #[test]
    fn building_at_still_finds_wide_building_from_far_left() {
        // The sweep's early break keys on start_x only; a wide box whose
        // start sits far left of the query must still be found.
        let scene = Skyline::with_buildings(
            vec![
                Building::new(0, 80, 10, 0, STYLES[0]),
                Building::new(70, 5, 40, 1, STYLES[0]),
            ],
            100,
            50,
            1,
        );
        assert_eq!(scene.building_at(60, 5).unwrap().z(), 0);
        // Query past the narrow building's start: overlap resolves by z.
        assert_eq!(scene.building_at(72, 5).unwrap().z(), 1);
    }

    #[test]
    fn star_sampling_skips_when_canvas_is_fully_covered() {
        let mut scene = Skyline::with_buildings(
            vec![Building::new(0, 100, 50, 0, STYLES[0])],
            100,
            50,
            123,
        );
        for _ in 0..10 {
            assert!(scene.sample_star().is_none());
        }
    }

    #[test]
    fn light_sampling_skips_when_no_building_reachable() {
        // All mass above the probe band: zero-height buildings only.
        let mut scene =
            Skyline::with_buildings(vec![Building::new(0, 100, 0, 0, STYLES[0])], 100, 50, 9);
        assert!(scene.sample_building_light().is_none());
    }

    #[test]
    fn light_sampling_accepts_only_unlit_transposed_cells() {
        // Asymmetric pattern: only grid row 0 lights up. Probed at (y, x),
        // that row selects by canvas x, so the transposed lookup rejects
        // exactly the columns with x % 8 == 0.
        let style = BuildingStyle::new([0b1111_1111, 0, 0, 0, 0, 0, 0, 0]);
        let mut scene = Skyline::with_buildings(
            vec![Building::new(0, 100, 50, 0, style)],
            100,
            50,
            77,
        );
        for _ in 0..200 {
            let p = scene.sample_building_light().expect("scene is samplable");
            let b = scene.building_at(p.x, p.y).unwrap();
            // Pins the accept condition: the lit test runs on (y, x).
            assert!(!b.is_light_on(p.y, p.x));
            assert_ne!(
                p.x % 8,
                0,
                "columns with x % 8 == 0 read lit under the transposed probe"
            );
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = Skyline::new(&test_config(42)).unwrap();
        let b = Skyline::new(&test_config(42)).unwrap();
        let c = Skyline::new(&test_config(43)).unwrap();
        assert_eq!(a.buildings(), b.buildings());
        assert_ne!(a.buildings(), c.buildings());
    }

    #[test]
    fn validation_rejects_degenerate_configs() {
        let mut cfg = test_config(1);
        cfg.width = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroCanvas { .. })
        ));

        let mut cfg = test_config(1);
        cfg.width_min = 20;
        cfg.width_max = 20;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BadWidthRange { .. })
        ));

        let mut cfg = test_config(1);
        cfg.height_percent_cap = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::BadHeightCap { .. })
        ));

        let mut cfg = test_config(1);
        cfg.building_count = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroCount {
                what: "building_count"
            })
        );

        assert!(test_config(1).validate().is_ok());
    }
}
