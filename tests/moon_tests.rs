//! Moon tests - phase geometry and self-erase on the software surface

use tui_skyline::core::{Skyline, SkylineConfig};
use tui_skyline::term::{PixelBuffer, SkyView};
use tui_skyline::types::{
    FrameInput, MoonSnapshot, BACKGROUND, BUILDING_LIGHT, MOON_DARK, MOON_LIGHT, MOON_OUTLINE,
};

const RADIUS: f32 = 10.0;

/// Low skyline: lights stay below y = 30, leaving the moon band clean.
fn scene() -> Skyline {
    let cfg = SkylineConfig {
        width: 100,
        height: 100,
        height_percent_cap: 0.3,
        width_min: 4,
        width_max: 10,
        building_count: 10,
        stars_per_update: 3,
        building_lights_per_update: 3,
        building_color: BUILDING_LIGHT,
        seed: 42,
    };
    Skyline::new(&cfg).unwrap()
}

fn moon_at(cx: i32, cy: i32, illuminated: f32, waxing: bool) -> MoonSnapshot {
    MoonSnapshot {
        cx,
        cy,
        radius: RADIUS,
        illuminated,
        waxing,
    }
}

/// Render a sequence of frames, one per supplied moon snapshot.
fn render(moons: &[Option<MoonSnapshot>]) -> PixelBuffer {
    let mut fb = PixelBuffer::new(100, 100, BACKGROUND);
    let mut view = SkyView::new(BACKGROUND);
    let mut sky = scene();
    for m in moons {
        let frame = FrameInput {
            moon: *m,
            flasher: None,
        };
        view.draw_single_frame(&mut sky, &frame, &mut fb);
    }
    fb
}

/// Probe points strictly inside the disc, clear of the outline ring.
fn interior(px: i32, py: i32, cx: i32, cy: i32) -> bool {
    let dx = (px - cx) as f32;
    let dy = (py - cy) as f32;
    (dx * dx + dy * dy).sqrt() <= RADIUS - 1.5
}

#[test]
fn new_moon_is_a_uniformly_dark_disc_with_outline() {
    let fb = render(&[Some(moon_at(50, 70, 0.0, true))]);
    for y in 0..100 {
        for x in 0..100 {
            if interior(x, y, 50, 70) {
                assert_eq!(fb.get(x, y), Some(MOON_DARK), "at ({}, {})", x, y);
            }
        }
    }
    assert_eq!(fb.get(60, 70), Some(MOON_OUTLINE));
    assert_eq!(fb.get(40, 70), Some(MOON_OUTLINE));
    assert_eq!(fb.get(50, 80), Some(MOON_OUTLINE));
}

#[test]
fn full_moon_is_a_uniformly_light_disc_with_outline() {
    let fb = render(&[Some(moon_at(50, 70, 1.0, false))]);
    for y in 0..100 {
        for x in 0..100 {
            if interior(x, y, 50, 70) {
                assert_eq!(fb.get(x, y), Some(MOON_LIGHT), "at ({}, {})", x, y);
            }
        }
    }
    assert_eq!(fb.get(60, 70), Some(MOON_OUTLINE));
}

#[test]
fn half_moon_splits_on_the_vertical_diameter() {
    // Waxing: the lit half is the right one.
    let fb = render(&[Some(moon_at(50, 70, 0.5, true))]);
    for y in 0..100 {
        for x in 0..100 {
            if !interior(x, y, 50, 70) || x == 50 {
                continue;
            }
            let expected = if x > 50 { MOON_LIGHT } else { MOON_DARK };
            assert_eq!(fb.get(x, y), Some(expected), "at ({}, {})", x, y);
        }
    }
}

#[test]
fn waning_half_moon_lights_the_left_side() {
    let fb = render(&[Some(moon_at(50, 70, 0.5, false))]);
    for y in 0..100 {
        for x in 0..100 {
            if !interior(x, y, 50, 70) || x == 50 {
                continue;
            }
            let expected = if x < 50 { MOON_LIGHT } else { MOON_DARK };
            assert_eq!(fb.get(x, y), Some(expected), "at ({}, {})", x, y);
        }
    }
}

#[test]
fn moving_moon_leaves_no_trail() {
    // Two frames, disjoint discs. Frame 2's erase step must wipe frame 1's
    // inflated bounding box back to the background.
    let fb = render(&[
        Some(moon_at(25, 75, 0.6, true)),
        Some(moon_at(70, 75, 0.6, true)),
    ]);
    for y in 64..=86 {
        for x in 14..=36 {
            assert_eq!(
                fb.get(x, y),
                Some(BACKGROUND),
                "residue at ({}, {})",
                x,
                y
            );
        }
    }
    // And the new disc is present.
    assert_ne!(fb.get(70, 75), Some(BACKGROUND));
}

#[test]
fn absent_moon_skips_the_layer_and_keeps_prior_pixels() {
    let fb = render(&[Some(moon_at(50, 75, 1.0, true)), None]);

    // The disc survives the second frame minus at most its few stars.
    let mut light = 0;
    for y in 0..100 {
        for x in 0..100 {
            if interior(x, y, 50, 75) && fb.get(x, y) == Some(MOON_LIGHT) {
                light += 1;
            }
        }
    }
    assert!(light > 200, "only {} lit pixels survived", light);
}

#[test]
fn reappearing_moon_erases_the_disc_it_last_drew() {
    let fb = render(&[
        Some(moon_at(25, 75, 0.8, true)),
        None,
        Some(moon_at(70, 75, 0.8, true)),
    ]);
    for y in 64..=86 {
        for x in 14..=36 {
            assert_eq!(fb.get(x, y), Some(BACKGROUND), "residue at ({}, {})", x, y);
        }
    }
}

#[test]
fn near_extreme_fractions_snap_to_plain_discs() {
    let plain_new = render(&[Some(moon_at(50, 70, 0.0, true))]);
    let almost_new = render(&[Some(moon_at(50, 70, 0.004, true))]);
    assert_eq!(plain_new.pixels(), almost_new.pixels());

    let plain_full = render(&[Some(moon_at(50, 70, 1.0, true))]);
    let almost_full = render(&[Some(moon_at(50, 70, 0.996, true))]);
    assert_eq!(plain_full.pixels(), almost_full.pixels());
}
