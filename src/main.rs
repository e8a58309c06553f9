//! Night-skyline runner (default binary).
//!
//! This is the animation shell: it owns the tick cadence and the per-frame
//! moon/flasher snapshots, and hands both to the core renderer. Per tick it
//! renders one frame into the pixel buffer, flushes it, then waits out the
//! remainder of the tick polling for quit/resize events.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_skyline::core::{Building, Skyline, SkylineConfig};
use tui_skyline::term::{PixelBuffer, SkyView, TerminalRenderer};
use tui_skyline::types::{
    FlasherSnapshot, FrameInput, MoonSnapshot, BACKGROUND, FLASHER_PERIOD_TICKS, FLASHER_RED,
    MOON_CYCLE_TICKS, TICK_MS,
};

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = time_seed();
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut scene = build_scene(cols, rows, seed)?;
    let mut fb = PixelBuffer::new(scene.width(), scene.height(), BACKGROUND);
    let mut view = SkyView::new(BACKGROUND);
    let mut clock = SkyClock::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let frame = clock.frame_input(&scene);
        view.draw_single_frame(&mut scene, &frame, &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                }
                Event::Resize(cols, rows) => {
                    // One scene per canvas: rebuild wholesale on resize.
                    scene = build_scene(cols, rows, seed)?;
                    fb = PixelBuffer::new(scene.width(), scene.height(), BACKGROUND);
                    view = SkyView::new(BACKGROUND);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            clock.tick();
        }
    }
}

fn build_scene(cols: u16, rows: u16, seed: u32) -> Result<Skyline> {
    // One cell shows two scanlines, so the pixel canvas is twice as tall.
    let width = cols.max(1) as u32;
    let height = (rows.max(1) as u32) * 2;
    let config = SkylineConfig::for_canvas(width, height, seed);
    let scene = Skyline::new(&config)?;
    log::info!(
        "scene {}x{}: {} buildings, cap {}",
        width,
        height,
        scene.buildings().len(),
        scene.building_max_height()
    );
    Ok(scene)
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}

/// Advances the moon and flasher snapshots between frames. The core never
/// sees time; it only consumes what this clock produces.
struct SkyClock {
    ticks: u32,
}

impl SkyClock {
    fn new() -> Self {
        Self { ticks: 0 }
    }

    fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    fn frame_input(&self, scene: &Skyline) -> FrameInput {
        FrameInput {
            moon: Some(self.moon(scene)),
            flasher: self.flasher(scene),
        }
    }

    fn moon(&self, scene: &Skyline) -> MoonSnapshot {
        let w = scene.width() as i32;
        let h = scene.height() as i32;
        let radius = (h as f32 / 10.0).clamp(2.0, 12.0);
        let ri = radius.ceil() as i32;

        // Triangle wave over one cycle: waxing up, waning down.
        let phase = (self.ticks % MOON_CYCLE_TICKS) as f32 / MOON_CYCLE_TICKS as f32;
        let (illuminated, waxing) = if phase < 0.5 {
            (phase * 2.0, true)
        } else {
            ((1.0 - phase) * 2.0, false)
        };

        // Slow drift across the sky, wrapping at the right edge.
        let span = w + 4 * ri;
        let cx = -2 * ri + ((self.ticks / 2) as i32 % span.max(1));
        let cy = h - ri - 3;

        MoonSnapshot {
            cx,
            cy,
            radius,
            illuminated,
            waxing,
        }
    }

    fn flasher(&self, scene: &Skyline) -> Option<FlasherSnapshot> {
        if (self.ticks / FLASHER_PERIOD_TICKS) % 2 == 1 {
            return None;
        }
        let tallest: &Building = scene
            .buildings()
            .iter()
            .max_by_key(|b| b.height())?;
        if tallest.height() == 0 {
            return None;
        }
        Some(FlasherSnapshot {
            cx: tallest.start_x() + tallest.width() as i32 / 2,
            cy: tallest.height() as i32 + 1,
            radius: 1.2,
            color: FLASHER_RED,
        })
    }
}
