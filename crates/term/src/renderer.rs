//! TerminalRenderer: flushes a pixel buffer to a real terminal.
//!
//! Two vertically adjacent pixels map onto one `▀` cell (foreground is the
//! upper pixel, background the lower), which roughly squares the pixel
//! aspect. Flushing diffs against the previously flushed grid and rewrites
//! only coalesced runs of changed cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_skyline_types::BACKGROUND;

use crate::fb::PixelBuffer;
use crate::surface::Surface;

const HALF_BLOCK: char = '▀';

/// One terminal cell: upper and lower pixel, already quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HalfCell {
    top: (u8, u8, u8),
    bottom: (u8, u8, u8),
}

impl Default for HalfCell {
    fn default() -> Self {
        let bg = BACKGROUND.to_rgb8();
        Self { top: bg, bottom: bg }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<HalfCell>,
}

impl CellGrid {
    /// Fold the y-up pixel buffer into terminal cells, top row first.
    fn from_pixels(fb: &PixelBuffer) -> Self {
        let width = fb.width() as u16;
        let height = fb.height().div_ceil(2) as u16;
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for row in 0..height {
            // Terminal row 0 shows the two topmost scanlines.
            let y_top = fb.height() as i32 - 1 - 2 * row as i32;
            let y_bottom = y_top - 1;
            for x in 0..width {
                let pick = |y: i32| fb.get(x as i32, y).unwrap_or(BACKGROUND).to_rgb8();
                cells.push(HalfCell {
                    top: pick(y_top),
                    bottom: pick(y_bottom),
                });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    fn get(&self, x: u16, y: u16) -> HalfCell {
        if x >= self.width || y >= self.height {
            return HalfCell::default();
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<CellGrid>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush the pixel buffer, diffing against the previous flush.
    pub fn draw(&mut self, fb: &PixelBuffer) -> Result<()> {
        let next = CellGrid::from_pixels(fb);

        // Take previous out to avoid borrow conflicts.
        let prev = self.last.take();
        match prev {
            Some(ref p) if p.width == next.width && p.height == next.height => {
                let changed = self.diff_redraw(&next, p)?;
                log::trace!("flushed {} changed cells", changed);
            }
            _ => self.full_redraw(&next)?,
        }

        self.last = Some(next);
        Ok(())
    }

    fn full_redraw(&mut self, grid: &CellGrid) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<HalfCell> = None;
        for y in 0..grid.height {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..grid.width {
                let cell = grid.get(x, y);
                self.put_cell(cell, &mut current)?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &CellGrid, prev: &CellGrid) -> Result<usize> {
        let mut current: Option<HalfCell> = None;
        let mut changed = 0;

        for_each_changed_run(prev, next, |x, y, len| {
            // Cursor move per run, then print cells in the run.
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y);
                self.put_cell(cell, &mut current)?;
                changed += 1;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(changed)
    }

    fn put_cell(&mut self, cell: HalfCell, current: &mut Option<HalfCell>) -> Result<()> {
        let set_colors = match current {
            Some(c) => c.top != cell.top || c.bottom != cell.bottom,
            None => true,
        };
        if set_colors {
            self.stdout
                .queue(SetForegroundColor(to_term_color(cell.top)))?;
            self.stdout
                .queue(SetBackgroundColor(to_term_color(cell.bottom)))?;
            *current = Some(cell);
        }
        self.stdout.queue(Print(HALF_BLOCK))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_term_color((r, g, b): (u8, u8, u8)) -> TermColor {
    TermColor::Rgb { r, g, b }
}

fn for_each_changed_run(
    prev: &CellGrid,
    next: &CellGrid,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width;
    let h = next.height;

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
