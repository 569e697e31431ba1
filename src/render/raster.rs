use super::Surface;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use std::ops::Range;

/// A square grid of colored pixels covering the playing surface.
///
/// Shapes are given in canvas units and scaled down to pixels; a pixel takes
/// on a shape's color if the pixel's center lies within the shape.  As a
/// widget, the raster is shown two pixels to a character cell using upper
/// half blocks.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Raster {
    side: u16,

    /// Pixels per canvas unit
    scale: f64,

    pixels: Vec<Color>,
}

impl Raster {
    /// Create a blank raster `side` pixels across onto which a canvas of
    /// side `extent` will be drawn
    pub(crate) fn new(side: u16, extent: f64) -> Raster {
        let scale = if extent > 0.0 {
            f64::from(side) / extent
        } else {
            0.0
        };
        Raster {
            side,
            scale,
            pixels: vec![Color::Reset; usize::from(side) * usize::from(side)],
        }
    }

    pub(crate) fn side(&self) -> u16 {
        self.side
    }

    /// Number of terminal rows needed to show the raster
    pub(crate) fn rows(&self) -> u16 {
        self.side.div_ceil(2)
    }

    pub(crate) fn get(&self, x: u16, y: u16) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.side && y < self.side)
            .then(|| usize::from(y) * usize::from(self.side) + usize::from(x))
    }

    fn set(&mut self, x: u16, y: u16, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Return the range of pixel indices along one axis that could be touched
    /// by something spanning `lo..hi` in canvas units
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn span(&self, lo: f64, hi: f64) -> Range<u16> {
        let limit = f64::from(self.side);
        let start = (lo * self.scale).floor().clamp(0.0, limit) as u16;
        let end = (hi * self.scale).ceil().clamp(0.0, limit) as u16;
        start..end
    }

    /// Return the center of pixel `(x, y)` in canvas units
    fn pixel_center(&self, x: u16, y: u16) -> (f64, f64) {
        (
            (f64::from(x) + 0.5) / self.scale,
            (f64::from(y) + 0.5) / self.scale,
        )
    }

    /// Return the pixel containing the canvas point `(x, y)`, if any
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pixel_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        let limit = f64::from(self.side);
        let px = (x * self.scale).floor();
        let py = (y * self.scale).floor();
        ((0.0..limit).contains(&px) && (0.0..limit).contains(&py)).then_some((px as u16, py as u16))
    }

    /// Paint every pixel within `bounds` (`[left, top, right, bottom]`, in
    /// canvas units) whose center satisfies `inside`.  If that paints
    /// nothing, the pixel containing `anchor` is painted instead so that
    /// small shapes don't vanish.
    fn fill_where<F>(&mut self, bounds: [f64; 4], anchor: (f64, f64), color: Color, inside: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        if self.scale <= 0.0 {
            return;
        }
        let [left, top, right, bottom] = bounds;
        let mut painted = false;
        for y in self.span(top, bottom) {
            for x in self.span(left, right) {
                let (cx, cy) = self.pixel_center(x, y);
                if inside(cx, cy) {
                    self.set(x, y, color);
                    painted = true;
                }
            }
        }
        if !painted {
            if let Some((x, y)) = self.pixel_at(anchor.0, anchor.1) {
                self.set(x, y, color);
            }
        }
    }
}

impl Surface for Raster {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let (right, bottom) = (x + width, y + height);
        self.fill_where(
            [x, y, right, bottom],
            (x + width / 2.0, y + height / 2.0),
            color,
            |px, py| (x..right).contains(&px) && (y..bottom).contains(&py),
        );
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.fill_where(
            [cx - radius, cy - radius, cx + radius, cy + radius],
            (cx, cy),
            color,
            |px, py| (px - cx).hypot(py - cy) <= radius,
        );
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
        let half = width / 2.0;
        self.fill_where(
            [
                from.0.min(to.0) - half,
                from.1.min(to.1) - half,
                from.0.max(to.0) + half,
                from.1.max(to.1) + half,
            ],
            ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0),
            color,
            |px, py| segment_distance((px, py), from, to) <= half,
        );
    }
}

/// Distance from `p` to the nearest point of the line segment from `a` to `b`
fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx.mul_add(dx, dy * dy);
    let t = if length_sq > 0.0 {
        ((p.0 - a.0).mul_add(dx, (p.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (p.0 - t.mul_add(dx, a.0)).hypot(p.1 - t.mul_add(dy, a.1))
}

impl Widget for &Raster {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows().min(area.height) {
            for col in 0..self.side.min(area.width) {
                let upper = row * 2;
                let Some(fg) = self.get(col, upper) else {
                    continue;
                };
                let bg = self.get(col, upper + 1).unwrap_or(Color::Reset);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀');
                    cell.set_fg(fg);
                    cell.set_bg(bg);
                }
            }
        }
    }
}
