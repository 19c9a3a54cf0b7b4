// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use beaverdam_core::{DrawSurface, Fill};
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

/// Raster target for boxes.
pub struct PixmapSurface {
    pixmap: Pixmap,
    fill: Fill,
    global_alpha: f32,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32, background: Fill) -> Result<Self, String> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| format!("tiny-skia pixmap alloc failed ({width}x{height})"))?;
        pixmap.fill(Color::from_rgba8(
            background.r(),
            background.g(),
            background.b(),
            background.a(),
        ));

        Ok(Self {
            pixmap,
            fill: Fill::BLACK,
            global_alpha: 1.0,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        self.pixmap()
            .save_png(path)
            .map_err(|e| format!("write png {}: {e}", path.display()))
    }

    fn paint(&self) -> Paint<'static> {
        let alpha = (self.fill.a() as f32 * self.global_alpha.clamp(0.0, 1.0)).round() as u8;

        let mut paint = Paint::default();
        paint.set_color_rgba8(self.fill.r(), self.fill.g(), self.fill.b(), alpha);
        paint.anti_alias = false;
        paint
    }
}

impl DrawSurface for PixmapSurface {
    fn set_fill(&mut self, fill: Fill) {
        self.fill = fill;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha;
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        // Negative sizes fill the flipped rectangle, like a 2D canvas does.
        let (l, r) = (x.min(x + w), x.max(x + w));
        let (t, b) = (y.min(y + h), y.max(y + h));

        if l == r || t == b {
            return;
        }

        let Some(rect) = Rect::from_ltrb(l as f32, t as f32, r as f32, b as f32) else {
            return;
        };

        let paint = self.paint();
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(surface: &PixmapSurface, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let c = surface.pixmap().pixel(x, y).unwrap().demultiply();
        (c.red(), c.green(), c.blue(), c.alpha())
    }

    #[test]
    fn half_alpha_blends_over_background() {
        let mut s = PixmapSurface::new(20, 20, Fill::BLACK).unwrap();
        s.set_fill(Fill(0xFFFF_0000));
        s.set_global_alpha(0.5);
        s.fill_rect(2.0, 2.0, 10.0, 10.0);

        let (r, g, b, a) = rgba(&s, 5, 5);
        assert!((126..=129).contains(&r), "r={r}");
        assert_eq!((g, b, a), (0, 0, 255));
        assert_eq!(rgba(&s, 15, 15), (0, 0, 0, 255));
    }

    #[test]
    fn negative_size_fills_flipped_rect() {
        let mut s = PixmapSurface::new(20, 20, Fill::BLACK).unwrap();
        s.set_fill(Fill::WHITE);
        s.fill_rect(12.0, 12.0, -10.0, -10.0);

        assert_eq!(rgba(&s, 5, 5), (255, 255, 255, 255));
        assert_eq!(rgba(&s, 15, 15), (0, 0, 0, 255));
    }

    #[test]
    fn degenerate_rect_is_ignored() {
        let mut s = PixmapSurface::new(4, 4, Fill::BLACK).unwrap();
        s.set_fill(Fill::WHITE);
        s.fill_rect(1.0, 1.0, 0.0, 3.0);
        assert_eq!(rgba(&s, 1, 1), (0, 0, 0, 255));
    }

    #[test]
    fn zero_sized_pixmap_is_an_error() {
        assert!(PixmapSurface::new(0, 10, Fill::BLACK).is_err());
    }
}
