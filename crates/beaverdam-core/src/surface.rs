// Author: Dustin Pilgrim
// License: MIT

use crate::colour::Fill;

/// Minimal 2D drawing target (fill colour, global alpha, fill rect).
pub trait DrawSurface {
    fn set_fill(&mut self, fill: Fill);

    /// 0.0 ..= 1.0, applied on top of the fill's own alpha.
    fn set_global_alpha(&mut self, alpha: f32);

    /// `w`/`h` may be negative (flipped rectangle).
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}
