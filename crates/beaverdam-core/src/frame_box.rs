// Author: Dustin Pilgrim
// License: MIT

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::handle::{Border, Corner};
use crate::owner::KeyframeOwner;
use crate::record::BoxRecord;
use crate::surface::DrawSurface;

/// Grab distance around edges, inclusive on both sides.
pub const EDGE_TOLERANCE: f64 = 2.0;

/// Opacity boxes are drawn with.
pub const BOX_ALPHA: f32 = 0.5;

/// `w`/`h` may be negative (box dragged up or left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// (min_x, max_x, min_y, max_y)
    pub fn extents(&self) -> (f64, f64, f64, f64) {
        let (x0, x1) = (self.x, self.x + self.w);
        let (y0, y1) = (self.y, self.y + self.h);
        (x0.min(x1), x0.max(x1), y0.min(y1), y0.max(y1))
    }
}

fn near(edge: f64, coord: f64) -> bool {
    edge + EDGE_TOLERANCE >= coord && edge - EDGE_TOLERANCE <= coord
}

struct Inner {
    owner: Weak<dyn KeyframeOwner>,
    frame: u32,
    geom: Cell<Geometry>,
    interpolated: Cell<bool>,
}

/// The box of one thing at one frame.
///
/// This is a shared handle: `clone` hands out another reference to the
/// same box, the way the owner's keyframe list and the editor both point
/// at one box. Use [`FrameBox::interpolated_copy`] for an independent box.
///
/// An interpolated box is derived, not stored. The first write to any of
/// its coordinates hands it to the owner as a new keyframe and turns it
/// concrete for good.
#[derive(Clone)]
pub struct FrameBox {
    inner: Rc<Inner>,
}

impl FrameBox {
    /// New interpolated box.
    pub fn new<O: KeyframeOwner + 'static>(owner: &Rc<O>, frame: u32, geom: Geometry) -> Self {
        Self::with_state(owner, frame, geom, true)
    }

    pub fn with_state<O: KeyframeOwner + 'static>(
        owner: &Rc<O>,
        frame: u32,
        geom: Geometry,
        interpolated: bool,
    ) -> Self {
        let owner: Weak<O> = Rc::downgrade(owner);
        Self::from_parts(owner, frame, geom, interpolated)
    }

    fn from_parts(
        owner: Weak<dyn KeyframeOwner>,
        frame: u32,
        geom: Geometry,
        interpolated: bool,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                owner,
                frame,
                geom: Cell::new(geom),
                interpolated: Cell::new(interpolated),
            }),
        }
    }

    /// Stored boxes are always concrete.
    pub fn from_record<O: KeyframeOwner + 'static>(record: &BoxRecord, owner: &Rc<O>) -> Self {
        Self::with_state(
            owner,
            record.frame,
            Geometry::new(record.x, record.y, record.w, record.h),
            false,
        )
    }

    /// `None` for interpolated boxes; those are never persisted.
    pub fn to_record(&self) -> Option<BoxRecord> {
        if self.is_interpolated() {
            return None;
        }
        let g = self.geometry();
        Some(BoxRecord {
            x: g.x,
            y: g.y,
            w: g.w,
            h: g.h,
            frame: self.frame(),
        })
    }

    /// Same owner and coordinates at `new_frame`, always interpolated.
    pub fn interpolated_copy(&self, new_frame: u32) -> Self {
        Self::from_parts(self.inner.owner.clone(), new_frame, self.geometry(), true)
    }

    pub fn frame(&self) -> u32 {
        self.inner.frame
    }

    pub fn is_interpolated(&self) -> bool {
        self.inner.interpolated.get()
    }

    pub fn geometry(&self) -> Geometry {
        self.inner.geom.get()
    }

    pub fn x(&self) -> f64 {
        self.geometry().x
    }

    pub fn y(&self) -> f64 {
        self.geometry().y
    }

    pub fn w(&self) -> f64 {
        self.geometry().w
    }

    pub fn h(&self) -> f64 {
        self.geometry().h
    }

    /// True when both handles point at the same box.
    pub fn ptr_eq(&self, other: &FrameBox) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn owner(&self) -> Option<Rc<dyn KeyframeOwner>> {
        self.inner.owner.upgrade()
    }

    pub fn set_x(&self, value: f64) {
        self.update(|g| g.x = value);
    }

    pub fn set_y(&self, value: f64) {
        self.update(|g| g.y = value);
    }

    pub fn set_w(&self, value: f64) {
        self.update(|g| g.w = value);
    }

    pub fn set_h(&self, value: f64) {
        self.update(|g| g.h = value);
    }

    // Every coordinate write goes through here.
    fn update(&self, write: impl FnOnce(&mut Geometry)) {
        self.materialize();
        let mut g = self.inner.geom.get();
        write(&mut g);
        self.inner.geom.set(g);
    }

    fn materialize(&self) {
        if !self.inner.interpolated.get() {
            return;
        }
        // The owner sees the box still interpolated, with its old geometry.
        if let Some(owner) = self.inner.owner.upgrade() {
            owner.insert_keyframe(self);
        }
        self.inner.interpolated.set(false);
    }

    // ---- hit-testing (raw edges) ----

    pub fn within_top(&self, my: f64) -> bool {
        near(self.y(), my)
    }

    pub fn within_bottom(&self, my: f64) -> bool {
        near(self.y() + self.h(), my)
    }

    pub fn within_left(&self, mx: f64) -> bool {
        near(self.x(), mx)
    }

    pub fn within_right(&self, mx: f64) -> bool {
        near(self.x() + self.w(), mx)
    }

    /// Inside the normalized box, grown by the edge tolerance.
    pub fn contains(&self, mx: f64, my: f64) -> bool {
        let (min_x, max_x, min_y, max_y) = self.geometry().extents();
        min_x - EDGE_TOLERANCE <= mx
            && max_x + EDGE_TOLERANCE >= mx
            && min_y - EDGE_TOLERANCE <= my
            && max_y + EDGE_TOLERANCE >= my
    }

    /// Which raw edge or corner the pointer is on. Corners win over edges.
    pub fn classify_border(&self, mx: f64, my: f64) -> Option<Border> {
        let top = self.within_top(my);
        let bottom = self.within_bottom(my);
        let left = self.within_left(mx);
        let right = self.within_right(mx);

        if top && left {
            Some(Border::TopLeft)
        } else if top && right {
            Some(Border::TopRight)
        } else if bottom && right {
            Some(Border::BottomRight)
        } else if bottom && left {
            Some(Border::BottomLeft)
        } else if top {
            Some(Border::Top)
        } else if left {
            Some(Border::Left)
        } else if right {
            Some(Border::Right)
        } else if bottom {
            Some(Border::Bottom)
        } else {
            None
        }
    }

    /// Which corner of the normalized box the pointer is on.
    pub fn classify_corner(&self, mx: f64, my: f64) -> Option<Corner> {
        let (min_x, max_x, min_y, max_y) = self.geometry().extents();
        let at = |cx: f64, cy: f64| near(cx, mx) && near(cy, my);

        if at(max_x, max_y) {
            Some(Corner::BottomRight)
        } else if at(min_x, min_y) {
            Some(Corner::TopLeft)
        } else if at(min_x, max_y) {
            Some(Corner::BottomLeft)
        } else if at(max_x, min_y) {
            Some(Corner::TopRight)
        } else {
            None
        }
    }

    // ---- resizing ----

    /// Right edge follows the pointer, left edge stays.
    pub fn move_right(&self, x_offset: f64) {
        self.set_w(x_offset - self.x());
    }

    /// Left edge follows the pointer, right edge stays.
    pub fn move_left(&self, x_offset: f64) {
        let x = self.x();
        self.set_w(self.w() + (x - x_offset));
        self.set_x(x_offset);
    }

    pub fn move_up(&self, y_offset: f64) {
        let y = self.y();
        self.set_h(self.h() + (y - y_offset));
        self.set_y(y_offset);
    }

    pub fn move_down(&self, y_offset: f64) {
        self.set_h(y_offset - self.y());
    }

    /// Translucent fill in the owner's colour. Draws nothing once the
    /// owner is gone.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let Some(owner) = self.owner() else {
            return;
        };
        let g = self.geometry();
        surface.set_fill(owner.fill());
        surface.set_global_alpha(BOX_ALPHA);
        surface.fill_rect(g.x, g.y, g.w, g.h);
    }
}

impl fmt::Debug for FrameBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameBox")
            .field("frame", &self.frame())
            .field("geometry", &self.geometry())
            .field("interpolated", &self.is_interpolated())
            .finish()
    }
}
