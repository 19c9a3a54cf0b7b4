// Author: Dustin Pilgrim
// License: MIT

use crate::frame_box::FrameBox;
use crate::handle::Border;

/// What a pointer press on a box turns into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragMode {
    /// Offset from the box origin to the grab point.
    Move { grab_dx: f64, grab_dy: f64 },
    Resize(Border),
}

impl DragMode {
    /// Edges first, then the inside. `None` when the press misses the box.
    pub fn pick(frame_box: &FrameBox, mx: f64, my: f64) -> Option<DragMode> {
        if let Some(border) = frame_box.classify_border(mx, my) {
            return Some(DragMode::Resize(border));
        }

        if frame_box.contains(mx, my) {
            return Some(DragMode::Move {
                grab_dx: mx - frame_box.x(),
                grab_dy: my - frame_box.y(),
            });
        }

        None
    }

    /// Follow the pointer to (mx, my).
    pub fn apply(&self, frame_box: &FrameBox, mx: f64, my: f64) {
        match *self {
            DragMode::Move { grab_dx, grab_dy } => {
                frame_box.set_x(mx - grab_dx);
                frame_box.set_y(my - grab_dy);
            }

            DragMode::Resize(border) => {
                if border.touches_top() {
                    frame_box.move_up(my);
                }
                if border.touches_bottom() {
                    frame_box.move_down(my);
                }
                if border.touches_left() {
                    frame_box.move_left(mx);
                }
                if border.touches_right() {
                    frame_box.move_right(mx);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::colour::Fill;
    use crate::frame_box::Geometry;
    use crate::owner::KeyframeOwner;

    #[derive(Default)]
    struct Counter(Cell<usize>);

    impl KeyframeOwner for Counter {
        fn insert_keyframe(&self, _frame_box: &FrameBox) {
            self.0.set(self.0.get() + 1);
        }

        fn fill(&self) -> Fill {
            Fill::default()
        }
    }

    fn boxed() -> (Rc<Counter>, FrameBox) {
        let owner = Rc::new(Counter::default());
        let b = FrameBox::new(&owner, 0, Geometry::new(10.0, 10.0, 20.0, 20.0));
        (owner, b)
    }

    #[test]
    fn pick_prefers_edges() {
        let (_owner, b) = boxed();
        assert_eq!(DragMode::pick(&b, 10.0, 10.0), Some(DragMode::Resize(Border::TopLeft)));
        assert_eq!(DragMode::pick(&b, 20.0, 31.0), Some(DragMode::Resize(Border::Bottom)));
        assert_eq!(
            DragMode::pick(&b, 15.0, 20.0),
            Some(DragMode::Move { grab_dx: 5.0, grab_dy: 10.0 })
        );
        assert_eq!(DragMode::pick(&b, 50.0, 50.0), None);
    }

    #[test]
    fn move_keeps_grab_offset() {
        let (owner, b) = boxed();
        let mode = DragMode::pick(&b, 15.0, 20.0).unwrap();
        mode.apply(&b, 45.0, 0.0);
        assert_eq!(b.geometry(), Geometry::new(40.0, -10.0, 20.0, 20.0));
        assert_eq!(owner.0.get(), 1);
    }

    #[test]
    fn corner_resize_moves_two_edges() {
        let (owner, b) = boxed();
        DragMode::Resize(Border::TopLeft).apply(&b, 0.0, 5.0);
        assert_eq!(b.geometry(), Geometry::new(0.0, 5.0, 30.0, 25.0));

        DragMode::Resize(Border::BottomRight).apply(&b, 40.0, 45.0);
        assert_eq!(b.geometry(), Geometry::new(0.0, 5.0, 40.0, 40.0));
        assert_eq!(owner.0.get(), 1);
    }

    #[test]
    fn dragging_past_the_opposite_edge_flips() {
        let (_owner, b) = boxed();
        DragMode::Resize(Border::Right).apply(&b, 0.0, 0.0);
        assert_eq!((b.x(), b.w()), (10.0, -10.0));
        assert!(b.contains(5.0, 20.0));
    }
}
