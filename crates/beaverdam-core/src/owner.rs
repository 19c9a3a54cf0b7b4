// Author: Dustin Pilgrim
// License: MIT

use crate::colour::Fill;
use crate::frame_box::FrameBox;

/// The object a box belongs to.
///
/// Boxes only hold a weak reference to their owner, so implementations
/// are free to store the boxes they receive.
pub trait KeyframeOwner {
    /// Record `frame_box` as a stored keyframe at its frame.
    ///
    /// Called once, right before the first write to an interpolated box.
    /// The box still reports itself interpolated during the call and must
    /// not be written to from here. The handle shares state with the box
    /// being edited, so later writes are visible through it.
    fn insert_keyframe(&self, frame_box: &FrameBox);

    fn fill(&self) -> Fill;
}
