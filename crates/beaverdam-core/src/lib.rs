// Author: Dustin Pilgrim
// License: MIT

pub mod colour;
pub mod drag;
pub mod error;
pub mod frame_box;
pub mod handle;
pub mod owner;
pub mod record;
pub mod surface;

pub use colour::Fill;
pub use drag::DragMode;
pub use error::{CoreError, Result};
pub use frame_box::{FrameBox, Geometry, BOX_ALPHA, EDGE_TOLERANCE};
pub use handle::{resize_cursor, show_resize_cursor, Border, Corner, CursorPort, ResizeCursor};
pub use owner::KeyframeOwner;
pub use record::BoxRecord;
pub use surface::DrawSurface;
