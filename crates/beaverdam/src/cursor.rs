// Author: Dustin Pilgrim
// License: MIT

use beaverdam_core::{CursorPort, ResizeCursor};

/// Remembers which cursor the host should show.
#[derive(Debug, Clone, Copy)]
pub struct CursorSlot {
    pub cursor_name: &'static str,
}

impl Default for CursorSlot {
    fn default() -> Self {
        Self { cursor_name: "default" }
    }
}

impl CursorPort for CursorSlot {
    fn set_cursor(&mut self, cursor: ResizeCursor) {
        self.cursor_name = cursor.name();
    }
}
