// Author: Dustin Pilgrim
// License: MIT

/// Edge or corner of a box as the user dragged it out.
///
/// Follows the raw edges (top = y, left = x), so on a flipped box `Top`
/// can sit below `Bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Border {
    Top,
    Left,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Border {
    pub fn touches_top(self) -> bool {
        matches!(self, Border::Top | Border::TopLeft | Border::TopRight)
    }

    pub fn touches_bottom(self) -> bool {
        matches!(self, Border::Bottom | Border::BottomLeft | Border::BottomRight)
    }

    pub fn touches_left(self) -> bool {
        matches!(self, Border::Left | Border::TopLeft | Border::BottomLeft)
    }

    pub fn touches_right(self) -> bool {
        matches!(self, Border::Right | Border::TopRight | Border::BottomRight)
    }
}

/// Corner of the normalized box, in screen orientation (y grows down),
/// regardless of how the box was dragged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Bidirectional resize cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    Nesw,
    Nwse,
    Ns,
    Ew,
}

impl ResizeCursor {
    /// Standard cursor name (CSS / cursor theme).
    pub fn name(self) -> &'static str {
        match self {
            ResizeCursor::Nesw => "nesw-resize",
            ResizeCursor::Nwse => "nwse-resize",
            ResizeCursor::Ns => "ns-resize",
            ResizeCursor::Ew => "ew-resize",
        }
    }
}

/// Whatever owns the pointer icon.
pub trait CursorPort {
    fn set_cursor(&mut self, cursor: ResizeCursor);
}

/// Corner wins over border.
///
/// Corners are named in screen orientation, so the diagonal cursors point
/// across the corner rather than along it: the bottom-right and top-left
/// corners get `nesw-resize`.
pub fn resize_cursor(border: Option<Border>, corner: Option<Corner>) -> Option<ResizeCursor> {
    match (corner, border) {
        (Some(Corner::BottomRight | Corner::TopLeft), _) => Some(ResizeCursor::Nesw),
        (Some(Corner::BottomLeft | Corner::TopRight), _) => Some(ResizeCursor::Nwse),
        (None, Some(Border::Top | Border::Bottom)) => Some(ResizeCursor::Ns),
        (None, Some(Border::Left | Border::Right)) => Some(ResizeCursor::Ew),
        _ => None,
    }
}

/// Sets the resize cursor for a handle; leaves the cursor alone when the
/// pointer is on no handle.
pub fn show_resize_cursor(
    port: &mut dyn CursorPort,
    border: Option<Border>,
    corner: Option<Corner>,
) {
    if let Some(cursor) = resize_cursor(border, corner) {
        port.set_cursor(cursor);
    }
}
