//! Cursor and viewport arithmetic for the list and detail views.

/// Rows the list view spends on chrome: header, gap, three-row search box,
/// gap, the two "more above/below" rows, gap and footer.
pub const LIST_CHROME: u16 = 10;

/// Rows the detail view spends on chrome: header, gap, name, PR summary,
/// gap, the two "more above/below" rows, gap and footer.
pub const DETAIL_CHROME: u16 = 9;

/// Visible row capacity for a terminal `height` with `reserved` chrome rows.
/// Never less than one.
pub fn capacity(height: u16, reserved: u16) -> usize {
    usize::from(height.saturating_sub(reserved)).max(1)
}

/// The slice of a list currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub more_above: bool,
    pub more_below: bool,
}

/// Cursor index plus the index of the first visible row.
///
/// Every movement returns a new value; the offset only ever moves as far
/// as needed to keep the cursor on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub cursor: usize,
    pub offset: usize,
}

impl ScrollState {
    pub fn window(self, len: usize, capacity: usize) -> Window {
        let capacity = capacity.max(1);
        let start = self.offset.min(len);
        let end = (self.offset + capacity).min(len);
        Window {
            start,
            end,
            more_above: self.offset > 0,
            more_below: self.offset + capacity < len,
        }
    }

    /// Shift the offset the least amount that puts the cursor on screen.
    pub fn reveal(self, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let offset = if self.cursor < self.offset {
            self.cursor
        } else if self.cursor >= self.offset + capacity {
            self.cursor + 1 - capacity
        } else {
            self.offset
        };
        Self { offset, ..self }
    }

    /// Keep the cursor inside `[0, len - 1]` (0 for an empty list).
    pub fn clamp(self, len: usize) -> Self {
        let cursor = self.cursor.min(len.saturating_sub(1));
        Self {
            cursor,
            offset: self.offset.min(cursor),
        }
    }

    pub fn up(self, capacity: usize) -> Self {
        Self {
            cursor: self.cursor.saturating_sub(1),
            ..self
        }
        .reveal(capacity)
    }

    pub fn down(self, len: usize, capacity: usize) -> Self {
        let cursor = if self.cursor + 1 < len {
            self.cursor + 1
        } else {
            self.cursor
        };
        Self { cursor, ..self }.reveal(capacity)
    }

    pub fn page_up(self, capacity: usize) -> Self {
        Self {
            cursor: self.cursor.saturating_sub(capacity.max(1)),
            ..self
        }
        .reveal(capacity)
    }

    pub fn page_down(self, len: usize, capacity: usize) -> Self {
        let cursor = (self.cursor + capacity.max(1)).min(len.saturating_sub(1));
        Self { cursor, ..self }.reveal(capacity)
    }
}
