use serde::{Deserialize, Serialize};

/// Vertical extent shared by all five champion name labels at one resolution.
///
/// The shop lays the five names out on a single row, so one band covers every
/// slot. `top`/`bottom` are absolute pixel rows, `top < bottom` for every
/// curated entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeightBand {
    pub top: u32,
    pub bottom: u32,
}

impl HeightBand {
    pub fn new(top: u32, bottom: u32) -> Self {
        Self { top, bottom }
    }
}

/// Horizontal window of the first (leftmost) champion name, plus the stride
/// from one slot's left edge to the next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidthWindow {
    pub left: u32,
    pub right: u32,
    pub interval: u32,
}

impl WidthWindow {
    pub fn new(left: u32, right: u32, interval: u32) -> Self {
        Self {
            left,
            right,
            interval,
        }
    }

    /// Left edge of slot `slot`'s name label.
    pub fn slot_left(&self, slot: u32) -> u32 {
        self.left + slot * self.interval
    }

    /// Right edge of slot `slot`'s name label.
    pub fn slot_right(&self, slot: u32) -> u32 {
        self.right + slot * self.interval
    }
}

/// Region of Interest: one rectangular sub-area of the screenshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roi {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Roi {
    /// Create a new ROI from origin and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create an ROI from bounds (x1, y1, x2, y2).
    ///
    /// Inverted bounds saturate to a zero-sized region; callers that care
    /// check `is_valid`.
    pub fn from_bounds(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2.saturating_sub(x1),
            height: y2.saturating_sub(y1),
        }
    }

    /// True when the region has non-zero area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Exclusive right edge.
    pub fn x2(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn y2(&self) -> u32 {
        self.y + self.height
    }
}
