use crate::config::Align;
use serde::{Deserialize, Serialize};

/// Width/height pair in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const ZERO: Size = Size { w: 0, h: 0 };

    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    /// True if `self` is at least `other` in both dimensions.
    pub fn covers(&self, other: &Size) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }
    /// Returns true if the two rectangles share any pixel. Empty rectangles never intersect.
    pub fn intersects(&self, r: &Rect) -> bool {
        if self.w == 0 || self.h == 0 || r.w == 0 || r.h == 0 {
            return false;
        }
        let (a_x2, a_y2) = (self.x as u64 + self.w as u64, self.y as u64 + self.h as u64);
        let (b_x2, b_y2) = (r.x as u64 + r.w as u64, r.y as u64 + r.h as u64);
        !((self.x as u64) >= b_x2 || (r.x as u64) >= a_x2 || (self.y as u64) >= b_y2 || (r.y as u64) >= a_y2)
    }
}

/// Layout-relevant description of one child item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct ItemSpec {
    /// Smallest size the item accepts; placed rects are never smaller.
    pub min_size: Size,
    /// Cross-axis alignment inside the line.
    #[serde(default)]
    pub align: Align,
    /// Main-axis growth weight. 0 keeps the minimum main size.
    #[serde(default)]
    pub grow: u32,
}

impl ItemSpec {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            min_size: Size::new(w, h),
            align: Align::Start,
            grow: 0,
        }
    }
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
    pub fn with_grow(mut self, grow: u32) -> Self {
        self.grow = grow;
        self
    }
}

/// One row (horizontal list) or column (vertical list) of a placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Line {
    /// Index of the first item in the line.
    pub first: usize,
    /// Number of items in the line.
    pub count: usize,
    /// Cross-axis origin of the line (y for rows, x for columns).
    pub offset: u32,
    /// Cross-axis size of the line (row height / column width).
    pub thickness: u32,
    /// Main-axis size consumed by the line, including spacing and growth.
    pub extent: u32,
}

/// Result of one placement pass.
///
/// `rects[i]` belongs to input item `i`. `size` is the content size actually used and may
/// exceed the available size when items cannot shrink any further.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Placement {
    pub rects: Vec<Rect>,
    pub size: Size,
    pub lines: Vec<Line>,
}

impl Placement {
    pub fn with_capacity(items: usize) -> Self {
        Self {
            rects: Vec::with_capacity(items),
            size: Size::ZERO,
            lines: Vec::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.rects.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
    /// Index of the line holding item `index`.
    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| index >= l.first && index < l.first + l.count)
    }
    /// How far the content exceeds `available` on each axis (zero when it fits).
    pub fn overflow(&self, available: Size) -> Size {
        Size::new(
            self.size.w.saturating_sub(available.w),
            self.size.h.saturating_sub(available.h),
        )
    }

    /// Computes occupancy statistics for this placement.
    pub fn stats(&self) -> PlacementStats {
        let used_area: u64 = self.rects.iter().map(|r| r.size().area()).sum();
        let content_area = self.size.area();
        let occupancy = if content_area > 0 {
            used_area as f64 / content_area as f64
        } else {
            0.0
        };
        let max_line_items = self.lines.iter().map(|l| l.count).max().unwrap_or(0);
        let avg_line_items = if self.lines.is_empty() {
            0.0
        } else {
            self.rects.len() as f64 / self.lines.len() as f64
        };
        PlacementStats {
            num_items: self.rects.len(),
            num_lines: self.lines.len(),
            width: self.size.w,
            height: self.size.h,
            content_area,
            used_area,
            occupancy,
            max_line_items,
            avg_line_items,
        }
    }
}

/// Statistics about how densely a placement fills its content area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlacementStats {
    pub num_items: usize,
    /// Number of rows (horizontal) or columns (vertical).
    pub num_lines: usize,
    pub width: u32,
    pub height: u32,
    /// width * height of the content.
    pub content_area: u64,
    /// Sum of the placed rect areas.
    pub used_area: u64,
    /// used_area / content_area (0.0 to 1.0).
    pub occupancy: f64,
    pub max_line_items: usize,
    pub avg_line_items: f64,
}

impl PlacementStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Lines: {}, Size: {}x{}, Occupancy: {:.2}%, Used Area: {} px², Max/Line: {}",
            self.num_items,
            self.num_lines,
            self.width,
            self.height,
            self.occupancy * 100.0,
            self.used_area,
            self.max_line_items,
        )
    }

    /// Returns unused content area in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.content_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.content_area > 0 {
            (self.wasted_area() as f64 / self.content_area as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(3, 3, 0, 4)));
    }

    #[test]
    fn line_of_finds_the_holding_line() {
        let line = |first, count, offset| Line {
            first,
            count,
            offset,
            thickness: 10,
            extent: 20,
        };
        let p = Placement {
            rects: vec![Rect::default(); 5],
            size: Size::new(20, 30),
            lines: vec![line(0, 2, 0), line(2, 2, 10), line(4, 1, 20)],
        };
        assert_eq!(p.line_of(0), Some(0));
        assert_eq!(p.line_of(2), Some(1));
        assert_eq!(p.line_of(3), Some(1));
        assert_eq!(p.line_of(4), Some(2));
        assert_eq!(p.line_of(5), None);
    }

    #[test]
    fn overflow_is_saturating() {
        let p = Placement {
            rects: vec![Rect::new(0, 0, 40, 10)],
            size: Size::new(40, 10),
            lines: vec![],
        };
        assert_eq!(p.overflow(Size::new(25, 100)), Size::new(15, 0));
        assert_eq!(p.overflow(Size::new(100, 100)), Size::ZERO);
    }
}
