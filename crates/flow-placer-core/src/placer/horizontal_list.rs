use super::{LineRun, Placer, cross_place, distribute_grow, extend_line, to_coord};
use crate::config::{GrowDirection, PlacerConfig};
use crate::model::{ItemSpec, Line, Placement, Rect, Size};
use tracing::trace;

/// Places items in rows, left to right, wrapping downwards.
///
/// A row closes when the next item would push it past the available width, or when it already
/// holds `parallel_items` items (if non-zero). An item wider than the available width still
/// gets a row of its own at its minimum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalListPlacer {
    parallel_items: u32,
    item_spacing: u32,
    line_spacing: u32,
}

impl HorizontalListPlacer {
    pub fn new(parallel_items: u32) -> Self {
        Self {
            parallel_items,
            item_spacing: 0,
            line_spacing: 0,
        }
    }

    pub fn from_config(cfg: &PlacerConfig) -> Self {
        Self {
            parallel_items: cfg.parallel_items,
            item_spacing: cfg.item_spacing,
            line_spacing: cfg.line_spacing,
        }
    }

    pub fn with_spacing(mut self, item_spacing: u32, line_spacing: u32) -> Self {
        self.item_spacing = item_spacing;
        self.line_spacing = line_spacing;
        self
    }

    fn row_full(&self, count: usize) -> bool {
        self.parallel_items > 0 && count >= self.parallel_items as usize
    }

    /// Emits the rects of the row described by `run`.
    fn close_row(&self, row: &[ItemSpec], run: LineRun, available_w: u32, out: &mut Placement) {
        let leftover = available_w.saturating_sub(run.used);
        let y = run.offset;
        let mut x = 0u64;
        let mut end = 0u64;
        distribute_grow(row, leftover, |i, share| {
            let item = &row[i];
            let w = item.min_size.w.saturating_add(share);
            let (dy, h) = cross_place(item.align, run.thickness, item.min_size.h);
            out.rects.push(Rect::new(to_coord(x), y.saturating_add(dy), w, h));
            end = x + w as u64;
            x = end + self.item_spacing as u64;
        });
        let extent = to_coord(end);
        trace!(first = run.first, count = row.len(), y, height = run.thickness, extent, "row closed");
        out.lines.push(Line {
            first: run.first,
            count: row.len(),
            offset: y,
            thickness: run.thickness,
            extent,
        });
        out.size.w = out.size.w.max(extent);
        out.size.h = y.saturating_add(run.thickness);
    }
}

impl Placer for HorizontalListPlacer {
    fn direction(&self) -> GrowDirection {
        GrowDirection::Horizontal
    }

    fn parallel_items(&self) -> u32 {
        self.parallel_items
    }

    fn compute_placement(&self, available: Size, items: &[ItemSpec]) -> Placement {
        let mut out = Placement::with_capacity(items.len());
        if items.is_empty() {
            return out;
        }

        let mut run = LineRun::default();
        for (i, item) in items.iter().enumerate() {
            let count = i - run.first;
            let Size { w, h } = item.min_size;
            if count == 0 {
                run.used = w;
                run.thickness = h;
                continue;
            }
            let next = extend_line(run.used, self.item_spacing, w, available.w);
            let Some(next) = next.filter(|_| !self.row_full(count)) else {
                self.close_row(&items[run.first..i], run, available.w, &mut out);
                run = LineRun {
                    first: i,
                    offset: run
                        .offset
                        .saturating_add(run.thickness)
                        .saturating_add(self.line_spacing),
                    used: w,
                    thickness: h,
                };
                continue;
            };
            run.used = next;
            run.thickness = run.thickness.max(h);
        }
        self.close_row(&items[run.first..], run, available.w, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Align;

    #[test]
    fn spacing_counts_towards_the_wrap() {
        let p = HorizontalListPlacer::new(0).with_spacing(5, 3);
        let items = vec![ItemSpec::new(10, 10); 3];
        // 10 + 5 + 10 = 25 fits, + 5 + 10 = 40 does not
        let out = p.compute_placement(Size::new(25, 0), &items);
        assert_eq!(out.rects[1], Rect::new(15, 0, 10, 10));
        assert_eq!(out.rects[2], Rect::new(0, 13, 10, 10));
        assert_eq!(out.size, Size::new(25, 23));
    }

    #[test]
    fn stretch_takes_row_height() {
        let p = HorizontalListPlacer::new(0);
        let items = [
            ItemSpec::new(10, 30),
            ItemSpec::new(10, 10).with_align(Align::Stretch),
            ItemSpec::new(10, 10).with_align(Align::End),
        ];
        let out = p.compute_placement(Size::new(100, 100), &items);
        assert_eq!(out.rects[1], Rect::new(10, 0, 10, 30));
        assert_eq!(out.rects[2], Rect::new(20, 20, 10, 10));
        assert_eq!(out.lines.len(), 1);
    }
}
