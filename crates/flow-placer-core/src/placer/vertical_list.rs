use super::{LineRun, Placer, cross_place, distribute_grow, extend_line, to_coord};
use crate::config::{GrowDirection, PlacerConfig};
use crate::model::{ItemSpec, Line, Placement, Rect, Size};
use tracing::trace;

/// Places items in columns, top to bottom, wrapping rightwards.
///
/// Mirror of [`HorizontalListPlacer`](super::HorizontalListPlacer) with the axes swapped: a
/// column closes on the available height or after `parallel_items` items, and each new column
/// starts to the right of the widest item of all previous columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalListPlacer {
    parallel_items: u32,
    item_spacing: u32,
    line_spacing: u32,
}

impl VerticalListPlacer {
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

    fn column_full(&self, count: usize) -> bool {
        self.parallel_items > 0 && count >= self.parallel_items as usize
    }

    fn close_column(&self, column: &[ItemSpec], run: LineRun, available_h: u32, out: &mut Placement) {
        let leftover = available_h.saturating_sub(run.used);
        let x = run.offset;
        let mut y = 0u64;
        let mut end = 0u64;
        distribute_grow(column, leftover, |i, share| {
            let item = &column[i];
            let h = item.min_size.h.saturating_add(share);
            let (dx, w) = cross_place(item.align, run.thickness, item.min_size.w);
            out.rects.push(Rect::new(x.saturating_add(dx), to_coord(y), w, h));
            end = y + h as u64;
            y = end + self.item_spacing as u64;
        });
        let extent = to_coord(end);
        trace!(first = run.first, count = column.len(), x, width = run.thickness, extent, "column closed");
        out.lines.push(Line {
            first: run.first,
            count: column.len(),
            offset: x,
            thickness: run.thickness,
            extent,
        });
        out.size.w = x.saturating_add(run.thickness);
        out.size.h = out.size.h.max(extent);
    }
}

impl Placer for VerticalListPlacer {
    fn direction(&self) -> GrowDirection {
        GrowDirection::Vertical
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
                run.used = h;
                run.thickness = w;
                continue;
            }
            let next = extend_line(run.used, self.item_spacing, h, available.h);
            let Some(next) = next.filter(|_| !self.column_full(count)) else {
                self.close_column(&items[run.first..i], run, available.h, &mut out);
                run = LineRun {
                    first: i,
                    offset: run
                        .offset
                        .saturating_add(run.thickness)
                        .saturating_add(self.line_spacing),
                    used: h,
                    thickness: w,
                };
                continue;
            };
            run.used = next;
            run.thickness = run.thickness.max(w);
        }
        self.close_column(&items[run.first..], run, available.h, &mut out);
        out
    }
}
