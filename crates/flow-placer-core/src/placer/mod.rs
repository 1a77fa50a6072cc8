use crate::config::{Align, GrowDirection, PlacerConfig};
use crate::error::PlacerError;
use crate::model::{ItemSpec, Placement, Size};

pub mod horizontal_list;
pub mod vertical_list;

pub use horizontal_list::HorizontalListPlacer;
pub use vertical_list::VerticalListPlacer;

/// A placer computes where the children of a container go.
///
/// Implementations hold configuration only. `compute_placement` must be a pure function of
/// its arguments: identical inputs give identical outputs, rects never overlap, every rect is
/// at least the item's minimum size and input order is preserved along the flow.
pub trait Placer: Send + Sync + std::fmt::Debug {
    fn direction(&self) -> GrowDirection;
    fn parallel_items(&self) -> u32;
    fn compute_placement(&self, available: Size, items: &[ItemSpec]) -> Placement;
}

/// Anything that can describe itself as a placer item.
pub trait PlacerItem {
    fn min_size(&self) -> Size;
    fn align(&self) -> Align {
        Align::Start
    }
    fn grow(&self) -> u32 {
        0
    }
    fn spec(&self) -> ItemSpec {
        ItemSpec {
            min_size: self.min_size(),
            align: self.align(),
            grow: self.grow(),
        }
    }
}

impl PlacerItem for ItemSpec {
    fn min_size(&self) -> Size {
        self.min_size
    }
    fn align(&self) -> Align {
        self.align
    }
    fn grow(&self) -> u32 {
        self.grow
    }
    fn spec(&self) -> ItemSpec {
        *self
    }
}

impl PlacerItem for Size {
    fn min_size(&self) -> Size {
        *self
    }
}

/// Builds the placer for `direction`; `parallel_items == 0` wraps on available space only.
pub fn build(direction: GrowDirection, parallel_items: u32) -> Box<dyn Placer> {
    build_from_config(&PlacerConfig {
        direction,
        parallel_items,
        ..Default::default()
    })
}

pub fn build_from_config(cfg: &PlacerConfig) -> Box<dyn Placer> {
    match cfg.direction {
        GrowDirection::Horizontal => Box::new(HorizontalListPlacer::from_config(cfg)),
        GrowDirection::Vertical => Box::new(VerticalListPlacer::from_config(cfg)),
    }
}

/// Builds a placer from a raw direction tag (`0` horizontal, `1` vertical).
///
/// # Panics
/// On any other tag. Reaching that branch is a caller bug, not a runtime condition.
pub fn build_from_tag(tag: u8, parallel_items: u32) -> Box<dyn Placer> {
    match GrowDirection::from_tag(tag) {
        Some(direction) => build(direction, parallel_items),
        None => panic!("{}", PlacerError::InvalidDirectionTag(tag)),
    }
}

/// Running state of the line currently being filled.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LineRun {
    /// Index of the first item of the line.
    pub first: usize,
    /// Cross-axis origin of the line.
    pub offset: u32,
    /// Main-axis pixels consumed so far, spacing included.
    pub used: u32,
    /// Largest cross-axis minimum seen so far.
    pub thickness: u32,
}

/// Main-axis length of a line after adding `spacing + next`, or `None` when the sum does not
/// fit `limit` (or `u32` at all).
#[inline]
pub(crate) fn extend_line(used: u32, spacing: u32, next: u32, limit: u32) -> Option<u32> {
    used.checked_add(spacing)?.checked_add(next).filter(|&total| total <= limit)
}

/// Narrows a main-axis coordinate. Lines are bounded by `extend_line`, so only the position
/// past the last item of an oversized line can exceed `u32`.
#[inline]
pub(crate) fn to_coord(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Cross-axis `(offset, size)` of an item inside a line of `thickness`.
#[inline]
pub(crate) fn cross_place(align: Align, thickness: u32, cross: u32) -> (u32, u32) {
    let slack = thickness.saturating_sub(cross);
    match align {
        Align::Start => (0, cross),
        Align::Center => (slack / 2, cross),
        Align::End => (slack, cross),
        Align::Stretch => (0, thickness.max(cross)),
    }
}

/// Splits `leftover` main-axis pixels among the growing items of a line.
///
/// Shares are proportional to `grow`; the pixels lost to integer division go one each to the
/// first growing items in input order. `apply(i, share)` is called for every item of the line
/// (share 0 for non-growing items) and the distributed total is returned.
pub(crate) fn distribute_grow(
    line: &[ItemSpec],
    leftover: u32,
    mut apply: impl FnMut(usize, u32),
) -> u32 {
    let total_weight: u64 = line.iter().map(|it| it.grow as u64).sum();
    if leftover == 0 || total_weight == 0 {
        for i in 0..line.len() {
            apply(i, 0);
        }
        return 0;
    }
    let floor_share = |it: &ItemSpec| (leftover as u64 * it.grow as u64 / total_weight) as u32;
    let floored: u32 = line.iter().map(floor_share).sum();
    let mut remainder = leftover - floored;
    for (i, it) in line.iter().enumerate() {
        let mut share = floor_share(it);
        if it.grow > 0 && remainder > 0 {
            share += 1;
            remainder -= 1;
        }
        apply(i, share);
    }
    leftover
}
