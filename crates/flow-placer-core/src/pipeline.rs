use crate::config::{Align, PlacerConfig};
use crate::model::{ItemSpec, Line, Placement, PlacementStats, Rect, Size};
use crate::placer::{Placer, PlacerItem, build_from_config};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Keyed item for layout-only APIs (key + minimum size + policy).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutItem<K = String> {
    pub key: K,
    #[serde(flatten)]
    pub spec: ItemSpec,
}

impl<K> LayoutItem<K> {
    pub fn new(key: K, w: u32, h: u32) -> Self {
        Self {
            key,
            spec: ItemSpec::new(w, h),
        }
    }
    pub fn with_align(mut self, align: Align) -> Self {
        self.spec.align = align;
        self
    }
    pub fn with_grow(mut self, grow: u32) -> Self {
        self.spec.grow = grow;
        self
    }
}

impl<K> PlacerItem for LayoutItem<K> {
    fn min_size(&self) -> Size {
        self.spec.min_size
    }
    fn align(&self) -> Align {
        self.spec.align
    }
    fn grow(&self) -> u32 {
        self.spec.grow
    }
    fn spec(&self) -> ItemSpec {
        self.spec
    }
}

/// A placed item: its key, final rect and the line it ended up in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedItem<K = String> {
    pub key: K,
    pub frame: Rect,
    pub line: usize,
}

/// Keyed placement result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<K = String> {
    pub available: Size,
    pub size: Size,
    pub items: Vec<PlacedItem<K>>,
    pub lines: Vec<Line>,
}

impl<K> Layout<K> {
    pub fn stats(&self) -> PlacementStats {
        self.as_placement().stats()
    }

    fn as_placement(&self) -> Placement {
        Placement {
            rects: self.items.iter().map(|p| p.frame).collect(),
            size: self.size,
            lines: self.lines.clone(),
        }
    }

    /// How far the content exceeds the available size on each axis.
    pub fn overflow(&self) -> Size {
        Size::new(
            self.size.w.saturating_sub(self.available.w),
            self.size.h.saturating_sub(self.available.h),
        )
    }

    /// Looks up the frame placed for `key`.
    pub fn frame_of<Q>(&self, key: &Q) -> Option<Rect>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.items.iter().find(|p| p.key == *key).map(|p| p.frame)
    }
}

/// Runs `placer` over any slice of placer items.
pub fn place_items<T: PlacerItem>(placer: &dyn Placer, available: Size, items: &[T]) -> Placement {
    let specs: Vec<ItemSpec> = items.iter().map(PlacerItem::spec).collect();
    placer.compute_placement(available, &specs)
}

#[instrument(skip_all, fields(direction = ?placer.direction(), items = items.len()))]
/// Places keyed items and returns frames in input order.
///
/// Notes:
/// - Keys are cloned into the result; the input slice is only borrowed for the call.
/// - The content size may exceed `available`; check [`Placement::overflow`] for scrolling.
pub fn place_layout<K: Clone>(
    placer: &dyn Placer,
    available: Size,
    items: &[LayoutItem<K>],
) -> Layout<K> {
    let placement = place_items(placer, available, items);
    debug!(
        lines = placement.lines.len(),
        width = placement.size.w,
        height = placement.size.h,
        "layout computed"
    );
    let mut placed = Vec::with_capacity(items.len());
    for (line_idx, line) in placement.lines.iter().enumerate() {
        for i in line.first..line.first + line.count {
            placed.push(PlacedItem {
                key: items[i].key.clone(),
                frame: placement.rects[i],
                line: line_idx,
            });
        }
    }
    Layout {
        available,
        size: placement.size,
        items: placed,
        lines: placement.lines,
    }
}

/// One independent container to lay out in a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutJob {
    #[serde(default)]
    pub config: PlacerConfig,
    pub available: Size,
    pub items: Vec<ItemSpec>,
}

#[instrument(skip_all, fields(jobs = jobs.len()))]
/// Lays out many independent containers. Output order matches `jobs`.
///
/// With the `parallel` feature the jobs are spread over the rayon pool; every job builds
/// its own placer so no state is shared between them.
pub fn layout_batch(jobs: &[LayoutJob]) -> Vec<Placement> {
    let run = |job: &LayoutJob| build_from_config(&job.config).compute_placement(job.available, &job.items);
    #[cfg(feature = "parallel")]
    {
        jobs.par_iter().map(run).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter().map(run).collect()
    }
}
