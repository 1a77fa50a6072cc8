use crate::config::{GrowDirection, PlacerConfig};
use crate::error::{PlacerError, Result};
use crate::model::{Placement, Rect, Size};
use crate::pipeline::{LayoutItem, place_items};
use crate::placer::{Placer, build_from_config};
use tracing::{debug, trace};

/// A layout-owning container: one placer, its children and the last placement.
///
/// `layout` only re-runs the placer when the available size or the child set changed since
/// the previous call, so repeated passes during a window resize stay cheap.
#[derive(Debug)]
pub struct FlowContainer<K = String> {
    cfg: PlacerConfig,
    placer: Box<dyn Placer>,
    items: Vec<LayoutItem<K>>,
    cache: Option<CachedLayout>,
    layouts_computed: u64,
}

#[derive(Debug)]
struct CachedLayout {
    available: Size,
    placement: Placement,
}

impl<K> FlowContainer<K> {
    pub fn new(cfg: PlacerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            placer: build_from_config(&cfg),
            cfg,
            items: Vec::new(),
            cache: None,
            layouts_computed: 0,
        })
    }

    /// Container with default spacing for `direction`.
    pub fn with_placer(direction: GrowDirection, parallel_items: u32) -> Self {
        let cfg = PlacerConfig {
            direction,
            parallel_items,
            ..Default::default()
        };
        Self {
            placer: build_from_config(&cfg),
            cfg,
            items: Vec::new(),
            cache: None,
            layouts_computed: 0,
        }
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.cfg
    }

    pub fn placer(&self) -> &dyn Placer {
        self.placer.as_ref()
    }

    pub fn items(&self) -> &[LayoutItem<K>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of placer runs so far (cache hits excluded).
    pub fn layouts_computed(&self) -> u64 {
        self.layouts_computed
    }

    /// Appends a child and returns its index.
    pub fn push(&mut self, item: LayoutItem<K>) -> usize {
        self.items.push(item);
        self.invalidate();
        self.items.len() - 1
    }

    pub fn insert(&mut self, index: usize, item: LayoutItem<K>) -> Result<()> {
        if index > self.items.len() {
            return Err(PlacerError::InvalidInput(format!(
                "insert index {} out of range for {} items",
                index,
                self.items.len()
            )));
        }
        self.items.insert(index, item);
        self.invalidate();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<LayoutItem<K>> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.invalidate();
        Some(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.invalidate();
    }

    pub fn set_items(&mut self, items: Vec<LayoutItem<K>>) {
        self.items = items;
        self.invalidate();
    }

    pub fn set_direction(&mut self, direction: GrowDirection) {
        if self.cfg.direction != direction {
            self.cfg.direction = direction;
            self.rebuild_placer();
        }
    }

    pub fn set_parallel_items(&mut self, parallel_items: u32) {
        if self.cfg.parallel_items != parallel_items {
            self.cfg.parallel_items = parallel_items;
            self.rebuild_placer();
        }
    }

    /// Replaces the whole configuration. Invalid configs leave the container untouched.
    pub fn reconfigure(&mut self, cfg: PlacerConfig) -> Result<()> {
        cfg.validate()?;
        if self.cfg != cfg {
            self.cfg = cfg;
            self.rebuild_placer();
        }
        Ok(())
    }

    fn rebuild_placer(&mut self) {
        debug!(direction = ?self.cfg.direction, parallel_items = self.cfg.parallel_items, "rebuilding placer");
        // the old placer is dropped here
        self.placer = build_from_config(&self.cfg);
        self.invalidate();
    }

    /// Forgets the cached placement; the next `layout` call recomputes.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Returns the placement for `available`, recomputing only when needed.
    pub fn layout(&mut self, available: Size) -> &Placement {
        let cache = match self.cache.take() {
            Some(c) if c.available == available => {
                trace!(w = available.w, h = available.h, "layout cache hit");
                c
            }
            _ => {
                let placement = place_items(self.placer.as_ref(), available, &self.items);
                self.layouts_computed += 1;
                debug!(
                    w = available.w,
                    h = available.h,
                    items = self.items.len(),
                    lines = placement.lines.len(),
                    "layout recomputed"
                );
                CachedLayout {
                    available,
                    placement,
                }
            }
        };
        &self.cache.insert(cache).placement
    }

    /// Last computed placement, if it is still valid.
    pub fn cached(&self) -> Option<&Placement> {
        self.cache.as_ref().map(|c| &c.placement)
    }

    /// Keys and rects of the last valid placement, in child order.
    pub fn frames(&self) -> Vec<(&K, Rect)> {
        match &self.cache {
            Some(c) => self
                .items
                .iter()
                .zip(c.placement.rects.iter())
                .map(|(it, r)| (&it.key, *r))
                .collect(),
            None => Vec::new(),
        }
    }
}
