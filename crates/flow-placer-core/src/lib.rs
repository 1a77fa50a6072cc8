//! Flow-layout placers for GUI containers.
//!
//! - Strategies: horizontal list (rows, wrap on width) and vertical list (columns, wrap on height)
//! - Factory: `build(direction, parallel_items)` returns an exclusively owned `Box<dyn Placer>`
//! - Items carry a minimum size, a cross-axis alignment and a main-axis growth weight
//! - `FlowContainer` caches the last placement and only re-runs the placer when the size or
//!   the child set changes.
//!
//! Quick example:
//! ```
//! use flow_placer_core::prelude::*;
//!
//! let placer = build(GrowDirection::Horizontal, 0);
//! let items = vec![ItemSpec::new(10, 10); 5];
//! let placement = placer.compute_placement(Size::new(25, 100), &items);
//! assert_eq!(placement.lines.len(), 3);
//! assert_eq!(placement.size, Size::new(20, 30));
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod placer;

pub use config::*;
pub use container::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;
pub use placer::*;

/// Convenience prelude for common types and functions.
/// Importing `flow_placer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{Align, GrowDirection, PlacerConfig, PlacerConfigBuilder};
    pub use crate::container::FlowContainer;
    pub use crate::model::{ItemSpec, Line, Placement, PlacementStats, Rect, Size};
    pub use crate::pipeline::{LayoutItem, LayoutJob, PlacedItem, layout_batch, place_items, place_layout};
    pub use crate::placer::{
        HorizontalListPlacer, Placer, PlacerItem, VerticalListPlacer, build, build_from_config,
        build_from_tag,
    };
    pub use crate::{Layout, to_json};
}
