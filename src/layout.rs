//! Screen regions of rendered tree nodes
//!
//! Rendering records where each node was painted into [`LayoutRegions`], and
//! [`node_at`] maps a mouse position back to the topmost node under it.

mod layout_regions;

pub use layout_hit_test::node_at;
pub use layout_regions::LayoutRegions;
