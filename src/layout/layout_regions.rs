use ratatui::layout::Rect;

use crate::dom::NodeId;

/// Rectangles of rendered nodes, in paint order
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    regions: Vec<(NodeId, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded by the previous frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Record that `node` was painted over `area`
    ///
    /// Empty rectangles are ignored.
    pub fn record(&mut self, node: NodeId, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((node, area));
        }
    }

    /// Last rectangle recorded for `node`
    #[cfg(test)]
    pub fn rect_of(&self, node: NodeId) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(id, _)| *id == node)
            .map(|(_, rect)| *rect)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions from the last painted to the first
    pub fn topmost_first(&self) -> impl Iterator<Item = &(NodeId, Rect)> {
        self.regions.iter().rev()
    }
}
