use crate::mesh::NodeId;

/// A marching-squares configuration: which of a square's corners are active.
///
/// Bits are weighted top-left 8, top-right 4, bottom-right 2, bottom-left 1,
/// so the value is always in `0..=15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Configuration(u8);

impl Configuration {
    /// No active corner.
    pub const EMPTY: Configuration = Configuration(0);

    /// All four corners active.
    pub const FULL: Configuration = Configuration(15);

    /// Build the configuration from the four corner flags.
    #[inline]
    pub fn from_corners(top_left: bool, top_right: bool, bottom_right: bool, bottom_left: bool) -> Self {
        Self(
            (top_left as u8) << 3
                | (top_right as u8) << 2
                | (bottom_right as u8) << 1
                | bottom_left as u8,
        )
    }

    /// Configuration with the given index, or `None` past 15.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        (index <= 15).then_some(Self(index))
    }

    /// The 4-bit index.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Number of active corners.
    #[inline]
    pub fn active_corners(self) -> u32 {
        self.0.count_ones()
    }
}

/// One of the eight nodes a square can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquarePoint {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Midpoint of the top edge.
    Top,
    /// Midpoint of the right edge.
    Right,
    /// Midpoint of the bottom edge.
    Bottom,
    /// Midpoint of the left edge.
    Left,
}

/// A cell of the grid, spanned by four corner nodes.
///
/// Squares never own nodes; they hold [`NodeId`]s into the grid's arena, and
/// neighbouring squares hold the same id for the midpoint on their shared
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    /// Top-left corner node.
    pub top_left: NodeId,
    /// Top-right corner node.
    pub top_right: NodeId,
    /// Bottom-right corner node.
    pub bottom_right: NodeId,
    /// Bottom-left corner node.
    pub bottom_left: NodeId,
    /// Top edge midpoint (the top-left corner's "right" node).
    pub top: NodeId,
    /// Right edge midpoint (the bottom-right corner's "above" node).
    pub right: NodeId,
    /// Bottom edge midpoint (the bottom-left corner's "right" node).
    pub bottom: NodeId,
    /// Left edge midpoint (the bottom-left corner's "above" node).
    pub left: NodeId,
    /// Which corners are active.
    pub configuration: Configuration,
}

impl Square {
    /// The node behind a [`SquarePoint`].
    #[inline]
    pub fn node(&self, point: SquarePoint) -> NodeId {
        match point {
            SquarePoint::TopLeft => self.top_left,
            SquarePoint::TopRight => self.top_right,
            SquarePoint::BottomRight => self.bottom_right,
            SquarePoint::BottomLeft => self.bottom_left,
            SquarePoint::Top => self.top,
            SquarePoint::Right => self.right,
            SquarePoint::Bottom => self.bottom,
            SquarePoint::Left => self.left,
        }
    }

    /// The four corner nodes, clockwise from the top-left.
    #[inline]
    pub fn corners(&self) -> [NodeId; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_weights() {
        for tl in [false, true] {
            for tr in [false, true] {
                for br in [false, true] {
                    for bl in [false, true] {
                        let expected = 8 * tl as u8 + 4 * tr as u8 + 2 * br as u8 + bl as u8;
                        let config = Configuration::from_corners(tl, tr, br, bl);
                        assert_eq!(config.index(), expected);
                        assert_eq!(
                            config.active_corners(),
                            tl as u32 + tr as u32 + br as u32 + bl as u32
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_index_range() {
        assert_eq!(Configuration::from_index(15), Some(Configuration::FULL));
        assert_eq!(Configuration::from_index(0), Some(Configuration::EMPTY));
        assert_eq!(Configuration::from_index(16), None);
    }
}
