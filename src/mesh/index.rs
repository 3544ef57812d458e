//! Index types for grid nodes and mesh elements.
//!
//! Node, vertex and triangle indices are distinct wrapper types over `u32` so
//! that a grid-node index can never be used where a vertex-buffer index is
//! expected. Each type reserves `u32::MAX` as the "unassigned" sentinel.

use std::fmt::{self, Debug};

const INVALID: u32 = u32::MAX;

/// A type-safe index into the node arena of a [`SquareGrid`](crate::grid::SquareGrid).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

/// A type-safe index into a mesh vertex buffer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

/// A type-safe index into a mesh triangle buffer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TriangleId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            ///
            /// # Panics
            /// Panics in debug builds if `index` does not fit below the sentinel.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(
                    index < INVALID as usize,
                    "{} index {} out of range",
                    $display,
                    index
                );
                Self(index as u32)
            }

            /// Create an invalid/unassigned index.
            #[inline]
            pub const fn invalid() -> Self {
                Self(INVALID)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw `u32` value, as stored in index buffers.
            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid (assigned) index.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != INVALID
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.0)
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(NodeId, "N");
impl_index_type!(VertexId, "V");
impl_index_type!(TriangleId, "T");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(v.raw(), 42);
        assert!(v.is_valid());

        let unassigned = VertexId::default();
        assert!(!unassigned.is_valid());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", VertexId::new(7)), "V(7)");
        assert_eq!(format!("{:?}", NodeId::new(3)), "N(3)");
        assert_eq!(format!("{:?}", TriangleId::invalid()), "T(INVALID)");
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        let mut ids = vec![VertexId::new(5), VertexId::new(1), VertexId::new(3)];
        ids.sort();
        assert_eq!(ids, vec![VertexId::new(1), VertexId::new(3), VertexId::new(5)]);
    }
}
