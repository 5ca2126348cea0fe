//! Comparison grid sizing.
//!
//! The comparison page lays candidates out in one of three fixed grids. The
//! capacity is chosen from the candidate count alone.

/// A fixed comparison layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// One row of two.
    Pair,
    /// Two rows of two.
    Quad,
    /// Three rows of three.
    Nine,
}

impl GridLayout {
    /// Pick the layout for `count` candidates.
    ///
    /// Zero candidates still get the two-slot layout.
    pub fn for_count(count: usize) -> Self {
        if count <= 2 {
            GridLayout::Pair
        } else if count <= 4 {
            GridLayout::Quad
        } else {
            GridLayout::Nine
        }
    }

    /// Number of slots in the layout.
    pub fn capacity(self) -> usize {
        match self {
            GridLayout::Pair => 2,
            GridLayout::Quad => 4,
            GridLayout::Nine => 9,
        }
    }

    /// Number of grid columns.
    pub fn columns(self) -> usize {
        match self {
            GridLayout::Pair => 2,
            GridLayout::Quad => 2,
            GridLayout::Nine => 3,
        }
    }

    /// Number of grid rows.
    pub fn rows(self) -> usize {
        self.capacity() / self.columns()
    }
}
