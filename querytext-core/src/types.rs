//! Domain types shared between the renderer and its consumers.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Where a tracked literal landed in rendered output.
///
/// Offsets are byte positions into the accumulator, captured at the moment
/// the literal was appended. They stay valid for as long as the buffer is
/// only appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Substitution {
    pub offset: usize,
    pub len: usize,
}

impl Substitution {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Byte range covered by this span, suitable for slicing rendered output.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
