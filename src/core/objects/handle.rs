//=========================================================================
// Object Handle
//=========================================================================

use std::fmt;

/// Stable reference to an entry in the [`ObjectRegistry`](super::ObjectRegistry).
///
/// Handles are plain arena indices. Copying one never transfers ownership;
/// the registry keeps the object alive until it is explicitly invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(usize);

impl ObjectHandle {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Arena slot this handle points at.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
