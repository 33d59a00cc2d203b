//=========================================================================
// Object Factory
//=========================================================================
//
// Seam to the external object-instantiation system.
//
// The registry never creates objects itself. It asks a factory, which
// either hands back an opaque id or reports why it could not.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use thiserror::Error;

//=== ObjectId ============================================================

/// Opaque identifier issued by the object system for a spawned object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

//=== SpawnError ==========================================================

/// Reasons the object system can refuse to spawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    /// No free object slots remain.
    #[error("object system exhausted ({capacity} objects live)")]
    Exhausted { capacity: usize },

    /// The object system refused this particular object.
    #[error("object system rejected '{name}': {reason}")]
    Rejected { name: String, reason: String },
}

//=== ObjectFactory Trait =================================================

/// Creation API of the external object system.
pub trait ObjectFactory {
    /// Spawns an object for `name`.
    fn spawn(&mut self, name: &str) -> Result<ObjectId, SpawnError>;

    /// Releases a previously spawned object.
    ///
    /// Default implementation does nothing.
    fn despawn(&mut self, _id: ObjectId) {}
}

//=== ArenaObjectFactory ==================================================

/// In-process factory with a fixed number of live objects.
///
/// Ids are issued sequentially starting at 1 and never reused.
#[derive(Debug, Clone)]
pub struct ArenaObjectFactory {
    capacity: usize,
    live: usize,
    next_id: u64,
}

impl ArenaObjectFactory {
    /// Default number of live objects.
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            live: 0,
            next_id: 1,
        }
    }

    /// Number of objects currently alive.
    pub fn live(&self) -> usize {
        self.live
    }
}

impl Default for ArenaObjectFactory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl ObjectFactory for ArenaObjectFactory {
    fn spawn(&mut self, name: &str) -> Result<ObjectId, SpawnError> {
        if self.live >= self.capacity {
            return Err(SpawnError::Exhausted {
                capacity: self.capacity,
            });
        }

        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.live += 1;

        trace!("Spawned object '{}' as {:?}", name, id);
        Ok(id)
    }

    fn despawn(&mut self, id: ObjectId) {
        trace!("Despawned object {:?}", id);
        self.live = self.live.saturating_sub(1);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_issues_sequential_ids() {
        let mut factory = ArenaObjectFactory::new(4);
        assert_eq!(factory.spawn("a"), Ok(ObjectId(1)));
        assert_eq!(factory.spawn("b"), Ok(ObjectId(2)));
        assert_eq!(factory.live(), 2);
    }

    #[test]
    fn arena_reports_exhaustion() {
        let mut factory = ArenaObjectFactory::new(1);
        factory.spawn("a").unwrap();

        assert_eq!(
            factory.spawn("b"),
            Err(SpawnError::Exhausted { capacity: 1 }),
            "Second spawn should exceed capacity"
        );
    }

    #[test]
    fn despawn_frees_capacity_without_reusing_ids() {
        let mut factory = ArenaObjectFactory::new(1);
        let first = factory.spawn("a").unwrap();
        factory.despawn(first);

        let second = factory.spawn("a").unwrap();
        assert_ne!(first, second, "Ids must not be reused");
        assert_eq!(factory.live(), 1);
    }
}
