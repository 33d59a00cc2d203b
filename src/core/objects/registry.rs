//=========================================================================
// Object Registry
//=========================================================================
//
// Owns named object handles across view transitions.
//
// Entries live in an append-only arena. A handle stays valid until it is
// invalidated; slots are never recycled, so a stale handle can never
// alias a newer object.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::{ArenaObjectFactory, ObjectFactory, ObjectHandle, ObjectId, SpawnError};

//=== Constants ===========================================================

/// Placeholder objects that must exist before the player is spawned.
pub const DEFAULT_PRESPAWN: [&str; 4] = ["test_moby", "test_moby_a", "test_moby_r", "test_moby_l"];

//=== RegistryError =======================================================

/// Failures while creating registry entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The object system could not spawn the named object.
    #[error("failed to spawn object '{name}'")]
    Spawn {
        name: String,
        #[source]
        source: SpawnError,
    },

    /// Object names must be non-empty.
    #[error("object name must not be empty")]
    EmptyName,
}

//=== ObjectEntry =========================================================

#[derive(Debug)]
struct ObjectEntry {
    name: String,
    id: ObjectId,
    live: bool,
}

//=== ObjectRegistry ======================================================

/// Arena of named object handles owned by the coordinator.
///
/// Views receive handles by name and keep copies; the registry remains
/// the only owner of the underlying objects.
pub struct ObjectRegistry {
    factory: Box<dyn ObjectFactory>,
    entries: Vec<ObjectEntry>,
    by_name: HashMap<String, ObjectHandle>,
    prespawn: Vec<String>,
}

impl ObjectRegistry {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry backed by `factory`.
    ///
    /// The pre-spawn set defaults to [`DEFAULT_PRESPAWN`].
    pub fn new(factory: Box<dyn ObjectFactory>) -> Self {
        Self {
            factory,
            entries: Vec::new(),
            by_name: HashMap::new(),
            prespawn: DEFAULT_PRESPAWN.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Replaces the set of objects created by [`Self::ensure_prespawned`].
    pub fn with_prespawn<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.prespawn = names.into_iter().map(Into::into).collect();
        self
    }

    //--- Creation ---------------------------------------------------------

    /// Returns the live handle for `name`, spawning the object if needed.
    ///
    /// # Errors
    ///
    /// [`RegistryError::EmptyName`] for an empty name, and
    /// [`RegistryError::Spawn`] when the object system refuses.
    pub fn create_or_get(&mut self, name: &str) -> Result<ObjectHandle, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if let Some(&handle) = self.by_name.get(name) {
            return Ok(handle);
        }

        let id = self.factory.spawn(name).map_err(|source| {
            warn!("Object system refused '{}': {}", name, source);
            RegistryError::Spawn {
                name: name.to_string(),
                source,
            }
        })?;

        let handle = ObjectHandle::from_index(self.entries.len());
        self.entries.push(ObjectEntry {
            name: name.to_string(),
            id,
            live: true,
        });
        self.by_name.insert(name.to_string(), handle);

        debug!("Created object '{}' at {}", name, handle);
        Ok(handle)
    }

    /// Creates every pre-spawn object that has no live handle.
    ///
    /// Returns `true` when this call spawned anything and `false` when the
    /// set was already complete. Invalidated pre-spawn objects are spawned
    /// again under a fresh handle. A failure leaves the objects created so
    /// far in place; calling again resumes with the missing ones.
    pub fn ensure_prespawned(&mut self) -> Result<bool, RegistryError> {
        let missing: Vec<String> = self
            .prespawn
            .iter()
            .filter(|name| !self.by_name.contains_key(name.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            return Ok(false);
        }

        for name in &missing {
            self.create_or_get(name)?;
        }

        info!("Pre-spawned {} of {} objects", missing.len(), self.prespawn.len());
        Ok(true)
    }

    //--- Release ----------------------------------------------------------

    /// Invalidates `handle` and releases its object.
    ///
    /// Returns `false` if the handle was unknown or already invalid. A
    /// later [`Self::create_or_get`] of the same name spawns a new object
    /// in a fresh slot.
    pub fn invalidate(&mut self, handle: ObjectHandle) -> bool {
        let Some(entry) = self.entries.get_mut(handle.index()) else {
            return false;
        };
        if !entry.live {
            return false;
        }

        entry.live = false;
        self.by_name.remove(&entry.name);
        self.factory.despawn(entry.id);

        debug!("Invalidated object '{}' at {}", entry.name, handle);
        true
    }

    //--- Queries ----------------------------------------------------------

    /// Resolves a handle to its object id, if still valid.
    pub fn get(&self, handle: ObjectHandle) -> Option<ObjectId> {
        self.entries
            .get(handle.index())
            .filter(|entry| entry.live)
            .map(|entry| entry.id)
    }

    /// Looks up the live handle registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<ObjectHandle> {
        self.by_name.get(name).copied()
    }

    /// Name the handle was created under, valid or not.
    pub fn name_of(&self, handle: ObjectHandle) -> Option<&str> {
        self.entries.get(handle.index()).map(|entry| entry.name.as_str())
    }

    /// Whether every pre-spawn object currently has a live handle.
    pub fn is_prespawned(&self) -> bool {
        self.prespawn
            .iter()
            .all(|name| self.by_name.contains_key(name.as_str()))
    }

    /// Names of all live objects, in creation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.live)
            .map(|entry| entry.name.as_str())
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new(Box::new(ArenaObjectFactory::default()))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
