//=========================================================================
// Object Handle Registry
//=========================================================================
//
// Long-lived game objects that outlive any single view.
//
// Architecture:
//   ObjectRegistry
//     ├─ factory: Box<dyn ObjectFactory>   (external object system)
//     ├─ entries: Vec<ObjectEntry>          (arena, slots never reused)
//     └─ by_name: HashMap<String, ObjectHandle>
//
// Flow:
//   create_or_get(name) → by_name hit? → handle
//                       → miss → factory.spawn(name) → new arena slot
//
//=========================================================================

//=== Module Declarations =================================================

mod factory;
mod handle;
mod registry;

//=== Public API ==========================================================

pub use factory::{ArenaObjectFactory, ObjectFactory, ObjectId, SpawnError};
pub use handle::ObjectHandle;
pub use registry::{ObjectRegistry, RegistryError, DEFAULT_PRESPAWN};
