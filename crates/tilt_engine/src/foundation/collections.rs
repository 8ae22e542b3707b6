//! Specialized collection types
//!
//! Game objects and their collision shapes live in slot maps so the rest of
//! the engine can hold small copyable keys instead of references.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a collision-capable game entity
    pub struct EntityKey;

    /// Handle to a passive scene object (walls, decorations, triggers)
    pub struct PropKey;

    /// Handle to a registered collision shape
    pub struct ShapeKey;
}

/// Handle-keyed storage with stable keys
pub type HandleMap<K, T> = SlotMap<K, T>;
