//! Candidate registry — the membership set of objects eligible for distant
//! selection.
//!
//! Deliberately dumb: a de-duplicated set with idempotent add/remove.
//! Registration order carries no meaning; selection rescans the whole set
//! every frame. Clearing focus or flight state that referenced a removed
//! candidate is the engine's job, because the registry does not own either.

use std::collections::HashSet;

/// The set of registered candidate entities.
#[derive(Debug, Default)]
pub struct CandidateRegistry {
    entries: HashSet<hecs::Entity>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate. Re-registering an existing member is a no-op.
    /// Returns true if the set changed.
    pub fn register(&mut self, entity: hecs::Entity) -> bool {
        self.entries.insert(entity)
    }

    /// Remove a candidate. Removing an absent member is a no-op.
    /// Returns true if the set changed.
    pub fn deregister(&mut self, entity: hecs::Entity) -> bool {
        self.entries.remove(&entity)
    }

    pub fn contains(&self, entity: hecs::Entity) -> bool {
        self.entries.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = hecs::Entity> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    fn test_register_is_idempotent() {
        let mut world = World::new();
        let entity = world.spawn((0u32,));
        let mut registry = CandidateRegistry::new();

        assert!(registry.register(entity));
        assert!(!registry.register(entity));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(entity));
    }

    #[test]
    fn test_deregister_is_idempotent() {
        let mut world = World::new();
        let entity = world.spawn((0u32,));
        let mut registry = CandidateRegistry::new();

        registry.register(entity);
        assert!(registry.deregister(entity));
        assert!(!registry.deregister(entity));
        assert!(registry.is_empty());
        assert!(!registry.contains(entity));
    }

    #[test]
    fn test_clear_drops_all_members() {
        let mut world = World::new();
        let mut registry = CandidateRegistry::new();
        for i in 0..3u32 {
            registry.register(world.spawn((i,)));
        }
        assert_eq!(registry.len(), 3);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
