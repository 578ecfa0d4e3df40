//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns the first identifier that occurs more than once, if any.
///
/// Catalog-wide identity checks go through this so the "ids are pairwise
/// distinct" rule has exactly one definition.
pub fn first_duplicate_id<'a, E>(entities: impl IntoIterator<Item = &'a E>) -> Option<E::Id>
where
    E: Entity + 'a,
{
    let mut seen = std::collections::HashSet::new();
    entities
        .into_iter()
        .map(Entity::id)
        .find(|id| !seen.insert(*id))
        .cloned()
}
