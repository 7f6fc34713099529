//! # Entity Store
//!
//! Generic identifier-keyed CRUD over a homogeneous in-memory collection.
//!
//! ## Store Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    EntityStore<T> Explained                         │
//! │                                                                     │
//! │  Caller                                                             │
//! │     │  store.add(draft)          → assigns id = max + 1, appends    │
//! │     │  store.get(id)             → linear scan, Option<&T>          │
//! │     │  store.update(id, patch)   → merges provided fields           │
//! │     │  store.remove(id)          → bool (did a removal occur?)      │
//! │     ▼                                                               │
//! │  Vec<T>  (insertion order preserved)                                │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • One container serves every entity shape (Product, Task, ...)     │
//! │  • No global state: each store is owned by its session              │
//! │  • Linear scans are fine at this scale; an id→index map could be    │
//! │    substituted without changing observable behavior                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identifier Assignment
//! `next id = max(existing ids ∪ {0}) + 1`. Ids are unique and monotonic
//! within a store, minimum 1. A deleted trailing id can be handed out
//! again only once it exceeds the current maximum, so live ids are always
//! pairwise distinct.

use tracing::debug;

/// Integer entity identifier, unique within a store.
pub type EntityId = u64;

// =============================================================================
// Entity Trait
// =============================================================================

/// An entity that can live in an [`EntityStore`].
///
/// ## Associated Types
/// - `Draft`: creation fields, id excluded (the store assigns the id)
/// - `Patch`: partial update, every field optional (omitted = unchanged)
pub trait Entity {
    type Draft;
    type Patch;

    /// The entity's identifier, immutable after creation.
    fn id(&self) -> EntityId;

    /// Materializes an entity from a draft under a store-assigned id.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Merges the provided fields of a patch into this entity.
    fn apply(&mut self, patch: Self::Patch);
}

// =============================================================================
// Entity Store
// =============================================================================

/// Identifier-keyed CRUD over a homogeneous collection.
///
/// ## Usage
/// ```rust
/// use shopkit_core::store::EntityStore;
/// use shopkit_core::types::{Category, Product, ProductDraft};
/// use shopkit_core::money::Money;
///
/// let mut store: EntityStore<Product> = EntityStore::new();
/// let laptop = store.add(ProductDraft {
///     name: "Laptop".to_string(),
///     price: Money::new(99999, 2),
///     category: Category::Electronics,
///     available: true,
/// });
/// assert_eq!(laptop.id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        EntityStore::new()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        EntityStore { items: Vec::new() }
    }

    /// Creates a store pre-populated with seed entities.
    ///
    /// Seed entities keep their own ids; subsequent [`add`](Self::add)
    /// calls continue from the maximum seeded id.
    pub fn with_seed(items: Vec<T>) -> Self {
        EntityStore { items }
    }

    /// Returns all entities in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Looks up an entity by id. Absence is not an error.
    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Adds a new entity, assigning the next free id.
    ///
    /// Always succeeds given valid draft fields; returns the stored entity.
    pub fn add(&mut self, draft: T::Draft) -> &T {
        let id = self.next_id();
        debug!(id, "adding entity to store");
        self.items.push(T::from_draft(id, draft));
        // Just pushed, so the last slot is the new entity
        &self.items[self.items.len() - 1]
    }

    /// Merges a patch into the entity with the given id.
    ///
    /// Fields the patch omits are unchanged. Returns the updated entity,
    /// or `None` if the id is absent.
    pub fn update(&mut self, id: EntityId, patch: T::Patch) -> Option<&T> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        debug!(id, "updating entity");
        item.apply(patch);
        Some(item)
    }

    /// Removes the entity with the given id.
    ///
    /// Returns whether a removal occurred.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() < before;
        debug!(id, removed, "removing entity");
        removed
    }

    /// Number of entities in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&self) -> EntityId {
        self.items.iter().map(Entity::id).max().unwrap_or(0) + 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
