use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::context::Context;
use crate::entity::{Entity, EntityId, EntityKind};
use crate::error::{CoreError, CoreResult};

/// The story world. Owns every entity and the containment tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
    // Insertion order, for deterministic whole-story scans.
    order: Vec<EntityId>,
    // Index: held entity -> holder.
    holders: HashMap<EntityId, EntityId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Entity CRUD
    // -----------------------------------------------------------------------

    /// Add an entity to the world. Returns the entity's ID.
    pub fn add_entity(&mut self, entity: Entity) -> CoreResult<EntityId> {
        let id = entity.id;
        if self.entities.contains_key(&id) {
            return Err(CoreError::DuplicateEntity(id));
        }
        for &child in &entity.contents {
            self.holders.insert(child, id);
        }
        self.order.push(id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Get an entity, failing if it does not exist.
    pub fn entity(&self, id: EntityId) -> CoreResult<&Entity> {
        self.entities.get(&id).ok_or(CoreError::EntityNotFound(id))
    }

    /// Get a mutable entity, failing if it does not exist.
    pub fn entity_mut(&mut self, id: EntityId) -> CoreResult<&mut Entity> {
        self.entities
            .get_mut(&id)
            .ok_or(CoreError::EntityNotFound(id))
    }

    /// Iterate over all entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the world holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// First location in insertion order.
    pub fn first_location(&self) -> Option<EntityId> {
        self.entities()
            .find(|e| e.kind == EntityKind::Location)
            .map(|e| e.id)
    }

    /// Find an entity by exact name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        let name = name.trim().to_lowercase();
        self.entities().find(|e| e.name.to_lowercase() == name)
    }

    // -----------------------------------------------------------------------
    // Containment
    // -----------------------------------------------------------------------

    /// Move an entity into a holder (location or container), detaching it
    /// from wherever it was.
    pub fn place(&mut self, item: EntityId, holder: EntityId) -> CoreResult<()> {
        if item == holder || self.is_within(holder, item) {
            return Err(CoreError::InvalidPlacement { item, holder });
        }
        if !self.entities.contains_key(&item) {
            return Err(CoreError::EntityNotFound(item));
        }
        if !self.entities.contains_key(&holder) {
            return Err(CoreError::EntityNotFound(holder));
        }
        self.detach(item);
        self.entity_mut(holder)?.contents.push(item);
        self.holders.insert(item, holder);
        Ok(())
    }

    /// Remove an entity from its holder. Returns the previous holder.
    pub fn detach(&mut self, item: EntityId) -> Option<EntityId> {
        let holder = self.holders.remove(&item)?;
        if let Some(h) = self.entities.get_mut(&holder) {
            h.contents.retain(|&c| c != item);
        }
        Some(holder)
    }

    /// The entity directly holding this one.
    pub fn holder_of(&self, item: EntityId) -> Option<EntityId> {
        self.holders.get(&item).copied()
    }

    /// Check whether `item` sits somewhere inside `ancestor`.
    pub fn is_within(&self, item: EntityId, ancestor: EntityId) -> bool {
        let mut current = self.holder_of(item);
        while let Some(h) = current {
            if h == ancestor {
                return true;
            }
            current = self.holder_of(h);
        }
        false
    }

    /// Contents of a holder that the player can see, recursing into open or
    /// transparent containers. Nested locations are listed but not entered.
    pub fn visible_contents(&self, holder: EntityId) -> Vec<EntityId> {
        let mut out = Vec::new();
        self.collect_visible(holder, &mut out);
        out
    }

    fn collect_visible(&self, holder: EntityId, out: &mut Vec<EntityId>) {
        let Some(entity) = self.entities.get(&holder) else {
            return;
        };
        for &child in &entity.contents {
            out.push(child);
            if self.shows_contents(child) {
                self.collect_visible(child, out);
            }
        }
    }

    /// Check whether a container's contents are visible from outside.
    pub fn shows_contents(&self, id: EntityId) -> bool {
        self.entities.get(&id).is_some_and(|e| {
            e.kind != EntityKind::Location
                && e.has(Capability::Container)
                && (e.state.open
                    || e.components
                        .container
                        .as_ref()
                        .is_some_and(|c| c.transparent))
        })
    }

    /// Everything the player can reach: inventory (and what shows inside
    /// it) followed by the visible contents of the current location.
    pub fn reachable(&self, ctx: &Context) -> Vec<EntityId> {
        let mut out = Vec::new();
        for &item in &ctx.inventory {
            out.push(item);
            if self.shows_contents(item) {
                self.collect_visible(item, &mut out);
            }
        }
        for id in self.visible_contents(ctx.location) {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        out
    }

    /// Total weight of an entity and everything inside it.
    pub fn total_weight(&self, id: EntityId) -> u32 {
        self.entities.get(&id).map_or(0, |e| {
            e.weight
                + e.contents
                    .iter()
                    .map(|&c| self.total_weight(c))
                    .sum::<u32>()
        })
    }

    /// Weight of everything the player carries.
    pub fn carried_weight(&self, ctx: &Context) -> u32 {
        ctx.inventory.iter().map(|&id| self.total_weight(id)).sum()
    }

    // -----------------------------------------------------------------------
    // Light
    // -----------------------------------------------------------------------

    /// Check whether the location is dark for the player: the location is
    /// flagged dark and no lit light source is carried or present.
    pub fn is_dark(&self, location: EntityId, ctx: &Context) -> bool {
        let flagged = self
            .entities
            .get(&location)
            .and_then(|e| e.components.location.as_ref())
            .is_some_and(|l| l.dark);
        if !flagged {
            return false;
        }
        let lit = |id: &EntityId| {
            self.entities
                .get(id)
                .is_some_and(|e| e.has(Capability::Lightable) && e.state.lit)
        };
        !(ctx.inventory.iter().any(lit) || self.visible_contents(location).iter().any(lit))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Check whether any entity in the whole story answers to a noun phrase.
    pub fn any_matches(&self, phrase: &str) -> bool {
        self.entities().any(|e| e.matches_phrase(phrase))
    }

    /// The entities among `ids` answering to a noun phrase, in order.
    pub fn matching(&self, ids: &[EntityId], phrase: &str) -> Vec<EntityId> {
        ids.iter()
            .copied()
            .filter(|id| self.entities.get(id).is_some_and(|e| e.matches_phrase(phrase)))
            .collect()
    }

    /// Foes (combatants not yet dead) directly inside a location.
    pub fn foes_in(&self, location: EntityId) -> Vec<EntityId> {
        self.entities.get(&location).map_or_else(Vec::new, |loc| {
            loc.contents
                .iter()
                .copied()
                .filter(|id| {
                    self.entities.get(id).is_some_and(|e| {
                        e.components
                            .combatant
                            .as_ref()
                            .is_some_and(|c| !c.vitals.dead)
                    })
                })
                .collect()
        })
    }

    /// Serialize the whole world to JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a world from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Human-readable name of an entity, or a placeholder if unknown.
    pub fn name_of(&self, id: EntityId) -> String {
        self.entities
            .get(&id)
            .map_or_else(|| "something".to_string(), |e| e.name.clone())
    }
}
