/// InteractableSet: a flat store of interactables with stable keys.
///
/// Uses a SlotMap for O(1) insert/remove. Also serves as a brute-force
/// CandidateSource: each query tests every interactable (O(n)). Hosts with
/// their own physics broad-phase implement CandidateSource on that instead.

use glam::Vec3;
use slotmap::SlotMap;
use super::candidate::Candidate;
use super::candidate_source::{layer_in_mask, CandidateSource};
use super::interactable::{Interactable, InteractableKey};

/// Owner of a level's interactables.
#[derive(Debug, Default, Clone)]
pub struct InteractableSet {
    interactables: SlotMap<InteractableKey, Interactable>,
}

impl InteractableSet {
    pub fn new() -> Self {
        Self {
            interactables: SlotMap::with_key(),
        }
    }

    /// Add an interactable and return its stable key
    pub fn insert(&mut self, interactable: Interactable) -> InteractableKey {
        self.interactables.insert(interactable)
    }

    /// Remove an interactable. Returns it, or None if the key is stale.
    pub fn remove(&mut self, key: InteractableKey) -> Option<Interactable> {
        self.interactables.remove(key)
    }

    pub fn get(&self, key: InteractableKey) -> Option<&Interactable> {
        self.interactables.get(key)
    }

    pub fn get_mut(&mut self, key: InteractableKey) -> Option<&mut Interactable> {
        self.interactables.get_mut(key)
    }

    pub fn contains(&self, key: InteractableKey) -> bool {
        self.interactables.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.interactables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactables.is_empty()
    }

    /// Iterate in slot order (the order used by `query_sphere`)
    pub fn iter(&self) -> impl Iterator<Item = (InteractableKey, &Interactable)> {
        self.interactables.iter()
    }

    /// Snapshot every interactable as a candidate, in slot order.
    pub fn candidates(&self) -> Vec<Candidate<InteractableKey>> {
        self.interactables
            .iter()
            .map(|(key, interactable)| interactable.to_candidate(key))
            .collect()
    }

    pub fn clear(&mut self) {
        self.interactables.clear();
    }
}

impl CandidateSource<InteractableKey> for InteractableSet {
    fn query_sphere(
        &self,
        center: Vec3,
        radius: f32,
        mask: u32,
        results: &mut Vec<Candidate<InteractableKey>>,
    ) {
        results.extend(
            self.interactables
                .iter()
                .filter(|(_, interactable)| layer_in_mask(interactable.layer(), mask))
                .map(|(key, interactable)| interactable.to_candidate(key))
                .filter(|candidate| {
                    let reach = radius + candidate.radius;
                    candidate.center.distance_squared(center) <= reach * reach
                }),
        );
    }
}

#[cfg(test)]
#[path = "interactable_set_tests.rs"]
mod tests;
