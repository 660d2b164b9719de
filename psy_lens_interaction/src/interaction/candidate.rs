/// Candidate: one entity evaluated during a selection pass.

use glam::Vec3;

/// Read-only view of an interactable as seen by the selector.
///
/// `K` is the caller's opaque identifier (a slot-map key, an entity id,
/// an index...). The selector only copies it into its result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<K> {
    /// Identifier returned when this candidate is selected
    pub key: K,
    /// World-space center of the interaction sphere
    pub center: Vec3,
    /// Interaction sphere radius (>= 0)
    pub radius: f32,
    /// Ineligible candidates are skipped entirely
    pub eligible: bool,
}

impl<K> Candidate<K> {
    /// Eligible candidate
    pub fn new(key: K, center: Vec3, radius: f32) -> Self {
        Self {
            key,
            center,
            radius,
            eligible: true,
        }
    }

    pub fn with_eligible(mut self, eligible: bool) -> Self {
        self.eligible = eligible;
        self
    }
}
