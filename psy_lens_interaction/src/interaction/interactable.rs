/// Interactable: capability data for anything the player can use.
///
/// Doors, pickups, buttons and clues all carry the same four facts for
/// targeting: where their interaction sphere sits, how big it is, whether
/// it currently accepts interaction, and which layer it lives on. What
/// happens on interaction is up to the host's dispatcher.

use glam::{Quat, Vec3};
use slotmap::new_key_type;
use super::candidate::Candidate;

new_key_type! {
    /// Stable key for an Interactable within an InteractableSet.
    ///
    /// Keys remain valid after other interactables are removed.
    pub struct InteractableKey;
}

/// Default interaction sphere radius
pub const DEFAULT_INTERACTION_RADIUS: f32 = 0.2;

/// Default prompt shown to the player
pub const DEFAULT_PROMPT: &str = "Interact";

/// Where an interactable's interaction sphere is centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionAnchor {
    /// Fixed world-space point, independent of the pivot
    Point(Vec3),
    /// Offset from the pivot in pivot-local space
    /// (x = right, y = up, z = forward)
    Offset(Vec3),
}

impl Default for InteractionAnchor {
    fn default() -> Self {
        InteractionAnchor::Offset(Vec3::ZERO)
    }
}

/// An entity that can become the interaction target.
#[derive(Debug, Clone, PartialEq)]
pub struct Interactable {
    pivot_position: Vec3,
    pivot_rotation: Quat,
    pivot_scale: Vec3,
    anchor: InteractionAnchor,
    radius: f32,
    eligible: bool,
    layer: u8,
    prompt: String,
}

impl Interactable {
    /// Eligible interactable with the default radius, prompt and layer 0,
    /// anchored at its pivot.
    pub fn new(pivot_position: Vec3) -> Self {
        Self {
            pivot_position,
            pivot_rotation: Quat::IDENTITY,
            pivot_scale: Vec3::ONE,
            anchor: InteractionAnchor::default(),
            radius: DEFAULT_INTERACTION_RADIUS,
            eligible: true,
            layer: 0,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.pivot_rotation = rotation;
        self
    }

    /// Pivot scale applied to `InteractionAnchor::Offset` (default `ONE`)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.pivot_scale = scale;
        self
    }

    pub fn with_anchor(mut self, anchor: InteractionAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.set_radius(radius);
        self
    }

    pub fn with_eligible(mut self, eligible: bool) -> Self {
        self.eligible = eligible;
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    // ===== GETTERS =====

    pub fn pivot_position(&self) -> Vec3 {
        self.pivot_position
    }

    pub fn pivot_rotation(&self) -> Quat {
        self.pivot_rotation
    }

    pub fn pivot_scale(&self) -> Vec3 {
        self.pivot_scale
    }

    pub fn anchor(&self) -> InteractionAnchor {
        self.anchor
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn layer(&self) -> u8 {
        self.layer
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// World-space center of the interaction sphere.
    ///
    /// Offsets are transformed like a point in pivot space: scaled, then
    /// rotated, then translated. The sphere radius is never scaled.
    pub fn interaction_center(&self) -> Vec3 {
        match self.anchor {
            InteractionAnchor::Point(point) => point,
            InteractionAnchor::Offset(offset) => {
                self.pivot_position + self.pivot_rotation * (self.pivot_scale * offset)
            }
        }
    }

    /// Snapshot for the selector.
    pub fn to_candidate<K>(&self, key: K) -> Candidate<K> {
        Candidate::new(key, self.interaction_center(), self.radius)
            .with_eligible(self.eligible)
    }

    // ===== SETTERS =====

    /// Move the pivot (e.g. after the host's physics step)
    pub fn set_pivot(&mut self, position: Vec3, rotation: Quat) {
        self.pivot_position = position;
        self.pivot_rotation = rotation;
    }

    pub fn set_pivot_scale(&mut self, scale: Vec3) {
        self.pivot_scale = scale;
    }

    pub fn set_anchor(&mut self, anchor: InteractionAnchor) {
        self.anchor = anchor;
    }

    /// Set the sphere radius. Negative and NaN values become 0.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Toggle whether the interactable may be targeted (a picked-up item
    /// or an opened gate turns this off).
    pub fn set_eligible(&mut self, eligible: bool) {
        self.eligible = eligible;
    }

    pub fn set_layer(&mut self, layer: u8) {
        self.layer = layer;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }
}

#[cfg(test)]
#[path = "interactable_tests.rs"]
mod tests;
