//! Interaction module
//!
//! Candidates, interactables, broad-phase sources, target selection and
//! the per-tick Interactor that ties them together.

mod candidate;
mod candidate_source;
mod interactable;
mod interactable_set;
mod selector;
mod interactor;

pub use candidate::Candidate;
pub use candidate_source::{CandidateSource, layer_in_mask};
pub use interactable::{
    Interactable, InteractableKey, InteractionAnchor,
    DEFAULT_INTERACTION_RADIUS, DEFAULT_PROMPT,
};
pub use interactable_set::InteractableSet;
pub use selector::{select_target, TargetSelector, NearestTargetSelector};
pub use interactor::{Interactor, InteractionDispatcher};
