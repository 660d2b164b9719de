/*!
# Psy-Lens Interaction

Interaction targeting for third-person adventure games.

Each tick, an interactor looks through a truncated-pyramid detection volume
in front of the player and picks the single nearest interactable whose
interaction sphere overlaps it. The crate is engine-agnostic: the host
supplies transforms, a broad-phase candidate source and an action
dispatcher.

## Architecture

- **DetectionFrame**: per-tick snapshot of the detection volume + sphere overlap test
- **InteractionConfig**: tunable near/far depths, extents, offset and layer mask
- **Candidate**: read-only view of one interactable for the selector
- **CandidateSource**: broad-phase query trait (`InteractableSet` is the built-in one)
- **TargetSelector**: selection strategy trait (`NearestTargetSelector` is the default)
- **Interactor**: explicit per-tick driver holding the current target
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod detection;
pub mod interaction;

// Main psylens namespace module
pub mod psylens {
    // Error types
    pub use crate::error::{PsyLensError, PsyLensResult};

    // Engine facade (global logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Detection volume
    pub mod detection {
        pub use crate::detection::*;
    }

    // Candidates, selection and the per-tick interactor
    pub mod interaction {
        pub use crate::interaction::*;
    }
}

// Re-export math library at crate root
pub use glam;
