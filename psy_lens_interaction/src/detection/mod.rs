//! Detection module: interaction volume shape and geometry.
//!
//! Passive data containers: a DetectionFrame is rebuilt by the caller
//! every tick from the interactor's transform and its InteractionConfig.

mod config;
mod detection_frame;

pub use config::{InteractionConfig, ALL_LAYERS};
pub use detection_frame::{
    DetectionFrame, FrameBasis, FAR_EPSILON,
    CORNER_NEAR_TOP_LEFT, CORNER_NEAR_TOP_RIGHT, CORNER_NEAR_BOTTOM_RIGHT, CORNER_NEAR_BOTTOM_LEFT,
    CORNER_FAR_TOP_LEFT, CORNER_FAR_TOP_RIGHT, CORNER_FAR_BOTTOM_RIGHT, CORNER_FAR_BOTTOM_LEFT,
};
