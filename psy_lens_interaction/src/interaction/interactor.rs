/// Interactor: per-tick interaction targeting for one actor.
///
/// The host calls `update()` once per simulation tick with the actor's
/// detection transform, and `handle_interact_input()` when the player
/// presses the interact button. Nothing is scheduled implicitly.

use std::fmt::Debug;
use glam::{Quat, Vec3};
use crate::detection::{DetectionFrame, InteractionConfig};
use super::candidate::Candidate;
use super::candidate_source::CandidateSource;
use super::selector::{NearestTargetSelector, TargetSelector};

const LOG_SOURCE: &str = "psylens::Interactor";

/// Receiver of interaction actions.
///
/// Implemented for any `FnMut(K)` closure.
pub trait InteractionDispatcher<K> {
    /// Perform the interaction effect of `target`.
    fn dispatch(&mut self, target: K);
}

impl<K, F: FnMut(K)> InteractionDispatcher<K> for F {
    fn dispatch(&mut self, target: K) {
        self(target)
    }
}

/// Tracks the current interaction target of one actor.
pub struct Interactor<K> {
    config: InteractionConfig,
    selector: Box<dyn TargetSelector<K>>,
    current_target: Option<K>,
    last_frame: Option<DetectionFrame>,
    /// Broad-phase results, reused between ticks
    candidates: Vec<Candidate<K>>,
}

impl<K: Copy + PartialEq + Debug + 'static> Interactor<K> {
    /// Interactor using `NearestTargetSelector`.
    pub fn new(config: InteractionConfig) -> Self {
        Self::with_selector(config, Box::new(NearestTargetSelector::new()))
    }

    pub fn with_selector(config: InteractionConfig, selector: Box<dyn TargetSelector<K>>) -> Self {
        Self {
            config,
            selector,
            current_target: None,
            last_frame: None,
            candidates: Vec::new(),
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Replace the configuration; takes effect on the next `update()`.
    pub fn set_config(&mut self, config: InteractionConfig) {
        self.config = config;
    }

    /// Target chosen by the last `update()`
    pub fn current_target(&self) -> Option<K> {
        self.current_target
    }

    /// Frame built by the last `update()`, for debug drawing
    pub fn last_frame(&self) -> Option<&DetectionFrame> {
        self.last_frame.as_ref()
    }

    /// Recompute the current target.
    ///
    /// Builds the detection frame from `position`/`rotation`, asks
    /// `source` for everything within `frame.far()` on the configured
    /// layers, and runs the selector over the result. A Debug entry is
    /// logged only when the target changes.
    pub fn update(
        &mut self,
        position: Vec3,
        rotation: Quat,
        source: &dyn CandidateSource<K>,
    ) -> Option<K> {
        let frame = DetectionFrame::from_transform(position, rotation, &self.config);

        self.candidates.clear();
        source.query_sphere(
            frame.origin(),
            frame.far(),
            self.config.detection_mask,
            &mut self.candidates,
        );
        crate::engine_trace!(
            LOG_SOURCE,
            "Broad-phase returned {} candidate(s)",
            self.candidates.len()
        );

        let target = self.selector.select(&frame, &self.candidates);

        if target != self.current_target {
            match target {
                Some(key) => crate::engine_debug!(LOG_SOURCE, "Current target: {:?}", key),
                None => crate::engine_debug!(LOG_SOURCE, "Current target: NONE"),
            }
        }

        self.current_target = target;
        self.last_frame = Some(frame);
        target
    }

    /// Forward the current target to `dispatcher`.
    ///
    /// Returns the dispatched target, or None when there was nothing to
    /// interact with.
    pub fn handle_interact_input(&self, dispatcher: &mut dyn InteractionDispatcher<K>) -> Option<K> {
        match self.current_target {
            Some(target) => {
                crate::engine_info!(LOG_SOURCE, "Interacting with {:?}", target);
                dispatcher.dispatch(target);
                Some(target)
            }
            None => {
                crate::engine_debug!(LOG_SOURCE, "No target to interact with");
                None
            }
        }
    }

    /// Drop the current target (e.g. when the actor is disabled).
    pub fn clear_target(&mut self) {
        if self.current_target.take().is_some() {
            crate::engine_debug!(LOG_SOURCE, "Current target: NONE");
        }
        self.last_frame = None;
    }
}

#[cfg(test)]
#[path = "interactor_tests.rs"]
mod tests;
