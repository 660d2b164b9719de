/// Target selection strategies.
///
/// A TargetSelector picks at most one candidate as the interaction target
/// for a given detection frame. Selection is recomputed from scratch every
/// tick; nothing is cached between calls.

use crate::detection::DetectionFrame;
use super::candidate::Candidate;

/// Pick the nearest eligible candidate overlapping the frame.
///
/// Candidates are scanned in order. Ineligible candidates are skipped;
/// the rest are tested with `DetectionFrame::overlaps_sphere()`. Among
/// the overlapping ones the smallest squared distance from the candidate
/// center to the frame origin wins, and ties keep the first one seen.
///
/// Returns `None` for an empty list or when nothing overlaps.
pub fn select_target<'a, K, I>(frame: &DetectionFrame, candidates: I) -> Option<K>
where
    K: Copy + 'a,
    I: IntoIterator<Item = &'a Candidate<K>>,
{
    let mut best: Option<(K, f32)> = None;

    for candidate in candidates {
        if !candidate.eligible {
            continue;
        }
        if !frame.overlaps_sphere(candidate.center, candidate.radius) {
            continue;
        }

        let distance_squared = frame.distance_squared(candidate.center);
        match best {
            Some((_, best_distance)) if distance_squared >= best_distance => {}
            _ => best = Some((candidate.key, distance_squared)),
        }
    }

    best.map(|(key, _)| key)
}

/// Strategy for choosing the interaction target.
///
/// `&mut self` allows stateful implementations (e.g. hysteresis that
/// prefers the previous target) to keep state across ticks.
pub trait TargetSelector<K>: Send + Sync {
    /// Choose a target among `candidates`, or none.
    fn select(&mut self, frame: &DetectionFrame, candidates: &[Candidate<K>]) -> Option<K>;
}

/// Nearest-overlapping selector (see `select_target()`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestTargetSelector;

impl NearestTargetSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<K: Copy> TargetSelector<K> for NearestTargetSelector {
    fn select(&mut self, frame: &DetectionFrame, candidates: &[Candidate<K>]) -> Option<K> {
        select_target(frame, candidates)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
