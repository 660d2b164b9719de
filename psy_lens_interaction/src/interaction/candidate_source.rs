/// Broad-phase providers of interaction candidates.
///
/// A CandidateSource returns a cheap superset of the candidates near a
/// point. Precise filtering is left to the frustum test in the selector.
///
/// Ownership: the caller owns the source and passes it by reference to
/// `Interactor::update()` each tick.

use glam::Vec3;
use super::candidate::Candidate;

/// Whether `layer` is enabled in `mask` (bit `n` = layer `n`).
///
/// Layers outside `0..32` never match.
pub fn layer_in_mask(layer: u8, mask: u32) -> bool {
    1u32.checked_shl(layer as u32)
        .is_some_and(|bit| mask & bit != 0)
}

/// Spatial query interface for interaction candidates.
pub trait CandidateSource<K>: Send + Sync {
    /// Append every candidate whose interaction sphere may intersect the
    /// sphere (`center`, `radius`) and whose layer is enabled in `mask`.
    ///
    /// Order must be stable between calls with unchanged contents, since
    /// selection ties are broken by order. Eligibility is NOT filtered
    /// here.
    fn query_sphere(&self, center: Vec3, radius: f32, mask: u32, results: &mut Vec<Candidate<K>>);
}
