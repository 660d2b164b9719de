/// DetectionFrame: truncated-pyramid interaction volume.
///
/// A frame is an immutable snapshot of one detection query: where the
/// interactor stands, which way it faces, and the shape of the volume in
/// front of it. The volume is a pyramid frustum (not a cone) whose
/// rectangular cross-section grows linearly from `near_extent` at depth
/// `near` to `far_extent` at depth `far`.
///
/// The sphere test is an approximation: it samples the cross-section at a
/// single representative depth and inflates it by the sphere radius. Depth
/// is exact, lateral bounds ignore the slant of the side planes. Large
/// spheres near a steeply tapered side can therefore be accepted or
/// rejected slightly differently from an exact plane test. That lateral
/// leniency is part of the targeting feel and must be preserved.

use glam::{Quat, Vec2, Vec3};
use crate::engine::Engine;
use crate::error::{PsyLensError, PsyLensResult};
use super::config::InteractionConfig;

/// Minimum depth span enforced by `DetectionFrame::from_transform()`
pub const FAR_EPSILON: f32 = 0.01;

/// Tolerance used when checking that a basis is orthonormal
const BASIS_TOLERANCE: f32 = 1e-3;

/// Corner indices returned by `DetectionFrame::corners()`
pub const CORNER_NEAR_TOP_LEFT: usize = 0;
pub const CORNER_NEAR_TOP_RIGHT: usize = 1;
pub const CORNER_NEAR_BOTTOM_RIGHT: usize = 2;
pub const CORNER_NEAR_BOTTOM_LEFT: usize = 3;
pub const CORNER_FAR_TOP_LEFT: usize = 4;
pub const CORNER_FAR_TOP_RIGHT: usize = 5;
pub const CORNER_FAR_BOTTOM_RIGHT: usize = 6;
pub const CORNER_FAR_BOTTOM_LEFT: usize = 7;

/// Orientation of a detection frame in world space.
///
/// Must be orthonormal. Projection onto a scaled or skewed basis gives
/// wrong local coordinates without any error being raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl FrameBasis {
    /// World axes: right = +X, up = +Y, forward = +Z
    pub const IDENTITY: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        forward: Vec3::Z,
    };

    /// Basis of a rotated transform (scale is never part of a rotation).
    pub fn from_rotation(rotation: Quat) -> Self {
        let rotation = rotation.normalize();
        Self {
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
            forward: rotation * Vec3::Z,
        }
    }

    /// Whether all three axes are unit length and mutually orthogonal
    /// within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = |v: Vec3| (v.length() - 1.0).abs() <= tolerance;
        unit(self.right)
            && unit(self.up)
            && unit(self.forward)
            && self.right.dot(self.up).abs() <= tolerance
            && self.right.dot(self.forward).abs() <= tolerance
            && self.up.dot(self.forward).abs() <= tolerance
    }
}

/// Immutable per-query snapshot of the interaction volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionFrame {
    origin: Vec3,
    basis: FrameBasis,
    offset: Vec3,
    near: f32,
    far: f32,
    near_extent: Vec2,
    far_extent: Vec2,
}

impl DetectionFrame {
    /// Build a frame, rejecting any violated precondition.
    ///
    /// # Errors
    ///
    /// `PsyLensError::InvalidFrame` if the config's depths or extents are
    /// out of range (same checks as `InteractionConfig::validate()`), the
    /// origin is not finite, or the basis is not orthonormal.
    pub fn new(origin: Vec3, basis: FrameBasis, config: &InteractionConfig) -> PsyLensResult<Self> {
        if let Err(msg) = config.check_ranges() {
            return Err(Engine::log_and_return_error(
                "psylens::DetectionFrame",
                PsyLensError::InvalidFrame(msg),
            ));
        }
        if !origin.is_finite() {
            return Err(Engine::log_and_return_error(
                "psylens::DetectionFrame",
                PsyLensError::InvalidFrame(format!("origin must be finite (got {:?})", origin)),
            ));
        }
        if !basis.is_orthonormal(BASIS_TOLERANCE) {
            return Err(Engine::log_and_return_error(
                "psylens::DetectionFrame",
                PsyLensError::InvalidFrame(format!("basis is not orthonormal: {:?}", basis)),
            ));
        }

        Ok(Self {
            origin,
            basis,
            offset: config.offset,
            near: config.near,
            far: config.far,
            near_extent: config.near_extent,
            far_extent: config.far_extent,
        })
    }

    /// Build a frame from a host transform (position + rotation).
    ///
    /// Depths are repaired instead of rejected: `near` is clamped to zero
    /// and `far` to at least `near + FAR_EPSILON`.
    pub fn from_transform(position: Vec3, rotation: Quat, config: &InteractionConfig) -> Self {
        let near = config.near.max(0.0);
        let far = config.far.max(near + FAR_EPSILON);

        Self {
            origin: position,
            basis: FrameBasis::from_rotation(rotation),
            offset: config.offset,
            near,
            far,
            near_extent: config.near_extent,
            far_extent: config.far_extent,
        }
    }

    // ===== GETTERS =====

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn basis(&self) -> &FrameBasis {
        &self.basis
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far depth bound. Also the radius a broad-phase query should cover.
    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn near_extent(&self) -> Vec2 {
        self.near_extent
    }

    pub fn far_extent(&self) -> Vec2 {
        self.far_extent
    }

    // ===== GEOMETRY =====

    /// World point expressed in frustum space: projected onto the basis,
    /// then shifted by `offset` so the frustum centerline is x = y = 0.
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        let d = world - self.origin;
        Vec3::new(
            d.dot(self.basis.right),
            d.dot(self.basis.up),
            d.dot(self.basis.forward),
        ) - self.offset
    }

    /// Inverse of `to_local()`.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        let shifted = local + self.offset;
        self.origin
            + self.basis.right * shifted.x
            + self.basis.up * shifted.y
            + self.basis.forward * shifted.z
    }

    /// Half-width and half-height of the cross-section at `depth`.
    ///
    /// Depth is clamped to `[near, far]`, so the extents never extrapolate
    /// past either plane.
    pub fn half_extents_at(&self, depth: f32) -> Vec2 {
        let z = depth.clamp(self.near, self.far);
        let t = (z - self.near) / (self.far - self.near);
        self.near_extent.lerp(self.far_extent, t)
    }

    /// Whether a sphere overlaps the frustum.
    ///
    /// `radius` must be non-negative.
    pub fn overlaps_sphere(&self, center: Vec3, radius: f32) -> bool {
        debug_assert!(radius >= 0.0, "negative sphere radius: {}", radius);

        let local = self.to_local(center);

        // Depth: exact sphere extent against the two planes
        let min_z = local.z - radius;
        let max_z = local.z + radius;
        if max_z < self.near || min_z > self.far {
            return false;
        }

        // Lateral: cross-section at the clamped center depth, inflated by radius
        let half = self.half_extents_at(local.z) + Vec2::splat(radius);
        local.x.abs() <= half.x && local.y.abs() <= half.y
    }

    /// Squared distance from the frame origin, the selection metric.
    pub fn distance_squared(&self, world: Vec3) -> f32 {
        (world - self.origin).length_squared()
    }

    /// World-space corners of the frustum, near plane first.
    ///
    /// Order within each plane: top-left, top-right, bottom-right,
    /// bottom-left (see the `CORNER_*` constants). Intended for debug
    /// line drawing.
    pub fn corners(&self) -> [Vec3; 8] {
        let plane = |extent: Vec2, depth: f32| {
            [
                Vec3::new(-extent.x, extent.y, depth),
                Vec3::new(extent.x, extent.y, depth),
                Vec3::new(extent.x, -extent.y, depth),
                Vec3::new(-extent.x, -extent.y, depth),
            ]
        };
        let near = plane(self.near_extent, self.near);
        let far = plane(self.far_extent, self.far);

        let mut corners = [Vec3::ZERO; 8];
        for (i, local) in near.iter().chain(far.iter()).enumerate() {
            corners[i] = self.to_world(*local);
        }
        corners
    }
}

#[cfg(test)]
#[path = "detection_frame_tests.rs"]
mod tests;
