/// InteractionConfig: tunable shape of the interaction frustum.
///
/// All distances are in world units, measured in the detection origin's
/// local space (x = right, y = up, z = forward).

use glam::{Vec2, Vec3};
use crate::engine::Engine;
use crate::error::{PsyLensError, PsyLensResult};

/// Detection mask accepting every layer
pub const ALL_LAYERS: u32 = u32::MAX;

/// Shape and filtering parameters of an interactor's detection volume.
///
/// Fields are public; `validate()` checks the documented ranges.
/// `DetectionFrame::from_transform()` tolerates out-of-range depths by
/// clamping them, so validation is only required when the caller wants
/// bad values reported instead of silently repaired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Distance from the origin where the frustum starts (>= 0)
    pub near: f32,
    /// Distance from the origin where the frustum ends (> near)
    pub far: f32,
    /// Half-width (x) and half-height (y) at the near plane
    pub near_extent: Vec2,
    /// Half-width (x) and half-height (y) at the far plane
    pub far_extent: Vec2,
    /// Local shift of the whole frustum relative to the origin
    pub offset: Vec3,
    /// Layers considered by the broad-phase (bit `n` = layer `n`)
    pub detection_mask: u32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            near: 0.2,
            far: 2.0,
            near_extent: Vec2::new(0.1, 0.2),
            far_extent: Vec2::new(0.8, 1.0),
            offset: Vec3::ZERO,
            detection_mask: ALL_LAYERS,
        }
    }
}

impl InteractionConfig {
    pub fn with_depth(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_extents(mut self, near_extent: Vec2, far_extent: Vec2) -> Self {
        self.near_extent = near_extent;
        self.far_extent = far_extent;
        self
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_detection_mask(mut self, mask: u32) -> Self {
        self.detection_mask = mask;
        self
    }

    /// Check that every field is inside its valid range.
    ///
    /// # Errors
    ///
    /// `PsyLensError::InvalidConfig` if a value is non-finite, `near < 0`,
    /// `far <= near`, or an extent component is negative.
    pub fn validate(&self) -> PsyLensResult<()> {
        self.check_ranges().map_err(|msg| {
            Engine::log_and_return_error(
                "psylens::InteractionConfig",
                PsyLensError::InvalidConfig(msg),
            )
        })
    }

    /// Range checks shared by `validate()` and `DetectionFrame::new()`,
    /// which report the same violations under different error variants.
    pub(crate) fn check_ranges(&self) -> Result<(), String> {
        if !self.near.is_finite() || !self.far.is_finite() {
            return Err(format!("depth bounds must be finite (near={}, far={})", self.near, self.far));
        }
        if self.near < 0.0 {
            return Err(format!("near must be >= 0 (got {})", self.near));
        }
        if self.far <= self.near {
            return Err(format!("far ({}) must be greater than near ({})", self.far, self.near));
        }
        if !self.near_extent.is_finite() || !self.far_extent.is_finite() || !self.offset.is_finite() {
            return Err("extents and offset must be finite".to_string());
        }
        if self.near_extent.min_element() < 0.0 || self.far_extent.min_element() < 0.0 {
            return Err(format!(
                "extents must be non-negative (near={:?}, far={:?})",
                self.near_extent, self.far_extent
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
