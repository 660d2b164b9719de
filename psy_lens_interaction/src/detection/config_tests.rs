use glam::{Vec2, Vec3};
use crate::error::PsyLensError;
use super::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config_values() {
    let config = InteractionConfig::default();
    assert_eq!(config.near, 0.2);
    assert_eq!(config.far, 2.0);
    assert_eq!(config.near_extent, Vec2::new(0.1, 0.2));
    assert_eq!(config.far_extent, Vec2::new(0.8, 1.0));
    assert_eq!(config.offset, Vec3::ZERO);
    assert_eq!(config.detection_mask, ALL_LAYERS);
}

#[test]
fn test_default_config_is_valid() {
    assert!(InteractionConfig::default().validate().is_ok());
}

#[test]
fn test_builder_methods() {
    let config = InteractionConfig::default()
        .with_depth(1.0, 3.0)
        .with_extents(Vec2::ONE, Vec2::splat(3.0))
        .with_offset(Vec3::new(0.5, 0.0, 0.0))
        .with_detection_mask(0b101);

    assert_eq!(config.near, 1.0);
    assert_eq!(config.far, 3.0);
    assert_eq!(config.far_extent, Vec2::splat(3.0));
    assert_eq!(config.offset.x, 0.5);
    assert_eq!(config.detection_mask, 0b101);
    assert!(config.validate().is_ok());
}

// ============================================================================
// validate()
// ============================================================================

#[test]
fn test_validate_rejects_negative_near() {
    let config = InteractionConfig::default().with_depth(-0.1, 2.0);
    assert!(matches!(config.validate(), Err(PsyLensError::InvalidConfig(_))));
}

#[test]
fn test_validate_rejects_far_equal_to_near() {
    let config = InteractionConfig::default().with_depth(1.0, 1.0);
    match config.validate() {
        Err(PsyLensError::InvalidConfig(msg)) => assert!(msg.contains("greater than near")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_far_below_near() {
    let config = InteractionConfig::default().with_depth(2.0, 1.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_non_finite_depth() {
    let config = InteractionConfig::default().with_depth(0.0, f32::INFINITY);
    assert!(config.validate().is_err());

    let config = InteractionConfig::default().with_depth(f32::NAN, 2.0);
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_negative_extent() {
    let config = InteractionConfig::default()
        .with_extents(Vec2::new(-0.1, 0.2), Vec2::new(0.8, 1.0));
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_non_finite_offset() {
    let config = InteractionConfig::default().with_offset(Vec3::new(f32::NAN, 0.0, 0.0));
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_zero_near_and_zero_extents() {
    let config = InteractionConfig::default()
        .with_depth(0.0, 0.5)
        .with_extents(Vec2::ZERO, Vec2::ZERO);
    assert!(config.validate().is_ok());
}
