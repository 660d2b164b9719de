use glam::{Quat, Vec3};
use super::*;

fn assert_vec3_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-4, "expected {:?}, got {:?}", b, a);
}

// ============================================================================
// Defaults and builders
// ============================================================================

#[test]
fn test_new_defaults() {
    let item = Interactable::new(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(item.pivot_position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(item.pivot_rotation(), Quat::IDENTITY);
    assert_eq!(item.pivot_scale(), Vec3::ONE);
    assert_eq!(item.anchor(), InteractionAnchor::Offset(Vec3::ZERO));
    assert_eq!(item.radius(), DEFAULT_INTERACTION_RADIUS);
    assert!(item.is_eligible());
    assert_eq!(item.layer(), 0);
    assert_eq!(item.prompt(), DEFAULT_PROMPT);
}

#[test]
fn test_builders() {
    let item = Interactable::new(Vec3::ZERO)
        .with_radius(0.5)
        .with_eligible(false)
        .with_layer(4)
        .with_prompt("Open gate");

    assert_eq!(item.radius(), 0.5);
    assert!(!item.is_eligible());
    assert_eq!(item.layer(), 4);
    assert_eq!(item.prompt(), "Open gate");
}

#[test]
fn test_negative_and_nan_radius_clamped_to_zero() {
    let mut item = Interactable::new(Vec3::ZERO).with_radius(-1.0);
    assert_eq!(item.radius(), 0.0);

    item.set_radius(f32::NAN);
    assert_eq!(item.radius(), 0.0);
}

// ============================================================================
// interaction_center()
// ============================================================================

#[test]
fn test_center_defaults_to_pivot() {
    let item = Interactable::new(Vec3::new(4.0, 0.0, -2.0));
    assert_eq!(item.interaction_center(), Vec3::new(4.0, 0.0, -2.0));
}

#[test]
fn test_center_from_explicit_point_ignores_pivot() {
    let item = Interactable::new(Vec3::new(4.0, 0.0, -2.0))
        .with_rotation(Quat::from_rotation_y(1.0))
        .with_anchor(InteractionAnchor::Point(Vec3::new(0.0, 1.0, 0.0)));
    assert_eq!(item.interaction_center(), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_center_from_offset_follows_rotation() {
    // Pivot facing +X: local forward offset lands on world +X
    let item = Interactable::new(Vec3::new(1.0, 0.0, 0.0))
        .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
        .with_anchor(InteractionAnchor::Offset(Vec3::new(0.0, 0.5, 2.0)));
    assert_vec3_near(item.interaction_center(), Vec3::new(3.0, 0.5, 0.0));
}

#[test]
fn test_center_offset_is_scaled_before_rotation() {
    // Non-uniform scale stretches the local offset, then the pivot turns it
    let item = Interactable::new(Vec3::new(1.0, 0.0, 0.0))
        .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
        .with_scale(Vec3::new(1.0, 2.0, 3.0))
        .with_anchor(InteractionAnchor::Offset(Vec3::new(0.0, 0.5, 2.0)));
    assert_vec3_near(item.interaction_center(), Vec3::new(7.0, 1.0, 0.0));
}

#[test]
fn test_scale_does_not_move_point_anchor_or_radius() {
    let mut item = Interactable::new(Vec3::ZERO)
        .with_radius(0.3)
        .with_anchor(InteractionAnchor::Point(Vec3::new(0.0, 1.0, 4.0)));
    item.set_pivot_scale(Vec3::splat(5.0));
    assert_eq!(item.interaction_center(), Vec3::new(0.0, 1.0, 4.0));
    assert_eq!(item.radius(), 0.3);
}

#[test]
fn test_set_pivot_moves_offset_center() {
    let mut item = Interactable::new(Vec3::ZERO)
        .with_anchor(InteractionAnchor::Offset(Vec3::Y));
    item.set_pivot(Vec3::new(0.0, 0.0, 5.0), Quat::IDENTITY);
    assert_eq!(item.interaction_center(), Vec3::new(0.0, 1.0, 5.0));
}

// ============================================================================
// to_candidate()
// ============================================================================

#[test]
fn test_to_candidate_copies_state() {
    let mut item = Interactable::new(Vec3::new(0.0, 0.0, 1.0)).with_radius(0.3);
    let candidate = item.to_candidate(7u32);
    assert_eq!(candidate.key, 7);
    assert_eq!(candidate.center, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(candidate.radius, 0.3);
    assert!(candidate.eligible);

    item.set_eligible(false);
    assert!(!item.to_candidate(7u32).eligible);
}
