//! Design System Component Tests
//!
//! Styling logic of the design system enums.

use crate::components::design_system::alert::AlertKind;
use crate::components::design_system::button::ButtonVariant;
use crate::components::design_system::card::with_extra;
use crate::components::design_system::loading::spinner_size_class;

// ========================================================================
// ButtonVariant Tests
// ========================================================================

#[test]
fn test_button_variant_default() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn test_button_variant_classes_unique() {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
    ];

    for (i, a) in variants.iter().enumerate() {
        assert!(!a.class().is_empty(), "Variant {:?} should have class", a);
        for b in &variants[i + 1..] {
            assert_ne!(a.class(), b.class());
        }
    }
}

#[test]
fn test_button_variant_primary_is_accent() {
    assert!(ButtonVariant::Primary.class().contains("yellow"));
    assert!(!ButtonVariant::Secondary.class().contains("yellow"));
}

// ========================================================================
// Card Tests
// ========================================================================

#[test]
fn test_card_extra_classes() {
    assert_eq!(with_extra("p-4", ""), "p-4");
    assert_eq!(with_extra("p-4", "   "), "p-4");
    assert_eq!(with_extra("p-4", " grid gap-3 "), "p-4 grid gap-3");
}

// ========================================================================
// AlertKind Tests
// ========================================================================

#[test]
fn test_alert_kind_default_is_error() {
    assert_eq!(AlertKind::default(), AlertKind::Error);
}

#[test]
fn test_alert_kind_styles() {
    assert!(AlertKind::Error.class().contains("red"));
    assert!(AlertKind::Success.class().contains("emerald"));
    assert_ne!(AlertKind::Error.icon(), AlertKind::Success.icon());
}

// ========================================================================
// Spinner Tests
// ========================================================================

#[test]
fn test_spinner_sizes() {
    assert_eq!(spinner_size_class("sm"), "w-4 h-4");
    assert_eq!(spinner_size_class("lg"), "w-8 h-8");
    assert_eq!(spinner_size_class("md"), "w-6 h-6");
    assert_eq!(spinner_size_class("anything"), "w-6 h-6");
}
