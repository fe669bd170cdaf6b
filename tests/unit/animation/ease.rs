use super::*;

const ALL: [Ease; 11] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::SMOOTH,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_in_out_is_symmetric_around_midpoint() {
    let mid = Ease::EaseInOut.apply(0.5);
    assert!((mid - 0.5).abs() < 1e-6);
    let a = Ease::EaseInOut.apply(0.2);
    let b = Ease::EaseInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-6);
}

#[test]
fn linear_bezier_takes_fast_path() {
    let ease = Ease::CubicBezier([0.3, 0.3, 0.7, 0.7]);
    assert_eq!(ease.apply(0.37), 0.37);
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::SMOOTH.apply(-3.0), 0.0);
    assert_eq!(Ease::SMOOTH.apply(7.0), 1.0);
}

#[test]
fn bezier_validity_checks_x_control_points() {
    assert!(Ease::SMOOTH.is_valid());
    assert!(Ease::CubicBezier([0.5, -0.5, 0.5, 1.5]).is_valid());
    assert!(!Ease::CubicBezier([1.5, 0.0, 0.5, 1.0]).is_valid());
    assert!(!Ease::CubicBezier([0.5, f64::NAN, 0.5, 1.0]).is_valid());
}

#[test]
fn serde_uses_variant_names() {
    let json = serde_json::to_value(Ease::EaseInOut).unwrap();
    assert_eq!(json, serde_json::json!("EaseInOut"));
    let bezier = serde_json::json!({ "CubicBezier": [0.25, 0.1, 0.25, 1.0] });
    let back: Ease = serde_json::from_value(bezier).unwrap();
    assert_eq!(back, Ease::SMOOTH);
}
