use super::*;

fn fade_in() -> Tween {
    Tween {
        from: VisualProps::hidden().with(Property::Y, 20.0),
        to: VisualProps::IDENTITY,
        duration: Millis(600),
        delay: Millis::ZERO,
        ease: Ease::Linear,
    }
}

#[test]
fn holds_from_until_delay_elapses() {
    let t = Tween {
        delay: Millis(200),
        ..fade_in()
    };
    assert_eq!(t.sample(Millis(0)), t.from);
    assert_eq!(t.sample(Millis(200)), t.from);
    assert_eq!(t.total(), Millis(800));
}

#[test]
fn interpolates_linearly_mid_way() {
    let t = fade_in();
    let mid = t.sample(Millis(300));
    assert!((mid.opacity - 0.5).abs() < 1e-9);
    assert!((mid.y - 10.0).abs() < 1e-9);
    assert_eq!(mid.scale, 1.0);
}

#[test]
fn settles_on_target_and_stays() {
    let t = fade_in();
    assert_eq!(t.sample(Millis(600)), VisualProps::IDENTITY);
    assert_eq!(t.sample(Millis(60_000)), VisualProps::IDENTITY);
    assert!(t.is_finished(Millis(600)));
    assert!(!t.is_finished(Millis(599)));
}

#[test]
fn zero_duration_jumps_after_delay() {
    let t = Tween {
        from: 0.0,
        to: 1.0,
        duration: Millis::ZERO,
        delay: Millis(50),
        ease: Ease::Linear,
    };
    assert_eq!(t.sample(Millis(49)), 0.0);
    assert_eq!(t.sample(Millis(50)), 1.0);
}

#[test]
fn invalid_curve_is_rejected() {
    let t = Tween {
        ease: Ease::CubicBezier([2.0, 0.0, 0.5, 1.0]),
        ..fade_in()
    };
    assert!(t.validate().is_err());
}

#[test]
fn non_finite_props_fail_validation() {
    let mut t = fade_in();
    t.to.x = f64::NAN;
    assert!(t.validate().is_err());
}

#[test]
fn props_deserialize_with_identity_defaults() {
    let json = serde_json::json!({ "opacity": 0.0, "rotate": -10.0 });
    let p: VisualProps = serde_json::from_value(json).unwrap();
    assert_eq!(p.opacity, 0.0);
    assert_eq!(p.rotate_deg, -10.0);
    assert_eq!(p.scale, 1.0);
    assert_eq!(p.get(Property::RotateDeg), -10.0);
}
