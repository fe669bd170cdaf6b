use super::*;

fn bob(period: u64) -> LoopTrack {
    LoopTrack {
        property: Property::Y,
        keys: vec![0.0, -10.0, 0.0],
        period: Millis(period),
        ease: Ease::Linear,
    }
}

#[test]
fn keys_are_evenly_spaced_over_the_period() {
    let t = bob(4000);
    assert_eq!(t.sample(Millis(0)), 0.0);
    assert_eq!(t.sample(Millis(1000)), -5.0);
    assert_eq!(t.sample(Millis(2000)), -10.0);
    assert_eq!(t.sample(Millis(3000)), -5.0);
}

#[test]
fn repeats_after_each_period() {
    let t = bob(4000);
    for k in 0..5u64 {
        assert_eq!(t.sample(Millis(k * 4000 + 1000)), t.sample(Millis(1000)));
    }
}

#[test]
fn single_key_is_constant() {
    let t = LoopTrack::new(Property::Scale, vec![1.1], Millis(2500));
    assert_eq!(t.sample(Millis(0)), 1.1);
    assert_eq!(t.sample(Millis(1234)), 1.1);
}

#[test]
fn holds_first_key_until_delay() {
    let anim = LoopAnimation::new(vec![bob(4000)]);
    let mut props = VisualProps::IDENTITY.with(Property::Y, 99.0);
    anim.apply(Millis(100), Millis(500), &mut props);
    assert_eq!(props.y, 0.0);
    anim.apply(Millis(2500), Millis(500), &mut props);
    assert_eq!(props.y, -10.0);
}

#[test]
fn untouched_properties_are_preserved() {
    let anim = LoopAnimation::new(vec![bob(4000)]);
    let mut props = VisualProps::IDENTITY.with(Property::RotateDeg, -15.0);
    anim.apply(Millis(1000), Millis::ZERO, &mut props);
    assert_eq!(props.rotate_deg, -15.0);
    assert_eq!(props.opacity, 1.0);
}

#[test]
fn validation_rejects_degenerate_tracks() {
    assert!(LoopAnimation::default().validate().is_err());
    assert!(LoopAnimation::new(vec![bob(0)]).validate().is_err());
    assert!(LoopAnimation::new(vec![LoopTrack::new(Property::X, vec![], Millis(10))])
        .validate()
        .is_err());
    assert!(LoopAnimation::new(vec![bob(3000)]).validate().is_ok());
}

#[test]
fn derived_phases_differ_between_elements() {
    let period = Millis(4000);
    let phases: Vec<Millis> = (0..8).map(|i| derived_phase(ElementId(i), period)).collect();
    for (i, a) in phases.iter().enumerate() {
        assert!(*a < period);
        for b in &phases[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn period_is_the_longest_track() {
    let anim = LoopAnimation::new(vec![bob(3000), bob(3500)]);
    assert_eq!(anim.period(), Millis(3500));
}
