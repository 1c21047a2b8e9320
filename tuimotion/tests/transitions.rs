use std::time::{Duration, Instant};

use tuimotion::{Easing, Presence, Rgb, TransitionConfig, Tween};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

const ALL_EASINGS: [Easing; 4] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
];

// =============================================================================
// Easing
// =============================================================================

#[test]
fn test_easing_boundaries() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
        assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
    }
}

#[test]
fn test_easing_shapes() {
    assert_eq!(Easing::Linear.apply(0.25), 0.25);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_strictly_monotonic() {
    for easing in ALL_EASINGS {
        let mut prev = easing.apply(0.0);
        for i in 1..=20 {
            let val = easing.apply(i as f32 / 20.0);
            assert!(val > prev, "{easing:?} not increasing at step {i}");
            prev = val;
        }
    }
}

#[test]
fn test_easing_clamps_out_of_range_progress() {
    assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
    assert_eq!(Easing::EaseIn.apply(2.0), 1.0);
}

#[test]
fn test_easing_parse_names() {
    assert_eq!("linear".parse(), Ok(Easing::Linear));
    assert_eq!("ease-in".parse(), Ok(Easing::EaseIn));
    assert_eq!("Ease_Out".parse(), Ok(Easing::EaseOut));
    assert_eq!("ease-in-out".parse(), Ok(Easing::EaseInOut));
    assert!("spring".parse::<Easing>().is_err());

    for easing in ALL_EASINGS {
        assert_eq!(easing.to_string().parse(), Ok(easing));
    }
}

// =============================================================================
// Tween
// =============================================================================

#[test]
fn test_new_tween_is_settled() {
    let t0 = Instant::now();
    let tween = Tween::new(20.0f32);
    assert_eq!(tween.value(t0), 20.0);
    assert_eq!(tween.target(), 20.0);
    assert!(!tween.is_running(t0));
}

#[test]
fn test_tween_reaches_target_exactly() {
    let t0 = Instant::now();
    let mut tween = Tween::new(100.0f32);
    tween.animate_to(200.0, TransitionConfig::new(ms(300), Easing::EaseOut), t0);

    assert_eq!(tween.value(t0), 100.0);
    assert!(tween.is_running(t0 + ms(150)));
    assert!(!tween.is_running(t0 + ms(300)));
    assert_eq!(tween.value(t0 + ms(300)), 200.0);
    assert_eq!(tween.value(t0 + ms(10_000)), 200.0);
}

#[test]
fn test_tween_linear_midpoint() {
    let t0 = Instant::now();
    let mut tween = Tween::new(0.0f32);
    tween.animate_to(1.0, TransitionConfig::new(ms(200), Easing::Linear), t0);
    assert!((tween.value(t0 + ms(100)) - 0.5).abs() < 1e-4);
}

#[test]
fn test_tween_strictly_monotonic_toward_target() {
    let t0 = Instant::now();
    let mut tween = Tween::new(1.0f32);
    tween.animate_to(0.0, TransitionConfig::new(ms(300), Easing::EaseInOut), t0);

    let mut prev = tween.value(t0);
    for step in 1..=30 {
        let val = tween.value(t0 + ms(step * 10));
        assert!(val < prev, "not decreasing at {}ms", step * 10);
        prev = val;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn test_retarget_continues_from_current_value() {
    let t0 = Instant::now();
    let config = TransitionConfig::new(ms(300), Easing::Linear);
    let mut tween = Tween::new(0.0f32);
    tween.animate_to(1.0, config, t0);

    let midway = t0 + ms(150);
    let at_reversal = tween.value(midway);
    assert!((at_reversal - 0.5).abs() < 1e-3);

    tween.animate_to(0.0, config, midway);

    // No jump back to the previous starting value
    assert!((tween.value(midway) - at_reversal).abs() < 1e-6);
    assert!(tween.value(midway + ms(50)) < at_reversal);
    assert_eq!(tween.value(midway + ms(300)), 0.0);
}

#[test]
fn test_retarget_to_same_target_keeps_timing() {
    let t0 = Instant::now();
    let config = TransitionConfig::new(ms(300), Easing::Linear);
    let mut tween = Tween::new(0.0f32);
    tween.animate_to(1.0, config, t0);
    tween.animate_to(1.0, config, t0 + ms(200));
    assert!(!tween.is_running(t0 + ms(300)));
}

#[test]
fn test_zero_duration_snaps() {
    let t0 = Instant::now();
    let mut tween = Tween::new(20.0f32);
    tween.animate_to(0.0, TransitionConfig::instant(), t0);
    assert_eq!(tween.value(t0), 0.0);
    assert!(!tween.is_running(t0));
}

#[test]
fn test_settle_keeps_final_value() {
    let t0 = Instant::now();
    let mut tween = Tween::new(0.0f32);
    tween.animate_to(10.0, TransitionConfig::new(ms(100), Easing::Linear), t0);
    assert!((tween.value(t0 + ms(50)) - 5.0).abs() < 1e-3);

    tween.settle(t0 + ms(50));
    assert!(tween.is_running(t0 + ms(50)));

    tween.settle(t0 + ms(100));
    assert!(!tween.is_running(t0 + ms(100)));
    assert_eq!(tween.value(t0), 10.0);
}

#[test]
fn test_color_tween_endpoints() {
    let t0 = Instant::now();
    let blue = Rgb::new(0, 0, 255);
    let mut tween = Tween::new(Rgb::BLACK);
    tween.animate_to(blue, TransitionConfig::new(ms(100), Easing::Linear), t0);
    assert_eq!(tween.value(t0), Rgb::BLACK);
    assert_eq!(tween.value(t0 + ms(100)), blue);
}

// =============================================================================
// Presence
// =============================================================================

#[test]
fn test_presence_initial_state() {
    let t0 = Instant::now();
    let shown = Presence::new(true);
    assert!(shown.is_mounted(t0));
    assert_eq!(shown.progress(t0), 1.0);

    let hidden = Presence::new(false);
    assert!(!hidden.is_mounted(t0));
    assert_eq!(hidden.progress(t0), 0.0);
}

#[test]
fn test_presence_exit_unmounts_after_animation() {
    let t0 = Instant::now();
    let mut presence = Presence::new(true);
    presence.hide(TransitionConfig::new(ms(300), Easing::EaseOut), t0);

    assert!(!presence.is_visible());
    assert!(presence.is_mounted(t0 + ms(100)));
    assert!(presence.progress(t0 + ms(100)) < 1.0);
    assert!(!presence.is_mounted(t0 + ms(300)));
    assert_eq!(presence.progress(t0 + ms(300)), 0.0);
}

#[test]
fn test_presence_enter_mounts_immediately() {
    let t0 = Instant::now();
    let mut presence = Presence::new(false);
    presence.show(TransitionConfig::new(ms(300), Easing::EaseOut), t0);

    assert!(presence.is_mounted(t0));
    assert_eq!(presence.progress(t0), 0.0);
    assert!(presence.is_animating(t0 + ms(100)));
    assert_eq!(presence.progress(t0 + ms(300)), 1.0);
}

#[test]
fn test_presence_reversal_mid_exit() {
    let t0 = Instant::now();
    let config = TransitionConfig::new(ms(300), Easing::Linear);
    let mut presence = Presence::new(true);
    presence.hide(config, t0);

    let midway = t0 + ms(150);
    let progress = presence.progress(midway);
    presence.show(config, midway);

    assert!(presence.is_mounted(midway + ms(1_000)));
    assert!((presence.progress(midway) - progress).abs() < 1e-6);
    assert_eq!(presence.progress(midway + ms(300)), 1.0);
}
