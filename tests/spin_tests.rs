// Host-side tests for the spin animator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod spin {
    include!("../src/core/spin.rs");
}

use rand::SeedableRng;
use spin::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Drive a started animator to completion at 60 fps, collecting every frame.
fn run_to_end(animator: &mut SpinAnimator, start_ms: f64) -> Vec<SpinFrame> {
    let mut frames = Vec::new();
    let mut now = start_ms;
    while let Some(frame) = animator.advance(now) {
        let done = frame.is_done();
        frames.push(frame);
        if done {
            break;
        }
        now += FRAME_MS;
        assert!(frames.len() < 10_000, "spin never finished");
    }
    frames
}

fn choice(selected_index: usize, jitter_deg: f64, full_spins: u32) -> SpinChoice {
    SpinChoice {
        selected_index,
        jitter_deg,
        full_spins,
    }
}

#[test]
fn ease_out_quart_endpoints_and_shape() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    // Fast start: a quarter of the time covers well over half the distance.
    assert!(ease_out_quart(0.25) > 0.6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = ease_out_quart(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn segment_angle_follows_word_count() {
    assert_eq!(segment_angle(0), None);
    assert_eq!(segment_angle(1), Some(360.0));
    assert_eq!(segment_angle(50), Some(7.2));
}

#[test]
fn selected_index_is_always_on_the_wheel() {
    let config = SpinConfig::default();
    for word_count in [1usize, 2, 3, 7, 49, 50] {
        for seed in 0..40u64 {
            let mut animator = SpinAnimator::new(word_count, config, seed);
            let plan = animator.start_spin(0.0).expect("spin should start");
            assert!(plan.selected_index < word_count);
            let frames = run_to_end(&mut animator, 0.0);
            let outcome = frames.last().and_then(|f| f.outcome);
            assert_eq!(outcome, Some(plan.selected_index));
        }
    }
}

#[test]
fn random_choice_stays_within_configured_bounds() {
    let config = SpinConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let seg = 360.0 / 12.0;
    for _ in 0..500 {
        let c = SpinChoice::random(&mut rng, 12, &config).unwrap();
        assert!(c.selected_index < 12);
        assert!(c.jitter_deg.abs() <= 0.4 * seg + 1e-9);
        assert!((6..=9).contains(&c.full_spins));
    }
    assert!(SpinChoice::random(&mut rng, 0, &config).is_none());
}

#[test]
fn target_is_at_least_six_turns_ahead() {
    let config = SpinConfig::default();
    for (seed, start) in [(1u64, 0.0), (2, 123.4), (3, -725.0), (4, 98_765.4)] {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let c = SpinChoice::random(&mut rng, 50, &config).unwrap();
            let plan = SpinPlan::new(start, 50, c, 0.0, &config).unwrap();
            assert!(
                plan.target_rotation >= start + 6.0 * 360.0,
                "target {} too close to start {}",
                plan.target_rotation,
                start
            );
            assert!(plan.target_rotation < start + 10.0 * 360.0);
        }
    }
}

#[test]
fn rotation_is_monotonic_and_ends_exactly_on_target() {
    let mut animator = SpinAnimator::new(50, SpinConfig::default(), 11);
    let plan = animator.start_spin(1_000.0).unwrap();
    let frames = run_to_end(&mut animator, 1_000.0);

    let mut prev = plan.start_rotation;
    for f in &frames {
        assert!(f.rotation >= prev, "rotation went backwards");
        prev = f.rotation;
    }
    let last = frames.last().unwrap();
    assert_eq!(last.rotation, plan.target_rotation);
    assert_eq!(animator.rotation(), plan.target_rotation);
    assert!(!animator.is_spinning());
}

#[test]
fn finishes_exactly_once() {
    let mut animator = SpinAnimator::new(10, SpinConfig::default(), 5);
    animator.start_spin(0.0).unwrap();
    let frames = run_to_end(&mut animator, 0.0);
    let outcomes = frames.iter().filter(|f| f.outcome.is_some()).count();
    assert_eq!(outcomes, 1);
    assert!(animator.advance(10_000.0).is_none());
    assert!(animator.advance(20_000.0).is_none());
}

#[test]
fn tick_count_matches_segment_boundaries_crossed() {
    // 7 does not divide 360; 50 is the full wheel.
    for word_count in [7usize, 50] {
        let mut animator = SpinAnimator::new(word_count, SpinConfig::default(), 21);
        // Two spins in a row so the second starts from a non-zero rotation.
        for spin_no in 0..2 {
            let start_ms = spin_no as f64 * 10_000.0;
            let plan = animator.start_spin(start_ms).unwrap();
            let frames = run_to_end(&mut animator, start_ms);
            let ticks: Vec<i64> = frames.iter().flat_map(|f| f.ticks.iter().copied()).collect();

            let seg = plan.segment_angle;
            let first = (plan.start_rotation / seg).floor() as i64;
            let last = (plan.target_rotation / seg).floor() as i64;
            assert_eq!(ticks.len() as i64, last - first);
            assert_eq!(ticks.len() as u64, plan.expected_ticks());
            // Each boundary once, in order.
            let expected: Vec<i64> = (first + 1..=last).collect();
            assert_eq!(ticks, expected);
        }
    }
}

#[test]
fn several_ticks_can_fire_in_one_frame_early_on() {
    let config = SpinConfig::default();
    let mut animator = SpinAnimator::new(50, config, 0);
    animator.start_with(choice(0, 0.0, 9), 0.0).unwrap();
    let first = animator.advance(0.0).unwrap();
    assert!(first.ticks.is_empty());
    let second = animator.advance(FRAME_MS).unwrap();
    assert!(second.ticks.len() > 1, "got {} ticks", second.ticks.len());
}

#[test]
fn start_while_spinning_is_rejected_without_side_effects() {
    let mut animator = SpinAnimator::new(50, SpinConfig::default(), 3);
    let plan = animator.start_spin(0.0).unwrap();
    animator.advance(500.0).unwrap();
    let rotation = animator.rotation();

    assert!(animator.start_spin(600.0).is_none());
    assert!(animator.start_with(choice(1, 0.0, 6), 600.0).is_none());

    assert!(animator.is_spinning());
    assert_eq!(animator.rotation(), rotation);
    assert_eq!(animator.plan(), Some(&plan));
}

#[test]
fn empty_wheel_rejects_spins() {
    let mut animator = SpinAnimator::new(3, SpinConfig::default(), 3);
    animator.set_word_count(0);
    assert!(animator.start_spin(0.0).is_none());
    assert!(!animator.is_spinning());
    assert_eq!(animator.rotation(), 0.0);
}

#[test]
fn forced_first_segment_lands_under_pointer() {
    let config = SpinConfig::default();
    let plan = SpinPlan::new(0.0, 50, choice(0, 0.0, 6), 0.0, &config).unwrap();
    assert_eq!(plan.target_rotation.rem_euclid(360.0), 270.0);
    assert_eq!(plan.target_rotation, 6.0 * 360.0 + 270.0);
}

#[test]
fn target_angle_subtracts_index_and_jitter() {
    let config = SpinConfig::default();
    // 4 segments of 90deg: index 1 with +10deg jitter stops at 270 - 90 - 10.
    let plan = SpinPlan::new(0.0, 4, choice(1, 10.0, 7), 0.0, &config).unwrap();
    assert!((plan.target_rotation.rem_euclid(360.0) - 170.0).abs() < 1e-9);
    assert!(SpinPlan::new(0.0, 4, choice(4, 0.0, 7), 0.0, &config).is_none());
}

#[test]
fn single_word_always_stops_at_pointer() {
    let config = SpinConfig::default();
    for seed in 0..20u64 {
        let mut animator = SpinAnimator::new(1, config, seed);
        let plan = animator.start_spin(0.0).unwrap();
        assert_eq!(plan.selected_index, 0);
        assert_eq!(plan.segment_angle, 360.0);
        assert_eq!(plan.target_rotation.rem_euclid(360.0), 270.0);
    }
}

#[test]
fn word_count_change_applies_to_next_spin() {
    let mut animator = SpinAnimator::new(50, SpinConfig::default(), 8);
    let first = animator.start_spin(0.0).unwrap();
    animator.set_word_count(49);
    assert_eq!(animator.plan().unwrap().segment_angle, first.segment_angle);
    run_to_end(&mut animator, 0.0);

    let second = animator.start_spin(10_000.0).unwrap();
    assert!((second.segment_angle - 360.0 / 49.0).abs() < 1e-12);
    assert!(second.selected_index < 49);
    assert_eq!(second.start_rotation, first.target_rotation);
}

#[test]
fn cancel_keeps_rotation_and_allows_a_new_spin() {
    let mut animator = SpinAnimator::new(20, SpinConfig::default(), 9);
    animator.start_spin(0.0).unwrap();
    animator.advance(1_000.0).unwrap();
    let rotation = animator.rotation();
    assert!(animator.cancel());
    assert!(!animator.cancel());
    assert!(!animator.is_spinning());
    assert!(animator.advance(2_000.0).is_none());
    assert_eq!(animator.rotation(), rotation);
    let next = animator.start_spin(3_000.0).unwrap();
    assert_eq!(next.start_rotation, rotation);
}

#[test]
fn retired_animator_refuses_every_later_spin() {
    let mut animator = SpinAnimator::new(20, SpinConfig::default(), 4);
    animator.start_spin(0.0).unwrap();
    animator.advance(500.0).unwrap();
    let rotation = animator.rotation();

    assert!(animator.retire());
    assert!(animator.is_retired());
    assert!(!animator.is_spinning());
    assert!(animator.advance(1_000.0).is_none());

    // A stale click or Ctrl+Enter after teardown must not leave a spin stuck in flight.
    assert!(animator.start_spin(2_000.0).is_none());
    assert!(animator.start_with(choice(0, 0.0, 6), 2_000.0).is_none());
    assert!(!animator.is_spinning());
    assert_eq!(animator.rotation(), rotation);
    assert!(!animator.retire());
}

#[test]
fn progress_never_moves_backwards() {
    let mut animator = SpinAnimator::new(50, SpinConfig::default(), 4);
    animator.start_spin(0.0).unwrap();
    let ahead = animator.advance(3_000.0).unwrap();
    let stale = animator.advance(1_000.0).unwrap();
    assert_eq!(stale.rotation, ahead.rotation);
    assert!(stale.ticks.is_empty());
}

#[test]
fn custom_config_is_honored() {
    let config = SpinConfig {
        duration_ms: 1_000.0,
        jitter_fraction: 0.0,
        min_full_spins: 2,
        max_full_spins: 2,
        ..SpinConfig::default()
    };
    let mut animator = SpinAnimator::new(8, config, 12);
    let plan = animator.start_spin(0.0).unwrap();
    let seg = 45.0;
    let expected = (270.0 - plan.selected_index as f64 * seg).rem_euclid(360.0);
    assert!((plan.target_rotation - (2.0 * 360.0 + expected)).abs() < 1e-9);
    let done = animator.advance(1_000.0).unwrap();
    assert!(done.is_done());
}
