use std::time::Duration;

use marquee_rs::api::{MarqueeConfig, MarqueeController};
use marquee_rs::core::{Direction, duration_millis};
use marquee_rs::headless::{HeadlessHost, NodeId, RecordingResizeObserver};
use marquee_rs::platform::TimelineAnimation;
use proptest::prelude::*;

type HeadlessController = MarqueeController<HeadlessHost, RecordingResizeObserver<NodeId>>;

fn running_controller(speed: f64, width: f64, elapsed_ms: u64) -> HeadlessController {
    let mut host = HeadlessHost::new();
    let root = host.create_node("root", None);
    let child = host.create_node("content", Some(width));
    host.append_child(root, child).expect("append content");
    let mut controller = MarqueeController::new(
        host,
        RecordingResizeObserver::default(),
        root,
        MarqueeConfig::new(speed),
    )
    .expect("controller init");
    controller.initialize(child).expect("initialize");
    controller.advance(Duration::ZERO);
    controller.advance(Duration::from_millis(elapsed_ms));
    controller
}

proptest! {
    #[test]
    fn duration_is_positive_and_inverse_to_speed(
        width in 1.0f64..10_000.0,
        speed in 1.0f64..5_000.0
    ) {
        let duration = duration_millis(width, speed);
        let doubled = duration_millis(width, speed * 2.0);
        prop_assert!(duration > 0.0);
        prop_assert!((doubled * 2.0 - duration).abs() <= duration * 1e-12);
    }

    #[test]
    fn same_sign_factor_never_moves_content(
        elapsed_ms in 1u64..20_000,
        factor in 0.01f64..8.0
    ) {
        let mut controller = running_controller(300.0, 600.0, elapsed_ms);
        let before = controller.progress().expect("progress");
        let started = controller.host().started_animations().len();

        controller.set_speed_factor(factor).expect("valid factor");

        prop_assert_eq!(controller.progress(), Some(before));
        prop_assert_eq!(controller.host().started_animations().len(), started);
        let rate = controller.animation().expect("animation").playback_rate();
        prop_assert!((rate - factor).abs() <= 1e-12);
    }

    #[test]
    fn sign_flip_mirrors_progress(
        elapsed_ms in 1u64..20_000,
        factor in 0.01f64..8.0
    ) {
        let mut controller = running_controller(300.0, 600.0, elapsed_ms);
        let before = controller.progress().expect("progress");

        controller.set_speed_factor(-factor).expect("valid factor");

        prop_assert_eq!(controller.direction(), Direction::Backward);
        let after = controller.progress().expect("progress");
        let expected = (1.0 - before).rem_euclid(1.0);
        prop_assert!((after - expected).abs() <= 1e-9 || (after - expected).abs() >= 1.0 - 1e-9);
        prop_assert_eq!(controller.host().live_animation_count(), 1);
    }

    #[test]
    fn speed_change_preserves_progress(
        elapsed_ms in 1u64..20_000,
        speed in 1.0f64..5_000.0
    ) {
        let mut controller = running_controller(300.0, 600.0, elapsed_ms);
        let before = controller.progress().expect("progress");

        controller.set_speed(speed).expect("valid speed");

        let after = controller.progress().expect("progress");
        prop_assert!((after - before).abs() <= 1e-9 || (after - before).abs() >= 1.0 - 1e-9);
        let duration = controller.animation().expect("animation").duration_ms();
        prop_assert!((duration - duration_millis(600.0, speed)).abs() <= 1e-6);
    }
}
