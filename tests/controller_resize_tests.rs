use std::time::Duration;

use approx::assert_abs_diff_eq;
use marquee_rs::api::{MarqueeConfig, MarqueeController, MarqueeWarning};
use marquee_rs::headless::{HeadlessHost, NodeId, RecordingResizeObserver};

type HeadlessController = MarqueeController<HeadlessHost, RecordingResizeObserver<NodeId>>;

fn running_controller(config: MarqueeConfig, width: f64, elapsed_ms: u64) -> (HeadlessController, NodeId) {
    let mut host = HeadlessHost::new();
    let root = host.create_node("root", None);
    let child = host.create_node("content", Some(width));
    host.append_child(root, child).expect("append content");
    let mut controller =
        MarqueeController::new(host, RecordingResizeObserver::default(), root, config)
            .expect("controller init");
    controller.initialize(child).expect("initialize");
    controller.advance(Duration::ZERO);
    controller.advance(Duration::from_millis(elapsed_ms));
    (controller, child)
}

#[test]
fn resize_rebuilds_clone_and_restarts_at_same_progress() {
    let (mut controller, child) = running_controller(MarqueeConfig::new(300.0), 600.0, 800);
    assert_abs_diff_eq!(controller.progress().expect("progress"), 0.4, epsilon = 1e-9);
    let old_clone = *controller.cloned_child().expect("clone");

    controller
        .host_mut()
        .set_width(child, Some(800.0))
        .expect("relayout");
    controller.update_size().expect("update size");

    assert_eq!(controller.child_width(), Some(800.0));
    let new_clone = *controller.cloned_child().expect("clone");
    assert_ne!(new_clone, old_clone);
    assert!(!controller.host().contains(old_clone));

    let root = *controller.root().expect("root");
    assert_eq!(controller.host().children(root), &[child, new_clone]);

    let animation = controller.animation().expect("animation");
    assert_abs_diff_eq!(animation.duration_ms(), 800.0 / 300.0 * 1_000.0, epsilon = 1e-9);
    assert_abs_diff_eq!(controller.progress().expect("progress"), 0.4, epsilon = 1e-9);
    assert_eq!(controller.host().live_animation_count(), 1);
}

#[test]
fn unchanged_width_is_a_noop() {
    let (mut controller, _child) = running_controller(MarqueeConfig::new(300.0), 600.0, 800);
    let clone = *controller.cloned_child().expect("clone");
    let started = controller.host().started_animations().len();

    controller.update_size().expect("update size");

    assert_eq!(controller.cloned_child(), Some(&clone));
    assert_eq!(controller.host().started_animations().len(), started);
}

#[test]
fn resize_without_auto_clone_only_restarts() {
    let (mut controller, child) =
        running_controller(MarqueeConfig::new(300.0).with_auto_clone(false), 600.0, 800);

    controller
        .host_mut()
        .set_width(child, Some(300.0))
        .expect("relayout");
    controller.update_size().expect("update size");

    let root = *controller.root().expect("root");
    assert_eq!(controller.host().children(root), &[child]);
    assert!(controller.cloned_child().is_none());
    assert_abs_diff_eq!(
        controller.animation().expect("animation").duration_ms(),
        1_000.0,
        epsilon = 1e-9
    );
}

#[test]
fn collapsed_content_keeps_previous_animation() {
    let (mut controller, child) = running_controller(MarqueeConfig::new(300.0), 600.0, 800);
    let started = controller.host().started_animations().len();

    controller
        .host_mut()
        .set_width(child, Some(0.0))
        .expect("relayout");
    controller.update_size().expect("update size");

    assert_eq!(controller.child_width(), Some(600.0));
    assert_eq!(controller.host().started_animations().len(), started);
    assert_eq!(
        controller.diagnostics().last(),
        Some(&MarqueeWarning::WidthUnavailable)
    );
}

#[test]
fn resize_while_paused_keeps_playback_paused() {
    let (mut controller, child) = running_controller(MarqueeConfig::new(300.0), 600.0, 800);
    controller.pause();

    controller
        .host_mut()
        .set_width(child, Some(900.0))
        .expect("relayout");
    controller.update_size().expect("update size");
    controller.advance(Duration::from_millis(500));

    assert!(!controller.is_playing());
    assert_abs_diff_eq!(controller.progress().expect("progress"), 0.4, epsilon = 1e-9);
}

#[test]
fn overflowing_width_keeps_the_running_loop() {
    let (mut controller, child) = running_controller(MarqueeConfig::new(300.0), 600.0, 800);
    let clone = *controller.cloned_child().expect("clone");
    let started = controller.host().started_animations().len();

    controller
        .host_mut()
        .set_width(child, Some(1e308))
        .expect("relayout");
    controller.update_size().expect("update size");

    assert!(matches!(
        controller.diagnostics().last(),
        Some(MarqueeWarning::DegenerateDuration { .. })
    ));
    assert_eq!(controller.child_width(), Some(600.0));
    assert_eq!(controller.cloned_child(), Some(&clone));
    assert!(controller.host().contains(clone));
    assert_eq!(controller.host().started_animations().len(), started);
    assert_abs_diff_eq!(controller.progress().expect("progress"), 0.4, epsilon = 1e-9);
}
