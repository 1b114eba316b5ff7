use criterion::{Criterion, criterion_group, criterion_main};
use marquee_rs::api::{MarqueeConfig, MarqueeController};
use marquee_rs::core::duration_millis;
use marquee_rs::headless::{HeadlessHost, RecordingResizeObserver};
use std::hint::black_box;
use std::time::Duration;

fn bench_duration_millis(c: &mut Criterion) {
    c.bench_function("duration_millis", |b| {
        b.iter(|| duration_millis(black_box(1_234.5), black_box(321.0)))
    });
}

fn bench_frame_advance_and_reversal(c: &mut Criterion) {
    let mut host = HeadlessHost::new();
    let root = host.create_node("root", None);
    let child = host.create_node("content", Some(1_920.0));
    host.append_child(root, child).expect("append content");
    let mut controller = MarqueeController::new(
        host,
        RecordingResizeObserver::default(),
        root,
        MarqueeConfig::new(240.0).with_warnings_enabled(false),
    )
    .expect("controller init");
    controller.initialize(child).expect("initialize");
    controller.advance(Duration::ZERO);

    c.bench_function("advance_and_reverse_direction", |b| {
        b.iter(|| {
            controller.advance(black_box(Duration::from_millis(16)));
            let next = controller.direction().reversed();
            controller.set_direction(black_box(next));
        })
    });
}

fn bench_group(c: &mut Criterion) {
    bench_duration_millis(c);
    bench_frame_advance_and_reversal(c);
}

criterion_group!(benches, bench_group);
criterion_main!(benches);
