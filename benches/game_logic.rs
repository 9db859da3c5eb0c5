use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{Engine, GameSnapshot, ManualClock, SimpleRng};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction};

/// A 160-segment snake coiled over rows 8..1, head at (20,8) heading down.
fn coiled_engine() -> Engine<ManualClock, SimpleRng> {
    let mut body = Vec::new();
    for y in (1..=8).rev() {
        if y % 2 == 0 {
            body.extend((1..=20).rev().map(|x| Cell::new(x, y)));
        } else {
            body.extend((1..=20).map(|x| Cell::new(x, y)));
        }
    }
    let mut engine = Engine::new(ManualClock::new(), SimpleRng::new(12345));
    engine
        .load_position(&body, Direction::Down, Cell::new(20, 20))
        .unwrap();
    engine
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick_160_segments", |b| {
        b.iter_batched(
            coiled_engine,
            |mut engine| {
                for _ in 0..10 {
                    black_box(engine.tick());
                }
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_start(c: &mut Criterion) {
    let mut engine = Engine::new(ManualClock::new(), SimpleRng::new(12345));

    c.bench_function("start", |b| {
        b.iter(|| {
            engine.start();
            black_box(engine.drain_events());
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let engine = coiled_engine();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let engine = coiled_engine();
    let snap = engine.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), true, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_start,
    bench_snapshot_into,
    bench_render_into
);
criterion_main!(benches);
