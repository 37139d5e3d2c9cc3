use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use graphedit::editor::GraphEditor;
use graphedit::song::Event;
use macroquad::math::vec2;

fn dense_graph(c: &mut Criterion) {
    let mut editor = GraphEditor::default();
    editor.set_canvas_size(1920.0, 500.0);
    editor.set_scale_x(0.1);
    let events: Vec<_> = (0..10_000).map(|i| Event {
        id: i,
        tick: i as f64 * 30.0,
        value: (i % 128) as f64,
    }).collect();

    c.bench_function("control_points", |b| {
        b.iter(|| black_box(editor.control_points(&events)))
    });
    c.bench_function("hit_test", |b| {
        b.iter(|| black_box(editor.hit_test(&events, vec2(1500.0, 250.0))))
    });
}

criterion_group!(benches, dense_graph);
criterion_main!(benches);
