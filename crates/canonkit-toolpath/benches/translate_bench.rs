use canonkit_core::{Orientation, Point3};
use canonkit_toolpath::{ArcFeed, CanonCall, CanonRecord, TranslationSession};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A spiral of alternating half circles with a plunge between each
fn spiral_program(turns: u32) -> Vec<CanonRecord> {
    let mut records = vec![CanonRecord::new(
        1,
        CanonCall::Traverse {
            to: Point3::new(1.0, 0.0, 1.0),
            orientation: Orientation::ZERO,
        },
    )];

    let mut line = 2;
    for i in 0..turns {
        let r = 1.0 + f64::from(i);
        let depth = -0.1 * f64::from(i);
        records.push(CanonRecord::new(
            line,
            CanonCall::Feed {
                to: Point3::new(r, 0.0, depth),
                orientation: Orientation::ZERO,
                feed_rate: Some(10.0),
            },
        ));
        records.push(CanonRecord::new(
            line + 1,
            CanonCall::ArcFeed(ArcFeed {
                end: Point3::new(-r, 0.0, depth),
                center: [0.0, 0.0],
                rotation: 1,
                orientation: Orientation::ZERO,
            }),
        ));
        records.push(CanonRecord::new(
            line + 2,
            CanonCall::ArcFeed(ArcFeed {
                end: Point3::new(r, 0.0, depth),
                center: [0.0, 0.0],
                rotation: 1,
                orientation: Orientation::ZERO,
            }),
        ));
        line += 3;
    }
    records
}

fn translate_benchmark(c: &mut Criterion) {
    let program = spiral_program(500);

    c.bench_function("translate 1000 arcs", |b| {
        b.iter(|| {
            let mut session = TranslationSession::new();
            session.replay(black_box(&program));
            session.into_buffer()
        })
    });

    let mut session = TranslationSession::new();
    session.replay(&program);

    c.bench_function("extents and selection", |b| {
        b.iter(|| {
            let buffer = session.buffer().clone();
            let extents = buffer.compute_extents();
            let selection = buffer.select_by_line(black_box(750));
            (extents, selection.centroid)
        })
    });
}

criterion_group!(benches, translate_benchmark);
criterion_main!(benches);
