use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gcodepreview_core::{Layer, Point3, Segment};
use gcodepreview_visualizer::{Classifier, PreviewPipeline};

const ROLES: [&str; 6] = ["perimeter", "external perimeter", "infill", "skirt", "support", ""];
const STYLES: [&str; 4] = ["extrude", "extrude", "retract", "fly"];

fn synthetic_layers(layer_count: usize, per_layer: usize) -> Vec<Layer> {
    (0..layer_count)
        .map(|layer| {
            let z = 0.2 * (layer + 1) as f64;
            let segments = (0..per_layer)
                .map(|i| {
                    let angle = i as f64 * 0.05;
                    Segment::new(
                        Point3::new(100.0 + 40.0 * angle.cos(), 100.0 + 40.0 * angle.sin(), z),
                        ROLES[i % ROLES.len()],
                        STYLES[i % STYLES.len()],
                        true,
                    )
                })
                .collect();
            Layer::with_index(layer, segments)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let layers = synthetic_layers(1, 10_000);
    let classifier = Classifier::standard();
    c.bench_function("classify_10k", |b| {
        b.iter(|| {
            for seg in layers[0].iter() {
                black_box(classifier.classify(black_box(seg)));
            }
        })
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let layers = synthetic_layers(200, 500);
    let pipeline = PreviewPipeline::default();
    c.bench_function("pipeline_100k", |b| {
        b.iter(|| pipeline.run_layers(black_box(&layers)))
    });
}

criterion_group!(benches, bench_classify, bench_pipeline);
criterion_main!(benches);
