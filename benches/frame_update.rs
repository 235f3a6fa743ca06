use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_lab::config::SceneConfig;
use scene_lab::scenes::create_volcano_scene;

const DELTA: f32 = 1.0 / 60.0;

/// Benchmark: one frame-update pass over the full volcano scene
fn bench_scene_update(c: &mut Criterion) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut scene = create_volcano_scene(&config, &mut rng);

    c.bench_function("volcano_scene_update", |b| {
        b.iter(|| {
            scene.update(black_box(DELTA), &mut rng);
        })
    });
}

/// Benchmark: composing the draw list (transform composition for every item)
fn bench_draw_list(c: &mut Criterion) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let scene = create_volcano_scene(&config, &mut rng);

    c.bench_function("volcano_draw_list", |b| {
        b.iter(|| black_box(scene.draw_list()))
    });
}

criterion_group!(benches, bench_scene_update, bench_draw_list);
criterion_main!(benches);
