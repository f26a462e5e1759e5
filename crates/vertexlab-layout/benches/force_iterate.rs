use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use vertexlab_graph::DegreeRange;
use vertexlab_layout::geom::point;
use vertexlab_layout::{
    DeintersectStrategy, Drawing, Force, ForceConfig, ForceLayout, Headless,
    generate_random_drawing,
};

fn drawing(node_count: usize) -> Drawing {
    let mut rng = StdRng::seed_from_u64(node_count as u64);
    generate_random_drawing(
        node_count,
        DegreeRange { min: 2, max: 4 },
        &ForceConfig::default(),
        Headless,
        &mut rng,
    )
    .expect("bench graph generation")
}

fn bench_iterate(c: &mut Criterion) {
    let layout = ForceLayout::new(ForceConfig::default()).expect("default config");
    let mut group = c.benchmark_group("force_iterate");
    for n in [10usize, 30, 60] {
        let base = drawing(n);
        group.bench_with_input(BenchmarkId::new("default", n), &n, |b, _| {
            b.iter_batched_ref(
                || clone_drawing(&base),
                |d| layout.iterate(black_box(d)),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("with_edge_repulsion", n), &n, |b, _| {
            b.iter_batched_ref(
                || clone_drawing(&base),
                |d| {
                    layout.iterate_with(
                        black_box(d),
                        &[
                            Force::Walls,
                            Force::NodeRepulsion,
                            Force::EdgeSprings,
                            Force::EdgeRepulsion,
                        ],
                    )
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_deintersect(c: &mut Criterion) {
    let layout = ForceLayout::new(ForceConfig::default()).expect("default config");
    let mut group = c.benchmark_group("deintersect");
    for n in [30usize, 60] {
        let mut base = drawing(n);
        layout.run(&mut base, 100);
        for strategy in [
            DeintersectStrategy::ByLength,
            DeintersectStrategy::ByIntersectionsCount,
        ] {
            group.bench_with_input(BenchmarkId::new(format!("{strategy:?}"), n), &n, |b, _| {
                b.iter_batched_ref(
                    || clone_drawing(&base),
                    |d| strategy.run(black_box(d)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn clone_drawing(d: &Drawing) -> Drawing {
    let positions: Vec<_> = d.nodes().map(|n| (n.id(), n.position())).collect();
    Drawing::from_graph(d.graph().clone(), Headless, |id| {
        positions
            .iter()
            .find(|(v, _)| *v == id)
            .map(|(_, p)| *p)
            .unwrap_or_else(|| point(0.0, 0.0))
    })
}

criterion_group!(benches, bench_iterate, bench_deintersect);
criterion_main!(benches);
