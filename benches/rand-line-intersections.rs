use criterion::*;
use geo::Rect;

const BBOX: [f64; 2] = [1024., 1024.];

#[path = "utils/random.rs"]
mod random;
#[path = "utils/intersections.rs"]
mod intersections;

use geo_topograph::Edge;
use intersections::*;
use rand::thread_rng;
use random::*;

fn short_lines(c: &mut Criterion) {
    const NUM_LINES: usize = 1024;

    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);
    let line_len = BBOX[0] / 5.;

    let edges: Vec<_> = (0..NUM_LINES)
        .map(|_| {
            let line = uniform_line_with_length(&mut thread_rng(), bbox, line_len);
            Edge::new(vec![line.start, line.end]).unwrap()
        })
        .collect();
    c.bench_function("Sweep - short random lines", |b| {
        b.iter(|| black_box(count_sweep(&edges)))
    });
    c.bench_function("R-Tree - short random lines", |b| {
        b.iter(|| black_box(count_rtree(&edges)))
    });
    c.bench_function("Brute-Force - short random lines", |b| {
        b.iter(|| black_box(count_brute(&edges)))
    });
}

fn random_walks(c: &mut Criterion) {
    const NUM_WALKS: usize = 32;

    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);
    let mut group = c.benchmark_group("random walks");
    group.sample_size(20);

    (4..10).step_by(2).for_each(|log_steps| {
        let steps = 1 << log_steps;
        let edges: Vec<_> = (0..NUM_WALKS)
            .map(|_| {
                let walk = random_walk(&mut thread_rng(), bbox, steps, BBOX[0] / steps as f64, 0.2);
                Edge::try_from(walk).unwrap()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("sweep", steps), &edges, |b, edges| {
            b.iter(|| black_box(count_sweep(edges)))
        });
        group.bench_with_input(BenchmarkId::new("r-tree", steps), &edges, |b, edges| {
            b.iter(|| black_box(count_rtree(edges)))
        });
        group.bench_with_input(BenchmarkId::new("brute-force", steps), &edges, |b, edges| {
            b.iter(|| black_box(count_brute(edges)))
        });
    });
    group.finish();
}

criterion_group!(random, short_lines, random_walks);
criterion_main!(random);
