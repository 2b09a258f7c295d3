#[path = "utils/random.rs"]
mod random;

#[path = "utils/intersections.rs"]
mod intersections;

use geo::Rect;
use geo_topograph::Edge;
use intersections::*;
use rand::thread_rng;
use random::*;

const BBOX: [f64; 2] = [1024., 1024.];

fn random_walk_perf() {
    const SAMPLE_SIZE: usize = 128;
    const NUM_WALKS: usize = 16;

    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);

    (9..14).step_by(2).for_each(|log_steps| {
        let steps = 1 << log_steps;
        let edges: Vec<_> = (0..NUM_WALKS)
            .map(|_| {
                let walk = random_walk(&mut thread_rng(), bbox, steps, BBOX[0] / 64., 0.5);
                Edge::try_from(walk).unwrap()
            })
            .collect();
        eprintln!("Profiling with {} walks of {} steps", NUM_WALKS, steps);

        (0..SAMPLE_SIZE).for_each(|_| {
            classify_sweep(&edges);
        });
    });
}

fn main() {
    random_walk_perf();
}
