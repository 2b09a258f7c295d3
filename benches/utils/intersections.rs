#![allow(dead_code)]

use geo::{line_intersection::line_intersection, Line};
use geo_topograph::{
    sweep::{EdgeSetIntersector, SimpleEdgeSetIntersector, SweepLineIntersector},
    Edge, IntersectionSink, SegmentIntersector, SegmentIntersectorOptions,
};
use rstar::{RTree, RTreeObject};

struct GeomWithData<R: RTreeObject, T>(R, T);

impl<R: RTreeObject, T> RTreeObject for GeomWithData<R, T> {
    type Envelope = R::Envelope;

    fn envelope(&self) -> Self::Envelope {
        self.0.envelope()
    }
}

/// Counts intersecting segment pairs of distinct edges.
#[derive(Default)]
pub struct Counter(usize);

impl IntersectionSink<f64> for Counter {
    fn add_intersections(&mut self, e0: &Edge<f64>, s0: usize, e1: &Edge<f64>, s1: usize) {
        if e0.id() == e1.id() {
            return;
        }
        let l0 = Line::new(e0.coord(s0), e0.coord(s0 + 1));
        let l1 = Line::new(e1.coord(s1), e1.coord(s1 + 1));
        if line_intersection(l0, l1).is_some() {
            self.0 += 1;
        }
    }
}

pub fn count_sweep(edges: &[Edge<f64>]) -> usize {
    let mut counter = Counter::default();
    SweepLineIntersector.compute_self_intersections(edges, &mut counter, false);
    counter.0
}

/// Same as `count_sweep`, but every pair is reported twice.
pub fn count_brute(edges: &[Edge<f64>]) -> usize {
    let mut counter = Counter::default();
    SimpleEdgeSetIntersector.compute_self_intersections(edges, &mut counter, false);
    counter.0 / 2
}

pub fn count_rtree(edges: &[Edge<f64>]) -> usize {
    let segments: Vec<_> = edges
        .iter()
        .enumerate()
        .flat_map(|(i, e)| e.coords().windows(2).map(move |w| GeomWithData(Line::new(w[0], w[1]), i)))
        .collect();

    let tree = RTree::bulk_load(segments);
    tree.intersection_candidates_with_other_tree(&tree)
        .filter_map(|(l1, l2)| {
            if l1.1 >= l2.1 {
                None
            } else {
                line_intersection(l1.0, l2.0)
            }
        })
        .count()
}

/// Self-node the edges with a `SegmentIntersector`, including the
/// self-intersections of each edge.
pub fn classify_sweep(edges: &[Edge<f64>]) -> bool {
    let mut si = SegmentIntersector::new(SegmentIntersectorOptions {
        include_proper: true,
        ..Default::default()
    });
    SweepLineIntersector.compute_self_intersections(edges, &mut si, true);
    si.has_proper_intersection()
}
