use geo::{Coordinate, GeoFloat};

use crate::{envelope::Envelope, Edge};

/// Receiver of candidate segment pairs.
///
/// The chain intersection routines narrow the search down to pairs
/// of single segments and hand each pair to the sink, which decides
/// what an intersection between them means.
pub trait IntersectionSink<T: GeoFloat> {
    /// Test segment `seg_index0` of `e0` against segment `seg_index1`
    /// of `e1`. Segment `i` of an edge runs from coordinate `i` to
    /// coordinate `i + 1`.
    fn add_intersections(&mut self, e0: &Edge<T>, seg_index0: usize, e1: &Edge<T>, seg_index1: usize);

    /// Whether the sink has seen enough; callers may stop early.
    fn is_done(&self) -> bool {
        false
    }
}

/// Caller owned scratch space for the recursive chain splitter.
///
/// Holds the two envelopes re-initialized at every recursion step, so
/// the hot path does not allocate. Also counts the envelope overlap
/// checks and the leaf level segment pair tests it performed. Must
/// not be shared by concurrently running splits.
#[derive(Debug, Clone)]
pub struct ChainScratch<T: GeoFloat> {
    env0: Envelope<T>,
    env1: Envelope<T>,
    envelope_tests: usize,
    leaf_tests: usize,
}

impl<T: GeoFloat> Default for ChainScratch<T> {
    fn default() -> Self {
        ChainScratch {
            env0: Envelope::default(),
            env1: Envelope::default(),
            envelope_tests: 0,
            leaf_tests: 0,
        }
    }
}

impl<T: GeoFloat> ChainScratch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of envelope overlap checks performed.
    pub fn envelope_tests(&self) -> usize {
        self.envelope_tests
    }

    /// Number of segment pairs handed to a sink.
    pub fn leaf_tests(&self) -> usize {
        self.leaf_tests
    }

    pub fn reset_counters(&mut self) {
        self.envelope_tests = 0;
        self.leaf_tests = 0;
    }
}

/// Monotone chain view of an [`Edge`].
///
/// Borrows the edge's coordinates together with the chain boundary
/// indices `starts`: chain `i` covers the coordinates
/// `starts[i]..=starts[i + 1]`. Obtained from
/// [`Edge::monotone_chain_edge`].
#[derive(Debug, Clone, Copy)]
pub struct MonotoneChainEdge<'a, T: GeoFloat> {
    edge: &'a Edge<T>,
    starts: &'a [usize],
}

impl<'a, T: GeoFloat> MonotoneChainEdge<'a, T> {
    pub(crate) fn new(edge: &'a Edge<T>, starts: &'a [usize]) -> Self {
        debug_assert!(starts.len() >= 2);
        MonotoneChainEdge { edge, starts }
    }

    #[inline]
    pub fn edge(&self) -> &'a Edge<T> {
        self.edge
    }

    #[inline]
    pub fn coords(&self) -> &'a [Coordinate<T>] {
        self.edge.coords()
    }

    /// Chain boundary indices, including the trailing sentinel.
    #[inline]
    pub fn starts(&self) -> &'a [usize] {
        self.starts
    }

    #[inline]
    pub fn num_chains(&self) -> usize {
        self.starts.len() - 1
    }

    /// End points of chain `chain`.
    #[inline]
    fn chain_ends(&self, chain: usize) -> (Coordinate<T>, Coordinate<T>) {
        let coords = self.coords();
        (coords[self.starts[chain]], coords[self.starts[chain + 1]])
    }

    /// Smallest `x` of chain `chain`. Only reads the chain end points.
    pub fn min_x(&self, chain: usize) -> T {
        let (p, q) = self.chain_ends(chain);
        p.x.min(q.x)
    }

    /// Largest `x` of chain `chain`. Only reads the chain end points.
    pub fn max_x(&self, chain: usize) -> T {
        let (p, q) = self.chain_ends(chain);
        p.x.max(q.x)
    }

    pub fn envelope(&self, chain: usize) -> Envelope<T> {
        let (p, q) = self.chain_ends(chain);
        Envelope::new(p, q)
    }

    /// Test every chain of `self` against every chain of `other`.
    ///
    /// Used when no coarser index narrows down the candidate chain
    /// pairs.
    pub fn compute_intersects<S: IntersectionSink<T>>(
        &self,
        other: &MonotoneChainEdge<'_, T>,
        sink: &mut S,
    ) {
        let mut scratch = ChainScratch::new();
        for i in 0..self.num_chains() {
            for j in 0..other.num_chains() {
                if sink.is_done() {
                    return;
                }
                self.compute_intersects_for_chain(i, other, j, sink, &mut scratch);
            }
        }
    }

    /// Test chain `chain0` of `self` against chain `chain1` of `other`.
    pub fn compute_intersects_for_chain<S: IntersectionSink<T>>(
        &self,
        chain0: usize,
        other: &MonotoneChainEdge<'_, T>,
        chain1: usize,
        sink: &mut S,
        scratch: &mut ChainScratch<T>,
    ) {
        self.compute_intersects_in_range(
            self.starts[chain0],
            self.starts[chain0 + 1],
            other,
            other.starts[chain1],
            other.starts[chain1 + 1],
            sink,
            scratch,
        );
    }

    /// Recursively bisect the index ranges `start0..=end0` and
    /// `start1..=end1`, pruning sub-ranges whose envelopes are
    /// disjoint, down to pairs of single segments.
    #[allow(clippy::too_many_arguments)]
    fn compute_intersects_in_range<S: IntersectionSink<T>>(
        &self,
        start0: usize,
        end0: usize,
        other: &MonotoneChainEdge<'_, T>,
        start1: usize,
        end1: usize,
        sink: &mut S,
        scratch: &mut ChainScratch<T>,
    ) {
        if end0 - start0 == 1 && end1 - start1 == 1 {
            scratch.leaf_tests += 1;
            sink.add_intersections(self.edge, start0, other.edge, start1);
            return;
        }
        if !self.overlaps(start0, end0, other, start1, end1, scratch) {
            return;
        }

        let mid0 = (start0 + end0) / 2;
        let mid1 = (start1 + end1) / 2;

        if start0 < mid0 {
            if start1 < mid1 {
                self.compute_intersects_in_range(start0, mid0, other, start1, mid1, sink, scratch);
            }
            if mid1 < end1 {
                self.compute_intersects_in_range(start0, mid0, other, mid1, end1, sink, scratch);
            }
        }
        if mid0 < end0 {
            if start1 < mid1 {
                self.compute_intersects_in_range(mid0, end0, other, start1, mid1, sink, scratch);
            }
            if mid1 < end1 {
                self.compute_intersects_in_range(mid0, end0, other, mid1, end1, sink, scratch);
            }
        }
    }

    /// Whether the envelopes of the two ranges intersect. Since the
    /// ranges lie within monotone chains, the end points suffice.
    fn overlaps(
        &self,
        start0: usize,
        end0: usize,
        other: &MonotoneChainEdge<'_, T>,
        start1: usize,
        end1: usize,
        scratch: &mut ChainScratch<T>,
    ) -> bool {
        scratch.envelope_tests += 1;
        let (coords0, coords1) = (self.coords(), other.coords());
        scratch.env0.init(coords0[start0], coords0[end0]);
        scratch.env1.init(coords1[start1], coords1[end1]);
        scratch.env0.intersects(&scratch.env1)
    }
}

#[cfg(test)]
mod tests {
    use geo::Coordinate;

    use super::*;

    /// Records every segment pair it receives.
    #[derive(Default)]
    struct PairLog(Vec<(usize, usize)>);

    impl IntersectionSink<f64> for PairLog {
        fn add_intersections(&mut self, _: &Edge<f64>, s0: usize, _: &Edge<f64>, s1: usize) {
            self.0.push((s0, s1));
        }
    }

    fn staircase(n: usize, x0: f64, y0: f64) -> Edge<f64> {
        let coords = (0..=n)
            .map(|i| Coordinate {
                x: x0 + i as f64,
                y: y0 + (i / 2) as f64,
            })
            .collect();
        Edge::new(coords).unwrap()
    }

    fn fresh_scratch<T: GeoFloat>() -> ChainScratch<T> {
        ChainScratch::new()
    }

    #[test]
    fn test_scratch_starts_empty() {
        let mut scratch = fresh_scratch::<f64>();
        assert_eq!(scratch.envelope_tests(), 0);
        assert_eq!(scratch.leaf_tests(), 0);

        let e0 = staircase(8, 0., 0.);
        let e1 = staircase(8, 0., 1.);
        let (m0, m1) = (e0.monotone_chain_edge(), e1.monotone_chain_edge());
        m0.compute_intersects_for_chain(0, &m1, 0, &mut PairLog::default(), &mut scratch);
        assert!(scratch.envelope_tests() > 0);

        scratch.reset_counters();
        assert_eq!(scratch.envelope_tests(), 0);
        assert_eq!(scratch.leaf_tests(), 0);
        assert_eq!(fresh_scratch::<f32>().leaf_tests(), 0);
    }

    #[test]
    fn test_disjoint_chains_prune_at_top() {
        let e0 = staircase(64, 0., 0.);
        let e1 = staircase(64, 100., 100.);
        let (m0, m1) = (e0.monotone_chain_edge(), e1.monotone_chain_edge());
        assert_eq!(m0.num_chains(), 1);
        assert_eq!(m1.num_chains(), 1);

        let mut log = PairLog::default();
        let mut scratch = ChainScratch::new();
        m0.compute_intersects_for_chain(0, &m1, 0, &mut log, &mut scratch);

        assert!(log.0.is_empty());
        assert_eq!(scratch.envelope_tests(), 1);
        assert_eq!(scratch.leaf_tests(), 0);
    }

    #[test]
    fn test_touching_chains_are_logarithmic() {
        const N: usize = 64;
        let e0 = Edge::new((0..=N).map(|i| Coordinate { x: i as f64, y: i as f64 }).collect()).unwrap();
        let e1 = Edge::new(
            (0..=N)
                .map(|i| Coordinate {
                    x: (N + i) as f64,
                    y: (N + i) as f64,
                })
                .collect(),
        )
        .unwrap();

        let mut log = PairLog::default();
        let mut scratch = ChainScratch::new();
        e0.monotone_chain_edge()
            .compute_intersects_for_chain(0, &e1.monotone_chain_edge(), 0, &mut log, &mut scratch);

        // Only the last segment of `e0` meets the first of `e1`.
        assert!(log.0.contains(&(N - 1, 0)));
        // log2(64) = 6 levels of bisection.
        assert!(scratch.leaf_tests() <= 4, "leaf tests: {}", scratch.leaf_tests());
        assert!(scratch.envelope_tests() <= 4 * 6, "envelope tests: {}", scratch.envelope_tests());
    }

    #[test]
    fn test_self_comparison_is_linear() {
        const N: usize = 64;
        let edge = Edge::new((0..=N).map(|i| Coordinate { x: i as f64, y: i as f64 }).collect()).unwrap();
        let mce = edge.monotone_chain_edge();

        let mut log = PairLog::default();
        let mut scratch = ChainScratch::new();
        mce.compute_intersects_for_chain(0, &mce, 0, &mut log, &mut scratch);

        // Every segment meets itself and its neighbours.
        for i in 0..N {
            assert!(log.0.contains(&(i, i)));
        }
        for i in 1..N {
            assert!(log.0.contains(&(i - 1, i)));
            assert!(log.0.contains(&(i, i - 1)));
        }
        assert!(scratch.leaf_tests() >= N);
        assert!(scratch.leaf_tests() <= 8 * N, "leaf tests: {}", scratch.leaf_tests());
    }

    #[test]
    fn test_compute_intersects_all_chain_pairs() {
        let zigzag = Edge::new(vec![
            Coordinate { x: 0., y: 0. },
            Coordinate { x: 2., y: 2. },
            Coordinate { x: 4., y: 0. },
            Coordinate { x: 6., y: 2. },
        ])
        .unwrap();
        let flat = Edge::new(vec![Coordinate { x: -1., y: 1. }, Coordinate { x: 7., y: 1. }]).unwrap();

        let mut log = PairLog::default();
        zigzag
            .monotone_chain_edge()
            .compute_intersects(&flat.monotone_chain_edge(), &mut log);

        let mut pairs = log.0.clone();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 0), (1, 0), (2, 0)]);
    }
}
