//! Edge set intersectors.
//!
//! These find the candidate segment pairs among one or two sets of
//! edges and hand them to an [`IntersectionSink`]. No classification
//! happens here.
use geo::GeoFloat;
use log::{debug, trace};

use crate::{
    events::SweepLineEvent,
    monotone::{ChainScratch, IntersectionSink, MonotoneChainEdge},
    Edge,
};

/// Computes the intersections within, or between, sets of edges.
pub trait EdgeSetIntersector<T: GeoFloat> {
    /// Intersect all the edges of `edges` with each other.
    ///
    /// If `test_all_segments` is `false`, segments of the same edge
    /// are never tested against each other. Otherwise they are too,
    /// which is needed to detect self-intersections of an edge.
    fn compute_self_intersections<S: IntersectionSink<T>>(
        &self,
        edges: &[Edge<T>],
        sink: &mut S,
        test_all_segments: bool,
    );

    /// Intersect every edge of `edges0` with every edge of `edges1`.
    fn compute_intersections<S: IntersectionSink<T>>(
        &self,
        edges0: &[Edge<T>],
        edges1: &[Edge<T>],
        sink: &mut S,
    );
}

/// Finds intersections with an `x`-sweep over monotone chains.
///
/// Each chain is active from its smallest to its largest `x`; only
/// chains active at the same time are tested against each other.
/// Sorting the chain events is `O(n log(n))` and the scan is
/// `O(n + k)` where `k` is the number of chain pairs with
/// overlapping `x`-ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepLineIntersector;

impl<T: GeoFloat> EdgeSetIntersector<T> for SweepLineIntersector {
    fn compute_self_intersections<S: IntersectionSink<T>>(
        &self,
        edges: &[Edge<T>],
        sink: &mut S,
        test_all_segments: bool,
    ) {
        let mut sweep = Sweep::with_capacity(edges.len());
        for (idx, edge) in edges.iter().enumerate() {
            // Labelling chains by their edge skips same-edge pairs.
            let group = if test_all_segments { None } else { Some(idx) };
            sweep.add_edge(edge, group);
        }
        sweep.run(sink);
    }

    fn compute_intersections<S: IntersectionSink<T>>(
        &self,
        edges0: &[Edge<T>],
        edges1: &[Edge<T>],
        sink: &mut S,
    ) {
        let mut sweep = Sweep::with_capacity(edges0.len() + edges1.len());
        for edge in edges0 {
            sweep.add_edge(edge, Some(0));
        }
        for edge in edges1 {
            sweep.add_edge(edge, Some(1));
        }
        sweep.run(sink);
    }
}

/// Tests every pair of edges directly with
/// [`MonotoneChainEdge::compute_intersects`].
///
/// This is `O(n^2)` in the number of chains, and serves as the
/// reference to check the sweep against.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEdgeSetIntersector;

impl<T: GeoFloat> EdgeSetIntersector<T> for SimpleEdgeSetIntersector {
    fn compute_self_intersections<S: IntersectionSink<T>>(
        &self,
        edges: &[Edge<T>],
        sink: &mut S,
        test_all_segments: bool,
    ) {
        for e0 in edges {
            let mce0 = e0.monotone_chain_edge();
            for e1 in edges {
                if test_all_segments || e0.id() != e1.id() {
                    mce0.compute_intersects(&e1.monotone_chain_edge(), sink);
                }
            }
        }
    }

    fn compute_intersections<S: IntersectionSink<T>>(
        &self,
        edges0: &[Edge<T>],
        edges1: &[Edge<T>],
        sink: &mut S,
    ) {
        for e0 in edges0 {
            let mce0 = e0.monotone_chain_edge();
            for e1 in edges1 {
                mce0.compute_intersects(&e1.monotone_chain_edge(), sink);
            }
        }
    }
}

/// One monotone chain registered with the sweep.
#[derive(Debug, Clone, Copy)]
struct SweepChain<'a, T: GeoFloat> {
    mce: MonotoneChainEdge<'a, T>,
    chain: usize,
    group: Option<usize>,
}

impl<'a, T: GeoFloat> SweepChain<'a, T> {
    /// Chains with the same label are never tested against each other.
    #[inline]
    fn same_group(&self, other: &Self) -> bool {
        matches!((self.group, other.group), (Some(g0), Some(g1)) if g0 == g1)
    }
}

/// State of one sweep: the chains and their events.
struct Sweep<'a, T: GeoFloat> {
    chains: Vec<SweepChain<'a, T>>,
    events: Vec<SweepLineEvent<T>>,
}

impl<'a, T: GeoFloat> Sweep<'a, T> {
    fn with_capacity(num_edges: usize) -> Self {
        Sweep {
            chains: Vec::with_capacity(num_edges),
            events: Vec::with_capacity(2 * num_edges),
        }
    }

    /// Register all chains of `edge`, and their insert and delete
    /// events.
    fn add_edge(&mut self, edge: &'a Edge<T>, group: Option<usize>) {
        let mce = edge.monotone_chain_edge();
        for chain in 0..mce.num_chains() {
            let key = self.chains.len();
            self.chains.push(SweepChain { mce, chain, group });
            self.events.push(SweepLineEvent::insert(mce.min_x(chain), key));
            self.events.push(SweepLineEvent::delete(mce.max_x(chain), key));
        }
    }

    /// Sort the events, and link every insert event to the position
    /// of its delete event.
    fn prepare(&mut self) {
        self.events.sort();

        let mut insert_pos = vec![usize::MAX; self.chains.len()];
        for idx in 0..self.events.len() {
            let key = self.events[idx].chain_key;
            if self.events[idx].is_insert() {
                insert_pos[key] = idx;
            } else {
                let ins = insert_pos[key];
                assert!(ins < idx, "delete event sorted before its insert event");
                self.events[ins].delete_index = Some(idx);
            }
        }
    }

    fn run<S: IntersectionSink<T>>(&mut self, sink: &mut S) {
        self.prepare();
        debug!(
            "sweep: {chains} chains, {events} events",
            chains = self.chains.len(),
            events = self.events.len()
        );

        let mut scratch = ChainScratch::new();
        let mut num_overlaps = 0;
        for idx in 0..self.events.len() {
            if sink.is_done() {
                debug!("sweep: sink done after {idx} events");
                break;
            }
            let event = &self.events[idx];
            if let Some(delete_idx) = event.delete_index {
                num_overlaps +=
                    self.process_overlaps(idx + 1, delete_idx, event.chain_key, sink, &mut scratch);
            }
        }
        debug!(
            "sweep: {num_overlaps} chain overlaps, {tests} segment pairs",
            tests = scratch.leaf_tests()
        );
    }

    /// Test chain `key` against every chain inserted at an event in
    /// `start..end`; these are exactly the chains active while `key`
    /// is active that were inserted after it.
    fn process_overlaps<S: IntersectionSink<T>>(
        &self,
        start: usize,
        end: usize,
        key: usize,
        sink: &mut S,
        scratch: &mut ChainScratch<T>,
    ) -> usize {
        let chain0 = &self.chains[key];
        let mut count = 0;
        for event in &self.events[start..end] {
            if !event.is_insert() {
                continue;
            }
            let chain1 = &self.chains[event.chain_key];
            if chain0.same_group(chain1) {
                continue;
            }
            trace!(
                "sweep: overlap of chain {key} and chain {other}",
                other = event.chain_key
            );
            chain0
                .mce
                .compute_intersects_for_chain(chain0.chain, &chain1.mce, chain1.chain, sink, scratch);
            count += 1;
        }
        count
    }
}
