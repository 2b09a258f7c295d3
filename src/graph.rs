//! Planar half-edge graph.
//!
//! An [`EdgeGraph`] stores the arrangement of a set of noded edges:
//! each undirected edge is a pair of oppositely directed half-edges,
//! and the half-edges leaving a vertex form a ring sorted
//! counter-clockwise by angle. The half-edges live in an arena and
//! refer to each other by [`HalfEdgeId`].
//!
//! ```rust
//! use geo::Coordinate;
//! use geo_topograph::graph::EdgeGraph;
//!
//! let mut graph = EdgeGraph::new();
//! let origin = Coordinate { x: 0., y: 0. };
//! let e = graph.add_edge(origin, Coordinate { x: 1., y: 1. }).unwrap();
//! graph.add_edge(origin, Coordinate { x: 1., y: 0. });
//! graph.add_edge(origin, Coordinate { x: 0., y: 1. });
//! assert_eq!(graph.degree(e), 3);
//! ```
use std::collections::BTreeMap;

use geo::{Coordinate, GeoFloat};
use itertools::Itertools;
use log::trace;
use slab::Slab;

use crate::SweepPoint;

mod half_edge;
use half_edge::HalfEdge;
pub use half_edge::HalfEdgeId;

mod builder;
pub use builder::EdgeGraphBuilder;

/// A graph of half-edges with angularly sorted vertex rings.
#[derive(Debug, Clone)]
pub struct EdgeGraph<T: GeoFloat> {
    edges: Slab<HalfEdge<T>>,
    vertex_map: BTreeMap<SweepPoint<T>, HalfEdgeId>,
}

impl<T: GeoFloat> Default for EdgeGraph<T> {
    fn default() -> Self {
        EdgeGraph {
            edges: Slab::new(),
            vertex_map: BTreeMap::new(),
        }
    }
}

impl<T: GeoFloat> EdgeGraph<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `orig -> dest` can be added: both end points finite
    /// and distinct.
    pub fn is_valid_edge(orig: Coordinate<T>, dest: Coordinate<T>) -> bool {
        let finite = |c: Coordinate<T>| c.x.is_finite() && c.y.is_finite();
        finite(orig) && finite(dest) && orig != dest
    }

    /// Add the edge `orig -> dest` and return its half-edge leaving
    /// `orig`.
    ///
    /// If the edge is already present, the existing half-edge is
    /// returned and the graph is unchanged. Zero-length and
    /// non-finite edges are not added and yield `None`.
    pub fn add_edge(&mut self, orig: Coordinate<T>, dest: Coordinate<T>) -> Option<HalfEdgeId> {
        if !Self::is_valid_edge(orig, dest) {
            trace!("graph: skipping degenerate edge {orig:?} -> {dest:?}");
            return None;
        }
        let e_adj = self.vertex_map.get(&SweepPoint::from(orig)).copied();
        if let Some(e_same) = e_adj.and_then(|e| self.find(e, dest)) {
            return Some(e_same);
        }

        let e = self.create_pair(orig, dest);
        self.splice(orig, e, e_adj);
        let e_sym = self.sym(e);
        let e_adj_dest = self.vertex_map.get(&SweepPoint::from(dest)).copied();
        self.splice(dest, e_sym, e_adj_dest);
        Some(e)
    }

    /// Splice `e` into the ring of `e_adj`, or make it the
    /// representative of `vertex` if the vertex is new.
    fn splice(&mut self, vertex: Coordinate<T>, e: HalfEdgeId, e_adj: Option<HalfEdgeId>) {
        match e_adj {
            Some(e_adj) => self.insert(e_adj, e),
            None => {
                self.vertex_map.insert(vertex.into(), e);
            }
        }
    }

    /// The half-edge `orig -> dest`, if present.
    pub fn find_edge(&self, orig: Coordinate<T>, dest: Coordinate<T>) -> Option<HalfEdgeId> {
        if !orig.x.is_finite() || !orig.y.is_finite() {
            return None;
        }
        let e = *self.vertex_map.get(&SweepPoint::from(orig))?;
        self.find(e, dest)
    }

    /// One representative half-edge leaving every vertex, in
    /// lexicographic order of the vertices.
    pub fn vertex_edges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.vertex_map.values().copied()
    }

    /// Every half-edge of the graph.
    pub fn half_edges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.half_edge_ids()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_map.len()
    }

    /// Number of half-edges; twice the number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Render the origin ring of `e` for log output.
    pub fn ring_debug(&self, e: HalfEdgeId) -> String {
        let orig = self.orig(e);
        let dests = self
            .origin_ring(e)
            .map(|r| {
                let d = self.dest(r);
                format!("({:?} {:?})", d.x, d.y)
            })
            .join(", ");
        format!("({:?} {:?}): [{}]", orig.x, orig.y, dests)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn c(x: f64, y: f64) -> Coordinate<f64> {
        Coordinate { x, y }
    }

    /// Number of descents in the cyclic angular sequence of the ring.
    fn ring_descents(graph: &EdgeGraph<f64>, e: HalfEdgeId) -> usize {
        let ring: Vec<_> = graph.origin_ring(e).collect();
        (0..ring.len())
            .filter(|&i| {
                let (a, b) = (ring[i], ring[(i + 1) % ring.len()]);
                graph.compare_angular_direction(a, b) != Ordering::Less
            })
            .count()
    }

    #[test]
    fn test_ring_is_angularly_sorted() {
        let mut graph = EdgeGraph::new();
        let o = c(0., 0.);
        let e0 = graph.add_edge(o, c(1., 1.)).unwrap();
        let e1 = graph.add_edge(o, c(1., 0.)).unwrap();
        let e2 = graph.add_edge(o, c(0., 1.)).unwrap();

        for &e in &[e0, e1, e2] {
            assert_eq!(graph.degree(e), 3);
            assert_eq!(ring_descents(&graph, e), 1);
        }

        let dests: Vec<_> = graph.origin_ring(e1).map(|e| graph.dest(e)).collect();
        assert_eq!(dests, vec![c(1., 0.), c(1., 1.), c(0., 1.)]);
        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.len(), 6);
    }

    #[test]
    fn test_ring_all_quadrants() {
        let mut graph = EdgeGraph::new();
        let o = c(0., 0.);
        let dests = [
            c(-1., -2.),
            c(3., 1.),
            c(0., -1.),
            c(-2., 1.),
            c(1., 3.),
            c(-1., 0.),
            c(2., -1.),
            c(0., 1.),
        ];
        let mut first = None;
        for &d in &dests {
            let e = graph.add_edge(o, d).unwrap();
            first.get_or_insert(e);
            assert_eq!(ring_descents(&graph, e), 1);
        }
        let e = first.unwrap();
        assert_eq!(graph.degree(e), dests.len());
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut graph = EdgeGraph::new();
        let e = graph.add_edge(c(0., 0.), c(1., 0.)).unwrap();
        graph.add_edge(c(0., 0.), c(0., 1.));

        let again = graph.add_edge(c(0., 0.), c(1., 0.)).unwrap();
        assert_eq!(e, again);
        assert_eq!(graph.degree(e), 2);
        assert_eq!(graph.len(), 4);

        // The reverse direction is the other half of the same edge.
        let rev = graph.add_edge(c(1., 0.), c(0., 0.)).unwrap();
        assert_eq!(rev, graph.sym(e));
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn test_degenerate_edges_are_skipped() {
        let mut graph = EdgeGraph::new();
        assert_eq!(graph.add_edge(c(1., 1.), c(1., 1.)), None);
        assert_eq!(graph.add_edge(c(1., 1.), c(f64::NAN, 1.)), None);
        assert!(graph.is_empty());
        assert_eq!(graph.find_edge(c(f64::NAN, 0.), c(1., 1.)), None);
    }

    #[test]
    fn test_find_edge() {
        let mut graph = EdgeGraph::new();
        let e = graph.add_edge(c(0., 0.), c(2., 0.)).unwrap();
        graph.add_edge(c(2., 0.), c(2., 2.));

        assert_eq!(graph.find_edge(c(0., 0.), c(2., 0.)), Some(e));
        assert_eq!(graph.find_edge(c(2., 0.), c(0., 0.)), Some(graph.sym(e)));
        assert_eq!(graph.find_edge(c(0., 0.), c(2., 2.)), None);
        assert_eq!(graph.find_edge(c(5., 5.), c(2., 2.)), None);
    }

    #[test]
    fn test_prev_node_skips_degree_two_vertices() {
        let mut graph = EdgeGraph::new();
        // A path a - b - c - d with a branch d - e, d - f.
        let pts = [c(0., 0.), c(1., 0.), c(2., 0.), c(3., 0.)];
        for w in pts.windows(2) {
            graph.add_edge(w[0], w[1]);
        }
        graph.add_edge(c(3., 0.), c(4., 1.));
        graph.add_edge(c(3., 0.), c(4., -1.));

        // Leaving c backwards towards b, then a.
        let e = graph.find_edge(c(2., 0.), c(3., 0.)).unwrap();
        let node = graph.prev_node(e).unwrap();
        assert_eq!(graph.orig(node), c(0., 0.));
        assert_eq!(graph.degree(node), 1);

        // A vertex of degree 3 is its own node.
        let e = graph.find_edge(c(3., 0.), c(4., 1.)).unwrap();
        assert_eq!(graph.prev_node(e), Some(e));
    }

    #[test]
    fn test_prev_node_on_ring() {
        let mut graph = EdgeGraph::new();
        let ring = [c(0., 0.), c(1., 0.), c(1., 1.), c(0., 0.)];
        for w in ring.windows(2) {
            graph.add_edge(w[0], w[1]);
        }
        let e = graph.find_edge(c(0., 0.), c(1., 0.)).unwrap();
        assert_eq!(graph.prev_node(e), None);
    }

    #[test]
    fn test_ring_debug() {
        let mut graph = EdgeGraph::new();
        let e = graph.add_edge(c(0., 0.), c(1., 0.)).unwrap();
        graph.add_edge(c(0., 0.), c(0., 1.));
        assert_eq!(graph.ring_debug(e), "(0.0 0.0): [(1.0 0.0), (0.0 1.0)]");
    }
}
