//! A planar topology kernel: finds and classifies the intersections of
//! linework, and represents the resulting arrangement as a graph.
//!
//! 1. [Monotone Chains](#monotone-chains)
//! 1. [Segment Intersection Classification](#segment-intersection-classification)
//! 1. [Half-Edge Graph](#half-edge-graph)
//!
//! # Monotone Chains
//!
//! Each input line is an [`Edge`], which is decomposed into monotone
//! chains: maximal runs of segments heading into one quadrant. The
//! envelope of any part of a chain is the envelope of its two end
//! points, so two chains are intersected by recursive bisection,
//! pruning pairs of sub-chains with disjoint envelopes (see
//! [`MonotoneChainEdge`]). The [`sweep::SweepLineIntersector`] runs
//! an `x`-sweep over the chains of a set of edges, so only chains
//! with overlapping `x`-ranges are ever compared.
//!
//! # Segment Intersection Classification
//!
//! The candidate segment pairs are handed to an [`IntersectionSink`],
//! typically a [`SegmentIntersector`]. It uses the robust predicate
//! of [`geo`] and classifies every intersection as trivial (the
//! shared vertex of adjacent segments), proper (interior to both
//! segments) or proper interior (a proper intersection away from
//! known boundary nodes). Non-trivial intersections are recorded on
//! the edges, which can then be split at them.
//!
//! ## Usage
//!
//! ```rust
//! use geo::Coordinate;
//! use geo_topograph::{
//!     sweep::{EdgeSetIntersector, SweepLineIntersector},
//!     Edge, SegmentIntersector, SegmentIntersectorOptions,
//! };
//!
//! let c = |x: f64, y: f64| Coordinate { x, y };
//! let edges = vec![
//!     Edge::new(vec![c(0., 0.), c(10., 10.)]).unwrap(),
//!     Edge::new(vec![c(0., 10.), c(10., 0.)]).unwrap(),
//! ];
//! let mut si = SegmentIntersector::new(SegmentIntersectorOptions::default());
//! SweepLineIntersector.compute_self_intersections(&edges, &mut si, false);
//!
//! assert!(si.has_proper_intersection());
//! assert_eq!(si.proper_intersection_point(), Some(Coordinate { x: 5., y: 5. }));
//! ```
//!
//! # Half-Edge Graph
//!
//! The [`graph::EdgeGraph`] stores noded linework as pairs of
//! half-edges, with the half-edges around each vertex sorted by
//! angle. The [`ops`] module ties the pieces together: boundary
//! nodes, noding, simplicity and intersection classification.
mod error;
pub use error::TopologyError;

mod events;
pub use events::SweepPoint;

pub mod envelope;
pub mod intersector;

mod edge;
pub use edge::{Edge, EdgeId, EdgeIntersection, EdgeIntersectionList};

pub mod monotone;
pub use monotone::{chain_start_indices, ChainScratch, IntersectionSink, MonotoneChainEdge};

mod segment_intersector;
pub use segment_intersector::{SegmentIntersector, SegmentIntersectorOptions};

pub mod sweep;

pub mod graph;

pub mod ops;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
