//! Topological operations built on the intersection kernel.
//!
//! Each operation turns its input into [`Edge`]s, runs one of the
//! edge set intersectors with a [`SegmentIntersector`], and reads
//! back the flags and the per-edge intersection lists.
//!
//! [`SegmentIntersector`]: crate::SegmentIntersector
use geo::{GeoFloat, LineString, MultiLineString};
use itertools::Itertools;
use log::debug;

use crate::{Edge, TopologyError};

mod boundary;
pub use boundary::boundary_nodes;

mod noding;
pub use noding::{node_edges, noded_graph};

mod simple;
pub use simple::{is_simple, non_simple_location};

mod classify;
pub use classify::{classify, has_proper_interior_intersection, IntersectionSummary};

/// Convert a line string into an edge.
///
/// Consecutive repeated coordinates are removed first. Returns
/// `Ok(None)` if fewer than two distinct coordinates remain.
pub fn edge_from_line<T: GeoFloat>(ls: &LineString<T>) -> Result<Option<Edge<T>>, TopologyError> {
    let coords: Vec<_> = ls.0.iter().copied().dedup().collect();
    if coords.len() < 2 {
        debug!("skipping line with {n} distinct coordinates", n = coords.len());
        return Ok(None);
    }
    Edge::new(coords).map(Some)
}

/// Convert every line of `mls` into an edge, skipping degenerate
/// lines.
pub fn edges_from_lines<T: GeoFloat>(mls: &MultiLineString<T>) -> Result<Vec<Edge<T>>, TopologyError> {
    let mut edges = Vec::with_capacity(mls.0.len());
    for ls in &mls.0 {
        if let Some(edge) = edge_from_line(ls)? {
            edges.push(edge);
        }
    }
    Ok(edges)
}
