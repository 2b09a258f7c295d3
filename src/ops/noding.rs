use geo::GeoFloat;
use log::debug;

use crate::{
    graph::{EdgeGraph, EdgeGraphBuilder},
    sweep::{EdgeSetIntersector, SweepLineIntersector},
    Edge, SegmentIntersector, SegmentIntersectorOptions,
};

/// Split `edges` at all their mutual intersections.
///
/// With `test_all_segments`, the self-intersections of each edge are
/// noded too. The intersections found are left recorded on the input
/// edges. The returned edges only meet at their end points, up to
/// collinear overlaps which yield identical pieces.
pub fn node_edges<T: GeoFloat>(edges: &[Edge<T>], test_all_segments: bool) -> Vec<Edge<T>> {
    let mut si = SegmentIntersector::new(SegmentIntersectorOptions {
        include_proper: true,
        ..Default::default()
    });
    SweepLineIntersector.compute_self_intersections(edges, &mut si, test_all_segments);
    si.log_summary();

    let noded: Vec<_> = edges.iter().flat_map(|e| e.split()).collect();
    debug!(
        "noding: {input} edges split into {output}",
        input = edges.len(),
        output = noded.len()
    );
    noded
}

/// Node `edges`, including their self-intersections, and build the
/// graph of the arrangement.
pub fn noded_graph<T: GeoFloat>(edges: &[Edge<T>]) -> EdgeGraph<T> {
    let noded = node_edges(edges, true);
    let mut builder = EdgeGraphBuilder::new();
    builder.add_edges(&noded);
    builder.build()
}
