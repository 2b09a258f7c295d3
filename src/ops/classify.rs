use geo::{Coordinate, GeoFloat, MultiLineString};

use super::{boundary_nodes, edges_from_lines};
use crate::{
    sweep::{EdgeSetIntersector, SweepLineIntersector},
    Edge, SegmentIntersector, SegmentIntersectorOptions, TopologyError,
};

/// How the linework of two inputs intersects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSummary<T: GeoFloat> {
    pub has_intersection: bool,
    pub has_proper_intersection: bool,
    /// A proper intersection away from the boundary of both inputs.
    pub has_proper_interior_intersection: bool,
    pub proper_intersection_point: Option<Coordinate<T>>,
    /// Number of lines of each input not intersected by the other
    /// input.
    pub isolated_lines: [usize; 2],
}

/// Intersect the lines of `a` with the lines of `b`.
///
/// The boundaries are computed with the Mod-2 rule; an intersection at
/// a boundary point of either input is not interior. Intersections
/// among the lines of one input are ignored.
pub fn classify<T: GeoFloat>(
    a: &MultiLineString<T>,
    b: &MultiLineString<T>,
) -> Result<IntersectionSummary<T>, TopologyError> {
    let edges0 = edges_from_lines(a)?;
    let edges1 = edges_from_lines(b)?;

    let mut si = SegmentIntersector::new(SegmentIntersectorOptions {
        record_isolated: true,
        ..Default::default()
    })
    .with_boundary_nodes(boundary_nodes(&edges0), boundary_nodes(&edges1));
    SweepLineIntersector.compute_intersections(&edges0, &edges1, &mut si);
    si.log_summary();

    Ok(IntersectionSummary {
        has_intersection: si.has_intersection(),
        has_proper_intersection: si.has_proper_intersection(),
        has_proper_interior_intersection: si.has_proper_interior_intersection(),
        proper_intersection_point: si.proper_intersection_point(),
        isolated_lines: [count_isolated(&edges0), count_isolated(&edges1)],
    })
}

fn count_isolated<T: GeoFloat>(edges: &[Edge<T>]) -> usize {
    edges.iter().filter(|e| e.is_isolated()).count()
}

/// Whether `a` and `b` cross at a point interior to both.
pub fn has_proper_interior_intersection<T: GeoFloat>(
    a: &MultiLineString<T>,
    b: &MultiLineString<T>,
) -> Result<bool, TopologyError> {
    Ok(classify(a, b)?.has_proper_interior_intersection)
}
