use std::collections::BTreeMap;

use geo::{Coordinate, GeoFloat, MultiLineString};
use log::debug;

use super::edges_from_lines;
use crate::{
    sweep::{EdgeSetIntersector, SweepLineIntersector},
    Edge, SegmentIntersector, SegmentIntersectorOptions, SweepPoint, TopologyError,
};

/// Whether the lines of `mls` only intersect at their boundary.
///
/// See [`non_simple_location`].
pub fn is_simple<T: GeoFloat>(mls: &MultiLineString<T>) -> Result<bool, TopologyError> {
    Ok(non_simple_location(mls)?.is_none())
}

/// The first point at which `mls` fails to be simple, if any.
///
/// Linework is simple if its lines intersect themselves and each
/// other only at end points, and no closed line is touched at its
/// end point by another line. A line's own closing vertex is fine.
pub fn non_simple_location<T: GeoFloat>(
    mls: &MultiLineString<T>,
) -> Result<Option<Coordinate<T>>, TopologyError> {
    let edges = edges_from_lines(mls)?;

    let mut si = SegmentIntersector::new(SegmentIntersectorOptions {
        include_proper: true,
        ..Default::default()
    });
    SweepLineIntersector.compute_self_intersections(&edges, &mut si, true);
    si.log_summary();

    if !si.has_intersection() {
        return Ok(None);
    }
    if let Some(pt) = si.proper_intersection_point() {
        debug!("not simple: proper intersection at {pt:?}");
        return Ok(Some(pt));
    }
    if let Some(pt) = non_endpoint_intersection(&edges) {
        debug!("not simple: intersection at interior point {pt:?}");
        return Ok(Some(pt));
    }
    if let Some(pt) = closed_endpoint_intersection(&edges) {
        debug!("not simple: closed line touched at {pt:?}");
        return Ok(Some(pt));
    }
    Ok(None)
}

/// The first recorded intersection that is not an end point of its
/// edge.
fn non_endpoint_intersection<T: GeoFloat>(edges: &[Edge<T>]) -> Option<Coordinate<T>> {
    edges.iter().find_map(|edge| {
        let max_segment_index = edge.max_segment_index();
        edge.intersections()
            .iter()
            .find(|ei| !ei.is_endpoint(max_segment_index))
            .map(|ei| ei.coord())
    })
}

#[derive(Debug, Default, Clone, Copy)]
struct EndpointInfo {
    is_closed: bool,
    degree: usize,
}

/// An end point of a closed edge that is also the end point of some
/// other edge.
fn closed_endpoint_intersection<T: GeoFloat>(edges: &[Edge<T>]) -> Option<Coordinate<T>> {
    let mut endpoints: BTreeMap<SweepPoint<T>, EndpointInfo> = BTreeMap::new();
    for edge in edges {
        let is_closed = edge.is_closed();
        let coords = edge.coords();
        for &pt in &[coords[0], coords[coords.len() - 1]] {
            let info = endpoints.entry(pt.into()).or_default();
            info.degree += 1;
            info.is_closed |= is_closed;
        }
    }
    endpoints
        .into_iter()
        .find(|(_, info)| info.is_closed && info.degree != 2)
        .map(|(pt, _)| pt.coord())
}
