use std::{
    cell::{Cell, OnceCell, Ref, RefCell},
    convert::TryFrom,
    sync::atomic::{AtomicUsize, Ordering},
};

use geo::{Coordinate, GeoFloat, LineString};
use itertools::Itertools;
use log::trace;

mod intersections;
pub use intersections::{EdgeIntersection, EdgeIntersectionList};

use crate::{
    envelope::Envelope, intersector::SegmentIntersection, monotone::chain_start_indices,
    MonotoneChainEdge, TopologyError,
};

static NEXT_EDGE_ID: AtomicUsize = AtomicUsize::new(0);

/// Opaque identity of an [`Edge`].
///
/// Ids are unique for the lifetime of the process. Two edges with
/// identical coordinates are still different edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    fn next() -> Self {
        EdgeId(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A linear edge taking part in one topological computation.
///
/// Owns its coordinates, the (lazily built) monotone chain
/// decomposition, and the list of intersections found on it. The
/// intersection list and the isolated flag are mutated through a
/// shared reference while the intersectors hold references to many
/// edges at once, hence the interior mutability. An edge is not meant
/// to be shared across threads.
#[derive(Debug)]
pub struct Edge<T: GeoFloat> {
    id: EdgeId,
    coords: Vec<Coordinate<T>>,
    envelope: Envelope<T>,
    isolated: Cell<bool>,
    chain_starts: OnceCell<Vec<usize>>,
    intersections: RefCell<EdgeIntersectionList<T>>,
}

impl<T: GeoFloat> Edge<T> {
    /// Create an edge from finite coordinates.
    ///
    /// Consecutive repeated coordinates are collapsed, so every
    /// segment of the edge has positive length. At least two distinct
    /// coordinates must remain.
    pub fn new(coords: Vec<Coordinate<T>>) -> Result<Self, TopologyError> {
        if coords.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(TopologyError::NonFiniteCoordinate);
        }
        let num_input = coords.len();
        let coords: Vec<_> = coords.into_iter().dedup().collect();
        if coords.len() < 2 {
            return Err(TopologyError::TooFewPoints {
                found: coords.len(),
            });
        }
        if coords.len() < num_input {
            trace!("dropped {n} repeated coordinates", n = num_input - coords.len());
        }
        Ok(Self::from_valid_coords(coords))
    }

    /// Create an edge from coordinates already known to be valid.
    fn from_valid_coords(coords: Vec<Coordinate<T>>) -> Self {
        debug_assert!(coords.len() >= 2);
        let envelope = Envelope::from_coords(coords.iter().copied())
            .expect("edge has at least two coordinates");
        Edge {
            id: EdgeId::next(),
            coords,
            envelope,
            isolated: Cell::new(true),
            chain_starts: OnceCell::new(),
            intersections: RefCell::new(EdgeIntersectionList::default()),
        }
    }

    #[inline]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    #[inline]
    pub fn coords(&self) -> &[Coordinate<T>] {
        &self.coords
    }

    #[inline]
    pub fn coord(&self, idx: usize) -> Coordinate<T> {
        self.coords[idx]
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// Index of the last coordinate.
    #[inline]
    pub fn max_segment_index(&self) -> usize {
        self.coords.len() - 1
    }

    pub fn is_closed(&self) -> bool {
        self.coords[0] == self.coords[self.coords.len() - 1]
    }

    #[inline]
    pub fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }

    /// Whether no intersection has touched this edge yet.
    ///
    /// Only maintained by intersectors that record isolation.
    pub fn is_isolated(&self) -> bool {
        self.isolated.get()
    }

    pub fn set_isolated(&self, isolated: bool) {
        self.isolated.set(isolated);
    }

    /// The monotone chain view of this edge.
    ///
    /// The chain decomposition is computed on first use and reused by
    /// every later query.
    pub fn monotone_chain_edge(&self) -> MonotoneChainEdge<'_, T> {
        let starts = self
            .chain_starts
            .get_or_init(|| chain_start_indices(&self.coords));
        MonotoneChainEdge::new(self, starts)
    }

    /// Borrow the intersections recorded so far.
    pub fn intersections(&self) -> Ref<'_, EdgeIntersectionList<T>> {
        self.intersections.borrow()
    }

    /// Record every point of `isect`, found on the segment starting
    /// at `segment_index`.
    pub fn add_intersections(&self, isect: &SegmentIntersection<T>, segment_index: usize) {
        for idx in 0..isect.count() {
            self.add_intersection(isect, segment_index, idx);
        }
    }

    /// Record the `idx`-th point of `isect`.
    ///
    /// A point at the end vertex of the segment is stored against the
    /// next segment, so every vertex has one canonical location.
    pub fn add_intersection(
        &self,
        isect: &SegmentIntersection<T>,
        segment_index: usize,
        idx: usize,
    ) {
        let pt = isect.point(idx);
        let mut normalized_index = segment_index;
        let mut dist = isect.edge_distance(
            self.coords[segment_index],
            self.coords[segment_index + 1],
            idx,
        );

        let next_index = segment_index + 1;
        if next_index < self.coords.len() && pt == self.coords[next_index] {
            normalized_index = next_index;
            dist = T::zero();
        }
        trace!(
            "edge {id:?}: intersection {pt:?} at segment {normalized_index} (dist = {dist:?})",
            id = self.id,
        );
        self.intersections
            .borrow_mut()
            .add(pt, normalized_index, dist);
    }

    /// Split this edge at all recorded intersections.
    ///
    /// The end points are added to the intersection list first, so
    /// the returned pieces cover the whole edge.
    pub fn split(&self) -> Vec<Edge<T>> {
        let mut list = self.intersections.borrow_mut();
        list.add_endpoints(&self.coords);
        list.split_coords(&self.coords)
            .into_iter()
            .map(Edge::from_valid_coords)
            .collect()
    }

    pub fn to_line_string(&self) -> LineString<T> {
        LineString(self.coords.clone())
    }
}

impl<T: GeoFloat> TryFrom<LineString<T>> for Edge<T> {
    type Error = TopologyError;

    fn try_from(ls: LineString<T>) -> Result<Self, Self::Error> {
        Edge::new(ls.0)
    }
}
