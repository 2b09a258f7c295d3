use std::{cmp::Ordering, collections::BTreeSet};

use geo::{Coordinate, GeoFloat};

/// An intersection point recorded on an edge.
///
/// Located by the index of the segment it lies on, and its distance
/// along that segment (see [`edge_distance`]). Points that coincide
/// with a vertex are always stored at the segment starting at that
/// vertex, with distance `0`.
///
/// [`edge_distance`]: crate::intersector::edge_distance
#[derive(Debug, Clone, Copy)]
pub struct EdgeIntersection<T: GeoFloat> {
    coord: Coordinate<T>,
    segment_index: usize,
    dist: T,
}

impl<T: GeoFloat> EdgeIntersection<T> {
    pub fn new(coord: Coordinate<T>, segment_index: usize, dist: T) -> Self {
        EdgeIntersection {
            coord,
            segment_index,
            dist,
        }
    }

    #[inline]
    pub fn coord(&self) -> Coordinate<T> {
        self.coord
    }

    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    #[inline]
    pub fn dist(&self) -> T {
        self.dist
    }

    /// Whether this is the first or last point of an edge whose last
    /// coordinate index is `max_segment_index`.
    pub fn is_endpoint(&self, max_segment_index: usize) -> bool {
        (self.segment_index == 0 && self.dist == T::zero())
            || self.segment_index == max_segment_index
    }
}

/// Equality by location along the edge. Consistent with `Ord`.
impl<T: GeoFloat> PartialEq for EdgeIntersection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: GeoFloat> Eq for EdgeIntersection<T> {}

impl<T: GeoFloat> PartialOrd for EdgeIntersection<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order by segment index, then by distance along the segment.
impl<T: GeoFloat> Ord for EdgeIntersection<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segment_index
            .cmp(&other.segment_index)
            .then_with(|| {
                self.dist
                    .partial_cmp(&other.dist)
                    .expect("edge intersection distances must be orderable")
            })
    }
}

/// The intersections found on one edge, sorted along the edge.
///
/// Walking the list once from the start yields the points at which
/// the edge must be split.
#[derive(Debug, Clone)]
pub struct EdgeIntersectionList<T: GeoFloat> {
    nodes: BTreeSet<EdgeIntersection<T>>,
}

impl<T: GeoFloat> Default for EdgeIntersectionList<T> {
    fn default() -> Self {
        EdgeIntersectionList {
            nodes: BTreeSet::new(),
        }
    }
}

impl<T: GeoFloat> EdgeIntersectionList<T> {
    /// Add an intersection, unless one already exists at the same
    /// location. Returns the stored intersection.
    pub fn add(&mut self, coord: Coordinate<T>, segment_index: usize, dist: T) -> EdgeIntersection<T> {
        let ei = EdgeIntersection::new(coord, segment_index, dist);
        if let Some(existing) = self.nodes.get(&ei) {
            return *existing;
        }
        self.nodes.insert(ei);
        ei
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeIntersection<T>> + '_ {
        self.nodes.iter()
    }

    /// Whether any recorded intersection lies at `pt`.
    pub fn contains(&self, pt: Coordinate<T>) -> bool {
        self.nodes.iter().any(|ei| ei.coord == pt)
    }

    /// Add both end points of the edge `coords` as intersections.
    pub fn add_endpoints(&mut self, coords: &[Coordinate<T>]) {
        let max_segment_index = coords.len() - 1;
        self.add(coords[0], 0, T::zero());
        self.add(coords[max_segment_index], max_segment_index, T::zero());
    }

    /// Coordinates of the pieces obtained by splitting `coords` at
    /// every pair of consecutive intersections.
    ///
    /// The list should contain the end points (see
    /// [`Self::add_endpoints`]) if the whole edge is to be covered.
    pub fn split_coords(&self, coords: &[Coordinate<T>]) -> Vec<Vec<Coordinate<T>>> {
        let mut iter = self.nodes.iter();
        let mut prev = match iter.next() {
            Some(ei) => ei,
            None => return vec![],
        };
        iter.map(|ei| {
            let piece = split_piece(coords, prev, ei);
            prev = ei;
            piece
        })
        .collect()
    }
}

/// Coordinates of `coords` from `ei0` to `ei1`.
fn split_piece<T: GeoFloat>(
    coords: &[Coordinate<T>],
    ei0: &EdgeIntersection<T>,
    ei1: &EdgeIntersection<T>,
) -> Vec<Coordinate<T>> {
    // The last intersection is not needed if it coincides with the
    // start of its segment, which is already copied.
    let last_seg_start = coords[ei1.segment_index];
    let use_last = ei1.dist > T::zero() || ei1.coord != last_seg_start;

    let mut pts = Vec::with_capacity(ei1.segment_index - ei0.segment_index + 2);
    pts.push(ei0.coord);
    pts.extend_from_slice(&coords[ei0.segment_index + 1..=ei1.segment_index]);
    if use_last {
        pts.push(ei1.coord);
    }
    pts
}
