use geo::{Coordinate, GeoFloat};
use log::{debug, trace};

use crate::{
    intersector::{self, SegmentIntersection},
    Edge, IntersectionSink,
};

/// Switches controlling what a [`SegmentIntersector`] records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentIntersectorOptions {
    /// Also add proper intersections to the edges' intersection
    /// lists. Improper intersections are always added.
    pub include_proper: bool,
    /// Clear the isolated flag of every edge touched by an
    /// intersection.
    pub record_isolated: bool,
    /// Report [`IntersectionSink::is_done`] once a proper
    /// intersection has been found.
    pub done_when_proper: bool,
}

/// Classifies the segment intersections of one topological query.
///
/// Fed every candidate segment pair by an edge set intersector. Each
/// intersection is classified as:
///
/// 1. trivial: the shared vertex of two adjacent segments of one
/// edge (including the closing vertex of a closed edge). Ignored.
///
/// 1. proper: a single point interior to both segments.
///
/// 1. proper interior: a proper intersection not located at a known
/// boundary node of either input.
///
/// Non-trivial intersections are recorded on the edges and summarized
/// in the flags read back after the query.
#[derive(Debug, Clone)]
pub struct SegmentIntersector<T: GeoFloat> {
    options: SegmentIntersectorOptions,
    boundary_nodes: Option<[Vec<Coordinate<T>>; 2]>,

    has_intersection: bool,
    has_proper: bool,
    has_proper_interior: bool,
    proper_intersection_point: Option<Coordinate<T>>,
    is_done: bool,

    num_tests: usize,
    num_intersections: usize,
}

impl<T: GeoFloat> SegmentIntersector<T> {
    pub fn new(options: SegmentIntersectorOptions) -> Self {
        SegmentIntersector {
            options,
            boundary_nodes: None,
            has_intersection: false,
            has_proper: false,
            has_proper_interior: false,
            proper_intersection_point: None,
            is_done: false,
            num_tests: 0,
            num_intersections: 0,
        }
    }

    /// Use the boundary nodes of the two input edge sets to tell
    /// proper interior intersections from proper intersections at
    /// the boundary. Without boundary nodes, every proper
    /// intersection is interior.
    pub fn with_boundary_nodes(mut self, nodes0: Vec<Coordinate<T>>, nodes1: Vec<Coordinate<T>>) -> Self {
        self.boundary_nodes = Some([nodes0, nodes1]);
        self
    }

    #[inline]
    pub fn options(&self) -> &SegmentIntersectorOptions {
        &self.options
    }

    /// Whether a non-trivial intersection was found.
    pub fn has_intersection(&self) -> bool {
        self.has_intersection
    }

    /// Whether a proper intersection was found.
    pub fn has_proper_intersection(&self) -> bool {
        self.has_proper
    }

    /// Whether a proper intersection was found away from the
    /// boundary nodes.
    pub fn has_proper_interior_intersection(&self) -> bool {
        self.has_proper_interior
    }

    /// The first proper intersection found.
    pub fn proper_intersection_point(&self) -> Option<Coordinate<T>> {
        self.proper_intersection_point
    }

    /// Number of segment pairs tested.
    pub fn num_tests(&self) -> usize {
        self.num_tests
    }

    /// Number of tested pairs that intersect, trivially or not.
    pub fn num_intersections(&self) -> usize {
        self.num_intersections
    }

    /// Whether the intersection is just the vertex shared by two
    /// consecutive segments of the same edge.
    fn is_trivial_intersection(
        &self,
        isect: &SegmentIntersection<T>,
        e0: &Edge<T>,
        seg_index0: usize,
        e1: &Edge<T>,
        seg_index1: usize,
    ) -> bool {
        if e0.id() != e1.id() || isect.count() != 1 {
            return false;
        }
        if seg_index0.abs_diff(seg_index1) == 1 {
            return true;
        }
        if e0.is_closed() {
            let last_segment = e0.num_points() - 2;
            if (seg_index0 == 0 && seg_index1 == last_segment)
                || (seg_index1 == 0 && seg_index0 == last_segment)
            {
                return true;
            }
        }
        false
    }

    fn is_boundary_point(&self, isect: &SegmentIntersection<T>) -> bool {
        match &self.boundary_nodes {
            Some(nodes) => isect
                .points()
                .any(|pt| nodes.iter().flatten().any(|node| *node == pt)),
            None => false,
        }
    }

    /// Log a summary of the flags.
    pub fn log_summary(&self) {
        debug!(
            "segment intersector: {tests} tests, {isects} intersections \
             (any = {any}, proper = {proper}, proper interior = {interior})",
            tests = self.num_tests,
            isects = self.num_intersections,
            any = self.has_intersection,
            proper = self.has_proper,
            interior = self.has_proper_interior,
        );
    }
}

impl<T: GeoFloat> IntersectionSink<T> for SegmentIntersector<T> {
    fn add_intersections(&mut self, e0: &Edge<T>, seg_index0: usize, e1: &Edge<T>, seg_index1: usize) {
        // A segment does not intersect itself.
        if e0.id() == e1.id() && seg_index0 == seg_index1 {
            return;
        }
        self.num_tests += 1;

        let (p00, p01) = (e0.coord(seg_index0), e0.coord(seg_index0 + 1));
        let (p10, p11) = (e1.coord(seg_index1), e1.coord(seg_index1 + 1));
        let isect = match intersector::compute(p00, p01, p10, p11) {
            Some(isect) => isect,
            None => return,
        };
        trace!(
            "intersection: {e0:?}[{seg_index0}] x {e1:?}[{seg_index1}] = {isect:?}",
            e0 = e0.id(),
            e1 = e1.id(),
        );

        if self.options.record_isolated {
            e0.set_isolated(false);
            e1.set_isolated(false);
        }
        self.num_intersections += 1;

        if self.is_trivial_intersection(&isect, e0, seg_index0, e1, seg_index1) {
            return;
        }
        self.has_intersection = true;

        let is_proper = isect.is_proper();
        if self.options.include_proper || !is_proper {
            e0.add_intersections(&isect, seg_index0);
            e1.add_intersections(&isect, seg_index1);
        }

        if is_proper {
            if self.proper_intersection_point.is_none() {
                self.proper_intersection_point = Some(isect.point(0));
            }
            self.has_proper = true;
            if self.options.done_when_proper {
                self.is_done = true;
            }
            if !self.is_boundary_point(&isect) {
                self.has_proper_interior = true;
            }
        }
    }

    fn is_done(&self) -> bool {
        self.is_done
    }
}
