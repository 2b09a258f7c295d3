use std::{cmp::Ordering, iter::from_fn};

use geo::{
    kernels::{HasKernel, Kernel, Orientation},
    Coordinate, GeoFloat,
};

use super::EdgeGraph;
use crate::monotone::Quadrant;

/// Stable handle of a half-edge in an [`EdgeGraph`].
///
/// Only meaningful for the graph that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfEdgeId(usize);

/// One directed half of an undirected edge.
///
/// Only the origin is stored; the destination is the origin of
/// `sym`. `next` is the next half-edge around the destination, so the
/// next half-edge around the origin is `sym.next`.
#[derive(Debug, Clone, Copy)]
pub(super) struct HalfEdge<T: GeoFloat> {
    orig: Coordinate<T>,
    sym: HalfEdgeId,
    next: HalfEdgeId,
    marked: bool,
}

impl<T: GeoFloat> EdgeGraph<T> {
    #[inline]
    fn node(&self, e: HalfEdgeId) -> &HalfEdge<T> {
        &self.edges[e.0]
    }

    #[inline]
    fn node_mut(&mut self, e: HalfEdgeId) -> &mut HalfEdge<T> {
        &mut self.edges[e.0]
    }

    /// Allocate an unlinked half-edge: its own `sym` and `next`.
    fn alloc(&mut self, orig: Coordinate<T>) -> HalfEdgeId {
        let entry = self.edges.vacant_entry();
        let id = HalfEdgeId(entry.key());
        entry.insert(HalfEdge {
            orig,
            sym: id,
            next: id,
            marked: false,
        });
        id
    }

    /// Make `e0` and `e1` each other's `sym`, forming a one-edge ring
    /// at both ends.
    fn link(&mut self, e0: HalfEdgeId, e1: HalfEdgeId) {
        assert!(
            self.node(e0).sym == e0 && self.node(e1).sym == e1,
            "half-edge pair is already linked"
        );
        let n0 = self.node_mut(e0);
        n0.sym = e1;
        n0.next = e1;
        let n1 = self.node_mut(e1);
        n1.sym = e0;
        n1.next = e0;
    }

    /// Create a linked pair `orig -> dest` and `dest -> orig`, and
    /// return the former. The pair is not spliced into any ring.
    pub(super) fn create_pair(&mut self, orig: Coordinate<T>, dest: Coordinate<T>) -> HalfEdgeId {
        let e0 = self.alloc(orig);
        let e1 = self.alloc(dest);
        self.link(e0, e1);
        e0
    }

    #[inline]
    pub fn orig(&self, e: HalfEdgeId) -> Coordinate<T> {
        self.node(e).orig
    }

    #[inline]
    pub fn dest(&self, e: HalfEdgeId) -> Coordinate<T> {
        self.orig(self.sym(e))
    }

    /// The oppositely directed half of the same edge.
    #[inline]
    pub fn sym(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.node(e).sym
    }

    /// The next half-edge around the destination of `e`.
    #[inline]
    pub fn next(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.node(e).next
    }

    /// The next half-edge counter-clockwise around the origin of `e`.
    #[inline]
    pub fn o_next(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.next(self.sym(e))
    }

    /// The half-edges around the origin of `e`, in counter-clockwise
    /// order starting with `e`.
    pub fn origin_ring(&self, e: HalfEdgeId) -> impl Iterator<Item = HalfEdgeId> + '_ {
        let mut curr = Some(e);
        from_fn(move || {
            let out = curr?;
            let next = self.o_next(out);
            curr = if next == e { None } else { Some(next) };
            Some(out)
        })
    }

    /// The half-edge ending at the origin of `e` that precedes it in
    /// the ring, ie. the `sym` of the last half-edge of the origin
    /// ring.
    pub fn prev(&self, e: HalfEdgeId) -> HalfEdgeId {
        let last = self.origin_ring(e).last().unwrap_or(e);
        self.sym(last)
    }

    /// Number of half-edges around the origin of `e`.
    pub fn degree(&self, e: HalfEdgeId) -> usize {
        self.origin_ring(e).count()
    }

    /// Walk backwards from `e` over vertices of degree 2 to the first
    /// half-edge whose origin is a node: a vertex of degree other than
    /// 2. Returns `None` if `e` lies on a ring of degree 2 vertices.
    pub fn prev_node(&self, e: HalfEdgeId) -> Option<HalfEdgeId> {
        let mut curr = e;
        while self.degree(curr) == 2 {
            curr = self.prev(curr);
            if curr == e {
                return None;
            }
        }
        Some(curr)
    }

    /// The half-edge from the origin of `e` to `dest`, if any.
    pub fn find(&self, e: HalfEdgeId, dest: Coordinate<T>) -> Option<HalfEdgeId> {
        self.origin_ring(e).find(|&cand| self.dest(cand) == dest)
    }

    /// Whether `e` runs from `p0` to `p1`.
    pub fn equals(&self, e: HalfEdgeId, p0: Coordinate<T>, p1: Coordinate<T>) -> bool {
        self.orig(e) == p0 && self.dest(e) == p1
    }

    #[inline]
    pub fn direction_x(&self, e: HalfEdgeId) -> T {
        self.dest(e).x - self.orig(e).x
    }

    #[inline]
    pub fn direction_y(&self, e: HalfEdgeId) -> T {
        self.dest(e).y - self.orig(e).y
    }

    /// Compare the directions of two half-edges with the same origin
    /// by their angle counter-clockwise from the positive x-axis.
    ///
    /// Compares quadrants first and resolves directions in the same
    /// quadrant with the robust orientation predicate.
    pub fn compare_angular_direction(&self, a: HalfEdgeId, b: HalfEdgeId) -> Ordering {
        let (dx0, dy0) = (self.direction_x(a), self.direction_y(a));
        let (dx1, dy1) = (self.direction_x(b), self.direction_y(b));
        if dx0 == dx1 && dy0 == dy1 {
            return Ordering::Equal;
        }

        let quad0 = Quadrant::of_direction(dx0, dy0);
        let quad1 = Quadrant::of_direction(dx1, dy1);
        match quad0.cmp(&quad1) {
            Ordering::Equal => {}
            o => return o,
        }

        match T::Ker::orient2d(self.orig(b), self.dest(b), self.dest(a)) {
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
            Orientation::Collinear => Ordering::Equal,
        }
    }

    /// Splice `e_add` into the origin ring of `e` at its angular
    /// position. Both must have the same origin.
    pub fn insert(&mut self, e: HalfEdgeId, e_add: HalfEdgeId) {
        if self.o_next(e) == e {
            self.insert_after(e, e_add);
            return;
        }
        let e_prev = self.insertion_edge(e, e_add);
        self.insert_after(e_prev, e_add);
    }

    /// The half-edge of the origin ring of `e` after which `e_add`
    /// belongs.
    fn insertion_edge(&self, e: HalfEdgeId, e_add: HalfEdgeId) -> HalfEdgeId {
        for e_prev in self.origin_ring(e) {
            let e_next = self.o_next(e_prev);
            let cmp = |a, b| self.compare_angular_direction(a, b);

            // Inside an increasing step of the ring.
            if cmp(e_next, e_prev) == Ordering::Greater
                && cmp(e_add, e_prev) != Ordering::Less
                && cmp(e_add, e_next) != Ordering::Greater
            {
                return e_prev;
            }
            // At the wrap-around from the largest to the smallest angle.
            if cmp(e_next, e_prev) != Ordering::Greater
                && (cmp(e_add, e_next) != Ordering::Greater || cmp(e_add, e_prev) != Ordering::Less)
            {
                return e_prev;
            }
        }
        unreachable!("no angular position found for half-edge in origin ring");
    }

    /// Splice `e_add` into the origin ring directly after `e`.
    fn insert_after(&mut self, e: HalfEdgeId, e_add: HalfEdgeId) {
        assert_eq!(
            self.orig(e),
            self.orig(e_add),
            "spliced half-edges must share their origin"
        );
        let save = self.o_next(e);
        let e_sym = self.sym(e);
        let add_sym = self.sym(e_add);
        self.node_mut(e_sym).next = e_add;
        self.node_mut(add_sym).next = save;
    }

    pub fn is_marked(&self, e: HalfEdgeId) -> bool {
        self.node(e).marked
    }

    pub fn mark(&mut self, e: HalfEdgeId) {
        self.set_mark(e, true);
    }

    pub fn set_mark(&mut self, e: HalfEdgeId, marked: bool) {
        self.node_mut(e).marked = marked;
    }

    /// Mark both halves of the edge of `e`.
    pub fn mark_both(&mut self, e: HalfEdgeId) {
        let sym = self.sym(e);
        self.mark(e);
        self.mark(sym);
    }

    pub fn unmark_all(&mut self) {
        for (_, node) in self.edges.iter_mut() {
            node.marked = false;
        }
    }

    pub(super) fn half_edge_ids(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.edges.iter().map(|(key, _)| HalfEdgeId(key))
    }
}
