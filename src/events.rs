use std::cmp::Ordering;

use geo::{Coordinate, GeoFloat};

/// Map key for a vertex location.
///
/// Edge graphs index their vertices by it, and the boundary and
/// simplicity checks count edge end points per location in a
/// `BTreeMap` keyed by it. Keys compare by `x`, ties by `y`.
///
/// Only finite coordinates can be wrapped (see the `From` impl), which
/// keeps the comparison total.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SweepPoint<T: GeoFloat>(Coordinate<T>);

impl<T: GeoFloat> SweepPoint<T> {
    /// The wrapped coordinate.
    #[inline]
    pub fn coord(&self) -> Coordinate<T> {
        self.0
    }
}

impl<T: GeoFloat> PartialOrd for SweepPoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: GeoFloat> Ord for SweepPoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.0, other.0);
        a.x.partial_cmp(&b.x)
            .and_then(|o| Some(o.then(a.y.partial_cmp(&b.y)?)))
            .expect("vertex keys hold finite coordinates")
    }
}

impl<T: GeoFloat> Eq for SweepPoint<T> {}

/// Panics on a `NaN` or infinite component.
impl<T: GeoFloat> From<Coordinate<T>> for SweepPoint<T> {
    fn from(pt: Coordinate<T>) -> Self {
        assert!(
            pt.x.is_finite(),
            "sweep point requires a finite x-coordinate"
        );
        assert!(
            pt.y.is_finite(),
            "sweep point requires a finite y-coordinate"
        );
        SweepPoint(pt)
    }
}

/// Event type of a chain event in the x-sweep.
///
/// The ordering of the variants is important for the algorithm:
/// inserts sort before deletes at the same `x`, so chains that only
/// touch at a single `x` are still reported as concurrently open.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
pub(crate) enum EventType {
    Insert,
    Delete,
}

/// A sweep event for the monotone chain sweep.
///
/// Each chain gets an insert event at its minimum `x` and a delete
/// event at its maximum `x`, both carrying the same `chain_key`. Once
/// the events are sorted, the insert event records the position of
/// its delete event in `delete_index`.
#[derive(Debug, Clone)]
pub(crate) struct SweepLineEvent<T: GeoFloat> {
    pub(crate) x: T,
    pub(crate) ty: EventType,
    pub(crate) chain_key: usize,
    pub(crate) delete_index: Option<usize>,
}

impl<T: GeoFloat> SweepLineEvent<T> {
    pub(crate) fn insert(x: T, chain_key: usize) -> Self {
        assert!(x.is_finite(), "sweep event requires a finite x-coordinate");
        SweepLineEvent {
            x,
            ty: EventType::Insert,
            chain_key,
            delete_index: None,
        }
    }

    pub(crate) fn delete(x: T, chain_key: usize) -> Self {
        assert!(x.is_finite(), "sweep event requires a finite x-coordinate");
        SweepLineEvent {
            x,
            ty: EventType::Delete,
            chain_key,
            delete_index: None,
        }
    }

    #[inline]
    pub(crate) fn is_insert(&self) -> bool {
        self.ty == EventType::Insert
    }
}

/// Equality check for sorting. Note that it ignores the chain key.
impl<T: GeoFloat> PartialEq for SweepLineEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.ty == other.ty
    }
}

/// Assert total equality
impl<T: GeoFloat> Eq for SweepLineEvent<T> {}

/// Ordering by `x`, then inserts before deletes.
impl<T: GeoFloat> PartialOrd for SweepLineEvent<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(
            self.x
                .partial_cmp(&other.x)?
                .then_with(|| self.ty.cmp(&other.ty)),
        )
    }
}

/// Derive `Ord` from `PartialOrd` and expect to not fail.
impl<T: GeoFloat> Ord for SweepLineEvent<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}
