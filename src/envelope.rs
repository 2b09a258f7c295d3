use geo::{Coordinate, GeoFloat, Rect};

/// An axis-aligned bounding box.
///
/// Intersection tests are closed: envelopes that only share a
/// boundary point intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope<T: GeoFloat> {
    min: Coordinate<T>,
    max: Coordinate<T>,
}

impl<T: GeoFloat> Envelope<T> {
    /// Envelope of the two points `p` and `q` (in any order).
    pub fn new(p: Coordinate<T>, q: Coordinate<T>) -> Self {
        let mut env = Envelope { min: p, max: p };
        env.init(p, q);
        env
    }

    /// Envelope containing exactly one point.
    pub fn of_point(p: Coordinate<T>) -> Self {
        Envelope { min: p, max: p }
    }

    /// Envelope of all the coordinates; `None` if there are none.
    pub fn from_coords<I: IntoIterator<Item = Coordinate<T>>>(iter: I) -> Option<Self> {
        let mut iter = iter.into_iter();
        let mut env = Envelope::of_point(iter.next()?);
        for c in iter {
            env.expand_to_include(c);
        }
        Some(env)
    }

    /// Re-initialize in place to the envelope of `p` and `q`.
    #[inline]
    pub fn init(&mut self, p: Coordinate<T>, q: Coordinate<T>) {
        self.min = Coordinate {
            x: p.x.min(q.x),
            y: p.y.min(q.y),
        };
        self.max = Coordinate {
            x: p.x.max(q.x),
            y: p.y.max(q.y),
        };
    }

    pub fn expand_to_include(&mut self, p: Coordinate<T>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn expand_to_include_envelope(&mut self, other: &Envelope<T>) {
        self.expand_to_include(other.min);
        self.expand_to_include(other.max);
    }

    #[inline]
    pub fn intersects(&self, other: &Envelope<T>) -> bool {
        !(other.min.x > self.max.x
            || other.max.x < self.min.x
            || other.min.y > self.max.y
            || other.max.y < self.min.y)
    }

    #[inline]
    pub fn contains(&self, p: Coordinate<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn min(&self) -> Coordinate<T> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Coordinate<T> {
        self.max
    }

    #[inline]
    pub fn min_x(&self) -> T {
        self.min.x
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.max.x
    }

    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }
}

impl<T: GeoFloat> Default for Envelope<T> {
    fn default() -> Self {
        Envelope::of_point(Coordinate::zero())
    }
}

impl<T: GeoFloat> From<Rect<T>> for Envelope<T> {
    fn from(rect: Rect<T>) -> Self {
        Envelope {
            min: rect.min(),
            max: rect.max(),
        }
    }
}

impl<T: GeoFloat> From<Envelope<T>> for Rect<T> {
    fn from(env: Envelope<T>) -> Self {
        Rect::new(env.min, env.max)
    }
}
