use std::f64::consts::PI;

use geo::{rotate::RotatePoint, Coordinate, Line, LineString, Rect};

use rand::Rng;
use rand_distr::{Distribution, Normal, Standard};

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    let coords: [f64; 2] = rng.sample(Standard);
    let dims = bounds.max() - bounds.min();
    Coordinate {
        x: bounds.min().x + dims.x * coords[0],
        y: bounds.min().y + dims.y * coords[1],
    }
}

#[inline]
#[allow(dead_code)]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

#[inline]
#[allow(dead_code)]
pub fn uniform_line_with_length<R: Rng>(rng: &mut R, bounds: Rect<f64>, length: f64) -> Line<f64> {
    let start = uniform_point(rng, bounds);
    let line = Line::new(start, start + (length, 0.).into());
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    line.rotate_around_point(angle, start.into())
}

/// A polyline of `steps` segments from a uniform start point, each
/// step turning by a normally distributed angle. Small `turn` values
/// give long monotone chains.
#[allow(dead_code)]
pub fn random_walk<R: Rng>(
    rng: &mut R,
    bounds: Rect<f64>,
    steps: usize,
    step_len: f64,
    turn: f64,
) -> LineString<f64> {
    let turns = Normal::new(0., turn).expect("turn must be finite and non-negative");
    let mut pt = uniform_point(rng, bounds);
    let mut heading = rng.sample::<f64, _>(Standard) * 2. * PI;

    let mut coords = Vec::with_capacity(steps + 1);
    coords.push(pt);
    for _ in 0..steps {
        heading += turns.sample(rng);
        pt = Coordinate {
            x: pt.x + step_len * heading.cos(),
            y: pt.y + step_len * heading.sin(),
        };
        coords.push(pt);
    }
    LineString(coords)
}
