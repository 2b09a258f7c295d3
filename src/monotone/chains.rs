use geo::{Coordinate, GeoFloat};
use log::trace;

use super::Quadrant;

/// Indices at which the monotone chains of `coords` start.
///
/// Chain `i` spans the coordinates `starts[i]..=starts[i + 1]`; the
/// last entry is a sentinel equal to the last coordinate index. A new
/// chain starts wherever a segment leaves the quadrant of the current
/// chain. Zero-length segments belong to whichever chain they are in.
///
/// Panics if there are fewer than two coordinates.
pub fn chain_start_indices<T: GeoFloat>(coords: &[Coordinate<T>]) -> Vec<usize> {
    assert!(coords.len() >= 2, "monotone chains need at least 2 coordinates");
    let last = coords.len() - 1;

    let mut starts = vec![0];
    let mut start = 0;
    while start < last {
        let end = find_chain_end(coords, start);
        trace!("chain: {start}..={end}");
        starts.push(end);
        start = end;
    }
    starts
}

/// Index of the last coordinate of the chain starting at `start`.
fn find_chain_end<T: GeoFloat>(coords: &[Coordinate<T>], start: usize) -> usize {
    let last = coords.len() - 1;

    // The chain direction is set by its first non-degenerate segment.
    let mut first = start;
    while first < last && coords[first] == coords[first + 1] {
        first += 1;
    }
    if first >= last {
        return last;
    }
    let chain_quad = Quadrant::of_segment(coords[first], coords[first + 1]);

    let mut end = first + 1;
    while end < last {
        let (p, q) = (coords[end], coords[end + 1]);
        if p != q && Quadrant::of_segment(p, q) != chain_quad {
            break;
        }
        end += 1;
    }
    end
}
