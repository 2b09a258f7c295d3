use std::collections::BTreeMap;

use geo::{Coordinate, GeoFloat};

use crate::{Edge, SweepPoint};

/// Boundary nodes of a set of linear edges by the Mod-2 rule.
///
/// An end point is on the boundary iff it ends an odd number of
/// edges. Both ends of a closed edge are the same point, so a ring
/// contributes no boundary. The nodes are returned in lexicographic
/// order.
pub fn boundary_nodes<T: GeoFloat>(edges: &[Edge<T>]) -> Vec<Coordinate<T>> {
    let mut counts: BTreeMap<SweepPoint<T>, usize> = BTreeMap::new();
    for edge in edges {
        let coords = edge.coords();
        for &pt in &[coords[0], coords[coords.len() - 1]] {
            *counts.entry(pt.into()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| count % 2 == 1)
        .map(|(pt, _)| pt.coord())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(pts: &[(f64, f64)]) -> Edge<f64> {
        Edge::new(pts.iter().map(|&p| p.into()).collect()).unwrap()
    }

    #[test]
    fn test_mod2_rule() {
        let edges = vec![
            edge(&[(0., 0.), (1., 0.)]),
            edge(&[(1., 0.), (2., 0.)]),
            edge(&[(1., 0.), (1., 1.)]),
            edge(&[(5., 5.), (6., 5.), (6., 6.), (5., 5.)]),
        ];
        let nodes = boundary_nodes(&edges);
        // (1, 0) ends three edges; the ring adds nothing.
        assert_eq!(
            nodes,
            vec![
                Coordinate { x: 0., y: 0. },
                Coordinate { x: 1., y: 0. },
                Coordinate { x: 1., y: 1. },
                Coordinate { x: 2., y: 0. },
            ]
        );
    }

    #[test]
    fn test_shared_end_point_is_interior() {
        let edges = vec![edge(&[(0., 0.), (1., 0.)]), edge(&[(1., 0.), (2., 0.)])];
        assert_eq!(
            boundary_nodes(&edges),
            vec![Coordinate { x: 0., y: 0. }, Coordinate { x: 2., y: 0. }]
        );
    }
}
