use geo::{Coordinate, GeoFloat, LineString, MultiLineString, Polygon};
use itertools::Itertools;
use log::debug;

use super::EdgeGraph;
use crate::{Edge, TopologyError};

/// Builds an [`EdgeGraph`] from linework.
///
/// Every pair of consecutive coordinates becomes an edge of the
/// graph. Repeated edges are added once and zero-length edges are
/// skipped, so the input may contain duplicate segments. The input is
/// expected to be noded: segments meeting only at a crossing are not
/// connected.
#[derive(Debug, Clone)]
pub struct EdgeGraphBuilder<T: GeoFloat> {
    graph: EdgeGraph<T>,
}

impl<T: GeoFloat> Default for EdgeGraphBuilder<T> {
    fn default() -> Self {
        EdgeGraphBuilder {
            graph: EdgeGraph::new(),
        }
    }
}

impl<T: GeoFloat> EdgeGraphBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the segments of a coordinate sequence. Nothing is added if
    /// any coordinate is non-finite.
    pub fn add_coords(&mut self, coords: &[Coordinate<T>]) -> Result<(), TopologyError> {
        if coords.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(TopologyError::NonFiniteCoordinate);
        }
        for (p, q) in coords.iter().copied().tuple_windows() {
            self.graph.add_edge(p, q);
        }
        Ok(())
    }

    pub fn add_line_string(&mut self, ls: &LineString<T>) -> Result<(), TopologyError> {
        self.add_coords(&ls.0)
    }

    pub fn add_multi_line_string(&mut self, mls: &MultiLineString<T>) -> Result<(), TopologyError> {
        for ls in &mls.0 {
            self.add_line_string(ls)?;
        }
        Ok(())
    }

    /// Add the exterior and interior rings of a polygon.
    pub fn add_polygon(&mut self, poly: &Polygon<T>) -> Result<(), TopologyError> {
        self.add_line_string(poly.exterior())?;
        for ring in poly.interiors() {
            self.add_line_string(ring)?;
        }
        Ok(())
    }

    /// Add edges, typically the result of noding.
    pub fn add_edges<'a, I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = &'a Edge<T>>,
        T: 'a,
    {
        for edge in edges {
            for (p, q) in edge.coords().iter().copied().tuple_windows() {
                self.graph.add_edge(p, q);
            }
        }
    }

    pub fn build(self) -> EdgeGraph<T> {
        debug!(
            "graph: built {vertices} vertices, {edges} half-edges",
            vertices = self.graph.num_vertices(),
            edges = self.graph.len()
        );
        self.graph
    }
}
