use std::fmt::{self, Display};

/// Errors raised while turning input geometry into edges.
///
/// Broken internal invariants (e.g. a corrupted half-edge ring) are not
/// represented here; those panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// An edge needs at least two coordinates.
    TooFewPoints { found: usize },
    /// A coordinate had a `NaN` or infinite component.
    NonFiniteCoordinate,
}

impl Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyError::TooFewPoints { found } => {
                write!(f, "edge requires at least 2 coordinates, found {found}")
            }
            TopologyError::NonFiniteCoordinate => {
                write!(f, "coordinates must have finite x and y components")
            }
        }
    }
}

impl std::error::Error for TopologyError {}
