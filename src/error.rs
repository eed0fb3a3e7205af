//! Error types for physics operations.

use core::fmt;

/// Errors that can occur when building simulation structures.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A spring endpoint index is outside the mesh's particle container.
    SpringEndpointOutOfBounds { index: usize, count: usize },
    /// A spring must connect two distinct particles.
    SpringEndpointsEqual { index: usize },
    /// A ring mesh needs at least 3 rim segments.
    InsufficientSegments,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::SpringEndpointOutOfBounds { index, count } => {
                write!(f, "spring endpoint {} out of bounds (particle count: {})", index, count)
            }
            PhysicsError::SpringEndpointsEqual { index } => {
                write!(f, "spring endpoints must be distinct (both are {})", index)
            }
            PhysicsError::InsufficientSegments => write!(f, "ring mesh needs at least 3 segments"),
        }
    }
}
