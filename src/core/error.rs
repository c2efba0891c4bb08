use std::fmt;

use crate::graph::GraphError;

/// Errors that abort a render pass. The caller keeps whatever it showed last.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Graph(GraphError),
    /// The caller's animation state array is shorter than the number of
    /// `animation` commands in the list.
    MissingAnimationState { index: usize, available: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Graph(err) => write!(f, "graph command failed: {}", err),
            RenderError::MissingAnimationState { index, available } => write!(
                f,
                "no animation state for animation #{} ({} states supplied)",
                index, available
            ),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Graph(err) => Some(err),
            RenderError::MissingAnimationState { .. } => None,
        }
    }
}

impl From<GraphError> for RenderError {
    fn from(err: GraphError) -> Self {
        RenderError::Graph(err)
    }
}
