// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types

use thiserror::Error;

/// Errors raised by graph searches and (de)serialization
#[derive(Debug, Error)]
pub enum GraphError {
    /// A weight could not be ordered against other weights (float NaN)
    #[error("weight on edge {from} -> {to} cannot be ordered")]
    IncomparableWeight {
        /// Source node, debug-formatted
        from: String,
        /// Destination node, debug-formatted
        to: String,
    },

    /// Shortest-path search found an edge weighing less than zero
    #[error("negative weight on edge {from} -> {to}; shortest paths need non-negative weights")]
    NegativeWeight {
        /// Source node, debug-formatted
        from: String,
        /// Destination node, debug-formatted
        to: String,
    },

    /// A path or forest total does not fit the weight type
    #[error("weight total overflows at edge {from} -> {to}; use a wider weight type")]
    WeightOverflow {
        /// Source node, debug-formatted
        from: String,
        /// Destination node, debug-formatted
        to: String,
    },

    /// JSON snapshot could not be produced or parsed
    #[error("graph snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration text could not be parsed
    #[error("graph configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl GraphError {
    pub(crate) fn incomparable(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::IncomparableWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn overflow(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::WeightOverflow {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn negative(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// Result alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
