// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Which nodes count as members of the graph
///
/// Membership decides which nodes appear in shortest-path results and in
/// exports. Traversals and spanning forests see every endpoint either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipPolicy {
    /// Only nodes inserted as an edge source (or with `add_node`)
    #[default]
    SourceKeys,
    /// Edge destinations are registered too, with no outgoing edges
    AllEndpoints,
}

/// Options fixed when a graph is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Node membership rule
    pub membership: MembershipPolicy,
}

impl GraphConfig {
    /// Set the membership policy
    #[must_use]
    pub fn with_membership(mut self, membership: MembershipPolicy) -> Self {
        self.membership = membership;
        self
    }

    /// Parse configuration from TOML text, defaulting missing keys
    ///
    /// ```
    /// use waygraph::config::{GraphConfig, MembershipPolicy};
    ///
    /// let config = GraphConfig::from_toml_str(r#"membership = "all_endpoints""#).unwrap();
    /// assert_eq!(config.membership, MembershipPolicy::AllEndpoints);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
