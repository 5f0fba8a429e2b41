//! Network configuration for Fuel networks.
//!
//! This module defines the built-in Fuel networks, user-defined custom
//! networks, and the GraphQL endpoint each one resolves to.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::FetchError;

// ============================================================================
// Built-in Networks
// ============================================================================

/// Fuel network variants with well-known indexer endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Fuel Testnet. Balance lookups default to it.
    #[default]
    Testnet,
    /// Fuel Mainnet - the production network.
    Mainnet,
}

impl Network {
    /// All built-in networks, in display order.
    pub const ALL: [Self; 2] = [Self::Testnet, Self::Mainnet];

    /// Returns the symbolic name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }

    /// Returns the GraphQL endpoint for this network.
    ///
    /// Balance queries are POSTed to this URL.
    #[must_use]
    pub const fn graphql_url(&self) -> &'static str {
        match self {
            Self::Testnet => "https://testnet.fuel.network/v1/graphql",
            Self::Mainnet => "https://mainnet.fuel.network/v1/graphql",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "mainnet" => Ok(Self::Mainnet),
            other => Err(FetchError::invalid_input(format!(
                "Unknown network '{other}'. Expected 'testnet' or 'mainnet'."
            ))),
        }
    }
}

// ============================================================================
// Custom Networks
// ============================================================================

/// A user-defined network pointing at an arbitrary GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Display name, unique among custom networks.
    pub name: String,
    /// Full URL of the GraphQL endpoint.
    pub graphql_url: String,
}

impl CustomNetwork {
    #[must_use]
    pub fn new(name: impl Into<String>, graphql_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graphql_url: graphql_url.into(),
        }
    }
}

/// Either a built-in network or a custom one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkConfig {
    BuiltIn(Network),
    Custom(CustomNetwork),
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::BuiltIn(Network::default())
    }
}

impl NetworkConfig {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.as_str(),
            Self::Custom(custom) => &custom.name,
        }
    }

    #[must_use]
    pub fn graphql_url(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.graphql_url(),
            Self::Custom(custom) => &custom.graphql_url,
        }
    }
}

impl From<Network> for NetworkConfig {
    fn from(network: Network) -> Self {
        Self::BuiltIn(network)
    }
}

// ============================================================================
// Tests
// ============================================================================
