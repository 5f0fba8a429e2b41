//! Domain types for fuel-palette.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for fetches and wallet operations
//! - [`network`] - Network configuration (Testnet, Mainnet, custom)
//! - [`balance`] - Balance entries and account summaries
//! - [`operation`] - Wallet operation catalog and agent requests

// ============================================================================
// Module Declarations
// ============================================================================

pub mod balance;
pub mod error;
pub mod network;
pub mod operation;

// ============================================================================
// Re-exports
// ============================================================================

pub use balance::{AccountSummary, BalanceEntry};
pub use error::{FetchError, OperationError};
pub use network::{CustomNetwork, Network, NetworkConfig};
pub use operation::{AgentRequest, Operation};
