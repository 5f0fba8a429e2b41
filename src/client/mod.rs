//! Fuel indexer client.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, IndexerClient, ReqwestTransport};
//! use crate::domain::Network;
//!
//! let client = IndexerClient::new(ReqwestTransport::new(&HttpConfig::default())?);
//! let summary = client
//!     .fetch_account_summary("0x...", &Network::Testnet.into())
//!     .await?;
//! ```

pub mod http;
pub mod indexer;
pub mod queries;


// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpConfig, IndexerTransport, ReqwestTransport};
pub use indexer::IndexerClient;
