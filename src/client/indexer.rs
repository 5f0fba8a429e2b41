//! Account summary fetching against a Fuel GraphQL indexer.

use serde::Deserialize;
use serde_json::Value;

use super::http::IndexerTransport;
use super::queries::balance_request;
use crate::constants::BALANCE_PAGE_SIZE;
use crate::domain::{AccountSummary, BalanceEntry, FetchError, NetworkConfig};

// ============================================================================
// Response Shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<BalancesData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BalancesData {
    balances: Option<BalanceConnection>,
}

#[derive(Debug, Deserialize)]
struct BalanceConnection {
    nodes: Option<Vec<BalanceNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalanceNode {
    amount: String,
    asset_id: String,
}

// ============================================================================
// Indexer Client
// ============================================================================

/// Fetches account balances through an injected transport.
#[derive(Debug, Clone)]
pub struct IndexerClient<T> {
    transport: T,
}

impl<T: IndexerTransport> IndexerClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport_for_tests(&self) -> &T {
        &self.transport
    }

    /// Fetch the first page of balances owned by `address` on `network`.
    ///
    /// An empty address is rejected before any request is sent.
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidInput` if `address` is blank
    /// - `FetchError::Network` if the request fails or returns a non-2xx status
    /// - `FetchError::Parse` if the body lacks `data.balances.nodes` or a node is malformed
    pub async fn fetch_account_summary(
        &self,
        address: &str,
        network: &NetworkConfig,
    ) -> Result<AccountSummary, FetchError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(FetchError::invalid_input("address must not be empty"));
        }

        tracing::debug!(
            network = network.name(),
            %address,
            page_size = BALANCE_PAGE_SIZE,
            "Querying balances"
        );

        let body = self
            .transport
            .post_json(network.graphql_url(), &balance_request(address))
            .await
            .inspect_err(|e| tracing::debug!("Balance query to {} failed: {e}", network.name()))?;

        let entries = Self::parse_balances(body)?;
        if entries.len() >= BALANCE_PAGE_SIZE as usize {
            tracing::warn!(
                %address,
                "Balance list hit the page size of {BALANCE_PAGE_SIZE}; later pages are not fetched"
            );
        }

        Ok(AccountSummary::new(address, entries))
    }

    /// Parse `data.balances.nodes`, keeping server order.
    fn parse_balances(body: Value) -> Result<Vec<BalanceEntry>, FetchError> {
        let response: GraphQlResponse = serde_json::from_value(body)
            .map_err(|e| FetchError::parse(format!("unexpected indexer response: {e}")))?;

        let nodes = response
            .data
            .and_then(|data| data.balances)
            .and_then(|balances| balances.nodes);

        let Some(nodes) = nodes else {
            return Err(match response.errors.first() {
                Some(err) => FetchError::parse(format!("indexer returned an error: {}", err.message)),
                None => FetchError::parse("response is missing data.balances.nodes"),
            });
        };

        nodes
            .iter()
            .map(|node| BalanceEntry::from_raw(&node.amount, &node.asset_id))
            .collect()
    }
}
