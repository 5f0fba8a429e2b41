//! GraphQL documents sent to the Fuel indexer.

use serde_json::{Value, json};

/// Balances owned by an address, first page only.
pub const BALANCE_QUERY: &str = r"
  query Balances($filter: BalanceFilterInput!) {
    balances(filter: $filter, first: 100) {
      nodes {
        amount
        assetId
      }
    }
  }
";

/// Request body for [`BALANCE_QUERY`] filtered to `owner`.
#[must_use]
pub fn balance_request(owner: &str) -> Value {
    json!({
        "query": BALANCE_QUERY,
        "variables": {
            "filter": {
                "owner": owner,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BALANCE_PAGE_SIZE;

    #[test]
    fn test_balance_query_requests_one_page() {
        assert!(BALANCE_QUERY.contains(&format!("first: {BALANCE_PAGE_SIZE}")));
        assert!(BALANCE_QUERY.contains("amount"));
        assert!(BALANCE_QUERY.contains("assetId"));
    }

    #[test]
    fn test_balance_request_shape() {
        let body = balance_request("0xowner");
        assert_eq!(body["query"], BALANCE_QUERY);
        assert_eq!(body["variables"]["filter"]["owner"], "0xowner");
    }
}
