//! Markdown balance report.
//!
//! The fetch boundary lives here too: [`load_summary`] turns any fetch outcome
//! into a [`SummaryView`], so a failed lookup is a rendered state and never an
//! error the caller has to handle.

use crate::client::{IndexerClient, IndexerTransport};
use crate::domain::{AccountSummary, FetchError, NetworkConfig};

// ============================================================================
// View State
// ============================================================================

/// What the balance report currently shows.
#[derive(Debug)]
pub enum SummaryView {
    /// No address submitted yet.
    NoAddress,
    /// Request outstanding for this address.
    Loading(String),
    /// Balances fetched.
    Loaded(AccountSummary),
    /// The fetch for this address failed.
    Failed { address: String, error: FetchError },
}

impl SummaryView {
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::NoAddress => None,
            Self::Loading(address) | Self::Failed { address, .. } => Some(address.as_str()),
            Self::Loaded(summary) => Some(summary.address.as_str()),
        }
    }

    /// The fetch failure behind a [`SummaryView::Failed`] view.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Render the view as markdown.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(address) = self.address() else {
            return "# Please enter an address\n".to_string();
        };

        let body = match self {
            Self::Loading(_) => "Loading...".to_string(),
            Self::Loaded(summary) if !summary.is_empty() => render_entries(summary),
            _ => "No balance found".to_string(),
        };

        format!("# Address Balance\n\n**Address:** `{address}`\n\n{body}\n")
    }
}

fn render_entries(summary: &AccountSummary) -> String {
    summary
        .entries
        .iter()
        .map(|entry| {
            format!(
                "- **Amount:** {}\n  **Asset ID:** `{}`",
                entry.display_amount(),
                entry.asset_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ============================================================================
// Fetch Boundary
// ============================================================================

/// Fetch `address` and fold the outcome into a view.
///
/// A blank address short-circuits to [`SummaryView::NoAddress`] without
/// touching the network.
pub async fn load_summary<T: IndexerTransport>(
    client: &IndexerClient<T>,
    address: &str,
    network: &NetworkConfig,
) -> SummaryView {
    let address = address.trim();
    if address.is_empty() {
        return SummaryView::NoAddress;
    }

    match client.fetch_account_summary(address, network).await {
        Ok(summary) => {
            tracing::debug!(
                entries = summary.entries.len(),
                "Fetched balances for {address}"
            );
            SummaryView::Loaded(summary)
        }
        Err(error) => {
            tracing::warn!(network = network.name(), "Balance lookup for {address} failed: {error}");
            SummaryView::Failed {
                address: address.to_string(),
                error,
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
