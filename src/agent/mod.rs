//! Wallet agent seam and operation runner.
//!
//! The agent that signs and submits transactions lives outside this crate.
//! [`run_operation`] builds the request from form values, forwards exactly one
//! call to a [`WalletAgent`], and folds the outcome into a [`Toast`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{AgentRequest, Operation, OperationError};

mod toast;

pub use toast::Toast;

// ============================================================================
// Agent Trait
// ============================================================================

/// Result of a successful agent call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentResponse {
    /// Free-form text produced by the agent.
    pub output: String,
    /// Explorer link for the submitted transaction, when the agent reports one.
    pub transaction_link: Option<String>,
}

impl AgentResponse {
    #[must_use]
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            transaction_link: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_transaction_link(mut self, link: impl Into<String>) -> Self {
        self.transaction_link = Some(link.into());
        self
    }

    /// The transaction link, preferring the structured field over scanning `output`.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.transaction_link
            .as_deref()
            .or_else(|| extract_transaction_link(&self.output))
    }
}

/// External wallet automation entry point.
#[async_trait]
pub trait WalletAgent: Send + Sync {
    /// Perform one wallet operation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Agent` when the agent rejects or fails the call.
    async fn call(&self, request: &AgentRequest) -> Result<AgentResponse, OperationError>;
}

// ============================================================================
// Runner
// ============================================================================

/// Build, forward and report one operation. Never fails; errors become a
/// failure toast.
pub async fn run_operation<A: WalletAgent + ?Sized>(
    agent: &A,
    operation: Operation,
    values: &HashMap<String, String>,
) -> (Toast, Option<AgentResponse>) {
    let request = match operation.request(values) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("{} form rejected: {e}", operation.key());
            return (Toast::failure(operation.failure_title(), e.to_string()), None);
        }
    };

    tracing::debug!(method = request.method(), "Forwarding operation to wallet agent");

    match agent.call(&request).await {
        Ok(response) => {
            let toast = match response.link() {
                Some(link) => Toast::success(operation.success_title())
                    .with_message(format!("Transaction link: {link}")),
                None => Toast::success(operation.success_title()),
            };
            (toast, Some(response))
        }
        Err(e) => {
            tracing::warn!(method = request.method(), "Wallet agent call failed: {e}");
            (Toast::failure(operation.failure_title(), e.to_string()), None)
        }
    }
}

/// First `http://` or `https://` token in free-form agent output.
#[must_use]
pub fn extract_transaction_link(output: &str) -> Option<&str> {
    output.split_whitespace().find_map(|token| {
        let start = [token.find("http://"), token.find("https://")]
            .into_iter()
            .flatten()
            .min()?;
        Some(&token[start..])
    })
}

// ============================================================================
// Dry-run Agent
// ============================================================================

/// Agent that describes the call it would forward without signing anything.
#[derive(Debug, Clone, Default)]
pub struct DryRunAgent;

#[async_trait]
impl WalletAgent for DryRunAgent {
    async fn call(&self, request: &AgentRequest) -> Result<AgentResponse, OperationError> {
        tracing::info!(method = request.method(), "Dry run: {request}");
        Ok(AgentResponse::new(format!(
            "Dry run: would call {}() to {request}",
            request.method()
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::toast::ToastStyle;
    use super::*;
    use crate::test_utils::{FormMother, MockAgent};
    use rstest::rstest;

    #[rstest]
    #[case::bare("Sent! https://app.fuel.network/tx/0xabc", Some("https://app.fuel.network/tx/0xabc"))]
    #[case::http("see http://localhost:4000/tx/1 for details", Some("http://localhost:4000/tx/1"))]
    #[case::prefixed("link:https://explorer/tx/9", Some("https://explorer/tx/9"))]
    #[case::first_wins("https://a/1 https://b/2", Some("https://a/1"))]
    #[case::nested_http(
        "Done: https://app.fuel.network/tx/0x1?ref=http://example.com",
        Some("https://app.fuel.network/tx/0x1?ref=http://example.com")
    )]
    #[case::nested_https(
        "go to http://proxy/redirect?to=https://app.fuel.network/tx/0x2",
        Some("http://proxy/redirect?to=https://app.fuel.network/tx/0x2")
    )]
    #[case::none("Transfer complete", None)]
    #[case::empty("", None)]
    fn test_extract_transaction_link(#[case] output: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_transaction_link(output), expected);
    }

    #[test]
    fn test_structured_link_preferred_over_output() {
        let response = AgentResponse::new("see https://scanned/tx/1")
            .with_transaction_link("https://structured/tx/1");
        assert_eq!(response.link(), Some("https://structured/tx/1"));
        assert_eq!(
            AgentResponse::new("see https://scanned/tx/1").link(),
            Some("https://scanned/tx/1")
        );
    }

    #[tokio::test]
    async fn test_success_toast_without_link() {
        let agent = MockAgent::succeeding(AgentResponse::new("done"));
        let values = FormMother::complete(Operation::Swap);

        let (toast, response) = run_operation(&agent, Operation::Swap, &values).await;

        assert_eq!(toast, Toast::success("Swap successful!"));
        assert_eq!(response.unwrap().output, "done");
        assert_eq!(agent.call_count(), 1);
    }

    #[tokio::test]
    async fn test_success_toast_carries_link() {
        let agent = MockAgent::succeeding(AgentResponse::new(
            "Transferred 0.1 USDC: https://app-testnet.fuel.network/tx/0x42",
        ));
        let values = FormMother::values(&[("command", "Send 0.1 USDC to 0x...")]);

        let (toast, _) = run_operation(&agent, Operation::NaturalLanguage, &values).await;

        assert_eq!(toast.style, ToastStyle::Success);
        assert_eq!(toast.title, "Command executed successfully!");
        assert_eq!(
            toast.message.as_deref(),
            Some("Transaction link: https://app-testnet.fuel.network/tx/0x42")
        );
    }

    #[tokio::test]
    async fn test_agent_failure_becomes_failure_toast() {
        let agent = MockAgent::failing("insufficient funds");
        let values = FormMother::complete(Operation::Borrow);

        let (toast, response) = run_operation(&agent, Operation::Borrow, &values).await;

        assert_eq!(
            toast,
            Toast::failure("Failed to borrow asset", "insufficient funds")
        );
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_agent() {
        let agent = MockAgent::succeeding(AgentResponse::default());
        let values = FormMother::values(&[("amount", "100")]);

        let (toast, _) = run_operation(&agent, Operation::Collateral, &values).await;

        assert_eq!(toast.style, ToastStyle::Failure);
        assert_eq!(toast.title, "Failed to supply collateral");
        assert_eq!(agent.call_count(), 0);
    }

    #[tokio::test]
    async fn test_dry_run_agent_describes_call() {
        let values = FormMother::values(&[("amount0", "100"), ("asset0Symbol", "USDC"), ("asset1Symbol", "ETH")]);

        let (toast, response) = run_operation(&DryRunAgent, Operation::Liquidity, &values).await;

        assert_eq!(toast, Toast::success("Liquidity added successfully!"));
        let output = response.unwrap().output;
        assert!(output.starts_with("Dry run: would call addLiquidity()"));
        assert!(output.contains("USDC/ETH"));
    }
}
