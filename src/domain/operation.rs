//! Wallet operation catalog.
//!
//! Every operation the palette offers is a single delegated call into the
//! wallet agent. [`Operation`] describes the form each one needs, and
//! [`Operation::request`] turns submitted form values into the typed
//! [`AgentRequest`] handed to the agent.

use std::collections::HashMap;
use std::str::FromStr;

use super::OperationError;

// ============================================================================
// Form Fields
// ============================================================================

/// A single input on an operation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Key the submitted value is stored under.
    pub id: &'static str,
    /// Label shown next to the input.
    pub title: &'static str,
    /// Example value shown while the input is empty.
    pub placeholder: &'static str,
    /// Whether the input accepts free-form multi-line text.
    pub multiline: bool,
}

impl FormField {
    const fn text(id: &'static str, title: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            title,
            placeholder,
            multiline: false,
        }
    }

    const fn text_area(id: &'static str, title: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            title,
            placeholder,
            multiline: true,
        }
    }
}

const TRANSFER_FIELDS: &[FormField] = &[
    FormField::text("address", "Recipient Address", "0x..."),
    FormField::text("amount", "Amount", "0.1"),
    FormField::text("symbol", "Token Symbol", "USDC"),
];

const SWAP_FIELDS: &[FormField] = &[
    FormField::text("fromSymbol", "From Token", "USDC"),
    FormField::text("amount", "Amount", "100"),
    FormField::text("toSymbol", "To Token", "ETH"),
];

const LIQUIDITY_FIELDS: &[FormField] = &[
    FormField::text("amount0", "Amount", "100"),
    FormField::text("asset0Symbol", "First Asset", "USDC"),
    FormField::text("asset1Symbol", "Second Asset", "ETH"),
];

const COLLATERAL_FIELDS: &[FormField] = &[
    FormField::text("amount", "Amount", "100"),
    FormField::text("symbol", "Token Symbol", "USDC"),
];

const BORROW_FIELDS: &[FormField] = &[FormField::text("amount", "Amount", "100")];

const COMMAND_FIELDS: &[FormField] = &[FormField::text_area(
    "command",
    "Command",
    "Send 0.1 USDC to 0x...",
)];

// ============================================================================
// Operation
// ============================================================================

/// A wallet operation offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Transfer,
    Swap,
    Liquidity,
    Collateral,
    Borrow,
    NaturalLanguage,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Transfer,
        Self::Swap,
        Self::Liquidity,
        Self::Collateral,
        Self::Borrow,
        Self::NaturalLanguage,
    ];

    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Swap => "swap",
            Self::Liquidity => "liquidity",
            Self::Collateral => "collateral",
            Self::Borrow => "borrow",
            Self::NaturalLanguage => "naturalLanguage",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer Funds",
            Self::Swap => "Swap Assets",
            Self::Liquidity => "Provide Liquidity",
            Self::Collateral => "Supply Collateral",
            Self::Borrow => "Borrow Asset",
            Self::NaturalLanguage => "Execute Natural Language Command",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Transfer => "Send tokens to another address",
            Self::Swap => "Swap between different tokens",
            Self::Liquidity => "Add liquidity to a pool",
            Self::Collateral => "Supply tokens as collateral",
            Self::Borrow => "Borrow USDC against your collateral",
            Self::NaturalLanguage => "Enter a command in natural language",
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &'static [FormField] {
        match self {
            Self::Transfer => TRANSFER_FIELDS,
            Self::Swap => SWAP_FIELDS,
            Self::Liquidity => LIQUIDITY_FIELDS,
            Self::Collateral => COLLATERAL_FIELDS,
            Self::Borrow => BORROW_FIELDS,
            Self::NaturalLanguage => COMMAND_FIELDS,
        }
    }

    /// Toast title shown when the agent call succeeds.
    #[must_use]
    pub const fn success_title(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer successful!",
            Self::Swap => "Swap successful!",
            Self::Liquidity => "Liquidity added successfully!",
            Self::Collateral => "Collateral supplied successfully!",
            Self::Borrow => "Asset borrowed successfully!",
            Self::NaturalLanguage => "Command executed successfully!",
        }
    }

    /// Toast title shown when the agent call fails.
    #[must_use]
    pub const fn failure_title(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer failed",
            Self::Swap => "Swap failed",
            Self::Liquidity => "Failed to add liquidity",
            Self::Collateral => "Failed to supply collateral",
            Self::Borrow => "Failed to borrow asset",
            Self::NaturalLanguage => "Command execution failed",
        }
    }

    /// Builds the agent call for this operation from submitted form values.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::MissingField` for the first required field
    /// that is absent or blank.
    pub fn request(&self, values: &HashMap<String, String>) -> Result<AgentRequest, OperationError> {
        let field = |id: &'static str| -> Result<String, OperationError> {
            values
                .get(id)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .ok_or(OperationError::MissingField { field: id })
        };

        Ok(match self {
            Self::Transfer => AgentRequest::Transfer {
                to: field("address")?,
                amount: field("amount")?,
                symbol: field("symbol")?,
            },
            Self::Swap => AgentRequest::SwapExactInput {
                from_symbol: field("fromSymbol")?,
                amount: field("amount")?,
                to_symbol: field("toSymbol")?,
            },
            Self::Liquidity => AgentRequest::AddLiquidity {
                amount0: field("amount0")?,
                asset0_symbol: field("asset0Symbol")?,
                asset1_symbol: field("asset1Symbol")?,
            },
            Self::Collateral => AgentRequest::SupplyCollateral {
                amount: field("amount")?,
                symbol: field("symbol")?,
            },
            Self::Borrow => AgentRequest::BorrowAsset {
                amount: field("amount")?,
            },
            Self::NaturalLanguage => AgentRequest::Execute {
                command: field("command")?,
            },
        })
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| OperationError::UnknownOperation(key.to_string()))
    }
}

// ============================================================================
// Agent Requests
// ============================================================================

/// A single call into the wallet agent, one variant per agent entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentRequest {
    Transfer {
        to: String,
        amount: String,
        symbol: String,
    },
    SwapExactInput {
        from_symbol: String,
        amount: String,
        to_symbol: String,
    },
    AddLiquidity {
        amount0: String,
        asset0_symbol: String,
        asset1_symbol: String,
    },
    SupplyCollateral {
        amount: String,
        symbol: String,
    },
    BorrowAsset {
        amount: String,
    },
    /// Free-form instruction interpreted by the agent's language model.
    Execute {
        command: String,
    },
}

impl AgentRequest {
    /// Name of the agent entry point this request maps to.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "transfer",
            Self::SwapExactInput { .. } => "swapExactInput",
            Self::AddLiquidity { .. } => "addLiquidity",
            Self::SupplyCollateral { .. } => "supplyCollateral",
            Self::BorrowAsset { .. } => "borrowAsset",
            Self::Execute { .. } => "execute",
        }
    }
}

impl std::fmt::Display for AgentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transfer { to, amount, symbol } => {
                write!(f, "transfer {amount} {symbol} to {to}")
            }
            Self::SwapExactInput {
                from_symbol,
                amount,
                to_symbol,
            } => write!(f, "swap {amount} {from_symbol} for {to_symbol}"),
            Self::AddLiquidity {
                amount0,
                asset0_symbol,
                asset1_symbol,
            } => write!(
                f,
                "add {amount0} {asset0_symbol} of liquidity to the {asset0_symbol}/{asset1_symbol} pool"
            ),
            Self::SupplyCollateral { amount, symbol } => {
                write!(f, "supply {amount} {symbol} as collateral")
            }
            Self::BorrowAsset { amount } => write!(f, "borrow {amount} USDC"),
            Self::Execute { command } => write!(f, "execute \"{command}\""),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
