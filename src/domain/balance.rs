//! Balance types for Fuel accounts.
//!
//! An [`AccountSummary`] is built fresh on every fetch and only lives as long
//! as the report rendered from it.

use crate::constants::{BASE_UNIT_DECIMALS, BASE_UNITS_PER_COIN, NATIVE_ASSET_ID, NATIVE_ASSET_TICKER};

use super::FetchError;

// ============================================================================
// Balance Entry
// ============================================================================

/// A single asset balance held by an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    /// Amount in base units.
    pub amount: u128,
    /// Hex identifier of the asset.
    pub asset_id: String,
}

impl BalanceEntry {
    #[must_use]
    pub fn new(amount: u128, asset_id: impl Into<String>) -> Self {
        Self {
            amount,
            asset_id: asset_id.into(),
        }
    }

    /// Builds an entry from the raw strings returned by the indexer.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Parse` if `amount` is not an unsigned integer.
    pub fn from_raw(amount: &str, asset_id: &str) -> Result<Self, FetchError> {
        let parsed = amount.trim().parse::<u128>().map_err(|_| {
            FetchError::parse(format!(
                "balance amount '{amount}' for asset {asset_id} is not an integer"
            ))
        })?;
        Ok(Self::new(parsed, asset_id))
    }

    /// Returns `true` if this entry holds the chain's native asset.
    #[must_use]
    pub fn is_native_asset(&self) -> bool {
        self.asset_id.eq_ignore_ascii_case(NATIVE_ASSET_ID)
    }

    /// Amount in display units, with the ticker appended for the native asset.
    ///
    /// ```text
    /// 1.000000000 ETH
    /// 12,500.250000000
    /// ```
    #[must_use]
    pub fn display_amount(&self) -> String {
        let formatted = format_base_units(self.amount);
        if self.is_native_asset() {
            format!("{formatted} {NATIVE_ASSET_TICKER}")
        } else {
            formatted
        }
    }
}

// ============================================================================
// Account Summary
// ============================================================================

/// Balances owned by one address at one point in time, in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub address: String,
    pub entries: Vec<BalanceEntry>,
}

impl AccountSummary {
    #[must_use]
    pub fn new(address: impl Into<String>, entries: Vec<BalanceEntry>) -> Self {
        Self {
            address: address.into(),
            entries,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats base units as a decimal with exactly nine fractional digits.
///
/// Integer arithmetic only, so large balances keep every digit.
#[must_use]
pub fn format_base_units(amount: u128) -> String {
    let whole = amount / BASE_UNITS_PER_COIN;
    let fraction = amount % BASE_UNITS_PER_COIN;
    format!(
        "{}.{:0width$}",
        format_with_commas(whole),
        fraction,
        width = BASE_UNIT_DECIMALS as usize
    )
}

/// Format a number with commas for thousands separators.
#[must_use]
pub fn format_with_commas(n: u128) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one_coin(1_000_000_000, "1.000000000")]
    #[case::zero(0, "0.000000000")]
    #[case::one_base_unit(1, "0.000000001")]
    #[case::fractional(1_500_000_000, "1.500000000")]
    #[case::thousands(1_234_000_000_001, "1,234.000000001")]
    #[case::beyond_u64(
        100_000_000_000_000_000_000_000_000,
        "100,000,000,000,000,000.000000000"
    )]
    fn test_format_base_units(#[case] amount: u128, #[case] expected: &str) {
        assert_eq!(format_base_units(amount), expected);
    }

    #[rstest]
    #[case::lowercase(NATIVE_ASSET_ID.to_string())]
    #[case::uppercase(NATIVE_ASSET_ID.to_uppercase())]
    #[case::mixed("0xF8f8B6283d7fa5b672b530cbb84fcccb4ff8dc40f8176ef4544ddb1f1952AD07".to_string())]
    fn test_native_asset_case_insensitive(#[case] asset_id: String) {
        let entry = BalanceEntry::new(1_000_000_000, asset_id);
        assert!(entry.is_native_asset());
        assert_eq!(entry.display_amount(), "1.000000000 ETH");
    }

    #[test]
    fn test_other_asset_has_no_ticker() {
        let entry = BalanceEntry::new(2_000_000_000, "0xabc123");
        assert!(!entry.is_native_asset());
        assert_eq!(entry.display_amount(), "2.000000000");
    }

    #[test]
    fn test_from_raw_parses_integer_strings() {
        let entry = BalanceEntry::from_raw("42", "0x01").unwrap();
        assert_eq!(entry.amount, 42);
        assert_eq!(entry.asset_id, "0x01");
    }

    #[rstest]
    #[case::decimal("1.5")]
    #[case::negative("-1")]
    #[case::empty("")]
    #[case::hex("0x10")]
    fn test_from_raw_rejects_non_integers(#[case] amount: &str) {
        let err = BalanceEntry::from_raw(amount, "0x01").unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn test_summary_preserves_entry_order() {
        let summary = AccountSummary::new(
            "0xowner",
            vec![BalanceEntry::new(5, "0xbbb"), BalanceEntry::new(7, "0xaaa")],
        );
        assert!(!summary.is_empty());
        assert_eq!(summary.entries[0].asset_id, "0xbbb");
        assert_eq!(summary.entries[1].asset_id, "0xaaa");
        assert!(AccountSummary::new("0xowner", Vec::new()).is_empty());
    }
}
