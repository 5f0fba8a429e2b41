//! Constants shared across the balance fetcher and report.

/// Asset id of the Fuel base asset (ETH).
///
/// Compare case-insensitively: indexers do not agree on hex casing.
pub const NATIVE_ASSET_ID: &str =
    "0xf8f8b6283d7fa5b672b530cbb84fcccb4ff8dc40f8176ef4544ddb1f1952ad07";

/// Ticker appended to native asset amounts.
pub const NATIVE_ASSET_TICKER: &str = "ETH";

/// Decimal places between base units and display units.
pub const BASE_UNIT_DECIMALS: u32 = 9;

/// Base units per display unit (10^9).
pub const BASE_UNITS_PER_COIN: u128 = 10u128.pow(BASE_UNIT_DECIMALS);

/// Maximum number of balance records requested per query.
pub const BALANCE_PAGE_SIZE: u32 = 100;
