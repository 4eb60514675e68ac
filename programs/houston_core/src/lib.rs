// programs/houston_core/src/lib.rs
//
// Houston Core - Shared Constants
// ================================
//
// This crate provides:
// - HOU token metadata and supply caps
// - Mining emission-rate constants
// - Allocation-vesting tranche sizing
// - Shared precision constants used by the IDO pricing/vesting math
//
// HOU is a fixed-cap SPL token. Total circulating supply is the sum of
// the mining reserve (emitted linearly over three years) plus the four
// allocation tranches vested by `houston_vesting`. Nothing else mints HOU.

/// HOU token identity and absolute supply caps.
pub mod hou_token {
    /// Token decimals.
    pub const DECIMALS: u8 = 8;

    /// Display name.
    pub const NAME: &str = "Houston Token";

    /// Ticker.
    pub const SYMBOL: &str = "HOU";

    /// One whole HOU in base units.
    pub const ONE_HOU: u64 = 100_000_000; // 10^8

    /// Absolute cap on total HOU that will ever exist: 10^9 HOU.
    pub const MAX_SUPPLY: u64 = 1_000_000_000 * ONE_HOU;
}

/// Mining-reserve emission schedule.
pub mod mining {
    use super::hou_token::ONE_HOU;

    /// Absolute cap on cumulative mining emission: 4.5 * 10^8 HOU.
    pub const MAX: u64 = 450_000_000 * ONE_HOU;

    /// Linear emission window: 3 years, in seconds.
    pub const EMISSION_WINDOW_SECONDS: i64 = 3 * 365 * 24 * 3600;

    /// Fixed linear emission rate, base units per second.
    ///
    /// `MAX / EMISSION_WINDOW_SECONDS` truncates; the truncation defines
    /// `supply_per_sec` exactly, it is not an approximation of some other
    /// rate.
    pub const SUPPLY_PER_SEC: u64 = MAX / EMISSION_WINDOW_SECONDS as u64;
}

/// Allocation-vester tranche sizing.
///
/// One vesting month is `365 * 24 * 3600 / 12` seconds, not a calendar
/// month - vesting math never touches calendar arithmetic.
pub mod allocation {
    use super::hou_token::ONE_HOU;

    /// Seconds in one vesting month: `365 * 24 * 3600 / 12`.
    pub const ONE_MONTH_SECONDS: i64 = 365 * 24 * 3600 / 12;

    pub const ECOSYSTEM_MAX: u64 = 260_000_000 * ONE_HOU;
    pub const TEAM_MAX: u64 = 250_000_000 * ONE_HOU;
    pub const ADVISOR_MAX: u64 = 20_000_000 * ONE_HOU;
    pub const LAUNCHPAD_MAX: u64 = 20_000_000 * ONE_HOU;

    /// Number of tranches in the store; fixed and never grows.
    pub const TRANCHE_COUNT: usize = 4;

    pub const ECOSYSTEM_IDX: u8 = 0;
    pub const TEAM_IDX: u8 = 1;
    pub const ADVISOR_IDX: u8 = 2;
    pub const LAUNCHPAD_IDX: u8 = 3;
}

/// IDO pricing / vesting precision constants.
pub mod ido {
    /// Fixed-point scale for `sale_price` ratio arithmetic.
    pub const PRICE_PRECISION: u128 = 1_000_000_000_000; // 10^12

    /// Denominator for `tge_percent` basis points (not strictly bps: 1 = 1/10000).
    pub const TGE_PERCENT_DENOM: u64 = 10_000;

    /// Maximum distinct payment assets a single pool may accept.
    ///
    /// An on-chain account needs a static bound on `accepted_tokens`; see
    /// DESIGN.md for the chosen value.
    pub const MAX_PAYMENT_TOKENS: usize = 4;
}

/// Abort-code cross-reference for the on-chain error tables.
///
/// Anchor auto-numbers `#[error_code]` variants starting at 6000 per
/// program, so these are documentation only - each program's `errors.rs`
/// names its variants after this table rather than reusing the raw codes.
pub mod abort_codes {
    pub const NOT_OWNER: u32 = 1;
    pub const MAX_OUT: u32 = 2;
    pub const DEPOSIT_TIME: u32 = 3;
    pub const SUPPLY_INFO: u32 = 4;
    pub const POOL_DUPLICATES: u32 = 5;
    pub const TIME_ORDER: u32 = 6;
    pub const CAP: u32 = 7;
    pub const TREASURY: u32 = 8;
    pub const CLAIM_TIME: u32 = 9;
    pub const NO_DEPOSIT: u32 = 10;
    pub const WITHDRAW_PAYMENT_TIME: u32 = 11;
    pub const WITHDRAW_ZERO_AMT: u32 = 12;
    pub const CLAIMED: u32 = 13;
    pub const VESTING_SETTING: u32 = 14;
    pub const DUPLICATE_TOKENS: u32 = 15;
    pub const PAYMENT_TOKEN: u32 = 16;
    pub const REFUND: u32 = 19;
    pub const PAYMENT_DECIMALS: u32 = 20;
    pub const WITHDRAWN: u32 = 21;
    pub const PENDING_AMT_NOT_ENOUGH: u32 = 5;
    pub const ALLOCATION_ALREADY_INIT: u32 = 6;
}

/// `floor(a * b / c)` with a 128-bit intermediate, the form every ratio
/// computation here (`sale_price * amount / PRICE_PRECISION`,
/// `vesting_amount * elapsed / vesting_period`, ...) is built from.
pub fn mul_div_floor(a: u64, b: u128, c: u128) -> Option<u64> {
    let product = (a as u128).checked_mul(b)?;
    let result = product.checked_div(c)?;
    u64::try_from(result).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mining_rate_is_exact_truncated_division() {
        assert_eq!(
            mining::SUPPLY_PER_SEC,
            mining::MAX / mining::EMISSION_WINDOW_SECONDS as u64
        );
    }

    #[test]
    fn allocation_tranches_sum_within_mining_independent_cap() {
        let total = allocation::ECOSYSTEM_MAX
            + allocation::TEAM_MAX
            + allocation::ADVISOR_MAX
            + allocation::LAUNCHPAD_MAX;
        assert_eq!(total, 550_000_000 * hou_token::ONE_HOU);
    }

    #[test]
    fn mul_div_floor_truncates() {
        // 10 * 3 / 4 = 7.5 -> 7
        assert_eq!(mul_div_floor(10, 3, 4), Some(7));
    }

    #[test]
    fn mul_div_floor_overflow_guard() {
        assert_eq!(mul_div_floor(u64::MAX, u128::MAX, 1), None);
    }
}
