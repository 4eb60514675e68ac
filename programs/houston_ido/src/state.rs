// programs/houston_ido/src/state.rs

use anchor_lang::prelude::*;
use houston_core::ido::{MAX_PAYMENT_TOKENS, PRICE_PRECISION, TGE_PERCENT_DENOM};
use houston_core::mul_div_floor;

/// One sale, keyed by the offered-token mint. Payment types are carried as
/// `Pubkey` mint addresses rather than a type parameter - see
/// `accepted_tokens`.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub offered_mint: Pubkey,

    pub start_time: i64,
    pub end_time: i64,
    pub distribute_start_time: i64,

    pub sale_price: u128,
    pub total_offer_amount: u64,

    /// Sum of payment-base-unit deposits across every accepted asset.
    pub total_subscribed_amount: u64,
    /// `0` means overflow mode; non-zero means fixed-cap mode, normalized
    /// in `create_launch` so the full offer clears exactly at `sale_price`.
    pub max_raised: u64,
    /// Per-user cap, enforced on the public deposit path only.
    pub max_raised_per_user: u64,

    /// Basis points, denominator `TGE_PERCENT_DENOM`. `== denom` means
    /// 100% claimable at `distribute_start_time`.
    pub tge_percent: u64,
    pub vesting_interval: i64,
    pub total_vesting_time: i64,

    // kept in lockstep with houston_core::ido::MAX_PAYMENT_TOKENS; InitSpace's
    // max_len needs a literal.
    #[max_len(4)]
    pub accepted_tokens: Vec<Pubkey>,
    pub default_decimals: u8,

    pub bump: u8,
}

impl Pool {
    pub const SEED_PREFIX: &'static [u8] = b"pool";

    /// Time-order invariant checked at `create_launch`.
    pub fn time_order_valid(now: i64, start: i64, end: i64, distribute: i64) -> bool {
        now <= start && start < end && end < distribute
    }

    /// `floor(PRICE_PRECISION * total_offer_amount / sale_price)`, the
    /// value `max_raised` is overwritten to in fixed-cap mode unless it
    /// already equals this exactly.
    pub fn normalized_max_raised(total_offer_amount: u64, sale_price: u128) -> Option<u64> {
        mul_div_floor(total_offer_amount, PRICE_PRECISION, sale_price)
    }

    pub fn is_overflow_mode(&self) -> bool {
        self.max_raised == 0
    }

    pub fn is_ido_started(&self, now: i64) -> bool {
        now >= self.start_time
    }

    pub fn is_open(&self, now: i64) -> bool {
        self.start_time <= now && now <= self.end_time
    }

    /// `floor(sale_price * subscribed / PRICE_PRECISION)`.
    pub fn non_overflow_entitlement(&self, subscribed: u64) -> u64 {
        mul_div_floor(subscribed, self.sale_price, PRICE_PRECISION).unwrap_or(0)
    }

    /// `floor(total_offer_amount * subscribed / total_subscribed_amount)`,
    /// defined only in overflow mode; fixed-cap mode's overflow candidate
    /// equals `non_overflow_entitlement`.
    pub fn overflow_entitlement(&self, subscribed: u64) -> u64 {
        if !self.is_overflow_mode() {
            return self.non_overflow_entitlement(subscribed);
        }
        if self.total_subscribed_amount == 0 {
            return 0;
        }
        mul_div_floor(
            self.total_offer_amount,
            subscribed as u128,
            self.total_subscribed_amount as u128,
        )
        .unwrap_or(0)
    }

    /// The amount of payment asset `P` owed back to a user whose
    /// `non_overflow` entitlement exceeds their `overflow` entitlement,
    /// prorated to their deposit `d` in that specific asset.
    pub fn refund_for_asset(
        &self,
        non_overflow: u64,
        overflow: u64,
        deposit_in_asset: u64,
        subscribed_amount: u64,
    ) -> u64 {
        if overflow >= non_overflow || subscribed_amount == 0 {
            return 0;
        }
        let surplus = non_overflow - overflow;
        let surplus_in_payment =
            mul_div_floor(surplus, PRICE_PRECISION, self.sale_price).unwrap_or(0);
        mul_div_floor(
            surplus_in_payment,
            deposit_in_asset as u128,
            subscribed_amount as u128,
        )
        .unwrap_or(0)
    }

    /// Claimable HOU-equivalent L at `now`, given `entitled`/`claimed`.
    /// `entitled == 0` or `now < distribute_start_time` => 0.
    /// `tge_percent == TGE_PERCENT_DENOM` => no vesting, full remainder.
    pub fn vesting_claimable(&self, entitled: u64, claimed: u64, now: i64) -> u64 {
        if entitled == 0 || now < self.distribute_start_time {
            return 0;
        }

        if self.tge_percent >= TGE_PERCENT_DENOM {
            return entitled.saturating_sub(claimed);
        }

        let num_intervals = if self.vesting_interval > 0 {
            now.saturating_sub(self.distribute_start_time) / self.vesting_interval
        } else {
            0
        };
        let tge = mul_div_floor(entitled, self.tge_percent as u128, TGE_PERCENT_DENOM as u128)
            .unwrap_or(0);
        let left = entitled.saturating_sub(tge);
        let passed = (num_intervals.saturating_mul(self.vesting_interval))
            .min(self.total_vesting_time)
            .max(0);
        let vested = if self.total_vesting_time > 0 {
            mul_div_floor(left, passed as u128, self.total_vesting_time as u128).unwrap_or(0)
        } else {
            0
        };
        (tge.saturating_add(vested)).saturating_sub(claimed)
    }

    /// Treasury's withdrawable amount of a payment asset with `stored`
    /// escrowed. Fixed-cap mode withdraws the whole escrow; overflow mode
    /// withholds the pro-rata refund reserve.
    pub fn withdrawable_amount(&self, stored: u64) -> u64 {
        if !self.is_overflow_mode() {
            return stored;
        }
        if self.total_subscribed_amount == 0 {
            return 0;
        }
        let offer_in_payment = mul_div_floor(
            self.total_offer_amount,
            stored as u128,
            self.total_subscribed_amount as u128,
        )
        .unwrap_or(0);
        let allowed =
            mul_div_floor(offer_in_payment, PRICE_PRECISION, self.sale_price).unwrap_or(0);
        stored.min(allowed)
    }
}

/// Escrow of one accepted payment asset for one pool. The live balance is
/// the associated `TokenAccount`; this account only tracks the one-shot
/// `withdrawn` flag.
#[account]
#[derive(InitSpace)]
pub struct PaymentStore {
    pub offered_mint: Pubkey,
    pub payment_mint: Pubkey,
    pub withdrawn: bool,
    pub bump: u8,
}

impl PaymentStore {
    pub const SEED_PREFIX: &'static [u8] = b"payment_store";
}

/// Per-depositor state for one pool.
#[account]
#[derive(InitSpace)]
pub struct UserInfo {
    pub subscribed_amount: u64,
    pub deposit_amounts: [u64; MAX_PAYMENT_TOKENS],
    /// Locked L-base-unit entitlement; `0` until first deposit (fixed-cap)
    /// or first claim (overflow). Immutable once non-zero.
    pub entitled: u64,
    pub claimed: u64,
    pub bump: u8,
}

impl UserInfo {
    pub const SEED_PREFIX: &'static [u8] = b"user_info";
}

/// Witness account authorizing `deposit_with_cap`, bypassing
/// `max_raised_per_user`. The PDA address is deterministic and public once
/// issued, so `authority` - not mere account presence - is what
/// `deposit_with_cap` actually gates on: only the whitelist/ticket module
/// address recorded here at `request_cap` time can front a capability
/// deposit.
#[account]
#[derive(InitSpace)]
pub struct SubscribeCapability {
    pub authority: Pubkey,
    pub bump: u8,
}

impl SubscribeCapability {
    pub const SEED_PREFIX: &'static [u8] = b"subscribe_cap";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_cap_pool() -> Pool {
        Pool {
            admin: Pubkey::default(),
            treasury: Pubkey::default(),
            offered_mint: Pubkey::default(),
            start_time: 0,
            end_time: 100,
            distribute_start_time: 200,
            sale_price: 1_000_000_000_000_000, // 10^15
            total_offer_amount: 1_000_000_000_000, // 10^12
            total_subscribed_amount: 500_000_000,
            max_raised: 1_000_000_000,
            max_raised_per_user: 1_000_000_000,
            tge_percent: TGE_PERCENT_DENOM,
            vesting_interval: 0,
            total_vesting_time: 0,
            accepted_tokens: vec![Pubkey::default()],
            default_decimals: 6,
            bump: 255,
        }
    }

    fn overflow_pool() -> Pool {
        Pool {
            max_raised: 0,
            max_raised_per_user: 3_000_000_000_000,
            total_offer_amount: 1_000_000_000_000, // 10^12
            total_subscribed_amount: 2_000_000_000_000, // Alice + Bob, 10^12 each
            sale_price: 1_000_000_000_000_000, // 10^15
            ..fixed_cap_pool()
        }
    }

    #[test]
    fn time_order_rejects_bad_ordering() {
        assert!(Pool::time_order_valid(0, 10, 20, 30));
        assert!(!Pool::time_order_valid(0, 20, 10, 30));
        assert!(!Pool::time_order_valid(0, 10, 30, 20));
        assert!(!Pool::time_order_valid(40, 10, 20, 30));
    }

    #[test]
    fn fixed_cap_normalization_clears_full_offer() {
        let pool = fixed_cap_pool();
        let normalized = Pool::normalized_max_raised(pool.total_offer_amount, pool.sale_price)
            .unwrap();
        assert_eq!(
            (normalized as u128) * pool.sale_price / PRICE_PRECISION,
            pool.total_offer_amount as u128
        );
    }

    #[test]
    fn fixed_cap_no_vesting_entitlement_scenario() {
        // scenario 2: deposit 5*10^8 USDT at sale_price 10^15.
        let pool = fixed_cap_pool();
        let entitlement = pool.non_overflow_entitlement(500_000_000);
        assert_eq!(entitlement, 500_000_000_000);
    }

    #[test]
    fn overflow_entitlement_and_refund_scenario() {
        // scenario 3: Alice and Bob each deposit 10^12, total subscribed 2*10^12.
        let pool = overflow_pool();
        let alice_subscribed = 1_000_000_000_000u64;
        let overflow = pool.overflow_entitlement(alice_subscribed);
        assert_eq!(overflow, 500_000_000_000);

        let non_overflow = pool.non_overflow_entitlement(alice_subscribed);
        // non_overflow = floor(10^15 * 10^12 / 10^12) = 10^15, far above overflow
        assert_eq!(non_overflow, 1_000_000_000_000_000);
        assert!(overflow < non_overflow);

        let refund = pool.refund_for_asset(non_overflow, overflow, alice_subscribed, alice_subscribed);
        assert!(refund < alice_subscribed);
    }

    #[test]
    fn withdrawable_amount_fixed_cap_is_full_escrow() {
        let pool = fixed_cap_pool();
        assert_eq!(pool.withdrawable_amount(123_456), 123_456);
    }

    #[test]
    fn withdrawable_amount_overflow_withholds_refund_reserve() {
        let pool = overflow_pool();
        let stored = 1_000_000_000_000u64;
        let withdrawable = pool.withdrawable_amount(stored);
        assert!(withdrawable <= stored);
    }

    #[test]
    fn vesting_schedule_ten_percent_tge_over_three_months() {
        let mut pool = fixed_cap_pool();
        pool.tge_percent = 1_000; // 10%
        pool.vesting_interval = houston_core::allocation::ONE_MONTH_SECONDS;
        pool.total_vesting_time = 3 * houston_core::allocation::ONE_MONTH_SECONDS;

        let entitled = 1_000_000u64;
        let first_claim = pool.vesting_claimable(entitled, 0, pool.distribute_start_time);
        assert_eq!(first_claim, entitled / 10);

        let one_month_later =
            pool.distribute_start_time + houston_core::allocation::ONE_MONTH_SECONDS;
        let cumulative = pool.vesting_claimable(entitled, 0, one_month_later);
        // tge + floor(0.9 * entitled * 1/3)
        let tge = entitled / 10;
        let vested = (entitled - tge) / 3;
        assert_eq!(cumulative, tge + vested);

        let three_months_later =
            pool.distribute_start_time + 3 * houston_core::allocation::ONE_MONTH_SECONDS;
        assert_eq!(pool.vesting_claimable(entitled, 0, three_months_later), entitled);
    }

    #[test]
    fn vesting_claimable_is_zero_before_distribute() {
        let pool = fixed_cap_pool();
        assert_eq!(pool.vesting_claimable(1_000, 0, pool.distribute_start_time - 1), 0);
    }
}
