// programs/houston_vesting/src/state.rs

use anchor_lang::prelude::*;
use houston_core::mul_div_floor;

/// One named allocation tranche: TGE-plus-cliff-plus-linear-vesting over a
/// fixed `max`, with a monotone `minted` watermark.
#[account]
#[derive(InitSpace)]
pub struct Allocation {
    #[max_len(16)]
    pub name: String,
    pub max: u64,
    pub minted: u64,
    pub tge_mint: u64,
    pub cliff_amount: u64,
    pub cliff_start: i64,
    pub cliff_period: i64,
    pub vesting_amount: u64,
    pub vesting_start: i64,
    pub vesting_period: i64,
}

impl Allocation {
    /// `entitled = tge_mint`, plus `cliff_amount` once the cliff has
    /// elapsed, plus the linear share of `vesting_amount` accrued since
    /// `vesting_start`, capped at `vesting_amount` once `vesting_period`
    /// has fully elapsed. Returns `max(0, entitled - minted)`, further
    /// clamped so `minted + claimable` never exceeds `max`.
    pub fn pending_claim(&self, now: i64) -> u64 {
        let mut entitled = self.tge_mint;

        if self.cliff_amount > 0 && now >= self.cliff_start.saturating_add(self.cliff_period) {
            entitled = entitled.saturating_add(self.cliff_amount);
        }

        if self.vesting_amount > 0 && now > self.vesting_start {
            let elapsed = now.saturating_sub(self.vesting_start);
            let vested = if elapsed >= self.vesting_period {
                self.vesting_amount
            } else {
                mul_div_floor(
                    self.vesting_amount,
                    elapsed as u128,
                    self.vesting_period.max(1) as u128,
                )
                .unwrap_or(0)
            };
            entitled = entitled.saturating_add(vested);
        }

        let claimable = entitled.saturating_sub(self.minted);
        let headroom = self.max.saturating_sub(self.minted);
        claimable.min(headroom)
    }
}

/// Fixed ordered list of tranches, indexed by pool id. Initialization is
/// one-shot: re-initializing an already-populated store is a no-op guarded
/// by `is_initialized`.
#[account]
#[derive(InitSpace)]
pub struct AllocationStore {
    pub admin: Pubkey,
    #[max_len(4)]
    pub allocations: Vec<Allocation>,
    pub is_initialized: bool,
    pub bump: u8,
}

impl AllocationStore {
    pub const SEED_PREFIX: &'static [u8] = b"allocation_store";
}

#[cfg(test)]
mod tests {
    use super::*;
    use houston_core::allocation::ONE_MONTH_SECONDS;
    use houston_core::hou_token::ONE_HOU;

    fn ecosystem() -> Allocation {
        Allocation {
            name: "ecosystem".to_string(),
            max: 260_000_000 * ONE_HOU,
            minted: 13_000_000 * ONE_HOU, // tge already claimed
            tge_mint: 13_000_000 * ONE_HOU, // 5% of max
            cliff_amount: 0,
            cliff_start: 0,
            cliff_period: 0,
            vesting_amount: 247_000_000 * ONE_HOU,
            vesting_start: 0,
            vesting_period: 24 * ONE_MONTH_SECONDS,
        }
    }

    fn team() -> Allocation {
        Allocation {
            name: "team".to_string(),
            max: 250_000_000 * ONE_HOU,
            minted: 0,
            tge_mint: 0,
            cliff_amount: 25_000_000 * ONE_HOU, // 10% of max
            cliff_start: 0,
            cliff_period: 6 * ONE_MONTH_SECONDS,
            vesting_amount: 225_000_000 * ONE_HOU,
            vesting_start: 6 * ONE_MONTH_SECONDS,
            vesting_period: 36 * ONE_MONTH_SECONDS,
        }
    }

    fn launchpad() -> Allocation {
        Allocation {
            name: "launchpad".to_string(),
            max: 20_000_000 * ONE_HOU,
            minted: 0,
            tge_mint: 20_000_000 * ONE_HOU, // 100%
            cliff_amount: 0,
            cliff_start: 0,
            cliff_period: 0,
            vesting_amount: 0,
            vesting_start: 0,
            vesting_period: 0,
        }
    }

    #[test]
    fn launchpad_pending_is_max_immediately() {
        let pool = launchpad();
        assert_eq!(pool.pending_claim(0), pool.max);
    }

    #[test]
    fn launchpad_partial_then_remaining_claim() {
        let mut pool = launchpad();
        pool.minted += 1_000;
        assert_eq!(pool.pending_claim(0), pool.max - 1_000);
    }

    #[test]
    fn team_pending_is_zero_before_cliff_end() {
        let pool = team();
        assert_eq!(pool.pending_claim(pool.cliff_period - 1), 0);
    }

    #[test]
    fn team_pending_equals_cliff_amount_at_cliff_end() {
        let pool = team();
        assert_eq!(
            pool.pending_claim(pool.cliff_start + pool.cliff_period),
            pool.cliff_amount
        );
    }

    #[test]
    fn team_pending_one_month_into_vesting() {
        let pool = team();
        let t = pool.vesting_start + ONE_MONTH_SECONDS;
        let expected = pool.cliff_amount + pool.vesting_amount / 36;
        assert_eq!(pool.pending_claim(t), expected);
    }

    #[test]
    fn ecosystem_pending_after_24_months_and_a_second() {
        let pool = ecosystem();
        let t = pool.vesting_start + 24 * ONE_MONTH_SECONDS + 1;
        assert_eq!(pool.pending_claim(t), pool.max - pool.tge_mint - pool.minted);
    }

    #[test]
    fn claim_never_exceeds_max_minus_minted() {
        let mut pool = team();
        pool.minted = pool.max - 1;
        let t = pool.vesting_start + pool.vesting_period + 1000;
        assert_eq!(pool.pending_claim(t), 1);
    }
}
