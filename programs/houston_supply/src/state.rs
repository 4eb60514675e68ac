// programs/houston_supply/src/state.rs

use anchor_lang::prelude::*;

/// Coin-level configuration: the Rust stand-in for the Move `Caps<HOU>`
/// triple. Owns the HOU mint and names the admin who may obtain mining /
/// burning capabilities.
/// PDA seeds: ["coin_config"]
#[account]
#[derive(InitSpace)]
pub struct CoinConfig {
    pub admin: Pubkey,
    pub hou_mint: Pubkey,
    pub mint_authority_bump: u8,
    pub is_initialized: bool,
    pub bump: u8,
}

impl CoinConfig {
    pub const SEED_PREFIX: &'static [u8] = b"coin_config";
}

/// PDA that holds HOU's mint and freeze authority. Carries no data beyond
/// its bump; it exists purely to be a signer for mint/burn CPIs.
/// PDA seeds: ["mint_authority"]
#[account]
#[derive(InitSpace)]
pub struct MintAuthority {
    pub bump: u8,
}

impl MintAuthority {
    pub const SEED_PREFIX: &'static [u8] = b"mint_authority";
}

/// Linear mining-emission accrual state.
/// PDA seeds: ["supply_info"]
#[account]
#[derive(InitSpace)]
pub struct SupplyInfo {
    /// Absolute cap on cumulative mining emission.
    pub max: u64,
    /// Constant linear rate, base units per second.
    pub supply_per_sec: u64,
    /// Base units accrued but not yet minted.
    pub acc_supply: u64,
    /// Last time `acc_supply` was reconciled.
    pub last_supply_ts: i64,
    /// Cumulative amount minted so far; `total_minted <= max` always.
    pub total_minted: u64,
    pub is_initialized: bool,
    pub bump: u8,
}

impl SupplyInfo {
    pub const SEED_PREFIX: &'static [u8] = b"supply_info";

    /// `acc_supply + supply_per_sec * (now - last_supply_ts)`, clamped so
    /// `total_minted + pending` never exceeds `max`.
    pub fn pending_supply(&self, now: i64) -> u64 {
        let elapsed = now.saturating_sub(self.last_supply_ts).max(0) as u128;
        let linear = (self.supply_per_sec as u128).saturating_mul(elapsed);
        let pending = (self.acc_supply as u128).saturating_add(linear);
        let remaining_cap = (self.max as u128).saturating_sub(self.total_minted as u128);
        pending.min(remaining_cap).min(u64::MAX as u128) as u64
    }

    /// Reconciles `acc_supply`/`last_supply_ts` to `now` without minting.
    pub fn reconcile(&mut self, now: i64) {
        self.acc_supply = self.pending_supply(now);
        self.last_supply_ts = now;
    }
}

/// Empty witness account. Its existence authorizes `mint`.
/// PDA seeds: ["mining_cap"]
#[account]
#[derive(InitSpace)]
pub struct MiningCapability {
    pub bump: u8,
}

impl MiningCapability {
    pub const SEED_PREFIX: &'static [u8] = b"mining_cap";
}

/// Empty witness account. Its existence authorizes `burn`.
/// PDA seeds: ["burning_cap"]
#[account]
#[derive(InitSpace)]
pub struct BurningCapability {
    pub bump: u8,
}

impl BurningCapability {
    pub const SEED_PREFIX: &'static [u8] = b"burning_cap";
}

/// Empty witness account. Its existence authorizes `ledger_mint`, the
/// accounting-free mint primitive CPI'd into by `houston_vesting`'s
/// tranche claims. Kept distinct from `MiningCapability` because
/// allocation-tranche minting and mining-reserve emission are
/// independent authorities over the same HOU mint: allocation-tranche
/// minting and mining-reserve emission never call into one another and
/// carry separate caps.
/// PDA seeds: ["vesting_mint_cap"]
#[account]
#[derive(InitSpace)]
pub struct VestingMintCapability {
    pub bump: u8,
}

impl VestingMintCapability {
    pub const SEED_PREFIX: &'static [u8] = b"vesting_mint_cap";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supply(max: u64, supply_per_sec: u64) -> SupplyInfo {
        SupplyInfo {
            max,
            supply_per_sec,
            acc_supply: 0,
            last_supply_ts: 0,
            total_minted: 0,
            is_initialized: true,
            bump: 255,
        }
    }

    #[test]
    fn linear_emission_before_cap() {
        let rate = houston_core::mining::SUPPLY_PER_SEC;
        let info = supply(houston_core::mining::MAX, rate);
        let t = 1_000_000;
        assert_eq!(info.pending_supply(t), rate * t as u64);
    }

    #[test]
    fn linear_emission_clamps_at_cap() {
        let rate = houston_core::mining::SUPPLY_PER_SEC;
        let info = supply(houston_core::mining::MAX, rate);
        let t = houston_core::mining::EMISSION_WINDOW_SECONDS + 60;
        assert_eq!(info.pending_supply(t), houston_core::mining::MAX);
    }

    #[test]
    fn reconcile_advances_last_supply_ts_and_absorbs_linear_part() {
        let mut info = supply(1_000, 10);
        info.reconcile(10);
        assert_eq!(info.acc_supply, 100);
        assert_eq!(info.last_supply_ts, 10);

        // a second reconcile five seconds later only adds the new delta
        info.reconcile(15);
        assert_eq!(info.acc_supply, 150);
    }

    #[test]
    fn conservation_minted_plus_pending_equals_elapsed_emission() {
        let rate = houston_core::mining::SUPPLY_PER_SEC;
        let mut info = supply(houston_core::mining::MAX, rate);
        let t = 5_000_000;
        // simulate minting 1/3 of what accrued at t
        info.reconcile(t);
        let minted_now = info.acc_supply / 3;
        info.acc_supply -= minted_now;
        info.total_minted += minted_now;

        assert_eq!(
            info.total_minted as u128 + info.pending_supply(t) as u128,
            rate as u128 * t as u128
        );
    }

    #[test]
    fn pending_is_zero_once_fully_minted() {
        let rate = houston_core::mining::SUPPLY_PER_SEC;
        let mut info = supply(houston_core::mining::MAX, rate);
        let t = houston_core::mining::EMISSION_WINDOW_SECONDS + 60;
        info.reconcile(t);
        info.total_minted = info.acc_supply;
        info.acc_supply = 0;
        assert_eq!(info.total_minted, houston_core::mining::MAX);
        assert_eq!(info.pending_supply(t), 0);
    }
}
