// programs/houston_vesting/src/lib.rs
//
// Houston Vesting Program
// ========================
// Four fixed allocation tranches (ecosystem, team, advisor, launchpad),
// each under its own TGE-plus-cliff-plus-linear-vesting schedule with a
// monotone `minted` watermark. Settlement mints HOU via CPI into
// `houston_supply`'s `ledger_mint`, which is independent of the mining
// reserve's `SupplyInfo` cap.

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Hvest1ngCtr1111111111111111111111111111111");

#[program]
pub mod houston_vesting {
    use super::*;

    /// One-shot: populates all four tranches from `now`. Fails if the
    /// store already exists.
    pub fn initialize_allocation(ctx: Context<InitializeAllocation>) -> Result<()> {
        instructions::initialize_allocation(ctx)
    }

    /// Admin-gated claim against tranche `pool_id`. `amount == 0` claims
    /// the full pending amount.
    pub fn claim(ctx: Context<Claim>, pool_id: u8, amount: u64) -> Result<()> {
        instructions::claim(ctx, pool_id, amount)
    }
}
