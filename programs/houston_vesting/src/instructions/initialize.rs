// programs/houston_vesting/src/instructions/initialize.rs
//
// Populates the four fixed allocation tranches in one shot. Re-initializing
// an already-populated store is rejected rather than silently absorbed,
// since (unlike the supply controller) there is no well-defined idempotent
// re-run here - the tranche schedule is seeded from `now` once and never
// again.

use crate::errors::VestingError;
use crate::events::AllocationInitialized;
use crate::state::{Allocation, AllocationStore};
use anchor_lang::prelude::*;
use houston_core::allocation::{self, ONE_MONTH_SECONDS};

#[derive(Accounts)]
pub struct InitializeAllocation<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + AllocationStore::INIT_SPACE,
        seeds = [AllocationStore::SEED_PREFIX],
        bump
    )]
    pub allocation_store: Account<'info, AllocationStore>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_allocation(ctx: Context<InitializeAllocation>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let store = &mut ctx.accounts.allocation_store;

    require!(!store.is_initialized, VestingError::AllocationAlreadyInit);

    let ecosystem = Allocation {
        name: "ecosystem".to_string(),
        max: allocation::ECOSYSTEM_MAX,
        minted: 0,
        tge_mint: allocation::ECOSYSTEM_MAX / 20, // 5%
        cliff_amount: 0,
        cliff_start: 0,
        cliff_period: 0,
        vesting_amount: allocation::ECOSYSTEM_MAX - allocation::ECOSYSTEM_MAX / 20,
        vesting_start: now,
        vesting_period: 24 * ONE_MONTH_SECONDS,
    };

    let team = Allocation {
        name: "team".to_string(),
        max: allocation::TEAM_MAX,
        minted: 0,
        tge_mint: 0,
        cliff_amount: allocation::TEAM_MAX / 10, // 10%
        cliff_start: now,
        cliff_period: 6 * ONE_MONTH_SECONDS,
        vesting_amount: allocation::TEAM_MAX - allocation::TEAM_MAX / 10,
        vesting_start: now + 6 * ONE_MONTH_SECONDS,
        vesting_period: 36 * ONE_MONTH_SECONDS,
    };

    let advisor = Allocation {
        name: "advisor".to_string(),
        max: allocation::ADVISOR_MAX,
        minted: 0,
        tge_mint: 0,
        cliff_amount: allocation::ADVISOR_MAX / 10, // 10%
        cliff_start: now,
        cliff_period: 6 * ONE_MONTH_SECONDS,
        vesting_amount: allocation::ADVISOR_MAX - allocation::ADVISOR_MAX / 10,
        vesting_start: now + 6 * ONE_MONTH_SECONDS,
        vesting_period: 36 * ONE_MONTH_SECONDS,
    };

    let launchpad = Allocation {
        name: "launchpad".to_string(),
        max: allocation::LAUNCHPAD_MAX,
        minted: 0,
        tge_mint: allocation::LAUNCHPAD_MAX, // 100%
        cliff_amount: 0,
        cliff_start: 0,
        cliff_period: 0,
        vesting_amount: 0,
        vesting_start: 0,
        vesting_period: 0,
    };

    store.admin = ctx.accounts.admin.key();
    store.allocations = vec![ecosystem, team, advisor, launchpad];
    store.is_initialized = true;
    store.bump = ctx.bumps.allocation_store;

    emit!(AllocationInitialized {
        admin: store.admin,
        timestamp: now,
    });

    Ok(())
}
