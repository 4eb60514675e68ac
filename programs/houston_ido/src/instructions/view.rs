// programs/houston_ido/src/instructions/view.rs
//
// Read-only helper exposed for the whitelist/ticket module to check sale
// state without duplicating the `now >= start_time` comparison itself.

use crate::state::Pool;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct IsIdoStarted<'info> {
    #[account(
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

pub fn is_ido_started(ctx: Context<IsIdoStarted>) -> Result<bool> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.pool.is_ido_started(clock.unix_timestamp))
}
