// programs/houston_ido/src/instructions/capability.rs
//
// Issues `SubscribeCapability`, the one power it confers being bypass of
// `max_raised_per_user` on the deposit path. `authority` is the only real
// gate on that power, since the PDA itself is public and deterministic -
// admin names the whitelist/ticket module address allowed to front
// `deposit_with_cap` calls.

use crate::errors::IdoError;
use crate::events::SubscribeCapabilityIssued;
use crate::state::{Pool, SubscribeCapability};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RequestCap<'info> {
    #[account(
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
        constraint = admin.key() == pool.admin @ IdoError::NotOwner
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + SubscribeCapability::INIT_SPACE,
        seeds = [SubscribeCapability::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump
    )]
    pub subscribe_capability: Account<'info, SubscribeCapability>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn request_cap(ctx: Context<RequestCap>, authority: Pubkey) -> Result<()> {
    ctx.accounts.subscribe_capability.authority = authority;
    ctx.accounts.subscribe_capability.bump = ctx.bumps.subscribe_capability;

    emit!(SubscribeCapabilityIssued {
        offered_mint: ctx.accounts.pool.offered_mint,
        admin: ctx.accounts.admin.key(),
        authority,
    });

    Ok(())
}
