// programs/houston_ido/src/instructions/vesting_settings.rs
//
// Pre-open mutations: permitted only while `!pool.is_ido_started(now)`.

use crate::errors::IdoError;
use crate::events::{PaymentTokenAdded, VestingSettingsUpdated};
use crate::state::{PaymentStore, Pool};
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use houston_core::ido::TGE_PERCENT_DENOM;

#[derive(Accounts)]
pub struct AddVesting<'info> {
    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
        constraint = admin.key() == pool.admin @ IdoError::NotOwner
    )]
    pub pool: Account<'info, Pool>,

    pub admin: Signer<'info>,
}

pub fn add_vesting(
    ctx: Context<AddVesting>,
    tge_percent: u64,
    vesting_interval: i64,
    total_vesting_time: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;

    require!(!pool.is_ido_started(clock.unix_timestamp), IdoError::AlreadyStarted);
    require!(
        tge_percent < TGE_PERCENT_DENOM && total_vesting_time >= vesting_interval,
        IdoError::VestingSetting
    );

    pool.tge_percent = tge_percent;
    pool.vesting_interval = vesting_interval;
    pool.total_vesting_time = total_vesting_time;

    emit!(VestingSettingsUpdated {
        offered_mint: pool.offered_mint,
        tge_percent,
        vesting_interval,
        total_vesting_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddPaymentTokens<'info> {
    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
        constraint = admin.key() == pool.admin @ IdoError::NotOwner
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = admin,
        space = 8 + PaymentStore::INIT_SPACE,
        seeds = [PaymentStore::SEED_PREFIX, pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_store: Account<'info, PaymentStore>,

    #[account(
        init,
        payer = admin,
        token::mint = payment_mint,
        token::authority = pool,
        seeds = [b"payment_escrow", pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_escrow: Account<'info, anchor_spl::token::TokenAccount>,

    pub payment_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, anchor_spl::token::Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn add_payment_tokens(ctx: Context<AddPaymentTokens>) -> Result<()> {
    let clock = Clock::get()?;
    let pool = &mut ctx.accounts.pool;

    require!(!pool.is_ido_started(clock.unix_timestamp), IdoError::AlreadyStarted);
    require!(
        ctx.accounts.payment_mint.decimals == pool.default_decimals,
        IdoError::PaymentDecimals
    );
    // true duplicates are rejected by the `payment_store` account's `init`
    // constraint; this only guards the static capacity of `accepted_tokens`.
    require!(
        pool.accepted_tokens.len() < houston_core::ido::MAX_PAYMENT_TOKENS,
        IdoError::DuplicateTokens
    );

    pool.accepted_tokens.push(ctx.accounts.payment_mint.key());

    ctx.accounts.payment_store.offered_mint = pool.offered_mint;
    ctx.accounts.payment_store.payment_mint = ctx.accounts.payment_mint.key();
    ctx.accounts.payment_store.withdrawn = false;
    ctx.accounts.payment_store.bump = ctx.bumps.payment_store;

    emit!(PaymentTokenAdded {
        offered_mint: pool.offered_mint,
        payment_mint: ctx.accounts.payment_mint.key(),
    });

    Ok(())
}
