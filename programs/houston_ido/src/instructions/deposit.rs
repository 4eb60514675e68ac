// programs/houston_ido/src/instructions/deposit.rs
//
// Both entry points share `deposit_internal`; the public path additionally
// asserts the per-user cap, the capability path does not.

use crate::errors::IdoError;
use crate::events::DepositEvent;
use crate::state::{PaymentStore, Pool, SubscribeCapability, UserInfo};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

fn deposit_internal<'info>(
    pool: &mut Account<'info, Pool>,
    user_info: &mut Account<'info, UserInfo>,
    payment_mint: Pubkey,
    user: Pubkey,
    amount: u64,
    now: i64,
) -> Result<u64> {
    require!(pool.is_open(now), IdoError::DepositTime);

    let idx = pool
        .accepted_tokens
        .iter()
        .position(|m| *m == payment_mint)
        .ok_or(IdoError::PaymentToken)?;

    let mut amount = amount;
    if !pool.is_overflow_mode() {
        require!(pool.max_raised > pool.total_subscribed_amount, IdoError::Cap);
        let remaining = pool.max_raised - pool.total_subscribed_amount;
        if remaining < amount {
            amount = remaining;
        }
    }

    pool.total_subscribed_amount = pool.total_subscribed_amount.saturating_add(amount);

    user_info.deposit_amounts[idx] = user_info.deposit_amounts[idx].saturating_add(amount);
    user_info.subscribed_amount = user_info.subscribed_amount.saturating_add(amount);

    if !pool.is_overflow_mode() {
        user_info.entitled = pool.non_overflow_entitlement(user_info.subscribed_amount);
    }

    emit!(DepositEvent {
        user,
        amount,
        payment_mint,
    });

    Ok(user_info.subscribed_amount)
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [PaymentStore::SEED_PREFIX, pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump = payment_store.bump,
    )]
    pub payment_store: Account<'info, PaymentStore>,

    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserInfo::INIT_SPACE,
        seeds = [UserInfo::SEED_PREFIX, pool.offered_mint.as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,

    /// CHECK: equality with `payment_store.payment_mint` is enforced in the handler.
    pub payment_mint: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"payment_escrow", pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_payment_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let user_key = ctx.accounts.user.key();
    let payment_mint_key = ctx.accounts.payment_mint.key();

    let subscribed = deposit_internal(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_info,
        payment_mint_key,
        user_key,
        amount,
        now,
    )?;

    require!(
        subscribed <= ctx.accounts.pool.max_raised_per_user,
        IdoError::Cap
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_payment_token_account.to_account_info(),
                to: ctx.accounts.payment_escrow.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.user_info.bump = ctx.bumps.user_info;

    Ok(())
}

#[derive(Accounts)]
pub struct DepositWithCap<'info> {
    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    /// Presence of this PDA is not the gate - its address is deterministic
    /// and public once `request_cap` has run once. `payer` must match the
    /// `authority` recorded on it, so only the whitelist/ticket module
    /// `request_cap` actually named can front a capability deposit.
    #[account(
        seeds = [SubscribeCapability::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = subscribe_capability.bump,
        constraint = payer.key() == subscribe_capability.authority @ IdoError::CapabilityUnauthorized,
    )]
    pub subscribe_capability: Account<'info, SubscribeCapability>,

    #[account(
        mut,
        seeds = [PaymentStore::SEED_PREFIX, pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump = payment_store.bump,
    )]
    pub payment_store: Account<'info, PaymentStore>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + UserInfo::INIT_SPACE,
        seeds = [UserInfo::SEED_PREFIX, pool.offered_mint.as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_info: Account<'info, UserInfo>,

    /// CHECK: equality with `payment_store.payment_mint` is enforced in the handler.
    pub payment_mint: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"payment_escrow", pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_payment_token_account: Account<'info, TokenAccount>,

    /// CHECK: the depositor on whose behalf the capability holder acts; not a signer here.
    pub user: UncheckedAccount<'info>,

    /// The capability-holding caller, who fronts rent and authorizes the transfer
    /// out of `user_payment_token_account` (e.g. a delegate or the user themself).
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn deposit_with_cap(ctx: Context<DepositWithCap>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let user_key = ctx.accounts.user.key();
    let payment_mint_key = ctx.accounts.payment_mint.key();

    deposit_internal(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_info,
        payment_mint_key,
        user_key,
        amount,
        now,
    )?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_payment_token_account.to_account_info(),
                to: ctx.accounts.payment_escrow.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.user_info.bump = ctx.bumps.user_info;

    Ok(())
}
