// programs/houston_ido/src/instructions/withdraw.rs

use crate::errors::IdoError;
use crate::events::WithdrawPaymentEvent;
use crate::state::{PaymentStore, Pool};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct WithdrawPayment<'info> {
    #[account(
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
        constraint = treasury.key() == pool.treasury @ IdoError::Treasury
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [PaymentStore::SEED_PREFIX, pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump = payment_store.bump,
    )]
    pub payment_store: Account<'info, PaymentStore>,

    #[account(address = payment_store.payment_mint)]
    pub payment_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [b"payment_escrow", pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_escrow: Account<'info, TokenAccount>,

    /// Lazy ATA creation, same rationale as `claim`'s recipient accounts:
    /// a treasury that has never held this payment asset before still needs
    /// somewhere to receive the withdrawal (spec.md §4.3.6).
    #[account(
        init_if_needed,
        payer = treasury,
        associated_token::mint = payment_mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn withdraw_payment(ctx: Context<WithdrawPayment>) -> Result<()> {
    let clock = Clock::get()?;
    require!(clock.unix_timestamp > ctx.accounts.pool.end_time, IdoError::WithdrawPaymentTime);
    require!(!ctx.accounts.payment_store.withdrawn, IdoError::Withdrawn);

    let stored = ctx.accounts.payment_escrow.amount;
    let amount = ctx.accounts.pool.withdrawable_amount(stored);
    require!(amount > 0, IdoError::WithdrawZeroAmt);

    ctx.accounts.payment_store.withdrawn = true;

    let offered_mint = ctx.accounts.pool.offered_mint;
    let pool_bump = ctx.accounts.pool.bump;
    let pool_seeds: &[&[u8]] = &[Pool::SEED_PREFIX, offered_mint.as_ref(), &[pool_bump]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payment_escrow.to_account_info(),
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.pool.to_account_info(),
            },
            &[pool_seeds],
        ),
        amount,
    )?;

    emit!(WithdrawPaymentEvent {
        to: ctx.accounts.treasury_token_account.key(),
        amount,
        payment_mint: ctx.accounts.payment_mint.key(),
    });

    Ok(())
}
