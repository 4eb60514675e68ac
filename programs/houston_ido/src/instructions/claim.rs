// programs/houston_ido/src/instructions/claim.rs
//
// One call handles both halves of §4.3.5: the one-shot per-asset refund
// (if the user's non-overflow entitlement exceeded what they actually
// receive) and the release of any newly-vested L. `Pool` is the signer for
// both its offer and payment escrows, the same PDA-is-its-own-authority
// idiom `create_launch` sets up.

use crate::errors::IdoError;
use crate::events::ClaimEvent;
use crate::state::{PaymentStore, Pool, UserInfo};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [Pool::SEED_PREFIX, pool.offered_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [PaymentStore::SEED_PREFIX, pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump = payment_store.bump,
    )]
    pub payment_store: Account<'info, PaymentStore>,

    #[account(
        mut,
        seeds = [UserInfo::SEED_PREFIX, pool.offered_mint.as_ref(), user.key().as_ref()],
        bump = user_info.bump,
    )]
    pub user_info: Account<'info, UserInfo>,

    #[account(address = pool.offered_mint)]
    pub offered_mint: Account<'info, Mint>,

    #[account(address = payment_store.payment_mint)]
    pub payment_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [b"payment_escrow", pool.offered_mint.as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_escrow: Account<'info, TokenAccount>,

    /// The Ledger's `register<P>`/`is_registered<P>` primitive realized as
    /// lazy ATA creation: a user who has never held this payment asset
    /// before still needs somewhere to receive a refund.
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = payment_mint,
        associated_token::authority = user,
    )]
    pub user_payment_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"offer_escrow", pool.offered_mint.as_ref()],
        bump
    )]
    pub offer_escrow: Account<'info, TokenAccount>,

    /// Same lazy-registration rationale as `user_payment_token_account`, for
    /// the offered asset L (spec.md §4.3.5: "if user is not registered for
    /// the offered asset L, register them").
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = offered_mint,
        associated_token::authority = user,
    )]
    pub user_offered_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(now >= ctx.accounts.pool.distribute_start_time, IdoError::ClaimTime);

    let payment_mint = ctx.accounts.payment_mint.key();
    let idx = ctx
        .accounts
        .pool
        .accepted_tokens
        .iter()
        .position(|m| *m == payment_mint)
        .ok_or(IdoError::PaymentToken)?;

    let offered_mint = ctx.accounts.pool.offered_mint;
    let pool_bump = ctx.accounts.pool.bump;
    let pool_seeds: &[&[u8]] = &[Pool::SEED_PREFIX, offered_mint.as_ref(), &[pool_bump]];

    let subscribed = ctx.accounts.user_info.subscribed_amount;
    let non_overflow = ctx.accounts.pool.non_overflow_entitlement(subscribed);
    let overflow = ctx.accounts.pool.overflow_entitlement(subscribed);
    let deposit_in_asset = ctx.accounts.user_info.deposit_amounts[idx];

    if overflow < non_overflow && deposit_in_asset > 0 {
        let refund = ctx.accounts.pool.refund_for_asset(
            non_overflow,
            overflow,
            deposit_in_asset,
            subscribed,
        );
        require!(refund < deposit_in_asset, IdoError::Refund);

        if refund > 0 {
            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.payment_escrow.to_account_info(),
                        to: ctx.accounts.user_payment_token_account.to_account_info(),
                        authority: ctx.accounts.pool.to_account_info(),
                    },
                    &[pool_seeds],
                ),
                refund,
            )?;
        }
        ctx.accounts.user_info.deposit_amounts[idx] = 0;
    }

    if ctx.accounts.user_info.entitled == 0 {
        ctx.accounts.user_info.entitled = overflow.min(non_overflow);
    }

    let claimable = ctx.accounts.pool.vesting_claimable(
        ctx.accounts.user_info.entitled,
        ctx.accounts.user_info.claimed,
        now,
    );

    if claimable > 0 {
        ctx.accounts.user_info.claimed = ctx.accounts.user_info.claimed.saturating_add(claimable);

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.offer_escrow.to_account_info(),
                    to: ctx.accounts.user_offered_token_account.to_account_info(),
                    authority: ctx.accounts.pool.to_account_info(),
                },
                &[pool_seeds],
            ),
            claimable,
        )?;

        emit!(ClaimEvent {
            user: ctx.accounts.user.key(),
            claimed: claimable,
        });
    }

    Ok(())
}
