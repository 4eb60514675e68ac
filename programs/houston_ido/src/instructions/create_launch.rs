// programs/houston_ido/src/instructions/create_launch.rs
//
// Pool creation. `Pool` itself is the escrow authority for both the
// offered-token vault and every payment-asset vault, mirroring how
// apollo_staking's `AphVault` PDA signs for its own vault token account.

use crate::errors::IdoError;
use crate::events::PoolCreatedEvent;
use crate::state::{PaymentStore, Pool};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use houston_core::ido::TGE_PERCENT_DENOM;

#[derive(Accounts)]
pub struct CreateLaunch<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Pool::INIT_SPACE,
        seeds = [Pool::SEED_PREFIX, offered_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init,
        payer = admin,
        space = 8 + PaymentStore::INIT_SPACE,
        seeds = [PaymentStore::SEED_PREFIX, offered_mint.key().as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_store: Account<'info, PaymentStore>,

    pub offered_mint: Account<'info, Mint>,
    pub payment_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        token::mint = offered_mint,
        token::authority = pool,
        seeds = [b"offer_escrow", offered_mint.key().as_ref()],
        bump
    )]
    pub offer_escrow: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = admin,
        token::mint = payment_mint,
        token::authority = pool,
        seeds = [b"payment_escrow", offered_mint.key().as_ref(), payment_mint.key().as_ref()],
        bump
    )]
    pub payment_escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_offered_token_account: Account<'info, TokenAccount>,

    /// CHECK: existence checked in the handler (lamports > 0); never signed by
    /// this instruction and otherwise only recorded as `pool.treasury`.
    pub treasury: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[allow(clippy::too_many_arguments)]
pub fn create_launch(
    ctx: Context<CreateLaunch>,
    start_time: i64,
    end_time: i64,
    distribute_start_time: i64,
    total_offer_coins: u64,
    sale_price: u128,
    max_raised: u64,
    max_raised_per_user: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        Pool::time_order_valid(now, start_time, end_time, distribute_start_time),
        IdoError::TimeOrder
    );

    require!(ctx.accounts.treasury.lamports() > 0, IdoError::Treasury);

    let normalized_max_raised = if max_raised > 0 {
        Pool::normalized_max_raised(total_offer_coins, sale_price).unwrap_or(max_raised)
    } else {
        0
    };

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_offered_token_account.to_account_info(),
                to: ctx.accounts.offer_escrow.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        total_offer_coins,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.admin = ctx.accounts.admin.key();
    pool.treasury = ctx.accounts.treasury.key();
    pool.offered_mint = ctx.accounts.offered_mint.key();
    pool.start_time = start_time;
    pool.end_time = end_time;
    pool.distribute_start_time = distribute_start_time;
    pool.sale_price = sale_price;
    pool.total_offer_amount = total_offer_coins;
    pool.total_subscribed_amount = 0;
    pool.max_raised = normalized_max_raised;
    pool.max_raised_per_user = max_raised_per_user;
    pool.tge_percent = TGE_PERCENT_DENOM;
    pool.vesting_interval = 0;
    pool.total_vesting_time = 0;
    pool.accepted_tokens = vec![ctx.accounts.payment_mint.key()];
    pool.default_decimals = ctx.accounts.payment_mint.decimals;
    pool.bump = ctx.bumps.pool;

    ctx.accounts.payment_store.offered_mint = pool.offered_mint;
    ctx.accounts.payment_store.payment_mint = ctx.accounts.payment_mint.key();
    ctx.accounts.payment_store.withdrawn = false;
    ctx.accounts.payment_store.bump = ctx.bumps.payment_store;

    emit!(PoolCreatedEvent {
        offered_mint: pool.offered_mint,
        total_offer_amount: pool.total_offer_amount,
        max_raised: pool.max_raised,
        sale_price: pool.sale_price,
    });

    Ok(())
}
