// programs/houston_vesting/src/instructions/claim.rs
//
// Admin-gated claim against one tranche's pending schedule. Unlike the
// supply controller's `mint`, there is no local SupplyInfo reconciliation -
// `Allocation::pending_claim` is purely a function of wall-clock time and
// the tranche's own watermark. Settlement is a CPI into `houston_supply`'s
// `ledger_mint`, which holds the only HOU mint authority on chain.

use crate::errors::VestingError;
use crate::events::VestingEvent;
use crate::state::AllocationStore;
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use houston_supply::cpi::accounts::LedgerMint;
use houston_supply::cpi::ledger_mint;
use houston_supply::program::HoustonSupply;
use houston_supply::state::{CoinConfig, MintAuthority, VestingMintCapability};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [AllocationStore::SEED_PREFIX],
        bump = allocation_store.bump,
        constraint = admin.key() == allocation_store.admin @ VestingError::NotOwner
    )]
    pub allocation_store: Account<'info, AllocationStore>,

    pub admin: Signer<'info>,

    /// Typed as `houston_supply`'s own account, so Anchor's owner check
    /// already confirms it belongs to that program; seeds are re-verified
    /// again inside the CPI'd `ledger_mint` handler itself. `ledger_mint`
    /// requires its own admin signer, so this deployment's two programs
    /// must share one admin address for the CPI to authorize.
    #[account(constraint = coin_config.admin == admin.key() @ VestingError::NotOwner)]
    pub coin_config: Account<'info, CoinConfig>,
    pub mint_authority: Account<'info, MintAuthority>,
    pub vesting_mint_capability: Account<'info, VestingMintCapability>,

    #[account(mut, address = coin_config.hou_mint)]
    pub hou_mint: Account<'info, anchor_spl::token::Mint>,

    #[account(mut)]
    pub destination_token_account: Account<'info, TokenAccount>,

    pub houston_supply_program: Program<'info, HoustonSupply>,
    pub token_program: Program<'info, Token>,
}

pub fn claim(ctx: Context<Claim>, pool_id: u8, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let store = &mut ctx.accounts.allocation_store;
    let pool = store
        .allocations
        .get_mut(pool_id as usize)
        .ok_or(VestingError::InvalidPoolId)?;

    let pending = pool.pending_claim(now);
    require!(amount <= pending, VestingError::PendingAmountNotEnough);

    let claimed = if amount == 0 { pending } else { amount };
    pool.minted = pool.minted.saturating_add(claimed);

    let cpi_program = ctx.accounts.houston_supply_program.to_account_info();
    let cpi_accounts = LedgerMint {
        coin_config: ctx.accounts.coin_config.to_account_info(),
        mint_authority: ctx.accounts.mint_authority.to_account_info(),
        vesting_mint_capability: ctx.accounts.vesting_mint_capability.to_account_info(),
        hou_mint: ctx.accounts.hou_mint.to_account_info(),
        destination_token_account: ctx.accounts.destination_token_account.to_account_info(),
        admin: ctx.accounts.admin.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };
    ledger_mint(CpiContext::new(cpi_program, cpi_accounts), claimed)?;

    emit!(VestingEvent {
        pool_id,
        amount: claimed,
        to: ctx.accounts.destination_token_account.key(),
    });

    Ok(())
}
