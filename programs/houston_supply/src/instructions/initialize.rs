// programs/houston_supply/src/instructions/initialize.rs
//
// Coin registration, mining-reserve initialization, and capability issuance.
// `initialize_coin` / `initialize_mining` are idempotent: calling them again
// with the same admin is a no-op. `authorize_mining` / `authorize_burning`
// may only ever be called by the admin named in `CoinConfig` - capabilities
// are issued exclusively to that admin, never to an arbitrary caller.

use crate::errors::SupplyError;
use crate::events::{
    BurningAuthorized, CoinInitialized, MiningAuthorized, MiningInitialized, VestingMintAuthorized,
};
use crate::state::{
    BurningCapability, CoinConfig, MintAuthority, MiningCapability, SupplyInfo,
    VestingMintCapability,
};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use houston_core::{hou_token, mining};

// =============================================================================
// INITIALIZE COIN
// =============================================================================

#[derive(Accounts)]
pub struct InitializeCoin<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + CoinConfig::INIT_SPACE,
        seeds = [CoinConfig::SEED_PREFIX],
        bump
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + MintAuthority::INIT_SPACE,
        seeds = [MintAuthority::SEED_PREFIX],
        bump
    )]
    pub mint_authority: Account<'info, MintAuthority>,

    #[account(
        init_if_needed,
        payer = admin,
        mint::decimals = hou_token::DECIMALS,
        mint::authority = mint_authority,
        mint::freeze_authority = mint_authority,
        seeds = [b"hou_mint"],
        bump
    )]
    pub hou_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_coin(ctx: Context<InitializeCoin>) -> Result<()> {
    let clock = Clock::get()?;
    let config = &mut ctx.accounts.coin_config;

    if config.is_initialized {
        require!(
            ctx.accounts.admin.key() == config.admin,
            SupplyError::NotOwner
        );
        return Ok(());
    }

    config.admin = ctx.accounts.admin.key();
    config.hou_mint = ctx.accounts.hou_mint.key();
    config.mint_authority_bump = ctx.bumps.mint_authority;
    config.is_initialized = true;
    config.bump = ctx.bumps.coin_config;

    ctx.accounts.mint_authority.bump = ctx.bumps.mint_authority;

    emit!(CoinInitialized {
        admin: config.admin,
        hou_mint: config.hou_mint,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

// =============================================================================
// INITIALIZE MINING RESERVE
// =============================================================================

#[derive(Accounts)]
pub struct InitializeMining<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
        constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + SupplyInfo::INIT_SPACE,
        seeds = [SupplyInfo::SEED_PREFIX],
        bump
    )]
    pub supply_info: Account<'info, SupplyInfo>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_mining(ctx: Context<InitializeMining>) -> Result<()> {
    let clock = Clock::get()?;
    let info = &mut ctx.accounts.supply_info;

    if info.is_initialized {
        return Ok(());
    }

    info.max = mining::MAX;
    info.supply_per_sec = mining::SUPPLY_PER_SEC;
    info.acc_supply = 0;
    info.last_supply_ts = clock.unix_timestamp;
    info.total_minted = 0;
    info.is_initialized = true;
    info.bump = ctx.bumps.supply_info;

    emit!(MiningInitialized {
        admin: ctx.accounts.admin.key(),
        max: info.max,
        supply_per_sec: info.supply_per_sec,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

// =============================================================================
// CAPABILITY ISSUANCE
// =============================================================================

#[derive(Accounts)]
pub struct AuthorizeMining<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
        constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        seeds = [SupplyInfo::SEED_PREFIX],
        bump = supply_info.bump,
    )]
    pub supply_info: Account<'info, SupplyInfo>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + MiningCapability::INIT_SPACE,
        seeds = [MiningCapability::SEED_PREFIX],
        bump
    )]
    pub mining_capability: Account<'info, MiningCapability>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn authorize_mining(ctx: Context<AuthorizeMining>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.mining_capability.bump = ctx.bumps.mining_capability;

    emit!(MiningAuthorized {
        admin: ctx.accounts.admin.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizeBurning<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
        constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        seeds = [SupplyInfo::SEED_PREFIX],
        bump = supply_info.bump,
    )]
    pub supply_info: Account<'info, SupplyInfo>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + BurningCapability::INIT_SPACE,
        seeds = [BurningCapability::SEED_PREFIX],
        bump
    )]
    pub burning_capability: Account<'info, BurningCapability>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn authorize_burning(ctx: Context<AuthorizeBurning>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.burning_capability.bump = ctx.bumps.burning_capability;

    emit!(BurningAuthorized {
        admin: ctx.accounts.admin.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

/// Issues `VestingMintCapability`, the raw Ledger-mint primitive CPI'd
/// into by `houston_vesting` tranche claims. Independent of
/// `MiningCapability`: see `VestingMintCapability`'s doc comment.
#[derive(Accounts)]
pub struct AuthorizeVestingMint<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
        constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + VestingMintCapability::INIT_SPACE,
        seeds = [VestingMintCapability::SEED_PREFIX],
        bump
    )]
    pub vesting_mint_capability: Account<'info, VestingMintCapability>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn authorize_vesting_mint(ctx: Context<AuthorizeVestingMint>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.vesting_mint_capability.bump = ctx.bumps.vesting_mint_capability;

    emit!(VestingMintAuthorized {
        admin: ctx.accounts.admin.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
