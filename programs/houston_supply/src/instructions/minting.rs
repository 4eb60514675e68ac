// programs/houston_supply/src/instructions/minting.rs
//
// Capability-gated mint/burn primitives plus the admin-only manual burn.
// `mint` and `burn` are intended to be driven by CPI from code already
// holding the matching capability account, not usually invoked directly
// by end users.

use crate::errors::SupplyError;
use crate::events::{LedgerMinted, ManualBurnEvent, Minted};
use crate::state::{
    BurningCapability, CoinConfig, MintAuthority, MiningCapability, SupplyInfo,
    VestingMintCapability,
};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount};

// =============================================================================
// MINT (capability-gated)
// =============================================================================

#[derive(Accounts)]
pub struct MintHou<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        seeds = [MintAuthority::SEED_PREFIX],
        bump = mint_authority.bump,
    )]
    pub mint_authority: Account<'info, MintAuthority>,

    #[account(
        mut,
        seeds = [SupplyInfo::SEED_PREFIX],
        bump = supply_info.bump,
    )]
    pub supply_info: Account<'info, SupplyInfo>,

    /// Possession of this account is the `MiningCapability` witness. A
    /// deterministic PDA is public once issued, so it is not by itself
    /// unforgeable on this runtime; the admin signature below is what
    /// actually gates the call (design note spec.md §9, option b).
    #[account(
        seeds = [MiningCapability::SEED_PREFIX],
        bump = mining_capability.bump,
    )]
    pub mining_capability: Account<'info, MiningCapability>,

    #[account(
        mut,
        address = coin_config.hou_mint
    )]
    pub hou_mint: Account<'info, Mint>,

    #[account(mut)]
    pub destination_token_account: Account<'info, TokenAccount>,

    #[account(constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn mint(ctx: Context<MintHou>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let info = &mut ctx.accounts.supply_info;

    require!(
        info.total_minted
            .checked_add(amount)
            .map(|total| total <= info.max)
            .unwrap_or(false),
        SupplyError::MaxOut
    );

    info.reconcile(clock.unix_timestamp);

    if amount > 0 {
        require!(amount <= info.acc_supply, SupplyError::PendingAmountNotEnough);
        info.acc_supply -= amount;
        info.total_minted += amount;

        let seeds = &[MintAuthority::SEED_PREFIX, &[ctx.accounts.mint_authority.bump]];
        let signer_seeds = &[&seeds[..]];

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.hou_mint.to_account_info(),
                    to: ctx.accounts.destination_token_account.to_account_info(),
                    authority: ctx.accounts.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(Minted {
        amount,
        acc_supply_remaining: info.acc_supply,
        total_minted: info.total_minted,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

// =============================================================================
// LEDGER MINT (raw primitive, CPI'd into by houston_vesting)
// =============================================================================

/// The Ledger's `mint<T>(amount, &mint_cap)` primitive, scoped to HOU and
/// gated by `VestingMintCapability`. Unlike `mint`, this does not touch
/// `SupplyInfo` - allocation-tranche claims are bounded by their own
/// `Allocation::max`/`minted` watermark, not the mining cap. It is still
/// bounded by HOU's global `MAX_SUPPLY`, checked against the mint's live
/// on-chain supply, so this primitive can never be used to mint past the
/// absolute cap regardless of which program calls it.
#[derive(Accounts)]
pub struct LedgerMint<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        seeds = [MintAuthority::SEED_PREFIX],
        bump = mint_authority.bump,
    )]
    pub mint_authority: Account<'info, MintAuthority>,

    /// Possession of this account is the `VestingMintCapability` witness; as
    /// with `MintHou::mining_capability`, the admin signature below is the
    /// actual gate.
    #[account(
        seeds = [VestingMintCapability::SEED_PREFIX],
        bump = vesting_mint_capability.bump,
    )]
    pub vesting_mint_capability: Account<'info, VestingMintCapability>,

    #[account(
        mut,
        address = coin_config.hou_mint
    )]
    pub hou_mint: Account<'info, Mint>,

    #[account(mut)]
    pub destination_token_account: Account<'info, TokenAccount>,

    #[account(constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn ledger_mint(ctx: Context<LedgerMint>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    require!(
        ctx.accounts
            .hou_mint
            .supply
            .checked_add(amount)
            .map(|total| total <= houston_core::hou_token::MAX_SUPPLY)
            .unwrap_or(false),
        SupplyError::MaxOut
    );

    if amount > 0 {
        let seeds = &[MintAuthority::SEED_PREFIX, &[ctx.accounts.mint_authority.bump]];
        let signer_seeds = &[&seeds[..]];

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.hou_mint.to_account_info(),
                    to: ctx.accounts.destination_token_account.to_account_info(),
                    authority: ctx.accounts.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    emit!(LedgerMinted {
        amount,
        to: ctx.accounts.destination_token_account.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

// =============================================================================
// BURN (capability-gated)
// =============================================================================

#[derive(Accounts)]
pub struct BurnHou<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
    )]
    pub coin_config: Account<'info, CoinConfig>,

    /// Possession of this account is the `BurningCapability` witness.
    #[account(
        seeds = [BurningCapability::SEED_PREFIX],
        bump = burning_capability.bump,
    )]
    pub burning_capability: Account<'info, BurningCapability>,

    #[account(
        mut,
        address = coin_config.hou_mint
    )]
    pub hou_mint: Account<'info, Mint>,

    #[account(mut)]
    pub source_token_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn burn(ctx: Context<BurnHou>, amount: u64) -> Result<()> {
    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.hou_mint.to_account_info(),
                from: ctx.accounts.source_token_account.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )
}

// =============================================================================
// MANUAL BURN (admin self-burn, not capability-gated)
// =============================================================================

#[derive(Accounts)]
pub struct ManualBurn<'info> {
    #[account(
        seeds = [CoinConfig::SEED_PREFIX],
        bump = coin_config.bump,
        constraint = admin.key() == coin_config.admin @ SupplyError::NotOwner
    )]
    pub coin_config: Account<'info, CoinConfig>,

    #[account(
        mut,
        address = coin_config.hou_mint
    )]
    pub hou_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = admin_token_account.owner == admin.key() @ SupplyError::NotOwner
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn manual_burn(ctx: Context<ManualBurn>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.hou_mint.to_account_info(),
                from: ctx.accounts.admin_token_account.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(ManualBurnEvent {
        amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
