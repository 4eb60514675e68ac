// programs/houston_supply/src/lib.rs
//
// Houston Supply Program
// =======================
// Mint-cap enforcement and linear emission for the HOU mining reserve.
//
// Single state machine: once `SupplyInfo` exists, every `mint` call
// reconciles `acc_supply` to the caller's wall-clock time and then mints
// out of the reconciled reserve, never past `max`. `MiningCapability` /
// `BurningCapability` are capability-witness PDAs issued only to the admin
// named in `CoinConfig`.

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Hsupp1yCtr11111111111111111111111111111111");

#[program]
pub mod houston_supply {
    use super::*;

    /// Idempotently registers the HOU mint and its coin config.
    pub fn initialize_coin(ctx: Context<InitializeCoin>) -> Result<()> {
        instructions::initialize_coin(ctx)
    }

    /// Idempotently creates the mining reserve's `SupplyInfo`.
    pub fn initialize_mining(ctx: Context<InitializeMining>) -> Result<()> {
        instructions::initialize_mining(ctx)
    }

    /// Issues `MiningCapability` to the admin. Admin-gated.
    pub fn authorize_mining(ctx: Context<AuthorizeMining>) -> Result<()> {
        instructions::authorize_mining(ctx)
    }

    /// Issues `BurningCapability` to the admin. Admin-gated.
    pub fn authorize_burning(ctx: Context<AuthorizeBurning>) -> Result<()> {
        instructions::authorize_burning(ctx)
    }

    /// Mints `amount` HOU out of the accrued mining reserve.
    /// Requires `MiningCapability`.
    pub fn mint(ctx: Context<MintHou>, amount: u64) -> Result<()> {
        instructions::mint(ctx, amount)
    }

    /// Burns `amount` HOU from `source_token_account`. Requires
    /// `BurningCapability`.
    pub fn burn(ctx: Context<BurnHou>, amount: u64) -> Result<()> {
        instructions::burn(ctx, amount)
    }

    /// Admin-gated self-burn of the admin's own HOU balance.
    pub fn manual_burn(ctx: Context<ManualBurn>, amount: u64) -> Result<()> {
        instructions::manual_burn(ctx, amount)
    }

    /// Issues `VestingMintCapability` to the admin. Admin-gated.
    pub fn authorize_vesting_mint(ctx: Context<AuthorizeVestingMint>) -> Result<()> {
        instructions::authorize_vesting_mint(ctx)
    }

    /// Mints `amount` HOU directly to `destination_token_account`, with no
    /// `SupplyInfo` bookkeeping. Requires `VestingMintCapability`; called by
    /// `houston_vesting` via CPI to settle allocation-tranche claims.
    pub fn ledger_mint(ctx: Context<LedgerMint>, amount: u64) -> Result<()> {
        instructions::ledger_mint(ctx, amount)
    }
}
