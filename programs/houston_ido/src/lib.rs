// programs/houston_ido/src/lib.rs
//
// Houston IDO Program
// =====================
// Runs one sale per offered-token mint: accepts deposits in one or more
// payment assets, computes entitlement under fixed-cap or overflow pro-rata
// modes, vests claims, refunds oversubscription, and lets the treasury
// withdraw unrefunded payment. `Pool` never mints the offered token - it is
// pre-funded escrow, withdrawn from the admin once at `create_launch` and
// only ever transferred thereafter.

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Hido1aunchCtr111111111111111111111111111111");

#[program]
pub mod houston_ido {
    use super::*;

    /// Creates a pool, withdraws `total_offer_coins` of the offered mint
    /// into escrow, and normalizes `max_raised` in fixed-cap mode so the
    /// full offer clears exactly at `sale_price`.
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
        instructions::create_launch(
            ctx,
            start_time,
            end_time,
            distribute_start_time,
            total_offer_coins,
            sale_price,
            max_raised,
            max_raised_per_user,
        )
    }

    /// Pre-open only: sets the TGE-plus-interval claim vesting schedule.
    pub fn add_vesting(
        ctx: Context<AddVesting>,
        tge_percent: u64,
        vesting_interval: i64,
        total_vesting_time: i64,
    ) -> Result<()> {
        instructions::add_vesting(ctx, tge_percent, vesting_interval, total_vesting_time)
    }

    /// Pre-open only: registers an additional accepted payment asset.
    pub fn add_payment_tokens(ctx: Context<AddPaymentTokens>) -> Result<()> {
        instructions::add_payment_tokens(ctx)
    }

    /// Public deposit path: enforces `max_raised_per_user`.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Capability-gated deposit path: bypasses `max_raised_per_user`.
    /// Requires `SubscribeCapability`.
    pub fn deposit_with_cap(ctx: Context<DepositWithCap>, amount: u64) -> Result<()> {
        instructions::deposit_with_cap(ctx, amount)
    }

    /// Settles one payment asset's refund (if any) and releases newly
    /// vested offered-token claimable. A no-op, not an error, when nothing
    /// is claimable.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    /// Treasury withdrawal of one payment asset, strictly one-shot per
    /// asset. Overflow mode withholds the pro-rata refund reserve.
    pub fn withdraw_payment(ctx: Context<WithdrawPayment>) -> Result<()> {
        instructions::withdraw_payment(ctx)
    }

    /// Issues `SubscribeCapability` for the whitelist/ticket module,
    /// recording `authority` as the only address allowed to front
    /// `deposit_with_cap` calls against it.
    pub fn request_cap(ctx: Context<RequestCap>, authority: Pubkey) -> Result<()> {
        instructions::request_cap(ctx, authority)
    }

    /// Read-only: `now >= pool.start_time`.
    pub fn is_ido_started(ctx: Context<IsIdoStarted>) -> Result<bool> {
        instructions::is_ido_started(ctx)
    }
}
