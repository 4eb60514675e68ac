// programs/houston_ido/src/events.rs

use anchor_lang::prelude::*;

/// Emitted once a pool's escrow and first payment store exist.
#[event]
pub struct PoolCreatedEvent {
    pub offered_mint: Pubkey,
    pub total_offer_amount: u64,
    pub max_raised: u64,
    pub sale_price: u128,
}

/// Emitted whenever the pre-open vesting settings change.
#[event]
pub struct VestingSettingsUpdated {
    pub offered_mint: Pubkey,
    pub tge_percent: u64,
    pub vesting_interval: i64,
    pub total_vesting_time: i64,
}

/// Emitted whenever a new accepted payment asset is added.
#[event]
pub struct PaymentTokenAdded {
    pub offered_mint: Pubkey,
    pub payment_mint: Pubkey,
}

/// Emitted on every successful deposit (public or capability path).
#[event]
pub struct DepositEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub payment_mint: Pubkey,
}

/// Emitted on every successful claim with non-zero claimable.
#[event]
pub struct ClaimEvent {
    pub user: Pubkey,
    pub claimed: u64,
}

/// Emitted on a successful treasury withdrawal.
#[event]
pub struct WithdrawPaymentEvent {
    pub to: Pubkey,
    pub amount: u64,
    pub payment_mint: Pubkey,
}

/// Emitted when `SubscribeCapability` is issued.
#[event]
pub struct SubscribeCapabilityIssued {
    pub offered_mint: Pubkey,
    pub admin: Pubkey,
    pub authority: Pubkey,
}
