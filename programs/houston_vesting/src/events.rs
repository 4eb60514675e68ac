// programs/houston_vesting/src/events.rs

use anchor_lang::prelude::*;

/// Emitted once the four fixed tranches are populated.
#[event]
pub struct AllocationInitialized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted on every successful claim from a tranche.
#[event]
pub struct VestingEvent {
    pub pool_id: u8,
    pub amount: u64,
    pub to: Pubkey,
}
