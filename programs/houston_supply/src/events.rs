// programs/houston_supply/src/events.rs

use anchor_lang::prelude::*;

/// Emitted once the HOU mint and coin config exist.
#[event]
pub struct CoinInitialized {
    pub admin: Pubkey,
    pub hou_mint: Pubkey,
    pub timestamp: i64,
}

/// Emitted once the mining reserve's `SupplyInfo` exists.
#[event]
pub struct MiningInitialized {
    pub admin: Pubkey,
    pub max: u64,
    pub supply_per_sec: u64,
    pub timestamp: i64,
}

/// Emitted when `MiningCapability` is first issued to an admin.
#[event]
pub struct MiningAuthorized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when `BurningCapability` is first issued to an admin.
#[event]
pub struct BurningAuthorized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when `VestingMintCapability` is first issued to an admin.
#[event]
pub struct VestingMintAuthorized {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted on every successful `ledger_mint` (vesting-tranche claims).
#[event]
pub struct LedgerMinted {
    pub amount: u64,
    pub to: Pubkey,
    pub timestamp: i64,
}

/// Emitted on every successful mint.
#[event]
pub struct Minted {
    pub amount: u64,
    pub acc_supply_remaining: u64,
    pub total_minted: u64,
    pub timestamp: i64,
}

/// Emitted on every successful burn (capability-gated or manual).
#[event]
pub struct ManualBurnEvent {
    pub amount: u64,
    pub timestamp: i64,
}
