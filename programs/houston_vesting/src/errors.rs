// programs/houston_vesting/src/errors.rs

use anchor_lang::prelude::*;

/// Mirrors `houston_core::abort_codes::{ALLOCATION_ALREADY_INIT, PENDING_AMT_NOT_ENOUGH, NOT_OWNER}`.
#[error_code]
pub enum VestingError {
    #[msg("allocation store has already been initialized")]
    AllocationAlreadyInit,

    #[msg("requested amount exceeds pending claimable for this pool")]
    PendingAmountNotEnough,

    #[msg("caller does not hold the allocation-store admin capability")]
    NotOwner,

    #[msg("pool id does not index an existing allocation tranche")]
    InvalidPoolId,
}
