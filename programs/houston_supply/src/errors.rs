// programs/houston_supply/src/errors.rs

use anchor_lang::prelude::*;

/// Mirrors `houston_core::abort_codes::{NOT_OWNER, MAX_OUT, PENDING_AMT_NOT_ENOUGH}`.
#[error_code]
pub enum SupplyError {
    #[msg("caller does not hold the coin-config admin capability")]
    NotOwner,

    #[msg("mint would push total minted HOU above the mining cap")]
    MaxOut,

    #[msg("requested amount exceeds accrued-but-unminted supply")]
    PendingAmountNotEnough,
}
