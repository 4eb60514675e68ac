// programs/houston_ido/src/errors.rs

use anchor_lang::prelude::*;

/// Mirrors the `houston_core::abort_codes` table's IDO-engine entries.
#[error_code]
pub enum IdoError {
    #[msg("caller does not hold the pool admin capability")]
    NotOwner,

    #[msg("deposits are only open between start_time and end_time")]
    DepositTime,

    #[msg("a pool already exists for this offered mint")]
    PoolDuplicates,

    #[msg("pool timing must satisfy now <= start < end < distribute")]
    TimeOrder,

    #[msg("deposit would exceed the pool's per-user cap")]
    Cap,

    #[msg("caller is not the configured treasury")]
    Treasury,

    #[msg("claim is only permitted at or after distribute_start_time")]
    ClaimTime,

    #[msg("no prior deposit exists for this user")]
    NoDeposit,

    #[msg("withdrawal is only permitted after end_time")]
    WithdrawPaymentTime,

    #[msg("withdrawable amount is zero")]
    WithdrawZeroAmt,

    #[msg("requested amount has already been claimed")]
    Claimed,

    #[msg("tge_percent must be below the denominator and total_vesting_time must cover one interval")]
    VestingSetting,

    #[msg("a payment store for this asset already exists")]
    DuplicateTokens,

    #[msg("this asset is not among the pool's accepted payment tokens")]
    PaymentToken,

    #[msg("refund amount must be strictly less than the user's deposit")]
    Refund,

    #[msg("payment asset decimals must match the pool's default_decimals")]
    PaymentDecimals,

    #[msg("this payment store has already been withdrawn")]
    Withdrawn,

    #[msg("pre-open settings may only change before start_time")]
    AlreadyStarted,

    #[msg("caller does not hold the authority this SubscribeCapability was issued to")]
    CapabilityUnauthorized,
}
