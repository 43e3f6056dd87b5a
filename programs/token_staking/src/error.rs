//! Error types for the token staking program.

use anchor_lang::prelude::*;

/// Custom error codes, starting at Anchor's 6000 offset.
#[error_code]
pub enum StakingError {
    /// The mint registry already records a mint; the protocol can only be
    /// initialized once.
    #[msg("Protocol is already initialized")]
    AlreadyInitialized,

    /// The provided mint does not match the registered mint.
    #[msg("Mint does not match the registered staking mint")]
    InvalidMint,

    /// Cannot stake a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// The caller already has an active stake. Recoverable: destake first,
    /// then retry.
    #[msg("Already staked - destake before staking again")]
    IsStaked,

    /// The caller has no active stake to destake.
    #[msg("No active stake for this user")]
    NotStaked,

    /// The caller's token account cannot cover the stake amount.
    #[msg("Insufficient token balance to stake this amount")]
    InsufficientFunds,

    /// The vault cannot cover principal plus reward. The payout is never
    /// truncated to fit.
    #[msg("Vault balance cannot cover principal plus reward")]
    VaultInsufficientFunds,

    /// Signer does not match the stake record owner.
    #[msg("Unauthorized: signer does not match stake record owner")]
    Unauthorized,

    /// Arithmetic overflow during reward or payout calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,
}
