//! # Token Staking Program
//!
//! A single-mint staking program backed by one custodial vault. The vault
//! holds both the reward pool and all currently-staked principal; each user
//! gets one reusable stake record tracking amount and start time.
//!
//! ## Features
//! - Deterministic PDA addressing for the vault and all per-user accounts
//! - Linear reward accrual based on staking duration
//! - One active stake per user; destake pays principal plus accrued reward
//! - Safe math with overflow protection
//!
//! The reward pool is funded externally: anyone may transfer tokens of the
//! registered mint into the vault at any time. There is no funding
//! instruction and no admin surface.

use anchor_lang::prelude::*;

declare_id!("GKtxxUvShPBjxx8Mv5rMLzzAt59TzEFcqexkJ1y1QgA1");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

#[program]
pub mod token_staking {
    use super::*;

    /// Initializes the protocol: creates the vault token account and the
    /// mint registry binding the protocol to a single mint.
    ///
    /// The vault starts empty. Funding the reward pool is an ordinary SPL
    /// transfer into the vault, performed outside this program.
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` if the registry already records a mint.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Stakes `amount` tokens into the vault.
    ///
    /// Creates the caller's stake record on first use. A user may hold at
    /// most one active stake; `IsStaked` is recoverable by destaking first.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `amount` is zero
    /// - The caller already has an active stake (`IsStaked`)
    /// - The caller's token balance is below `amount` (`InsufficientFunds`)
    /// - The mint does not match the registry (`InvalidMint`)
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Destakes: pays out principal plus accrued reward from the vault and
    /// resets the caller's stake record.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The caller has no active stake (`NotStaked`)
    /// - The vault cannot cover principal + reward (`VaultInsufficientFunds`)
    /// - The mint does not match the registry (`InvalidMint`)
    pub fn destake(ctx: Context<Destake>) -> Result<()> {
        instructions::destake::handler(ctx)
    }
}
