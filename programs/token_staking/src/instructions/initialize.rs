//! Initialize instruction handler.
//!
//! Creates the vault token account and the mint registry. The vault is a
//! PDA that is its own token authority, so only this program can move
//! tokens out of it; the registry permanently binds the deployment to one
//! mint.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{REGISTRY_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::events::InitializeEvent;
use crate::state::MintRegistry;

/// Accounts required for initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for account creation.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The custodial vault. Holds the reward pool and all staked principal.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = token_vault,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// Registry recording the one mint this deployment accepts.
    #[account(
        init_if_needed,
        payer = signer,
        space = MintRegistry::LEN,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub mint_registry: Account<'info, MintRegistry>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.mint_registry;

    // A registry with a non-default mint was initialized by a prior call.
    require!(
        registry.mint == Pubkey::default(),
        StakingError::AlreadyInitialized
    );

    registry.mint = ctx.accounts.mint.key();

    msg!("Vault initialized at {}", ctx.accounts.token_vault.key());
    msg!("Registered mint {}", registry.mint);

    emit!(InitializeEvent {
        signer: ctx.accounts.signer.key(),
        mint: registry.mint,
        vault: ctx.accounts.token_vault.key(),
    });

    Ok(())
}
