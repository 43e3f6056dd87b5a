//! Stake instruction handler.
//!
//! Moves the user's principal into the vault and opens their stake record.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{REGISTRY_SEED, STAKE_SEED, TOKEN_SEED, VAULT_SEED};
use crate::error::StakingError;
use crate::events::StakeEvent;
use crate::state::{MintRegistry, StakeRecord};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The mint registry; the mint account must match it.
    #[account(
        seeds = [REGISTRY_SEED],
        bump,
        constraint = mint_registry.mint == mint.key() @ StakingError::InvalidMint,
    )]
    pub mint_registry: Account<'info, MintRegistry>,

    /// User's stake record (created on first stake, reused afterwards).
    #[account(
        init_if_needed,
        payer = signer,
        space = StakeRecord::LEN,
        seeds = [STAKE_SEED, signer.key().as_ref()],
        bump,
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// User's stake token account, the second per-user sub-record of the
    /// address scheme. Created on first stake; principal itself is held in
    /// the shared vault.
    #[account(
        init_if_needed,
        payer = signer,
        seeds = [TOKEN_SEED, signer.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = token_vault,
    )]
    pub stake_token_account: Account<'info, TokenAccount>,

    /// The custodial vault receiving the principal.
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// User's own token account the principal is drawn from.
    #[account(
        mut,
        constraint = user_token_account.mint == mint.key() @ StakingError::InvalidMint,
        constraint = user_token_account.owner == signer.key() @ StakingError::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let stake_record = &ctx.accounts.stake_record;

    require!(amount > 0, StakingError::ZeroAmount);

    // One active stake per user; destake first to stake again.
    require!(!stake_record.is_staked, StakingError::IsStaked);

    // If the record is being reused, the seeds already pin it to the signer;
    // the owner check covers records created before this call.
    require!(
        stake_record.owner == Pubkey::default() || stake_record.owner == ctx.accounts.signer.key(),
        StakingError::Unauthorized
    );

    require!(
        ctx.accounts.user_token_account.amount >= amount,
        StakingError::InsufficientFunds
    );

    let clock = Clock::get()?;

    // Principal moves into the shared vault. The whole instruction rolls
    // back if the transfer fails, so record and balance stay consistent.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.token_vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let stake_record = &mut ctx.accounts.stake_record;
    stake_record.owner = ctx.accounts.signer.key();
    stake_record.amount_staked = amount;
    stake_record.stake_start_time = clock.unix_timestamp;
    stake_record.is_staked = true;

    msg!("Staked {} tokens at {}", amount, clock.unix_timestamp);

    emit!(StakeEvent {
        user: stake_record.owner,
        amount,
        start_time: stake_record.stake_start_time,
        vault: ctx.accounts.token_vault.key(),
    });

    Ok(())
}
