//! Destake instruction handler.
//!
//! Pays principal plus accrued reward out of the vault and resets the
//! user's stake record.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{
    BASIS_POINTS_DENOMINATOR, REGISTRY_SEED, REWARD_RATE_BPS, SECONDS_PER_YEAR, STAKE_SEED,
    VAULT_SEED,
};
use crate::error::StakingError;
use crate::events::DestakeEvent;
use crate::state::{MintRegistry, StakeRecord};

/// Accounts required for destaking.
#[derive(Accounts)]
pub struct Destake<'info> {
    /// The user destaking.
    #[account(mut)]
    pub signer: Signer<'info>,

    /// The mint registry; the mint account must match it.
    #[account(
        seeds = [REGISTRY_SEED],
        bump,
        constraint = mint_registry.mint == mint.key() @ StakingError::InvalidMint,
    )]
    pub mint_registry: Account<'info, MintRegistry>,

    /// User's stake record.
    #[account(
        mut,
        seeds = [STAKE_SEED, signer.key().as_ref()],
        bump,
        constraint = stake_record.owner == signer.key() @ StakingError::Unauthorized,
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// The custodial vault the payout is drawn from. The vault is its own
    /// token authority, so the transfer is signed with the vault PDA seeds.
    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump,
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// User's own token account receiving principal plus reward.
    #[account(
        mut,
        constraint = user_token_account.mint == mint.key() @ StakingError::InvalidMint,
        constraint = user_token_account.owner == signer.key() @ StakingError::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The staking token mint.
    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Destake>) -> Result<()> {
    let stake_record = &ctx.accounts.stake_record;

    require!(stake_record.is_staked, StakingError::NotStaked);

    let clock = Clock::get()?;
    let elapsed = clock
        .unix_timestamp
        .saturating_sub(stake_record.stake_start_time);

    let reward = calculate_reward(stake_record.amount_staked, elapsed)?;
    let payout = stake_record
        .amount_staked
        .checked_add(reward)
        .ok_or(StakingError::MathOverflow)?;

    // The payout is all-or-nothing; a short vault fails the call rather
    // than truncating the reward.
    require!(
        ctx.accounts.token_vault.amount >= payout,
        StakingError::VaultInsufficientFunds
    );

    let vault_bump = ctx.bumps.token_vault;
    let seeds = &[VAULT_SEED, &[vault_bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.token_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.token_vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer(cpi_ctx, payout)?;

    let principal = stake_record.amount_staked;
    let stake_record = &mut ctx.accounts.stake_record;
    // stake_start_time is left stale; it is meaningless while unstaked.
    stake_record.amount_staked = 0;
    stake_record.is_staked = false;

    msg!(
        "Destaked {} tokens plus {} reward after {}s",
        principal,
        reward,
        elapsed
    );

    emit!(DestakeEvent {
        user: stake_record.owner,
        principal,
        reward,
        vault: ctx.accounts.token_vault.key(),
    });

    Ok(())
}

/// Reward accrued by `amount_staked` over `elapsed_seconds`.
///
/// Linear annual-rate accrual:
/// `reward = amount * REWARD_RATE_BPS * elapsed / (10000 * seconds_per_year)`,
/// computed in u128 to avoid intermediate overflow. Deterministic in the
/// record state and the clock alone, and non-decreasing in both amount and
/// elapsed time; reward at zero elapsed is zero.
pub fn calculate_reward(amount_staked: u64, elapsed_seconds: i64) -> Result<u64> {
    if amount_staked == 0 {
        return Ok(0);
    }

    // Clock skew can make elapsed negative; treat it as no time passed.
    let elapsed = elapsed_seconds.max(0) as u128;

    let denominator = (BASIS_POINTS_DENOMINATOR as u128)
        .checked_mul(SECONDS_PER_YEAR as u128)
        .ok_or(StakingError::MathOverflow)?;

    let reward = (amount_staked as u128)
        .checked_mul(REWARD_RATE_BPS as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(elapsed)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(reward).map_err(|_| error!(StakingError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_zero_elapsed_is_zero() {
        assert_eq!(calculate_reward(1_000_000, 0).unwrap(), 0);
    }

    #[test]
    fn test_reward_zero_amount_is_zero() {
        assert_eq!(calculate_reward(0, SECONDS_PER_YEAR as i64).unwrap(), 0);
    }

    #[test]
    fn test_reward_negative_elapsed_clamps_to_zero() {
        assert_eq!(calculate_reward(1_000_000, -3600).unwrap(), 0);
    }

    #[test]
    fn test_reward_one_year_at_rate() {
        // 10_000 tokens for one year at 500 bps = 500 tokens.
        assert_eq!(
            calculate_reward(10_000, SECONDS_PER_YEAR as i64).unwrap(),
            500
        );
    }

    #[test]
    fn test_reward_half_year_is_half() {
        assert_eq!(
            calculate_reward(10_000, (SECONDS_PER_YEAR / 2) as i64).unwrap(),
            250
        );
    }

    #[test]
    fn test_reward_monotonic_in_elapsed() {
        let amount = 123_456_789;
        let mut prev = 0;
        for elapsed in [0i64, 1, 60, 3600, 86_400, 31_536_000, 315_360_000] {
            let r = calculate_reward(amount, elapsed).unwrap();
            assert!(r >= prev, "reward decreased at elapsed={elapsed}");
            prev = r;
        }
    }

    #[test]
    fn test_reward_monotonic_in_amount() {
        let elapsed = 86_400;
        let mut prev = 0;
        for amount in [1u64, 10, 1_000, 1_000_000, 1_000_000_000] {
            let r = calculate_reward(amount, elapsed).unwrap();
            assert!(r >= prev, "reward decreased at amount={amount}");
            prev = r;
        }
    }

    #[test]
    fn test_reward_sub_unit_rounds_down() {
        // 1 token for 1 second accrues less than one base unit.
        assert_eq!(calculate_reward(1, 1).unwrap(), 0);
    }

    #[test]
    fn test_reward_max_amount_does_not_overflow() {
        // u128 intermediates keep u64::MAX * rate * a year in range; the
        // result converts back to u64 for any sane elapsed span.
        let r = calculate_reward(u64::MAX, SECONDS_PER_YEAR as i64).unwrap();
        assert_eq!(r, u64::MAX / 20);
    }
}
