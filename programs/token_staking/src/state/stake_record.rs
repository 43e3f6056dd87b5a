use anchor_lang::prelude::*;

/// Per-user stake record. Created on first stake and reused across
/// stake/destake cycles, so the address stays stable for a given user.
///
/// `stake_start_time` is only meaningful while `is_staked` is true; destake
/// leaves it stale rather than zeroing it.
#[account]
#[derive(Default)]
pub struct StakeRecord {
    pub owner: Pubkey,
    pub amount_staked: u64,
    pub stake_start_time: i64,
    pub is_staked: bool,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;
}
