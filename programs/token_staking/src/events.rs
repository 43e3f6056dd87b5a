use anchor_lang::prelude::*;

#[event]
pub struct InitializeEvent {
    pub signer: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct StakeEvent {
    pub user: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub vault: Pubkey,
}

#[event]
pub struct DestakeEvent {
    pub user: Pubkey,
    pub principal: u64,
    pub reward: u64,
    pub vault: Pubkey,
}
