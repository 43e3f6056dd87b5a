//! Client-side address derivation.
//!
//! Every account the program owns lives at a PDA derived from fixed seeds,
//! so clients can precompute addresses without any on-chain lookup. These
//! helpers are pure functions of the program id (and, for per-user accounts,
//! the user's key); the instruction account structs enforce the same seeds.

use anchor_lang::prelude::*;

use crate::constants::{REGISTRY_SEED, STAKE_SEED, TOKEN_SEED, VAULT_SEED};

/// Address of the vault token account.
pub fn find_vault_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], &crate::ID)
}

/// Address of the mint registry.
pub fn find_registry_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED], &crate::ID)
}

/// Address of a user's stake record.
pub fn find_stake_record_address(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_SEED, user.as_ref()], &crate::ID)
}

/// Address of a user's stake token account.
pub fn find_stake_token_address(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_SEED, user.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivations_are_deterministic() {
        let user = Pubkey::new_unique();
        assert_eq!(find_vault_address(), find_vault_address());
        assert_eq!(find_registry_address(), find_registry_address());
        assert_eq!(
            find_stake_record_address(&user),
            find_stake_record_address(&user)
        );
        assert_eq!(
            find_stake_token_address(&user),
            find_stake_token_address(&user)
        );
    }

    #[test]
    fn test_derivations_match_raw_seeds() {
        let user = Pubkey::new_unique();
        assert_eq!(
            find_vault_address(),
            Pubkey::find_program_address(&[b"vault"], &crate::ID)
        );
        assert_eq!(
            find_stake_record_address(&user),
            Pubkey::find_program_address(&[b"stake", user.as_ref()], &crate::ID)
        );
        assert_eq!(
            find_stake_token_address(&user),
            Pubkey::find_program_address(&[b"token", user.as_ref()], &crate::ID)
        );
    }

    #[test]
    fn test_per_user_addresses_are_distinct() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_ne!(
            find_stake_record_address(&a).0,
            find_stake_record_address(&b).0
        );
        assert_ne!(
            find_stake_token_address(&a).0,
            find_stake_token_address(&b).0
        );
        // The two sub-records of one user never collide either.
        assert_ne!(
            find_stake_record_address(&a).0,
            find_stake_token_address(&a).0
        );
    }

    #[test]
    fn test_singleton_addresses_are_distinct() {
        assert_ne!(find_vault_address().0, find_registry_address().0);
    }
}
