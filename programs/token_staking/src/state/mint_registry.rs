use anchor_lang::prelude::*;

/// Records the single mint this deployment accepts. Written once at
/// `initialize`; a default (all-zero) mint means not yet initialized.
#[account]
#[derive(Default)]
pub struct MintRegistry {
    pub mint: Pubkey,
}

impl MintRegistry {
    pub const LEN: usize = 8 + 32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_matches_serialized_size() {
        let registry = MintRegistry {
            mint: Pubkey::new_unique(),
        };
        let mut buf = Vec::new();
        registry.try_serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), MintRegistry::LEN);
    }
}
