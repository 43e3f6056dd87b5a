//! Program constants: PDA seeds and the reward policy.

/// Seed for the vault token account PDA (one per deployment).
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed for the mint registry PDA (one per deployment).
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for per-user stake record PDAs.
pub const STAKE_SEED: &[u8] = b"stake";

/// Seed for per-user stake token account PDAs.
pub const TOKEN_SEED: &[u8] = b"token";

/// Number of seconds in a year (365 days).
pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

/// Basis points denominator (100% = 10000 basis points).
pub const BASIS_POINTS_DENOMINATOR: u64 = 10_000;

/// Annual reward rate in basis points (5% APY). Rewards accrue linearly
/// with staking duration; the rate is fixed at build time.
pub const REWARD_RATE_BPS: u64 = 500;
