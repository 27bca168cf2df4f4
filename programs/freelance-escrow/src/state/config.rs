use anchor_lang::prelude::*;

use crate::errors::EscrowError;

/// Hard cap on the platform fee, in whole percent.
pub const MAX_PLATFORM_FEE_PERCENTAGE: u8 = 10;

// ──────────────────────────────────────────────────────
// Marketplace Config — singleton PDA, initialized once by the deployer
//
// Stores the owner authority, the platform fee wallet, the fee
// percentage, the pause flag, and the job/dispute id counters.
// Every instruction validates against this config.
// ──────────────────────────────────────────────────────

#[account]
pub struct MarketplaceConfig {
    /// The owner authority — resolves disputes, updates fees, pauses
    pub owner: Pubkey,

    /// The wallet that receives platform fees
    pub platform_wallet: Pubkey,

    /// Platform fee in whole percent (e.g., 2 = 2%), capped at 10
    pub platform_fee_percentage: u8,

    /// Total jobs ever created; the next job id is `jobs_count + 1`
    pub jobs_count: u64,

    /// Total disputes ever raised; the next dispute id is `disputes_count + 1`
    pub disputes_count: u64,

    /// Whether the marketplace is paused (emergency stop)
    pub paused: bool,

    /// PDA bump
    pub bump: u8,
}

impl MarketplaceConfig {
    pub const LEN: usize = 8   // discriminator
        + 32                    // owner
        + 32                    // platform_wallet
        + 1                     // platform_fee_percentage
        + 8                     // jobs_count
        + 8                     // disputes_count
        + 1                     // paused
        + 1                     // bump
        + 64;                   // padding for future fields

    /// The PDA seed — only one config account per program
    pub const SEED: &'static [u8] = b"marketplace_config";

    /// Platform fee for `amount` at the rate currently in effect.
    /// Integer division, rounds down.
    pub fn platform_fee(&self, amount: u64) -> Result<u64> {
        let fee = (amount as u128)
            .checked_mul(self.platform_fee_percentage as u128)
            .ok_or(EscrowError::Overflow)?
            .checked_div(100)
            .ok_or(EscrowError::Overflow)?;
        Ok(fee as u64)
    }

    /// Splits `amount` into (freelancer payout, platform fee).
    pub fn split_payout(&self, amount: u64) -> Result<(u64, u64)> {
        let fee = self.platform_fee(amount)?;
        let payout = amount.checked_sub(fee).ok_or(EscrowError::Overflow)?;
        Ok((payout, fee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(fee: u8) -> MarketplaceConfig {
        MarketplaceConfig {
            owner: Pubkey::new_unique(),
            platform_wallet: Pubkey::new_unique(),
            platform_fee_percentage: fee,
            jobs_count: 0,
            disputes_count: 0,
            paused: false,
            bump: 255,
        }
    }

    #[test]
    fn two_percent_of_one_sol() {
        const ONE_SOL: u64 = 1_000_000_000;
        let (payout, fee) = config(2).split_payout(ONE_SOL).unwrap();
        assert_eq!(fee, 20_000_000); // 0.02 SOL
        assert_eq!(payout, 980_000_000); // 0.98 SOL
    }

    #[test]
    fn fee_rounds_down() {
        // 3% of 10 lamports = 0.3, rounds down to 0
        let (payout, fee) = config(3).split_payout(10).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(payout, 10);

        // 3% of 101 = 3.03, rounds down to 3
        let (payout, fee) = config(3).split_payout(101).unwrap();
        assert_eq!(fee, 3);
        assert_eq!(payout, 98);
    }

    #[test]
    fn payout_plus_fee_is_amount() {
        for amount in [1u64, 99, 100, 101, 1_000_000_007, u64::MAX] {
            for pct in 0..=MAX_PLATFORM_FEE_PERCENTAGE {
                let (payout, fee) = config(pct).split_payout(amount).unwrap();
                assert_eq!(payout + fee, amount);
            }
        }
    }

    #[test]
    fn zero_fee_pays_out_everything() {
        let (payout, fee) = config(0).split_payout(1_000_000_000).unwrap();
        assert_eq!(fee, 0);
        assert_eq!(payout, 1_000_000_000);
    }

    #[test]
    fn max_amount_does_not_overflow() {
        // u128 intermediate keeps u64::MAX * 10 in range
        let fee = config(MAX_PLATFORM_FEE_PERCENTAGE)
            .platform_fee(u64::MAX)
            .unwrap();
        assert_eq!(fee, u64::MAX / 10);
    }
}
