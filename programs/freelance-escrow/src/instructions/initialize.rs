use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::state::config::{MarketplaceConfig, MAX_PLATFORM_FEE_PERCENTAGE};

// ──────────────────────────────────────────────────────
// Initialize Marketplace — called once by the deployer
//
// Creates the singleton MarketplaceConfig PDA that stores the owner
// authority, the platform fee wallet, the fee percentage, and the
// job/dispute id counters. The `init` constraint ensures this can
// only be called once.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct InitializeMarketplace<'info> {
    /// The deployer; becomes the marketplace owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The marketplace config PDA — singleton, derived from a fixed seed
    #[account(
        init,
        payer = owner,
        space = MarketplaceConfig::LEN,
        seeds = [MarketplaceConfig::SEED],
        bump,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeMarketplace>,
    platform_wallet: Pubkey,
    platform_fee_percentage: u8,
) -> Result<()> {
    require!(
        platform_fee_percentage <= MAX_PLATFORM_FEE_PERCENTAGE,
        EscrowError::FeeTooHigh
    );

    let config = &mut ctx.accounts.config;
    config.owner = ctx.accounts.owner.key();
    config.platform_wallet = platform_wallet;
    config.platform_fee_percentage = platform_fee_percentage;
    config.jobs_count = 0;
    config.disputes_count = 0;
    config.paused = false;
    config.bump = ctx.bumps.config;

    msg!(
        "Marketplace initialized: owner {}, platform wallet {}, fee {}%",
        config.owner,
        config.platform_wallet,
        config.platform_fee_percentage
    );

    Ok(())
}
