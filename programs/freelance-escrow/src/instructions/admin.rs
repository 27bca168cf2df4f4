use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::{OwnershipTransferred, PauseToggled, PlatformFeeUpdated};
use crate::state::config::{MarketplaceConfig, MAX_PLATFORM_FEE_PERCENTAGE};

// ──────────────────────────────────────────────────────
// Admin — owner-only configuration changes
//
// Deliberately simple: single owner, no multi-sig, no timelock.
// Fee updates apply to jobs approved afterwards; in-flight jobs
// settle at the rate in effect when they are approved or resolved.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct AdminAction<'info> {
    /// The current marketplace owner
    #[account(
        constraint = owner.key() == config.owner @ EscrowError::UnauthorizedOwner,
    )]
    pub owner: Signer<'info>,

    /// The marketplace config PDA
    #[account(
        mut,
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, MarketplaceConfig>,
}

pub fn update_platform_fee_handler(
    ctx: Context<AdminAction>,
    new_percentage: u8,
) -> Result<()> {
    require!(
        new_percentage <= MAX_PLATFORM_FEE_PERCENTAGE,
        EscrowError::FeeTooHigh
    );

    let config = &mut ctx.accounts.config;
    let previous = config.platform_fee_percentage;
    config.platform_fee_percentage = new_percentage;

    msg!("Platform fee updated: {}% -> {}%", previous, new_percentage);
    emit!(PlatformFeeUpdated {
        previous,
        current: new_percentage,
    });

    Ok(())
}

pub fn pause_handler(ctx: Context<AdminAction>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(!config.paused, EscrowError::MarketplacePaused);
    config.paused = true;

    msg!("Marketplace paused");
    emit!(PauseToggled { paused: true });

    Ok(())
}

pub fn unpause_handler(ctx: Context<AdminAction>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(config.paused, EscrowError::MarketplaceNotPaused);
    config.paused = false;

    msg!("Marketplace unpaused");
    emit!(PauseToggled { paused: false });

    Ok(())
}

pub fn transfer_ownership_handler(
    ctx: Context<AdminAction>,
    new_owner: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous_owner = config.owner;
    config.owner = new_owner;

    msg!("Ownership transferred from {} to {}", previous_owner, new_owner);
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}
