use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::JobCompleted;
use crate::instructions::pay_from_escrow;
use crate::state::config::MarketplaceConfig;
use crate::state::enums::JobStatus;
use crate::state::job::Job;

// ──────────────────────────────────────────────────────
// Approve Work — client accepts the deliverable
//
// Releases the escrow split: `amount - fee` to the freelancer and
// `fee` to the platform wallet, at the fee percentage in effect now
// (not at job creation). Status and the funds_released flag flip
// before any lamports move.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ApproveWork<'info> {
    /// The client approving the deliverable
    pub client: Signer<'info>,

    /// Marketplace config — paused check + current fee rate
    #[account(
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The job being approved
    #[account(
        mut,
        constraint = job.client == client.key() @ EscrowError::UnauthorizedClient,
        constraint = job.status == JobStatus::Submitted @ EscrowError::WorkNotSubmitted,
        constraint = !job.funds_released @ EscrowError::FundsAlreadyReleased,
    )]
    pub job: Account<'info, Job>,

    /// CHECK: Payout target; must match the ledger's freelancer record
    #[account(
        mut,
        constraint = freelancer.key() == job.freelancer @ EscrowError::InvalidRecipient,
    )]
    pub freelancer: UncheckedAccount<'info>,

    /// CHECK: Fee target; must match the config's platform wallet
    #[account(
        mut,
        constraint = platform_wallet.key() == config.platform_wallet @ EscrowError::InvalidPlatformWallet,
    )]
    pub platform_wallet: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<ApproveWork>) -> Result<()> {
    let clock = Clock::get()?;

    let (payout, fee) = ctx.accounts.config.split_payout(ctx.accounts.job.amount)?;

    // Effects before transfers
    let job = &mut ctx.accounts.job;
    let job_id = job.id;
    job.funds_released = true;
    job.status = JobStatus::Completed;

    let job_info = ctx.accounts.job.to_account_info();
    pay_from_escrow(&job_info, &ctx.accounts.freelancer.to_account_info(), payout)?;
    if fee > 0 {
        pay_from_escrow(
            &job_info,
            &ctx.accounts.platform_wallet.to_account_info(),
            fee,
        )?;
    }

    emit!(JobCompleted {
        job_id,
        freelancer_payout: payout,
        platform_fee: fee,
        completed_at: clock.unix_timestamp,
    });

    Ok(())
}
