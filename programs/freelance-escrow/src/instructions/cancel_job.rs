use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::JobCancelled;
use crate::instructions::pay_from_escrow;
use crate::state::config::MarketplaceConfig;
use crate::state::enums::JobStatus;
use crate::state::job::Job;

// ──────────────────────────────────────────────────────
// Cancel Job — client withdraws an unaccepted posting
//
// Full refund, no fee. Only Open jobs can be cancelled; once a
// freelancer has accepted, the only exits are approval or dispute.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct CancelJob<'info> {
    /// The client cancelling; receives the refund
    #[account(mut)]
    pub client: Signer<'info>,

    /// Marketplace config — paused check
    #[account(
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The job to cancel
    #[account(
        mut,
        constraint = job.client == client.key() @ EscrowError::UnauthorizedClient,
        constraint = job.status == JobStatus::Open @ EscrowError::JobNotOpen,
        constraint = !job.funds_released @ EscrowError::FundsAlreadyReleased,
    )]
    pub job: Account<'info, Job>,
}

pub fn handler(ctx: Context<CancelJob>) -> Result<()> {
    let clock = Clock::get()?;

    // Effects before transfers
    let job = &mut ctx.accounts.job;
    let job_id = job.id;
    let refund = job.amount;
    job.funds_released = true;
    job.status = JobStatus::Cancelled;

    let job_info = ctx.accounts.job.to_account_info();
    pay_from_escrow(&job_info, &ctx.accounts.client.to_account_info(), refund)?;

    emit!(JobCancelled {
        job_id,
        client: ctx.accounts.client.key(),
        refund,
        cancelled_at: clock.unix_timestamp,
    });

    Ok(())
}
