use anchor_lang::prelude::*;

use crate::errors::EscrowError;
use crate::events::JobAccepted;
use crate::state::config::MarketplaceConfig;
use crate::state::enums::JobStatus;
use crate::state::job::Job;

// ──────────────────────────────────────────────────────
// Accept Job — a freelancer takes an open job
//
// First acceptance wins: the Open-status guard serializes competing
// accepts, the second caller sees InProgress and fails.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct AcceptJob<'info> {
    /// The freelancer accepting the job
    pub freelancer: Signer<'info>,

    /// Marketplace config — paused check
    #[account(
        seeds = [MarketplaceConfig::SEED],
        bump = config.bump,
        constraint = !config.paused @ EscrowError::MarketplacePaused,
    )]
    pub config: Account<'info, MarketplaceConfig>,

    /// The job to accept
    #[account(
        mut,
        constraint = job.status == JobStatus::Open @ EscrowError::JobNotOpen,
        constraint = job.client != freelancer.key() @ EscrowError::SelfAssignment,
    )]
    pub job: Account<'info, Job>,
}

pub fn handler(ctx: Context<AcceptJob>) -> Result<()> {
    let clock = Clock::get()?;
    let job = &mut ctx.accounts.job;

    job.freelancer = ctx.accounts.freelancer.key();
    job.status = JobStatus::InProgress;

    emit!(JobAccepted {
        job_id: job.id,
        freelancer: job.freelancer,
        accepted_at: clock.unix_timestamp,
    });

    Ok(())
}
